pub mod aggregate;
pub mod authorization;
pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use aggregate::chapter_completion::{MemberChapterCompletion, ProgressMark, chapter_checklist};
pub use aggregate::completion_counts::CompletionCounts;
pub use aggregate::member_chapter_count::{MemberChapterCount, summarize_member_progress};
pub use authorization::authorize_removal;
pub use error::{CoreError, Result};
pub use models::chapter::Chapter;
pub use models::club::Club;
pub use models::club_member::ClubMember;
pub use models::invite::Invite;
pub use models::member::Member;
pub use models::membership_context::MembershipContext;
pub use models::progress::Progress;
pub use models::user::User;

pub use error_location::ErrorLocation;
