pub mod connection;
pub mod error;
pub mod repositories;
pub mod services;


pub use connection::database::{connect, connect_in_memory};
pub use error::{DbError, Result};
pub use repositories::chapter_repository::ChapterRepository;
pub use repositories::club_repository::ClubRepository;
pub use repositories::invite_repository::InviteRepository;
pub use repositories::member_repository::MemberRepository;
pub use repositories::progress_repository::ProgressRepository;
pub use repositories::user_repository::UserRepository;
pub use services::membership_resolver::MembershipResolver;
pub use services::progress_aggregator::ProgressAggregator;
pub use services::progress_recorder::ProgressRecorder;
