pub mod chapter;
pub mod club;
pub mod club_member;
pub mod invite;
pub mod member;
pub mod membership_context;
pub mod progress;
pub mod user;
