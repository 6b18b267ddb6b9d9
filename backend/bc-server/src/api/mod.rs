pub mod auth;
pub mod clubs;
pub mod error;
pub mod extractors;
pub mod progress;
pub mod timeout;
pub mod users;
