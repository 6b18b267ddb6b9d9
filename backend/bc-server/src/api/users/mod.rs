pub mod user_dto;
#[allow(clippy::module_inception)]
pub mod users;
