pub mod club_dto;
pub mod club_response;
#[allow(clippy::module_inception)]
pub mod clubs;
pub mod member_dto;
