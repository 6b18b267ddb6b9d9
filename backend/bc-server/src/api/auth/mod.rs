#[allow(clippy::module_inception)]
pub mod auth;
pub mod auth_response;
pub mod sign_in_request;
pub mod sign_up_request;
