use crate::UserDto;

use serde::Serialize;

/// Identity token plus the user it was issued for
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}
