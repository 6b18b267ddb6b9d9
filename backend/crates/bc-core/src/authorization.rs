use crate::{Club, CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Removing a member or deleting an invite is allowed for the club owner,
/// or for the user the row belongs to.
#[track_caller]
pub fn authorize_removal(
    requester_id: Uuid,
    club: &Club,
    target_user_id: Uuid,
) -> CoreErrorResult<()> {
    if club.is_owner(requester_id) || requester_id == target_user_id {
        return Ok(());
    }

    Err(CoreError::Forbidden {
        message: format!(
            "user {} may not remove user {} from club {}",
            requester_id, target_user_id, club.id
        ),
        location: ErrorLocation::from(Location::caller()),
    })
}
