pub mod chapter_repository;
pub mod club_repository;
pub mod invite_repository;
pub mod member_repository;
pub mod progress_repository;
pub mod user_repository;

use crate::{DbError, Result as DbErrorResult};

use bc_core::ErrorLocation;

use std::panic::Location;

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::RowDecode {
        column: column.to_string(),
        message: format!("invalid UUID: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::RowDecode {
        column: column.to_string(),
        message: format!("unix seconds {} out of range", secs),
        location: ErrorLocation::from(Location::caller()),
    })
}
