use crate::ApiError;

use bc_auth::AuthError;
use bc_core::CoreError;
use bc_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn into_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = into_json(ApiError::not_found("Club not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Club not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::from(CoreError::Validation {
        message: "password must be at least 8 characters".into(),
        field: Some("password".into()),
        location: here(),
    });

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "password");
}

#[tokio::test]
async fn test_missing_header_is_401() {
    let error = ApiError::from(AuthError::MissingHeader { location: here() });

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "MISSING_AUTH_HEADER");
}

#[tokio::test]
async fn test_rejected_token_is_403() {
    for error in [
        AuthError::InvalidScheme { location: here() },
        AuthError::TokenExpired { location: here() },
        AuthError::InvalidToken {
            message: "InvalidSignature".into(),
            location: here(),
        },
    ] {
        let (status, json) = into_json(ApiError::from(error)).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["error"]["message"], "Invalid authorization credential");
    }
}

#[tokio::test]
async fn test_invalid_credentials_is_401() {
    let error = ApiError::from(AuthError::InvalidCredentials { location: here() });

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_rate_limit_is_429() {
    let error = ApiError::from(AuthError::RateLimitExceeded {
        limit: 5,
        window_secs: 60,
        location: here(),
    });

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_forbidden_core_error_through_db_is_403() {
    let error = ApiError::from(DbError::from(CoreError::Forbidden {
        message: "not owner".into(),
        location: here(),
    }));

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_conflict_is_409() {
    let error = ApiError::from(DbError::conflict("email is already registered"));

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["message"], "email is already registered");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let error = ApiError::from(DbError::Migration {
        message: "table users already exists".into(),
        location: here(),
    });

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Internal server error");
}

#[tokio::test]
async fn test_invalid_uuid_is_validation_error() {
    let error = ApiError::from(uuid::Uuid::parse_str("nope").unwrap_err());

    let (status, _) = into_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
