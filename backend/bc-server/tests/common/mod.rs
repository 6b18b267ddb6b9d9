#![allow(dead_code)]

use bc_auth::{RateLimitConfig, TokenCodec, password};
use bc_core::{Chapter, Club, Member, User};
use bc_db::{ChapterRepository, ClubRepository, MemberRepository, UserRepository};
use bc_server::{AppState, build_router};

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes!";
pub const TEST_PASSWORD: &str = "correct horse battery";

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

pub fn test_codec() -> TokenCodec {
    TokenCodec::with_hs256(TEST_SECRET, chrono::Duration::days(365))
}

pub async fn test_app() -> TestApp {
    test_app_with_limit(RateLimitConfig::default()).await
}

pub async fn test_app_with_limit(rate_limit: RateLimitConfig) -> TestApp {
    let pool = bc_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    let state = AppState::new(pool.clone(), test_codec(), rate_limit, Duration::from_secs(10));

    TestApp {
        router: build_router(state),
        pool,
    }
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }
}

pub fn token_for(user: &User) -> String {
    test_codec().issue(&user.id.to_string()).unwrap()
}

/// Inserts a user with email `<name>@example.com` and `TEST_PASSWORD`
pub async fn seed_user(pool: &SqlitePool, name: &str) -> User {
    let user = User::new(format!("{}@example.com", name), name.to_string());
    let hash = password::hash(TEST_PASSWORD).unwrap();
    UserRepository::new(pool.clone())
        .create(&user, &hash)
        .await
        .unwrap();
    user
}

/// Inserts a club with `owner` as its first member
pub async fn seed_club(pool: &SqlitePool, owner: &User) -> Club {
    let club = Club::new("Dune".to_string(), owner.id);
    ClubRepository::new(pool.clone()).create(&club).await.unwrap();
    seed_member(pool, &club, owner).await;
    club
}

pub async fn seed_member(pool: &SqlitePool, club: &Club, user: &User) -> Member {
    let member = Member::new(club.id, user.id);
    MemberRepository::new(pool.clone())
        .create(&member)
        .await
        .unwrap();
    member
}

pub async fn seed_chapter(pool: &SqlitePool, club: &Club, position: i32) -> Chapter {
    let chapter = Chapter::new(club.id, format!("Chapter {}", position), position);
    ChapterRepository::new(pool.clone())
        .create(&chapter)
        .await
        .unwrap();
    chapter
}
