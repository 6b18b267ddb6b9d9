use crate::{
    AppState, chapter_completion, chapter_counts, delete_invite, get_club, get_me, health,
    mark_chapter_complete, member_progress, remove_member, sign_in, sign_up,
    unmark_chapter_complete,
};

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Auth
        .route("/api/v1/auth/sign-in", post(sign_in))
        .route("/api/v1/auth/sign-up", post(sign_up))
        .route("/api/v1/users/me", get(get_me))
        // Clubs
        .route("/api/v1/clubs/{club_id}", get(get_club))
        .route("/api/v1/clubs/{club_id}/progress", get(member_progress))
        .route(
            "/api/v1/clubs/{club_id}/members/{member_id}",
            delete(remove_member),
        )
        .route(
            "/api/v1/clubs/{club_id}/invites/{invite_id}",
            delete(delete_invite),
        )
        // Chapters
        .route(
            "/api/v1/clubs/{club_id}/chapters/{chapter_id}/completion",
            get(chapter_completion),
        )
        .route(
            "/api/v1/clubs/{club_id}/chapters/{chapter_id}/counts",
            get(chapter_counts),
        )
        .route(
            "/api/v1/clubs/{club_id}/chapters/{chapter_id}/progress",
            put(mark_chapter_complete).delete(unmark_chapter_complete),
        )
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
