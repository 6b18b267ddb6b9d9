pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{sign_in, sign_up},
        auth_response::AuthResponse,
        sign_in_request::SignInRequest,
        sign_up_request::SignUpRequest,
    },
    clubs::{
        club_dto::ClubDto,
        club_response::ClubResponse,
        clubs::{delete_invite, get_club, remove_member},
        member_dto::MemberDto,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::AuthenticatedUser,
    progress::{
        chapter_completion_response::{ChapterCompletionResponse, MemberCompletionDto},
        member_progress_response::{MemberProgressDto, MemberProgressResponse},
        progress::{
            chapter_completion, chapter_counts, mark_chapter_complete, member_progress,
            unmark_chapter_complete,
        },
    },
    timeout::with_timeout,
    users::{user_dto::UserDto, users::get_me},
};
pub use app_state::AppState;
pub use metrics::Metrics;

pub use crate::routes::build_router;
