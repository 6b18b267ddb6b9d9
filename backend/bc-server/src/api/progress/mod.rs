pub mod chapter_completion_response;
pub mod member_progress_response;
#[allow(clippy::module_inception)]
pub mod progress;
