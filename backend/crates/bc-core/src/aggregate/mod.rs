//! Pure aggregation over membership and progress records.
//!
//! Repositories load the rows; these functions only merge and count them so
//! the statistics can be tested without a database.

pub mod chapter_completion;
pub mod completion_counts;
pub mod member_chapter_count;
