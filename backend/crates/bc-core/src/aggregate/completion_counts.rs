use serde::Serialize;

/// Completed vs. remaining members for one chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionCounts {
    pub completed: i64,
    /// Active members minus completed. Not clamped: removed members keep
    /// their progress rows, so this can drop below zero.
    pub remaining: i64,
}

impl CompletionCounts {
    pub fn new(active_members: i64, completed: i64) -> Self {
        Self {
            completed,
            remaining: active_members - completed,
        }
    }
}
