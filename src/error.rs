//! Error types for board operations
//!
//! Every failure mode is a local validation rejection: the operation does
//! not apply and the caller keeps or reverts its own draft.

use thiserror::Error;

use crate::models::{CardId, SubtaskId, TaskId};

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Card title was empty after trimming
    #[error("card title is empty")]
    EmptyTitle,

    /// Task or subtask text was empty after trimming
    #[error("text is empty")]
    EmptyText,

    /// Card not found
    #[error("card not found: {0}")]
    CardNotFound(CardId),

    /// Task not found on the given card
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Subtask not found in the draft
    #[error("subtask not found: {0}")]
    SubtaskNotFound(SubtaskId),

    /// Global add-task was invoked with no card selected
    #[error("no card selected")]
    NoCardSelected,
}
