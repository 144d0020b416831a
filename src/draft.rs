//! Task Detail Draft
//!
//! The detail view edits a local copy of a task, never the store. The
//! draft is seeded from a task snapshot when the view opens, mutated by
//! subtask add/toggle/delete and text edits, and either committed whole
//! through `BoardStore::update_task` or dropped on close.

use crate::error::{BoardError, Result};
use crate::models::{Subtask, SubtaskId, Task};

/// Local, uncommitted copy of a task's editable fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub text: String,
    pub subtasks: Vec<Subtask>,
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            text: task.text.clone(),
            subtasks: task.subtasks.clone(),
        }
    }
}

impl From<Task> for TaskDraft {
    fn from(task: Task) -> Self {
        Self {
            text: task.text,
            subtasks: task.subtasks,
        }
    }
}

impl TaskDraft {
    /// Append a subtask. The id comes from the board's counter
    /// (`BoardStore::fresh_id`), keeping ids unique across the board.
    pub fn add_subtask(&mut self, id: SubtaskId, text: &str) -> Result<SubtaskId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::EmptyText);
        }
        self.subtasks.push(Subtask::new(id, text.to_string()));
        Ok(id)
    }

    /// Remove a subtask by id
    pub fn delete_subtask(&mut self, id: SubtaskId) -> Result<()> {
        let before = self.subtasks.len();
        self.subtasks.retain(|subtask| subtask.id != id);
        if self.subtasks.len() == before {
            return Err(BoardError::SubtaskNotFound(id));
        }
        Ok(())
    }

    /// Flip a subtask's completed flag
    pub fn toggle_subtask(&mut self, id: SubtaskId) -> Result<()> {
        let subtask = self
            .subtasks
            .iter_mut()
            .find(|subtask| subtask.id == id)
            .ok_or(BoardError::SubtaskNotFound(id))?;
        subtask.completed = !subtask.completed;
        Ok(())
    }
}
