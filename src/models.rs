//! Board Entities
//!
//! Plain data types for the board tree: Card -> Task -> Subtask.
//! Ids are stable `u32`s handed out by the store's counter; nothing is
//! ever keyed by position.

/// Card identifier, unique across the board's lifetime
pub type CardId = u32;
/// Task identifier, unique across the board's lifetime
pub type TaskId = u32;
/// Subtask identifier, unique across the board's lifetime
pub type SubtaskId = u32;

/// Default description given to newly created cards
pub const DEFAULT_CARD_DESCRIPTION: &str = "This is a new card";

/// A checkable sub-item of a task
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subtask {
    pub id: SubtaskId,
    pub text: String,
    pub completed: bool,
}

impl Subtask {
    pub fn new(id: SubtaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// A unit of work on a card, with an ordered subtask checklist
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub subtasks: Vec<Subtask>,
}

impl Task {
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            subtasks: Vec::new(),
        }
    }
}

/// A titled column holding an ordered list of tasks
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub description: String,
    pub tasks: Vec<Task>,
}

impl Card {
    /// Create a new card with no tasks and the default description
    pub fn new(id: CardId, title: String) -> Self {
        Self {
            id,
            title,
            description: DEFAULT_CARD_DESCRIPTION.to_string(),
            tasks: Vec::new(),
        }
    }
}

/// Which inline text field is currently in edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// A card's title
    CardTitle(CardId),
    /// A task's text (card id, task id)
    TaskText(CardId, TaskId),
}

impl EditTarget {
    /// Card the target lives on
    pub fn card_id(&self) -> CardId {
        match self {
            EditTarget::CardTitle(card_id) => *card_id,
            EditTarget::TaskText(card_id, _) => *card_id,
        }
    }
}
