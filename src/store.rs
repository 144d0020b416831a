//! Board State Store
//!
//! The single in-memory state container behind every UI surface. Holds the
//! card tree, the monotonic id counter, and the transient UI state (pending
//! card entry, global add-task selection, inline edit target).
//!
//! All mutations are synchronous methods on [`BoardState`]; [`BoardStore`]
//! wraps the state in a Leptos reactive store and forwards each operation
//! inside a single write guard, so an operation is always one atomic state
//! transition. Validation failures return an error and leave the state
//! untouched.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::{BoardError, Result};
use crate::models::{Card, CardId, EditTarget, Subtask, Task, TaskId};

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// All cards, in creation order
    pub cards: Vec<Card>,
    /// Card-creation flow: true while the title entry is open
    pub adding_card: bool,
    /// Target of the global add-task control
    pub selected_card: Option<CardId>,
    /// Which inline text field is in edit mode, if any
    pub editing: Option<EditTarget>,
    /// Monotonic id counter shared by cards, tasks and subtasks
    pub next_id: u32,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next unique id
    pub fn fresh_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    // ========================
    // Card operations
    // ========================

    /// Open the card title entry. Idempotent while already open.
    pub fn begin_card_entry(&mut self) {
        self.adding_card = true;
    }

    /// Abandon the card title entry without creating a card
    pub fn cancel_card_entry(&mut self) {
        self.adding_card = false;
    }

    /// Commit the card title entry, appending a new card.
    ///
    /// A blank title is rejected and leaves the entry open.
    pub fn add_card(&mut self, title: &str) -> Result<CardId> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        let id = self.fresh_id();
        self.cards.push(Card::new(id, title.to_string()));
        self.adding_card = false;
        Ok(id)
    }

    /// Remove a card and its whole subtree.
    ///
    /// Also clears the global selection and any inline edit pointing into
    /// the deleted card, so no transient state dangles.
    pub fn delete_card(&mut self, card_id: CardId) -> Result<()> {
        if !self.cards.iter().any(|card| card.id == card_id) {
            return Err(BoardError::CardNotFound(card_id));
        }
        self.cards.retain(|card| card.id != card_id);
        if self.selected_card == Some(card_id) {
            self.selected_card = None;
        }
        if self.editing.is_some_and(|target| target.card_id() == card_id) {
            self.editing = None;
        }
        Ok(())
    }

    /// Replace a card's title. A blank title is rejected and the prior
    /// title is retained.
    pub fn update_title(&mut self, card_id: CardId, title: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        let card = self.card_mut(card_id)?;
        card.title = title.to_string();
        Ok(())
    }

    // ========================
    // Task operations
    // ========================

    /// Append a new task to a card
    pub fn add_task(&mut self, card_id: CardId, text: &str) -> Result<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::EmptyText);
        }
        // Existence check before taking an id, so a rejected call burns nothing
        self.card_mut(card_id)?;
        let id = self.fresh_id();
        let task = Task::new(id, text.to_string());
        self.card_mut(card_id)?.tasks.push(task);
        Ok(id)
    }

    /// Replace a task's text and its entire subtask list in one update.
    ///
    /// Blank text rejects the whole update; partial application (text but
    /// not subtasks, or the reverse) is never observable.
    pub fn update_task(
        &mut self,
        card_id: CardId,
        task_id: TaskId,
        text: &str,
        subtasks: Vec<Subtask>,
    ) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::EmptyText);
        }
        let task = self.task_mut(card_id, task_id)?;
        task.text = text.to_string();
        task.subtasks = subtasks;
        Ok(())
    }

    /// Global add-task control: append a task to the selected card
    pub fn add_task_to_selection(&mut self, text: &str) -> Result<TaskId> {
        let card_id = self.selected_card.ok_or(BoardError::NoCardSelected)?;
        self.add_task(card_id, text)
    }

    // ========================
    // Selection / edit state
    // ========================

    /// Set or clear the global add-task target
    pub fn select_card(&mut self, card_id: Option<CardId>) -> Result<()> {
        if let Some(id) = card_id {
            if !self.cards.iter().any(|card| card.id == id) {
                return Err(BoardError::CardNotFound(id));
            }
        }
        self.selected_card = card_id;
        Ok(())
    }

    /// Put an inline text field into edit mode
    pub fn begin_edit(&mut self, target: EditTarget) -> Result<()> {
        match target {
            EditTarget::CardTitle(card_id) => {
                self.card(card_id).ok_or(BoardError::CardNotFound(card_id))?;
            }
            EditTarget::TaskText(card_id, task_id) => {
                self.task(card_id, task_id)
                    .ok_or(BoardError::TaskNotFound(task_id))?;
            }
        }
        self.editing = Some(target);
        Ok(())
    }

    /// Leave inline edit mode
    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    // ========================
    // Queries
    // ========================

    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == card_id)
    }

    pub fn task(&self, card_id: CardId, task_id: TaskId) -> Option<&Task> {
        self.card(card_id)?
            .tasks
            .iter()
            .find(|task| task.id == task_id)
    }

    fn card_mut(&mut self, card_id: CardId) -> Result<&mut Card> {
        self.cards
            .iter_mut()
            .find(|card| card.id == card_id)
            .ok_or(BoardError::CardNotFound(card_id))
    }

    fn task_mut(&mut self, card_id: CardId, task_id: TaskId) -> Result<&mut Task> {
        self.card_mut(card_id)?
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or(BoardError::TaskNotFound(task_id))
    }
}

/// Copyable handle to the reactive board store.
///
/// Passed to components as a prop; every view reads snapshots through it
/// and issues mutations through it.
#[derive(Clone, Copy)]
pub struct BoardStore {
    state: Store<BoardState>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self {
            state: Store::new(BoardState::new()),
        }
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        let mut state = self.state.write();
        f(&mut state)
    }

    // Reactive reads

    pub fn cards(&self) -> Vec<Card> {
        self.state.cards().get()
    }

    pub fn card(&self, card_id: CardId) -> Option<Card> {
        self.state
            .cards()
            .read()
            .iter()
            .find(|card| card.id == card_id)
            .cloned()
    }

    pub fn task(&self, card_id: CardId, task_id: TaskId) -> Option<Task> {
        self.state
            .cards()
            .read()
            .iter()
            .find(|card| card.id == card_id)?
            .tasks
            .iter()
            .find(|task| task.id == task_id)
            .cloned()
    }

    pub fn adding_card(&self) -> bool {
        self.state.adding_card().get()
    }

    pub fn selected_card(&self) -> Option<CardId> {
        self.state.selected_card().get()
    }

    pub fn editing(&self) -> Option<EditTarget> {
        self.state.editing().get()
    }

    // Mutations

    pub fn fresh_id(&self) -> u32 {
        // Touches only the counter field, so handing an id to the detail
        // view's draft does not re-render the board.
        let next_id = self.state.next_id();
        let mut next = next_id.write();
        *next += 1;
        *next
    }

    pub fn begin_card_entry(&self) {
        self.with_mut(|state| state.begin_card_entry());
    }

    pub fn cancel_card_entry(&self) {
        self.with_mut(|state| state.cancel_card_entry());
    }

    pub fn add_card(&self, title: &str) -> Result<CardId> {
        self.with_mut(|state| state.add_card(title))
    }

    pub fn delete_card(&self, card_id: CardId) -> Result<()> {
        self.with_mut(|state| state.delete_card(card_id))
            .inspect_err(warn)
    }

    pub fn update_title(&self, card_id: CardId, title: &str) -> Result<()> {
        self.with_mut(|state| state.update_title(card_id, title))
    }

    pub fn add_task(&self, card_id: CardId, text: &str) -> Result<TaskId> {
        self.with_mut(|state| state.add_task(card_id, text))
    }

    pub fn update_task(
        &self,
        card_id: CardId,
        task_id: TaskId,
        text: &str,
        subtasks: Vec<Subtask>,
    ) -> Result<()> {
        self.with_mut(|state| state.update_task(card_id, task_id, text, subtasks))
            .inspect_err(warn)
    }

    pub fn add_task_to_selection(&self, text: &str) -> Result<TaskId> {
        self.with_mut(|state| state.add_task_to_selection(text))
            .inspect_err(warn)
    }

    pub fn select_card(&self, card_id: Option<CardId>) -> Result<()> {
        self.with_mut(|state| state.select_card(card_id))
            .inspect_err(warn)
    }

    pub fn begin_edit(&self, target: EditTarget) -> Result<()> {
        self.with_mut(|state| state.begin_edit(target))
            .inspect_err(warn)
    }

    pub fn end_edit(&self) {
        self.with_mut(|state| state.end_edit());
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

fn warn(err: &BoardError) {
    web_sys::console::warn_1(&format!("[BOARD] rejected: {}", err).into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::TaskDraft;
    use crate::models::DEFAULT_CARD_DESCRIPTION;

    fn board_with_cards(titles: &[&str]) -> (BoardState, Vec<CardId>) {
        let mut state = BoardState::new();
        let ids = titles
            .iter()
            .map(|title| {
                state.begin_card_entry();
                state.add_card(title).expect("card should be created")
            })
            .collect();
        (state, ids)
    }

    #[test]
    fn test_add_cards_in_order_with_unique_ids() {
        let (state, ids) = board_with_cards(&["Backlog", "Doing", "Done"]);
        assert_eq!(state.cards.len(), 3);
        assert_eq!(state.cards[0].title, "Backlog");
        assert_eq!(state.cards[1].title, "Doing");
        assert_eq!(state.cards[2].title, "Done");
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_eq!(state.cards[0].description, DEFAULT_CARD_DESCRIPTION);
    }

    #[test]
    fn test_card_entry_is_two_phase() {
        let mut state = BoardState::new();
        assert!(!state.adding_card);
        state.begin_card_entry();
        assert!(state.adding_card);
        // Idempotent while pending
        state.begin_card_entry();
        assert!(state.adding_card);

        // Blank title is rejected and leaves the entry open
        assert_eq!(state.add_card("   "), Err(BoardError::EmptyTitle));
        assert!(state.adding_card);
        assert!(state.cards.is_empty());

        // Commit closes the entry
        state.add_card("Backlog").unwrap();
        assert!(!state.adding_card);
        assert_eq!(state.cards.len(), 1);
    }

    #[test]
    fn test_cancel_card_entry_creates_nothing() {
        let mut state = BoardState::new();
        state.begin_card_entry();
        state.cancel_card_entry();
        assert!(!state.adding_card);
        assert!(state.cards.is_empty());
    }

    #[test]
    fn test_add_card_trims_title() {
        let (state, _) = board_with_cards(&["  Backlog  "]);
        assert_eq!(state.cards[0].title, "Backlog");
    }

    #[test]
    fn test_delete_card_keeps_sibling_order_and_ids() {
        let (mut state, ids) = board_with_cards(&["A", "B", "C"]);
        state.delete_card(ids[1]).unwrap();
        assert_eq!(state.cards.len(), 2);
        assert_eq!(state.cards[0].id, ids[0]);
        assert_eq!(state.cards[1].id, ids[2]);
        assert_eq!(state.cards[0].title, "A");
        assert_eq!(state.cards[1].title, "C");
    }

    #[test]
    fn test_delete_unknown_card_reports_not_found() {
        let (mut state, _) = board_with_cards(&["A"]);
        assert_eq!(state.delete_card(999), Err(BoardError::CardNotFound(999)));
        assert_eq!(state.cards.len(), 1);
    }

    #[test]
    fn test_delete_card_cascades_to_tasks_and_subtasks() {
        let (mut state, ids) = board_with_cards(&["A"]);
        let task_id = state.add_task(ids[0], "task").unwrap();
        let subtask_id = state.fresh_id();
        let subtasks = vec![Subtask::new(subtask_id, "sub".to_string())];
        state.update_task(ids[0], task_id, "task", subtasks).unwrap();

        state.delete_card(ids[0]).unwrap();
        assert!(state.cards.is_empty());
        assert!(state.card(ids[0]).is_none());
        assert!(state.task(ids[0], task_id).is_none());
    }

    #[test]
    fn test_delete_card_clears_selection_and_edit_state() {
        let (mut state, ids) = board_with_cards(&["A", "B"]);
        let task_id = state.add_task(ids[0], "task").unwrap();
        state.select_card(Some(ids[0])).unwrap();
        state.begin_edit(EditTarget::TaskText(ids[0], task_id)).unwrap();

        state.delete_card(ids[0]).unwrap();
        assert_eq!(state.selected_card, None);
        assert_eq!(state.editing, None);

        // Deleting an unrelated card leaves the state of others alone
        state.select_card(Some(ids[1])).unwrap();
        state.begin_edit(EditTarget::CardTitle(ids[1])).unwrap();
        assert_eq!(state.selected_card, Some(ids[1]));
        assert_eq!(state.editing, Some(EditTarget::CardTitle(ids[1])));
    }

    #[test]
    fn test_update_title() {
        let (mut state, ids) = board_with_cards(&["Old"]);
        state.update_title(ids[0], "New").unwrap();
        assert_eq!(state.cards[0].title, "New");
    }

    #[test]
    fn test_blank_title_update_never_changes_stored_title() {
        let (mut state, ids) = board_with_cards(&["Keep me"]);
        assert_eq!(state.update_title(ids[0], ""), Err(BoardError::EmptyTitle));
        assert_eq!(state.update_title(ids[0], "   "), Err(BoardError::EmptyTitle));
        assert_eq!(state.cards[0].title, "Keep me");
    }

    #[test]
    fn test_update_title_unknown_card() {
        let mut state = BoardState::new();
        assert_eq!(
            state.update_title(42, "title"),
            Err(BoardError::CardNotFound(42))
        );
    }

    #[test]
    fn test_add_task_appends_with_fresh_id() {
        let (mut state, ids) = board_with_cards(&["A"]);
        let first = state.add_task(ids[0], "one").unwrap();
        let second = state.add_task(ids[0], "two").unwrap();
        assert_ne!(first, second);
        let card = state.card(ids[0]).unwrap();
        assert_eq!(card.tasks.len(), 2);
        assert_eq!(card.tasks[0].text, "one");
        assert_eq!(card.tasks[1].text, "two");
        assert!(card.tasks[0].subtasks.is_empty());
    }

    #[test]
    fn test_add_task_rejects_blank_text() {
        let (mut state, ids) = board_with_cards(&["A"]);
        assert_eq!(state.add_task(ids[0], "  "), Err(BoardError::EmptyText));
        assert!(state.card(ids[0]).unwrap().tasks.is_empty());
    }

    #[test]
    fn test_add_task_unknown_card() {
        let mut state = BoardState::new();
        assert_eq!(state.add_task(5, "text"), Err(BoardError::CardNotFound(5)));
    }

    #[test]
    fn test_update_task_replaces_text_and_subtasks_together() {
        let (mut state, ids) = board_with_cards(&["A"]);
        let task_id = state.add_task(ids[0], "before").unwrap();
        let subtask_id = state.fresh_id();
        let subtasks = vec![Subtask::new(subtask_id, "step".to_string())];

        state
            .update_task(ids[0], task_id, "after", subtasks.clone())
            .unwrap();
        let task = state.task(ids[0], task_id).unwrap();
        assert_eq!(task.text, "after");
        assert_eq!(task.subtasks, subtasks);
    }

    #[test]
    fn test_update_task_rejects_blank_text_without_touching_subtasks() {
        let (mut state, ids) = board_with_cards(&["A"]);
        let task_id = state.add_task(ids[0], "before").unwrap();
        let subtask_id = state.fresh_id();
        let subtasks = vec![Subtask::new(subtask_id, "step".to_string())];

        assert_eq!(
            state.update_task(ids[0], task_id, " ", subtasks),
            Err(BoardError::EmptyText)
        );
        let task = state.task(ids[0], task_id).unwrap();
        assert_eq!(task.text, "before");
        assert!(task.subtasks.is_empty());
    }

    #[test]
    fn test_update_task_unknown_task() {
        let (mut state, ids) = board_with_cards(&["A"]);
        assert_eq!(
            state.update_task(ids[0], 77, "text", Vec::new()),
            Err(BoardError::TaskNotFound(77))
        );
    }

    #[test]
    fn test_select_card() {
        let (mut state, ids) = board_with_cards(&["A"]);
        state.select_card(Some(ids[0])).unwrap();
        assert_eq!(state.selected_card, Some(ids[0]));
        state.select_card(None).unwrap();
        assert_eq!(state.selected_card, None);
        assert_eq!(
            state.select_card(Some(999)),
            Err(BoardError::CardNotFound(999))
        );
        assert_eq!(state.selected_card, None);
    }

    #[test]
    fn test_global_add_task_routes_to_selected_card_only() {
        let (mut state, ids) = board_with_cards(&["Backlog", "Done"]);
        state.select_card(Some(ids[0])).unwrap();
        state.add_task_to_selection("Review PR").unwrap();

        let backlog = state.card(ids[0]).unwrap();
        assert_eq!(backlog.tasks.len(), 1);
        assert_eq!(backlog.tasks[0].text, "Review PR");
        assert!(state.card(ids[1]).unwrap().tasks.is_empty());
    }

    #[test]
    fn test_global_add_task_without_selection() {
        let (mut state, ids) = board_with_cards(&["A"]);
        assert_eq!(
            state.add_task_to_selection("text"),
            Err(BoardError::NoCardSelected)
        );
        assert!(state.card(ids[0]).unwrap().tasks.is_empty());
    }

    #[test]
    fn test_begin_edit_validates_target() {
        let (mut state, ids) = board_with_cards(&["A"]);
        let task_id = state.add_task(ids[0], "task").unwrap();

        state.begin_edit(EditTarget::CardTitle(ids[0])).unwrap();
        assert_eq!(state.editing, Some(EditTarget::CardTitle(ids[0])));
        state.begin_edit(EditTarget::TaskText(ids[0], task_id)).unwrap();
        state.end_edit();
        assert_eq!(state.editing, None);

        assert_eq!(
            state.begin_edit(EditTarget::CardTitle(999)),
            Err(BoardError::CardNotFound(999))
        );
        assert_eq!(
            state.begin_edit(EditTarget::TaskText(ids[0], 999)),
            Err(BoardError::TaskNotFound(999))
        );
    }

    #[test]
    fn test_ids_stay_unique_under_rapid_creation() {
        let mut state = BoardState::new();
        let mut ids = Vec::new();
        for i in 0..50 {
            state.begin_card_entry();
            let card_id = state.add_card(&format!("card {i}")).unwrap();
            ids.push(card_id);
            for j in 0..4 {
                ids.push(state.add_task(card_id, &format!("task {j}")).unwrap());
            }
            ids.push(state.fresh_id());
        }
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_store_handle_hands_out_unique_ids() {
        // The handle's counter shares the id space with card/task creation
        let store = BoardStore::new();
        let card_id = store.add_card("Backlog").unwrap();
        let task_id = store.add_task(card_id, "task").unwrap();
        let draft_id = store.fresh_id();
        let next_draft_id = store.fresh_id();

        let mut ids = vec![card_id, task_id, draft_id, next_draft_id];
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_detail_view_scenario_saves_draft_atomically() {
        // Create card "Backlog", add task "Write spec", open the detail
        // view, add subtask "Draft §1", toggle it complete, save.
        let (mut state, ids) = board_with_cards(&["Backlog"]);
        let task_id = state.add_task(ids[0], "Write spec").unwrap();

        let mut draft = TaskDraft::from(state.task(ids[0], task_id).unwrap());
        let subtask_id = state.fresh_id();
        draft.add_subtask(subtask_id, "Draft §1").unwrap();
        draft.toggle_subtask(subtask_id).unwrap();
        state
            .update_task(ids[0], task_id, &draft.text, draft.subtasks)
            .unwrap();

        let task = state.task(ids[0], task_id).unwrap();
        assert_eq!(task.text, "Write spec");
        assert_eq!(task.subtasks.len(), 1);
        assert_eq!(task.subtasks[0].text, "Draft §1");
        assert!(task.subtasks[0].completed);
    }

    #[test]
    fn test_discarded_draft_leaves_task_untouched() {
        let (mut state, ids) = board_with_cards(&["Backlog"]);
        let task_id = state.add_task(ids[0], "Write spec").unwrap();
        let before = state.task(ids[0], task_id).unwrap().clone();

        let mut draft = TaskDraft::from(&before);
        let subtask_id = state.fresh_id();
        draft.add_subtask(subtask_id, "scratch").unwrap();
        draft.text = "scribble".to_string();
        drop(draft);

        assert_eq!(state.task(ids[0], task_id).unwrap(), &before);
    }
}
