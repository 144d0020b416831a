//! Task Detail Modal
//!
//! Edits a local `TaskDraft` seeded from the task at open time. Subtask
//! add/toggle/delete and text edits touch only the draft; Save commits the
//! whole draft through `update_task` and closes, Close discards it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::draft::TaskDraft;
use crate::models::{CardId, TaskId};
use crate::store::BoardStore;

/// Detail view for a single task
#[component]
pub fn TaskModal(
    store: BoardStore,
    card_id: CardId,
    task_id: TaskId,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    // Snapshot of the task as it is right now; the store stays untouched
    // until Save.
    let initial = store
        .task(card_id, task_id)
        .map(TaskDraft::from)
        .unwrap_or_default();
    let draft = RwSignal::new(initial);
    let (new_subtask_text, set_new_subtask_text) = signal(String::new());

    let add_subtask = move |_| {
        let text = new_subtask_text.get();
        if text.trim().is_empty() {
            return;
        }
        let id = store.fresh_id();
        if draft.write().add_subtask(id, &text).is_ok() {
            set_new_subtask_text.set(String::new());
        }
    };

    let save = move |_| {
        let committed = draft.get();
        if store
            .update_task(card_id, task_id, &committed.text, committed.subtasks)
            .is_ok()
        {
            on_close.run(());
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal-header">
                    <input
                        type="text"
                        class="modal-task-input"
                        prop:value=move || draft.with(|d| d.text.clone())
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            draft.write().text = input.value();
                        }
                    />
                    <button class="modal-close-btn" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>

                <h3 class="modal-section-title">"Subtasks"</h3>
                <ul class="subtask-list">
                    {move || {
                        draft
                            .with(|d| d.subtasks.clone())
                            .into_iter()
                            .map(|subtask| {
                                let subtask_id = subtask.id;
                                view! {
                                    <li class="subtask-row">
                                        <input
                                            type="checkbox"
                                            prop:checked=subtask.completed
                                            on:change=move |_| {
                                                let _ = draft.write().toggle_subtask(subtask_id);
                                            }
                                        />
                                        <span class="subtask-text">{subtask.text}</span>
                                        <button
                                            class="subtask-delete-btn"
                                            on:click=move |_| {
                                                let _ = draft.write().delete_subtask(subtask_id);
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>

                <div class="new-subtask-row">
                    <input
                        type="text"
                        class="new-subtask-input"
                        placeholder="New subtask..."
                        prop:value=move || new_subtask_text.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_new_subtask_text.set(input.value());
                        }
                    />
                    <button class="add-subtask-btn" on:click=add_subtask>"Add Subtask"</button>
                </div>

                <button class="modal-save-btn" on:click=save>"Save"</button>
            </div>
        </div>
    }
}
