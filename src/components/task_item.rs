//! Task Item Component
//!
//! One task row: clicking the text opens the detail modal, the pencil
//! button enters inline edit. Enter or blur commits the edit; a blank
//! edit reverts to the committed text.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::TaskModal;
use crate::models::{CardId, EditTarget, Task};
use crate::store::BoardStore;

/// A single task row in a card's list
#[component]
pub fn TaskItem(store: BoardStore, card_id: CardId, task: Task) -> impl IntoView {
    let task_id = task.id;
    let (edit_text, set_edit_text) = signal(task.text.clone());
    let (modal_open, set_modal_open) = signal(false);

    let is_editing = move || store.editing() == Some(EditTarget::TaskText(card_id, task_id));

    // Inline edit keeps the task's current subtasks; only the detail view
    // replaces them.
    let submit = move || {
        let Some(current) = store.task(card_id, task_id) else {
            store.end_edit();
            return;
        };
        let result = store.update_task(card_id, task_id, &edit_text.get(), current.subtasks);
        if result.is_err() {
            // Blank edit: revert to the committed text
            set_edit_text.set(current.text);
        }
        store.end_edit();
    };

    let start_editing = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let Some(current) = store.task(card_id, task_id) {
            set_edit_text.set(current.text);
        }
        let _ = store.begin_edit(EditTarget::TaskText(card_id, task_id));
    };

    view! {
        <li class="task-item">
            <div
                class="task-body"
                on:click=move |_| {
                    if !is_editing() {
                        set_modal_open.set(true);
                    }
                }
            >
                <Show
                    when=is_editing
                    fallback=move || view! {
                        <span class="task-text">{move || edit_text.get()}</span>
                    }
                >
                    <input
                        type="text"
                        class="task-edit-input"
                        prop:value=move || edit_text.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_edit_text.set(input.value());
                        }
                        on:click=move |ev| ev.stop_propagation()
                        on:blur=move |_| submit()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit();
                            }
                        }
                    />
                </Show>
            </div>
            <button class="task-edit-btn" on:click=start_editing>"✎"</button>

            {move || {
                modal_open.get().then(|| view! {
                    <TaskModal
                        store
                        card_id
                        task_id
                        on_close=Callback::new(move |_| set_modal_open.set(false))
                    />
                })
            }}
        </li>
    }
}
