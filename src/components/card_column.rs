//! Card Column Component
//!
//! One card on the board: inline-editable title, options menu with
//! delete, the task list, and a per-card add-task input.
//!
//! The column is re-created by the parent `For` whenever the card's data
//! changes, so the props are plain snapshots.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::TaskItem;
use crate::models::{Card, EditTarget};
use crate::store::BoardStore;

/// A single card column
#[component]
pub fn CardColumn(store: BoardStore, card: Card) -> impl IntoView {
    let card_id = card.id;
    // Local title draft; diverges from the stored title only while editing
    let (title_text, set_title_text) = signal(card.title.clone());
    let (new_task_text, set_new_task_text) = signal(String::new());
    let (show_menu, set_show_menu) = signal(false);

    let is_editing_title = move || store.editing() == Some(EditTarget::CardTitle(card_id));

    let submit_title = move || {
        if store.update_title(card_id, &title_text.get()).is_err() {
            // Blank edit: revert to the stored title rather than clearing
            if let Some(current) = store.card(card_id) {
                set_title_text.set(current.title);
            }
        }
        store.end_edit();
    };

    let add_task = move |_| {
        let text = new_task_text.get();
        if text.trim().is_empty() {
            return;
        }
        if store.add_task(card_id, &text).is_ok() {
            set_new_task_text.set(String::new());
        }
    };

    view! {
        <div class="card-column">
            <div class="card-header">
                <Show
                    when=is_editing_title
                    fallback=move || view! {
                        <h3
                            class="card-title"
                            on:click=move |_| {
                                let _ = store.begin_edit(EditTarget::CardTitle(card_id));
                            }
                        >
                            {move || title_text.get()}
                        </h3>
                    }
                >
                    <input
                        type="text"
                        class="card-title-input"
                        prop:value=move || title_text.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_title_text.set(input.value());
                        }
                        on:blur=move |_| submit_title()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit_title();
                            }
                        }
                    />
                </Show>

                <div class="card-menu">
                    <button
                        class="card-menu-btn"
                        on:click=move |_| set_show_menu.update(|open| *open = !*open)
                    >
                        "⋯"
                    </button>
                    <Show when=move || show_menu.get()>
                        <div class="card-menu-dropdown">
                            <button
                                class="card-delete-btn"
                                on:click=move |_| {
                                    let _ = store.delete_card(card_id);
                                }
                            >
                                "Delete"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>

            <ul class="task-list">
                {card
                    .tasks
                    .iter()
                    .cloned()
                    .map(|task| view! { <TaskItem store card_id task/> })
                    .collect_view()}
            </ul>

            <div class="new-task-row">
                <input
                    type="text"
                    class="new-task-input"
                    placeholder="New task..."
                    prop:value=move || new_task_text.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_task_text.set(input.value());
                    }
                />
                <button class="add-task-btn" on:click=add_task>"Add"</button>
            </div>
        </div>
    }
}
