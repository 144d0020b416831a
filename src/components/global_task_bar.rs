//! Global Task Bar Component
//!
//! Top bar with a task text input, an Add button and a card selector.
//! Add routes the text to the selected card; with no selection the store
//! rejects the call and the input is left as-is.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::BoardStore;

/// Global add-task control
#[component]
pub fn GlobalTaskBar(store: BoardStore) -> impl IntoView {
    let (task_text, set_task_text) = signal(String::new());

    let add_task = move |_| {
        let text = task_text.get();
        if text.trim().is_empty() {
            return;
        }
        if store.add_task_to_selection(&text).is_ok() {
            set_task_text.set(String::new());
        }
    };

    view! {
        <div class="global-task-bar">
            <input
                type="text"
                class="global-task-input"
                placeholder="Write task details"
                prop:value=move || task_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_task_text.set(input.value());
                }
            />
            <button class="global-add-btn" on:click=add_task>"Add"</button>
            <select
                class="card-select"
                prop:value=move || {
                    store
                        .selected_card()
                        .map(|id| id.to_string())
                        .unwrap_or_default()
                }
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    let _ = store.select_card(select.value().parse().ok());
                }
            >
                <option value="">"Select Card"</option>
                <For
                    each=move || {
                        store
                            .cards()
                            .into_iter()
                            .map(|card| (card.id, card.title))
                            .collect::<Vec<_>>()
                    }
                    key=|entry| entry.clone()
                    children=move |(id, title)| {
                        view! { <option value=id.to_string()>{title}</option> }
                    }
                />
            </select>
        </div>
    }
}
