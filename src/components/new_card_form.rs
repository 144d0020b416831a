//! New Card Form Component
//!
//! Two-phase card creation: an "+ Add Card" button while idle, a title
//! input while pending. Enter commits; Escape or blurring with an empty
//! input cancels without creating a card.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::BoardStore;

/// Add-card control at the end of the board row
#[component]
pub fn NewCardForm(store: BoardStore) -> impl IntoView {
    let (title, set_title) = signal(String::new());

    let commit = move || {
        // A rejected (blank) title leaves the entry open
        if store.add_card(&title.get()).is_ok() {
            set_title.set(String::new());
        }
    };

    let cancel = move || {
        set_title.set(String::new());
        store.cancel_card_entry();
    };

    view! {
        <Show
            when=move || store.adding_card()
            fallback=move || view! {
                <button class="add-card-btn" on:click=move |_| store.begin_card_entry()>
                    "+ Add Card"
                </button>
            }
        >
            <div class="new-card-form">
                <input
                    type="text"
                    class="new-card-input"
                    placeholder="Enter card title..."
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => {
                                ev.prevent_default();
                                commit();
                            }
                            "Escape" => cancel(),
                            _ => {}
                        }
                    }
                    on:blur=move |_| {
                        if title.get().trim().is_empty() {
                            cancel();
                        }
                    }
                />
            </div>
        </Show>
    }
}
