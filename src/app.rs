//! Taskboard App
//!
//! Root component: owns the board store and lays out the global task bar,
//! the card row and the add-card control. Every child receives the store
//! handle as a prop.

use leptos::prelude::*;

use crate::components::{CardColumn, GlobalTaskBar, NewCardForm};
use crate::store::BoardStore;

#[component]
pub fn App() -> impl IntoView {
    let store = BoardStore::new();

    view! {
        <GlobalTaskBar store/>
        <div class="board-row">
            <For
                each=move || store.cards()
                key=|card| {
                    // Key on every mutable field so a changed card re-renders
                    (card.id, card.title.clone(), card.tasks.clone())
                }
                children=move |card| view! { <CardColumn store card/> }
            />
            <NewCardForm store/>
        </div>
    }
}
