//! UI Components
//!
//! Leptos view components for the board surfaces.

mod card_column;
mod global_task_bar;
mod new_card_form;
mod task_item;
mod task_modal;

pub use card_column::CardColumn;
pub use global_task_bar::GlobalTaskBar;
pub use new_card_form::NewCardForm;
pub use task_item::TaskItem;
pub use task_modal::TaskModal;
