//! UI Components
//!
//! Leptos components for the project/task board.

mod title_bar;
mod status_banner;
mod search_bar;
mod project_list;
mod task_panel;
mod form_modal;
mod delete_confirm_button;

pub use title_bar::TitleBar;
pub use status_banner::StatusBanner;
pub use search_bar::SearchBar;
pub use project_list::ProjectList;
pub use task_panel::TaskPanel;
pub use form_modal::FormModal;
pub use delete_confirm_button::DeleteConfirmButton;
