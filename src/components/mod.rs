//! UI Components
//!
//! Leptos components for the task page.

mod delete_confirm_button;
mod error_banner;
mod header_bar;
mod new_task_form;
mod task_row;
mod task_section;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use header_bar::HeaderBar;
pub use new_task_form::NewTaskForm;
pub use task_row::TaskRow;
pub use task_section::TaskSection;
