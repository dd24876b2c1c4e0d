//! Application Context
//!
//! The task service and page state, provided via Leptos Context API.

use leptos::prelude::*;

use crate::store::TodoStore;
use crate::view::TodoView;

/// Provides the service and the view state built on it
pub fn provide_todo_context(store: TodoStore) -> TodoView {
    let view = TodoView::new(store);
    provide_context(store);
    provide_context(view);
    view
}

pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

pub fn use_todo_view() -> TodoView {
    expect_context::<TodoView>()
}
