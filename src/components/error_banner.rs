//! Error Banner Component

use leptos::prelude::*;

use crate::context::use_todo_store;

/// Last published error with a dismiss button
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_todo_store();

    move || store.error().map(|message| view! {
        <div class="error-banner" role="alert">
            <span>{message}</span>
            <button class="dismiss-btn" on:click=move |_| store.clear_error()>"×"</button>
        </div>
    })
}
