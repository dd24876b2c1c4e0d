//! Todo Frontend App
//!
//! Page shell: builds the task service, provides it via context and loads
//! the list once on mount.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_api::HttpTodoApi;

use crate::components::{ErrorBanner, HeaderBar, NewTaskForm, TaskSection};
use crate::config::AppConfig;
use crate::context::provide_todo_context;
use crate::store::TodoStore;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_window();
    tracing::info!(api = %config.api_base_url, "using task API");

    let store = TodoStore::new(Arc::new(HttpTodoApi::new(config.api_base_url)));
    let page = provide_todo_context(store);

    // Initial load
    Effect::new(move |_| {
        spawn_local(async move {
            page.refresh().await;
        });
    });

    view! {
        <div class="app-layout">
            <HeaderBar />
            <ErrorBanner />

            <main class="main-content">
                <NewTaskForm />

                <TaskSection
                    title="未完了"
                    tasks=page.pending
                    empty_text="未完了のタスクはありません。"
                />
                <TaskSection
                    title="完了"
                    tasks=page.completed
                    empty_text="完了したタスクはありません。"
                />
            </main>
        </div>
    }
}
