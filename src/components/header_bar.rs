//! Header Bar Component
//!
//! Counts, last-synced time, refresh and delete-all.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_todo_view;
use crate::format::format_synced;

#[component]
pub fn HeaderBar() -> impl IntoView {
    let page = use_todo_view();
    let store = page.store();

    let on_refresh = move |_| {
        spawn_local(async move {
            page.refresh().await;
        });
    };

    let clear_disabled = Signal::derive(move || page.clearing.get() || page.total_count() == 0);

    view! {
        <header class="header-bar">
            <h1>"タスク一覧"</h1>
            <p class="task-counts">
                {move || format!(
                    "全 {} 件 / 未完了 {} 件 / 完了 {} 件",
                    page.total_count(),
                    page.pending_count(),
                    page.completed_count(),
                )}
            </p>
            <p class="last-synced">
                "最終同期: " {move || format_synced(store.last_synced())}
            </p>
            <div class="header-actions">
                <button
                    class="refresh-btn"
                    disabled=move || store.is_loading()
                    on:click=on_refresh
                >
                    {move || if store.is_loading() { "読み込み中..." } else { "再読み込み" }}
                </button>
                <DeleteConfirmButton
                    button_class="delete-all-btn"
                    label="すべて削除"
                    disabled=clear_disabled
                    on_confirm=Callback::new(move |_| {
                        spawn_local(async move {
                            page.delete_all().await;
                        });
                    })
                />
            </div>
        </header>
    }
}
