//! New Task Form Component
//!
//! Title input with inline validation; blank titles never reach the server.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_todo_view;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let page = use_todo_view();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            page.add().await;
        });
    };

    view! {
        <form class="new-task-form" on:submit=on_submit>
            <div class="new-task-row">
                <input
                    type="text"
                    placeholder="新しいタスクを入力..."
                    prop:value=move || page.new_title.get()
                    on:input=move |ev| page.set_new_title(event_target_value(&ev))
                    disabled=move || page.adding.get()
                />
                <button type="submit" disabled=move || page.adding.get()>
                    {move || if page.adding.get() { "追加中..." } else { "追加" }}
                </button>
            </div>
            {move || page.validation.get().map(|message| view! {
                <p class="validation-message">{message}</p>
            })}
        </form>
    }
}
