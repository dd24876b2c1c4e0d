//! Task Row Component
//!
//! One task with completion checkbox, inline title editor, timestamps and
//! row actions. Controls are disabled while the row has a request in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_api::Task;

use crate::components::DeleteConfirmButton;
use crate::context::use_todo_view;
use crate::format::format_timestamp;
use crate::view::EditState;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let page = use_todo_view();

    let id = task.id;
    let completed = task.completed;
    let busy = Signal::derive(move || page.is_mutating(id));
    let editing = move || page.is_editing(id);

    let created = format_timestamp(task.created_at.as_deref());
    let updated = format_timestamp(task.updated_at.as_deref());
    let title = task.title.clone();
    let edit_task = task.clone();
    let button_task = task;

    let on_toggle = move |_| {
        spawn_local(async move {
            page.toggle(id, completed).await;
        });
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            page.submit_edit().await;
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            page.cancel_edit();
        }
    };

    let draft = move || match page.edit.get() {
        EditState::Editing { draft, .. } => draft,
        EditState::Idle => String::new(),
    };

    view! {
        <li class=move || {
            let mut class = String::from("task-row");
            if completed { class.push_str(" completed"); }
            if busy.get() { class.push_str(" busy"); }
            class
        }>
            <input
                type="checkbox"
                prop:checked=completed
                disabled=move || busy.get()
                on:change=on_toggle
            />

            {move || if editing() {
                view! {
                    <form class="task-edit-form" on:submit=on_save>
                        <input
                            type="text"
                            class="task-edit-input"
                            prop:value=draft
                            on:input=move |ev| page.set_draft(event_target_value(&ev))
                            on:keydown=on_keydown
                            disabled=move || busy.get()
                        />
                        <button type="submit" disabled=move || busy.get()>"保存"</button>
                        <button type="button" on:click=move |_| page.cancel_edit()>"キャンセル"</button>
                    </form>
                }.into_any()
            } else {
                let task = edit_task.clone();
                view! {
                    <span
                        class="task-title"
                        on:dblclick=move |_| page.start_edit(&task)
                    >
                        {title.clone()}
                    </span>
                }.into_any()
            }}

            <span class="task-dates">
                <span class="task-created">"作成: " {created}</span>
                <span class="task-updated">"更新: " {updated}</span>
            </span>

            <Show when=move || !editing()>
                {
                    let task = button_task.clone();
                    view! {
                        <button
                            class="edit-btn"
                            disabled=move || busy.get()
                            on:click=move |_| page.start_edit(&task)
                        >
                            "編集"
                        </button>
                    }
                }
            </Show>

            <DeleteConfirmButton
                button_class="delete-btn"
                disabled=busy
                on_confirm=Callback::new(move |_| {
                    spawn_local(async move {
                        page.delete(id).await;
                    });
                })
            />
        </li>
    }
}
