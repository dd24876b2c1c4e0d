//! Task Section Component
//!
//! A titled list of tasks from one derived partition.

use leptos::prelude::*;
use todo_api::Task;

use crate::components::TaskRow;

#[component]
pub fn TaskSection(
    #[prop(into)] title: String,
    tasks: Memo<Vec<Task>>,
    #[prop(into)] empty_text: String,
) -> impl IntoView {
    view! {
        <section class="task-section">
            <h2>{title} " (" {move || tasks.with(Vec::len)} ")"</h2>
            <Show
                when=move || tasks.with(|tasks| !tasks.is_empty())
                fallback=move || view! { <p class="empty-text">{empty_text.clone()}</p> }
            >
                <ul class="task-list">
                    <For
                        each=move || tasks.get()
                        // Every rendered field is part of the key so edits re-render the row
                        key=|task| (
                            task.id,
                            task.title.clone(),
                            task.completed,
                            task.updated_at.clone(),
                        )
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </ul>
            </Show>
        </section>
    }
}
