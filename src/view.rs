//! Task View State
//!
//! Component-level state for the task page: derived pending/completed
//! partitions, the new-task input, the single edit slot, and busy flags
//! used to disable controls while a request is in flight.

use std::collections::HashMap;

use leptos::prelude::*;
use todo_api::{Task, TaskId, TaskPatch};

use crate::messages;
use crate::store::TodoStore;

/// Edit mode: at most one task is edited at a time
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing { id: TaskId, draft: String },
}

impl EditState {
    pub fn is_editing(&self, id: TaskId) -> bool {
        matches!(self, EditState::Editing { id: editing, .. } if *editing == id)
    }
}

/// View-side state and actions, copied into event handlers
#[derive(Clone, Copy)]
pub struct TodoView {
    store: TodoStore,
    pub new_title: RwSignal<String>,
    pub validation: RwSignal<Option<String>>,
    pub edit: RwSignal<EditState>,
    /// Requests in flight per id; UI affordance only. Counted so that
    /// overlapping requests on one row keep it busy until the last settles.
    pub mutating: RwSignal<HashMap<TaskId, usize>>,
    pub adding: RwSignal<bool>,
    pub clearing: RwSignal<bool>,
    pub pending: Memo<Vec<Task>>,
    pub completed: Memo<Vec<Task>>,
}

impl TodoView {
    pub fn new(store: TodoStore) -> Self {
        let pending = Memo::new(move |_| {
            store.with_tasks(|tasks| tasks.iter().filter(|t| t.is_pending()).cloned().collect())
        });
        let completed = Memo::new(move |_| {
            store.with_tasks(|tasks| tasks.iter().filter(|t| t.completed).cloned().collect())
        });

        Self {
            store,
            new_title: RwSignal::new(String::new()),
            validation: RwSignal::new(None),
            edit: RwSignal::new(EditState::Idle),
            mutating: RwSignal::new(HashMap::new()),
            adding: RwSignal::new(false),
            clearing: RwSignal::new(false),
            pending,
            completed,
        }
    }

    pub fn store(&self) -> TodoStore {
        self.store
    }

    // ========================
    // Derived values
    // ========================

    pub fn pending_count(&self) -> usize {
        self.pending.with(Vec::len)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.with(Vec::len)
    }

    pub fn total_count(&self) -> usize {
        self.store.with_tasks(Vec::len)
    }

    pub fn is_mutating(&self, id: TaskId) -> bool {
        self.mutating.with(|counts| counts.contains_key(&id))
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.edit.with(|edit| edit.is_editing(id))
    }

    // ========================
    // New task
    // ========================

    /// Input binding; typing dismisses a shown validation message
    pub fn set_new_title(&self, value: String) {
        self.new_title.set(value);
        if self.validation.get_untracked().is_some() {
            self.validation.set(None);
        }
    }

    /// Validates locally, then creates. Returns true when a task was created.
    pub async fn add(&self) -> bool {
        if self.adding.get_untracked() {
            return false;
        }
        let title = self.new_title.get_untracked().trim().to_string();
        if title.is_empty() {
            self.validation.set(Some(messages::TITLE_REQUIRED.to_string()));
            return false;
        }

        self.validation.set(None);
        self.adding.set(true);
        let created = self.store.create(&title).await.is_ok();
        self.adding.set(false);

        if created {
            self.new_title.set(String::new());
        }
        created
    }

    // ========================
    // Row actions
    // ========================

    pub async fn toggle(&self, id: TaskId, completed: bool) {
        self.mark(id, true);
        let _ = self
            .store
            .update(id, TaskPatch::completed(!completed), Some(messages::TOGGLE_FAILED))
            .await;
        self.mark(id, false);
    }

    pub async fn delete(&self, id: TaskId) {
        self.mark(id, true);
        let _ = self.store.delete(id).await;
        self.mark(id, false);
    }

    /// Skips the request when nothing is cached
    pub async fn delete_all(&self) {
        if self.store.snapshot().is_empty() {
            tracing::debug!("delete-all skipped, list already empty");
            return;
        }
        self.clearing.set(true);
        let _ = self.store.delete_all().await;
        self.clearing.set(false);
    }

    pub async fn refresh(&self) {
        let _ = self.store.refresh().await;
    }

    pub fn dismiss_error(&self) {
        self.store.clear_error();
    }

    // ========================
    // Edit mode
    // ========================

    /// Replaces any unsaved draft without asking
    pub fn start_edit(&self, task: &Task) {
        self.edit.set(EditState::Editing {
            id: task.id,
            draft: task.title.clone(),
        });
    }

    pub fn set_draft(&self, value: String) {
        self.edit.update(|edit| {
            if let EditState::Editing { draft, .. } = edit {
                *draft = value;
            }
        });
    }

    pub fn cancel_edit(&self) {
        self.edit.set(EditState::Idle);
    }

    /// Empty or unchanged drafts leave edit mode without a request.
    /// On failure the draft stays open so it can be resubmitted.
    pub async fn submit_edit(&self) {
        let EditState::Editing { id, draft } = self.edit.get_untracked() else {
            return;
        };
        let title = draft.trim().to_string();
        let unchanged = self
            .store
            .snapshot()
            .iter()
            .find(|t| t.id == id)
            .map_or(true, |t| t.title == title);
        if title.is_empty() || unchanged {
            self.cancel_edit();
            return;
        }

        self.mark(id, true);
        let saved = self
            .store
            .update(id, TaskPatch::title(title), Some(messages::EDIT_FAILED))
            .await
            .is_ok();
        self.mark(id, false);

        // A newer edit may have started while this one was in flight
        if saved && self.edit.with_untracked(|edit| edit.is_editing(id)) {
            self.cancel_edit();
        }
    }

    fn mark(&self, id: TaskId, busy: bool) {
        self.mutating.update(|counts| {
            if busy {
                *counts.entry(id).or_default() += 1;
            } else if let Some(count) = counts.get_mut(&id) {
                *count -= 1;
                if *count == 0 {
                    counts.remove(&id);
                }
            }
        });
    }
}
