//! Task State Service
//!
//! Owns the locally cached task list and republishes it, together with the
//! loading flag, last error and last-synced time, through a reactive store.
//! Local state changes only after the server confirms a request.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use reactive_stores::Store;
use todo_api::{ApiError, ApiResult, NewTask, Task, TaskId, TaskPatch, TodoApi};

use crate::messages;

/// Published state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Cached server tasks, newest first after local inserts
    pub tasks: Vec<Task>,
    /// Refreshes dispatched but not yet settled
    pub in_flight_refreshes: usize,
    /// Last user-facing error, None after any success
    pub error: Option<String>,
    /// When the list was last fully synchronised
    pub last_synced: Option<DateTime<Utc>>,
}

/// State service wrapping the remote collection
#[derive(Clone, Copy)]
pub struct TodoStore {
    state: Store<TodoState>,
    api: StoredValue<Arc<dyn TodoApi>>,
}

impl TodoStore {
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        Self {
            state: Store::new(TodoState::default()),
            api: StoredValue::new(api),
        }
    }

    // ========================
    // Reactive reads
    // ========================

    pub fn with_tasks<R>(&self, f: impl FnOnce(&Vec<Task>) -> R) -> R {
        self.state.tasks().with(f)
    }

    /// True while at least one refresh is outstanding
    pub fn is_loading(&self) -> bool {
        self.state.in_flight_refreshes().get() > 0
    }

    pub fn error(&self) -> Option<String> {
        self.state.error().get()
    }

    pub fn last_synced(&self) -> Option<DateTime<Utc>> {
        self.state.last_synced().get()
    }

    /// Current list without subscribing and without a network call
    pub fn snapshot(&self) -> Vec<Task> {
        self.state.tasks().get_untracked()
    }

    // ========================
    // Remote operations
    // ========================

    /// Replaces the local list with the server's collection
    pub async fn refresh(&self) -> ApiResult<Vec<Task>> {
        *self.state.in_flight_refreshes().write() += 1;
        let result = self.api.get_value().list().await;
        {
            let field = self.state.in_flight_refreshes();
            let mut in_flight = field.write();
            *in_flight = in_flight.saturating_sub(1);
        }

        match result {
            Ok(tasks) => {
                tracing::info!(count = tasks.len(), "tasks refreshed");
                *self.state.tasks().write() = tasks.clone();
                *self.state.last_synced().write() = Some(Utc::now());
                self.clear_error();
                Ok(tasks)
            }
            Err(err) => Err(self.fail(messages::REFRESH_FAILED, err)),
        }
    }

    /// Creates a task and prepends the server's record
    pub async fn create(&self, title: &str) -> ApiResult<Task> {
        match self.api.get_value().create(&NewTask::new(title)).await {
            Ok(task) => {
                tracing::debug!(id = task.id, "task created");
                self.state.tasks().write().insert(0, task.clone());
                self.clear_error();
                Ok(task)
            }
            Err(err) => Err(self.fail(messages::CREATE_FAILED, err)),
        }
    }

    /// Applies a partial update and replaces the local record by id.
    /// `error_message` overrides the default failure text.
    pub async fn update(
        &self,
        id: TaskId,
        patch: TaskPatch,
        error_message: Option<&str>,
    ) -> ApiResult<Task> {
        match self.api.get_value().update(id, &patch).await {
            Ok(task) => {
                tracing::debug!(id, "task updated");
                let field = self.state.tasks();
                if let Some(slot) = field.write().iter_mut().find(|t| t.id == task.id) {
                    *slot = task.clone();
                }
                self.clear_error();
                Ok(task)
            }
            Err(err) => Err(self.fail(error_message.unwrap_or(messages::UPDATE_FAILED), err)),
        }
    }

    pub async fn delete(&self, id: TaskId) -> ApiResult<()> {
        match self.api.get_value().delete(id).await {
            Ok(()) => {
                tracing::debug!(id, "task deleted");
                self.state.tasks().write().retain(|t| t.id != id);
                self.clear_error();
                Ok(())
            }
            Err(err) => Err(self.fail(messages::DELETE_FAILED, err)),
        }
    }

    pub async fn delete_all(&self) -> ApiResult<()> {
        match self.api.get_value().delete_all().await {
            Ok(()) => {
                tracing::info!("all tasks deleted");
                self.state.tasks().write().clear();
                *self.state.last_synced().write() = Some(Utc::now());
                self.clear_error();
                Ok(())
            }
            Err(err) => Err(self.fail(messages::DELETE_ALL_FAILED, err)),
        }
    }

    pub fn clear_error(&self) {
        if self.state.error().get_untracked().is_some() {
            *self.state.error().write() = None;
        }
    }

    /// Publishes `message` and hands the error back for the caller
    fn fail(&self, message: &str, err: ApiError) -> ApiError {
        tracing::error!(error = %err, "{}", message);
        *self.state.error().write() = Some(message.to_string());
        err
    }
}
