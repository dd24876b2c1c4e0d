//! In-memory `TodoApi` double for store and view tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use todo_api::{ApiError, ApiResult, NewTask, Task, TaskId, TaskPatch, TodoApi};
use tokio::sync::oneshot;

pub fn task(id: TaskId, title: &str, completed: bool) -> Task {
    Task {
        id,
        title: title.to_string(),
        completed,
        created_at: None,
        updated_at: None,
    }
}

/// Lets other branches of a `join!` make progress
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(String),
    Update(TaskId, TaskPatch),
    Delete(TaskId),
    DeleteAll,
}

#[derive(Default)]
struct MockState {
    tasks: Vec<Task>,
    next_id: TaskId,
    failing: bool,
    calls: Vec<Call>,
    held_lists: VecDeque<(oneshot::Receiver<()>, Vec<Task>)>,
    held_updates: VecDeque<(oneshot::Receiver<()>, Task)>,
}

/// Server stand-in holding its own copy of the collection
#[derive(Default)]
pub struct MockApi {
    state: Mutex<MockState>,
}

impl MockApi {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(MockState {
                tasks,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// Every subsequent call fails with a network error
    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    /// The next `list` call answers `tasks` once the returned sender fires
    pub fn hold_list(&self, tasks: Vec<Task>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state.lock().unwrap().held_lists.push_back((rx, tasks));
        tx
    }

    /// The next `update` call answers `task` once the returned sender fires
    pub fn hold_update(&self, task: Task) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state.lock().unwrap().held_updates.push_back((rx, task));
        tx
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.failing {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl TodoApi for MockApi {
    async fn list(&self) -> ApiResult<Vec<Task>> {
        self.record(Call::List)?;
        let held = self.state.lock().unwrap().held_lists.pop_front();
        if let Some((rx, tasks)) = held {
            let _ = rx.await;
            return Ok(tasks);
        }
        Ok(self.state.lock().unwrap().tasks.clone())
    }

    async fn create(&self, task: &NewTask) -> ApiResult<Task> {
        self.record(Call::Create(task.title.clone()))?;
        let mut state = self.state.lock().unwrap();
        let created = Task {
            id: state.next_id.max(1),
            title: task.title.clone(),
            completed: false,
            created_at: Some("2024-05-01T09:00:00Z".to_string()),
            updated_at: Some("2024-05-01T09:00:00Z".to_string()),
        };
        state.next_id = created.id + 1;
        state.tasks.insert(0, created.clone());
        Ok(created)
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> ApiResult<Task> {
        self.record(Call::Update(id, patch.clone()))?;
        let held = self.state.lock().unwrap().held_updates.pop_front();
        if let Some((rx, task)) = held {
            let _ = rx.await;
            return Ok(task);
        }
        let mut state = self.state.lock().unwrap();
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                url: format!("/api/todos/{id}"),
            })?;
        if let Some(title) = &patch.title {
            task.title = title.clone();
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> ApiResult<()> {
        self.record(Call::Delete(id))?;
        self.state.lock().unwrap().tasks.retain(|t| t.id != id);
        Ok(())
    }

    async fn delete_all(&self) -> ApiResult<()> {
        self.record(Call::DeleteAll)?;
        self.state.lock().unwrap().tasks.clear();
        Ok(())
    }
}
