//! API Contract
//!
//! Abstract interface over the task collection.
//! The HTTP client implements it; tests substitute an in-memory double.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{NewTask, Task, TaskId, TaskPatch};

/// CRUD operations on the remote task collection
///
/// Futures are not `Send`: in the browser they run on the single event loop.
#[async_trait(?Send)]
pub trait TodoApi: Send + Sync {
    /// `GET /api/todos`
    async fn list(&self) -> ApiResult<Vec<Task>>;

    /// `POST /api/todos`
    async fn create(&self, task: &NewTask) -> ApiResult<Task>;

    /// `PUT /api/todos/{id}`
    async fn update(&self, id: TaskId, patch: &TaskPatch) -> ApiResult<Task>;

    /// `DELETE /api/todos/{id}`
    async fn delete(&self, id: TaskId) -> ApiResult<()>;

    /// `DELETE /api/todos`
    async fn delete_all(&self) -> ApiResult<()>;
}
