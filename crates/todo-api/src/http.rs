//! HTTP Client
//!
//! `TodoApi` over the REST collection at `/api/todos`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

use crate::error::{ApiError, ApiResult};
use crate::models::{NewTask, Task, TaskId, TaskPatch};
use crate::traits::TodoApi;

/// Fixed collection path, appended to the configured base URL
const TODOS_PATH: &str = "/api/todos";

/// reqwest-backed implementation of [`TodoApi`]
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
}

impl HttpTodoApi {
    /// `base_url` is the server origin, e.g. `http://localhost:3000`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn todos_url(&self) -> String {
        format!("{}{}", self.base_url, TODOS_PATH)
    }

    fn todo_url(&self, id: TaskId) -> String {
        format!("{}{}/{}", self.base_url, TODOS_PATH, id)
    }

    /// Sends the request and rejects any non-2xx answer
    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<Vec<Task>> {
        let response = self.send(self.client.get(self.todos_url())).await?;
        let tasks: Vec<Task> = response.json().await?;
        tracing::debug!(count = tasks.len(), "GET {}", TODOS_PATH);
        Ok(tasks)
    }

    async fn create(&self, task: &NewTask) -> ApiResult<Task> {
        let response = self
            .send(self.client.post(self.todos_url()).json(task))
            .await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> ApiResult<Task> {
        let response = self
            .send(self.client.put(self.todo_url(id)).json(patch))
            .await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: TaskId) -> ApiResult<()> {
        self.send(self.client.delete(self.todo_url(id))).await?;
        Ok(())
    }

    async fn delete_all(&self) -> ApiResult<()> {
        self.send(self.client.delete(self.todos_url())).await?;
        Ok(())
    }
}
