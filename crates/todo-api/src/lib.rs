//! Todo API
//!
//! Layered access to the remote task collection:
//! - models: wire records exchanged with the server
//! - traits: the async CRUD contract the UI depends on
//! - http: the reqwest-backed implementation

mod error;
mod http;
mod models;
mod traits;

pub use error::{ApiError, ApiResult};
pub use http::HttpTodoApi;
pub use models::{NewTask, Task, TaskId, TaskPatch};
pub use traits::TodoApi;
