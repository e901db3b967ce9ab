//! Remote API Layer
//!
//! Abstract contract for the project/task CRUD API plus the HTTP
//! implementation used by the browser.

mod config;
mod error;
mod http;

use async_trait::async_trait;

use crate::domain::{Project, ProjectDraft, ProjectId, Task, TaskDraft, TaskId, TaskPatch};

pub use config::{ApiConfig, ProjectDeleteRoute};
pub use error::{ApiError, ApiResult, Operation};
pub use http::{Endpoint, HttpRemote};

/// One async method per API operation.
///
/// Futures are not `Send`: in the browser every request runs on the single
/// WASM thread.
#[async_trait(?Send)]
pub trait Remote {
    async fn list_projects(&self) -> ApiResult<Vec<Project>>;

    async fn create_project(&self, draft: &ProjectDraft) -> ApiResult<Project>;

    async fn update_project(&self, id: &ProjectId, draft: &ProjectDraft) -> ApiResult<Project>;

    async fn delete_project(&self, id: &ProjectId) -> ApiResult<()>;

    async fn list_tasks(&self, project: &ProjectId) -> ApiResult<Vec<Task>>;

    async fn create_task(&self, project: &ProjectId, draft: &TaskDraft) -> ApiResult<Task>;

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> ApiResult<Task>;

    async fn delete_task(&self, id: &TaskId) -> ApiResult<()>;
}
