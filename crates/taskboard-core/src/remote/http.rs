//! HTTP implementation of [`Remote`] on top of reqwest.
//!
//! reqwest uses `fetch` when compiled to WASM, so the same client serves the
//! browser build and native tests.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{ApiConfig, ApiError, ApiResult, ProjectDeleteRoute, Remote};
use crate::domain::{Project, ProjectDraft, ProjectId, Task, TaskDraft, TaskId, TaskPatch};
use crate::session::Session;

// ========================
// Endpoints
// ========================

/// Every route of the API, with its identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    ListProjects,
    CreateProject,
    UpdateProject(&'a ProjectId),
    DeleteProject(&'a ProjectId),
    ListTasks(&'a ProjectId),
    CreateTask(&'a ProjectId),
    UpdateTask(&'a TaskId),
    DeleteTask(&'a TaskId),
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListProjects | Endpoint::ListTasks(_) => Method::GET,
            Endpoint::CreateProject | Endpoint::CreateTask(_) => Method::POST,
            Endpoint::UpdateProject(_) | Endpoint::UpdateTask(_) => Method::PUT,
            Endpoint::DeleteProject(_) | Endpoint::DeleteTask(_) => Method::DELETE,
        }
    }

    pub fn path(&self, config: &ApiConfig) -> String {
        match self {
            Endpoint::ListProjects => "/projects".to_string(),
            Endpoint::CreateProject => "/projects/create".to_string(),
            Endpoint::UpdateProject(id) => format!("/projects/update/{id}"),
            Endpoint::DeleteProject(id) => match config.project_delete_route {
                ProjectDeleteRoute::Prefixed => format!("/projects/delete/{id}"),
                ProjectDeleteRoute::Bare => format!("/projects/{id}"),
            },
            Endpoint::ListTasks(project) => format!("/tasks/project/{project}"),
            Endpoint::CreateTask(project) => format!("/tasks/create/{project}"),
            Endpoint::UpdateTask(id) => format!("/tasks/update/{id}"),
            Endpoint::DeleteTask(id) => format!("/tasks/delete/{id}"),
        }
    }
}

/// Error body the API sends with non-2xx responses
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extract the user-facing message from an error body, ignoring blanks
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}

// ========================
// Client
// ========================

/// Stateless request/response client; no retries, no caching
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: reqwest::Client,
    config: ApiConfig,
    session: Session,
}

impl HttpRemote {
    pub fn new(config: ApiConfig, session: Session) -> Self {
        Self { client: reqwest::Client::new(), config, session }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, endpoint: &Endpoint<'_>) -> ApiResult<RequestBuilder> {
        if self.session.is_expired() {
            return Err(ApiError::SessionExpired);
        }
        let method = endpoint.method();
        let url = self.config.url(&endpoint.path(&self.config));
        log::debug!("{method} {url}");

        Ok(self
            .client
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, self.session.bearer()))
    }

    async fn send(request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            log::warn!("request failed: {e}");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        log::warn!("request rejected with {status}: {}", message.as_deref().unwrap_or("<no message>"));
        Err(ApiError::Rejected { status: status.as_u16(), message })
    }

    async fn expect_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
        Self::send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn expect_ok(request: RequestBuilder) -> ApiResult<()> {
        Self::send(request).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl Remote for HttpRemote {
    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        Self::expect_json(self.request(&Endpoint::ListProjects)?).await
    }

    async fn create_project(&self, draft: &ProjectDraft) -> ApiResult<Project> {
        Self::expect_json(self.request(&Endpoint::CreateProject)?.json(draft)).await
    }

    async fn update_project(&self, id: &ProjectId, draft: &ProjectDraft) -> ApiResult<Project> {
        Self::expect_json(self.request(&Endpoint::UpdateProject(id))?.json(draft)).await
    }

    async fn delete_project(&self, id: &ProjectId) -> ApiResult<()> {
        Self::expect_ok(self.request(&Endpoint::DeleteProject(id))?).await
    }

    async fn list_tasks(&self, project: &ProjectId) -> ApiResult<Vec<Task>> {
        Self::expect_json(self.request(&Endpoint::ListTasks(project))?).await
    }

    async fn create_task(&self, project: &ProjectId, draft: &TaskDraft) -> ApiResult<Task> {
        Self::expect_json(self.request(&Endpoint::CreateTask(project))?.json(draft)).await
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> ApiResult<Task> {
        Self::expect_json(self.request(&Endpoint::UpdateTask(id))?.json(patch)).await
    }

    async fn delete_task(&self, id: &TaskId) -> ApiResult<()> {
        Self::expect_ok(self.request(&Endpoint::DeleteTask(id))?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::Operation;
    use chrono::{Duration, Utc};
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::{self, JoinHandle};

    /// Loopback server answering one request; the handle yields the raw request
    fn serve_once(status: &'static str, body: &'static str) -> (HttpRemote, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            request
        });
        let remote = HttpRemote::new(ApiConfig::default().with_base_url(&base_url), Session::new("tok"));
        (remote, handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut data = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&data).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let line = line.to_ascii_lowercase();
                        let length = line.strip_prefix("content-length:")?.trim().parse::<usize>().ok();
                        length
                    })
                    .unwrap_or(0);
                if data.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8(data).unwrap()
    }

    #[test]
    fn test_endpoint_table() {
        let config = ApiConfig::default();
        let p = ProjectId::from(12u64);
        let t = TaskId::from("t-9");

        let cases = [
            (Endpoint::ListProjects, Method::GET, "/projects"),
            (Endpoint::CreateProject, Method::POST, "/projects/create"),
            (Endpoint::UpdateProject(&p), Method::PUT, "/projects/update/12"),
            (Endpoint::DeleteProject(&p), Method::DELETE, "/projects/delete/12"),
            (Endpoint::ListTasks(&p), Method::GET, "/tasks/project/12"),
            (Endpoint::CreateTask(&p), Method::POST, "/tasks/create/12"),
            (Endpoint::UpdateTask(&t), Method::PUT, "/tasks/update/t-9"),
            (Endpoint::DeleteTask(&t), Method::DELETE, "/tasks/delete/t-9"),
        ];
        for (endpoint, method, path) in cases {
            assert_eq!(endpoint.method(), method, "{endpoint:?}");
            assert_eq!(endpoint.path(&config), path, "{endpoint:?}");
        }
    }

    #[test]
    fn test_bare_project_delete_route() {
        let config = ApiConfig { project_delete_route: ProjectDeleteRoute::Bare, ..Default::default() };
        let p = ProjectId::from(5u64);
        assert_eq!(Endpoint::DeleteProject(&p).path(&config), "/projects/5");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(r#"{"message":"Project not found"}"#), Some("Project not found".into()));
        assert_eq!(error_message(r#"{"message":""}"#), None);
        assert_eq!(error_message(r#"{"error":"nope"}"#), None);
        assert_eq!(error_message("<html>502</html>"), None);
    }

    #[tokio::test]
    async fn test_expired_session_sends_nothing() {
        // Port 9 (discard) would fail with a network error if anything went out.
        let config = ApiConfig::default().with_base_url("http://127.0.0.1:9");
        let session = Session::with_expiry("tok", Utc::now() - Duration::minutes(1));
        let remote = HttpRemote::new(config, session);

        assert_eq!(remote.list_projects().await, Err(ApiError::SessionExpired));
    }

    #[tokio::test]
    async fn test_rejection_carries_server_message() {
        let (remote, server) = serve_once("400 Bad Request", r#"{"message":"Name taken"}"#);
        let draft = ProjectDraft { name: "A".into(), description: String::new() };

        let result = remote.create_project(&draft).await;

        assert_eq!(result, Err(ApiError::Rejected { status: 400, message: Some("Name taken".into()) }));
        let request = server.join().unwrap();
        assert!(request.starts_with("POST /projects/create HTTP/1.1"), "{request}");
        let lower = request.to_ascii_lowercase();
        assert!(lower.contains("authorization: bearer tok"), "{request}");
        assert!(lower.contains("content-type: application/json"), "{request}");
        assert!(request.ends_with(r#"{"name":"A","description":""}"#), "{request}");
    }

    #[tokio::test]
    async fn test_rejection_without_message_falls_back() {
        let (remote, server) = serve_once("500 Internal Server Error", "<html>oops</html>");

        let err = remote.list_projects().await.unwrap_err();

        assert_eq!(err, ApiError::Rejected { status: 500, message: None });
        assert_eq!(err.status_text(Operation::LoadProjects), "Failed to fetch projects.");
        assert!(server.join().unwrap().starts_with("GET /projects HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_success_body_is_decoded() {
        let (remote, server) = serve_once("200 OK", r#"[{"_id":"x1","name":"A"}]"#);

        let projects = remote.list_projects().await.unwrap();

        assert_eq!(projects, vec![Project { id: ProjectId::from("x1"), name: "A".into(), description: None }]);
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let (remote, server) = serve_once("200 OK", "not json");

        let result = remote.update_task(&TaskId::from("t1"), &TaskPatch::completion(true)).await;

        assert!(matches!(result, Err(ApiError::Decode(_))), "{result:?}");
        let request = server.join().unwrap();
        assert!(request.starts_with("PUT /tasks/update/t1 HTTP/1.1"), "{request}");
        assert!(request.ends_with(r#"{"completed":true}"#), "{request}");
    }

    #[tokio::test]
    async fn test_delete_accepts_any_body() {
        let (remote, server) = serve_once("200 OK", "Deleted");

        assert_eq!(remote.delete_task(&TaskId::from("t1")).await, Ok(()));
        assert!(server.join().unwrap().starts_with("DELETE /tasks/delete/t1 HTTP/1.1"));
    }
}
