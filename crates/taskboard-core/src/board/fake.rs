//! Scripted in-memory remote for board tests

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::domain::{Project, ProjectDraft, ProjectId, Task, TaskDraft, TaskId, TaskPatch};
use crate::remote::{ApiError, ApiResult, Remote};

#[derive(Default)]
struct State {
    projects: Vec<Project>,
    tasks: Vec<(ProjectId, Task)>,
    next_id: u64,
    calls: Vec<String>,
    failures: HashMap<&'static str, ApiError>,
    slow_projects: HashSet<ProjectId>,
    rename_on_update: Option<String>,
}

/// Behaves like the real API: trims names, assigns ids, owns the data.
#[derive(Default)]
pub struct FakeRemote {
    state: RefCell<State>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(self, id: &str, name: &str) -> Self {
        self.state.borrow_mut().projects.push(Project {
            id: ProjectId::from(id),
            name: name.to_string(),
            description: None,
        });
        self
    }

    pub fn with_task(self, project: &str, id: &str, title: &str, completed: bool) -> Self {
        self.state.borrow_mut().tasks.push((
            ProjectId::from(project),
            Task { id: TaskId::from(id), title: title.to_string(), description: Some(format!("{title} notes")), completed },
        ));
        self
    }

    /// Make every call to `op` fail with `err`
    pub fn fail(&self, op: &'static str, err: ApiError) {
        self.state.borrow_mut().failures.insert(op, err);
    }

    /// Task listing for `project` yields to the executor before answering
    pub fn slow_tasks_for(&self, project: &str) {
        self.state.borrow_mut().slow_projects.insert(ProjectId::from(project));
    }

    /// Server rewrites task titles on every update
    pub fn rename_tasks_on_update(&self, title: &str) {
        self.state.borrow_mut().rename_on_update = Some(title.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    fn enter(&self, op: &'static str, detail: impl std::fmt::Display) -> ApiResult<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(format!("{op} {detail}").trim_end().to_string());
        match state.failures.get(op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn next_id(&self, prefix: &str) -> String {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        format!("{prefix}{}", state.next_id)
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn not_found() -> ApiError {
    ApiError::Rejected { status: 404, message: Some("Not found".into()) }
}

#[async_trait(?Send)]
impl Remote for FakeRemote {
    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.enter("list_projects", "")?;
        Ok(self.state.borrow().projects.clone())
    }

    async fn create_project(&self, draft: &ProjectDraft) -> ApiResult<Project> {
        self.enter("create_project", &draft.name)?;
        let project = Project {
            id: ProjectId::from(self.next_id("p").as_str()),
            name: draft.name.trim().to_string(),
            description: non_empty(&draft.description),
        };
        self.state.borrow_mut().projects.push(project.clone());
        Ok(project)
    }

    async fn update_project(&self, id: &ProjectId, draft: &ProjectDraft) -> ApiResult<Project> {
        self.enter("update_project", id)?;
        let mut state = self.state.borrow_mut();
        let project = state.projects.iter_mut().find(|p| &p.id == id).ok_or_else(not_found)?;
        project.name = draft.name.trim().to_string();
        project.description = non_empty(&draft.description);
        Ok(project.clone())
    }

    async fn delete_project(&self, id: &ProjectId) -> ApiResult<()> {
        self.enter("delete_project", id)?;
        let mut state = self.state.borrow_mut();
        state.projects.retain(|p| &p.id != id);
        state.tasks.retain(|(owner, _)| owner != id);
        Ok(())
    }

    async fn list_tasks(&self, project: &ProjectId) -> ApiResult<Vec<Task>> {
        self.enter("list_tasks", project)?;
        if self.state.borrow().slow_projects.contains(project) {
            for _ in 0..3 {
                tokio::task::yield_now().await;
            }
        }
        let state = self.state.borrow();
        Ok(state.tasks.iter().filter(|(owner, _)| owner == project).map(|(_, t)| t.clone()).collect())
    }

    async fn create_task(&self, project: &ProjectId, draft: &TaskDraft) -> ApiResult<Task> {
        self.enter("create_task", project)?;
        let task = Task {
            id: TaskId::from(self.next_id("t").as_str()),
            title: draft.title.trim().to_string(),
            description: non_empty(&draft.description),
            completed: draft.completed,
        };
        self.state.borrow_mut().tasks.push((project.clone(), task.clone()));
        Ok(task)
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> ApiResult<Task> {
        self.enter("update_task", id)?;
        let mut state = self.state.borrow_mut();
        let rename = state.rename_on_update.clone();
        let (_, task) = state.tasks.iter_mut().find(|(_, t)| &t.id == id).ok_or_else(not_found)?;
        if let Some(title) = &patch.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = &patch.description {
            task.description = non_empty(description);
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        if let Some(title) = rename {
            task.title = title;
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &TaskId) -> ApiResult<()> {
        self.enter("delete_task", id)?;
        self.state.borrow_mut().tasks.retain(|(_, t)| &t.id != id);
        Ok(())
    }
}
