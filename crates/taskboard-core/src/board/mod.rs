//! Board State
//!
//! Everything the project/task view keeps in memory, plus the reconciliation
//! rules applied when remote responses come back.
//!
//! Each user action is split into a synchronous `begin_*` step, the remote
//! call, and a synchronous `finish_*` step. The board is never borrowed across
//! the await in between, so it can live in a reactive signal.

mod controller;
mod form;
mod projects;
mod status;
mod tasks;

#[cfg(test)]
mod fake;

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::domain::{Project, ProjectDraft, ProjectId, Task, TaskDraft, TaskId, TaskPatch};
use crate::remote::{ApiError, ApiResult, Operation};

pub use controller::Controller;
pub use form::{EntityKind, Form, Modal};
pub use projects::{filter_projects, ProjectStore};
pub use status::Status;
pub use tasks::{TaskStore, TaskTicket};

pub const NO_PROJECT_SELECTED: &str = "Select a project first.";

/// Why an action did not reach or did not succeed on the server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("no form is open")]
    FormClosed,

    /// A required field was blank; nothing was sent
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("no project selected")]
    NoProjectSelected,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ActionError {
    /// The host should send the user back to the login flow
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ActionError::Api(ApiError::SessionExpired))
    }
}

pub type ActionResult = Result<(), ActionError>;

/// Request derived from the open form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    CreateProject(ProjectDraft),
    UpdateProject(ProjectId, ProjectDraft),
    CreateTask(TaskTicket, TaskDraft),
    UpdateTask(TaskTicket, TaskId, TaskPatch),
}

/// A save in flight, remembering which form revision issued it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub revision: u64,
    pub request: SaveRequest,
}

/// In-memory state of the project/task view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub projects: ProjectStore,
    pub tasks: TaskStore,
    pub modal: Modal,
    pub status: Status,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dismiss_status(&mut self) {
        self.status = Status::None;
    }

    fn fail(&mut self, op: Operation, err: ApiError) -> ActionResult {
        self.status = Status::error(err.status_text(op));
        Err(err.into())
    }

    // ========================
    // Projects
    // ========================

    pub fn finish_load_projects(&mut self, result: ApiResult<Vec<Project>>) -> ActionResult {
        match result {
            Ok(projects) => {
                log::debug!("loaded {} projects", projects.len());
                self.projects.replace_all(projects);
                Ok(())
            }
            Err(err) => self.fail(Operation::LoadProjects, err),
        }
    }

    pub fn finish_project_save(
        &mut self,
        revision: u64,
        target: Option<&ProjectId>,
        result: ApiResult<Project>,
    ) -> ActionResult {
        let project = match result {
            Ok(project) => project,
            Err(err) => return self.fail(Operation::SaveProject, err),
        };

        let message = match target {
            Some(id) => {
                self.projects.replace(id, project);
                "Project updated!"
            }
            None => {
                self.projects.append(project);
                "Project created!"
            }
        };
        self.projects.search("");
        self.status = Status::success(message);
        self.modal.close_if(revision);
        Ok(())
    }

    pub fn finish_delete_project(&mut self, id: &ProjectId, result: ApiResult<()>) -> ActionResult {
        if let Err(err) = result {
            return self.fail(Operation::DeleteProject, err);
        }

        self.projects.remove(id);
        if self.tasks.selected() == Some(id) {
            self.deselect_project();
        }
        let editing_deleted = matches!(
            self.modal.form(),
            Some(Form::Project { target: Some(target), .. }) if target == id
        );
        if editing_deleted {
            self.modal.cancel();
        }
        self.status = Status::success("Project deleted!");
        Ok(())
    }

    // ========================
    // Tasks
    // ========================

    /// Switch the selection; the previous task list and any task form go away
    pub fn begin_load_tasks(&mut self, project: ProjectId) -> TaskTicket {
        self.close_task_form();
        self.tasks.select(project)
    }

    pub fn finish_load_tasks(&mut self, ticket: &TaskTicket, result: ApiResult<Vec<Task>>) -> ActionResult {
        match result {
            Ok(tasks) => {
                log::debug!("loaded {} tasks for project {}", tasks.len(), ticket.project);
                self.tasks.fill(ticket, tasks);
                Ok(())
            }
            Err(err) if self.tasks.is_current(ticket) => self.fail(Operation::LoadTasks, err),
            Err(err) => {
                log::warn!("ignoring failed task load for stale project {}: {err}", ticket.project);
                Err(err.into())
            }
        }
    }

    pub fn deselect_project(&mut self) {
        self.close_task_form();
        self.tasks.clear();
    }

    /// Ticket for a task action, or the "select a project" status
    pub fn require_selection(&mut self) -> Result<TaskTicket, ActionError> {
        self.tasks.ticket().ok_or_else(|| {
            self.status = Status::error(NO_PROJECT_SELECTED);
            ActionError::NoProjectSelected
        })
    }

    pub fn finish_task_save(
        &mut self,
        revision: u64,
        ticket: &TaskTicket,
        target: Option<&TaskId>,
        result: ApiResult<Task>,
    ) -> ActionResult {
        let task = match result {
            Ok(task) => task,
            Err(err) => return self.fail(Operation::SaveTask, err),
        };

        let message = match target {
            Some(id) => {
                self.tasks.replace(ticket, id, task);
                "Task updated!"
            }
            None => {
                self.tasks.append(ticket, task);
                "Task created!"
            }
        };
        self.status = Status::success(message);
        self.modal.close_if(revision);
        Ok(())
    }

    pub fn finish_delete_task(&mut self, ticket: &TaskTicket, id: &TaskId, result: ApiResult<()>) -> ActionResult {
        if let Err(err) = result {
            return self.fail(Operation::DeleteTask, err);
        }

        self.tasks.remove(ticket, id);
        let editing_deleted = matches!(
            self.modal.form(),
            Some(Form::Task { target: Some(target), .. }) if target == id
        );
        if editing_deleted {
            self.modal.cancel();
        }
        self.status = Status::success("Task deleted!");
        Ok(())
    }

    /// Completion toggles only ever patch the flag; the server's copy of the
    /// other fields is not merged.
    pub fn finish_toggle(
        &mut self,
        ticket: &TaskTicket,
        id: &TaskId,
        completed: bool,
        result: ApiResult<Task>,
    ) -> ActionResult {
        match result {
            Ok(_) => {
                self.tasks.set_completed(ticket, id, completed);
                Ok(())
            }
            Err(err) => self.fail(Operation::ToggleTask, err),
        }
    }

    fn close_task_form(&mut self) {
        if self.modal.form().is_some_and(|f| f.kind() == EntityKind::Task) {
            self.modal.cancel();
        }
    }

    // ========================
    // Form
    // ========================

    /// Open the form on a loaded project; unknown ids are ignored
    pub fn open_edit_project(&mut self, id: &ProjectId) {
        if let Some(project) = self.projects.get(id).cloned() {
            self.modal.open_edit_project(&project);
        }
    }

    pub fn open_edit_task(&mut self, id: &TaskId) {
        if let Some(task) = self.tasks.get(id).cloned() {
            self.modal.open_edit_task(&task);
        }
    }

    /// Turn the open form into a request, or explain why it cannot be sent
    pub fn begin_submit(&mut self) -> Result<Submission, ActionError> {
        let form = self.modal.form().cloned().ok_or(ActionError::FormClosed)?;
        if let Some(field) = form.missing_field() {
            return Err(ActionError::MissingField(field));
        }

        let request = match form {
            Form::Project { target: None, draft } => SaveRequest::CreateProject(draft),
            Form::Project { target: Some(id), draft } => SaveRequest::UpdateProject(id, draft),
            Form::Task { target: None, draft } => SaveRequest::CreateTask(self.require_selection()?, draft),
            Form::Task { target: Some(id), draft } => {
                SaveRequest::UpdateTask(self.require_selection()?, id, draft.to_patch())
            }
        };
        Ok(Submission { revision: self.modal.revision(), request })
    }
}

/// Shared access to a [`Board`] owned elsewhere
pub trait BoardHandle {
    fn update<T>(&self, f: impl FnOnce(&mut Board) -> T) -> T;

    fn read<T>(&self, f: impl FnOnce(&Board) -> T) -> T;
}

impl BoardHandle for Rc<RefCell<Board>> {
    fn update<T>(&self, f: impl FnOnce(&mut Board) -> T) -> T {
        f(&mut self.borrow_mut())
    }

    fn read<T>(&self, f: impl FnOnce(&Board) -> T) -> T {
        f(&self.borrow())
    }
}
