//! Async driver tying a [`Remote`] to a [`Board`](super::Board).

use super::{ActionResult, BoardHandle, EntityKind, SaveRequest};
use crate::domain::{ProjectId, TaskId, TaskPatch};
use crate::remote::Remote;

/// Runs user actions: begin on the board, await the remote, finish on the board
#[derive(Debug, Clone)]
pub struct Controller<R, H> {
    remote: R,
    board: H,
}

impl<R: Remote, H: BoardHandle> Controller<R, H> {
    pub fn new(remote: R, board: H) -> Self {
        Self { remote, board }
    }

    pub fn board(&self) -> &H {
        &self.board
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    // ========================
    // Projects
    // ========================

    pub async fn load_projects(&self) -> ActionResult {
        let result = self.remote.list_projects().await;
        self.board.update(|b| b.finish_load_projects(result))
    }

    pub fn search(&self, query: &str) {
        self.board.update(|b| b.projects.search(query));
    }

    pub async fn delete_project(&self, id: ProjectId) -> ActionResult {
        let result = self.remote.delete_project(&id).await;
        self.board.update(|b| b.finish_delete_project(&id, result))
    }

    // ========================
    // Tasks
    // ========================

    /// Select `project` and load its tasks
    pub async fn select_project(&self, project: ProjectId) -> ActionResult {
        let ticket = self.board.update(|b| b.begin_load_tasks(project));
        let result = self.remote.list_tasks(&ticket.project).await;
        self.board.update(|b| b.finish_load_tasks(&ticket, result))
    }

    pub fn deselect_project(&self) {
        self.board.update(|b| b.deselect_project());
    }

    pub async fn delete_task(&self, id: TaskId) -> ActionResult {
        let ticket = self.board.update(|b| b.require_selection())?;
        let result = self.remote.delete_task(&id).await;
        self.board.update(|b| b.finish_delete_task(&ticket, &id, result))
    }

    /// Flip completion; `current` is the flag the user saw when clicking
    pub async fn toggle_task(&self, id: TaskId, current: bool) -> ActionResult {
        let ticket = self.board.update(|b| b.require_selection())?;
        let completed = !current;
        let result = self.remote.update_task(&id, &TaskPatch::completion(completed)).await;
        self.board.update(|b| b.finish_toggle(&ticket, &id, completed, result))
    }

    // ========================
    // Form
    // ========================

    pub fn open_create(&self, kind: EntityKind) {
        self.board.update(|b| b.modal.open_create(kind));
    }

    pub fn open_edit_project(&self, id: &ProjectId) {
        self.board.update(|b| b.open_edit_project(id));
    }

    pub fn open_edit_task(&self, id: &TaskId) {
        self.board.update(|b| b.open_edit_task(id));
    }

    pub fn cancel(&self) {
        self.board.update(|b| b.modal.cancel());
    }

    /// Create or update whatever the open form describes.
    ///
    /// On failure the form stays open with its buffer intact.
    pub async fn submit(&self) -> ActionResult {
        let submission = self.board.update(|b| b.begin_submit())?;
        let revision = submission.revision;

        match submission.request {
            SaveRequest::CreateProject(draft) => {
                let result = self.remote.create_project(&draft).await;
                self.board.update(|b| b.finish_project_save(revision, None, result))
            }
            SaveRequest::UpdateProject(id, draft) => {
                let result = self.remote.update_project(&id, &draft).await;
                self.board.update(|b| b.finish_project_save(revision, Some(&id), result))
            }
            SaveRequest::CreateTask(ticket, draft) => {
                let result = self.remote.create_task(&ticket.project, &draft).await;
                self.board.update(|b| b.finish_task_save(revision, &ticket, None, result))
            }
            SaveRequest::UpdateTask(ticket, id, patch) => {
                let result = self.remote.update_task(&id, &patch).await;
                self.board.update(|b| b.finish_task_save(revision, &ticket, Some(&id), result))
            }
        }
    }
}
