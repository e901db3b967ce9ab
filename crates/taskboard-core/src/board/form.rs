//! Modal form controller.
//!
//! One editable buffer shared by both entity kinds. The variant carries the
//! kind, the optional edit target and the draft together, so a project form
//! can never point at a task.

use crate::domain::{Project, ProjectDraft, ProjectId, Task, TaskDraft, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Project,
    Task,
}

impl EntityKind {
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Project => "project",
            EntityKind::Task => "task",
        }
    }

    /// Confirmation question shown before deleting `name`
    pub fn delete_prompt(self, name: &str) -> String {
        format!("Delete {} '{}'?", self.noun(), name.trim())
    }
}

/// Open form: create when `target` is `None`, update otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Form {
    Project { target: Option<ProjectId>, draft: ProjectDraft },
    Task { target: Option<TaskId>, draft: TaskDraft },
}

impl Form {
    pub fn kind(&self) -> EntityKind {
        match self {
            Form::Project { .. } => EntityKind::Project,
            Form::Task { .. } => EntityKind::Task,
        }
    }

    pub fn is_edit(&self) -> bool {
        match self {
            Form::Project { target, .. } => target.is_some(),
            Form::Task { target, .. } => target.is_some(),
        }
    }

    pub fn heading(&self) -> &'static str {
        match (self.kind(), self.is_edit()) {
            (EntityKind::Project, false) => "Add Project",
            (EntityKind::Project, true) => "Edit Project",
            (EntityKind::Task, false) => "Add Task",
            (EntityKind::Task, true) => "Edit Task",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.kind(), self.is_edit()) {
            (EntityKind::Project, false) => "Add Project",
            (EntityKind::Project, true) => "Update Project",
            (EntityKind::Task, false) => "Add Task",
            (EntityKind::Task, true) => "Update Task",
        }
    }

    /// Project name or task title
    pub fn primary(&self) -> &str {
        match self {
            Form::Project { draft, .. } => &draft.name,
            Form::Task { draft, .. } => &draft.title,
        }
    }

    pub fn set_primary(&mut self, value: impl Into<String>) {
        match self {
            Form::Project { draft, .. } => draft.name = value.into(),
            Form::Task { draft, .. } => draft.title = value.into(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Form::Project { draft, .. } => &draft.description,
            Form::Task { draft, .. } => &draft.description,
        }
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        match self {
            Form::Project { draft, .. } => draft.description = value.into(),
            Form::Task { draft, .. } => draft.description = value.into(),
        }
    }

    /// Completion flag; `None` for project forms
    pub fn completed(&self) -> Option<bool> {
        match self {
            Form::Project { .. } => None,
            Form::Task { draft, .. } => Some(draft.completed),
        }
    }

    pub fn set_completed(&mut self, completed: bool) {
        if let Form::Task { draft, .. } = self {
            draft.completed = completed;
        }
    }

    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            Form::Project { draft, .. } => draft.missing_field(),
            Form::Task { draft, .. } => draft.missing_field(),
        }
    }
}

/// `closed` or `open(form)`; `revision` changes on every open or close
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modal {
    form: Option<Form>,
    revision: u64,
}

impl Modal {
    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        self.form.as_mut()
    }

    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn open_create(&mut self, kind: EntityKind) {
        let form = match kind {
            EntityKind::Project => Form::Project { target: None, draft: ProjectDraft::default() },
            EntityKind::Task => Form::Task { target: None, draft: TaskDraft::default() },
        };
        self.open(form);
    }

    pub fn open_edit_project(&mut self, project: &Project) {
        self.open(Form::Project {
            target: Some(project.id.clone()),
            draft: ProjectDraft::from_project(project),
        });
    }

    pub fn open_edit_task(&mut self, task: &Task) {
        self.open(Form::Task { target: Some(task.id.clone()), draft: TaskDraft::from_task(task) });
    }

    /// Close and discard the buffer
    pub fn cancel(&mut self) {
        self.form = None;
        self.revision += 1;
    }

    /// Close only if nothing was opened since `revision` was taken
    pub fn close_if(&mut self, revision: u64) -> bool {
        if self.revision != revision || self.form.is_none() {
            return false;
        }
        self.cancel();
        true
    }

    fn open(&mut self, form: Form) {
        self.form = Some(form);
        self.revision += 1;
    }
}
