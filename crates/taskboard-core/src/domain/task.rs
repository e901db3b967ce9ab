//! Task Entity
//!
//! Unit of work belonging to exactly one project. The parent is implied by the
//! endpoint the task was listed from, so it is not part of the entity.

use serde::{Deserialize, Serialize};

use super::entity::{typed_id, Entity};

typed_id!(
    /// Server-assigned task identifier
    TaskId
);

/// A task as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier (`id` or `_id` on the wire)
    #[serde(alias = "_id")]
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> &TaskId {
        &self.id
    }
}

/// Editable buffer for a task; the JSON body of the create request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            completed: task.completed,
        }
    }

    pub fn missing_field(&self) -> Option<&'static str> {
        self.title.trim().is_empty().then_some("title")
    }

    /// Full patch carrying every editable field
    pub fn to_patch(&self) -> TaskPatch {
        TaskPatch {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            completed: Some(self.completed),
        }
    }
}

/// Partial update body; `None` fields are left out of the JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch that only flips the completion flag
    pub fn completion(completed: bool) -> Self {
        Self { completed: Some(completed), ..Default::default() }
    }
}
