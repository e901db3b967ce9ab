//! Project Entity
//!
//! Top-level container owned by the signed-in user on the server.

use serde::{Deserialize, Serialize};

use super::entity::{typed_id, Entity};

typed_id!(
    /// Server-assigned project identifier
    ProjectId
);

/// A project as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier (`id` or `_id` on the wire)
    #[serde(alias = "_id")]
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Entity for Project {
    type Id = ProjectId;

    fn id(&self) -> &ProjectId {
        &self.id
    }
}

/// Editable buffer for creating or updating a project.
///
/// Also the JSON body of both the create and the update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
}

impl ProjectDraft {
    /// Seed a draft from an existing project (edit mode)
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone().unwrap_or_default(),
        }
    }

    /// Name of the first required field left blank, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        self.name.trim().is_empty().then_some("name")
    }
}
