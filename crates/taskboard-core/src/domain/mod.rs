//! Domain Layer
//!
//! Entities mirrored from the remote API and the drafts used to edit them.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod project;
mod task;

pub use entity::{Entity, EntityId};
pub use project::{Project, ProjectDraft, ProjectId};
pub use task::{Task, TaskDraft, TaskId, TaskPatch};
