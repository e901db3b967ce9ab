//! Taskboard Core
//!
//! Platform-neutral state synchronization for the project/task board.
//!
//! Layered architecture:
//! - domain: Projects, tasks and their editable drafts
//! - session: Credential handling and the login gate
//! - remote: Contract for the CRUD API and its HTTP implementation
//! - board: Client state (stores, form controller, status) and the controller
//!   that reconciles it with remote responses

pub mod domain;
pub mod session;
pub mod remote;
pub mod board;

pub use board::{ActionError, ActionResult, Board, BoardHandle, Controller, EntityKind, Form, Modal, Status};
pub use domain::{Entity, EntityId, Project, ProjectDraft, ProjectId, Task, TaskDraft, TaskId, TaskPatch};
pub use remote::{ApiConfig, ApiError, ApiResult, HttpRemote, Operation, Remote};
pub use session::{CredentialStore, Gate, Session, SessionGate};
