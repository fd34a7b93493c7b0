//! Remote task gateway boundary.
//!
//! The synchronization core talks to the remote store exclusively through
//! the [`TaskGateway`] trait, so tests can script settlements and the
//! production client stays a thin HTTP shim. Gateway errors are opaque to
//! the core: it reacts to success or failure, never to error contents.

use crate::libs::task::Task;
use serde::Serialize;

pub mod rest;

pub use rest::RestGateway;

/// Request body for create and update calls: every server-owned field
/// except the id, which the server assigns and never changes.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub owner: i64,
}

/// Errors produced at the gateway seam.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status code {0}")]
    Status(reqwest::StatusCode),
}

/// Asynchronous CRUD contract of the remote task store.
///
/// All four operations may fail with an opaque error. There is no
/// cancellation: once a request is issued it always runs to settlement,
/// and the caller's cleanup runs exactly once on either outcome.
#[allow(async_fn_in_trait)]
pub trait TaskGateway {
    /// Fetches the full task collection for `owner`.
    async fn list(&self, owner: i64) -> Result<Vec<Task>, GatewayError>;

    /// Creates a task; the server assigns the id and returns the full record.
    async fn create(&self, draft: &TaskDraft) -> Result<Task, GatewayError>;

    /// Updates a task; the returned record is authoritative for every field.
    async fn update(&self, id: i64, draft: &TaskDraft) -> Result<Task, GatewayError>;

    /// Deletes a task by id.
    async fn delete(&self, id: i64) -> Result<(), GatewayError>;
}
