//! Storage seams
//!
//! Services talk to persistence through these traits so that the Postgres
//! repositories and the in-process [`MemoryStore`](super::MemoryStore) are
//! interchangeable.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Assignment, AssignmentStatus, NewAssignment, NewUser, User};

/// Store failure categories surfaced to clients
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0} already exists")]
    Duplicate(String),

    #[error("Store unavailable")]
    Unavailable,

    /// Carries the backend's own message for logging only
    #[error("Store operation failed")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::Duplicate("Record".to_string())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable
            }
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// Credential store
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user; a taken username yields `StoreError::Duplicate`
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;
}

/// Assignment store
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    /// Persist a new assignment with status `Pending`
    async fn create_assignment(&self, assignment: NewAssignment) -> StoreResult<Assignment>;

    async fn find_assignment(&self, id: &Uuid) -> StoreResult<Option<Assignment>>;

    /// All assignments addressed to `admin`, in store order
    async fn list_assignments_for_admin(&self, admin: &str) -> StoreResult<Vec<Assignment>>;

    /// Overwrite the status of an assignment.
    ///
    /// With `expected` set the write only lands if the current status still
    /// equals it. Returns `None` when no record matched.
    async fn update_assignment_status(
        &self,
        id: &Uuid,
        status: AssignmentStatus,
        expected: Option<AssignmentStatus>,
    ) -> StoreResult<Option<Assignment>>;
}
