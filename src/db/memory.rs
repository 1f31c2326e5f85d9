//! In-process store
//!
//! Backs `DATABASE_URL=memory://` and the test suite. Records live for the
//! lifetime of the process.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::store::{AssignmentStore, StoreError, StoreResult, UserStore};
use crate::models::{Assignment, AssignmentStatus, NewAssignment, NewUser, User};

/// Vec-backed store that keeps insertion order
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    assignments: RwLock<Vec<Assignment>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored assignments
    pub async fn assignment_count(&self) -> usize {
        self.assignments.read().await.len()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::Duplicate("Username".to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}

#[async_trait]
impl AssignmentStore for MemoryStore {
    async fn create_assignment(&self, assignment: NewAssignment) -> StoreResult<Assignment> {
        let now = Utc::now();
        let assignment = Assignment {
            id: Uuid::new_v4(),
            user_id: assignment.user_id,
            admin: assignment.admin,
            task: assignment.task,
            status: AssignmentStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.assignments.write().await.push(assignment.clone());
        Ok(assignment)
    }

    async fn find_assignment(&self, id: &Uuid) -> StoreResult<Option<Assignment>> {
        let assignments = self.assignments.read().await;
        Ok(assignments.iter().find(|a| &a.id == id).cloned())
    }

    async fn list_assignments_for_admin(&self, admin: &str) -> StoreResult<Vec<Assignment>> {
        let assignments = self.assignments.read().await;
        Ok(assignments
            .iter()
            .filter(|a| a.admin == admin)
            .cloned()
            .collect())
    }

    async fn update_assignment_status(
        &self,
        id: &Uuid,
        status: AssignmentStatus,
        expected: Option<AssignmentStatus>,
    ) -> StoreResult<Option<Assignment>> {
        // The write lock makes check-and-set atomic
        let mut assignments = self.assignments.write().await;
        let Some(assignment) = assignments.iter_mut().find(|a| &a.id == id) else {
            return Ok(None);
        };

        if expected.is_some_and(|expected| assignment.status != expected) {
            return Ok(None);
        }

        assignment.status = status;
        assignment.updated_at = Utc::now();
        Ok(Some(assignment.clone()))
    }
}
