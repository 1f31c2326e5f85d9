//! Admin service: assignment review

use uuid::Uuid;

use crate::{
    config::PolicyConfig,
    constants::messages,
    db::AssignmentStore,
    error::{AppError, AppResult},
    models::{Assignment, AssignmentStatus, Decision},
};

/// Admin-facing operations
pub struct AdminService;

impl AdminService {
    /// All assignments addressed to `admin_id`
    pub async fn list_assignments(
        assignments: &dyn AssignmentStore,
        admin_id: &str,
    ) -> AppResult<Vec<Assignment>> {
        Ok(assignments.list_assignments_for_admin(admin_id).await?)
    }

    /// Apply an accept/reject decision to the assignment `id`.
    ///
    /// Under the default policy any authenticated caller may decide on any
    /// assignment and the new status overwrites whatever was there.
    pub async fn decide(
        assignments: &dyn AssignmentStore,
        policy: &PolicyConfig,
        caller_id: &str,
        id: &str,
        decision: Decision,
    ) -> AppResult<Assignment> {
        let id = Uuid::parse_str(id)
            .map_err(|_| AppError::BadRequest(format!("Invalid assignment id: {}", id)))?;

        let current = assignments
            .find_assignment(&id)
            .await?
            .ok_or_else(not_found)?;

        if policy.enforce_assignment_ownership && current.admin != caller_id {
            tracing::debug!(assignment_id = %id, caller_id, owner = %current.admin, "Decision by non-owning admin refused");
            return Err(not_found());
        }

        let expected = if policy.guard_status_transitions {
            if current.status.is_decided() {
                return Err(AppError::Conflict(format!(
                    "Assignment already {}",
                    current.status.as_str().to_lowercase()
                )));
            }
            Some(AssignmentStatus::Pending)
        } else {
            None
        };

        let updated = assignments
            .update_assignment_status(&id, decision.target(), expected)
            .await?;

        match updated {
            Some(assignment) => {
                tracing::info!(
                    assignment_id = %id,
                    caller_id,
                    from = %current.status,
                    to = %assignment.status,
                    "Assignment status changed"
                );
                Ok(assignment)
            }
            // Lost a compare-and-swap race
            None if expected.is_some() => Err(AppError::Conflict(
                "Assignment was decided concurrently".to_string(),
            )),
            None => Err(not_found()),
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound(messages::ASSIGNMENT_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        db::MemoryStore,
        models::NewAssignment,
    };

    async fn seed(store: &MemoryStore, admin: &str) -> Assignment {
        store
            .create_assignment(NewAssignment {
                user_id: "u1".to_string(),
                admin: admin.to_string(),
                task: json!({ "title": "T" }),
            })
            .await
            .unwrap()
    }

    fn strict() -> PolicyConfig {
        PolicyConfig {
            require_authenticated_upload: true,
            enforce_assignment_ownership: true,
            guard_status_transitions: true,
        }
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_admin() {
        let store = MemoryStore::new();
        seed(&store, "a1").await;
        seed(&store, "a2").await;

        let listed = AdminService::list_assignments(&store, "a1").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].admin, "a1");
    }

    #[tokio::test]
    async fn test_accept_then_reject_overwrites_by_default() {
        let store = MemoryStore::new();
        let policy = PolicyConfig::default();
        let assignment = seed(&store, "a1").await;
        let id = assignment.id.to_string();

        let accepted = AdminService::decide(&store, &policy, "a1", &id, Decision::Accept)
            .await
            .unwrap();
        assert_eq!(accepted.status, AssignmentStatus::Accepted);

        let rejected = AdminService::decide(&store, &policy, "a1", &id, Decision::Reject)
            .await
            .unwrap();
        assert_eq!(rejected.status, AssignmentStatus::Rejected);
    }

    #[tokio::test]
    async fn test_any_admin_may_decide_by_default() {
        let store = MemoryStore::new();
        let assignment = seed(&store, "a1").await;

        let decided = AdminService::decide(
            &store,
            &PolicyConfig::default(),
            "someone-else",
            &assignment.id.to_string(),
            Decision::Accept,
        )
        .await
        .unwrap();
        assert_eq!(decided.status, AssignmentStatus::Accepted);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let unknown = Uuid::new_v4().to_string();

        let err = AdminService::decide(&store, &PolicyConfig::default(), "a1", &unknown, Decision::Accept)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let store = MemoryStore::new();

        let err = AdminService::decide(&store, &PolicyConfig::default(), "a1", "not-a-uuid", Decision::Reject)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_ownership_policy_hides_foreign_assignments() {
        let store = MemoryStore::new();
        let assignment = seed(&store, "a1").await;

        let err = AdminService::decide(
            &store,
            &strict(),
            "a2",
            &assignment.id.to_string(),
            Decision::Accept,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let stored = store.find_assignment(&assignment.id).await.unwrap().unwrap();
        assert_eq!(stored.status, AssignmentStatus::Pending);
    }

    #[tokio::test]
    async fn test_guarded_transitions_refuse_second_decision() {
        let store = MemoryStore::new();
        let assignment = seed(&store, "a1").await;
        let id = assignment.id.to_string();

        AdminService::decide(&store, &strict(), "a1", &id, Decision::Accept)
            .await
            .unwrap();
        let err = AdminService::decide(&store, &strict(), "a1", &id, Decision::Reject)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        let stored = store.find_assignment(&assignment.id).await.unwrap().unwrap();
        assert_eq!(stored.status, AssignmentStatus::Accepted);
    }
}
