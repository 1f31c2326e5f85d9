//! User service: registration, login and assignment upload

use serde_json::Value;

use crate::{
    config::BootstrapAdmin,
    db::{AssignmentStore, StoreError, UserStore},
    error::{AppError, AppResult},
    models::{Assignment, NewAssignment, NewUser, Role, User},
};

use super::AuthService;

/// User-facing operations
pub struct UserService;

impl UserService {
    /// Register a new account with role `User`
    pub async fn register(
        users: &dyn UserStore,
        auth: &AuthService,
        username: &str,
        password: &str,
    ) -> AppResult<User> {
        Self::create_with_role(users, auth, username, password, Role::User).await
    }

    /// Log in and issue a bearer token.
    ///
    /// An unknown username and a wrong password fail identically.
    pub async fn login(
        users: &dyn UserStore,
        auth: &AuthService,
        username: &str,
        password: &str,
    ) -> AppResult<(User, String)> {
        let user = users
            .find_user_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !auth.verify_password(password, &user.password_hash).await? {
            return Err(AppError::InvalidCredentials);
        }

        let token = auth.issue_token(&user)?;
        Ok((user, token))
    }

    /// Store a new assignment with status `Pending`.
    ///
    /// `user_id` and `admin` are taken as given; they are not checked
    /// against the credential store.
    pub async fn upload_assignment(
        assignments: &dyn AssignmentStore,
        user_id: String,
        admin: String,
        task: Value,
    ) -> AppResult<Assignment> {
        if task.is_null() {
            return Err(AppError::BadRequest("task is required".to_string()));
        }

        let assignment = assignments
            .create_assignment(NewAssignment {
                user_id,
                admin,
                task,
            })
            .await?;

        tracing::info!(
            assignment_id = %assignment.id,
            user_id = %assignment.user_id,
            admin = %assignment.admin,
            "Assignment uploaded"
        );

        Ok(assignment)
    }

    /// Create the configured admin account unless the username is taken.
    ///
    /// Returns `true` when an account was created.
    pub async fn ensure_admin(
        users: &dyn UserStore,
        auth: &AuthService,
        admin: &BootstrapAdmin,
    ) -> AppResult<bool> {
        if let Some(existing) = users.find_user_by_username(&admin.username).await? {
            if !existing.is_admin() {
                tracing::warn!(username = %existing.username, role = %existing.role, "Bootstrap admin username is taken by a non-admin account");
            }
            return Ok(false);
        }

        match Self::create_with_role(users, auth, &admin.username, &admin.password, Role::Admin)
            .await
        {
            Ok(_) => Ok(true),
            // Another instance won the race
            Err(AppError::Store(StoreError::Duplicate(_))) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn create_with_role(
        users: &dyn UserStore,
        auth: &AuthService,
        username: &str,
        password: &str,
        role: Role,
    ) -> AppResult<User> {
        let password_hash = auth.hash_password(password).await?;

        let user = users
            .create_user(NewUser {
                username: username.to_string(),
                password_hash,
                role,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, role = %user.role, "User registered");

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{db::MemoryStore, models::AssignmentStatus, services::auth_service::test_auth_service};

    #[tokio::test]
    async fn test_register_then_login_issues_matching_claims() {
        let store = MemoryStore::new();
        let auth = test_auth_service("secret");

        let user = UserService::register(&store, &auth, "alice", "pw").await.unwrap();
        assert_eq!(user.role, Role::User);
        assert_ne!(user.password_hash, "pw");

        let (logged_in, token) = UserService::login(&store, &auth, "alice", "pw").await.unwrap();
        assert_eq!(logged_in.id, user.id);

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.id, user.id.to_string());
        assert_eq!(claims.role, Role::User);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_fail_identically() {
        let store = MemoryStore::new();
        let auth = test_auth_service("secret");
        UserService::register(&store, &auth, "alice", "pw").await.unwrap();

        let wrong_password = UserService::login(&store, &auth, "alice", "nope").await.unwrap_err();
        let unknown_user = UserService::login(&store, &auth, "bob", "pw").await.unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_user, AppError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_a_store_error() {
        let store = MemoryStore::new();
        let auth = test_auth_service("secret");
        UserService::register(&store, &auth, "alice", "pw").await.unwrap();

        let err = UserService::register(&store, &auth, "alice", "other").await.unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_upload_starts_pending() {
        let store = MemoryStore::new();
        let assignment =
            UserService::upload_assignment(&store, "u1".into(), "a1".into(), json!("T"))
                .await
                .unwrap();

        assert_eq!(assignment.status, AssignmentStatus::Pending);
        assert_eq!(assignment.user_id, "u1");
        assert_eq!(assignment.admin, "a1");
    }

    #[tokio::test]
    async fn test_upload_rejects_null_task() {
        let store = MemoryStore::new();
        let err = UserService::upload_assignment(&store, "u1".into(), "a1".into(), Value::Null)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(store.assignment_count().await, 0);
    }

    #[tokio::test]
    async fn test_ensure_admin_leaves_existing_non_admin_untouched() {
        let store = MemoryStore::new();
        let auth = test_auth_service("secret");
        UserService::register(&store, &auth, "root", "user-pw").await.unwrap();
        let admin = BootstrapAdmin {
            username: "root".to_string(),
            password: "admin-pw".to_string(),
        };

        assert!(!UserService::ensure_admin(&store, &auth, &admin).await.unwrap());

        let (user, _) = UserService::login(&store, &auth, "root", "user-pw").await.unwrap();
        assert!(!user.is_admin());
    }

    #[tokio::test]
    async fn test_ensure_admin_is_idempotent() {
        let store = MemoryStore::new();
        let auth = test_auth_service("secret");
        let admin = BootstrapAdmin {
            username: "root".to_string(),
            password: "pw".to_string(),
        };

        assert!(UserService::ensure_admin(&store, &auth, &admin).await.unwrap());
        assert!(!UserService::ensure_admin(&store, &auth, &admin).await.unwrap());

        let (user, _) = UserService::login(&store, &auth, "root", "pw").await.unwrap();
        assert!(user.is_admin());
    }
}
