//! Postgres repository tests
//!
//! Each test starts its own PostgreSQL container, so they need a Docker
//! daemon: `cargo test -- --ignored`.

use serde_json::json;
use sqlx::PgPool;
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use uuid::Uuid;

use assignment_desk::{
    db::{AssignmentRepository, AssignmentStore, StoreError, UserRepository, UserStore, run_migrations},
    models::{AssignmentStatus, NewAssignment, NewUser, Role},
};

/// Start a migrated database; the container lives as long as the returned handle
async fn start_postgres() -> (ContainerAsync<Postgres>, PgPool) {
    let container = Postgres::default()
        .with_tag("16-alpine")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    let url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

    let pool = PgPool::connect(&url)
        .await
        .expect("Failed to connect to test database");
    run_migrations(&pool).await.expect("Failed to run migrations");

    (container, pool)
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        role: Role::User,
    }
}

async fn seed_assignment(repo: &AssignmentRepository, admin: &str) -> Uuid {
    repo.create_assignment(NewAssignment {
        user_id: "u1".to_string(),
        admin: admin.to_string(),
        task: json!({ "title": "T" }),
    })
    .await
    .unwrap()
    .id
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_username_maps_to_duplicate() {
    let (_container, pool) = start_postgres().await;
    let repo = UserRepository::new(pool);

    let created = repo.create_user(new_user("alice")).await.unwrap();
    assert_eq!(created.role, Role::User);

    let err = repo.create_user(new_user("alice")).await.unwrap_err();
    assert!(matches!(&err, StoreError::Duplicate(what) if what == "Username"));
    assert_eq!(err.to_string(), "Username already exists");

    let found = repo.find_user_by_username("alice").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_created_assignment_round_trips() {
    let (_container, pool) = start_postgres().await;
    let repo = AssignmentRepository::new(pool);

    let id = seed_assignment(&repo, "a1").await;
    seed_assignment(&repo, "a2").await;

    let listed = repo.list_assignments_for_admin("a1").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].status, AssignmentStatus::Pending);
    assert_eq!(listed[0].task, json!({ "title": "T" }));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unconditional_update_overwrites_decided_status() {
    let (_container, pool) = start_postgres().await;
    let repo = AssignmentRepository::new(pool);
    let id = seed_assignment(&repo, "a1").await;

    let accepted = repo
        .update_assignment_status(&id, AssignmentStatus::Accepted, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(accepted.status, AssignmentStatus::Accepted);

    let rejected = repo
        .update_assignment_status(&id, AssignmentStatus::Rejected, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rejected.status, AssignmentStatus::Rejected);
    assert!(rejected.updated_at >= accepted.updated_at);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_conditional_update_misses_when_status_moved() {
    let (_container, pool) = start_postgres().await;
    let repo = AssignmentRepository::new(pool);
    let id = seed_assignment(&repo, "a1").await;
    let pending = Some(AssignmentStatus::Pending);

    let first = repo
        .update_assignment_status(&id, AssignmentStatus::Accepted, pending)
        .await
        .unwrap();
    assert!(first.is_some());

    let second = repo
        .update_assignment_status(&id, AssignmentStatus::Rejected, pending)
        .await
        .unwrap();
    assert!(second.is_none());

    let stored = repo.find_assignment(&id).await.unwrap().unwrap();
    assert_eq!(stored.status, AssignmentStatus::Accepted);

    let unknown = repo
        .update_assignment_status(&Uuid::new_v4(), AssignmentStatus::Accepted, None)
        .await
        .unwrap();
    assert!(unknown.is_none());
}
