//! Assignment repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    db::store::{AssignmentStore, StoreError, StoreResult},
    models::{Assignment, AssignmentStatus, NewAssignment},
};

const COLUMNS: &str = "id, user_id, admin, task, status, created_at, updated_at";

/// Postgres-backed assignment store
#[derive(Clone)]
pub struct AssignmentRepository {
    pool: PgPool,
}

#[derive(FromRow)]
struct AssignmentRow {
    id: Uuid,
    user_id: String,
    admin: String,
    task: Value,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AssignmentRow> for Assignment {
    type Error = StoreError;

    fn try_from(row: AssignmentRow) -> Result<Self, Self::Error> {
        Ok(Assignment {
            id: row.id,
            user_id: row.user_id,
            admin: row.admin,
            task: row.task,
            status: row.status.parse().map_err(StoreError::Backend)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl AssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentStore for AssignmentRepository {
    async fn create_assignment(&self, assignment: NewAssignment) -> StoreResult<Assignment> {
        let row = sqlx::query_as::<_, AssignmentRow>(&format!(
            r#"
            INSERT INTO assignments (user_id, admin, task, status)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&assignment.user_id)
        .bind(&assignment.admin)
        .bind(&assignment.task)
        .bind(AssignmentStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn find_assignment(&self, id: &Uuid) -> StoreResult<Option<Assignment>> {
        let row = sqlx::query_as::<_, AssignmentRow>(&format!(
            "SELECT {COLUMNS} FROM assignments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Assignment::try_from).transpose()
    }

    async fn list_assignments_for_admin(&self, admin: &str) -> StoreResult<Vec<Assignment>> {
        let rows = sqlx::query_as::<_, AssignmentRow>(&format!(
            "SELECT {COLUMNS} FROM assignments WHERE admin = $1 ORDER BY created_at"
        ))
        .bind(admin)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Assignment::try_from).collect()
    }

    async fn update_assignment_status(
        &self,
        id: &Uuid,
        status: AssignmentStatus,
        expected: Option<AssignmentStatus>,
    ) -> StoreResult<Option<Assignment>> {
        let row = sqlx::query_as::<_, AssignmentRow>(&format!(
            r#"
            UPDATE assignments
            SET status = $2, updated_at = NOW()
            WHERE id = $1 AND ($3::text IS NULL OR status = $3)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status.as_str())
        .bind(expected.map(|s| s.as_str()))
        .fetch_optional(&self.pool)
        .await?;

        row.map(Assignment::try_from).transpose()
    }
}
