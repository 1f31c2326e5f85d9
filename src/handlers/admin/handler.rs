//! Admin handler implementations
//!
//! Every route here sits behind the auth gate, so `AuthenticatedUser` is
//! always present.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::{Assignment, Decision},
    services::AdminService,
    state::AppState,
};

use super::response::MessageResponse;

/// List assignments addressed to the caller
pub async fn list_assignments(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<Assignment>>> {
    let assignments = AdminService::list_assignments(state.assignments(), &auth_user.id).await?;
    Ok(Json(assignments))
}

/// Mark an assignment accepted
pub async fn accept_assignment(
    state: State<AppState>,
    auth_user: AuthenticatedUser,
    id: Path<String>,
) -> AppResult<Json<MessageResponse>> {
    decide(state, auth_user, id, Decision::Accept).await
}

/// Mark an assignment rejected
pub async fn reject_assignment(
    state: State<AppState>,
    auth_user: AuthenticatedUser,
    id: Path<String>,
) -> AppResult<Json<MessageResponse>> {
    decide(state, auth_user, id, Decision::Reject).await
}

async fn decide(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<String>,
    decision: Decision,
) -> AppResult<Json<MessageResponse>> {
    AdminService::decide(
        state.assignments(),
        &state.config().policy,
        &auth_user.id,
        &id,
        decision,
    )
    .await?;

    Ok(Json(MessageResponse::new(decision.message())))
}
