//! User handler implementations

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    constants::messages,
    error::{AppError, AppResult},
    middleware::auth::OptionalAuth,
    services::UserService,
    state::AppState,
};

use super::{
    request::{CredentialsRequest, UploadAssignmentRequest},
    response::{MessageResponse, TokenResponse},
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(payload) = payload?;

    UserService::register(state.users(), state.auth(), &payload.username, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(messages::USER_REGISTERED)),
    ))
}

/// Log in with username and password
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AppResult<Json<TokenResponse>> {
    let Json(payload) = payload?;

    let (_, token) =
        UserService::login(state.users(), state.auth(), &payload.username, &payload.password)
            .await?;

    Ok(Json(TokenResponse { token }))
}

/// Upload an assignment for review
pub async fn upload_assignment(
    State(state): State<AppState>,
    OptionalAuth(caller): OptionalAuth,
    payload: Result<Json<UploadAssignmentRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(payload) = payload?;

    let user_id = payload
        .user_id
        .or_else(|| caller.map(|c| c.id))
        .ok_or_else(|| AppError::BadRequest("userId is required".to_string()))?;

    UserService::upload_assignment(state.assignments(), user_id, payload.admin, payload.task)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(messages::ASSIGNMENT_UPLOADED)),
    ))
}
