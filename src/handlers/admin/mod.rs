//! Admin handlers: assignment review

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Admin routes (the caller layers the auth gate on top)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/assignments", get(handler::list_assignments))
        .route("/assignments/{id}/accept", post(handler::accept_assignment))
        .route("/assignments/{id}/reject", post(handler::reject_assignment))
}
