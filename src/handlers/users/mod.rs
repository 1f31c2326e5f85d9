//! User handlers: registration, login and assignment upload

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, middleware, routing::post};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// User routes; upload goes through the auth gate when policy asks for it
pub fn routes(state: &AppState) -> Router<AppState> {
    let upload = if state.config().policy.require_authenticated_upload {
        Router::new().route(
            "/upload",
            post(handler::upload_assignment).route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
    } else {
        Router::new().route("/upload", post(handler::upload_assignment))
    };

    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .merge(upload)
}
