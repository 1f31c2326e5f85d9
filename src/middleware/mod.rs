//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::{AuthenticatedUser, OptionalAuth, auth_middleware};
pub use logging::logging_middleware;
