//! Assignment Desk - assignment submission and review backend
//!
//! Users register, log in and upload assignments addressed to an admin.
//! Admins list the assignments addressed to them and accept or reject them.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Middleware**: the bearer-token auth gate and request logging
//! - **Services**: Business logic
//! - **Stores**: persistence traits with Postgres and in-memory backends
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::app;
pub use state::AppState;
