//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use auth_service::{AuthService, Claims};
pub use user_service::UserService;
