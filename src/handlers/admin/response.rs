//! Admin response DTOs

pub use crate::handlers::users::response::MessageResponse;
