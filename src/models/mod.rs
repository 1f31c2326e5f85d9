//! Domain models

pub mod assignment;
pub mod user;

pub use assignment::*;
pub use user::*;
