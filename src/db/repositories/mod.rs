//! Postgres repositories
//!
//! Repositories handle all direct database interactions.

pub mod assignment_repo;
pub mod user_repo;

pub use assignment_repo::AssignmentRepository;
pub use user_repo::UserRepository;
