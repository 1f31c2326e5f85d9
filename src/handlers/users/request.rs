//! User request DTOs
//!
//! No format rules are applied beyond what deserialization requires.

use serde::Deserialize;
use serde_json::Value;

/// Registration and login body
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Assignment upload body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadAssignmentRequest {
    /// May be omitted when the route is authenticated
    pub user_id: Option<String>,
    pub task: Value,
    pub admin: String,
}
