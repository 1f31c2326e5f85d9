//! User response DTOs

use serde::Serialize;

/// Plain acknowledgment
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
