//! Assignment model and its status lifecycle

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::constants::messages;

/// Review status of an assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AssignmentStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl AssignmentStatus {
    /// Get status as its stored name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// Check if an admin has already decided on the assignment
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Accepted" => Ok(Self::Accepted),
            "Rejected" => Ok(Self::Rejected),
            other => Err(format!("unknown assignment status: {}", other)),
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An admin's verdict on an assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    /// Status the assignment moves to
    pub fn target(&self) -> AssignmentStatus {
        match self {
            Self::Accept => AssignmentStatus::Accepted,
            Self::Reject => AssignmentStatus::Rejected,
        }
    }

    /// Acknowledgment returned to the caller
    pub fn message(&self) -> &'static str {
        match self {
            Self::Accept => messages::ASSIGNMENT_ACCEPTED,
            Self::Reject => messages::ASSIGNMENT_REJECTED,
        }
    }
}

/// Stored assignment record.
///
/// `user_id` and `admin` are opaque references; nothing checks that they
/// resolve to real users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: Uuid,
    pub user_id: String,
    pub admin: String,
    pub task: Value,
    pub status: AssignmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to persist a new assignment
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub user_id: String,
    pub admin: String,
    pub task: Value,
}
