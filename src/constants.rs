//! Application-wide constants
//!
//! Constants are grouped by their purpose.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// `DATABASE_URL` value selecting the in-process store
pub const MEMORY_DATABASE_URL: &str = "memory://";

// =============================================================================
// PASSWORD HASHING DEFAULTS
// =============================================================================

/// Argon2 memory cost in KiB
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19 * 1024;

/// Argon2 iteration count
pub const DEFAULT_HASH_ITERATIONS: u32 = 2;

/// Argon2 lane count
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;

// =============================================================================
// AUTHENTICATION
// =============================================================================

/// Prefix expected in the `Authorization` header
pub const BEARER_PREFIX: &str = "Bearer ";

/// Login failure message, shared by "unknown user" and "wrong password"
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

pub mod messages {
    pub const USER_REGISTERED: &str = "User registered successfully";
    pub const ASSIGNMENT_UPLOADED: &str = "Assignment uploaded successfully";
    pub const ASSIGNMENT_ACCEPTED: &str = "Assignment accepted";
    pub const ASSIGNMENT_REJECTED: &str = "Assignment rejected";
    pub const ASSIGNMENT_NOT_FOUND: &str = "Assignment not found";
}
