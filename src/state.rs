//! Application state management
//!
//! Shared state handed to every request handler via Axum's State extractor.
//! Everything a handler needs (stores, signing keys, policy) is reached
//! through here rather than through process globals.

use std::sync::Arc;

use crate::{
    config::Config,
    db::{AssignmentStore, Stores, UserStore},
    services::AuthService,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    stores: Stores,
    auth: AuthService,
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(stores: Stores, auth: AuthService, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                stores,
                auth,
                config,
            }),
        }
    }

    /// Credential store
    pub fn users(&self) -> &dyn UserStore {
        self.inner.stores.users.as_ref()
    }

    /// Assignment store
    pub fn assignments(&self) -> &dyn AssignmentStore {
        self.inner.stores.assignments.as_ref()
    }

    /// Password hashing and token signing
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
