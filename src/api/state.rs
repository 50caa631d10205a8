//! Application state for the Dock Booking Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{BookingPolicy, ConfigLoader};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded booking policy.
#[derive(Clone)]
pub struct AppState {
    /// The loaded booking policy.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the booking policy in force.
    pub fn policy(&self) -> &BookingPolicy {
        self.config.policy()
    }
}
