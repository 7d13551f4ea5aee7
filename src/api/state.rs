//! Application state for the Liquidation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, LegalConstants};

/// Shared application state.
///
/// Holds the legal constants, loaded once and shared read-only across all
/// request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded legal constants.
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

    /// Returns the legal constants.
    pub fn constants(&self) -> &LegalConstants {
        self.config.constants()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}
