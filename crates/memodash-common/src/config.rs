//! Dashboard configuration model.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{MemodashError, Result};
use crate::types::{StatsSummary, Theme, UserProfile, Variant};

/// Root configuration for a dashboard session.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Variant mounted at startup.
    pub variant: Variant,
    /// Initial layout theme.
    pub theme: Theme,
    /// Terminal poll interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Users added by one stats refresh.
    pub users_increment: u64,
    /// Seed user record for a new store scope.
    pub user: UserProfile,
    /// Seed stats record for a new store scope.
    pub stats: StatsSummary,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            theme: Theme::default(),
            tick_rate_ms: constants::DEFAULT_TICK_RATE_MS,
            users_increment: constants::DEFAULT_USERS_INCREMENT,
            user: UserProfile::default(),
            stats: StatsSummary::default(),
        }
    }
}

impl DashboardConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON for
    /// this model, or fails [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| MemodashError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that would stall the event loop or make refreshes no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`MemodashError::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(MemodashError::Config {
                message: "tick_rate_ms must be greater than zero".into(),
            });
        }
        if self.users_increment == 0 {
            return Err(MemodashError::Config {
                message: "users_increment must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
