//! Layered configuration loading using figment.
//!
//! Sources, lowest to highest priority:
//! 1. Compiled defaults ([`HelpdeskConfig::default`])
//! 2. A TOML file (`helpdesk.toml` in the working directory by default)
//! 3. Environment variables prefixed `HELPDESK_`, with `__` separating
//!    sections: `HELPDESK_LIFECYCLE__DEFAULT_ACTOR` sets
//!    `lifecycle.default_actor`.

use crate::task::domain::CompletionPolicy;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// File read by [`HelpdeskConfig::load`].
pub const DEFAULT_CONFIG_FILE: &str = "helpdesk.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "HELPDESK_";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the expected shape.
    #[error("configuration error: {0}")]
    Figment(Box<figment::Error>),

    /// A value parsed but is not usable.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpdeskConfig {
    /// Simulated backend latency.
    #[serde(default)]
    pub latency: LatencyConfig,
    /// Status change behaviour.
    #[serde(default)]
    pub lifecycle: LifecycleConfig,
    /// Dashboard list sizes.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl HelpdeskConfig {
    /// Loads configuration from [`DEFAULT_CONFIG_FILE`] and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source is malformed or a value is out
    /// of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads configuration from `path` and the environment.
    ///
    /// A missing file is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source is malformed or a value is out
    /// of range.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the provider chain without extracting it.
    #[must_use]
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.lifecycle.default_actor.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "lifecycle.default_actor",
                reason: "must not be empty",
            });
        }
        if self.dashboard.recent_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.recent_limit",
                reason: "must be at least 1",
            });
        }
        if self.dashboard.urgent_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.urgent_limit",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

/// Artificial delays, in milliseconds, applied before repository calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// Delay before listing tasks.
    pub list_ms: u64,
    /// Delay before looking up one task.
    pub detail_ms: u64,
    /// Delay before committing a task update.
    pub update_ms: u64,
    /// Delay before storing a new task.
    pub create_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list_ms: 1000,
            detail_ms: 800,
            update_ms: 1000,
            create_ms: 1500,
        }
    }
}

impl LatencyConfig {
    /// No delay anywhere; useful for tests.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            list_ms: 0,
            detail_ms: 0,
            update_ms: 0,
            create_ms: 0,
        }
    }

    /// Delay before listing tasks.
    #[must_use]
    pub const fn list(&self) -> Duration {
        Duration::from_millis(self.list_ms)
    }

    /// Delay before looking up one task.
    #[must_use]
    pub const fn detail(&self) -> Duration {
        Duration::from_millis(self.detail_ms)
    }

    /// Delay before committing a task update.
    #[must_use]
    pub const fn update(&self) -> Duration {
        Duration::from_millis(self.update_ms)
    }

    /// Delay before storing a new task.
    #[must_use]
    pub const fn create(&self) -> Duration {
        Duration::from_millis(self.create_ms)
    }
}

fn default_actor() -> String {
    "Carlos Silva".to_owned()
}

/// Status change settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleConfig {
    /// Name recorded on history entries when the caller names nobody.
    #[serde(default = "default_actor")]
    pub default_actor: String,
    /// Handling of `completed_at` when leaving the completed status.
    #[serde(default)]
    pub completion_policy: CompletionPolicy,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            default_actor: default_actor(),
            completion_policy: CompletionPolicy::default(),
        }
    }
}

const fn default_recent_limit() -> usize {
    5
}

const fn default_urgent_limit() -> usize {
    4
}

/// Dashboard list sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of recent tasks shown.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Number of urgent tasks shown.
    #[serde(default = "default_urgent_limit")]
    pub urgent_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            urgent_limit: default_urgent_limit(),
        }
    }
}
