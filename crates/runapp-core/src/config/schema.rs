//! Structured config read once from the environment.

use super::env_keys::observability as obv_keys;
use super::loader::{env_bool, env_optional, env_or};

/// Default filter when neither `RUST_LOG` nor `RUNAPP_LOG_LEVEL` is set.
pub const DEFAULT_LOG_LEVEL: &str = "runapp=warn";

/// Logging and audit settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
    pub audit_log: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
            audit_log: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(Self::load)
    }

    /// Uncached read; [`Self::from_env`] is what callers normally want.
    pub fn load() -> Self {
        let quiet = env_bool(obv_keys::RUNAPP_QUIET, &[], false);
        let log_level = env_or(obv_keys::RUNAPP_LOG_LEVEL, &[], || {
            DEFAULT_LOG_LEVEL.to_string()
        });
        let log_json = env_bool(obv_keys::RUNAPP_LOG_JSON, &[], false);
        let audit_log = env_optional(obv_keys::RUNAPP_AUDIT_LOG, &[]);
        Self {
            quiet,
            log_level,
            log_json,
            audit_log,
        }
    }

    /// Filter directive for the subscriber. Quiet wins over the configured level.
    pub fn filter_directive(&self) -> String {
        if self.quiet {
            "runapp=error".to_string()
        } else {
            self.log_level.clone()
        }
    }
}
