//! Environment variable keys.
//!
//! `RUNAPP_*` keys only tune logging; none of them changes where the launcher
//! looks for the venv or the app.

/// Exported to the child: directory holding the Qt platform plugins.
pub const QT_QPA_PLATFORM_PLUGIN_PATH: &str = "QT_QPA_PLATFORM_PLUGIN_PATH";

/// Logging and audit
pub mod observability {
    pub const RUNAPP_QUIET: &str = "RUNAPP_QUIET";
    pub const RUNAPP_LOG_LEVEL: &str = "RUNAPP_LOG_LEVEL";
    pub const RUNAPP_LOG_JSON: &str = "RUNAPP_LOG_JSON";

    /// JSONL file that receives one record per launch attempt.
    pub const RUNAPP_AUDIT_LOG: &str = "RUNAPP_AUDIT_LOG";
}
