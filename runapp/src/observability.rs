//! Observability: tracing init and the optional launch audit log.
//!
//! Uses config::ObservabilityConfig for RUNAPP_QUIET, LOG_LEVEL, LOG_JSON, AUDIT_LOG.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use runapp_core::config::ObservabilityConfig;
use runapp_launcher::LaunchPlan;
use serde_json::json;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Initialize tracing on stderr. Call at process startup.
/// `RUST_LOG` takes precedence over RUNAPP_LOG_LEVEL / RUNAPP_QUIET.
pub fn init_tracing() {
    let cfg = ObservabilityConfig::from_env();
    let level = cfg.filter_directive();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}

fn append_jsonl(path: &Path, record: &serde_json::Value) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
        if let Ok(line) = serde_json::to_string(record) {
            let _ = writeln!(f, "{}", line);
        }
    }
}

fn launch_record(plan: &LaunchPlan, dry_run: bool) -> serde_json::Value {
    json!({
        "ts": Utc::now().to_rfc3339(),
        "event": "launch",
        "interpreter": plan.program,
        "entry": plan.args.first(),
        "plugin_path": plan.env.first().map(|(_, v)| v),
        "dry_run": dry_run,
    })
}

/// Audit: one record per launch attempt, written before the handoff.
pub fn audit_launch(plan: &LaunchPlan, dry_run: bool) {
    if let Some(path) = ObservabilityConfig::from_env().audit_log.as_deref() {
        append_jsonl(Path::new(path), &launch_record(plan, dry_run));
    }
}
