//! Process handoff.
//!
//! On Unix the launcher execs the interpreter in place, so the app keeps the
//! launcher's pid, signals and exit status. Elsewhere it spawns, waits and
//! exits with the child's code.

use std::convert::Infallible;
use std::path::PathBuf;
use std::process::Command;

use runapp_core::config::ObservabilityConfig;
use runapp_core::LaunchError;
use serde::Serialize;

/// Fully resolved handoff: program, arguments and child-only environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub program: PathBuf,
    pub args: Vec<PathBuf>,
    /// Applied with `Command::env`; overrides inherited values of the same key.
    pub env: Vec<(String, PathBuf)>,
}

impl LaunchPlan {
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Command for the plan. The caller's environment is inherited, plus `env`.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd
    }
}

/// RUNAPP_QUIET=1 suppresses the INFO handoff line.
fn is_quiet() -> bool {
    ObservabilityConfig::from_env().quiet
}

/// Replace the current process with the plan. Only returns on failure.
#[cfg(unix)]
pub fn launch(plan: &LaunchPlan) -> Result<Infallible, LaunchError> {
    use std::os::unix::process::CommandExt;

    if !is_quiet() {
        tracing::info!(
            "exec {} {}",
            plan.program.display(),
            plan.args
                .iter()
                .map(|a| a.display().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );
    }
    let err = plan.command().exec();
    tracing::debug!(error = %err, "exec failed");
    Err(LaunchError::from_io(&plan.program, err))
}

/// Spawn the plan, wait, and exit with the child's status.
#[cfg(not(unix))]
pub fn launch(plan: &LaunchPlan) -> Result<Infallible, LaunchError> {
    if !is_quiet() {
        tracing::info!("spawn {}", plan.program.display());
    }
    let status = plan
        .command()
        .status()
        .map_err(|e| LaunchError::from_io(&plan.program, e))?;
    tracing::debug!(?status, "child exited");
    std::process::exit(status.code().unwrap_or(1));
}
