mod cli;
mod observability;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use runapp_core::{LaunchLayout, LauncherError};
use runapp_launcher::{build_launch_plan, launch};

fn main() -> ExitCode {
    observability::init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The binary's module path is `run_app`; log under the workspace target
            // so `runapp=...` directives cover it.
            tracing::error!(target: "runapp", error = %err, "launcher failed");
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let layout = LaunchLayout::from_current_exe().map_err(LauncherError::from)?;
    let plan = build_launch_plan(&layout).map_err(LauncherError::from)?;
    observability::audit_launch(&plan, cli.dry_run);

    if cli.dry_run {
        println!("{}", plan.to_pretty_json().context("Serialize launch plan")?);
        return Ok(());
    }

    match launch(&plan) {
        Ok(never) => match never {},
        Err(e) => Err(LauncherError::from(e).into()),
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<LauncherError>()
        .map(|e| e.exit_code())
        .and_then(|c| u8::try_from(c).ok())
        .unwrap_or(1)
}
