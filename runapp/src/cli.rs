use clap::Parser;

/// Start the bundled PyQt5 app with the venv next to this launcher
#[derive(Parser, Debug)]
#[command(name = "run_app")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the resolved launch plan as JSON instead of launching
    #[arg(long, default_value = "false")]
    pub dry_run: bool,
}
