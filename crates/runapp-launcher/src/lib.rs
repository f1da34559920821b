//! Hand the process over to the bundled venv interpreter.
//!
//! `env::builder` turns a [`runapp_core::LaunchLayout`] into a [`runner::LaunchPlan`];
//! `runner::launch` applies the plan's environment to the child command and
//! replaces the current process with it.

pub mod env;
pub mod runner;
pub mod runtime_resolver;

pub use env::builder::build_launch_plan;
pub use runner::{launch, LaunchPlan};
