//! Launch environment builder: venv interpreter + Qt plugin path for the app.
//!
//! The runner receives only a `LaunchPlan`; it never looks at the layout.

pub mod builder;
