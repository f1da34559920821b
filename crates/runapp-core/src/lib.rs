pub mod config;
pub mod error;
pub mod layout;

pub use error::{LaunchError, LauncherError, SetupError};
pub use layout::LaunchLayout;
