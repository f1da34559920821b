//! Launcher error taxonomy. Every variant is fatal.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure before the handoff: the launcher could not work out its own layout.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Cannot resolve launcher location: {0}")]
    ResolveSelf(#[source] io::Error),

    #[error("Launcher path '{0}' has no parent directory")]
    NoParent(PathBuf),

    #[error("No runtime available for language '{0}'")]
    UnsupportedRuntime(String),
}

/// Failure of the handoff itself.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Interpreter not found: {0}")]
    InterpreterNotFound(PathBuf),

    #[error("Interpreter is not executable: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to launch '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Classify an exec/spawn failure for `program`.
    pub fn from_io(program: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = program.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::InterpreterNotFound(path),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Io { path, source: err },
        }
    }
}

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl LauncherError {
    /// Process exit status, following the shell's conventions for a failed `exec`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Setup(_) => 1,
            Self::Launch(LaunchError::InterpreterNotFound(_)) => 127,
            Self::Launch(LaunchError::PermissionDenied(_)) => 126,
            Self::Launch(LaunchError::Io { .. }) => 1,
        }
    }
}
