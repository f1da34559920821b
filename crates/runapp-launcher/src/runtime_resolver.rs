//! RuntimeResolver trait: selects the interpreter and its extra environment.

use std::path::PathBuf;

use runapp_core::config::env_keys;
use runapp_core::LaunchLayout;

pub const PYTHON: &str = "python";

/// Resolved runtime for a given language: interpreter path and env vars for the child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRuntime {
    /// Path to the interpreter executable
    pub interpreter: PathBuf,
    /// Environment variables set on the child only
    pub extra_env: Vec<(String, PathBuf)>,
}

/// Resolve an interpreter by language. Returns `None` if the language is not supported.
pub trait RuntimeResolver {
    fn resolve(&self, language: &str) -> Option<ResolvedRuntime>;
}

/// The bundled venv: its interpreter plus the PyQt5 platform plugin directory.
impl RuntimeResolver for LaunchLayout {
    fn resolve(&self, language: &str) -> Option<ResolvedRuntime> {
        match language {
            PYTHON => Some(ResolvedRuntime {
                interpreter: self.interpreter(),
                extra_env: vec![(
                    env_keys::QT_QPA_PLATFORM_PLUGIN_PATH.to_string(),
                    self.plugin_dir(),
                )],
            }),
            _ => None,
        }
    }
}
