//! Launch layout: every path the launcher needs, derived from its own directory.
//!
//! Nothing here touches the current working directory, so the launcher behaves
//! the same wherever it is invoked from. Paths are joined, never checked for
//! existence.

use std::path::{Path, PathBuf};

use crate::error::SetupError;

/// Virtual environment directory, relative to the launcher.
pub const VENV_DIR: &str = ".venv";

/// Application entry point, a sibling of the launcher.
pub const APP_ENTRY: &str = "app.py";

/// Qt platform plugins shipped inside the PyQt5 wheel, relative to the venv.
pub const QT_PLUGIN_SUBDIR: &[&str] = &[
    "lib",
    "python3.12",
    "site-packages",
    "PyQt5",
    "Qt5",
    "plugins",
];

/// Resolved location of the launcher and everything derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchLayout {
    /// Canonical (symlink-resolved) directory containing the launcher.
    pub script_dir: PathBuf,
}

impl LaunchLayout {
    /// Layout for the running executable.
    pub fn from_current_exe() -> Result<Self, SetupError> {
        let exe = std::env::current_exe().map_err(SetupError::ResolveSelf)?;
        Self::from_executable(&exe)
    }

    /// Layout for the launcher at `exe`. Symlinks are followed to the real file.
    pub fn from_executable(exe: &Path) -> Result<Self, SetupError> {
        let real = exe.canonicalize().map_err(SetupError::ResolveSelf)?;
        let dir = real
            .parent()
            .ok_or_else(|| SetupError::NoParent(real.clone()))?;
        tracing::debug!(exe = %exe.display(), script_dir = %dir.display(), "resolved launcher location");
        Ok(Self::from_script_dir(dir))
    }

    /// Layout rooted at an already-resolved directory.
    pub fn from_script_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            script_dir: dir.into(),
        }
    }

    pub fn venv_dir(&self) -> PathBuf {
        self.script_dir.join(VENV_DIR)
    }

    /// Venv interpreter: `bin/python` on Unix, `Scripts/python.exe` on Windows.
    pub fn interpreter(&self) -> PathBuf {
        let venv = self.venv_dir();
        if cfg!(windows) {
            venv.join("Scripts").join("python.exe")
        } else {
            venv.join("bin").join("python")
        }
    }

    pub fn plugin_dir(&self) -> PathBuf {
        QT_PLUGIN_SUBDIR
            .iter()
            .fold(self.venv_dir(), |p, seg| p.join(seg))
    }

    pub fn app_entry(&self) -> PathBuf {
        self.script_dir.join(APP_ENTRY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_paths_for_opt_app() {
        let layout = LaunchLayout::from_script_dir("/opt/app");
        assert_eq!(layout.venv_dir(), PathBuf::from("/opt/app/.venv"));
        assert_eq!(layout.interpreter(), PathBuf::from("/opt/app/.venv/bin/python"));
        assert_eq!(
            layout.plugin_dir(),
            PathBuf::from("/opt/app/.venv/lib/python3.12/site-packages/PyQt5/Qt5/plugins")
        );
        assert_eq!(layout.app_entry(), PathBuf::from("/opt/app/app.py"));
    }

    #[test]
    fn test_from_executable_uses_parent_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = tmp.path().join("run_app");
        std::fs::write(&exe, b"").unwrap();

        let layout = LaunchLayout::from_executable(&exe).unwrap();
        assert_eq!(layout.script_dir, tmp.path().canonicalize().unwrap());
        assert!(layout.app_entry().starts_with(&layout.script_dir));
    }

    #[test]
    fn test_derivation_is_stable_across_calls() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = tmp.path().join("run_app");
        std::fs::write(&exe, b"").unwrap();

        let a = LaunchLayout::from_executable(&exe).unwrap();
        let b = LaunchLayout::from_executable(&exe).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.plugin_dir(), b.plugin_dir());
    }

    #[test]
    fn test_missing_executable_is_setup_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = LaunchLayout::from_executable(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, SetupError::ResolveSelf(_)));
    }

    #[test]
    fn test_dotdot_in_exe_path_is_normalised() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("run_app"), b"").unwrap();
        let sub = tmp.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        let exe = sub.join("..").join("run_app");

        let layout = LaunchLayout::from_executable(&exe).unwrap();
        assert!(layout.script_dir.is_absolute());
        assert_eq!(layout.script_dir, tmp.path().canonicalize().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_launcher_resolves_to_target_dir() {
        let real_dir = tempfile::tempdir().unwrap();
        let link_dir = tempfile::tempdir().unwrap();
        let exe = real_dir.path().join("run_app");
        std::fs::write(&exe, b"").unwrap();
        let link = link_dir.path().join("run_app");
        std::os::unix::fs::symlink(&exe, &link).unwrap();

        let layout = LaunchLayout::from_executable(&link).unwrap();
        assert_eq!(layout.script_dir, real_dir.path().canonicalize().unwrap());
    }
}
