//! Build the launch plan from the resolved layout.

use std::path::PathBuf;

use runapp_core::{LaunchLayout, SetupError};

use crate::runner::LaunchPlan;
use crate::runtime_resolver::{RuntimeResolver, PYTHON};

/// Plan for running the bundled `app.py` with the venv interpreter.
///
/// Neither the plugin directory nor the entry file is checked here; a missing
/// interpreter surfaces when the runner tries to exec it.
pub fn build_launch_plan(layout: &LaunchLayout) -> Result<LaunchPlan, SetupError> {
    plan_for(layout, PYTHON, layout.app_entry())
}

/// Plan for running `entry` with whatever `resolver` picks for `language`.
pub fn plan_for<R>(resolver: &R, language: &str, entry: PathBuf) -> Result<LaunchPlan, SetupError>
where
    R: RuntimeResolver + ?Sized,
{
    let runtime = resolver
        .resolve(language)
        .ok_or_else(|| SetupError::UnsupportedRuntime(language.to_string()))?;

    tracing::debug!(
        interpreter = %runtime.interpreter.display(),
        entry = %entry.display(),
        "built launch plan"
    );

    Ok(LaunchPlan {
        program: runtime.interpreter,
        args: vec![entry],
        env: runtime.extra_env,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime_resolver::ResolvedRuntime;

    struct NoRuntimes;

    impl RuntimeResolver for NoRuntimes {
        fn resolve(&self, _language: &str) -> Option<ResolvedRuntime> {
            None
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_plan_for_opt_app() {
        let layout = LaunchLayout::from_script_dir("/opt/app");
        let plan = build_launch_plan(&layout).unwrap();
        assert_eq!(plan.program, PathBuf::from("/opt/app/.venv/bin/python"));
        assert_eq!(plan.args, vec![PathBuf::from("/opt/app/app.py")]);
        assert_eq!(
            plan.env,
            vec![(
                "QT_QPA_PLATFORM_PLUGIN_PATH".to_string(),
                PathBuf::from("/opt/app/.venv/lib/python3.12/site-packages/PyQt5/Qt5/plugins"),
            )]
        );
    }

    #[test]
    fn test_plan_does_not_require_files_to_exist() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = LaunchLayout::from_script_dir(tmp.path());
        let plan = build_launch_plan(&layout).unwrap();
        assert!(!plan.program.exists());
        assert!(!plan.env[0].1.exists());
        assert!(!plan.args[0].exists());
    }

    #[test]
    fn test_plan_is_repeatable() {
        let layout = LaunchLayout::from_script_dir("/srv/catalog");
        assert_eq!(
            build_launch_plan(&layout).unwrap(),
            build_launch_plan(&layout).unwrap()
        );
    }

    #[test]
    fn test_unsupported_runtime() {
        let err = plan_for(&NoRuntimes, "python", PathBuf::from("app.py")).unwrap_err();
        assert!(matches!(err, SetupError::UnsupportedRuntime(ref l) if l == "python"));
    }
}
