//! Venv-aware resolution and invocation of the mutmut executable.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::io::config::ManagerConfig;
use crate::io::process::{CommandResult, CommandRunner};

/// Platform indicator for venv layout selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }
}

/// Expected location of the engine executable inside a virtual environment.
///
/// Two fixed layouts exist: `bin/mutmut` on POSIX-like platforms and
/// `Scripts/mutmut.exe` on Windows.
pub fn venv_executable(venv_root: &Path, platform: Platform) -> PathBuf {
    match platform {
        Platform::Posix => venv_root.join("bin").join("mutmut"),
        Platform::Windows => venv_root.join("Scripts").join("mutmut.exe"),
    }
}

/// Build the full argv for one engine invocation.
///
/// With a venv root the executable must exist at the computed location,
/// otherwise resolution is refused with a descriptive error before any
/// spawn. The existence check and the later spawn are not atomic; a
/// removal in between surfaces as a launch failure from the runner.
pub fn engine_argv(
    config: &ManagerConfig,
    venv_path: Option<&Path>,
    args: &[&str],
) -> Result<Vec<String>, String> {
    let program = match venv_path {
        Some(root) => {
            let path = venv_executable(root, Platform::current());
            if !path.exists() {
                return Err(format!(
                    "Error: mutmut not found in the specified venv at {}. \
                     Please ensure mutmut is installed in the venv.",
                    path.display()
                ));
            }
            path.to_string_lossy().into_owned()
        }
        None => config.engine_binary.clone(),
    };

    let mut argv = Vec::with_capacity(args.len() + 1);
    argv.push(program);
    argv.extend(args.iter().map(|arg| arg.to_string()));
    Ok(argv)
}

/// Resolve and run one engine invocation.
///
/// A refused resolution is normalized into a failed [`CommandResult`] so
/// callers see a single outcome shape.
#[instrument(skip_all, fields(venv = venv_path.is_some()))]
pub fn run_engine<R: CommandRunner>(
    runner: &R,
    config: &ManagerConfig,
    venv_path: Option<&Path>,
    args: &[&str],
) -> CommandResult {
    match engine_argv(config, venv_path, args) {
        Ok(argv) => {
            debug!(program = %argv[0], "invoking engine");
            runner.execute(&argv)
        }
        Err(output) => CommandResult {
            succeeded: false,
            output,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedRunner;
    use std::fs;

    #[test]
    fn posix_layout_uses_bin() {
        let path = venv_executable(Path::new("/proj/.venv"), Platform::Posix);
        assert_eq!(path, PathBuf::from("/proj/.venv/bin/mutmut"));
    }

    #[test]
    fn windows_layout_uses_scripts() {
        let path = venv_executable(Path::new("venv"), Platform::Windows);
        assert_eq!(path, Path::new("venv").join("Scripts").join("mutmut.exe"));
    }

    #[test]
    fn without_venv_argv_uses_configured_binary() {
        let config = ManagerConfig::default();
        let argv = engine_argv(&config, None, &["results"]).expect("argv");
        assert_eq!(argv, vec!["mutmut".to_string(), "results".to_string()]);
    }

    #[test]
    fn missing_venv_executable_refuses_invocation() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config = ManagerConfig::default();

        let err = engine_argv(&config, Some(temp.path()), &["results"]).unwrap_err();
        assert!(
            err.starts_with("Error: mutmut not found in the specified venv at"),
            "got: {err}"
        );
        assert!(err.contains("Please ensure mutmut is installed in the venv."));
    }

    #[cfg(unix)]
    #[test]
    fn present_venv_executable_is_used() {
        let temp = tempfile::tempdir().expect("tempdir");
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).expect("bin dir");
        let exe = bin.join("mutmut");
        fs::write(&exe, b"").expect("touch executable");

        let config = ManagerConfig::default();
        let argv = engine_argv(&config, Some(temp.path()), &["survivors"]).expect("argv");
        assert_eq!(argv[0], exe.to_string_lossy());
        assert_eq!(argv[1], "survivors");
    }

    #[test]
    fn refused_resolution_never_reaches_the_runner() {
        let temp = tempfile::tempdir().expect("tempdir");
        let runner = ScriptedRunner::succeeding("should not run");
        let config = ManagerConfig::default();

        let result = run_engine(&runner, &config, Some(temp.path()), &["clean"]);
        assert!(!result.succeeded);
        assert!(result.output.starts_with("Error: mutmut not found"));
        assert!(runner.calls().is_empty());
    }
}
