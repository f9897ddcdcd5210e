//! Git adapter shelling out to the `git` executable.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use sprout_core::{
    application::{
        ApplicationError,
        ports::{Reporter, Vcs, Verb},
    },
    error::SproutResult,
};
use tracing::debug;

use crate::workdir::WorkingDir;

/// [`Vcs`] backed by the `git` command line.
///
/// Repository initialization switches into the project directory for the
/// duration of the git calls and reports every step.
#[derive(Clone)]
pub struct GitCli {
    reporter: Arc<dyn Reporter>,
}

impl GitCli {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self { reporter }
    }

    /// Report `git <args>` and run it unless `pretend`.
    fn run(&self, args: &[String], pretend: bool) -> SproutResult<()> {
        let command = format!("git {}", args.join(" "));
        self.reporter.report(Verb::Run, &command);
        if pretend {
            return Ok(());
        }

        debug!(%command, "Running");
        let output = Command::new("git")
            .args(args)
            .output()
            .map_err(|e| ApplicationError::CommandFailed {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ApplicationError::CommandFailed {
                command,
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into())
        }
    }
}

impl Vcs for GitCli {
    fn config_value(&self, key: &str) -> Option<String> {
        let output = Command::new("git")
            .args(["config", "--get", key])
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!value.is_empty()).then_some(value)
    }

    fn is_repository(&self, dir: &Path) -> bool {
        Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(["rev-parse", "--is-inside-work-tree"])
            .output()
            .is_ok_and(|out| out.status.success() && out.stdout.starts_with(b"true"))
    }

    fn init_repository(&self, dir: &Path, paths: &[PathBuf], pretend: bool) -> SproutResult<()> {
        let _cwd = WorkingDir::enter(dir, pretend, self.reporter.as_ref())?;

        self.run(&["init".to_string()], pretend)?;
        if paths.is_empty() {
            return Ok(());
        }

        let mut add = vec!["add".to_string()];
        add.extend(paths.iter().map(|p| p.display().to_string()));
        self.run(&add, pretend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::MemoryReporter;

    #[test]
    fn pretend_reports_every_step_without_running() {
        let reporter = MemoryReporter::new();
        let git = GitCli::new(Arc::new(reporter.clone()));

        git.init_repository(
            Path::new("/does/not/exist"),
            &[PathBuf::from("setup.py"), PathBuf::from("pkg/__init__.py")],
            true,
        )
        .unwrap();

        assert_eq!(
            reporter.lines(),
            vec![
                "chdir /does/not/exist",
                "run git init",
                "run git add setup.py pkg/__init__.py",
            ]
        );
    }

    #[test]
    fn nothing_to_add_skips_git_add() {
        let reporter = MemoryReporter::new();
        GitCli::new(Arc::new(reporter.clone()))
            .init_repository(Path::new("p"), &[], true)
            .unwrap();
        assert_eq!(reporter.find(Verb::Run, "git add"), None);
    }
}
