//! Scoped change of the process working directory.

use std::env;
use std::path::{Path, PathBuf};

use sprout_core::{
    application::{
        ApplicationError,
        ports::{Reporter, Verb},
    },
    error::SproutResult,
};
use tracing::warn;

/// Working-directory guard.
///
/// [`enter`](Self::enter) switches into `path` and the previous directory is
/// restored when the guard drops, on every exit path. Under pretend the
/// directory does not change, but the `chdir` is still reported.
#[derive(Debug)]
pub struct WorkingDir {
    previous: Option<PathBuf>,
}

impl WorkingDir {
    pub fn enter(path: &Path, pretend: bool, reporter: &dyn Reporter) -> SproutResult<Self> {
        reporter.report(Verb::Chdir, &path.display().to_string());
        if pretend {
            return Ok(Self { previous: None });
        }

        let previous = env::current_dir().map_err(|e| ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: format!("Failed to read current directory: {}", e),
        })?;
        env::set_current_dir(path).map_err(|e| ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: format!("Failed to change directory: {}", e),
        })?;

        Ok(Self {
            previous: Some(previous),
        })
    }
}

impl Drop for WorkingDir {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            if let Err(e) = env::set_current_dir(&previous) {
                warn!(error = %e, path = %previous.display(), "Could not restore working directory");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::MemoryReporter;

    // The working directory is process-global: keep every cwd assertion in
    // this one test.
    #[test]
    fn guard_changes_and_restores_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().canonicalize().unwrap();
        let start = env::current_dir().unwrap();
        let reporter = MemoryReporter::new();

        {
            let _guard = WorkingDir::enter(&target, false, &reporter).unwrap();
            assert_eq!(env::current_dir().unwrap().canonicalize().unwrap(), target);
        }
        assert_eq!(env::current_dir().unwrap(), start);

        {
            let _guard = WorkingDir::enter(&target, true, &reporter).unwrap();
            assert_eq!(env::current_dir().unwrap(), start);
        }

        let early_return = || -> SproutResult<()> {
            let _guard = WorkingDir::enter(&target, false, &reporter)?;
            Err(ApplicationError::StoreLockError.into())
        };
        assert!(early_return().is_err());
        assert_eq!(env::current_dir().unwrap(), start);

        assert!(WorkingDir::enter(&target.join("missing"), false, &reporter).is_err());
        assert_eq!(env::current_dir().unwrap(), start);

        assert_eq!(reporter.records().len(), 4);
        assert!(reporter.records().iter().all(|(verb, _)| *verb == Verb::Chdir));
    }
}
