//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sprout-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::ToolVersion;
use crate::error::SproutResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sprout_adapters::filesystem::LocalFilesystem` (production)
/// - `sprout_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are used as given; the materializer joins them onto its root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SproutResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> SproutResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// What a [`Reporter`] line is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// A pipeline action is about to run.
    Invoke,
    /// A file or directory was created (or would be, under pretend).
    Create,
    /// An external command was run.
    Run,
    /// The working directory changed.
    Chdir,
}

impl Verb {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Invoke => "invoke",
            Self::Create => "create",
            Self::Run => "run",
            Self::Chdir => "chdir",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Port for the audit log of a run.
///
/// Implemented by:
/// - `sprout_adapters::reporter::TracingReporter` (production)
/// - `sprout_adapters::reporter::MemoryReporter` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Reporter: Send + Sync {
    fn report(&self, verb: Verb, subject: &str);
}

/// Port for version control.
///
/// Implemented by `sprout_adapters::vcs::GitCli`.
#[cfg_attr(test, mockall::automock)]
pub trait Vcs: Send + Sync {
    /// Value of a configuration key such as `user.name`, if set.
    fn config_value(&self, key: &str) -> Option<String>;

    /// Whether `dir` is already inside a repository.
    fn is_repository(&self, dir: &Path) -> bool;

    /// Initialize a repository in `dir` and stage `paths` (relative to `dir`).
    ///
    /// Under `pretend` every step is reported but nothing is executed.
    fn init_repository(&self, dir: &Path, paths: &[PathBuf], pretend: bool) -> SproutResult<()>;
}

/// Port for facts about the host.
///
/// Implemented by `sprout_adapters::environment::SystemEnvironment`.
#[cfg_attr(test, mockall::automock)]
pub trait HostEnvironment: Send + Sync {
    fn login_name(&self) -> Option<String>;

    fn hostname(&self) -> Option<String>;

    fn current_year(&self) -> i32;

    /// Installed setuptools version, `None` when it cannot be determined.
    fn setuptools_version(&self) -> Option<ToolVersion>;
}
