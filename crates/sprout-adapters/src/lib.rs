//! Infrastructure adapters for Sprout.
//!
//! This crate implements the ports defined in `sprout-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod environment;
pub mod filesystem;
pub mod reporter;
pub mod vcs;
pub mod workdir;

// Re-export commonly used adapters
pub use environment::SystemEnvironment;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use reporter::{MemoryReporter, TracingReporter};
pub use vcs::GitCli;
pub use workdir::WorkingDir;
