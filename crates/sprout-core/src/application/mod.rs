//! Application layer for Sprout.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, Materializer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer drives the domain pipeline and performs all I/O
//! through ports. Business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{Materializer, ScaffoldOutcome, ScaffoldService};

pub use ports::{Filesystem, HostEnvironment, Reporter, Vcs, Verb};

pub use error::ApplicationError;
