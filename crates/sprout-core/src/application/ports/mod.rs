//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sprout-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `Reporter`: Audit log of invocations, creations and commands
//!   - `Vcs`: Git configuration and repository initialization
//!   - `HostEnvironment`: Login, host name, clock, Python toolchain
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, HostEnvironment, Reporter, Vcs, Verb};

#[cfg(test)]
pub use output::{MockFilesystem, MockHostEnvironment, MockReporter, MockVcs};
