//! Sprout Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sprout
//! Python project scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           sprout-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ScaffoldService, Materializer)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Reporter, Vcs, HostEnv)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     sprout-adapters (Infrastructure)    │
//! │  (LocalFilesystem, GitCli, Reporters)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Options, Pipeline, Structure)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sprout_core::prelude::*;
//!
//! # fn run(service: ScaffoldService) -> SproutResult<()> {
//! let outcome = service.scaffold(Options::new("my-project").with_license("gpl3"))?;
//! println!("{} files", outcome.written.len());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, Materializer, ScaffoldOutcome, ScaffoldService,
        ports::{Filesystem, HostEnvironment, Reporter, Vcs, Verb},
    };
    pub use crate::domain::{
        DomainError, Extension, HostFacts, LogLevel, Options, Pipeline, Structure, TargetState,
        ToolVersion,
    };
    pub use crate::error::{SproutError, SproutResult};
}

