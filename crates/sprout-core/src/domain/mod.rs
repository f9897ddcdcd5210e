// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Sprout.
//!
//! Everything here is pure: options, the structure tree and every pipeline
//! action are plain values and functions. Facts about the host are gathered
//! by the application layer through ports and handed in as [`HostFacts`].
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, process, or clock access
//! - **Values in, values out**: Actions take and return `(Structure, Options)`
//! - **Few external crates**: std, thiserror, tracing and serde derives
pub mod actions;
pub mod error;
pub mod extensions;
pub mod identifier;
pub mod license;
pub mod options;
pub mod pipeline;
pub mod structure;
pub mod templates;

pub use error::{DomainError, DomainResult, ErrorCategory};
pub use identifier::{is_valid_identifier, make_valid_identifier, prepare_namespace};
pub use license::{best_fit_license, find_license, license_keys, LicenseDef, DEFAULT_LICENSE, LICENSES};
pub use options::{Extension, HostFacts, LogLevel, Options, TargetState, ToolVersion};
pub use pipeline::{Action, ActionFn, Pipeline, Position};
pub use structure::{FileSpec, Node, Structure, UpdateRule};
pub use templates::RenderContext;
