//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain pipeline and the ports to accomplish
//! "create a project" and "update a project".

pub mod materializer;
pub mod scaffold_service;

pub use materializer::Materializer;
pub use scaffold_service::{ScaffoldOutcome, ScaffoldService};
