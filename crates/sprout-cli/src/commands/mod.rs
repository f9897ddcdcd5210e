//! Command handlers.
//!
//! Each handler receives parsed arguments plus the loaded config and owns
//! the [`crate::output::OutputManager`] for the rest of the run.

pub mod licenses;
pub mod scaffold;
