//! `sprout --list-licenses`.

use sprout_core::domain::license_keys;

use crate::{error::CliResult, output::OutputManager};

/// Print every known license key, one per line.
pub fn execute(output: OutputManager) -> CliResult<()> {
    output.list(license_keys())?;
    Ok(())
}
