//! Host environment adapter.

use std::env;
use std::process::Command;

use chrono::{Datelike, Local};
use sprout_core::{application::ports::HostEnvironment, domain::ToolVersion};
use tracing::debug;

const PYTHONS: &[&str] = &["python3", "python"];
const SETUPTOOLS_PROBE: &str = "import setuptools; print(setuptools.__version__)";

/// [`HostEnvironment`] reading environment variables, the local clock and
/// the Python interpreter on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl HostEnvironment for SystemEnvironment {
    fn login_name(&self) -> Option<String> {
        ["USER", "USERNAME", "LOGNAME"]
            .iter()
            .find_map(|key| non_empty(env::var(key).ok()))
    }

    fn hostname(&self) -> Option<String> {
        non_empty(env::var("HOSTNAME").ok()).or_else(|| {
            let output = Command::new("hostname").output().ok()?;
            output
                .status
                .success()
                .then(|| String::from_utf8_lossy(&output.stdout).into_owned())
                .and_then(|s| non_empty(Some(s)))
        })
    }

    fn current_year(&self) -> i32 {
        Local::now().year()
    }

    fn setuptools_version(&self) -> Option<ToolVersion> {
        PYTHONS.iter().find_map(|python| {
            let output = Command::new(python)
                .args(["-c", SETUPTOOLS_PROBE])
                .output()
                .ok()?;
            if !output.status.success() {
                debug!(python, "setuptools not importable");
                return None;
            }
            parse_version_output(&String::from_utf8_lossy(&output.stdout))
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// First line of interpreter output as a version.
fn parse_version_output(stdout: &str) -> Option<ToolVersion> {
    stdout.lines().next()?.parse().ok()
}
