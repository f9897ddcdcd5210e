//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SPROUT_DEFAULTS__AUTHOR`, `SPROUT_OUTPUT__NO_COLOR`, ...
//! 3. Config file (`--config FILE`, or the per-user `config.toml`)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use sprout_core::prelude::Extension;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// Fallbacks for options the user did not pass on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub author: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub license: Option<String>,
    pub git: bool,
    pub extensions: Vec<Extension>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            author: None,
            email: None,
            url: None,
            license: None,
            git: true,
            extensions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// An explicit `config_file` must exist; the per-user file is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with(config_file, environment())
    }

    fn load_with(config_file: Option<&PathBuf>, env: Environment) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => toml_file(path).required(true),
            None => toml_file(&Self::config_path()).required(false),
        };

        Config::builder()
            .set_default("defaults.git", true)?
            .add_source(file)
            .add_source(env)
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.sprout.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "sprout", "sprout")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".sprout.toml"))
    }
}

/// `SPROUT_` prefix, `__` between nested keys.
fn environment() -> Environment {
    Environment::with_prefix("SPROUT")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_enable_git() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.git);
        assert!(cfg.defaults.author.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_reads_toml_file() {
        let file = write_config(
            r#"
[defaults]
author = "Jane Doe"
license = "gpl3"
git = false
extensions = ["gitlab-ci"]

[output]
no_color = true
"#,
        );
        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.defaults.author.as_deref(), Some("Jane Doe"));
        assert_eq!(cfg.defaults.license.as_deref(), Some("gpl3"));
        assert!(!cfg.defaults.git);
        assert_eq!(cfg.defaults.extensions, vec![Extension::GitlabCi]);
        assert!(cfg.output.no_color);
    }

    fn env(vars: &[(&str, &str)]) -> Environment {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<config::Map<String, String>>();
        environment().source(Some(vars))
    }

    #[test]
    fn environment_variables_fill_nested_keys() {
        let file = write_config("");
        let cfg = AppConfig::load_with(
            Some(&file.path().to_path_buf()),
            env(&[
                ("SPROUT_DEFAULTS__AUTHOR", "Env Author"),
                ("SPROUT_DEFAULTS__GIT", "false"),
                ("SPROUT_OUTPUT__NO_COLOR", "true"),
                ("OTHER_DEFAULTS__EMAIL", "ignored@example.com"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.defaults.author.as_deref(), Some("Env Author"));
        assert!(cfg.defaults.email.is_none());
        assert!(!cfg.defaults.git);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_config("[defaults]\nauthor = \"File Author\"\n");
        let cfg = AppConfig::load_with(
            Some(&file.path().to_path_buf()),
            env(&[("SPROUT_DEFAULTS__AUTHOR", "Env Author")]),
        )
        .unwrap();
        assert_eq!(cfg.defaults.author.as_deref(), Some("Env Author"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config("[defaults]\nemail = \"jane@example.com\"\n");
        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.defaults.email.as_deref(), Some("jane@example.com"));
        assert!(cfg.defaults.git);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("[defaults\nauthor = ");
        assert!(AppConfig::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
