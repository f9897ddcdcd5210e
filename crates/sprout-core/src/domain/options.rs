//! The options record threaded through the action pipeline.
//!
//! [`Options`] is a value: every stage receives it by value and hands back a
//! (possibly) new one. Fields that the user did not specify are empty strings
//! until `get_default_options` fills them from [`HostFacts`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Options for a single invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub project: String,
    pub package: String,
    pub author: String,
    pub email: String,
    pub url: String,
    pub description: String,
    pub license: String,
    pub namespace: Option<String>,
    pub extensions: Vec<Extension>,
    pub pretend: bool,
    pub update: bool,
    pub force: bool,
    /// Initialize a git repository after materialization.
    pub git: bool,
    pub log_level: LogLevel,
    pub host: HostFacts,
}

impl Options {
    /// Fresh options for `project`, everything else unspecified.
    /// Surrounding whitespace is dropped from the project name.
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into().trim().to_string(),
            package: String::new(),
            author: String::new(),
            email: String::new(),
            url: String::new(),
            description: String::new(),
            license: String::new(),
            namespace: None,
            extensions: Vec::new(),
            pretend: false,
            update: false,
            force: false,
            git: true,
            log_level: LogLevel::default(),
            host: HostFacts::default(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    /// Set the namespace and activate the namespace extension.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self.with_extension(Extension::Namespace)
    }

    pub fn with_extension(mut self, extension: Extension) -> Self {
        if !self.extensions.contains(&extension) {
            self.extensions.push(extension);
        }
        self
    }

    pub fn with_pretend(mut self, pretend: bool) -> Self {
        self.pretend = pretend;
        self
    }

    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_git(mut self, git: bool) -> Self {
        self.git = git;
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn with_host(mut self, host: HostFacts) -> Self {
        self.host = host;
        self
    }

    pub fn has_extension(&self, extension: Extension) -> bool {
        self.extensions.contains(&extension)
    }

    /// Existing directories are descended into instead of rejected.
    pub fn merges_existing(&self) -> bool {
        self.update || self.force
    }
}

/// Verbosity requested on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// `tracing` filter directive for this level.
    ///
    /// `tracing` has no level above ERROR, so `Critical` maps to it too.
    pub const fn as_filter(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

/// Optional pipeline extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Extension {
    Namespace,
    GitlabCi,
}

impl Extension {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::GitlabCi => "gitlab-ci",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the target directory looked like before the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetState {
    #[default]
    Absent,
    /// Exists and contains a `setup.py`.
    Project,
    /// Exists but was not generated by us.
    Foreign,
}

/// Facts about the host, gathered once before the pipeline runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostFacts {
    pub git_user: Option<String>,
    pub git_email: Option<String>,
    pub login: Option<String>,
    pub hostname: Option<String>,
    pub year: Option<i32>,
    pub setuptools: Option<ToolVersion>,
    pub target: TargetState,
    pub git_repo: bool,
}

/// Dotted numeric version as reported by a Python package.
///
/// Non-numeric suffixes (`"69.0.3.post1"`, `"12.0rc1"`) are cut at the first
/// component that does not start with a digit.
#[derive(Debug, Clone)]
pub struct ToolVersion {
    parts: Vec<u64>,
    raw: String,
}

impl ToolVersion {
    pub fn new(parts: &[u64]) -> Self {
        Self {
            parts: parts.to_vec(),
            raw: parts
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join("."),
        }
    }

    pub fn parts(&self) -> &[u64] {
        &self.parts
    }
}

impl FromStr for ToolVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let mut parts = Vec::new();
        for piece in raw.split('.') {
            let digits: String = piece.chars().take_while(char::is_ascii_digit).collect();
            if digits.is_empty() {
                break;
            }
            parts.push(digits.parse::<u64>().map_err(|e| e.to_string())?);
            if digits.len() != piece.len() {
                break;
            }
        }
        if parts.is_empty() {
            return Err(format!("not a version: {raw:?}"));
        }
        Ok(Self {
            parts,
            raw: raw.to_string(),
        })
    }
}

impl PartialEq for ToolVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for ToolVersion {}

impl PartialOrd for ToolVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ToolVersion {
    /// Missing trailing components count as zero, so `12 == 12.0`.
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        (0..len)
            .map(|i| {
                let a = self.parts.get(i).copied().unwrap_or(0);
                let b = other.parts.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
