//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text. No business logic lives here.

use clap::{Args, Parser};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "sprout",
    bin_name = "sprout",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Python project scaffolding with update-safe merging",
    long_about = "Sprout generates a ready-to-use Python project (package, \
                  setup.py/setup.cfg, license, tests, git repository) and can \
                  later merge template updates into it without clobbering edits.",
    after_help = "EXAMPLES:\n\
        \x20 sprout my-project\n\
        \x20 sprout my-project --license gpl3 --with-gitlab-ci\n\
        \x20 sprout my-project --with-namespace com.blue_yonder\n\
        \x20 sprout my-project --update --pretend",
    arg_required_else_help = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub project: ProjectArgs,

    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── project ───────────────────────────────────────────────────────────────────

/// What to generate and how.
#[derive(Debug, Clone, Default, Args)]
pub struct ProjectArgs {
    /// Project name; also the directory created in the current directory.
    #[arg(
        value_name = "PROJECT",
        required_unless_present = "list_licenses",
        help = "Project name and directory"
    )]
    pub project: Option<String>,

    #[arg(
        short = 'p',
        long = "package",
        value_name = "NAME",
        help = "Package name (default: derived from the project name)"
    )]
    pub package: Option<String>,

    #[arg(short = 'a', long = "author", value_name = "NAME", help = "Author name")]
    pub author: Option<String>,

    #[arg(short = 'e', long = "email", value_name = "EMAIL", help = "Author email")]
    pub email: Option<String>,

    #[arg(short = 'u', long = "url", value_name = "URL", help = "Project homepage")]
    pub url: Option<String>,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Short project description"
    )]
    pub description: Option<String>,

    /// License key; near misses are matched to the closest known key.
    #[arg(
        short = 'l',
        long = "license",
        value_name = "KEY",
        help = "Project license (see --list-licenses)"
    )]
    pub license: Option<String>,

    /// Merge new template files into an existing project.
    #[arg(short = 'U', long = "update", help = "Update an existing project")]
    pub update: bool,

    /// Write into an existing directory, overwriting every generated file.
    #[arg(
        short = 'f',
        long = "force",
        help = "Force overwriting an existing directory"
    )]
    pub force: bool,

    /// Report every action without touching the disk.
    #[arg(
        long = "pretend",
        visible_alias = "dry-run",
        help = "Do not create anything, only report what would happen"
    )]
    pub pretend: bool,

    #[arg(
        long = "with-namespace",
        value_name = "NS",
        help = "Put the package below namespace packages, e.g. com.blue_yonder"
    )]
    pub namespace: Option<String>,

    #[arg(long = "with-gitlab-ci", help = "Add a .gitlab-ci.yml")]
    pub gitlab_ci: bool,

    #[arg(long = "no-git", help = "Do not initialize a git repository")]
    pub no_git: bool,

    #[arg(long = "list-licenses", help = "Print the known license keys and exit")]
    pub list_licenses: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
