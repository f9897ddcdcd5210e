//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Probe host facts through the ports
//! 2. Run the action pipeline
//! 3. Materialize the resulting structure
//! 4. Initialize a git repository
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, HostEnvironment, Reporter, Vcs, Verb},
        services::Materializer,
    },
    domain::{HostFacts, Options, Pipeline, Structure, TargetState},
    error::{SproutError, SproutResult},
};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    /// Options after every pipeline action ran.
    pub options: Options,
    /// Files written (or that would have been, under pretend).
    pub written: Vec<PathBuf>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    reporter: Arc<dyn Reporter>,
    vcs: Box<dyn Vcs>,
    host: Box<dyn HostEnvironment>,
    root: PathBuf,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// Projects are created below the current directory unless
    /// [`with_root`](Self::with_root) says otherwise.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        reporter: Arc<dyn Reporter>,
        vcs: Box<dyn Vcs>,
        host: Box<dyn HostEnvironment>,
    ) -> Self {
        Self {
            filesystem,
            reporter,
            vcs,
            host,
            root: PathBuf::from("."),
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Create or update the project described by `opts`.
    #[instrument(skip_all, fields(project = %opts.project, update = opts.update, pretend = opts.pretend))]
    pub fn scaffold(&self, opts: Options) -> SproutResult<ScaffoldOutcome> {
        let host = self.probe_host(&opts);
        let opts = opts.with_host(host);

        let pipeline = Pipeline::for_options(&opts)?;
        let (structure, opts) = pipeline.run(Structure::new(), opts, |action| {
            self.reporter.report(Verb::Invoke, action.name());
        })?;

        self.reporter.report(Verb::Invoke, "create_structure");
        let written = Materializer::new(self.filesystem.as_ref(), self.reporter.as_ref())
            .create_structure(&structure, &self.root, &opts)?;

        if opts.git && !opts.host.git_repo {
            self.reporter.report(Verb::Invoke, "init_git");
            self.init_git(&opts, &written)?;
        }

        info!(files = written.len(), "Scaffold completed");
        Ok(ScaffoldOutcome {
            options: opts,
            written,
        })
    }

    /// Gather everything the pipeline needs to know about the host.
    pub fn probe_host(&self, opts: &Options) -> HostFacts {
        let target = self.project_dir(opts);
        let state = if !self.filesystem.exists(&target) {
            TargetState::Absent
        } else if self.filesystem.exists(&target.join("setup.py")) {
            TargetState::Project
        } else {
            TargetState::Foreign
        };

        HostFacts {
            git_user: self.vcs.config_value("user.name"),
            git_email: self.vcs.config_value("user.email"),
            login: self.host.login_name(),
            hostname: self.host.hostname(),
            year: Some(self.host.current_year()),
            setuptools: self.host.setuptools_version(),
            git_repo: state != TargetState::Absent && self.vcs.is_repository(&target),
            target: state,
        }
    }

    fn init_git(&self, opts: &Options, written: &[PathBuf]) -> SproutResult<()> {
        let dir = self.project_dir(opts);
        let paths = relative_to(&dir, written)?;
        self.vcs.init_repository(&dir, &paths, opts.pretend)
    }

    fn project_dir(&self, opts: &Options) -> PathBuf {
        self.root.join(&opts.project)
    }
}

/// Written files as paths below `dir`, for `git add`.
///
/// The materializer only writes inside the project, so anything else is a bug.
fn relative_to(dir: &Path, written: &[PathBuf]) -> SproutResult<Vec<PathBuf>> {
    written
        .iter()
        .map(|path| {
            path.strip_prefix(dir)
                .map(Path::to_path_buf)
                .map_err(|_| SproutError::Internal {
                    message: format!(
                        "{} was written outside the project directory {}",
                        path.display(),
                        dir.display()
                    ),
                })
        })
        .collect()
}
