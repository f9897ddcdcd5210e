//! Create or update a project.
//!
//! Responsibility: translate CLI arguments into core `Options`, wire the
//! real adapters into a `ScaffoldService`, and display the result. No
//! business logic lives here.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use sprout_adapters::{GitCli, LocalFilesystem, SystemEnvironment, TracingReporter};
use sprout_core::prelude::{Options, Reporter, ScaffoldService};

use crate::{
    cli::{GlobalArgs, ProjectArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::derive_level,
    output::OutputManager,
};

#[instrument(skip_all, fields(project = args.project.as_deref().unwrap_or_default()))]
pub fn execute(
    args: ProjectArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let opts = build_options(&args, &global, &config)?;
    debug!(?opts, "Options resolved");

    let reporter: Arc<dyn Reporter> = Arc::new(TracingReporter);
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Arc::clone(&reporter),
        Box::new(GitCli::new(reporter)),
        Box::new(SystemEnvironment::new()),
    );

    let outcome = service.scaffold(opts)?;
    info!(files = outcome.written.len(), "Scaffold completed");

    if outcome.options.update {
        output.success("Update accomplished!")?;
    } else {
        output.success(&format!("Project '{}' created!", outcome.options.project))?;
    }
    if outcome.options.pretend {
        output.info("Dry run: nothing was written to disk.")?;
    }

    Ok(())
}

/// CLI flag, then config value, then whatever the pipeline derives.
pub fn build_options(
    args: &ProjectArgs,
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<Options> {
    let project = args
        .project
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| CliError::InvalidInput {
            message: "a project name is required".into(),
            source: None,
        })?;

    let defaults = &config.defaults;
    let mut opts = Options::new(project)
        .with_update(args.update)
        .with_force(args.force)
        .with_pretend(args.pretend)
        .with_git(defaults.git && !args.no_git)
        .with_log_level(derive_level(global));

    if let Some(package) = &args.package {
        opts = opts.with_package(package);
    }
    if let Some(author) = args.author.as_ref().or(defaults.author.as_ref()) {
        opts = opts.with_author(author);
    }
    if let Some(email) = args.email.as_ref().or(defaults.email.as_ref()) {
        opts = opts.with_email(email);
    }
    if let Some(url) = args.url.as_ref().or(defaults.url.as_ref()) {
        opts = opts.with_url(url);
    }
    if let Some(description) = &args.description {
        opts = opts.with_description(description);
    }
    if let Some(license) = args.license.as_ref().or(defaults.license.as_ref()) {
        opts = opts.with_license(license);
    }
    if let Some(namespace) = &args.namespace {
        opts = opts.with_namespace(namespace);
    }
    for extension in &defaults.extensions {
        opts = opts.with_extension(*extension);
    }
    if args.gitlab_ci {
        opts = opts.with_extension(sprout_core::prelude::Extension::GitlabCi);
    }

    Ok(opts)
}
