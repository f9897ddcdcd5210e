//! Optional pipeline extensions.
//!
//! An extension only ever adds actions to the pipeline; the actions it adds
//! see the same `(Structure, Options)` values as the built-in ones.

use crate::domain::{
    error::{DomainError, DomainResult},
    identifier::prepare_namespace,
    options::{Extension, Options},
    pipeline::{Action, Pipeline, Position},
    structure::{Node, Structure, UpdateRule},
    templates,
};

impl Extension {
    /// Register this extension's actions in `pipeline`.
    pub fn activate(self, pipeline: Pipeline) -> DomainResult<Pipeline> {
        match self {
            Self::Namespace => pipeline.register(
                Action::new("add_namespace", add_namespace),
                Position::After("define_structure"),
            ),
            Self::GitlabCi => pipeline.register(
                Action::new("add_gitlab_ci", add_gitlab_ci),
                Position::After("define_structure"),
            ),
        }
    }
}

/// Move the package below its namespace packages.
///
/// `my_project` with namespace `com.acme` ends up at `com/acme/my_project`,
/// with a namespace-declaring `__init__.py` at every namespace level.
pub fn add_namespace(
    mut structure: Structure,
    opts: Options,
) -> DomainResult<(Structure, Options)> {
    let namespace = opts
        .namespace
        .as_deref()
        .ok_or(DomainError::MissingOption { field: "namespace" })?;
    prepare_namespace(namespace)?;

    let package_path = format!("{}/{}", opts.project, opts.package);
    let package = structure
        .take(&package_path)
        .unwrap_or_else(|| Node::Directory(Structure::new()));

    // Build inside out: the package sits in the innermost namespace.
    let mut nested = Structure::new().with_file_rule(
        "__init__.py",
        templates::NAMESPACE_INIT_PY,
        UpdateRule::NoOverwrite,
    );
    nested.insert(opts.package.clone(), package);

    let segments: Vec<&str> = namespace.split('.').collect();
    for (depth, segment) in segments.iter().enumerate().rev() {
        if depth == 0 {
            nested = Structure::new().with_dir(*segment, nested);
        } else {
            let parent = Structure::new().with_file_rule(
                "__init__.py",
                templates::NAMESPACE_INIT_PY,
                UpdateRule::NoOverwrite,
            );
            nested = parent.with_dir(*segment, nested);
        }
    }

    let moved = Structure::new().with_dir(opts.project.clone(), nested);
    Ok((structure.merge(moved), opts))
}

/// Add a `.gitlab-ci.yml` to the project root.
pub fn add_gitlab_ci(structure: Structure, opts: Options) -> DomainResult<(Structure, Options)> {
    let ci = Structure::new().with_dir(
        opts.project.clone(),
        Structure::new().with_file_rule(
            ".gitlab-ci.yml",
            templates::GITLAB_CI_YML,
            UpdateRule::NoOverwrite,
        ),
    );
    Ok((structure.merge(ci), opts))
}
