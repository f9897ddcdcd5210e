//! The built-in pipeline actions.
//!
//! Every action is pure: host facts were probed into [`Options::host`]
//! before the pipeline started.

use tracing::{debug, warn};

use crate::domain::{
    error::{DomainError, DomainResult},
    identifier::{is_valid_identifier, make_valid_identifier, prepare_namespace},
    license::{best_fit_license, DEFAULT_LICENSE},
    options::{Extension, Options, TargetState, ToolVersion},
    structure::{Structure, UpdateRule},
    templates::{self, RenderContext},
};

/// Oldest setuptools able to build the generated `setup.py`.
pub const MIN_SETUPTOOLS: &[u64] = &[12];

pub const DEFAULT_DESCRIPTION: &str = "Add a short description here!";

/// Fill every unspecified option from the host facts.
///
/// # Errors
///
/// - [`DomainError::OldSetuptools`] when the probed setuptools is too old
/// - [`DomainError::InvalidIdentifier`] when no valid package name results
pub fn get_default_options(
    structure: Structure,
    mut opts: Options,
) -> DomainResult<(Structure, Options)> {
    check_setuptools(opts.host.setuptools.as_ref())?;

    opts.package = if opts.package.is_empty() {
        make_valid_identifier(&opts.project)?
    } else if is_valid_identifier(&opts.package) {
        opts.package
    } else {
        return Err(DomainError::invalid_identifier(
            opts.package,
            "package names must be valid Python identifiers",
        ));
    };

    let login = opts.host.login.clone();
    if opts.author.is_empty() {
        opts.author = opts
            .host
            .git_user
            .clone()
            .or_else(|| login.clone())
            .unwrap_or_else(|| "unknown".to_string());
    }
    if opts.email.is_empty() {
        opts.email = opts.host.git_email.clone().unwrap_or_else(|| {
            format!(
                "{}@{}",
                login.as_deref().unwrap_or("unknown"),
                opts.host.hostname.as_deref().unwrap_or("localhost")
            )
        });
    }
    if opts.url.is_empty() {
        opts.url = format!(
            "https://github.com/{}/{}",
            login.as_deref().unwrap_or("unknown"),
            opts.project
        );
    }
    if opts.description.is_empty() {
        opts.description = DEFAULT_DESCRIPTION.to_string();
    }

    opts.license = if opts.license.is_empty() {
        DEFAULT_LICENSE.to_string()
    } else {
        let (fitted, exact) = fit_license(&opts.license);
        if !exact {
            warn!(given = %opts.license, using = fitted, "Unknown license, using closest match");
        }
        fitted.to_string()
    };

    debug!(package = %opts.package, author = %opts.author, license = %opts.license, "Defaults applied");
    Ok((structure, opts))
}

/// Closest license key, and whether it matched up to case.
fn fit_license(given: &str) -> (&'static str, bool) {
    let fitted = best_fit_license(given);
    (fitted, fitted == given.trim().to_lowercase())
}

fn check_setuptools(found: Option<&ToolVersion>) -> DomainResult<()> {
    let required = ToolVersion::new(MIN_SETUPTOOLS);
    match found {
        Some(found) if *found < required => Err(DomainError::OldSetuptools {
            found: found.to_string(),
            required: required.to_string(),
        }),
        Some(_) => Ok(()),
        None => {
            warn!("Could not determine the setuptools version, skipping check");
            Ok(())
        }
    }
}

/// Reject incoherent option combinations.
pub fn verify_options_consistency(
    structure: Structure,
    opts: Options,
) -> DomainResult<(Structure, Options)> {
    let project = opts.project.trim();
    if project.is_empty() {
        return Err(DomainError::inconsistent("project name cannot be empty"));
    }
    if project.contains(['/', '\\']) {
        return Err(DomainError::inconsistent(format!(
            "project name '{project}' cannot contain path separators"
        )));
    }

    if opts.update {
        match opts.host.target {
            TargetState::Project => {}
            TargetState::Absent => {
                return Err(DomainError::inconsistent(format!(
                    "cannot update '{project}': directory does not exist"
                )));
            }
            TargetState::Foreign => {
                return Err(DomainError::inconsistent(format!(
                    "cannot update '{project}': no setup.py found, not a project generated by sprout"
                )));
            }
        }
    }

    match (opts.has_extension(Extension::Namespace), &opts.namespace) {
        (true, Some(namespace)) => {
            prepare_namespace(namespace)?;
        }
        (true, None) => {
            return Err(DomainError::inconsistent(
                "the namespace extension needs a namespace (--with-namespace)",
            ));
        }
        (false, Some(namespace)) => {
            return Err(DomainError::inconsistent(format!(
                "namespace '{namespace}' given but the namespace extension is not active"
            )));
        }
        (false, None) => {}
    }

    for (field, value) in [
        ("package", &opts.package),
        ("author", &opts.author),
        ("email", &opts.email),
        ("license", &opts.license),
    ] {
        if value.is_empty() {
            return Err(DomainError::MissingOption { field });
        }
    }

    Ok((structure, opts))
}

/// Define the base project layout.
pub fn define_structure(
    structure: Structure,
    opts: Options,
) -> DomainResult<(Structure, Options)> {
    let ctx = RenderContext::from_options(&opts)
        .with_variable("NAMESPACES", namespace_entry(&opts)?);
    let render = |template: &str| ctx.render(template);

    let package = Structure::new().with_file_rule(
        "__init__.py",
        render(templates::INIT_PY),
        UpdateRule::NoOverwrite,
    );
    let tests = Structure::new()
        .with_file_rule("__init__.py", templates::TESTS_INIT_PY, UpdateRule::NoCreate)
        .with_file_rule(
            "conftest.py",
            render(templates::CONFTEST_PY),
            UpdateRule::NoOverwrite,
        );

    let mut project = Structure::new()
        .with_file_rule("README.rst", render(templates::README_RST), UpdateRule::NoOverwrite)
        .with_file_rule("AUTHORS.rst", render(templates::AUTHORS_RST), UpdateRule::NoOverwrite)
        .with_file_rule("CHANGES.rst", render(templates::CHANGES_RST), UpdateRule::NoOverwrite)
        .with_file_rule("LICENSE.txt", render(templates::LICENSE_TXT), UpdateRule::NoOverwrite)
        .with_file_rule(
            "requirements.txt",
            render(templates::REQUIREMENTS_TXT),
            UpdateRule::NoOverwrite,
        )
        .with_file_rule("setup.cfg", render(templates::SETUP_CFG), UpdateRule::NoOverwrite)
        .with_file("setup.py", render(templates::SETUP_PY))
        .with_dir(opts.package.clone(), package)
        .with_dir("tests", tests);

    if opts.git {
        project = project.with_file_rule(".gitignore", templates::GITIGNORE, UpdateRule::NoOverwrite);
    }

    let defined = Structure::new().with_dir(opts.project.clone(), project);
    Ok((structure.merge(defined), opts))
}

/// `namespace_packages` block for `setup.cfg`, empty without a namespace.
fn namespace_entry(opts: &Options) -> DomainResult<String> {
    let Some(namespace) = opts.namespace.as_deref() else {
        return Ok(String::new());
    };
    let lines: Vec<String> = prepare_namespace(namespace)?
        .into_iter()
        .map(|ns| format!("    {ns}"))
        .collect();
    Ok(format!("namespace_packages =\n{}\n", lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::HostFacts;
    use crate::domain::structure::Node;

    fn host() -> HostFacts {
        HostFacts {
            git_user: Some("Jane Doe".into()),
            git_email: Some("jane@example.com".into()),
            login: Some("jane".into()),
            hostname: Some("box".into()),
            year: Some(2026),
            setuptools: Some(ToolVersion::new(&[69, 0])),
            ..HostFacts::default()
        }
    }

    fn defaults(opts: Options) -> DomainResult<Options> {
        get_default_options(Structure::new(), opts).map(|(_, o)| o)
    }

    #[test]
    fn defaults_derive_package_and_author() {
        let opts = defaults(Options::new("my-project").with_host(host())).unwrap();
        assert_eq!(opts.package, "my_project");
        assert_eq!(opts.author, "Jane Doe");
        assert_eq!(opts.email, "jane@example.com");
        assert_eq!(opts.license, "mit");
        assert_eq!(opts.description, DEFAULT_DESCRIPTION);
        assert_eq!(opts.url, "https://github.com/jane/my-project");
    }

    #[test]
    fn defaults_fall_back_to_login_and_host() {
        let host = HostFacts {
            git_user: None,
            git_email: None,
            ..host()
        };
        let opts = defaults(Options::new("p").with_host(host)).unwrap();
        assert_eq!(opts.author, "jane");
        assert_eq!(opts.email, "jane@box");
    }

    #[test]
    fn explicit_values_are_kept() {
        let opts = defaults(
            Options::new("my-project")
                .with_package("custom_pkg")
                .with_author("Someone")
                .with_license("gpl3")
                .with_host(host()),
        )
        .unwrap();
        assert_eq!(opts.package, "custom_pkg");
        assert_eq!(opts.author, "Someone");
        assert_eq!(opts.license, "gpl3");
    }

    #[test]
    fn license_case_is_not_a_fuzzy_match() {
        assert_eq!(fit_license("MIT"), ("mit", true));
        assert_eq!(fit_license(" GPL3 "), ("gpl3", true));
        assert_eq!(fit_license("new_bsd"), ("new-bsd", false));

        let opts = defaults(Options::new("p").with_license("MIT").with_host(host())).unwrap();
        assert_eq!(opts.license, "mit");
    }

    #[test]
    fn license_is_normalized() {
        let opts = defaults(Options::new("p").with_license("new_bsd").with_host(host())).unwrap();
        assert_eq!(opts.license, "new-bsd");
    }

    #[test]
    fn reserved_project_name_fails() {
        let err = defaults(Options::new("def").with_host(host())).unwrap_err();
        assert!(matches!(err, DomainError::InvalidIdentifier { .. }));
    }

    #[test]
    fn invalid_explicit_package_fails() {
        let err = defaults(Options::new("ok").with_package("not-valid").with_host(host()))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidIdentifier { ref name, .. } if name == "not-valid"));
    }

    #[test]
    fn old_setuptools_fails() {
        let host = HostFacts {
            setuptools: Some(ToolVersion::new(&[11, 3])),
            ..host()
        };
        let err = defaults(Options::new("p").with_host(host)).unwrap_err();
        assert_eq!(
            err,
            DomainError::OldSetuptools {
                found: "11.3".into(),
                required: "12".into()
            }
        );
    }

    #[test]
    fn unknown_setuptools_is_tolerated() {
        let host = HostFacts {
            setuptools: None,
            ..host()
        };
        assert!(defaults(Options::new("p").with_host(host)).is_ok());
    }

    fn verified(opts: Options) -> DomainResult<Options> {
        let opts = defaults(opts)?;
        verify_options_consistency(Structure::new(), opts).map(|(_, o)| o)
    }

    #[test]
    fn update_requires_existing_project() {
        let absent = verified(Options::new("p").with_update(true).with_host(host()));
        assert!(matches!(absent, Err(DomainError::InconsistentOptions { .. })));

        let foreign = HostFacts {
            target: TargetState::Foreign,
            ..host()
        };
        let foreign = verified(Options::new("p").with_update(true).with_host(foreign));
        assert!(matches!(foreign, Err(DomainError::InconsistentOptions { .. })));

        let project = HostFacts {
            target: TargetState::Project,
            ..host()
        };
        assert!(verified(Options::new("p").with_update(true).with_host(project)).is_ok());
    }

    #[test]
    fn path_like_project_is_rejected() {
        let err = verify_options_consistency(Structure::new(), Options::new("a/b")).unwrap_err();
        assert!(matches!(err, DomainError::InconsistentOptions { .. }));
    }

    #[test]
    fn namespace_must_be_valid() {
        let err = verified(Options::new("p").with_namespace("com.blue-yonder").with_host(host()))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidIdentifier { .. }));
    }

    #[test]
    fn namespace_extension_needs_namespace() {
        let opts = Options::new("p")
            .with_extension(Extension::Namespace)
            .with_host(host());
        assert!(matches!(
            verified(opts),
            Err(DomainError::InconsistentOptions { .. })
        ));
    }

    #[test]
    fn missing_defaults_are_reported() {
        let err = verify_options_consistency(Structure::new(), Options::new("p")).unwrap_err();
        assert_eq!(err, DomainError::MissingOption { field: "package" });
    }

    #[test]
    fn define_structure_lays_out_project() {
        let opts = defaults(Options::new("my-project").with_host(host())).unwrap();
        let (tree, _) = define_structure(Structure::new(), opts).unwrap();

        for path in [
            "my-project/setup.py",
            "my-project/setup.cfg",
            "my-project/requirements.txt",
            "my-project/LICENSE.txt",
            "my-project/.gitignore",
            "my-project/my_project/__init__.py",
            "my-project/tests/conftest.py",
        ] {
            assert!(tree.file(path).is_some(), "missing {path}");
        }
        assert_eq!(tree.file("my-project/setup.py").unwrap().rule, UpdateRule::Overwrite);
        assert_eq!(
            tree.file("my-project/requirements.txt").unwrap().rule,
            UpdateRule::NoOverwrite
        );
        assert_eq!(
            tree.file("my-project/tests/__init__.py").unwrap().rule,
            UpdateRule::NoCreate
        );

        let license = &tree.file("my-project/LICENSE.txt").unwrap().content;
        assert!(license.contains("MIT"));
        assert!(license.contains("2026, Jane Doe"));
    }

    #[test]
    fn define_structure_without_git_has_no_gitignore() {
        let opts = defaults(Options::new("p").with_git(false).with_host(host())).unwrap();
        let (tree, _) = define_structure(Structure::new(), opts).unwrap();
        assert!(tree.get("p/.gitignore").is_none());
    }

    #[test]
    fn define_structure_overrides_earlier_tree() {
        let opts = defaults(Options::new("p").with_host(host())).unwrap();
        let earlier = Structure::new().with_dir(
            "p",
            Structure::new().with_file("setup.py", "stale").with_file("extra.txt", "kept"),
        );
        let (tree, _) = define_structure(earlier, opts).unwrap();
        assert_ne!(tree.file("p/setup.py").unwrap().content, "stale");
        assert!(matches!(tree.get("p/extra.txt"), Some(Node::File(_))));
    }

    #[test]
    fn setup_cfg_lists_namespaces() {
        let opts = defaults(Options::new("p").with_namespace("com.acme").with_host(host())).unwrap();
        let (tree, _) = define_structure(Structure::new(), opts).unwrap();
        let cfg = &tree.file("p/setup.cfg").unwrap().content;
        assert!(cfg.contains("namespace_packages =\n    com\n    com.acme\n"));
    }
}
