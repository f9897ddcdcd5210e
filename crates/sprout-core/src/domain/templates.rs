//! Built-in file templates.
//!
//! Templates are plain strings with `{{VARIABLE}}` placeholders, rendered by
//! [`RenderContext`]. There are no conditionals or loops: anything that
//! varies structurally (namespace lists, license text) is computed into a
//! variable first.

use std::collections::HashMap;

use crate::domain::{license::find_license, options::Options};

/// Variables available to templates, derived from the options.
///
/// | Variable       | Source                          |
/// |----------------|---------------------------------|
/// | `PROJECT`      | project name                    |
/// | `PACKAGE`      | package identifier              |
/// | `AUTHOR`       | author                          |
/// | `EMAIL`        | email                           |
/// | `URL`          | url                             |
/// | `DESCRIPTION`  | description                     |
/// | `LICENSE`      | license title                   |
/// | `CLASSIFIER`   | license trove classifier        |
/// | `NOTICE`       | short license notice            |
/// | `PROJECT_UNDERLINE` | `=` as long as the project |
/// | `YEAR`         | host year                       |
/// | `NAMESPACES`   | `setup.cfg` namespace entry     |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn from_options(opts: &Options) -> Self {
        let license = find_license(&opts.license);
        let year = opts.host.year.map_or_else(String::new, |y| y.to_string());

        let mut vars = HashMap::new();
        vars.insert("PROJECT".to_string(), opts.project.clone());
        vars.insert("PACKAGE".to_string(), opts.package.clone());
        vars.insert("AUTHOR".to_string(), opts.author.clone());
        vars.insert("EMAIL".to_string(), opts.email.clone());
        vars.insert("URL".to_string(), opts.url.clone());
        vars.insert("DESCRIPTION".to_string(), opts.description.clone());
        vars.insert(
            "LICENSE".to_string(),
            license.map_or_else(|| opts.license.clone(), |l| l.title.to_string()),
        );
        vars.insert(
            "CLASSIFIER".to_string(),
            license.map_or("License :: Other/Proprietary License", |l| l.classifier)
                .to_string(),
        );
        vars.insert(
            "NOTICE".to_string(),
            license.map_or("", |l| l.notice).to_string(),
        );
        vars.insert(
            "PROJECT_UNDERLINE".to_string(),
            "=".repeat(opts.project.chars().count()),
        );
        vars.insert("YEAR".to_string(), year);
        vars.insert("NAMESPACES".to_string(), String::new());

        Self { variables: vars }
    }

    /// Add or override a variable, consuming self.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every `{{VARIABLE}}` placeholder; unknown ones stay as-is.
    ///
    /// Single left-to-right pass: substituted values are never scanned again.
    pub fn render(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                rest = &rest[start..];
                break;
            };

            let key = &after[..end];
            match self.variables.get(key) {
                Some(value) => result.push_str(value),
                None => {
                    result.push_str("{{");
                    result.push_str(key);
                    result.push_str("}}");
                }
            }
            rest = &after[end + 2..];
        }

        result.push_str(rest);
        result
    }
}

pub const README_RST: &str = "\
{{PROJECT_UNDERLINE}}
{{PROJECT}}
{{PROJECT_UNDERLINE}}


{{DESCRIPTION}}


Description
===========

A longer description of your project goes here...
";

pub const AUTHORS_RST: &str = "\
============
Contributors
============

* {{AUTHOR}} <{{EMAIL}}>
";

pub const CHANGES_RST: &str = "\
=========
Changelog
=========

Version 0.1
===========

- Feature A added
- FIX: nasty bug #1729 fixed
";

pub const LICENSE_TXT: &str = "\
{{LICENSE}}

Copyright (c) {{YEAR}}, {{AUTHOR}}

{{NOTICE}}
";

pub const REQUIREMENTS_TXT: &str = "\
# Add your requirements here like:
# numpy
# scipy>=0.9
";

pub const SETUP_PY: &str = "\
#!/usr/bin/env python
# -*- coding: utf-8 -*-
\"\"\"
    Setup file for {{PROJECT}}.

    This file was generated with sprout.
\"\"\"
from setuptools import setup


def setup_package():
    setup(setup_requires=['setuptools>=12'])


if __name__ == \"__main__\":
    setup_package()
";

pub const SETUP_CFG: &str = "\
[metadata]
name = {{PROJECT}}
summary = {{DESCRIPTION}}
author = {{AUTHOR}}
author-email = {{EMAIL}}
license = {{LICENSE}}
home-page = {{URL}}
classifier =
    Development Status :: 4 - Beta
    Programming Language :: Python
    {{CLASSIFIER}}

[files]
packages =
    {{PACKAGE}}
{{NAMESPACES}}
[test]
addopts = tests
";

pub const INIT_PY: &str = "\
# -*- coding: utf-8 -*-
__version__ = 'unknown'
";

pub const NAMESPACE_INIT_PY: &str = "\
# -*- coding: utf-8 -*-
__import__('pkg_resources').declare_namespace(__name__)
";

pub const TESTS_INIT_PY: &str = "";

pub const CONFTEST_PY: &str = "\
#!/usr/bin/env python
# -*- coding: utf-8 -*-
\"\"\"
    Dummy conftest.py for {{PACKAGE}}.

    If you don't know what this is for, just leave it empty.
\"\"\"
";

pub const GITIGNORE: &str = "\
# Temporary and binary files
*~
*.py[cod]
*.so
*.egg
*.egg-info
__pycache__/
.cache/

# Build and docs folder/files
build/*
dist/*
sdist/*
docs/_build/*
";

pub const GITLAB_CI_YML: &str = "\
image: python:3

before_script:
  - pip install -U setuptools
  - pip install -e .

test:
  script:
    - python setup.py test
";

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Options {
        let mut opts = Options::new("my-project")
            .with_package("my_project")
            .with_author("Jane Doe")
            .with_license("mit");
        opts.host.year = Some(2026);
        opts
    }

    #[test]
    fn renders_known_variables() {
        let ctx = RenderContext::from_options(&opts());
        assert_eq!(ctx.render("{{PROJECT}}/{{PACKAGE}}"), "my-project/my_project");
        assert_eq!(ctx.get("LICENSE"), Some("The MIT License (MIT)"));
        assert_eq!(ctx.get("YEAR"), Some("2026"));
        assert_eq!(ctx.get("PROJECT_UNDERLINE"), Some("=========="));
    }

    #[test]
    fn unknown_placeholders_are_left_alone() {
        let ctx = RenderContext::from_options(&opts());
        assert_eq!(ctx.render("{{NOPE}} {{PROJECT}}"), "{{NOPE}} my-project");
    }

    #[test]
    fn substituted_values_are_not_rendered_again() {
        let ctx = RenderContext::from_options(&opts().with_description("Contact {{AUTHOR}}"));
        for _ in 0..50 {
            assert_eq!(
                ctx.render("{{DESCRIPTION}} by {{AUTHOR}}"),
                "Contact {{AUTHOR}} by Jane Doe"
            );
        }
    }

    #[test]
    fn unterminated_placeholder_is_kept() {
        let ctx = RenderContext::from_options(&opts());
        assert_eq!(ctx.render("{{PROJECT}} {{oops"), "my-project {{oops");
    }

    #[test]
    fn with_variable_overrides() {
        let ctx = RenderContext::from_options(&opts()).with_variable("PROJECT", "other");
        assert_eq!(ctx.render("{{PROJECT}}"), "other");
    }

    #[test]
    fn unknown_license_key_renders_raw_key() {
        let ctx = RenderContext::from_options(&opts().with_license("wtfpl"));
        assert_eq!(ctx.get("LICENSE"), Some("wtfpl"));
    }
}
