//! Tree materializer - realizes a [`Structure`] on a [`Filesystem`].
//!
//! Policy per node:
//!
//! | mode   | path exists        | action                              |
//! |--------|--------------------|-------------------------------------|
//! | fresh  | no                 | create, report `create`             |
//! | fresh  | yes (dir)          | fail with `DirectoryExists`         |
//! | update | no                 | create, report `create`             |
//! | update | yes (dir)          | descend silently                    |
//! | update | yes (file), marked | leave untouched                     |
//! | update | yes (file)         | overwrite, report `create`          |
//!
//! `--force` descends like update and overwrites every file. Pretend is
//! checked before each mutation; existence checks still run.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Reporter, Verb},
    },
    domain::{Node, Options, Structure, UpdateRule},
    error::SproutResult,
};

pub struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
    reporter: &'a dyn Reporter,
}

impl<'a> Materializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, reporter: &'a dyn Reporter) -> Self {
        Self {
            filesystem,
            reporter,
        }
    }

    /// Materialize `structure` below `root`; returns the written file paths.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::DirectoryExists`] in fresh mode when a directory
    ///   is already there
    /// - [`ApplicationError::FilesystemError`] from the filesystem port
    #[instrument(skip_all, fields(root = %root.display(), update = opts.update, force = opts.force, pretend = opts.pretend))]
    pub fn create_structure(
        &self,
        structure: &Structure,
        root: &Path,
        opts: &Options,
    ) -> SproutResult<Vec<PathBuf>> {
        let mut written = Vec::new();
        self.walk(structure, root, opts, &mut written)?;
        debug!(files = written.len(), "Structure materialized");
        Ok(written)
    }

    /// Create `path` unless it already exists as a directory in update mode.
    pub fn create_directory(&self, path: &Path, update: bool, pretend: bool) -> SproutResult<()> {
        if self.filesystem.exists(path) {
            if !update {
                return Err(ApplicationError::DirectoryExists {
                    path: path.to_path_buf(),
                }
                .into());
            }
            if !self.filesystem.is_dir(path) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "exists but is not a directory".into(),
                }
                .into());
            }
            return Ok(());
        }

        if !pretend {
            self.filesystem.create_dir_all(path)?;
        }
        self.reporter.report(Verb::Create, &path.display().to_string());
        Ok(())
    }

    /// Write `content` to `path`, replacing whatever is there.
    pub fn create_file(&self, path: &Path, content: &str, pretend: bool) -> SproutResult<()> {
        if !pretend {
            self.filesystem.write_file(path, content)?;
        }
        self.reporter.report(Verb::Create, &path.display().to_string());
        Ok(())
    }

    fn walk(
        &self,
        structure: &Structure,
        dir: &Path,
        opts: &Options,
        written: &mut Vec<PathBuf>,
    ) -> SproutResult<()> {
        for (name, node) in structure.iter() {
            let path = dir.join(name);
            match node {
                Node::Directory(children) => {
                    self.create_directory(&path, opts.merges_existing(), opts.pretend)?;
                    self.walk(children, &path, opts, written)?;
                }
                Node::File(spec) => {
                    if self.should_write(&path, spec.rule, opts) {
                        self.create_file(&path, &spec.content, opts.pretend)?;
                        written.push(path);
                    } else {
                        debug!(path = %path.display(), rule = ?spec.rule, "Skipping file");
                    }
                }
                Node::Skip => {}
            }
        }
        Ok(())
    }

    fn should_write(&self, path: &Path, rule: UpdateRule, opts: &Options) -> bool {
        if opts.force || !opts.update {
            return true;
        }
        let exists = self.filesystem.exists(path);
        match rule {
            UpdateRule::Overwrite => true,
            UpdateRule::NoOverwrite => !exists,
            UpdateRule::NoCreate => exists,
        }
    }
}
