use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Project layout as a tree of named nodes.
///
/// This is the value the action pipeline builds and the materializer walks.
/// Children are kept in a `BTreeMap` so walks (and therefore reports) have a
/// stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    entries: BTreeMap<String, Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Structure),
    File(FileSpec),
    /// Leave this path alone, whether or not it exists.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub content: String,
    pub rule: UpdateRule,
}

impl FileSpec {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            rule: UpdateRule::Overwrite,
        }
    }

    pub fn with_rule(mut self, rule: UpdateRule) -> Self {
        self.rule = rule;
        self
    }
}

/// Per-file override consulted in update mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateRule {
    /// Always (re)write the file.
    #[default]
    Overwrite,
    /// Create when missing, never replace an existing file.
    NoOverwrite,
    /// Only create on fresh projects; missing files stay missing on update.
    NoCreate,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, node: Node) {
        self.entries.insert(name.into(), node);
    }

    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, Node::File(FileSpec::new(content)));
        self
    }

    pub fn with_file_rule(
        mut self,
        name: impl Into<String>,
        content: impl Into<String>,
        rule: UpdateRule,
    ) -> Self {
        self.insert(name, Node::File(FileSpec::new(content).with_rule(rule)));
        self
    }

    pub fn with_dir(mut self, name: impl Into<String>, children: Structure) -> Self {
        self.insert(name, Node::Directory(children));
        self
    }

    pub fn with_skip(mut self, name: impl Into<String>) -> Self {
        self.insert(name, Node::Skip);
        self
    }

    /// Recursive merge where `other` wins on collisions.
    ///
    /// Two directories at the same name are merged child by child; any other
    /// collision replaces the existing node.
    pub fn merge(mut self, other: Structure) -> Self {
        for (name, incoming) in other.entries {
            let merged = match (self.entries.remove(&name), incoming) {
                (Some(Node::Directory(existing)), Node::Directory(incoming)) => {
                    Node::Directory(existing.merge(incoming))
                }
                (_, incoming) => incoming,
            };
            self.entries.insert(name, merged);
        }
        self
    }

    /// Node at a `/`-separated relative path.
    pub fn get(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let mut node = self.entries.get(segments.next()?)?;
        for segment in segments {
            match node {
                Node::Directory(children) => node = children.entries.get(segment)?,
                _ => return None,
            }
        }
        Some(node)
    }

    /// Remove and return the node at a `/`-separated relative path.
    pub fn take(&mut self, path: &str) -> Option<Node> {
        match path.split_once('/') {
            None => self.entries.remove(path),
            Some((head, rest)) => match self.entries.get_mut(head)? {
                Node::Directory(children) => children.take(rest),
                _ => None,
            },
        }
    }

    /// File content at `path`, if that path is a file.
    pub fn file(&self, path: &str) -> Option<&FileSpec> {
        match self.get(path)? {
            Node::File(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every file path in walk order, relative to the tree root.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        self.collect_files(Path::new(""), &mut paths);
        paths
    }

    fn collect_files(&self, prefix: &Path, out: &mut Vec<PathBuf>) {
        for (name, node) in &self.entries {
            let path = prefix.join(name);
            match node {
                Node::Directory(children) => children.collect_files(&path, out),
                Node::File(_) => out.push(path),
                Node::Skip => {}
            }
        }
    }
}
