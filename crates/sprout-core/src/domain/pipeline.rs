//! The action pipeline.
//!
//! A pipeline is an ordered list of named [`Action`]s. Each action is a pure
//! function over `(Structure, Options)`; the output of one action is the
//! input of the next. Extensions splice their own actions in relative to an
//! existing one by name.

use std::fmt;

use crate::domain::{
    actions,
    error::{DomainError, DomainResult},
    options::Options,
    structure::Structure,
};

pub type ActionFn = fn(Structure, Options) -> DomainResult<(Structure, Options)>;

/// A named pipeline stage.
#[derive(Clone, Copy)]
pub struct Action {
    name: &'static str,
    run: ActionFn,
}

impl Action {
    pub const fn new(name: &'static str, run: ActionFn) -> Self {
        Self { name, run }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, structure: Structure, opts: Options) -> DomainResult<(Structure, Options)> {
        (self.run)(structure, opts)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Action").field(&self.name).finish()
    }
}

/// Where to register an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    First,
    Last,
    Before(&'static str),
    After(&'static str),
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    actions: Vec<Action>,
}

impl Default for Pipeline {
    /// `get_default_options` → `verify_options_consistency` → `define_structure`.
    fn default() -> Self {
        Self {
            actions: vec![
                Action::new("get_default_options", actions::get_default_options),
                Action::new(
                    "verify_options_consistency",
                    actions::verify_options_consistency,
                ),
                Action::new("define_structure", actions::define_structure),
            ],
        }
    }
}

impl Pipeline {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Default actions plus every extension the options activate.
    pub fn for_options(opts: &Options) -> DomainResult<Self> {
        opts.extensions
            .iter()
            .try_fold(Self::default(), |pipeline, ext| ext.activate(pipeline))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.actions.iter().map(Action::name).collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Insert `action` at `position`.
    ///
    /// # Errors
    ///
    /// [`DomainError::UnknownAction`] when the anchor of `Before`/`After` is
    /// not in the pipeline.
    pub fn register(mut self, action: Action, position: Position) -> DomainResult<Self> {
        let index = match position {
            Position::First => 0,
            Position::Last => self.actions.len(),
            Position::Before(anchor) => self.index_of(anchor)?,
            Position::After(anchor) => self.index_of(anchor)? + 1,
        };
        self.actions.insert(index, action);
        Ok(self)
    }

    /// Remove the action called `name`.
    pub fn unregister(mut self, name: &str) -> DomainResult<Self> {
        let index = self.index_of(name)?;
        self.actions.remove(index);
        Ok(self)
    }

    /// Run every action in order, calling `on_invoke` before each one.
    pub fn run(
        &self,
        structure: Structure,
        opts: Options,
        mut on_invoke: impl FnMut(&Action),
    ) -> DomainResult<(Structure, Options)> {
        self.actions
            .iter()
            .try_fold((structure, opts), |(structure, opts), action| {
                on_invoke(action);
                action.apply(structure, opts)
            })
    }

    fn index_of(&self, name: &str) -> DomainResult<usize> {
        self.actions
            .iter()
            .position(|a| a.name == name)
            .ok_or_else(|| DomainError::UnknownAction {
                name: name.to_string(),
            })
    }
}
