//! Cast of actors, partitioned into named groups
//!
//! The cast owns every actor. Group order is insertion order, which is also
//! the order actions see actors in.

mod actor;

pub use actor::Actor;

use std::collections::HashMap;
use thiserror::Error;

/// Cast access errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CastError {
    /// A group an action depends on was never created
    #[error("precondition violated: cast has no group '{0}'")]
    MissingGroup(String),
}

/// All actors in the game, keyed by group name
#[derive(Debug, Default)]
pub struct Cast {
    groups: HashMap<String, Vec<Actor>>,
}

impl Cast {
    /// Create an empty cast
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `group` if it does not exist yet
    pub fn ensure_group(&mut self, group: &str) {
        self.groups.entry(group.to_string()).or_default();
    }

    /// Check whether `group` exists (it may be empty)
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    /// Add an actor to the end of `group`, creating the group if needed
    pub fn add_actor(&mut self, group: &str, actor: Actor) {
        self.groups.entry(group.to_string()).or_default().push(actor);
    }

    /// Actors of `group` in order
    pub fn actors(&self, group: &str) -> Result<&[Actor], CastError> {
        self.groups
            .get(group)
            .map(Vec::as_slice)
            .ok_or_else(|| CastError::MissingGroup(group.to_string()))
    }

    /// Mutable, resizable access to the actors of `group`
    pub fn actors_mut(&mut self, group: &str) -> Result<&mut Vec<Actor>, CastError> {
        self.groups
            .get_mut(group)
            .ok_or_else(|| CastError::MissingGroup(group.to_string()))
    }

    /// First actor of `group`, if the group exists and is non-empty
    pub fn first_actor(&self, group: &str) -> Option<&Actor> {
        self.groups.get(group).and_then(|actors| actors.first())
    }

    /// Remove and return the actor at `index` in `group`
    pub fn remove_actor(&mut self, group: &str, index: usize) -> Option<Actor> {
        let actors = self.groups.get_mut(group)?;
        (index < actors.len()).then(|| actors.remove(index))
    }

    /// Remove every actor from `group`, keeping the group itself
    pub fn clear_group(&mut self, group: &str) -> Result<(), CastError> {
        self.actors_mut(group)?.clear();
        Ok(())
    }

    /// Number of actors in `group` (0 for a missing group)
    pub fn len(&self, group: &str) -> usize {
        self.groups.get(group).map_or(0, Vec::len)
    }

    /// True when no group holds any actor
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }

    /// Names of all groups, sorted
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
