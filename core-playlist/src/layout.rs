//! # Playlist Layouts
//!
//! The description form a host supplies in its session configuration. Groups
//! are defined once in a flat list and referenced by name from other groups,
//! which keeps the serialized form compact but makes invalid descriptions
//! representable: a reference can point at a missing group, or at an
//! ancestor, forming a cycle. [`PlaylistLayout::build`] resolves every
//! reference while tracking the ancestor path, so a cyclic description is
//! rejected with a diagnostic naming the offending group instead of recursing
//! forever at describe time.

use crate::error::{PlaylistError, Result};
use crate::node::PlaylistNode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of a group definition: a leaf track or a reference to another
/// defined group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryLayout {
    /// A track, by name.
    Track(String),
    /// A reference to a group defined elsewhere in the layout.
    Group(String),
}

/// Definition of one named group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupLayout {
    /// Group name; must be unique within the layout.
    pub name: String,
    /// Ordered entries of the group.
    #[serde(default)]
    pub entries: Vec<EntryLayout>,
}

impl GroupLayout {
    /// Create an empty group definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append a track entry.
    pub fn with_track(mut self, name: impl Into<String>) -> Self {
        self.entries.push(EntryLayout::Track(name.into()));
        self
    }

    /// Append a reference to another group.
    pub fn with_group(mut self, name: impl Into<String>) -> Self {
        self.entries.push(EntryLayout::Group(name.into()));
        self
    }
}

/// A complete playlist description: the root group name plus every group
/// definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistLayout {
    /// Name of the group to build the tree from.
    pub root: String,
    /// Flat list of group definitions.
    #[serde(default)]
    pub groups: Vec<GroupLayout>,
}

impl PlaylistLayout {
    /// Create a layout whose root is a single empty group named `root`.
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        Self {
            groups: vec![GroupLayout::new(root.clone())],
            root,
        }
    }

    /// Add a group definition.
    pub fn with_group(mut self, group: GroupLayout) -> Self {
        self.groups.push(group);
        self
    }

    /// Build the playlist tree this layout describes.
    ///
    /// Resolution is recursive from the root definition; the ancestor path is
    /// tracked so a group listed among its own descendants aborts with
    /// [`PlaylistError::CyclicGroup`] instead of looping. A group referenced
    /// from several distinct parents is legal and expands into independent
    /// subtrees, keeping the built tree strict.
    ///
    /// # Errors
    ///
    /// - [`PlaylistError::DuplicateGroup`] — two definitions share a name.
    /// - [`PlaylistError::UnknownGroup`] — the root or a referenced group has
    ///   no definition.
    /// - [`PlaylistError::CyclicGroup`] — a group references an ancestor.
    pub fn build(&self) -> Result<PlaylistNode> {
        let mut definitions: HashMap<&str, &GroupLayout> = HashMap::new();
        for group in &self.groups {
            if definitions.insert(group.name.as_str(), group).is_some() {
                return Err(PlaylistError::DuplicateGroup {
                    name: group.name.clone(),
                });
            }
        }

        let mut path = Vec::new();
        let tree = resolve_group(&self.root, &definitions, &mut path)?;
        tracing::debug!(
            root = %self.root,
            nodes = tree.len(),
            "playlist tree built"
        );
        Ok(tree)
    }
}

fn resolve_group(
    name: &str,
    definitions: &HashMap<&str, &GroupLayout>,
    path: &mut Vec<String>,
) -> Result<PlaylistNode> {
    if path.iter().any(|ancestor| ancestor == name) {
        return Err(PlaylistError::CyclicGroup {
            name: name.to_owned(),
        });
    }

    let definition = definitions
        .get(name)
        .ok_or_else(|| PlaylistError::UnknownGroup {
            name: name.to_owned(),
        })?;

    path.push(name.to_owned());
    let mut children = Vec::with_capacity(definition.entries.len());
    for entry in &definition.entries {
        match entry {
            EntryLayout::Track(track) => children.push(PlaylistNode::track(track.clone())),
            EntryLayout::Group(group) => {
                children.push(resolve_group(group, definitions, path)?);
            }
        }
    }
    path.pop();

    Ok(PlaylistNode::group(definition.name.clone(), children))
}
