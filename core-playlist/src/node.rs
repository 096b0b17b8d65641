//! # Playlist Nodes
//!
//! The built composite tree. A node is either a leaf track or a group owning
//! an ordered sequence of children; children keep insertion order and are
//! never sorted. Trees are constructed once and immutable afterwards.

use serde::{Deserialize, Serialize};

/// One node of a playlist tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistNode {
    /// A single track.
    Track(String),
    /// A named group of nodes, in insertion order.
    Group {
        name: String,
        children: Vec<PlaylistNode>,
    },
}

impl PlaylistNode {
    /// Create a leaf track.
    pub fn track(name: impl Into<String>) -> Self {
        PlaylistNode::Track(name.into())
    }

    /// Create a group with the given children (insertion order preserved).
    pub fn group(name: impl Into<String>, children: Vec<PlaylistNode>) -> Self {
        PlaylistNode::Group {
            name: name.into(),
            children,
        }
    }

    /// The track or group name.
    pub fn name(&self) -> &str {
        match self {
            PlaylistNode::Track(name) => name,
            PlaylistNode::Group { name, .. } => name,
        }
    }

    /// Returns `true` for group nodes.
    pub fn is_group(&self) -> bool {
        matches!(self, PlaylistNode::Group { .. })
    }

    /// Describe the subtree rooted here as ordered lines.
    ///
    /// Pre-order and depth-first: a track yields one `Song:` line, a group
    /// yields its `Playlist:` header followed by each child's lines in
    /// insertion order. An empty group is just its header. No mutation, so
    /// repeated calls yield identical output.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.len());
        self.describe_into(&mut lines);
        lines
    }

    fn describe_into(&self, lines: &mut Vec<String>) {
        match self {
            PlaylistNode::Track(name) => lines.push(format!("Song: {}", name)),
            PlaylistNode::Group { name, children } => {
                lines.push(format!("Playlist: {}", name));
                for child in children {
                    child.describe_into(lines);
                }
            }
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn len(&self) -> usize {
        match self {
            PlaylistNode::Track(_) => 1,
            PlaylistNode::Group { children, .. } => {
                1 + children.iter().map(PlaylistNode::len).sum::<usize>()
            }
        }
    }

    /// A node always counts itself, so a tree is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of leaf tracks in this subtree.
    pub fn track_count(&self) -> usize {
        match self {
            PlaylistNode::Track(_) => 1,
            PlaylistNode::Group { children, .. } => {
                children.iter().map(PlaylistNode::track_count).sum()
            }
        }
    }
}
