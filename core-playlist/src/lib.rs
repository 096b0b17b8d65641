//! # Playlist Trees
//!
//! Composite playlist structure: leaf tracks and arbitrarily nested groups
//! sharing one traversal contract ([`PlaylistNode::describe`]).
//!
//! Two representations exist:
//!
//! - [`PlaylistNode`] — the built tree. Ownership makes it a strict tree by
//!   construction (no sharing, no cycles), so traversal always terminates.
//! - [`PlaylistLayout`] — the serde-able description hosts supply, in which
//!   groups are defined once and referenced by name. References make cyclic
//!   descriptions representable, which is why [`PlaylistLayout::build`]
//!   validates during construction and rejects a group that appears among its
//!   own descendants.

pub mod error;
pub mod layout;
pub mod node;

pub use error::{PlaylistError, Result};
pub use layout::{EntryLayout, GroupLayout, PlaylistLayout};
pub use node::PlaylistNode;
