//! # Playlist Error Types

use thiserror::Error;

/// Errors raised while building a playlist tree from a layout.
///
/// All variants are construction-time diagnostics; a successfully built
/// [`PlaylistNode`](crate::PlaylistNode) cannot fail to describe itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    /// A group is listed as its own descendant.
    #[error("Cyclic playlist group: {name}")]
    CyclicGroup { name: String },

    /// A referenced group has no definition in the layout.
    #[error("Unknown playlist group: {name}")]
    UnknownGroup { name: String },

    /// Two group definitions share the same name.
    #[error("Duplicate playlist group definition: {name}")]
    DuplicateGroup { name: String },
}

/// Result type for playlist operations.
pub type Result<T> = std::result::Result<T, PlaylistError>;
