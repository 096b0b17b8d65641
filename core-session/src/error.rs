//! # Session Error Types

use thiserror::Error;

/// Errors raised while assembling a playback session.
///
/// Because source, render, and feature kinds are closed enums, the only way
/// a configuration can be invalid is through its playlist description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The playlist description was cyclic, dangling, or ambiguous.
    #[error("Invalid playlist configuration: {0}")]
    Playlist(#[from] core_playlist::PlaylistError),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
