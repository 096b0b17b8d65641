//! # Session Configuration
//!
//! The record a host supplies to assemble one playback session. Every field
//! is a closed type, so a config that deserializes is already valid except
//! for its playlist description, which is checked during
//! [`Session::build`](crate::Session::build).

use core_pipeline::{FeatureKind, RenderMode, SourceKind};
use core_playlist::PlaylistLayout;
use serde::{Deserialize, Serialize};

/// Configuration for one playback session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Where the media comes from.
    pub source: SourceKind,

    /// Opaque name of the asset (filename or stream key). Uniqueness is the
    /// caller's concern.
    pub identifier: String,

    /// Which backend renders the session.
    #[serde(default)]
    pub render_mode: RenderMode,

    /// Features to stack around the base playable, innermost first. Any
    /// subset, any order, repeats allowed.
    #[serde(default)]
    pub features: Vec<FeatureKind>,

    /// Playlist description to build alongside playback.
    #[serde(default = "default_playlist")]
    pub playlist: PlaylistLayout,
}

fn default_playlist() -> PlaylistLayout {
    PlaylistLayout::new("Queue")
}

impl SessionConfig {
    /// Create a config with no features and an empty default playlist.
    pub fn new(source: SourceKind, identifier: impl Into<String>, render_mode: RenderMode) -> Self {
        Self {
            source,
            identifier: identifier.into(),
            render_mode,
            features: Vec::new(),
            playlist: default_playlist(),
        }
    }

    /// Set the feature stack (innermost first).
    pub fn with_features(mut self, features: Vec<FeatureKind>) -> Self {
        self.features = features;
        self
    }

    /// Set the playlist description.
    pub fn with_playlist(mut self, playlist: PlaylistLayout) -> Self {
        self.playlist = playlist;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_defaults() {
        let config = SessionConfig::new(SourceKind::Local, "song.mp3", RenderMode::Hardware);

        assert_eq!(config.source, SourceKind::Local);
        assert_eq!(config.identifier, "song.mp3");
        assert!(config.features.is_empty());
        assert_eq!(config.playlist.root, "Queue");
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let json = r#"{ "source": "local", "identifier": "song.mp3" }"#;
        let config: SessionConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.render_mode, RenderMode::Software);
        assert!(config.features.is_empty());
    }

    #[test]
    fn unknown_source_name_is_rejected() {
        let json = r#"{ "source": "carrier-pigeon", "identifier": "song.mp3" }"#;
        assert!(serde_json::from_str::<SessionConfig>(json).is_err());
    }
}
