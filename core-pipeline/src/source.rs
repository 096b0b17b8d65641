//! # Source Strategies
//!
//! Maps a [`SourceKind`] to the strategy that acquires the asset. The kind is
//! a closed enum, so resolution is total: there is no "unknown source"
//! fallback path and no error to handle. An invalid source name in a config
//! file fails at deserialization, before the pipeline ever sees it.

use crate::effects::{EffectSink, PlaybackEffect};
use serde::{Deserialize, Serialize};

/// Where a piece of media comes from.
///
/// Chosen once per session and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// File on the local filesystem.
    Local,
    /// HLS live stream.
    Stream,
    /// Asset fetched through a remote API.
    #[serde(rename = "remote")]
    RemoteApi,
}

impl SourceKind {
    /// Returns `true` if this source goes through the remote cache proxy.
    pub fn is_remote(self) -> bool {
        matches!(self, SourceKind::RemoteApi)
    }

    /// The loading strategy for this source kind.
    ///
    /// Total over the closed enum; every kind has exactly one strategy.
    pub fn loader(self) -> &'static dyn SourceLoader {
        match self {
            SourceKind::Local => &LocalFileLoader,
            SourceKind::Stream => &HlsStreamLoader,
            SourceKind::RemoteApi => &RemoteApiLoader,
        }
    }
}

/// Strategy that acquires a media asset.
///
/// Stateless; acquisition is an emitted effect, not real I/O.
pub trait SourceLoader {
    /// Acquire the asset named by `identifier`.
    fn load(&self, identifier: &str, sink: &dyn EffectSink);
}

/// Loads media from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileLoader;

impl SourceLoader for LocalFileLoader {
    fn load(&self, identifier: &str, sink: &dyn EffectSink) {
        sink.emit(PlaybackEffect::SourceLoaded {
            kind: SourceKind::Local,
            identifier: identifier.to_owned(),
        });
    }
}

/// Connects to an HLS stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct HlsStreamLoader;

impl SourceLoader for HlsStreamLoader {
    fn load(&self, identifier: &str, sink: &dyn EffectSink) {
        sink.emit(PlaybackEffect::SourceLoaded {
            kind: SourceKind::Stream,
            identifier: identifier.to_owned(),
        });
    }
}

/// Fetches media through a remote API.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoteApiLoader;

impl SourceLoader for RemoteApiLoader {
    fn load(&self, identifier: &str, sink: &dyn EffectSink) {
        sink.emit(PlaybackEffect::SourceLoaded {
            kind: SourceKind::RemoteApi,
            identifier: identifier.to_owned(),
        });
    }
}
