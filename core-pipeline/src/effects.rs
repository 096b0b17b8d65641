//! # Playback Effects
//!
//! The pipeline performs no real network, file, or device I/O. Instead, every
//! operation reports what it did as a [`PlaybackEffect`] pushed into an
//! [`EffectSink`]. Hosts choose the sink: [`RecordingSink`] captures effects
//! in order (the representation tests assert against), while [`TracingSink`]
//! forwards each effect to the `tracing` infrastructure.
//!
//! Effect ordering is part of the pipeline contract: a decorated playable
//! emits its base effects first and its decorator effects in wrap order, and
//! the remote proxy emits its cache decision before the streaming effect.

use crate::playable::FeatureKind;
use crate::render::RenderMode;
use crate::source::SourceKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

/// An observable outcome of a pipeline operation.
///
/// The `Display` form is the human-readable log line a console host would
/// print for the effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum PlaybackEffect {
    /// A source loader acquired the asset.
    SourceLoaded {
        kind: SourceKind,
        identifier: String,
    },
    /// A renderer produced output for the asset.
    Rendered {
        mode: RenderMode,
        identifier: String,
    },
    /// The base playable started playback.
    Playing { identifier: String },
    /// A feature decorator applied its layer after the inner chain played.
    FeatureApplied { feature: FeatureKind },
    /// Remote proxy cache miss: the stream resource is being (re)acquired.
    StreamCaching { identifier: String },
    /// Remote proxy cache hit: the memoized resource is reused.
    StreamCacheHit { identifier: String },
    /// The remote stream is playing.
    Streaming { identifier: String },
}

impl fmt::Display for PlaybackEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackEffect::SourceLoaded { kind, identifier } => match kind {
                SourceKind::Local => write!(f, "Loading local file: {}", identifier),
                SourceKind::Stream => write!(f, "Connecting to HLS stream: {}", identifier),
                SourceKind::RemoteApi => {
                    write!(f, "Fetching remote media via API: {}", identifier)
                }
            },
            PlaybackEffect::Rendered { mode, identifier } => match mode {
                RenderMode::Hardware => {
                    write!(f, "Rendering {} with hardware acceleration.", identifier)
                }
                RenderMode::Software => {
                    write!(f, "Rendering {} using software mode.", identifier)
                }
            },
            PlaybackEffect::Playing { identifier } => write!(f, "Playing {}...", identifier),
            PlaybackEffect::FeatureApplied { feature } => match feature {
                FeatureKind::Subtitle => write!(f, "Subtitles enabled."),
                FeatureKind::Equalizer => write!(f, "Equalizer effect applied."),
                FeatureKind::Watermark => write!(f, "Watermark applied."),
            },
            PlaybackEffect::StreamCaching { identifier } => {
                write!(f, "Caching remote stream for: {}", identifier)
            }
            PlaybackEffect::StreamCacheHit { identifier } => {
                write!(f, "Using cached version for: {}", identifier)
            }
            PlaybackEffect::Streaming { identifier } => {
                write!(f, "Streaming remote media: {}", identifier)
            }
        }
    }
}

/// Destination for pipeline effects.
///
/// Object-safe and callable through a shared reference so one sink can serve
/// a whole session; implementations that accumulate state use interior
/// mutability.
pub trait EffectSink {
    /// Record one effect.
    fn emit(&self, effect: PlaybackEffect);
}

/// Sink that records every effect, in emission order.
///
/// This is the testability hook promised by the pipeline contract: assertions
/// run against [`RecordingSink::snapshot`] or the rendered
/// [`RecordingSink::lines`].
#[derive(Debug, Default)]
pub struct RecordingSink {
    effects: Mutex<Vec<PlaybackEffect>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every effect recorded so far, in emission order.
    pub fn snapshot(&self) -> Vec<PlaybackEffect> {
        self.effects.lock().unwrap().clone()
    }

    /// The recorded effects rendered as display lines.
    pub fn lines(&self) -> Vec<String> {
        self.effects
            .lock()
            .unwrap()
            .iter()
            .map(|effect| effect.to_string())
            .collect()
    }

    /// Number of recorded effects.
    pub fn len(&self) -> usize {
        self.effects.lock().unwrap().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.effects.lock().unwrap().is_empty()
    }

    /// Discard all recorded effects.
    pub fn clear(&self) {
        self.effects.lock().unwrap().clear();
    }
}

impl EffectSink for RecordingSink {
    fn emit(&self, effect: PlaybackEffect) {
        self.effects.lock().unwrap().push(effect);
    }
}

/// Sink that forwards each effect to `tracing` at INFO level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EffectSink for TracingSink {
    fn emit(&self, effect: PlaybackEffect) {
        tracing::info!(effect = ?effect, "{}", effect);
    }
}
