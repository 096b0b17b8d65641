//! # Playback Pipeline Core
//!
//! Building blocks for a configurable media-playback pipeline:
//!
//! - **Source strategies** ([`SourceKind`], [`SourceLoader`]): how a piece of
//!   media is located (local file, HLS stream, remote API).
//! - **Render strategies** ([`RenderMode`], [`Renderer`]): how it is rendered
//!   (hardware or software).
//! - **Decorated playables** ([`Playable`], [`FeatureKind`]): the polymorphic
//!   unit of playback, optionally wrapped by independent feature layers
//!   (subtitles, equalizer, watermark).
//! - **Remote cache proxy** ([`RemoteCacheProxy`]): memoizes the most recently
//!   fetched remote identifier.
//! - **Effects** ([`PlaybackEffect`], [`EffectSink`]): every operation reports
//!   its outcome as a recorded event rather than performing real I/O.
//!
//! Each concern is selected independently at session-build time and combined
//! without knowing about the others; the assembly itself lives in
//! `core-session`.
//!
//! ## Threading Model
//!
//! Single-threaded and synchronous: `load`, `render`, `play` and
//! `play_stream` run to completion on the caller's thread. Nothing here is
//! shared across sessions; each session owns its playable chain and (if
//! remote) its own proxy instance.

pub mod effects;
pub mod playable;
pub mod proxy;
pub mod render;
pub mod source;

pub use effects::{EffectSink, PlaybackEffect, RecordingSink, TracingSink};
pub use playable::{FeatureKind, Playable};
pub use proxy::{ProxyStats, RemoteCacheProxy};
pub use render::{HardwareRenderer, RenderMode, Renderer, SoftwareRenderer};
pub use source::{HlsStreamLoader, LocalFileLoader, RemoteApiLoader, SourceKind, SourceLoader};
