//! # Render Strategies
//!
//! Maps a [`RenderMode`] to the rendering backend. Like source resolution,
//! selection is total over a closed enum. A renderer is stateless and chosen
//! once per session; the same instance is shared read-only by every playable
//! in that session.

use crate::effects::{EffectSink, PlaybackEffect};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which backend renders the media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Hardware-accelerated rendering.
    Hardware,
    /// Software rendering.
    Software,
}

impl RenderMode {
    /// The rendering strategy for this mode, ready to share across the
    /// playables of one session.
    pub fn renderer(self) -> Arc<dyn Renderer> {
        match self {
            RenderMode::Hardware => Arc::new(HardwareRenderer),
            RenderMode::Software => Arc::new(SoftwareRenderer),
        }
    }
}

impl Default for RenderMode {
    fn default() -> Self {
        RenderMode::Software
    }
}

/// Strategy that renders a media asset.
///
/// Implementations must be stateless (or internally synchronized): one
/// renderer instance serves every play of a session.
pub trait Renderer {
    /// Render the asset named by `identifier`.
    fn render(&self, identifier: &str, sink: &dyn EffectSink);

    /// The mode this renderer implements.
    fn mode(&self) -> RenderMode;
}

/// Hardware-accelerated rendering backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct HardwareRenderer;

impl Renderer for HardwareRenderer {
    fn render(&self, identifier: &str, sink: &dyn EffectSink) {
        sink.emit(PlaybackEffect::Rendered {
            mode: RenderMode::Hardware,
            identifier: identifier.to_owned(),
        });
    }

    fn mode(&self) -> RenderMode {
        RenderMode::Hardware
    }
}

/// Software rendering backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftwareRenderer;

impl Renderer for SoftwareRenderer {
    fn render(&self, identifier: &str, sink: &dyn EffectSink) {
        sink.emit(PlaybackEffect::Rendered {
            mode: RenderMode::Software,
            identifier: identifier.to_owned(),
        });
    }

    fn mode(&self) -> RenderMode {
        RenderMode::Software
    }
}
