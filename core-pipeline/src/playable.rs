//! # Playables & Feature Decorators
//!
//! [`Playable`] is the polymorphic unit of playback: a recursive value type
//! whose root is always a base playable (identifier + renderer) and whose
//! outer layers each add one independent feature. Any subset of the three
//! features may be stacked, in any order, with repeats allowed.
//!
//! ## Effect ordering
//!
//! `play()` is defined inside-out: every wrapper plays its inner chain fully
//! before emitting its own effect. Wrapping `Base` with Subtitle, then
//! Equalizer, then Watermark therefore emits: render, playing, subtitles,
//! equalizer, watermark. Construction order is outside-in, emission order is
//! inside-out, and implementers of new sinks can rely on that sequence.

use crate::effects::{EffectSink, PlaybackEffect};
use crate::render::Renderer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// An independent playback feature that can wrap a [`Playable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Subtitle overlay.
    Subtitle,
    /// Audio equalizer.
    Equalizer,
    /// Video watermark.
    Watermark,
}

/// A playable unit: a base asset plus zero or more feature layers.
///
/// The chain is built once at session construction and is immutable
/// afterwards. Each wrapper exclusively owns its inner playable, so a chain
/// is a straight line ending in exactly one `Base`.
pub enum Playable {
    /// The root of every chain: an identifier played through a renderer.
    Base {
        identifier: String,
        renderer: Arc<dyn Renderer>,
    },
    /// Subtitle layer around an inner playable.
    Subtitled(Box<Playable>),
    /// Equalizer layer around an inner playable.
    Equalized(Box<Playable>),
    /// Watermark layer around an inner playable.
    Watermarked(Box<Playable>),
}

impl Playable {
    /// Create the base playable for `identifier`, rendered by `renderer`.
    pub fn base(identifier: impl Into<String>, renderer: Arc<dyn Renderer>) -> Self {
        Playable::Base {
            identifier: identifier.into(),
            renderer,
        }
    }

    /// Wrap this playable with one feature layer.
    pub fn with_feature(self, feature: FeatureKind) -> Self {
        let inner = Box::new(self);
        match feature {
            FeatureKind::Subtitle => Playable::Subtitled(inner),
            FeatureKind::Equalizer => Playable::Equalized(inner),
            FeatureKind::Watermark => Playable::Watermarked(inner),
        }
    }

    /// Wrap this playable with each feature in order (first item becomes the
    /// innermost layer, so its effect is emitted first among the features).
    pub fn with_features(self, features: &[FeatureKind]) -> Self {
        features
            .iter()
            .fold(self, |playable, feature| playable.with_feature(*feature))
    }

    /// Play the chain: base render + playing effects first, then each
    /// feature effect in wrap order.
    pub fn play(&self, sink: &dyn EffectSink) {
        match self {
            Playable::Base {
                identifier,
                renderer,
            } => {
                renderer.render(identifier, sink);
                sink.emit(PlaybackEffect::Playing {
                    identifier: identifier.clone(),
                });
            }
            Playable::Subtitled(inner) => {
                inner.play(sink);
                sink.emit(PlaybackEffect::FeatureApplied {
                    feature: FeatureKind::Subtitle,
                });
            }
            Playable::Equalized(inner) => {
                inner.play(sink);
                sink.emit(PlaybackEffect::FeatureApplied {
                    feature: FeatureKind::Equalizer,
                });
            }
            Playable::Watermarked(inner) => {
                inner.play(sink);
                sink.emit(PlaybackEffect::FeatureApplied {
                    feature: FeatureKind::Watermark,
                });
            }
        }
    }

    /// The identifier of the base asset at the root of this chain.
    pub fn identifier(&self) -> &str {
        match self {
            Playable::Base { identifier, .. } => identifier,
            Playable::Subtitled(inner)
            | Playable::Equalized(inner)
            | Playable::Watermarked(inner) => inner.identifier(),
        }
    }

    /// Number of feature layers around the base.
    pub fn feature_depth(&self) -> usize {
        match self {
            Playable::Base { .. } => 0,
            Playable::Subtitled(inner)
            | Playable::Equalized(inner)
            | Playable::Watermarked(inner) => 1 + inner.feature_depth(),
        }
    }
}

impl fmt::Debug for Playable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Playable::Base {
                identifier,
                renderer,
            } => f
                .debug_struct("Base")
                .field("identifier", identifier)
                .field("renderer", &renderer.mode())
                .finish(),
            Playable::Subtitled(inner) => f.debug_tuple("Subtitled").field(inner).finish(),
            Playable::Equalized(inner) => f.debug_tuple("Equalized").field(inner).finish(),
            Playable::Watermarked(inner) => f.debug_tuple("Watermarked").field(inner).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::RecordingSink;
    use crate::render::RenderMode;

    fn base(identifier: &str) -> Playable {
        Playable::base(identifier, RenderMode::Software.renderer())
    }

    #[test]
    fn bare_base_emits_render_then_playing() {
        let sink = RecordingSink::new();
        base("song.mp3").play(&sink);

        assert_eq!(
            sink.snapshot(),
            vec![
                PlaybackEffect::Rendered {
                    mode: RenderMode::Software,
                    identifier: "song.mp3".into()
                },
                PlaybackEffect::Playing {
                    identifier: "song.mp3".into()
                },
            ]
        );
    }

    #[test]
    fn features_emit_in_wrap_order() {
        let sink = RecordingSink::new();
        base("song.mp3")
            .with_feature(FeatureKind::Subtitle)
            .with_feature(FeatureKind::Equalizer)
            .with_feature(FeatureKind::Watermark)
            .play(&sink);

        let effects = sink.snapshot();
        assert_eq!(effects.len(), 5);
        assert_eq!(
            &effects[2..],
            &[
                PlaybackEffect::FeatureApplied {
                    feature: FeatureKind::Subtitle
                },
                PlaybackEffect::FeatureApplied {
                    feature: FeatureKind::Equalizer
                },
                PlaybackEffect::FeatureApplied {
                    feature: FeatureKind::Watermark
                },
            ]
        );
    }

    #[test]
    fn with_features_folds_innermost_first() {
        let playable = base("x").with_features(&[FeatureKind::Watermark, FeatureKind::Subtitle]);
        assert_eq!(playable.feature_depth(), 2);

        // Outermost layer is the last feature in the slice.
        assert!(matches!(playable, Playable::Subtitled(_)));
    }

    #[test]
    fn identifier_reaches_through_layers() {
        let playable = base("deep.mp3")
            .with_feature(FeatureKind::Equalizer)
            .with_feature(FeatureKind::Equalizer);

        assert_eq!(playable.identifier(), "deep.mp3");
        assert_eq!(playable.feature_depth(), 2);
    }
}
