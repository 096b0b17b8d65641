//! Decorator composition tests for core-pipeline
//!
//! This suite verifies:
//! - Inside-out effect emission for every subset and order of features
//! - Orthogonality of render mode and source kind to feature decoration
//! - Stability of the base effect pair under deep wrapping

use core_pipeline::{
    FeatureKind, Playable, PlaybackEffect, RecordingSink, RenderMode, SourceKind,
};

fn decorated(identifier: &str, mode: RenderMode, features: &[FeatureKind]) -> Playable {
    Playable::base(identifier, mode.renderer()).with_features(features)
}

fn feature_effects(sink: &RecordingSink) -> Vec<FeatureKind> {
    sink.snapshot()
        .into_iter()
        .filter_map(|effect| match effect {
            PlaybackEffect::FeatureApplied { feature } => Some(feature),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Tests: Effect Ordering
// ============================================================================

#[test]
fn test_base_effects_precede_all_feature_effects() {
    let sink = RecordingSink::new();
    decorated(
        "movie.mp4",
        RenderMode::Hardware,
        &[
            FeatureKind::Subtitle,
            FeatureKind::Equalizer,
            FeatureKind::Watermark,
        ],
    )
    .play(&sink);

    let effects = sink.snapshot();
    assert_eq!(effects.len(), 5);
    assert!(matches!(effects[0], PlaybackEffect::Rendered { .. }));
    assert!(matches!(effects[1], PlaybackEffect::Playing { .. }));
    assert!(effects[2..]
        .iter()
        .all(|e| matches!(e, PlaybackEffect::FeatureApplied { .. })));
}

#[test]
fn test_every_subset_and_order_emits_in_wrap_order() {
    let all = [
        FeatureKind::Subtitle,
        FeatureKind::Equalizer,
        FeatureKind::Watermark,
    ];

    // All permutations of all non-empty subsets, enumerated by hand: three
    // singletons, six ordered pairs, six ordered triples.
    let mut stacks: Vec<Vec<FeatureKind>> = Vec::new();
    for &a in &all {
        stacks.push(vec![a]);
        for &b in &all {
            if b == a {
                continue;
            }
            stacks.push(vec![a, b]);
            for &c in &all {
                if c == a || c == b {
                    continue;
                }
                stacks.push(vec![a, b, c]);
            }
        }
    }
    assert_eq!(stacks.len(), 15);

    for stack in stacks {
        let sink = RecordingSink::new();
        decorated("song.mp3", RenderMode::Software, &stack).play(&sink);

        assert_eq!(
            feature_effects(&sink),
            stack,
            "feature effects must appear in wrap order for stack {:?}",
            stack
        );
        assert_eq!(sink.len(), 2 + stack.len());
    }
}

#[test]
fn test_repeated_feature_layers_each_emit() {
    let sink = RecordingSink::new();
    decorated(
        "song.mp3",
        RenderMode::Software,
        &[FeatureKind::Equalizer, FeatureKind::Equalizer],
    )
    .play(&sink);

    assert_eq!(
        feature_effects(&sink),
        vec![FeatureKind::Equalizer, FeatureKind::Equalizer]
    );
}

// ============================================================================
// Tests: Orthogonality
// ============================================================================

#[test]
fn test_render_mode_does_not_change_feature_effects() {
    let features = [FeatureKind::Watermark, FeatureKind::Subtitle];

    let hw_sink = RecordingSink::new();
    decorated("clip.mp4", RenderMode::Hardware, &features).play(&hw_sink);

    let sw_sink = RecordingSink::new();
    decorated("clip.mp4", RenderMode::Software, &features).play(&sw_sink);

    // Same feature effects either way; only the render effect differs.
    assert_eq!(feature_effects(&hw_sink), feature_effects(&sw_sink));
    assert_eq!(
        hw_sink.snapshot()[0],
        PlaybackEffect::Rendered {
            mode: RenderMode::Hardware,
            identifier: "clip.mp4".into()
        }
    );
    assert_eq!(
        sw_sink.snapshot()[0],
        PlaybackEffect::Rendered {
            mode: RenderMode::Software,
            identifier: "clip.mp4".into()
        }
    );
}

#[test]
fn test_source_loading_is_independent_of_decoration() {
    let sink = RecordingSink::new();
    SourceKind::Stream.loader().load("radio.m3u8", &sink);
    decorated("radio.m3u8", RenderMode::Software, &[FeatureKind::Equalizer]).play(&sink);

    let effects = sink.snapshot();
    assert_eq!(
        effects[0],
        PlaybackEffect::SourceLoaded {
            kind: SourceKind::Stream,
            identifier: "radio.m3u8".into()
        }
    );
    // Loading emits exactly one effect regardless of how playback is wrapped.
    assert_eq!(effects.len(), 4);
}

// ============================================================================
// Tests: Display Lines
// ============================================================================

#[test]
fn test_fully_decorated_play_renders_expected_lines() {
    let sink = RecordingSink::new();
    decorated(
        "movie.mp4",
        RenderMode::Hardware,
        &[
            FeatureKind::Subtitle,
            FeatureKind::Equalizer,
            FeatureKind::Watermark,
        ],
    )
    .play(&sink);

    assert_eq!(
        sink.lines(),
        vec![
            "Rendering movie.mp4 with hardware acceleration.",
            "Playing movie.mp4...",
            "Subtitles enabled.",
            "Equalizer effect applied.",
            "Watermark applied.",
        ]
    );
}
