//! # Remote Cache Proxy
//!
//! Stands between the host and remote streaming, memoizing the most recently
//! fetched identifier. Capacity is fixed at one slot: a miss replaces the
//! slot, a hit reuses it, and there is no eviction policy beyond
//! replace-on-miss.
//!
//! A proxy instance is created only for `RemoteApi` sessions, owns its cache
//! state exclusively, and is discarded with the session. Sharing one proxy
//! across sessions is unsupported.

use crate::effects::{EffectSink, PlaybackEffect};
use serde::{Deserialize, Serialize};

/// Hit/miss counters for one proxy instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyStats {
    /// Requests served from the memoized slot.
    pub hits: u64,
    /// Requests that (re)acquired the stream resource.
    pub misses: u64,
}

/// Caching proxy for remote stream playback.
#[derive(Debug, Default)]
pub struct RemoteCacheProxy {
    last_cached: Option<String>,
    stats: ProxyStats,
}

impl RemoteCacheProxy {
    /// Create a proxy with an empty cache slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Play a remote stream through the cache.
    ///
    /// Miss (slot empty or holding a different identifier): emits the caching
    /// effect, replaces the slot, then the streaming effect. Hit: emits the
    /// cache-hit effect, then the streaming effect, without re-acquiring
    /// anything.
    pub fn play_stream(&mut self, identifier: &str, sink: &dyn EffectSink) {
        match self.last_cached.as_deref() {
            Some(cached) if cached == identifier => {
                self.stats.hits += 1;
                tracing::debug!(identifier, "remote stream cache hit");
                sink.emit(PlaybackEffect::StreamCacheHit {
                    identifier: identifier.to_owned(),
                });
            }
            _ => {
                self.stats.misses += 1;
                tracing::debug!(identifier, "remote stream cache miss");
                sink.emit(PlaybackEffect::StreamCaching {
                    identifier: identifier.to_owned(),
                });
                self.last_cached = Some(identifier.to_owned());
            }
        }

        sink.emit(PlaybackEffect::Streaming {
            identifier: identifier.to_owned(),
        });
    }

    /// The identifier currently held in the cache slot, if any.
    pub fn last_cached(&self) -> Option<&str> {
        self.last_cached.as_deref()
    }

    /// Hit/miss counters accumulated over this proxy's lifetime.
    pub fn stats(&self) -> ProxyStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::RecordingSink;

    #[test]
    fn first_request_is_a_miss() {
        let mut proxy = RemoteCacheProxy::new();
        let sink = RecordingSink::new();

        proxy.play_stream("live.m3u8", &sink);

        assert_eq!(
            sink.snapshot(),
            vec![
                PlaybackEffect::StreamCaching {
                    identifier: "live.m3u8".into()
                },
                PlaybackEffect::Streaming {
                    identifier: "live.m3u8".into()
                },
            ]
        );
        assert_eq!(proxy.last_cached(), Some("live.m3u8"));
        assert_eq!(proxy.stats(), ProxyStats { hits: 0, misses: 1 });
    }

    #[test]
    fn repeat_request_is_a_hit() {
        let mut proxy = RemoteCacheProxy::new();
        let sink = RecordingSink::new();

        proxy.play_stream("live.m3u8", &sink);
        sink.clear();
        proxy.play_stream("live.m3u8", &sink);

        assert_eq!(
            sink.snapshot(),
            vec![
                PlaybackEffect::StreamCacheHit {
                    identifier: "live.m3u8".into()
                },
                PlaybackEffect::Streaming {
                    identifier: "live.m3u8".into()
                },
            ]
        );
        assert_eq!(proxy.stats(), ProxyStats { hits: 1, misses: 1 });
    }

    #[test]
    fn different_identifier_replaces_slot() {
        let mut proxy = RemoteCacheProxy::new();
        let sink = RecordingSink::new();

        proxy.play_stream("a", &sink);
        proxy.play_stream("b", &sink);

        // Single slot: "a" is gone.
        assert_eq!(proxy.last_cached(), Some("b"));
        assert_eq!(proxy.stats(), ProxyStats { hits: 0, misses: 2 });
    }
}
