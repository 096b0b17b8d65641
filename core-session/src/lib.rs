//! # Session Assembly
//!
//! The composition driver: takes a [`SessionConfig`] and wires the pipeline
//! pieces — source loader, renderer, feature decorators, optional remote
//! cache proxy, and playlist tree — into one [`Session`], without any of the
//! pieces knowing about the others.
//!
//! Assembly is pure: building a session emits no effects and performs no
//! decision logic beyond strategy lookup and decorator stacking. The only
//! failure is an invalid playlist description, rejected here rather than at
//! traversal time.
//!
//! ## Usage
//!
//! ```
//! use core_pipeline::{FeatureKind, RecordingSink, RenderMode, SourceKind};
//! use core_session::{Session, SessionConfig};
//!
//! # fn example() -> core_session::Result<()> {
//! let config = SessionConfig::new(SourceKind::Local, "song.mp3", RenderMode::Hardware)
//!     .with_features(vec![FeatureKind::Subtitle, FeatureKind::Equalizer]);
//!
//! let session = Session::build(&config)?;
//! let sink = RecordingSink::new();
//! session.load(&sink);
//! session.play(&sink);
//!
//! for line in session.describe() {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;

pub use config::SessionConfig;
pub use error::{Result, SessionError};

use core_pipeline::{EffectSink, Playable, RemoteCacheProxy, SourceLoader};
use core_playlist::PlaylistNode;

/// One assembled playback session.
///
/// Owns its playable chain, playlist tree, and (for remote sources) its own
/// proxy instance; nothing is shared with other sessions.
pub struct Session {
    identifier: String,
    loader: &'static dyn SourceLoader,
    playable: Playable,
    playlist: PlaylistNode,
    proxy: Option<RemoteCacheProxy>,
}

impl Session {
    /// Assemble a session from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Playlist`] when the playlist description is
    /// cyclic, references an undefined group, or defines a group twice.
    pub fn build(config: &SessionConfig) -> Result<Self> {
        let playlist = config.playlist.build()?;

        let renderer = config.render_mode.renderer();
        let playable =
            Playable::base(config.identifier.clone(), renderer).with_features(&config.features);

        // The proxy exists only for remote sessions; other kinds never
        // instantiate one.
        let proxy = config.source.is_remote().then(RemoteCacheProxy::new);

        tracing::debug!(
            source = ?config.source,
            render_mode = ?config.render_mode,
            features = config.features.len(),
            remote = proxy.is_some(),
            "session assembled"
        );

        Ok(Self {
            identifier: config.identifier.clone(),
            loader: config.source.loader(),
            playable,
            playlist,
            proxy,
        })
    }

    /// Acquire the session's asset through its source strategy.
    pub fn load(&self, sink: &dyn EffectSink) {
        self.loader.load(&self.identifier, sink);
    }

    /// Play the decorated chain.
    pub fn play(&self, sink: &dyn EffectSink) {
        self.playable.play(sink);
    }

    /// Describe the session's playlist tree.
    pub fn describe(&self) -> Vec<String> {
        self.playlist.describe()
    }

    /// Route a remote stream request through the session's cache proxy.
    ///
    /// Returns `false` for non-remote sessions, which have no proxy. May be
    /// called any number of times with any identifiers; no ordering relative
    /// to [`Session::play`] is required or promised.
    pub fn play_stream(&mut self, identifier: &str, sink: &dyn EffectSink) -> bool {
        match self.proxy.as_mut() {
            Some(proxy) => {
                proxy.play_stream(identifier, sink);
                true
            }
            None => false,
        }
    }

    /// The asset identifier this session plays.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The decorated playable chain.
    pub fn playable(&self) -> &Playable {
        &self.playable
    }

    /// The built playlist tree.
    pub fn playlist(&self) -> &PlaylistNode {
        &self.playlist
    }

    /// The session's cache proxy, present only for remote sources.
    pub fn remote_proxy(&self) -> Option<&RemoteCacheProxy> {
        self.proxy.as_ref()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("identifier", &self.identifier)
            .field("playable", &self.playable)
            .field("playlist", &self.playlist)
            .field("proxy", &self.proxy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_pipeline::{RecordingSink, RenderMode, SourceKind};

    #[test]
    fn build_is_pure() {
        let config = SessionConfig::new(SourceKind::Local, "song.mp3", RenderMode::Software);
        let session = Session::build(&config).unwrap();

        // Assembly alone produced nothing observable.
        let sink = RecordingSink::new();
        assert!(sink.is_empty());
        assert_eq!(session.identifier(), "song.mp3");
    }

    #[test]
    fn non_remote_session_has_no_proxy() {
        let config = SessionConfig::new(SourceKind::Stream, "radio.m3u8", RenderMode::Software);
        let mut session = Session::build(&config).unwrap();

        assert!(session.remote_proxy().is_none());

        let sink = RecordingSink::new();
        assert!(!session.play_stream("radio.m3u8", &sink));
        assert!(sink.is_empty());
    }

    #[test]
    fn remote_session_owns_a_fresh_proxy() {
        let config = SessionConfig::new(SourceKind::RemoteApi, "track-1", RenderMode::Software);
        let session = Session::build(&config).unwrap();

        let proxy = session.remote_proxy().expect("remote sessions carry a proxy");
        assert_eq!(proxy.last_cached(), None);
    }
}
