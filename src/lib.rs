//! A capacity-bounded doubly linked playlist with a movable playback cursor.
//!
//! This crate is the core data structure of a music player. The UI thread
//! inserts, removes and reorders entries; an audio-completion watcher
//! advances the cursor when a track finishes; a progress reporter reads the
//! cursor while a track plays. All of them go through [`SharedPlaylist`],
//! which serializes every operation behind a single lock covering the whole
//! structure. Rendering, audio decoding and playback control stay with the
//! caller.
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tracklist::probe::FixedProbe;
//! use tracklist::{Playlist, SharedPlaylist};
//!
//! let playlist = SharedPlaylist::new(
//!     Playlist::new(),
//!     Arc::new(FixedProbe(Duration::from_secs(180))),
//! );
//! playlist.insert("Opening", "/music/opening.mp3", None)?;
//! playlist.insert("Closing", "/music/closing.mp3", None)?;
//!
//! // The first entry into an empty list becomes the current track.
//! assert_eq!(playlist.current().map(|(_, t)| t.title), Some("Opening".into()));
//! playlist.advance();
//! assert_eq!(playlist.current().map(|(_, t)| t.title), Some("Closing".into()));
//! # Ok::<(), tracklist::PlaylistError>(())
//! ```

pub mod config;
pub mod playlist;
pub mod probe;
pub mod watcher;

pub use playlist::{NodeId, Playlist, PlaylistError, SharedPlaylist, Track};
pub use probe::{DurationProbe, LoftyProbe};
pub use watcher::{CursorUpdate, PlayerEvent, Watcher};
