//! The coarse-locked playlist handle shared between threads.
//!
//! One mutex covers the whole structure; every operation holds it for its
//! full duration, so no caller ever observes a partially updated list. The
//! lock is uncontended in practice (UI clicks, one advance per finished
//! track, one cursor read per second), which is why a single coarse lock is
//! the right amount of machinery here.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::probe::DurationProbe;

use super::error::PlaylistError;
use super::list::{Playlist, Track};
use super::node::NodeId;

/// Thread-safe handle to a single [`Playlist`].
///
/// Cloning shares the same underlying list. The handle owns the
/// [`DurationProbe`] used to resolve track lengths; probing runs before the
/// lock is taken so no I/O happens inside the critical section.
#[derive(Clone)]
pub struct SharedPlaylist {
    inner: Arc<Mutex<Playlist>>,
    probe: Arc<dyn DurationProbe>,
}

impl SharedPlaylist {
    pub fn new(playlist: Playlist, probe: Arc<dyn DurationProbe>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(playlist)),
            probe,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Playlist> {
        // Failed operations are no-ops and successful ones fix every link
        // before returning, so a guard recovered from a poisoned lock still
        // holds a consistent list.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Probe `path` for its duration and insert a new entry.
    ///
    /// Position rules are those of [`Playlist::insert`]. A failed probe is
    /// non-fatal: the entry is inserted with a zero duration.
    pub fn insert(
        &self,
        title: impl Into<String>,
        path: impl Into<PathBuf>,
        position: Option<usize>,
    ) -> Result<NodeId, PlaylistError> {
        let path = path.into();
        let duration_secs = self
            .probe
            .probe(&path)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let track = Track {
            title: title.into(),
            path,
            duration_secs,
        };
        self.lock().insert(track, position)
    }

    /// Remove the first entry titled `title`. See [`Playlist::remove`].
    pub fn remove(&self, title: &str) -> Result<Track, PlaylistError> {
        self.lock().remove(title)
    }

    /// See [`Playlist::advance`].
    pub fn advance(&self) {
        self.lock().advance();
    }

    /// Advance the cursor and return the new current track, if any.
    ///
    /// Single lock acquisition, so no other operation can slip in between
    /// the advance and the read.
    pub fn advance_and_current(&self) -> Option<(NodeId, Track)> {
        let mut list = self.lock();
        list.advance();
        current_of(&list)
    }

    /// See [`Playlist::retreat`].
    pub fn retreat(&self) {
        self.lock().retreat();
    }

    /// See [`Playlist::set_cursor`].
    pub fn set_cursor(&self, id: NodeId) -> Result<(), PlaylistError> {
        self.lock().set_cursor(id)
    }

    /// See [`Playlist::clear`].
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Clone of the track under the cursor, with its id.
    pub fn current(&self) -> Option<(NodeId, Track)> {
        current_of(&self.lock())
    }

    /// Cloned head-to-tail view, for rendering a playlist listing.
    pub fn snapshot(&self) -> Vec<(NodeId, Track)> {
        self.lock()
            .iter()
            .map(|(id, track)| (id, track.clone()))
            .collect()
    }
}

fn current_of(list: &Playlist) -> Option<(NodeId, Track)> {
    let id = list.cursor()?;
    list.get(id).map(|track| (id, track.clone()))
}
