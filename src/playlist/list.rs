use std::path::PathBuf;

use log::debug;

use super::error::PlaylistError;
use super::node::{Arena, NodeId};

/// Default maximum number of simultaneous entries.
pub const DEFAULT_CAPACITY: usize = 10;

/// One playable item.
///
/// `title` doubles as the identity key used by [`Playlist::remove`]; with
/// duplicate titles the first insertion-order match wins. `path` is an
/// opaque handle for the audio layer; the playlist never opens it beyond
/// the one-time duration probe at insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub path: PathBuf,
    /// Resolved once at insertion time; 0 when the duration probe failed.
    pub duration_secs: u64,
}

/// A capacity-bounded doubly linked playlist with a movable cursor.
///
/// Entries are arena-allocated and addressed by [`NodeId`]; `head`, `tail`
/// and the cursor are plain indices, so the playlist owns every entry
/// exclusively. `Playlist` itself is not thread-safe; wrap it in
/// [`SharedPlaylist`](super::SharedPlaylist) when multiple threads need it.
#[derive(Debug)]
pub struct Playlist {
    arena: Arena,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    current: Option<NodeId>,
    len: usize,
    capacity: usize,
}

impl Playlist {
    /// Create an empty playlist with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty playlist holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::default(),
            head: None,
            tail: None,
            current: None,
            len: 0,
            capacity,
        }
    }

    /// Build a playlist sized by the loaded settings.
    pub fn from_settings(settings: &crate::config::PlaylistSettings) -> Self {
        Self::with_capacity(settings.capacity)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Id of the entry under the cursor, or `None` when the cursor is
    /// cleared (nothing active / end of playlist reached).
    pub fn cursor(&self) -> Option<NodeId> {
        self.current
    }

    /// The track under the cursor, if any.
    pub fn current(&self) -> Option<&Track> {
        self.current.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: NodeId) -> Option<&Track> {
        self.arena.get(id).map(|node| &node.track)
    }

    pub fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.next
    }

    pub fn prev_of(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.prev
    }

    /// 1-based position of `id`, walking from head.
    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        self.iter().position(|(nid, _)| nid == id).map(|p| p + 1)
    }

    /// Insert `track` at a 1-based `position`.
    ///
    /// `None` or a position past `len + 1` appends. Position 1 prepends; on
    /// an empty list the new entry also becomes tail and the current track.
    /// Anything else splices the entry in after the `(position - 1)`-th
    /// node walking from head; a walk that runs out of nodes clamps to the
    /// last reachable spot instead of failing. Position 0 is treated as 1.
    ///
    /// Fails with [`PlaylistError::CapacityExceeded`] (and does not mutate)
    /// when the playlist is full.
    pub fn insert(&mut self, track: Track, position: Option<usize>) -> Result<NodeId, PlaylistError> {
        if self.len >= self.capacity {
            return Err(PlaylistError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let position = position.map_or(self.len + 1, |p| p.clamp(1, self.len + 1));
        debug!(
            "inserting {:?} at position {position} (len {})",
            track.title, self.len
        );

        let id = match (position, self.head) {
            (1, _) | (_, None) => {
                let old_head = self.head;
                let id = self.arena.insert(track);
                if let Some(node) = self.arena.get_mut(id) {
                    node.next = old_head;
                }
                match old_head {
                    Some(head) => {
                        if let Some(node) = self.arena.get_mut(head) {
                            node.prev = Some(id);
                        }
                        self.head = Some(id);
                    }
                    None => {
                        self.head = Some(id);
                        self.tail = Some(id);
                        self.current = Some(id);
                    }
                }
                id
            }
            (_, Some(head)) => {
                let id = self.arena.insert(track);

                // Land on the (position - 1)-th node; clamp if the list is
                // shorter than the walk.
                let mut after = head;
                for _ in 0..position - 2 {
                    match self.next_of(after) {
                        Some(next) => after = next,
                        None => break,
                    }
                }

                let next = self.next_of(after);
                if let Some(node) = self.arena.get_mut(id) {
                    node.prev = Some(after);
                    node.next = next;
                }
                if let Some(node) = self.arena.get_mut(after) {
                    node.next = Some(id);
                }
                match next {
                    Some(next) => {
                        if let Some(node) = self.arena.get_mut(next) {
                            node.prev = Some(id);
                        }
                    }
                    None => self.tail = Some(id),
                }
                id
            }
        };

        self.len += 1;
        Ok(id)
    }

    /// Remove the first entry (in head-to-tail order) titled `title` and
    /// return it.
    ///
    /// When the removed entry was the current track, the cursor moves to
    /// its successor, wraps to the (new) head when the tail was removed, or
    /// clears when the list empties. Fails with
    /// [`PlaylistError::NotFound`] (and does not mutate) when no title
    /// matches.
    pub fn remove(&mut self, title: &str) -> Result<Track, PlaylistError> {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let next = self.next_of(id);
            if self.get(id).is_some_and(|t| t.title == title) {
                let track = self.unlink(id).ok_or(PlaylistError::NotFound)?;
                debug!("removed {:?} (len {})", title, self.len);
                return Ok(track);
            }
            cursor = next;
        }
        Err(PlaylistError::NotFound)
    }

    fn unlink(&mut self, id: NodeId) -> Option<Track> {
        let node = self.arena.remove(id)?;

        match node.prev {
            Some(prev) => {
                if let Some(p) = self.arena.get_mut(prev) {
                    p.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => {
                if let Some(n) = self.arena.get_mut(next) {
                    n.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }

        if self.current == Some(id) {
            // Successor if there is one, otherwise wrap to the new head.
            // Both are None when the list just emptied.
            self.current = node.next.or(self.head);
        }

        self.len -= 1;
        Some(node.track)
    }

    /// Move the cursor to its successor; at the tail the cursor clears,
    /// signalling the end of the playlist. A cleared cursor stays cleared;
    /// advancing never restarts from head.
    pub fn advance(&mut self) {
        self.current = self.current.and_then(|id| self.next_of(id));
    }

    /// Move the cursor to its predecessor; no-op at the head or while the
    /// cursor is cleared.
    pub fn retreat(&mut self) {
        if let Some(prev) = self.current.and_then(|id| self.prev_of(id)) {
            self.current = Some(prev);
        }
    }

    /// Point the cursor at `id`.
    ///
    /// Membership is validated: a stale or foreign id fails with
    /// [`PlaylistError::NotFound`] and leaves the cursor alone.
    pub fn set_cursor(&mut self, id: NodeId) -> Result<(), PlaylistError> {
        if !self.arena.contains(id) {
            return Err(PlaylistError::NotFound);
        }
        self.current = Some(id);
        Ok(())
    }

    /// Drop every entry and reset head, tail, cursor and length.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.current = None;
        self.len = 0;
        debug!("playlist cleared");
    }

    /// Iterate entries from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            next: self.head,
        }
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}

/// Head-to-tail iterator over `(id, track)` pairs.
pub struct Iter<'a> {
    list: &'a Playlist,
    next: Option<NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeId, &'a Track);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.list.arena.get(id)?;
        self.next = node.next;
        Some((id, &node.track))
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = (NodeId, &'a Track);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
