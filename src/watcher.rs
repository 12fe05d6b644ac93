//! Track-finished watcher.
//!
//! The playback layer feeds events into the watcher over a channel; on
//! every [`PlayerEvent::TrackFinished`] the watcher advances the shared
//! playlist cursor and publishes the new current track (or `None` once the
//! end of the playlist is reached) as a [`CursorUpdate`]. Starting the next
//! track is the caller's job; the watcher only moves the cursor.

use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::debug;

use crate::playlist::{NodeId, SharedPlaylist, Track};

/// Events the playback layer reports to the watcher.
#[derive(Debug)]
pub enum PlayerEvent {
    /// The current track played to its end.
    TrackFinished,
    /// Stop the watcher thread.
    Shutdown,
}

/// Published after every handled [`PlayerEvent::TrackFinished`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorUpdate {
    /// The new current track, or `None` once the playlist end is reached.
    pub current: Option<(NodeId, Track)>,
}

/// Handle to the watcher thread.
pub struct Watcher {
    tx: Sender<PlayerEvent>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl Watcher {
    /// Spawn the watcher over `playlist`.
    ///
    /// Returns the handle plus the receiving end of the cursor updates.
    pub fn spawn(playlist: SharedPlaylist) -> (Self, Receiver<CursorUpdate>) {
        let (tx, rx) = mpsc::channel::<PlayerEvent>();
        let (update_tx, update_rx) = mpsc::channel::<CursorUpdate>();
        let join = thread::spawn(move || run(playlist, rx, update_tx));
        (
            Self {
                tx,
                join: Mutex::new(Some(join)),
            },
            update_rx,
        )
    }

    /// Report that the current track finished playing.
    pub fn notify_finished(&self) {
        let _ = self.tx.send(PlayerEvent::TrackFinished);
    }

    pub fn send(&self, event: PlayerEvent) -> Result<(), mpsc::SendError<PlayerEvent>> {
        self.tx.send(event)
    }

    /// Ask the thread to stop and wait for it.
    pub fn shutdown(&self) {
        let _ = self.tx.send(PlayerEvent::Shutdown);
        if let Ok(mut join) = self.join.lock() {
            if let Some(handle) = join.take() {
                let _ = handle.join();
            }
        }
    }
}

fn run(playlist: SharedPlaylist, rx: Receiver<PlayerEvent>, updates: Sender<CursorUpdate>) {
    loop {
        match rx.recv_timeout(Duration::from_millis(200)) {
            Ok(PlayerEvent::TrackFinished) => {
                let current = playlist.advance_and_current();
                match &current {
                    Some((_, track)) => debug!("cursor advanced to {:?}", track.title),
                    None => debug!("end of playlist reached"),
                }
                if updates.send(CursorUpdate { current }).is_err() {
                    // Nobody is listening anymore.
                    break;
                }
            }
            Ok(PlayerEvent::Shutdown) => break,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::Playlist;
    use crate::probe::FixedProbe;
    use std::sync::Arc;

    fn shared(titles: &[&str]) -> SharedPlaylist {
        let shared = SharedPlaylist::new(
            Playlist::new(),
            Arc::new(FixedProbe(Duration::from_secs(1))),
        );
        for title in titles {
            shared
                .insert(*title, format!("/music/{title}.mp3"), None)
                .unwrap();
        }
        shared
    }

    #[test]
    fn track_finished_advances_and_publishes() {
        let playlist = shared(&["A", "B"]);
        let (watcher, updates) = Watcher::spawn(playlist.clone());

        watcher.notify_finished();
        let update = updates.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(
            update.current.as_ref().map(|(_, t)| t.title.as_str()),
            Some("B")
        );

        // Finishing the last track clears the cursor...
        watcher.notify_finished();
        let update = updates.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(update.current.is_none());

        // ...and further events keep it cleared instead of wrapping.
        watcher.notify_finished();
        let update = updates.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(update.current.is_none());
        assert!(playlist.current().is_none());

        watcher.shutdown();
    }

    #[test]
    fn shutdown_joins_the_thread() {
        let playlist = shared(&["A"]);
        let (watcher, _updates) = Watcher::spawn(playlist);
        watcher.shutdown();
        // A second shutdown is harmless.
        watcher.shutdown();
    }
}
