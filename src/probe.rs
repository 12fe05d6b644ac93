//! Duration probing for playlist entries.
//!
//! Resolving a track's length is the one outbound call the playlist makes:
//! [`SharedPlaylist::insert`](crate::SharedPlaylist::insert) asks its probe
//! for the duration of the source it was handed. Probing is best-effort:
//! a failure degrades to a zero duration and the insert still succeeds.

use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;
use log::warn;

/// Resolves the playable duration of an audio source.
pub trait DurationProbe: Send + Sync {
    /// `None` when the source cannot be read or decoded.
    fn probe(&self, path: &Path) -> Option<Duration>;
}

/// Probe backed by `lofty`'s audio-properties reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyProbe;

impl DurationProbe for LoftyProbe {
    fn probe(&self, path: &Path) -> Option<Duration> {
        match lofty::read_from_path(path) {
            Ok(tagged) => Some(tagged.properties().duration()),
            Err(err) => {
                warn!("duration probe failed for {}: {err}", path.display());
                None
            }
        }
    }
}

/// Probe returning a fixed duration, for tests and non-file sources.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub Duration);

impl DurationProbe for FixedProbe {
    fn probe(&self, _path: &Path) -> Option<Duration> {
        Some(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lofty_probe_fails_on_garbage_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not-audio.mp3");
        fs::write(&path, b"definitely not an mp3").unwrap();
        assert!(LoftyProbe.probe(&path).is_none());
    }

    #[test]
    fn lofty_probe_fails_on_missing_file() {
        assert!(LoftyProbe.probe(Path::new("/nonexistent/track.mp3")).is_none());
    }

    #[test]
    fn fixed_probe_ignores_the_path() {
        let probe = FixedProbe(Duration::from_secs(42));
        assert_eq!(
            probe.probe(Path::new("anything")),
            Some(Duration::from_secs(42))
        );
    }
}
