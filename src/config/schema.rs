use serde::Deserialize;

use crate::playlist::DEFAULT_CAPACITY;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tracklist/config.toml` or
/// `~/.config/tracklist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playlist: PlaylistSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playlist: PlaylistSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Maximum number of simultaneous playlist entries.
    ///
    /// Fixed once a playlist is built from these settings; it is never
    /// adjusted at runtime.
    pub capacity: usize,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
