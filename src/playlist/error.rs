use thiserror::Error;

/// Failures reported by playlist operations.
///
/// A failed operation never mutates the list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    /// The playlist already holds `capacity` entries.
    #[error("playlist is full ({capacity} entries)")]
    CapacityExceeded { capacity: usize },

    /// No entry matched the given title or id.
    #[error("entry not found in playlist")]
    NotFound,
}
