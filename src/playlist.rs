//! The bounded playlist core.
//!
//! [`Playlist`] is the single-threaded structure: an arena-backed doubly
//! linked list with a capacity cap and a cursor marking the active track.
//! [`SharedPlaylist`] wraps it in the one coarse lock the application
//! threads share.

mod error;
mod list;
mod node;
mod shared;

pub use error::PlaylistError;
pub use list::{DEFAULT_CAPACITY, Iter, Playlist, Track};
pub use node::NodeId;
pub use shared::SharedPlaylist;
