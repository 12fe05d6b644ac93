//! Configuration loader and schema types.
//!
//! The only tunable this crate owns is the playlist capacity; everything
//! else about the structure's behavior is fixed. Settings come from an
//! optional TOML file plus environment overrides.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;

#[cfg(test)]
mod tests;
