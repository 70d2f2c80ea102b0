//! Collection utilities and data structures

/// Append-only map from a normalized key to one canonical value.
pub mod identity_map;

pub use identity_map::IdentityMap;
