//! Error types for the slide toolkit.
//!
//! Every fallible operation in the crate reports through the single [`Error`]
//! enum: geometry and unit problems raised by primitives, scale problems raised
//! by bar widgets, and packaging problems raised while serializing a deck.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
