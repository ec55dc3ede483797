//! Office Open XML packaging.
//!
//! 1. **OPC layer** (`opc`): ZIP container, content types, relationships
//! 2. **PresentationML** (`pptx`): presentation, slide and shape parts
pub mod opc;
pub mod pptx;

pub use pptx::DeckSummary;
