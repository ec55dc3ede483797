//! Common types and utilities shared by the slide toolkit and the serializer.
//!
//! Units and geometry, colors and styles, XML text helpers, and the crate-wide
//! error type live here. Nothing in this module knows about slides.

// Submodule declarations
pub mod error;
pub mod geometry;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use geometry::{Canvas, Point, Rect};
pub use style::{
    Alignment, ColorRef, ListStyle, Palette, RGBColor, ShapeStyle, TextStyle, Theme,
    VerticalAnchor,
};
pub use unit::{Length, LengthUnit, to_absolute};
