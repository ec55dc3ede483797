//! Colors, figure styles, text styles and the deck theme.

// Submodule declarations
pub mod color;
pub mod shape;
pub mod text;
pub mod theme;

// Re-exports
pub use color::{ColorRef, RGBColor};
pub use shape::ShapeStyle;
pub use text::{Alignment, ListStyle, TextStyle, VerticalAnchor};
pub use theme::{Palette, Theme};
