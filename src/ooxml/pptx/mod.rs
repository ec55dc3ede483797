//! PowerPoint (.pptx) output and read-back.
//!
//! - [`package`]: renders a [`crate::deck::Deck`] into the parts of a package
//! - [`writer`]: XML for the presentation, slides and shapes
//! - [`template`]: the fixed master, layout and theme parts
//! - [`reader`]: [`DeckSummary`], a structural read of a generated file

pub mod package;
pub mod reader;
pub mod template;
pub mod writer;

pub use reader::{DeckSummary, ParagraphSummary, ShapeSummary, SlideSummary};
