//! Pitaya - compose slide decks from declarative content and write them as
//! PowerPoint (`.pptx`) files.
//!
//! # Features
//!
//! - **Shape primitives**: backgrounds, accent bars, rectangles, rounded
//!   rectangles, ovals, text boxes and bullet lists on an absolute canvas
//! - **Widgets**: stat cards, section headers, bar rows, titled cards and step
//!   markers built from the primitives
//! - **Declarative layouts**: one [`SlideContent`] record per slide, drawn by
//!   the [`Assembler`] with an immutable palette and font [`Theme`]
//! - **Serializer**: a complete OPC package rendered in memory and persisted
//!   atomically
//! - **Reader**: [`DeckSummary`] re-reads a saved deck for inspection
//!
//! # Example - Drawing slides by hand
//!
//! ```no_run
//! use pitaya::Deck;
//! use pitaya::common::{Rect, Theme};
//! use pitaya::slide::widgets;
//!
//! # fn main() -> pitaya::Result<()> {
//! let theme = Theme::default();
//! let mut deck = Deck::new().with_title("Platform overview");
//!
//! let slide = deck.add_slide();
//! slide.add_background_rect(theme.palette.white)?;
//! slide.add_top_accent_bar(theme.palette.navy)?;
//! slide.add_text_box(Rect::mils(800, 500, 11_000, 800), "Key numbers", &theme.slide_title())?;
//! widgets::stat_card(
//!     slide,
//!     Rect::mils(800, 3_200, 2_500, 1_800),
//!     "89",
//!     "Database tables",
//!     theme.palette.teal,
//!     &theme,
//! )?;
//!
//! deck.save("overview.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building a deck from a plan
//!
//! ```no_run
//! use pitaya::DeckPlan;
//!
//! # fn main() -> pitaya::Result<()> {
//! let plan = DeckPlan::from_yaml_file("deck.yaml")?;
//! plan.build()?.save("deck.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! The library never installs a `tracing` subscriber; assembly and packaging
//! emit `debug!` events and a saved deck an `info!` event.

/// Units, geometry, colors, styles and the error type
pub mod common;

/// Slides and the primitives and widgets that draw on them
pub mod slide;

/// The deck: ordered slides plus document metadata
pub mod deck;

/// Declarative slide content and its assembly into slides
pub mod layout;

/// OPC packaging and PresentationML parts
///
/// Writes `.pptx` packages and reads them back for inspection.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, Result, Theme};
pub use deck::Deck;
pub use layout::{Assembler, DeckPlan, SlideContent};
pub use ooxml::DeckSummary;
