//! From declarative content to slides.
//!
//! [`SlideContent`] records say *what* a slide shows; the [`Assembler`] knows
//! *where* each layout puts it. A [`DeckPlan`] bundles the records with the
//! canvas, theme and document metadata of a whole deck.

pub mod assembler;
pub mod content;
pub mod plan;

pub use assembler::Assembler;
pub use content::SlideContent;
pub use plan::DeckPlan;
