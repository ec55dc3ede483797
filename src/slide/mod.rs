//! Slides and everything drawn on them.
//!
//! A [`Slide`] is an ordered shape list on a fixed canvas. Shapes are only ever
//! appended, so list order is z-order: the first shape is drawn first, at the
//! back. The drawing operations live in [`primitives`] (single shapes) and
//! [`widgets`] (fixed combinations of primitives).
//!
//! ```
//! use pitaya::common::{Canvas, Rect, TextStyle};
//! use pitaya::common::style::Palette;
//! use pitaya::slide::Slide;
//!
//! let palette = Palette::default();
//! let mut slide = Slide::new(Canvas::WIDESCREEN);
//! slide.add_background_rect(palette.white).unwrap();
//! slide.add_top_accent_bar(palette.navy).unwrap();
//! slide
//!     .add_text_box(Rect::mils(800, 500, 11_000, 800), "Agenda", &TextStyle::default().bold())
//!     .unwrap();
//! assert_eq!(slide.shape_count(), 3);
//! ```

pub mod primitives;
pub mod shape;
pub mod text;
pub mod widgets;

pub use primitives::{ACCENT_BAR_HEIGHT, ACCENT_BAR_Y};
pub use shape::{Figure, Shape, ShapeKind, TextBox};
pub use text::{Paragraph, TextBody};

use crate::common::error::{Error, Result};
use crate::common::geometry::{Canvas, Rect};

/// One slide: its canvas and its shapes in z-order.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    canvas: Canvas,
    shapes: Vec<Shape>,
    validate: bool,
}

impl Slide {
    /// An empty slide that never rejects geometry.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            shapes: Vec::new(),
            validate: false,
        }
    }

    /// An empty slide; with `validate` set, shapes lying wholly outside the
    /// canvas are rejected with [`Error::InvalidGeometry`].
    pub fn with_validation(canvas: Canvas, validate: bool) -> Self {
        Self {
            validate,
            ..Self::new(canvas)
        }
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[inline]
    pub fn validates_geometry(&self) -> bool {
        self.validate
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Text boxes in z-order.
    pub fn text_boxes(&self) -> impl Iterator<Item = &TextBox> {
        self.shapes.iter().filter_map(Shape::as_text_box)
    }

    /// Number of shapes of `kind`.
    pub fn count_of(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.kind() == kind).count()
    }

    /// Append `shape` on top of the existing ones.
    pub fn push(&mut self, shape: Shape) -> Result<&mut Shape> {
        self.check_bounds(shape.rect())?;
        self.shapes.push(shape);
        let index = self.shapes.len() - 1;
        Ok(&mut self.shapes[index])
    }

    fn check_bounds(&self, rect: &Rect) -> Result<()> {
        if self.canvas.contains(rect) {
            return Ok(());
        }
        if self.validate && !self.canvas.overlaps(rect) {
            return Err(Error::InvalidGeometry(format!(
                "{} lies outside the {} x {} canvas",
                rect,
                self.canvas.width(),
                self.canvas.height()
            )));
        }
        tracing::debug!(%rect, "shape extends past the canvas edge");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::style::{RGBColor, ShapeStyle};

    fn off_canvas() -> Shape {
        Shape::Rectangle(Figure::new(
            Rect::mils(20_000, 0, 1_000, 1_000),
            ShapeStyle::filled(RGBColor::BLACK),
        ))
    }

    #[test]
    fn test_validation_is_opt_in() {
        let mut lenient = Slide::new(Canvas::WIDESCREEN);
        assert!(lenient.push(off_canvas()).is_ok());
        assert_eq!(lenient.shape_count(), 1);

        let mut strict = Slide::with_validation(Canvas::WIDESCREEN, true);
        assert!(matches!(
            strict.push(off_canvas()),
            Err(Error::InvalidGeometry(_))
        ));
        assert_eq!(strict.shape_count(), 0);
    }

    #[test]
    fn test_partial_overflow_is_accepted() {
        let mut strict = Slide::with_validation(Canvas::WIDESCREEN, true);
        let overflowing = Shape::TextBox(TextBox::new(Rect::mils(9_300, 1_500, 6_000, 450)));
        assert!(strict.push(overflowing).is_ok());
    }
}
