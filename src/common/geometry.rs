//! Positions, rectangles and the slide canvas.
//!
//! The coordinate system has its origin at the top-left corner of the slide,
//! x grows to the right and y grows downwards.

use crate::common::error::{Error, Result};
use crate::common::unit::{EMUS_PER_INCH, Length};
use serde::Deserialize;
use std::fmt;

/// A point on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Length,
    pub y: Length,
}

impl Point {
    #[inline]
    pub const fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle: position of the top-left corner plus extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
}

impl Rect {
    /// Create a rectangle from lengths.
    #[inline]
    pub const fn new(x: Length, y: Length, width: Length, height: Length) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from thousandths of an inch.
    ///
    /// Layout code uses this form for its constants:
    /// `Rect::mils(800, 500, 11_000, 800)` is the box at (0.8in, 0.5in),
    /// 11in wide and 0.8in high.
    #[inline]
    pub const fn mils(x: u64, y: u64, width: u64, height: u64) -> Self {
        Self::new(
            Length::mils(x),
            Length::mils(y),
            Length::mils(width),
            Length::mils(height),
        )
    }

    /// Create a rectangle from inch values.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGeometry`] when any component is negative or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use pitaya::common::geometry::Rect;
    ///
    /// let rect = Rect::from_inches(0.5, 1.5, 2.2, 0.45).unwrap();
    /// assert_eq!(rect, Rect::mils(500, 1_500, 2_200, 450));
    /// assert!(Rect::from_inches(0.0, 0.0, -1.0, 1.0).is_err());
    /// ```
    pub fn from_inches(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        let component = |name: &str, value: f64| {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidGeometry(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
            Ok(Length::from_emus((value * EMUS_PER_INCH as f64).round() as u64))
        };

        Ok(Self::new(
            component("x", x)?,
            component("y", y)?,
            component("width", width)?,
            component("height", height)?,
        ))
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// X coordinate of the right edge.
    #[inline]
    pub fn right(&self) -> Length {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> Length {
        self.y + self.height
    }

    /// The same rectangle moved right and down.
    #[inline]
    pub fn offset(&self, dx: Length, dy: Length) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrink by `inset` on every side, never below zero extent.
    pub fn inset(&self, inset: Length) -> Self {
        Self::new(
            self.x + inset,
            self.y + inset,
            self.width.saturating_sub(inset * 2),
            self.height.saturating_sub(inset * 2),
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} x {}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Smallest slide side accepted by PresentationML (1in).
pub const MIN_CANVAS_SIDE: Length = Length::from_emus(914_400);
/// Largest slide side accepted by PresentationML (56in).
pub const MAX_CANVAS_SIDE: Length = Length::from_emus(51_206_400);

/// The fixed-size drawing surface shared by every slide of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "CanvasSize")]
pub struct Canvas {
    width: Length,
    height: Length,
}

impl Canvas {
    /// 16:9 widescreen, 13.333in x 7.5in.
    pub const WIDESCREEN: Canvas = Canvas {
        width: Length::mils(13_333),
        height: Length::mils(7_500),
    };

    /// 4:3 standard, 10in x 7.5in.
    pub const STANDARD: Canvas = Canvas {
        width: Length::mils(10_000),
        height: Length::mils(7_500),
    };

    /// Create a canvas of the given size.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGeometry`] when a side is outside 1in..=56in.
    pub fn new(width: Length, height: Length) -> Result<Self> {
        for (name, side) in [("width", width), ("height", height)] {
            if side < MIN_CANVAS_SIDE || side > MAX_CANVAS_SIDE {
                return Err(Error::InvalidGeometry(format!(
                    "Canvas {} must be between {} and {}, got {}",
                    name, MIN_CANVAS_SIDE, MAX_CANVAS_SIDE, side
                )));
            }
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub const fn width(&self) -> Length {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> Length {
        self.height
    }

    /// The full-canvas rectangle.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::new(Length::ZERO, Length::ZERO, self.width, self.height)
    }

    /// Whether any part of `rect` lies on the canvas.
    ///
    /// Zero-extent rectangles count as on the canvas when their origin is.
    pub fn overlaps(&self, rect: &Rect) -> bool {
        let starts_within = |start: Length, extent: Length, side: Length| {
            if extent == Length::ZERO {
                start <= side
            } else {
                start < side
            }
        };
        starts_within(rect.x, rect.width, self.width)
            && starts_within(rect.y, rect.height, self.height)
    }

    /// Whether `rect` lies entirely on the canvas.
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.right() <= self.width && rect.bottom() <= self.height
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::WIDESCREEN
    }
}

/// Serialized form of [`Canvas`], validated on conversion.
#[derive(Debug, Deserialize)]
struct CanvasSize {
    width: Length,
    height: Length,
}

impl TryFrom<CanvasSize> for Canvas {
    type Error = Error;

    fn try_from(size: CanvasSize) -> Result<Self> {
        Canvas::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_inches_rejects_negative_extent() {
        assert!(matches!(
            Rect::from_inches(1.0, 1.0, -0.5, 1.0),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(matches!(
            Rect::from_inches(1.0, 1.0, 0.5, f64::INFINITY),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::mils(500, 1_500, 2_200, 450);
        assert_eq!(rect.right(), Length::mils(2_700));
        assert_eq!(rect.bottom(), Length::mils(1_950));
        assert_eq!(
            rect.inset(Length::mils(100)),
            Rect::mils(600, 1_600, 2_000, 250)
        );
    }

    #[test]
    fn test_widescreen_default() {
        let canvas = Canvas::default();
        assert_eq!(canvas.width(), Length::mils(13_333));
        assert_eq!(canvas.height(), Length::mils(7_500));
        assert_eq!(canvas.bounds().x, Length::ZERO);
    }

    #[test]
    fn test_overlaps_edges() {
        let canvas = Canvas::WIDESCREEN;
        let one = Length::mils(1_000);
        let right_edge = canvas.width();
        let bottom_edge = canvas.height();

        assert!(!canvas.overlaps(&Rect::new(right_edge, Length::ZERO, one, one)));
        assert!(!canvas.overlaps(&Rect::new(Length::ZERO, bottom_edge, one, one)));
        assert!(canvas.overlaps(&Rect::new(
            right_edge.saturating_sub(Length::from_emus(1)),
            Length::ZERO,
            one,
            one
        )));
        // A zero-width rule on the edge still counts
        assert!(canvas.overlaps(&Rect::new(right_edge, Length::ZERO, Length::ZERO, one)));
        assert!(!canvas.overlaps(&Rect::new(
            right_edge + Length::from_emus(1),
            Length::ZERO,
            Length::ZERO,
            one
        )));
    }

    #[test]
    fn test_canvas_range() {
        assert!(Canvas::new(Length::mils(500), Length::mils(7_500)).is_err());
        assert!(Canvas::new(Length::mils(10_000), Length::mils(60_000)).is_err());
        assert!(Canvas::new(Length::mils(10_000), Length::mils(5_625)).is_ok());
    }

    #[test]
    fn test_overlap_and_containment() {
        let canvas = Canvas::WIDESCREEN;
        // Slightly overflowing footnote: still on the canvas
        let footnote = Rect::mils(1_000, 7_000, 11_000, 600);
        assert!(canvas.overlaps(&footnote));
        assert!(!canvas.contains(&footnote));

        let off_canvas = Rect::mils(14_000, 1_000, 1_000, 1_000);
        assert!(!canvas.overlaps(&off_canvas));
    }
}
