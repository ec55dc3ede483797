//! Fill, stroke and shadow of a figure.

use super::color::RGBColor;
use crate::common::unit::Length;

/// Visual style of a rectangle, rounded rectangle or oval.
///
/// `None` for `fill` means transparent, `None` for `line` means no stroke
/// (`line_width` is then ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeStyle {
    pub fill: Option<RGBColor>,
    pub line: Option<RGBColor>,
    pub line_width: Length,
    pub shadow: bool,
}

impl ShapeStyle {
    /// Solid fill, no stroke, no shadow.
    #[inline]
    pub const fn filled(color: RGBColor) -> Self {
        Self {
            fill: Some(color),
            line: None,
            line_width: Length::ZERO,
            shadow: false,
        }
    }

    /// No fill, no stroke.
    #[inline]
    pub const fn transparent() -> Self {
        Self {
            fill: None,
            line: None,
            line_width: Length::ZERO,
            shadow: false,
        }
    }

    /// Add a stroke of `width` in `color`.
    #[inline]
    pub const fn with_line(mut self, color: RGBColor, width: Length) -> Self {
        self.line = Some(color);
        self.line_width = width;
        self
    }

    /// Turn the drop shadow on.
    #[inline]
    pub const fn with_shadow(mut self) -> Self {
        self.shadow = true;
        self
    }

    /// Whether a stroke is drawn.
    #[inline]
    pub fn has_line(&self) -> bool {
        self.line.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let navy = RGBColor::from_u32(0x0B1D51);
        let style = ShapeStyle::filled(RGBColor::WHITE).with_line(navy, Length::points(2));
        assert_eq!(style.fill, Some(RGBColor::WHITE));
        assert_eq!(style.line, Some(navy));
        assert_eq!(style.line_width, Length::from_emus(25_400));
        assert!(!style.shadow);
        assert!(ShapeStyle::transparent().with_shadow().shadow);
        assert!(!ShapeStyle::default().has_line());
    }
}
