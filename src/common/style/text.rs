//! Character and paragraph styling for text boxes.

use super::color::RGBColor;
use crate::common::error::{Error, Result};
use serde::Deserialize;

/// Font family used when nothing else is configured.
pub const DEFAULT_FONT: &str = "Calibri";

/// Font sizes DrawingML can store, in points (`ST_TextFontSize`).
pub const FONT_SIZE_RANGE_PT: std::ops::RangeInclusive<f64> = 1.0..=4000.0;

/// Dark text color used when nothing else is configured.
pub const DEFAULT_TEXT_COLOR: RGBColor = RGBColor::from_u32(0x1A1A2E);

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Value of the DrawingML `algn` attribute.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Vertical placement of the text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAnchor {
    /// Value of the DrawingML `anchor` attribute.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Style of the single run in a paragraph.
///
/// ```
/// use pitaya::common::style::{Alignment, RGBColor, TextStyle};
///
/// let style = TextStyle::default().size(44.0).bold().color(RGBColor::WHITE).centered();
/// assert_eq!(style.size_pt, 44.0);
/// assert_eq!(style.alignment, Alignment::Center);
/// assert_eq!(style.font_name, "Calibri");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size_pt: f64,
    pub bold: bool,
    pub color: RGBColor,
    pub font_name: String,
    pub alignment: Alignment,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size_pt: 18.0,
            bold: false,
            color: DEFAULT_TEXT_COLOR,
            font_name: DEFAULT_FONT.to_string(),
            alignment: Alignment::Left,
        }
    }
}

impl TextStyle {
    pub fn size(mut self, size_pt: f64) -> Self {
        self.size_pt = size_pt;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = color;
        self
    }

    pub fn font(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = font_name.into();
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn centered(self) -> Self {
        self.align(Alignment::Center)
    }

    /// Check that the font size can be written.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidUnit`] for sizes outside [`FONT_SIZE_RANGE_PT`],
    /// including zero, negative and NaN sizes.
    pub fn check_size(&self) -> Result<()> {
        if FONT_SIZE_RANGE_PT.contains(&self.size_pt) {
            return Ok(());
        }
        Err(Error::InvalidUnit(format!(
            "font size must be between {}pt and {}pt, got {}pt",
            FONT_SIZE_RANGE_PT.start(),
            FONT_SIZE_RANGE_PT.end(),
            self.size_pt
        )))
    }

    /// Font size in hundredths of a point, as written to `a:rPr/@sz`.
    #[inline]
    pub fn size_centipoints(&self) -> u32 {
        (self.size_pt * 100.0).round() as u32
    }
}

/// Uniform style of every paragraph in a bullet list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListStyle {
    pub text: TextStyle,
    pub space_after_pt: f64,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            text: TextStyle::default().size(16.0),
            space_after_pt: 6.0,
        }
    }
}

impl ListStyle {
    pub fn size(mut self, size_pt: f64) -> Self {
        self.text.size_pt = size_pt;
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.text.color = color;
        self
    }

    pub fn spacing(mut self, space_after_pt: f64) -> Self {
        self.space_after_pt = space_after_pt;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = TextStyle::default();
        assert_eq!(style.size_pt, 18.0);
        assert!(!style.bold);
        assert_eq!(style.color, DEFAULT_TEXT_COLOR);
        assert_eq!(style.alignment, Alignment::Left);

        let list = ListStyle::default();
        assert_eq!(list.text.size_pt, 16.0);
        assert_eq!(list.space_after_pt, 6.0);
    }

    #[test]
    fn test_centipoints() {
        assert_eq!(TextStyle::default().size(13.5).size_centipoints(), 1350);
        assert_eq!(TextStyle::default().size_centipoints(), 1800);
    }

    #[test]
    fn test_size_range() {
        assert!(TextStyle::default().size(1.0).check_size().is_ok());
        assert!(TextStyle::default().size(4000.0).check_size().is_ok());
        for size in [0.0, -12.0, 0.5, 4000.5, f64::NAN, f64::INFINITY] {
            let result = TextStyle::default().size(size).check_size();
            assert!(matches!(result, Err(Error::InvalidUnit(_))), "{}", size);
        }
    }

    #[test]
    fn test_attribute_values() {
        assert_eq!(Alignment::Right.as_str(), "r");
        assert_eq!(VerticalAnchor::Middle.as_str(), "ctr");
    }
}
