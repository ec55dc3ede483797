//! The immutable palette and font configuration shared by widgets and the
//! assembler.
//!
//! A [`Theme`] is built once (from code or from the `theme:` section of a deck
//! plan) and passed by reference to everything that draws. Text presets are
//! derived from it on demand, so changing the palette or the font family
//! restyles every slide without touching layout code.

use super::color::{ColorRef, RGBColor};
use super::text::{Alignment, DEFAULT_FONT, ListStyle, TextStyle};
use crate::common::error::{Error, Result};
use serde::Deserialize;

/// The fifteen named colors of a deck.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub navy: RGBColor,
    pub teal: RGBColor,
    pub white: RGBColor,
    pub light_bg: RGBColor,
    pub dark_text: RGBColor,
    pub grey_text: RGBColor,
    pub muted: RGBColor,
    pub faint: RGBColor,
    pub divider: RGBColor,
    pub orange: RGBColor,
    pub blue: RGBColor,
    pub green: RGBColor,
    pub purple: RGBColor,
    pub red: RGBColor,
    pub amber: RGBColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            navy: RGBColor::from_u32(0x0B1D51),
            teal: RGBColor::from_u32(0x009688),
            white: RGBColor::WHITE,
            light_bg: RGBColor::from_u32(0xF0F4F8),
            dark_text: RGBColor::from_u32(0x1A1A2E),
            grey_text: RGBColor::from_u32(0x555555),
            muted: RGBColor::from_u32(0xB0BEC5),
            faint: RGBColor::from_u32(0x78909C),
            divider: RGBColor::from_u32(0xDDDDDD),
            orange: RGBColor::from_u32(0xFF6B35),
            blue: RGBColor::from_u32(0x1E88E5),
            green: RGBColor::from_u32(0x43A047),
            purple: RGBColor::from_u32(0x7B1FA2),
            red: RGBColor::from_u32(0xE53935),
            amber: RGBColor::from_u32(0xFFB300),
        }
    }
}

impl Palette {
    /// Look up a color by its field name (`"light_bg"`, `"teal"`, ...).
    pub fn get(&self, name: &str) -> Option<RGBColor> {
        let color = match name {
            "navy" => self.navy,
            "teal" => self.teal,
            "white" => self.white,
            "light_bg" => self.light_bg,
            "dark_text" => self.dark_text,
            "grey_text" | "grey" => self.grey_text,
            "muted" => self.muted,
            "faint" => self.faint,
            "divider" => self.divider,
            "orange" => self.orange,
            "blue" => self.blue,
            "green" => self.green,
            "purple" => self.purple,
            "red" => self.red,
            "amber" => self.amber,
            _ => return None,
        };
        Some(color)
    }
}

/// Palette plus font family, with the named text presets derived from them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub palette: Palette,
    pub font: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            font: DEFAULT_FONT.to_string(),
        }
    }
}

impl Theme {
    pub fn new(palette: Palette, font: impl Into<String>) -> Self {
        Self {
            palette,
            font: font.into(),
        }
    }

    /// Resolve a content color against the palette.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when a named color is not part of the palette.
    pub fn resolve(&self, color: &ColorRef) -> Result<RGBColor> {
        match color {
            ColorRef::Rgb(rgb) => Ok(*rgb),
            ColorRef::Named(name) => self
                .palette
                .get(name)
                .ok_or_else(|| Error::Config(format!("Unknown palette color '{}'", name))),
        }
    }

    /// Plain text in the theme font, dark text color.
    pub fn text(&self, size_pt: f64) -> TextStyle {
        TextStyle::default()
            .size(size_pt)
            .color(self.palette.dark_text)
            .font(self.font.as_str())
    }

    /// Bold text of `size_pt` in `color`, used for card and column headings.
    pub fn heading(&self, size_pt: f64, color: RGBColor) -> TextStyle {
        self.text(size_pt).bold().color(color)
    }

    /// Title of a content slide: 36pt bold navy.
    pub fn slide_title(&self) -> TextStyle {
        self.heading(36.0, self.palette.navy)
    }

    /// Introductory paragraph under a slide title.
    pub fn body(&self) -> TextStyle {
        self.text(17.0)
    }

    /// Small centered note at the bottom of a slide.
    pub fn footnote(&self) -> TextStyle {
        self.text(13.0).color(self.palette.grey_text).centered()
    }

    /// Title of a title or closing slide: 56pt bold white, centered.
    pub fn hero_title(&self) -> TextStyle {
        self.heading(56.0, self.palette.white).centered()
    }

    /// Subtitle of a title slide: 28pt teal, centered.
    pub fn hero_subtitle(&self) -> TextStyle {
        self.text(28.0).color(self.palette.teal).centered()
    }

    /// Title of a section divider: 44pt bold white, centered.
    pub fn section_title(&self) -> TextStyle {
        self.heading(44.0, self.palette.white).centered()
    }

    /// Subtitle of a section divider: 20pt muted, centered.
    pub fn section_subtitle(&self) -> TextStyle {
        self.text(20.0).color(self.palette.muted).centered()
    }

    /// Big number on a stat card.
    pub fn stat_value(&self, color: RGBColor) -> TextStyle {
        self.heading(36.0, color).centered()
    }

    /// Caption below the number on a stat card.
    pub fn stat_label(&self) -> TextStyle {
        self.text(14.0).color(self.palette.grey_text).centered()
    }

    /// Secondary text in grey.
    pub fn caption(&self, size_pt: f64) -> TextStyle {
        self.text(size_pt).color(self.palette.grey_text)
    }

    /// Right-aligned bar label.
    pub fn bar_label(&self) -> TextStyle {
        self.heading(14.0, self.palette.dark_text)
            .align(Alignment::Right)
    }

    /// Bullet list of `size_pt` with `space_after_pt` between items.
    pub fn list(&self, size_pt: f64, space_after_pt: f64) -> ListStyle {
        ListStyle {
            text: self.text(size_pt),
            space_after_pt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.navy.to_hex(), "0B1D51");
        assert_eq!(palette.get("light_bg"), Some(RGBColor::from_u32(0xF0F4F8)));
        assert_eq!(palette.get("grey"), Some(palette.grey_text));
        assert_eq!(palette.get("magenta"), None);
    }

    #[test]
    fn test_resolve() {
        let theme = Theme::default();
        assert_eq!(
            theme.resolve(&ColorRef::named("teal")).unwrap(),
            theme.palette.teal
        );
        let literal = RGBColor::from_u32(0x123456);
        assert_eq!(theme.resolve(&ColorRef::from(literal)).unwrap(), literal);
        assert!(matches!(
            theme.resolve(&ColorRef::named("magenta")),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_presets_follow_theme_font() {
        let theme = Theme::new(Palette::default(), "Inter");
        let title = theme.slide_title();
        assert_eq!(title.font_name, "Inter");
        assert_eq!(title.size_pt, 36.0);
        assert!(title.bold);
        assert_eq!(title.color, theme.palette.navy);
        assert_eq!(theme.list(13.0, 6.0).text.font_name, "Inter");
    }
}
