//! Deck plans: the whole declarative input of a deck.
//!
//! ```yaml
//! title: NGO-Connect Design & Architecture
//! author: Platform team
//! canvas: { width: 13.333in, height: 7.5in }
//! theme:
//!   font: Calibri
//!   palette: { teal: "#00897B" }
//! slides:
//!   - layout: title
//!     title: NGO-Connect
//!     subtitle: Design & Architecture Overview
//! ```
//!
//! Every key but `slides` is optional: the default canvas is widescreen and the
//! default theme uses the stock palette in Calibri.
use super::assembler::Assembler;
use super::content::SlideContent;
use crate::common::error::Result;
use crate::common::geometry::Canvas;
use crate::common::style::Theme;
use crate::deck::Deck;
use serde::Deserialize;

#[cfg(feature = "yaml")]
use crate::common::error::Error;
#[cfg(feature = "yaml")]
use std::path::Path;

/// Document metadata, canvas, theme and slide records of one deck.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeckPlan {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub canvas: Canvas,
    #[serde(default)]
    pub theme: Theme,
    /// Reject shapes lying wholly outside the canvas.
    #[serde(default)]
    pub validate_geometry: bool,
    pub slides: Vec<SlideContent>,
}

impl DeckPlan {
    /// Parse a plan from YAML text.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] for malformed YAML, unknown layouts or keys, and
    /// invalid lengths or colors.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse deck plan: {}", e)))
    }

    /// Read and parse a YAML plan file.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the file cannot be read, otherwise as
    /// [`DeckPlan::from_yaml_str`].
    #[cfg(feature = "yaml")]
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let plan = Self::from_yaml_str(&yaml)?;
        tracing::debug!(
            path = %path.display(),
            slides = plan.slides.len(),
            "loaded deck plan"
        );
        Ok(plan)
    }

    /// Assemble the deck described by this plan.
    ///
    /// # Errors
    ///
    /// The first failing record, wrapped in
    /// [`Error::Slide`](crate::common::error::Error::Slide).
    pub fn build(&self) -> Result<Deck> {
        let mut deck = Deck::with_canvas(self.canvas)
            .with_geometry_validation(self.validate_geometry);
        if let Some(title) = &self.title {
            deck = deck.with_title(title.as_str());
        }
        if let Some(author) = &self.author {
            deck = deck.with_author(author.as_str());
        }

        Assembler::new(self.theme.clone()).assemble(&mut deck, &self.slides)?;
        Ok(deck)
    }
}

#[cfg(all(test, feature = "yaml"))]
mod tests {
    use super::*;
    use crate::common::style::RGBColor;
    use crate::common::unit::Length;
    use crate::ooxml::DeckSummary;
    use crate::slide::ShapeKind;

    const PLAN: &str = r##"
title: NGO-Connect Design & Architecture
author: Platform team
theme:
  palette:
    teal: "#00897B"
slides:
  - layout: title
    title: NGO-Connect
    subtitle: Design & Architecture Overview
    tagline: Connecting NGOs, volunteers and donors
  - layout: section
    title: System Architecture
    subtitle: Three-tier design
  - layout: summary
    title: Executive Summary
    body: A platform that connects NGOs with volunteers and donors.
    stats:
      - { value: "89", label: Database tables, color: teal }
      - { value: "28+", label: Feature modules, color: orange }
    checklist:
      - Role-based access control
"##;

    #[test]
    fn test_defaults() {
        let plan = DeckPlan::from_yaml_str("slides: []").unwrap();
        assert_eq!(plan.canvas, Canvas::WIDESCREEN);
        assert_eq!(plan.theme, Theme::default());
        assert!(!plan.validate_geometry);
        assert!(plan.title.is_none());
    }

    #[test]
    fn test_build_and_read_back() {
        let plan = DeckPlan::from_yaml_str(PLAN).unwrap();
        assert_eq!(plan.theme.palette.teal, RGBColor::from_u32(0x00897B));

        let deck = plan.build().unwrap();
        assert_eq!(deck.title(), Some("NGO-Connect Design & Architecture"));
        assert_eq!(deck.slide_count(), 3);

        let summary = DeckSummary::from_bytes(deck.to_bytes().unwrap()).unwrap();
        assert_eq!(summary.slide_count(), 3);
        assert_eq!(summary.width, Length::mils(13_333));

        // Only the stat cards are rounded.
        let stats = &summary.slides[2];
        assert_eq!(stats.count_of(ShapeKind::RoundedRectangle), 2);
        let values: Vec<_> = stats
            .text_boxes()
            .filter_map(|shape| shape.paragraphs.first())
            .filter(|p| p.size_pt == Some(36.0) && p.bold)
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(values, ["Executive Summary", "89", "28+"]);
    }

    #[test]
    fn test_custom_canvas() {
        let yaml = r#"
canvas: { width: 10in, height: 7.5in }
validate_geometry: true
slides:
  - { layout: section, title: Overview }
"#;
        let deck = DeckPlan::from_yaml_str(yaml).unwrap().build().unwrap();
        assert_eq!(deck.canvas(), &Canvas::STANDARD);
        assert!(deck.validates_geometry());
        assert_eq!(deck.slides()[0].shape_count(), 3);
    }

    #[test]
    fn test_config_errors() {
        for yaml in [
            "slides: [{ layout: carousel, title: Nope }]",
            "slides: []\nfooter: unknown key",
            "canvas: { width: 0.5in, height: 7.5in }\nslides: []",
            "theme: { palette: { teal: \"#12\" } }\nslides: []",
        ] {
            assert!(
                matches!(DeckPlan::from_yaml_str(yaml), Err(Error::Config(_))),
                "{}",
                yaml
            );
        }
    }

    #[test]
    fn test_sample_deck() {
        let plan = DeckPlan::from_yaml_str(include_str!("../../demos/ngo_connect.yaml")).unwrap();
        assert_eq!(plan.slides.len(), 22);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ngo_connect.pptx");
        let deck = plan.build().unwrap();
        deck.save(&path).unwrap();

        let summary = DeckSummary::open(&path).unwrap();
        assert_eq!(summary.slide_count(), 22);

        let titles: Vec<_> = summary
            .slides
            .iter()
            .map(|slide| slide.text_boxes().next().unwrap().paragraphs[0].text.as_str())
            .collect();
        assert_eq!(titles[0], "NGO-Connect");
        assert_eq!(titles[12], "API Endpoint Distribution");
        assert_eq!(titles[21], "Thank You");

        // Thirteen bars across the two series.
        let chart = &summary.slides[12];
        assert_eq!(chart.count_of(ShapeKind::RoundedRectangle), 13);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = DeckPlan::from_yaml_file(dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_failing_record_is_located() {
        let yaml = r#"
slides:
  - { layout: section, title: One }
  - layout: tiers
    title: Tiers
    tiers:
      - { title: Data, description: PostgreSQL, color: chartreuse }
"#;
        let err = DeckPlan::from_yaml_str(yaml).unwrap().build().unwrap_err();
        assert!(matches!(err, Error::Slide { index: 1, layout: "tiers", .. }));
        assert_eq!(
            err.to_string(),
            "Slide 1 (tiers): Config error: Unknown palette color 'chartreuse'"
        );
    }
}
