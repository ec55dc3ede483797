//! The deck: ordered slides on one canvas, plus document metadata.
//!
//! ```no_run
//! use pitaya::Deck;
//! use pitaya::common::style::Theme;
//! use pitaya::slide::widgets;
//!
//! # fn main() -> pitaya::Result<()> {
//! let theme = Theme::default();
//! let mut deck = Deck::new().with_title("Platform overview");
//! let slide = deck.add_slide();
//! widgets::section_header(slide, "Architecture", "How the pieces fit", &theme)?;
//! deck.save("overview.pptx")?;
//! # Ok(())
//! # }
//! ```
use crate::common::error::{Error, Result};
use crate::common::geometry::Canvas;
use crate::common::xml::{check_text, is_xml_char};
use crate::ooxml::opc::persist_atomic;
use crate::ooxml::pptx::package;
use crate::slide::Slide;
use std::path::Path;

/// An ordered collection of slides sharing one canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Deck {
    canvas: Canvas,
    title: Option<String>,
    author: Option<String>,
    validate_geometry: bool,
    slides: Vec<Slide>,
}

impl Deck {
    /// An empty widescreen deck that does not validate geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty deck on `canvas`.
    pub fn with_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Reject shapes lying wholly outside the canvas on slides created from now on.
    pub fn with_geometry_validation(mut self, validate: bool) -> Self {
        self.validate_geometry = validate;
        self
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[inline]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    #[inline]
    pub fn validates_geometry(&self) -> bool {
        self.validate_geometry
    }

    /// A detached slide with this deck's canvas and validation setting.
    ///
    /// Nothing is added to the deck until the slide is passed to
    /// [`Deck::push_slide`].
    pub fn new_slide(&self) -> Slide {
        Slide::with_validation(self.canvas, self.validate_geometry)
    }

    /// Append a slide built with [`Deck::new_slide`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGeometry`] when the slide was made for another canvas.
    pub fn push_slide(&mut self, slide: Slide) -> Result<()> {
        if slide.canvas() != &self.canvas {
            return Err(Error::InvalidGeometry(format!(
                "slide canvas {} x {} does not match the deck canvas {} x {}",
                slide.canvas().width(),
                slide.canvas().height(),
                self.canvas.width(),
                self.canvas.height()
            )));
        }
        self.slides.push(slide);
        Ok(())
    }

    /// Append an empty slide and return it for drawing.
    pub fn add_slide(&mut self) -> &mut Slide {
        let slide = self.new_slide();
        self.slides.push(slide);
        let index = self.slides.len() - 1;
        &mut self.slides[index]
    }

    /// Slides in display order.
    #[inline]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Check that every text run, font name, font size and metadata field can
    /// be written.
    ///
    /// # Errors
    ///
    /// [`Error::Encoding`] or, for an unwritable font size,
    /// [`Error::InvalidUnit`], naming the slide and shape (both one-based) of
    /// the first offending text.
    pub fn check_encoding(&self) -> Result<()> {
        for (field, value) in [("title", &self.title), ("author", &self.author)] {
            if let Some(value) = value {
                check_strict(value).map_err(|err| locate(format!("document {}", field), err))?;
            }
        }

        for (slide_index, slide) in self.slides.iter().enumerate() {
            for (shape_index, shape) in slide.shapes().iter().enumerate() {
                let Some(text_box) = shape.as_text_box() else {
                    continue;
                };
                let context = || format!("slide {} shape {}", slide_index + 1, shape_index + 1);
                for paragraph in text_box.paragraphs() {
                    paragraph.style.check_size().map_err(|err| locate(context(), err))?;
                    check_text(&paragraph.text).map_err(|err| locate(context(), err))?;
                    check_strict(&paragraph.style.font_name)
                        .map_err(|err| locate(context(), err))?;
                }
            }
        }
        Ok(())
    }

    /// Render the deck to the bytes of a `.pptx` file.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.check_encoding()?;
        package::render(self)
    }

    /// Write the deck to `path`.
    ///
    /// The package is built in memory, written to a temp file next to `path`
    /// and renamed over it, so `path` never holds a partial document.
    ///
    /// # Errors
    ///
    /// The errors of [`Deck::check_encoding`] for text that cannot be written
    /// (nothing touches the filesystem), [`Error::Io`] when the destination is
    /// not writable.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        persist_atomic(path, &bytes)?;
        tracing::info!(
            path = %path.display(),
            slides = self.slide_count(),
            bytes = bytes.len(),
            "saved presentation"
        );
        Ok(())
    }
}

/// Like [`check_text`], but vertical tabs are rejected too: attribute values
/// and metadata have no line breaks to map them to.
fn check_strict(text: &str) -> Result<()> {
    match text.char_indices().find(|(_, c)| !is_xml_char(*c)) {
        Some((offset, c)) => Err(Error::Encoding(format!(
            "character U+{:04X} at byte {} cannot be represented in XML 1.0",
            c as u32, offset
        ))),
        None => Ok(()),
    }
}

fn locate(context: String, err: Error) -> Error {
    match err {
        Error::Encoding(msg) => Error::Encoding(format!("{}: {}", context, msg)),
        Error::InvalidUnit(msg) => Error::InvalidUnit(format!("{}: {}", context, msg)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::geometry::Rect;
    use crate::common::style::{RGBColor, TextStyle};
    use crate::ooxml::DeckSummary;
    use crate::slide::ShapeKind;

    #[test]
    fn test_new_slide_is_detached() {
        let mut deck = Deck::new().with_geometry_validation(true);
        let slide = deck.new_slide();
        assert!(slide.validates_geometry());
        assert_eq!(deck.slide_count(), 0);

        deck.push_slide(slide).unwrap();
        assert_eq!(deck.slide_count(), 1);
    }

    #[test]
    fn test_push_slide_checks_canvas() {
        let mut deck = Deck::new();
        let result = deck.push_slide(Slide::new(Canvas::STANDARD));
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
        assert_eq!(deck.slide_count(), 0);
    }

    #[test]
    fn test_encoding_error_names_slide_and_shape() {
        let mut deck = Deck::new();
        deck.add_slide();
        let slide = deck.add_slide();
        slide.add_background_rect(RGBColor::WHITE).unwrap();
        slide
            .add_text_box(Rect::mils(0, 0, 1_000, 1_000), "bell\u{7}", &TextStyle::default())
            .unwrap();

        match deck.check_encoding() {
            Err(Error::Encoding(msg)) => {
                assert!(msg.starts_with("slide 2 shape 2: character U+0007"), "{}", msg);
            },
            other => panic!("expected an encoding error, got {:?}", other),
        }
    }

    #[test]
    fn test_vertical_tab_only_allowed_in_runs() {
        let mut deck = Deck::new();
        deck.add_slide()
            .add_text_box(Rect::mils(0, 0, 1_000, 1_000), "a\u{B}b", &TextStyle::default())
            .unwrap();
        assert!(deck.check_encoding().is_ok());

        let deck = deck.with_title("a\u{B}b");
        assert!(matches!(deck.check_encoding(), Err(Error::Encoding(_))));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        let mut deck = Deck::new().with_title("Round trip").with_author("Platform team");
        let slide = deck.add_slide();
        slide.add_background_rect(RGBColor::WHITE).unwrap();
        slide
            .add_bullet_list(
                Rect::mils(1_000, 1_000, 5_000, 3_000),
                &["first", "second"],
                &Default::default(),
            )
            .unwrap();
        deck.add_slide();
        deck.save(&path).unwrap();

        let summary = DeckSummary::open(&path).unwrap();
        assert_eq!(summary.width, deck.canvas().width());
        assert_eq!(summary.slide_count(), 2);

        let first = &summary.slides[0];
        assert_eq!(first.shapes[0].kind, ShapeKind::Rectangle);
        assert_eq!(first.shapes[0].rect, deck.canvas().bounds());
        let texts: Vec<_> = first.shapes[1].paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
        assert!(summary.slides[1].shapes.is_empty());
    }

    #[test]
    fn test_failed_save_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        let mut deck = Deck::new();
        deck.add_slide()
            .add_text_box(Rect::mils(0, 0, 1_000, 1_000), "nul\u{0}", &TextStyle::default())
            .unwrap();

        assert!(matches!(deck.save(&path), Err(Error::Encoding(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_unwritable_font_size() {
        for size in [0.0, f64::NAN] {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("deck.pptx");

            let mut deck = Deck::new();
            deck.add_slide();
            deck.add_slide()
                .add_text_box(
                    Rect::mils(0, 0, 1_000, 1_000),
                    "Overview",
                    &TextStyle::default().size(size),
                )
                .unwrap();

            match deck.to_bytes() {
                Err(Error::InvalidUnit(msg)) => {
                    assert!(msg.starts_with("slide 2 shape 1: font size"), "{}", msg);
                },
                Err(other) => panic!("expected an invalid font size, got {:?}", other),
                Ok(_) => panic!("deck with a {}pt font was written", size),
            }
            assert!(deck.save(&path).is_err());
            assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        }
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("deck.pptx");

        let mut deck = Deck::new();
        deck.add_slide();
        assert!(matches!(deck.save(&path), Err(Error::Io(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
