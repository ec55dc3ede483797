//! Paragraph and text body model.
//!
//! A [`TextBody`] is an ordered list of paragraphs, each with exactly one run
//! style. Line feeds and vertical tabs inside a paragraph are soft line breaks:
//! they stay in the same paragraph and are written as `a:br`.

use crate::common::style::{TextStyle, VerticalAnchor};

/// One paragraph of a text body.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub style: TextStyle,
    /// Space after the paragraph in points; zero writes no spacing element.
    pub space_after_pt: f64,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            space_after_pt: 0.0,
        }
    }

    pub fn with_space_after(mut self, space_after_pt: f64) -> Self {
        self.space_after_pt = space_after_pt;
        self
    }

    /// The lines of the paragraph, split at soft line breaks.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split(['\n', '\u{B}'])
    }
}

/// Ordered paragraphs plus frame settings.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBody {
    paragraphs: Vec<Paragraph>,
    pub word_wrap: bool,
    pub anchor: VerticalAnchor,
}

impl Default for TextBody {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBody {
    /// An empty, word-wrapped, top-anchored body.
    pub fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
            word_wrap: true,
            anchor: VerticalAnchor::Top,
        }
    }

    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    #[inline]
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Paragraph texts joined by line feeds.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_breaks_stay_in_paragraph() {
        let paragraph = Paragraph::new("REST API\nEndpoints\u{B}(v2)", TextStyle::default());
        assert_eq!(
            paragraph.lines().collect::<Vec<_>>(),
            vec!["REST API", "Endpoints", "(v2)"]
        );
    }

    #[test]
    fn test_body_defaults() {
        let mut body = TextBody::new();
        assert!(body.word_wrap);
        assert_eq!(body.anchor, VerticalAnchor::Top);
        assert!(body.is_empty());

        body.push(Paragraph::new("a", TextStyle::default()));
        body.push(Paragraph::new("b", TextStyle::default()).with_space_after(6.0));
        assert_eq!(body.paragraph_count(), 2);
        assert_eq!(body.text(), "a\nb");
        assert_eq!(body.paragraphs()[1].space_after_pt, 6.0);
    }
}
