//! Shapes stored on a slide.

use super::text::{Paragraph, TextBody};
use crate::common::geometry::Rect;
use crate::common::style::{ShapeStyle, VerticalAnchor};
use std::fmt;

/// Geometry and style of a rectangle, rounded rectangle or oval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure {
    pub rect: Rect,
    pub style: ShapeStyle,
}

impl Figure {
    #[inline]
    pub const fn new(rect: Rect, style: ShapeStyle) -> Self {
        Self { rect, style }
    }
}

/// A positioned text frame without fill or outline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub rect: Rect,
    pub body: TextBody,
}

impl TextBox {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            body: TextBody::new(),
        }
    }

    /// Append a paragraph after the existing ones.
    pub fn push_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.body.push(paragraph);
        self
    }

    /// Set the vertical placement of the text.
    pub fn set_anchor(&mut self, anchor: VerticalAnchor) -> &mut Self {
        self.body.anchor = anchor;
        self
    }

    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        self.body.paragraphs()
    }
}

/// Discriminant of [`Shape`], also reported by the package reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle,
    Oval,
    TextBox,
}

impl ShapeKind {
    /// Base of the shape name written to `p:cNvPr/@name`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::Oval => "Oval",
            Self::TextBox => "TextBox",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A drawable element of a slide, in z-order position within its slide.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Figure),
    RoundedRectangle(Figure),
    Oval(Figure),
    TextBox(TextBox),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::RoundedRectangle(_) => ShapeKind::RoundedRectangle,
            Shape::Oval(_) => ShapeKind::Oval,
            Shape::TextBox(_) => ShapeKind::TextBox,
        }
    }

    pub fn rect(&self) -> &Rect {
        match self {
            Shape::Rectangle(figure) | Shape::RoundedRectangle(figure) | Shape::Oval(figure) => {
                &figure.rect
            },
            Shape::TextBox(text_box) => &text_box.rect,
        }
    }

    /// The figure, unless this is a text box.
    pub fn as_figure(&self) -> Option<&Figure> {
        match self {
            Shape::Rectangle(figure) | Shape::RoundedRectangle(figure) | Shape::Oval(figure) => {
                Some(figure)
            },
            Shape::TextBox(_) => None,
        }
    }

    pub fn as_text_box(&self) -> Option<&TextBox> {
        match self {
            Shape::TextBox(text_box) => Some(text_box),
            _ => None,
        }
    }

    pub fn as_text_box_mut(&mut self) -> Option<&mut TextBox> {
        match self {
            Shape::TextBox(text_box) => Some(text_box),
            _ => None,
        }
    }
}
