//! Single-shape drawing operations on a [`Slide`].
//!
//! Every primitive appends exactly one shape and returns `Result`: with
//! geometry validation enabled on the slide, a rectangle lying wholly outside
//! the canvas fails with [`Error::InvalidGeometry`](crate::common::Error).
//! Nothing is clipped and nothing is deduplicated; calling a primitive twice
//! stacks two identical shapes.

use super::Slide;
use super::shape::{Figure, Shape, TextBox};
use super::text::Paragraph;
use crate::common::error::{Error, Result};
use crate::common::geometry::Rect;
use crate::common::style::{ListStyle, RGBColor, ShapeStyle, TextStyle};
use crate::common::unit::Length;

/// Default vertical offset of an accent bar.
pub const ACCENT_BAR_Y: Length = Length::ZERO;
/// Default thickness of an accent bar (0.06in).
pub const ACCENT_BAR_HEIGHT: Length = Length::mils(60);

impl Slide {
    /// Fill the whole canvas with `color`.
    ///
    /// Call this first: shapes added before it end up hidden behind it.
    pub fn add_background_rect(&mut self, color: RGBColor) -> Result<()> {
        let bounds = self.canvas().bounds();
        self.add_rectangle(bounds, ShapeStyle::filled(color))
    }

    /// A full-width borderless bar at `y`.
    pub fn add_accent_bar(&mut self, y: Length, height: Length, color: RGBColor) -> Result<()> {
        let rect = Rect::new(Length::ZERO, y, self.canvas().width(), height);
        self.add_rectangle(rect, ShapeStyle::filled(color))
    }

    /// An accent bar of the default thickness along the top edge.
    pub fn add_top_accent_bar(&mut self, color: RGBColor) -> Result<()> {
        self.add_accent_bar(ACCENT_BAR_Y, ACCENT_BAR_HEIGHT, color)
    }

    pub fn add_rectangle(&mut self, rect: Rect, style: ShapeStyle) -> Result<()> {
        self.push(Shape::Rectangle(Figure::new(rect, style)))?;
        Ok(())
    }

    pub fn add_rounded_rectangle(&mut self, rect: Rect, style: ShapeStyle) -> Result<()> {
        self.push(Shape::RoundedRectangle(Figure::new(rect, style)))?;
        Ok(())
    }

    pub fn add_oval(&mut self, rect: Rect, style: ShapeStyle) -> Result<()> {
        self.push(Shape::Oval(Figure::new(rect, style)))?;
        Ok(())
    }

    /// A word-wrapped text box holding one paragraph.
    ///
    /// The returned box can take more paragraphs or a different anchor.
    pub fn add_text_box(
        &mut self,
        rect: Rect,
        text: &str,
        style: &TextStyle,
    ) -> Result<&mut TextBox> {
        let mut text_box = TextBox::new(rect);
        text_box.push_paragraph(Paragraph::new(text, style.clone()));
        self.push_text_box(text_box)
    }

    /// A word-wrapped text box with one paragraph per item, in input order.
    ///
    /// An empty `items` slice gives a box with zero paragraphs.
    pub fn add_bullet_list<S: AsRef<str>>(
        &mut self,
        rect: Rect,
        items: &[S],
        style: &ListStyle,
    ) -> Result<&mut TextBox> {
        let mut text_box = TextBox::new(rect);
        for item in items {
            text_box.push_paragraph(
                Paragraph::new(item.as_ref(), style.text.clone())
                    .with_space_after(style.space_after_pt),
            );
        }
        self.push_text_box(text_box)
    }

    fn push_text_box(&mut self, text_box: TextBox) -> Result<&mut TextBox> {
        self.push(Shape::TextBox(text_box))?
            .as_text_box_mut()
            .ok_or_else(|| Error::InvalidFormat("slide did not keep the pushed text box".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::geometry::Canvas;
    use crate::common::style::{Alignment, VerticalAnchor};
    use crate::slide::ShapeKind;

    const NAVY: RGBColor = RGBColor::from_u32(0x0B1D51);

    #[test]
    fn test_background_covers_canvas() {
        let mut slide = Slide::new(Canvas::WIDESCREEN);
        slide.add_background_rect(NAVY).unwrap();

        let figure = slide.shapes()[0].as_figure().unwrap();
        assert_eq!(figure.rect, Canvas::WIDESCREEN.bounds());
        assert_eq!(figure.style.fill, Some(NAVY));
        assert_eq!(figure.style.line, None);
        assert!(!figure.style.shadow);
    }

    #[test]
    fn test_background_is_not_deduplicated() {
        let mut slide = Slide::new(Canvas::WIDESCREEN);
        slide.add_background_rect(NAVY).unwrap();
        slide.add_background_rect(NAVY).unwrap();
        assert_eq!(slide.shape_count(), 2);
        assert_eq!(slide.shapes()[0], slide.shapes()[1]);
    }

    #[test]
    fn test_accent_bar_defaults() {
        let mut slide = Slide::new(Canvas::STANDARD);
        slide.add_top_accent_bar(NAVY).unwrap();
        let rect = slide.shapes()[0].rect();
        assert_eq!(rect.y, Length::ZERO);
        assert_eq!(rect.width, Canvas::STANDARD.width());
        assert_eq!(rect.height, Length::from_emus(54_864));
    }

    #[test]
    fn test_text_box_defaults() {
        let mut slide = Slide::new(Canvas::WIDESCREEN);
        let text_box = slide
            .add_text_box(Rect::mils(1_000, 1_000, 5_000, 500), "Hello", &TextStyle::default())
            .unwrap();
        assert!(text_box.body.word_wrap);
        assert_eq!(text_box.paragraphs().len(), 1);
        let paragraph = &text_box.paragraphs()[0];
        assert_eq!(paragraph.text, "Hello");
        assert_eq!(paragraph.style.size_pt, 18.0);
        assert!(!paragraph.style.bold);
        assert_eq!(paragraph.style.alignment, Alignment::Left);
    }

    #[test]
    fn test_text_box_is_mutable_after_insert() {
        let mut slide = Slide::new(Canvas::WIDESCREEN);
        slide
            .add_text_box(Rect::mils(0, 0, 2_500, 1_800), "28+", &TextStyle::default())
            .unwrap()
            .set_anchor(VerticalAnchor::Middle)
            .push_paragraph(Paragraph::new("Pages", TextStyle::default().size(14.0)));

        let text_box = slide.shapes()[0].as_text_box().unwrap();
        assert_eq!(text_box.body.anchor, VerticalAnchor::Middle);
        assert_eq!(text_box.paragraphs()[1].text, "Pages");
    }

    #[test]
    fn test_bullet_list_paragraphs() {
        let mut slide = Slide::new(Canvas::WIDESCREEN);
        let rect = Rect::mils(1_200, 1_600, 10_000, 5_500);

        let empty: [&str; 0] = [];
        let list = slide.add_bullet_list(rect, &empty, &ListStyle::default()).unwrap();
        assert_eq!(list.paragraphs().len(), 0);

        let list = slide
            .add_bullet_list(rect, &["a", "b", "c"], &ListStyle::default())
            .unwrap();
        let texts: Vec<_> = list.paragraphs().iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
        assert!(list.paragraphs().iter().all(|p| p.space_after_pt == 6.0));
        assert!(list.paragraphs().iter().all(|p| p.style.size_pt == 16.0));
        assert_eq!(slide.count_of(ShapeKind::TextBox), 2);
    }

    #[test]
    fn test_validated_slide_rejects_shape_past_right_edge() {
        let mut slide = Slide::with_validation(Canvas::WIDESCREEN, true);
        let one = Length::mils(1_000);
        let width = slide.canvas().width();
        let result = slide.add_rectangle(
            Rect::new(width, Length::ZERO, one, one),
            ShapeStyle::filled(NAVY),
        );
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));

        // Straddling the edge is allowed
        slide
            .add_rectangle(
                Rect::new(width.saturating_sub(one), Length::ZERO, one * 2, one),
                ShapeStyle::filled(NAVY),
            )
            .unwrap();
        assert_eq!(slide.shape_count(), 1);
    }

    #[test]
    fn test_validated_slide_rejects_off_canvas_text() {
        let mut slide = Slide::with_validation(Canvas::WIDESCREEN, true);
        let result = slide.add_text_box(
            Rect::mils(0, 8_000, 1_000, 1_000),
            "below the fold",
            &TextStyle::default(),
        );
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
        assert_eq!(slide.shape_count(), 0);
    }
}
