//! Composite widgets: fixed combinations of primitives.
//!
//! Widgets take every color and font from the [`Theme`] they are given and
//! report the first failing primitive. A widget that fails part-way leaves the
//! shapes it already drew on the slide; the assembler discards such slides.

use super::Slide;
use super::text::Paragraph;
use crate::common::error::{Error, Result};
use crate::common::geometry::{Point, Rect};
use crate::common::style::{RGBColor, ShapeStyle, Theme, VerticalAnchor};
use crate::common::unit::Length;

/// Narrowest bar drawn by [`bar_row`], so that tiny values stay visible.
pub const MIN_BAR_WIDTH: Length = Length::mils(300);

/// Gap between the end of a bar and its value label.
const BAR_VALUE_GAP: Length = Length::mils(150);
/// Width of the value label to the right of a bar.
const BAR_VALUE_WIDTH: Length = Length::mils(700);

/// A rounded card with a white fill and an outline in `color`, overlaid with
/// `number` (36pt bold, `color`) above `label` (14pt grey), both centered.
///
/// `number` is free text: `"28+"` works as well as `"89"`.
pub fn stat_card(
    slide: &mut Slide,
    rect: Rect,
    number: &str,
    label: &str,
    color: RGBColor,
    theme: &Theme,
) -> Result<()> {
    slide.add_rounded_rectangle(
        rect,
        ShapeStyle::filled(theme.palette.white).with_line(color, Length::points(2)),
    )?;
    slide
        .add_text_box(rect, number, &theme.stat_value(color))?
        .set_anchor(VerticalAnchor::Middle)
        .push_paragraph(Paragraph::new(label, theme.stat_label()));
    Ok(())
}

/// A section divider: navy background, thin teal bar at 3.5in, centered title
/// and, when `subtitle` is not empty, a muted subtitle below the bar.
pub fn section_header(slide: &mut Slide, title: &str, subtitle: &str, theme: &Theme) -> Result<()> {
    slide.add_background_rect(theme.palette.navy)?;
    slide.add_accent_bar(Length::mils(3_500), Length::mils(40), theme.palette.teal)?;
    slide.add_text_box(
        Rect::mils(1_000, 2_200, 11_000, 1_200),
        title,
        &theme.section_title(),
    )?;
    if !subtitle.is_empty() {
        slide.add_text_box(
            Rect::mils(1_000, 3_700, 11_000, 800),
            subtitle,
            &theme.section_subtitle(),
        )?;
    }
    Ok(())
}

/// Width of a bar scaled against `max_value`.
///
/// `value / max_value * max_bar_length`, but never narrower than
/// [`MIN_BAR_WIDTH`]. Values above `max_value` give bars longer than
/// `max_bar_length`.
///
/// # Errors
///
/// [`Error::InvalidScale`] when `max_value` is not a positive finite number,
/// `value` is not finite, or the bar would be longer than
/// [`Length::MAX_COORDINATE`].
///
/// # Examples
///
/// ```
/// use pitaya::common::unit::Length;
/// use pitaya::slide::widgets::{MIN_BAR_WIDTH, bar_width};
///
/// let six_inches = Length::mils(6_000);
/// assert_eq!(bar_width(18.0, 18.0, six_inches).unwrap(), six_inches);
/// assert_eq!(bar_width(0.0, 18.0, six_inches).unwrap(), MIN_BAR_WIDTH);
/// assert!(bar_width(1.0, 0.0, six_inches).is_err());
/// ```
pub fn bar_width(value: f64, max_value: f64, max_bar_length: Length) -> Result<Length> {
    if !max_value.is_finite() || max_value <= 0.0 {
        return Err(Error::InvalidScale(format!(
            "max value must be a positive number, got {}",
            max_value
        )));
    }
    if !value.is_finite() {
        return Err(Error::InvalidScale(format!(
            "bar value must be a finite number, got {}",
            value
        )));
    }

    let emus = (value / max_value * max_bar_length.emus() as f64).round();
    if emus <= MIN_BAR_WIDTH.emus() as f64 {
        return Ok(MIN_BAR_WIDTH);
    }
    if emus > Length::MAX_COORDINATE.emus() as f64 {
        return Err(Error::InvalidScale(format!(
            "bar for {} against a maximum of {} is too long to draw",
            value, max_value
        )));
    }
    Ok(Length::from_emus(emus as u64))
}

/// One row of a horizontal bar chart.
#[derive(Debug, Clone, Copy)]
pub struct BarRow<'a> {
    pub label: &'a str,
    /// Box of the right-aligned label; its height is also the bar height.
    pub label_rect: Rect,
    /// Top-left corner of the bar.
    pub bar_origin: Point,
    pub value: f64,
    pub max_value: f64,
    pub max_bar_length: Length,
    pub color: RGBColor,
}

/// Draw the bar, its label and its value; returns the bar width.
///
/// Shapes are added in that order: the rounded bar, the label text box, the
/// value text box 0.15in right of the bar end.
pub fn bar_row(slide: &mut Slide, row: &BarRow<'_>, theme: &Theme) -> Result<Length> {
    let width = bar_width(row.value, row.max_value, row.max_bar_length)?;
    let height = row.label_rect.height;

    slide.add_rounded_rectangle(
        Rect::new(row.bar_origin.x, row.bar_origin.y, width, height),
        ShapeStyle::filled(row.color),
    )?;
    slide.add_text_box(row.label_rect, row.label, &theme.bar_label())?;
    slide.add_text_box(
        Rect::new(
            row.bar_origin.x + width + BAR_VALUE_GAP,
            row.bar_origin.y,
            BAR_VALUE_WIDTH,
            height,
        ),
        &row.value.to_string(),
        &theme.heading(16.0, row.color),
    )?;
    Ok(width)
}

/// Look of a [`titled_card`]: fill, outline and the placement of its text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub fill: RGBColor,
    pub line_width: Length,
    /// Horizontal inset of the text, and bottom inset of the body.
    pub padding: Length,
    /// Distance from the card top to the heading.
    pub title_top: Length,
    pub title_height: Length,
    /// Distance from the card top to the body.
    pub body_top: Length,
    pub title_size: f64,
    pub body_size: f64,
    pub body_color: RGBColor,
    /// Space after each item when the body is a list.
    pub list_spacing_pt: f64,
}

impl CardStyle {
    /// White card with grey description, used in module grids.
    pub fn plain(theme: &Theme) -> Self {
        Self {
            fill: theme.palette.white,
            line_width: Length::points(2),
            padding: Length::mils(250),
            title_top: Length::mils(250),
            title_height: Length::mils(500),
            body_top: Length::mils(850),
            title_size: 20.0,
            body_size: 13.0,
            body_color: theme.palette.grey_text,
            list_spacing_pt: 6.0,
        }
    }

    /// Light grey panel with dark body text, used for roles and feature panels.
    pub fn shaded(theme: &Theme) -> Self {
        Self {
            fill: theme.palette.light_bg,
            line_width: Length::points(2),
            padding: Length::mils(300),
            title_top: Length::mils(200),
            title_height: Length::mils(700),
            body_top: Length::mils(900),
            title_size: 18.0,
            body_size: 13.0,
            body_color: theme.palette.dark_text,
            list_spacing_pt: 6.0,
        }
    }
}

/// Body of a [`titled_card`].
#[derive(Debug, Clone, Copy)]
pub enum CardBody<'a> {
    /// A free-text description, one paragraph.
    Text(&'a str),
    /// One paragraph per item.
    Items(&'a [String]),
}

impl<'a> From<&'a str> for CardBody<'a> {
    fn from(text: &'a str) -> Self {
        CardBody::Text(text)
    }
}

impl<'a> From<&'a [String]> for CardBody<'a> {
    fn from(items: &'a [String]) -> Self {
        CardBody::Items(items)
    }
}

/// An outlined rounded card with a bold heading in `color` and a body below.
pub fn titled_card(
    slide: &mut Slide,
    rect: Rect,
    title: &str,
    body: CardBody<'_>,
    color: RGBColor,
    style: &CardStyle,
    theme: &Theme,
) -> Result<()> {
    slide.add_rounded_rectangle(
        rect,
        ShapeStyle::filled(style.fill).with_line(color, style.line_width),
    )?;

    let inner_width = rect.width.saturating_sub(style.padding * 2);
    let x = rect.x + style.padding;
    slide.add_text_box(
        Rect::new(x, rect.y + style.title_top, inner_width, style.title_height),
        title,
        &theme.heading(style.title_size, color),
    )?;

    let body_rect = Rect::new(
        x,
        rect.y + style.body_top,
        inner_width,
        rect.height
            .saturating_sub(style.body_top)
            .saturating_sub(style.title_top),
    );
    let body_style = theme.text(style.body_size).color(style.body_color);
    match body {
        CardBody::Text(text) => {
            slide.add_text_box(body_rect, text, &body_style)?;
        },
        CardBody::Items(items) => {
            let list = theme
                .list(style.body_size, style.list_spacing_pt)
                .color(style.body_color);
            slide.add_bullet_list(body_rect, items, &list)?;
        },
    }
    Ok(())
}

/// A shaded rounded box with a thick outline in `color`, overlaid with a
/// centered, middle-anchored title (22pt bold) and description (14pt grey).
pub fn boxed_card(
    slide: &mut Slide,
    rect: Rect,
    title: &str,
    description: &str,
    color: RGBColor,
    theme: &Theme,
) -> Result<()> {
    slide.add_rounded_rectangle(
        rect,
        ShapeStyle::filled(theme.palette.light_bg).with_line(color, Length::centipoints(250)),
    )?;
    slide
        .add_text_box(rect, title, &theme.heading(22.0, color).centered())?
        .set_anchor(VerticalAnchor::Middle)
        .push_paragraph(Paragraph::new(
            description,
            theme.caption(14.0).centered(),
        ));
    Ok(())
}

/// A filled circle in `color` with `index` in bold white on top.
pub fn step_marker(
    slide: &mut Slide,
    rect: Rect,
    index: &str,
    color: RGBColor,
    theme: &Theme,
) -> Result<()> {
    slide.add_oval(rect, ShapeStyle::filled(color))?;
    slide
        .add_text_box(rect, index, &theme.heading(24.0, theme.palette.white).centered())?
        .set_anchor(VerticalAnchor::Middle);
    Ok(())
}
