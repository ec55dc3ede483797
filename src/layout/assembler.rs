//! Slide assembly: one drawing routine per [`SlideContent`] layout.
//!
//! Every record is drawn onto a detached slide. The slide joins the deck only
//! once it is complete, so a failing record leaves no partial slide behind and
//! the deck keeps exactly the slides of the records before it.
//!
//! Geometry is in thousandths of an inch on the 13.333in x 7.5in widescreen
//! canvas.
use super::content::{
    AgendaSlide, BarChartSlide, GroupedListsSlide, ModulesSlide, PageGroupsSlide,
    ReferenceSlide, RolesSlide, SectionSlide, SlideContent, SummarySlide, TiersSlide,
    TitleSlide, TwoColumnSlide, WorkflowSlide,
};
use crate::common::error::Result;
use crate::common::geometry::{Point, Rect};
use crate::common::style::{ShapeStyle, Theme};
use crate::common::unit::Length;
use crate::deck::Deck;
use crate::slide::Slide;
use crate::slide::widgets::{self, BarRow, CardBody, CardStyle};

/// Bar length at a series' maximum when the record gives none.
pub const DEFAULT_BAR_LENGTH: Length = Length::mils(6_000);

/// Usable width shared by card rows, left edge to right edge of the last pitch.
const CARD_ROW_WIDTH: u64 = 12_600;

/// Draws content records with one theme.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    theme: Theme,
}

impl Assembler {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Append one slide per record to `deck`, in record order.
    ///
    /// # Errors
    ///
    /// The first failing record stops assembly with [`Error::Slide`] carrying
    /// its index and layout; slides of earlier records stay in the deck.
    ///
    /// [`Error::Slide`]: crate::common::error::Error::Slide
    pub fn assemble(&self, deck: &mut Deck, records: &[SlideContent]) -> Result<()> {
        for (index, record) in records.iter().enumerate() {
            let layout = record.layout_name();
            let mut slide = deck.new_slide();

            if let Err(err) = self.draw(&mut slide, record) {
                tracing::warn!(index, layout, error = %err, "failed to assemble slide");
                return Err(err.in_slide(index, layout));
            }

            tracing::debug!(index, layout, shapes = slide.shape_count(), "assembled slide");
            deck.push_slide(slide)
                .map_err(|err| err.in_slide(index, layout))?;
        }
        Ok(())
    }

    /// Draw one record onto `slide`.
    pub fn draw(&self, slide: &mut Slide, record: &SlideContent) -> Result<()> {
        match record {
            SlideContent::Title(content) => self.title(slide, content),
            SlideContent::Agenda(content) => self.agenda(slide, content),
            SlideContent::Summary(content) => self.summary(slide, content),
            SlideContent::Section(content) => self.section(slide, content),
            SlideContent::Tiers(content) => self.tiers(slide, content),
            SlideContent::TwoColumn(content) => self.two_column(slide, content),
            SlideContent::Roles(content) => self.roles(slide, content),
            SlideContent::Modules(content) => self.modules(slide, content),
            SlideContent::GroupedLists(content) => self.grouped_lists(slide, content),
            SlideContent::BarChart(content) => self.bar_chart(slide, content),
            SlideContent::Workflow(content) => self.workflow(slide, content),
            SlideContent::PageGroups(content) => self.page_groups(slide, content),
            SlideContent::Reference(content) => self.reference(slide, content),
        }
    }

    /// White background, navy top bar and the slide title.
    fn content_chrome(&self, slide: &mut Slide, title: &str) -> Result<()> {
        let palette = &self.theme.palette;
        slide.add_background_rect(palette.white)?;
        slide.add_top_accent_bar(palette.navy)?;
        slide.add_text_box(
            Rect::mils(800, 500, 11_000, 800),
            title,
            &self.theme.slide_title(),
        )?;
        Ok(())
    }

    fn footnote(&self, slide: &mut Slide, rect: Rect, text: Option<&str>) -> Result<()> {
        if let Some(text) = text {
            slide.add_text_box(rect, text, &self.theme.footnote())?;
        }
        Ok(())
    }

    fn title(&self, slide: &mut Slide, content: &TitleSlide) -> Result<()> {
        let theme = &self.theme;
        slide.add_background_rect(theme.palette.navy)?;
        slide.add_accent_bar(Length::mils(4_800), Length::mils(50), theme.palette.teal)?;
        slide.add_text_box(
            Rect::mils(1_000, 1_800, 11_000, 1_500),
            &content.title,
            &theme.hero_title(),
        )?;
        slide.add_text_box(
            Rect::mils(1_000, 3_300, 11_000, 1_000),
            &content.subtitle,
            &theme.hero_subtitle(),
        )?;
        if let Some(tagline) = &content.tagline {
            slide.add_text_box(
                Rect::mils(1_000, 5_200, 11_000, 800),
                tagline,
                &theme.text(18.0).color(theme.palette.muted).centered(),
            )?;
        }
        if let Some(footer) = &content.footer {
            slide.add_text_box(
                Rect::mils(1_000, 6_300, 11_000, 500),
                footer,
                &theme.text(14.0).color(theme.palette.faint).centered(),
            )?;
        }
        Ok(())
    }

    fn agenda(&self, slide: &mut Slide, content: &AgendaSlide) -> Result<()> {
        self.content_chrome(slide, &content.title)?;
        let items: Vec<String> = if content.numbered {
            content
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| format!("{:<4}{}", format!("{}.", i + 1), item))
                .collect()
        } else {
            content.items.clone()
        };
        slide.add_bullet_list(
            Rect::mils(1_200, 1_600, 10_000, 5_500),
            &items,
            &self.theme.list(20.0, 10.0),
        )?;
        Ok(())
    }

    fn summary(&self, slide: &mut Slide, content: &SummarySlide) -> Result<()> {
        let theme = &self.theme;
        self.content_chrome(slide, &content.title)?;
        slide.add_text_box(
            Rect::mils(800, 1_500, 11_500, 1_000),
            &content.body,
            &theme.body(),
        )?;

        for (i, stat) in content.stats.iter().enumerate() {
            let color = theme.resolve(&stat.color)?;
            let rect = Rect::mils(800 + i as u64 * 2_900, 3_200, 2_500, 1_800);
            widgets::stat_card(slide, rect, &stat.value, &stat.label, color, theme)?;
        }

        if !content.checklist.is_empty() {
            let items: Vec<String> = content
                .checklist
                .iter()
                .map(|item| format!("\u{2713}  {}", item))
                .collect();
            slide.add_bullet_list(
                Rect::mils(800, 5_400, 11_500, 2_000),
                &items,
                &theme.list(16.0, 6.0).color(theme.palette.grey_text),
            )?;
        }
        Ok(())
    }

    fn section(&self, slide: &mut Slide, content: &SectionSlide) -> Result<()> {
        widgets::section_header(slide, &content.title, &content.subtitle, &self.theme)
    }

    fn tiers(&self, slide: &mut Slide, content: &TiersSlide) -> Result<()> {
        let theme = &self.theme;
        self.content_chrome(slide, &content.title)?;

        for (i, tier) in content.tiers.iter().enumerate() {
            let color = theme.resolve(&tier.color)?;
            let rect = Rect::mils(1_500, 1_600 + i as u64 * 1_850, 10_000, 1_550);
            widgets::boxed_card(slide, rect, &tier.title, &tier.description, color, theme)?;
        }

        let arrow = theme.heading(24.0, theme.palette.grey_text).centered();
        for i in 1..content.tiers.len() {
            let y = 3_150 + (i as u64 - 1) * 1_850;
            slide.add_text_box(Rect::mils(5_800, y, 1_500, 500), "\u{25BC}", &arrow)?;
        }

        self.footnote(
            slide,
            Rect::mils(1_000, 7_000, 11_000, 400),
            content.footnote.as_deref(),
        )
    }

    fn two_column(&self, slide: &mut Slide, content: &TwoColumnSlide) -> Result<()> {
        let theme = &self.theme;
        self.content_chrome(slide, &content.title)?;
        if content.columns.is_empty() {
            return Ok(());
        }

        let count = content.columns.len() as u64;
        let headed = content.columns.iter().any(|c| c.heading.is_some());
        let list_style = theme.list(
            content.size_pt.unwrap_or(16.0),
            content.spacing_pt.unwrap_or(8.0),
        );

        // Headed columns sit lower and are inset under their heading.
        let (left, pitch, width) = if headed {
            let pitch = 12_000 / count;
            (1_000, pitch, pitch.saturating_sub(1_000))
        } else {
            let pitch = 12_400 / count;
            (800, pitch, pitch.saturating_sub(700))
        };

        for (i, column) in content.columns.iter().enumerate() {
            let x = left + i as u64 * pitch;
            let color = match &column.color {
                Some(color) => theme.resolve(color)?,
                None => theme.palette.teal,
            };

            if headed {
                if let Some(heading) = &column.heading {
                    slide.add_text_box(
                        Rect::mils(x, 1_500, width, 500),
                        heading,
                        &theme.heading(24.0, color),
                    )?;
                }
                slide.add_bullet_list(
                    Rect::mils(x + 200, 2_100, width, 4_500),
                    &column.items,
                    &list_style,
                )?;
            } else {
                slide.add_bullet_list(
                    Rect::mils(x, 1_500, width, 5_000),
                    &column.items,
                    &list_style,
                )?;
            }

            if content.divider && i > 0 {
                let gap = (pitch - width) / 2;
                slide.add_rectangle(
                    Rect::mils(x - gap, 1_600, 30, 4_500),
                    ShapeStyle::filled(theme.palette.divider),
                )?;
            }
        }
        Ok(())
    }

    fn roles(&self, slide: &mut Slide, content: &RolesSlide) -> Result<()> {
        let theme = &self.theme;
        self.content_chrome(slide, &content.title)?;

        let style = CardStyle::shaded(theme);
        let pitch = CARD_ROW_WIDTH / (content.roles.len().max(1) as u64);
        for (i, role) in content.roles.iter().enumerate() {
            let color = theme.resolve(&role.color)?;
            let rect = Rect::mils(500 + i as u64 * pitch, 1_600, pitch.saturating_sub(300), 5_200);
            widgets::titled_card(
                slide,
                rect,
                &role.title,
                CardBody::Items(&role.items),
                color,
                &style,
                theme,
            )?;
        }

        self.footnote(
            slide,
            Rect::mils(800, 7_000, 11_000, 400),
            content.footnote.as_deref(),
        )
    }

    fn modules(&self, slide: &mut Slide, content: &ModulesSlide) -> Result<()> {
        let theme = &self.theme;
        self.content_chrome(slide, &content.title)?;

        let columns = content.columns.max(1);
        let pitch = CARD_ROW_WIDTH / columns as u64;
        let (style, width, row_pitch) = if content.shaded {
            (CardStyle::shaded(theme), pitch.saturating_sub(400), 2_700)
        } else {
            (CardStyle::plain(theme), pitch.saturating_sub(300), 2_800)
        };

        for (i, module) in content.modules.iter().enumerate() {
            let color = theme.resolve(&module.color)?;
            let (row, col) = ((i / columns) as u64, (i % columns) as u64);
            let rect = Rect::mils(500 + col * pitch, 1_500 + row * row_pitch, width, 2_300);
            widgets::titled_card(
                slide,
                rect,
                &module.title,
                CardBody::Text(&module.description),
                color,
                &style,
                theme,
            )?;
        }
        Ok(())
    }

    fn grouped_lists(&self, slide: &mut Slide, content: &GroupedListsSlide) -> Result<()> {
        let theme = &self.theme;
        self.content_chrome(slide, &content.title)?;

        if let Some(note) = &content.note {
            slide.add_text_box(
                Rect::mils(800, 1_300, 11_000, 700),
                note,
                &theme.caption(15.0),
            )?;
        }

        let Some((primary, rest)) = content.groups.split_first() else {
            return Ok(());
        };
        slide.add_text_box(
            Rect::mils(800, 2_100, 5_500, 500),
            &primary.title,
            &theme.heading(20.0, theme.resolve(&primary.color)?),
        )?;
        slide.add_bullet_list(
            Rect::mils(1_000, 2_700, 6_500, 4_500),
            &primary.items,
            &theme.list(12.0, 3.0),
        )?;

        // The remaining groups share the right-hand column from 2.1in to 7.4in.
        let pitch = 5_300 / (rest.len().max(1) as u64);
        for (i, group) in rest.iter().enumerate() {
            let y = 2_100 + i as u64 * pitch;
            slide.add_text_box(
                Rect::mils(8_000, y, 4_500, 500),
                &group.title,
                &theme.heading(20.0, theme.resolve(&group.color)?),
            )?;
            slide.add_bullet_list(
                Rect::mils(8_200, y + 600, 4_300, pitch.saturating_sub(700)),
                &group.items,
                &theme.list(13.0, 6.0),
            )?;
        }
        Ok(())
    }

    fn bar_chart(&self, slide: &mut Slide, content: &BarChartSlide) -> Result<()> {
        let theme = &self.theme;
        self.content_chrome(slide, &content.title)?;

        let max_bar_length = content.bar_length.unwrap_or(DEFAULT_BAR_LENGTH);
        for (j, series) in content.series.iter().enumerate() {
            let label_x = 500 + j as u64 * 6_500;
            for (i, entry) in series.entries.iter().enumerate() {
                let y = 1_500 + i as u64 * 700;
                let row = BarRow {
                    label: &entry.label,
                    label_rect: Rect::mils(label_x, y, 2_200, 450),
                    bar_origin: Point::new(Length::mils(label_x + 2_300), Length::mils(y)),
                    value: entry.value,
                    max_value: series.max_value,
                    max_bar_length,
                    color: theme.resolve(&entry.color)?,
                };
                widgets::bar_row(slide, &row, theme)?;
            }
        }

        self.footnote(
            slide,
            Rect::mils(500, 6_600, 12_000, 600),
            content.footnote.as_deref(),
        )
    }

    fn workflow(&self, slide: &mut Slide, content: &WorkflowSlide) -> Result<()> {
        let theme = &self.theme;
        self.content_chrome(slide, &content.title)?;

        let label_style = theme.text(13.0).centered();
        let arrow = theme.heading(24.0, theme.palette.grey_text).centered();
        for (i, step) in content.steps.iter().enumerate() {
            let left = 300 + i as u64 * 2_100;
            let color = theme.resolve(&step.color)?;
            let index = match &step.index {
                Some(index) => index.clone(),
                None => (i + 1).to_string(),
            };

            let marker = Rect::mils(left + 650, 1_800, 700, 700);
            widgets::step_marker(slide, marker, &index, color, theme)?;
            slide.add_text_box(
                Rect::mils(left + 100, 2_700, 1_800, 1_200),
                &step.label,
                &label_style,
            )?;
            if i + 1 < content.steps.len() {
                slide.add_text_box(Rect::mils(left + 1_700, 1_900, 500, 500), "\u{2192}", &arrow)?;
            }
        }

        if let Some(note) = &content.note {
            slide.add_text_box(
                Rect::mils(500, 4_300, 12_000, 500),
                note,
                &theme.caption(15.0).centered(),
            )?;
        }

        if let Some(follow_up) = &content.follow_up {
            slide.add_text_box(
                Rect::mils(800, 5_200, 11_000, 600),
                &follow_up.heading,
                &theme.heading(28.0, theme.palette.navy),
            )?;
            slide.add_bullet_list(
                Rect::mils(1_000, 5_900, 11_000, 1_500),
                &follow_up.items,
                &theme.list(14.0, 4.0),
            )?;
        }
        Ok(())
    }

    fn page_groups(&self, slide: &mut Slide, content: &PageGroupsSlide) -> Result<()> {
        let theme = &self.theme;
        self.content_chrome(slide, &content.title)?;

        let pitch = CARD_ROW_WIDTH / (content.groups.len().max(1) as u64);
        let width = pitch.saturating_sub(300);
        for (i, group) in content.groups.iter().enumerate() {
            let left = 400 + i as u64 * pitch;
            let color = theme.resolve(&group.color)?;

            slide.add_text_box(
                Rect::mils(left, 1_500, width, 500),
                &group.title,
                &theme.heading(20.0, color),
            )?;
            slide.add_rounded_rectangle(
                Rect::mils(left, 2_100, width, 4_500),
                ShapeStyle::filled(theme.palette.light_bg)
                    .with_line(color, Length::centipoints(150)),
            )?;
            slide.add_bullet_list(
                Rect::mils(left + 200, 2_300, width.saturating_sub(400), 4_000),
                &group.items,
                &theme.list(12.0, 8.0),
            )?;
        }

        self.footnote(
            slide,
            Rect::mils(500, 6_900, 12_000, 500),
            content.footnote.as_deref(),
        )
    }

    fn reference(&self, slide: &mut Slide, content: &ReferenceSlide) -> Result<()> {
        let theme = &self.theme;
        self.content_chrome(slide, &content.title)?;

        for (r, row) in content.panels.chunks(2).enumerate() {
            let top = 1_500 + r as u64 * 3_500;
            // A panel alone on its row spans the full width.
            let (width, list_height, size, spacing) = if row.len() == 1 {
                (11_000, 1_500, 15.0, 6.0)
            } else {
                (5_500, 3_000, 14.0, 5.0)
            };

            for (c, panel) in row.iter().enumerate() {
                let x = 800 + c as u64 * 6_200;
                slide.add_text_box(
                    Rect::mils(x, top, width, 500),
                    &panel.title,
                    &theme.heading(22.0, theme.resolve(&panel.color)?),
                )?;
                slide.add_bullet_list(
                    Rect::mils(x + 200, top + 600, width, list_height),
                    &panel.items,
                    &theme.list(size, spacing),
                )?;
            }
        }
        Ok(())
    }
}
