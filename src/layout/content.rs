//! Declarative slide content.
//!
//! One [`SlideContent`] record describes one slide. The `layout` key selects
//! the variant; the remaining keys are the payload:
//!
//! ```yaml
//! - layout: section
//!   title: System Architecture
//!   subtitle: Three-tier design with PostgreSQL backbone
//! - layout: bar_chart
//!   title: API Endpoint Distribution
//!   series:
//!     - max_value: 18
//!       entries:
//!         - { label: /api/admin, value: 18, color: orange }
//! ```
//!
//! Colors are [`ColorRef`]s: a palette name or a `#RRGGBB` literal, resolved
//! against the theme when the slide is drawn.
use crate::common::style::ColorRef;
use crate::common::unit::Length;
use serde::Deserialize;

/// One slide of a deck, tagged by layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum SlideContent {
    /// Full-bleed title slide; also used for closing slides.
    Title(TitleSlide),
    Agenda(AgendaSlide),
    /// Body paragraph, a row of stat cards and a checklist.
    Summary(SummarySlide),
    /// Section divider.
    Section(SectionSlide),
    /// Stacked tier boxes joined by arrows.
    Tiers(TiersSlide),
    /// Side-by-side bullet lists.
    TwoColumn(TwoColumnSlide),
    /// One shaded card with bullets per role.
    Roles(RolesSlide),
    /// Grid of titled cards.
    Modules(ModulesSlide),
    /// One large list on the left, smaller stacked lists on the right.
    GroupedLists(GroupedListsSlide),
    /// Horizontal bar rows, one column per series.
    BarChart(BarChartSlide),
    /// Numbered steps in a row, with an optional follow-up list.
    Workflow(WorkflowSlide),
    /// Headed cards holding bullet lists.
    PageGroups(PageGroupsSlide),
    /// Paired panels of reference lists (environment, commands, credentials).
    Reference(ReferenceSlide),
}

impl SlideContent {
    /// The `layout` tag of the record.
    pub fn layout_name(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Agenda(_) => "agenda",
            Self::Summary(_) => "summary",
            Self::Section(_) => "section",
            Self::Tiers(_) => "tiers",
            Self::TwoColumn(_) => "two_column",
            Self::Roles(_) => "roles",
            Self::Modules(_) => "modules",
            Self::GroupedLists(_) => "grouped_lists",
            Self::BarChart(_) => "bar_chart",
            Self::Workflow(_) => "workflow",
            Self::PageGroups(_) => "page_groups",
            Self::Reference(_) => "reference",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TitleSlide {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AgendaSlide {
    pub title: String,
    pub items: Vec<String>,
    /// Prefix items with `1.`, `2.`, ...
    #[serde(default)]
    pub numbered: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummarySlide {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub checklist: Vec<String>,
}

/// A headline number with its label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub color: ColorRef,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionSlide {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TiersSlide {
    pub title: String,
    pub tiers: Vec<Card>,
    #[serde(default)]
    pub footnote: Option<String>,
}

/// Title, description and accent color of a card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub color: ColorRef,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TwoColumnSlide {
    pub title: String,
    pub columns: Vec<Column>,
    /// List font size; 16pt when absent.
    #[serde(default)]
    pub size_pt: Option<f64>,
    /// Space after each item; 8pt when absent.
    #[serde(default)]
    pub spacing_pt: Option<f64>,
    /// Draw a thin rule between neighbouring columns.
    #[serde(default)]
    pub divider: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub heading: Option<String>,
    /// Heading color; teal when absent.
    #[serde(default)]
    pub color: Option<ColorRef>,
    pub items: Vec<String>,
}

/// A titled, colored list of items.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemGroup {
    #[serde(alias = "heading")]
    pub title: String,
    pub color: ColorRef,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RolesSlide {
    pub title: String,
    pub roles: Vec<ItemGroup>,
    #[serde(default)]
    pub footnote: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModulesSlide {
    pub title: String,
    pub modules: Vec<Card>,
    /// Cards per row; 3 when absent.
    #[serde(default = "default_module_columns")]
    pub columns: usize,
    /// Light background cards instead of white ones.
    #[serde(default)]
    pub shaded: bool,
}

fn default_module_columns() -> usize {
    3
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupedListsSlide {
    pub title: String,
    #[serde(default)]
    pub note: Option<String>,
    pub groups: Vec<ItemGroup>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BarChartSlide {
    pub title: String,
    pub series: Vec<BarSeries>,
    /// Length of a bar at `max_value`; 6in when absent.
    #[serde(default)]
    pub bar_length: Option<Length>,
    #[serde(default)]
    pub footnote: Option<String>,
}

/// One column of bars, scaled against its own maximum.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BarSeries {
    pub max_value: f64,
    pub entries: Vec<BarEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BarEntry {
    pub label: String,
    pub value: f64,
    pub color: ColorRef,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkflowSlide {
    pub title: String,
    pub steps: Vec<Step>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub follow_up: Option<FollowUp>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    /// Marker text; the one-based position when absent.
    #[serde(default)]
    pub index: Option<String>,
    pub label: String,
    pub color: ColorRef,
}

/// Secondary heading with a short list below the steps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FollowUp {
    pub heading: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageGroupsSlide {
    pub title: String,
    pub groups: Vec<ItemGroup>,
    #[serde(default)]
    pub footnote: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReferenceSlide {
    pub title: String,
    pub panels: Vec<ItemGroup>,
}
