//! Assembly of a complete `.pptx` package from a [`Deck`].
//!
//! Part layout:
//!
//! ```text
//! [Content_Types].xml
//! _rels/.rels
//! docProps/core.xml, docProps/app.xml
//! ppt/presentation.xml (+ rels)
//! ppt/slideMasters/slideMaster1.xml (+ rels)
//! ppt/slideLayouts/slideLayout1.xml (+ rels)
//! ppt/theme/theme1.xml
//! ppt/presProps.xml, ppt/viewProps.xml, ppt/tableStyles.xml
//! ppt/slides/slideN.xml (+ rels)
//! ```
use super::template;
use super::writer::{app_props_xml, core_props_xml, presentation_xml, slide_xml};
use crate::common::error::Result;
use crate::deck::Deck;
use crate::ooxml::opc::PackageWriter;
use crate::ooxml::opc::Relationships;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

const PRESENTATION: &str = "ppt/presentation.xml";
const SLIDE_MASTER: &str = "ppt/slideMasters/slideMaster1.xml";
const SLIDE_LAYOUT: &str = "ppt/slideLayouts/slideLayout1.xml";
const THEME: &str = "ppt/theme/theme1.xml";
const CORE_PROPS: &str = "docProps/core.xml";
const APP_PROPS: &str = "docProps/app.xml";

/// Render `deck` to the bytes of a `.pptx` file.
///
/// Text is written as given; callers check it with [`Deck::check_encoding`]
/// first.
pub(crate) fn render(deck: &Deck) -> Result<Vec<u8>> {
    let mut package = PackageWriter::new();

    let mut root_rels = Relationships::new();
    root_rels.add(rt::OFFICE_DOCUMENT, PRESENTATION);
    root_rels.add(rt::CORE_PROPERTIES, CORE_PROPS);
    root_rels.add(rt::EXTENDED_PROPERTIES, APP_PROPS);
    package.add_rels("", &root_rels);

    package.add_part(
        CORE_PROPS,
        ct::OPC_CORE_PROPERTIES,
        core_props_xml(deck.title(), deck.author())?,
    );
    package.add_part(
        APP_PROPS,
        ct::OFC_EXTENDED_PROPERTIES,
        app_props_xml(deck.slide_count())?,
    );

    // The master must be rId1; presentation.xml refers to it by that id.
    let mut pres_rels = Relationships::new();
    pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
    let slide_rel_ids: Vec<String> = (1..=deck.slide_count())
        .map(|n| pres_rels.add(rt::SLIDE, &format!("slides/slide{}.xml", n)))
        .collect();
    pres_rels.add(rt::PRES_PROPS, "presProps.xml");
    pres_rels.add(rt::VIEW_PROPS, "viewProps.xml");
    pres_rels.add(rt::THEME, "theme/theme1.xml");
    pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");

    package.add_part(
        PRESENTATION,
        ct::PML_PRESENTATION_MAIN,
        presentation_xml(deck.canvas(), &slide_rel_ids)?,
    );
    package.add_rels(PRESENTATION, &pres_rels);

    let mut master_rels = Relationships::new();
    master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
    master_rels.add(rt::THEME, "../theme/theme1.xml");
    package.add_part(SLIDE_MASTER, ct::PML_SLIDE_MASTER, template::SLIDE_MASTER_XML);
    package.add_rels(SLIDE_MASTER, &master_rels);

    let mut layout_rels = Relationships::new();
    layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
    package.add_part(SLIDE_LAYOUT, ct::PML_SLIDE_LAYOUT, template::SLIDE_LAYOUT_XML);
    package.add_rels(SLIDE_LAYOUT, &layout_rels);

    package.add_part(THEME, ct::OFC_THEME, template::THEME_XML);
    package.add_part("ppt/presProps.xml", ct::PML_PRES_PROPS, template::PRES_PROPS_XML);
    package.add_part("ppt/viewProps.xml", ct::PML_VIEW_PROPS, template::VIEW_PROPS_XML);
    package.add_part(
        "ppt/tableStyles.xml",
        ct::PML_TABLE_STYLES,
        template::TABLE_STYLES_XML,
    );

    let mut slide_rels = Relationships::new();
    slide_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
    for (index, slide) in deck.slides().iter().enumerate() {
        let partname = format!("ppt/slides/slide{}.xml", index + 1);
        tracing::debug!(slide = index + 1, shapes = slide.shape_count(), "writing slide");
        package.add_part(&partname, ct::PML_SLIDE, slide_xml(slide)?);
        package.add_rels(&partname, &slide_rels);
    }

    package.to_bytes()
}
