//! Presentation-level parts: `presentation.xml` and the document properties.
use crate::common::error::Result;
use crate::common::geometry::Canvas;
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// First slide id; PresentationML reserves the values below 256.
pub(crate) const FIRST_SLIDE_ID: u32 = 256;

/// Generate `ppt/presentation.xml`.
///
/// `slide_rel_ids` are the ids of the slide relationships in display order;
/// the slide master is always `rId1`.
pub(crate) fn presentation_xml(canvas: &Canvas, slide_rel_ids: &[String]) -> Result<String> {
    let mut xml = String::with_capacity(1024 + slide_rel_ids.len() * 48);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

    // Write slide master ID list
    xml.push_str("<p:sldMasterIdLst>");
    xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
    xml.push_str("</p:sldMasterIdLst>");

    // Write slide ID list
    if !slide_rel_ids.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for (slide_id, rel_id) in (FIRST_SLIDE_ID..).zip(slide_rel_ids) {
            write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide_id, rel_id)?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    // Write slide size
    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        canvas.width().emus(),
        canvas.height().emus()
    )?;

    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("<p:defaultTextStyle>");
    xml.push_str(r#"<a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
    xml.push_str("</p:defaultTextStyle>");
    xml.push_str("</p:presentation>");

    Ok(xml)
}

/// Generate `docProps/core.xml`.
pub(crate) fn core_props_xml(title: Option<&str>, author: Option<&str>) -> Result<String> {
    let mut xml = String::with_capacity(512);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    write!(
        xml,
        r#"<cp:coreProperties xmlns:cp="{}" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
        namespace::OPC_CORE_PROPERTIES
    )?;
    if let Some(title) = title {
        write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
    }
    if let Some(author) = author {
        write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(author))?;
        write!(xml, "<cp:lastModifiedBy>{}</cp:lastModifiedBy>", escape_xml(author))?;
    }
    xml.push_str("<cp:revision>1</cp:revision>");
    xml.push_str("</cp:coreProperties>");

    Ok(xml)
}

/// Generate `docProps/app.xml`.
pub(crate) fn app_props_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    write!(
        xml,
        r#"<Properties xmlns="{}" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
        namespace::OFC_EXTENDED_PROPERTIES
    )?;
    write!(xml, "<Application>{}</Application>", env!("CARGO_PKG_NAME"))?;
    xml.push_str("<PresentationFormat>Custom</PresentationFormat>");
    write!(xml, "<Slides>{}</Slides>", slide_count)?;
    xml.push_str("</Properties>");

    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_xml() {
        let ids = vec!["rId2".to_string(), "rId3".to_string()];
        let xml = presentation_xml(&Canvas::WIDESCREEN, &ids).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/><p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));
    }

    #[test]
    fn test_presentation_without_slides() {
        let xml = presentation_xml(&Canvas::STANDARD, &[]).unwrap();
        assert!(!xml.contains("<p:sldIdLst>"));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
    }

    #[test]
    fn test_core_props_escape_metadata() {
        let xml = core_props_xml(Some("Q&A <draft>"), None).unwrap();
        assert!(xml.contains("<dc:title>Q&amp;A &lt;draft&gt;</dc:title>"));
        assert!(!xml.contains("<dc:creator>"));
    }

    #[test]
    fn test_app_props_slide_count() {
        assert!(app_props_xml(12).unwrap().contains("<Slides>12</Slides>"));
    }
}
