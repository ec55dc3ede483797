//! Slide part XML.
use super::shape::write_shape;
use crate::common::error::Result;
use crate::slide::Slide;

/// Id of the group shape that roots every shape tree; slide shapes follow it.
const FIRST_SHAPE_ID: u32 = 2;

/// Generate the `ppt/slides/slideN.xml` content for `slide`.
///
/// Shapes are written in z-order, with ids counting up from 2.
pub(crate) fn slide_xml(slide: &Slide) -> Result<String> {
    let mut xml = String::with_capacity(1024 + slide.shape_count() * 900);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(
        r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
    );
    xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
    xml.push_str(
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    xml.push_str("<p:cSld>");
    xml.push_str("<p:spTree>");

    // Write group shape properties (required)
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");

    for (shape_id, shape) in (FIRST_SHAPE_ID..).zip(slide.shapes()) {
        write_shape(&mut xml, shape, shape_id)?;
    }

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sld>");

    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::geometry::{Canvas, Rect};
    use crate::common::style::{RGBColor, TextStyle};

    #[test]
    fn test_shape_ids_follow_z_order() {
        let mut slide = Slide::new(Canvas::WIDESCREEN);
        slide.add_background_rect(RGBColor::WHITE).unwrap();
        slide
            .add_text_box(Rect::mils(800, 500, 11_000, 800), "Agenda", &TextStyle::default())
            .unwrap();

        let xml = slide_xml(&slide).unwrap();
        let background = xml.find(r#"<p:cNvPr id="2" name="Rectangle 2"/>"#).unwrap();
        let title = xml.find(r#"<p:cNvPr id="3" name="TextBox 3"/>"#).unwrap();
        assert!(background < title);
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_empty_slide() {
        let xml = slide_xml(&Slide::new(Canvas::WIDESCREEN)).unwrap();
        assert!(xml.contains("<p:grpSpPr>"));
        assert!(!xml.contains("<p:sp>"));
    }
}
