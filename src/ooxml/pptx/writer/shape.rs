//! DrawingML for the shapes of a slide.
//!
//! Every shape is a `p:sp`. Figures get a preset geometry plus explicit fill,
//! line and effect elements, so nothing is inherited from the theme. Text
//! boxes get `txBox="1"`, no fill, and one `a:p` per paragraph.
use crate::common::error::Result;
use crate::common::geometry::Rect;
use crate::common::style::{RGBColor, ShapeStyle, TextStyle};
use crate::common::xml::escape_xml;
use crate::slide::{Figure, Paragraph, Shape, TextBox};
use std::fmt::Write as FmtWrite;

/// Write `shape` as a `p:sp` element with the given shape id.
pub(crate) fn write_shape(xml: &mut String, shape: &Shape, shape_id: u32) -> Result<()> {
    let name = shape.kind().display_name();
    match shape {
        Shape::Rectangle(figure) => write_figure(xml, figure, "rect", name, shape_id),
        Shape::RoundedRectangle(figure) => write_figure(xml, figure, "roundRect", name, shape_id),
        Shape::Oval(figure) => write_figure(xml, figure, "ellipse", name, shape_id),
        Shape::TextBox(text_box) => write_text_box(xml, text_box, name, shape_id),
    }
}

fn write_figure(
    xml: &mut String,
    figure: &Figure,
    preset: &str,
    name: &str,
    shape_id: u32,
) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="{} {}"/>"#, shape_id, name, shape_id)?;
    xml.push_str("<p:cNvSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, &figure.rect)?;
    write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, preset)?;
    write_style(xml, &figure.style)?;
    xml.push_str("</p:spPr>");

    // Empty body keeps the shape editable as text in PowerPoint.
    xml.push_str(r#"<p:txBody><a:bodyPr rtlCol="0" anchor="ctr"/><a:lstStyle/><a:p/></p:txBody>"#);
    xml.push_str("</p:sp>");
    Ok(())
}

fn write_style(xml: &mut String, style: &ShapeStyle) -> Result<()> {
    match style.fill {
        Some(color) => write_solid_fill(xml, color)?,
        None => xml.push_str("<a:noFill/>"),
    }

    match style.line {
        Some(color) => {
            write!(xml, r#"<a:ln w="{}">"#, style.line_width.emus())?;
            write_solid_fill(xml, color)?;
            xml.push_str("</a:ln>");
        },
        None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
    }

    if style.shadow {
        xml.push_str(concat!(
            r#"<a:effectLst><a:outerShdw blurRad="38100" dist="25400" dir="5400000" rotWithShape="0">"#,
            r#"<a:srgbClr val="000000"><a:alpha val="35000"/></a:srgbClr></a:outerShdw></a:effectLst>"#,
        ));
    } else {
        xml.push_str("<a:effectLst/>");
    }
    Ok(())
}

fn write_text_box(xml: &mut String, text_box: &TextBox, name: &str, shape_id: u32) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="{} {}"/>"#, shape_id, name, shape_id)?;
    xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, &text_box.rect)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("<a:noFill/>");
    xml.push_str("</p:spPr>");

    let body = &text_box.body;
    xml.push_str("<p:txBody>");
    write!(
        xml,
        r#"<a:bodyPr wrap="{}" rtlCol="0" anchor="{}"><a:noAutofit/></a:bodyPr>"#,
        if body.word_wrap { "square" } else { "none" },
        body.anchor.as_str()
    )?;
    xml.push_str("<a:lstStyle/>");

    if body.is_empty() {
        // A text body needs at least one paragraph.
        xml.push_str("<a:p/>");
    }
    for paragraph in body.paragraphs() {
        write_paragraph(xml, paragraph)?;
    }

    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    let style = &paragraph.style;

    xml.push_str("<a:p>");
    write!(xml, r#"<a:pPr algn="{}">"#, style.alignment.as_str())?;
    let space_after = (paragraph.space_after_pt * 100.0).round();
    if space_after > 0.0 {
        write!(xml, r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#, space_after as u32)?;
    }
    xml.push_str("</a:pPr>");

    for (i, line) in paragraph.lines().enumerate() {
        if i > 0 {
            xml.push_str("<a:br>");
            write_run_properties(xml, "a:rPr", style)?;
            xml.push_str("</a:br>");
        }
        if line.is_empty() {
            continue;
        }
        xml.push_str("<a:r>");
        write_run_properties(xml, "a:rPr", style)?;
        write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
        xml.push_str("</a:r>");
    }

    write_run_properties(xml, "a:endParaRPr", style)?;
    xml.push_str("</a:p>");
    Ok(())
}

fn write_run_properties(xml: &mut String, tag: &str, style: &TextStyle) -> Result<()> {
    write!(
        xml,
        r#"<{} lang="en-US" sz="{}""#,
        tag,
        style.size_centipoints()
    )?;
    if style.bold {
        xml.push_str(r#" b="1""#);
    }
    xml.push_str(r#" dirty="0">"#);
    write_solid_fill(xml, style.color)?;
    let font = escape_xml(&style.font_name);
    write!(xml, r#"<a:latin typeface="{}"/><a:cs typeface="{}"/>"#, font, font)?;
    write!(xml, "</{}>", tag)?;
    Ok(())
}

fn write_solid_fill(xml: &mut String, color: RGBColor) -> Result<()> {
    write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.to_hex())?;
    Ok(())
}

fn write_xfrm(xml: &mut String, rect: &Rect) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, rect.x.emus(), rect.y.emus())?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, rect.width.emus(), rect.height.emus())?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::Length;

    fn render(shape: &Shape) -> String {
        let mut xml = String::new();
        write_shape(&mut xml, shape, 7).unwrap();
        xml
    }

    #[test]
    fn test_figure_presets() {
        let style = ShapeStyle::filled(RGBColor::from_u32(0x009688));
        let rect = Rect::mils(0, 0, 1_000, 500);

        let xml = render(&Shape::RoundedRectangle(Figure::new(rect, style)));
        assert!(xml.contains(r#"<p:cNvPr id="7" name="Rounded Rectangle 7"/>"#));
        assert!(xml.contains(r#"prst="roundRect""#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="009688"/></a:solidFill>"#));
        assert!(xml.contains("<a:ln><a:noFill/></a:ln>"));
        assert!(xml.contains("<a:effectLst/>"));
        assert!(xml.contains(r#"<a:ext cx="914400" cy="457200"/>"#));

        assert!(render(&Shape::Oval(Figure::new(rect, style))).contains(r#"prst="ellipse""#));
        assert!(render(&Shape::Rectangle(Figure::new(rect, style))).contains(r#"prst="rect""#));
    }

    #[test]
    fn test_line_and_transparent_fill() {
        let style = ShapeStyle::transparent().with_line(RGBColor::BLACK, Length::points(2));
        let xml = render(&Shape::Rectangle(Figure::new(Rect::mils(0, 0, 10, 10), style)));
        assert!(xml.contains("<a:noFill/>"));
        assert!(xml.contains(r#"<a:ln w="25400"><a:solidFill><a:srgbClr val="000000"/>"#));
    }

    #[test]
    fn test_text_box_paragraphs() {
        let mut text_box = TextBox::new(Rect::mils(0, 0, 5_000, 1_000));
        let style = TextStyle::default().size(36.0).bold().centered();
        text_box.push_paragraph(Paragraph::new("28+ & more", style).with_space_after(6.0));
        text_box.push_paragraph(Paragraph::new("a\nb", TextStyle::default()));

        let xml = render(&Shape::TextBox(text_box));
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:bodyPr wrap="square" rtlCol="0" anchor="t">"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"><a:spcAft><a:spcPts val="600"/></a:spcAft></a:pPr>"#));
        assert!(xml.contains(r#"sz="3600" b="1" dirty="0""#));
        assert!(xml.contains("<a:t>28+ &amp; more</a:t>"));
        assert_eq!(xml.matches("<a:br>").count(), 1);
        assert_eq!(xml.matches("<a:p>").count(), 2);
    }

    #[test]
    fn test_empty_text_box_has_one_paragraph() {
        let xml = render(&Shape::TextBox(TextBox::new(Rect::mils(0, 0, 10, 10))));
        assert!(xml.contains("<a:lstStyle/><a:p/></p:txBody>"));
    }
}
