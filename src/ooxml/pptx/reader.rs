//! Read-back of generated presentations.
//!
//! [`DeckSummary`] walks a `.pptx` the way a consumer would: package
//! relationships to `presentation.xml`, `sldIdLst` for the slide order, then
//! each slide's shape tree. It keeps only what is needed to check a deck
//! against the slides it was built from.
use crate::common::error::{Error, Result};
use crate::common::geometry::Rect;
use crate::common::unit::Length;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::{PhysPkgReader, Relationships, rels_partname, resolve_target};
use crate::slide::ShapeKind;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Slide size and slides of a presentation package.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSummary {
    pub width: Length,
    pub height: Length,
    /// Slides in display order.
    pub slides: Vec<SlideSummary>,
}

/// Shapes of one slide, in document (z-) order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideSummary {
    pub shapes: Vec<ShapeSummary>,
}

/// One `p:sp` of a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSummary {
    pub kind: ShapeKind,
    /// Offset and extent from `a:xfrm`.
    pub rect: Rect,
    /// Non-empty paragraphs; figures have none.
    pub paragraphs: Vec<ParagraphSummary>,
}

/// Text of a paragraph plus the size and weight of its first run.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphSummary {
    /// Text with `a:br` read back as `\n`.
    pub text: String,
    pub size_pt: Option<f64>,
    pub bold: bool,
}

impl DeckSummary {
    /// Read a presentation from a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut package = PhysPkgReader::open(path)?;
        Self::read(&mut package)
    }

    /// Read a presentation from its bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let mut package = PhysPkgReader::from_bytes(bytes.into())?;
        Self::read(&mut package)
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn read(package: &mut PhysPkgReader) -> Result<Self> {
        let root_rels = Relationships::from_xml(&package.blob_for(&rels_partname(""))?)?;
        let main = root_rels.by_type(rt::OFFICE_DOCUMENT).ok_or_else(|| {
            Error::InvalidFormat("Package has no officeDocument relationship".to_string())
        })?;
        let pres_partname = resolve_target("", main.target_ref());
        let pres_dir = parent_dir(&pres_partname);

        let pres_rels = match package.optional_blob(&rels_partname(&pres_partname))? {
            Some(blob) => Relationships::from_xml(&blob)?,
            None => Relationships::new(),
        };
        let pres_xml = package.blob_for(&pres_partname)?;
        let (width, height, slide_rel_ids) = parse_presentation(&pres_xml)?;

        let mut slides = Vec::with_capacity(slide_rel_ids.len());
        for r_id in &slide_rel_ids {
            let rel = pres_rels.get(r_id).ok_or_else(|| {
                Error::InvalidFormat(format!("Slide relationship '{}' is missing", r_id))
            })?;
            let slide_partname = resolve_target(pres_dir, rel.target_ref());
            let slide_xml = package.blob_for(&slide_partname)?;
            slides.push(parse_slide(&slide_xml)?);
        }

        Ok(Self {
            width,
            height,
            slides,
        })
    }
}

impl SlideSummary {
    /// Number of shapes of `kind`.
    pub fn count_of(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.kind == kind).count()
    }

    /// Text boxes in z-order.
    pub fn text_boxes(&self) -> impl Iterator<Item = &ShapeSummary> {
        self.shapes.iter().filter(|s| s.kind == ShapeKind::TextBox)
    }
}

fn parent_dir(partname: &str) -> &str {
    partname.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}

fn attr_value(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn emu_attr(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<Length>> {
    match attr_value(e, name)? {
        Some(value) => value
            .parse::<u64>()
            .map(|emus| Some(Length::from_emus(emus)))
            .map_err(|_| Error::InvalidFormat(format!("Invalid EMU value '{}'", value))),
        None => Ok(None),
    }
}

/// Slide size and the `r:id` of every `p:sldId`, in order.
fn parse_presentation(xml: &[u8]) -> Result<(Length, Length, Vec<String>)> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut size = None;
    let mut rel_ids = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"sldSz" => {
                    let cx = emu_attr(&e, b"cx")?;
                    let cy = emu_attr(&e, b"cy")?;
                    size = cx.zip(cy);
                },
                b"sldId" => {
                    if let Some(r_id) = attr_value(&e, b"r:id")? {
                        rel_ids.push(r_id);
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    let (width, height) = size
        .ok_or_else(|| Error::InvalidFormat("presentation.xml has no slide size".to_string()))?;
    Ok((width, height, rel_ids))
}

/// Shape under construction while its `p:sp` is open.
#[derive(Default)]
struct ShapeState {
    text_box: bool,
    preset: Option<String>,
    off: Option<(Length, Length)>,
    ext: Option<(Length, Length)>,
    paragraphs: Vec<ParagraphSummary>,
}

impl ShapeState {
    fn finish(self) -> Result<ShapeSummary> {
        let kind = if self.text_box {
            ShapeKind::TextBox
        } else {
            match self.preset.as_deref() {
                Some("rect") => ShapeKind::Rectangle,
                Some("roundRect") => ShapeKind::RoundedRectangle,
                Some("ellipse") => ShapeKind::Oval,
                other => {
                    return Err(Error::InvalidFormat(format!(
                        "Unsupported shape geometry {:?}",
                        other
                    )));
                },
            }
        };
        let (x, y) = self.off.unwrap_or_default();
        let (width, height) = self.ext.unwrap_or_default();

        Ok(ShapeSummary {
            kind,
            rect: Rect::new(x, y, width, height),
            paragraphs: self.paragraphs,
        })
    }
}

/// Paragraph under construction while its `a:p` is open.
#[derive(Default)]
struct ParagraphState {
    text: String,
    run_props: Option<(Option<f64>, bool)>,
    end_props: Option<(Option<f64>, bool)>,
}

impl ParagraphState {
    fn finish(self) -> ParagraphSummary {
        let (size_pt, bold) = self.run_props.or(self.end_props).unwrap_or((None, false));
        ParagraphSummary {
            text: self.text,
            size_pt,
            bold,
        }
    }
}

fn run_props(e: &BytesStart<'_>) -> Result<(Option<f64>, bool)> {
    let size_pt = attr_value(e, b"sz")?
        .and_then(|sz| sz.parse::<u32>().ok())
        .map(|sz| f64::from(sz) / 100.0);
    let bold = matches!(attr_value(e, b"b")?.as_deref(), Some("1" | "true"));
    Ok((size_pt, bold))
}

fn resolve_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        },
    }
}

fn parse_slide(xml: &[u8]) -> Result<SlideSummary> {
    let mut reader = Reader::from_reader(xml);

    let mut slide = SlideSummary::default();
    let mut shape: Option<ShapeState> = None;
    let mut paragraph: Option<ParagraphState> = None;
    let mut in_text = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"sp" => shape = Some(ShapeState::default()),
                b"p" if shape.is_some() => paragraph = Some(ParagraphState::default()),
                b"t" => in_text = paragraph.is_some(),
                b"br" => {
                    if let Some(p) = paragraph.as_mut() {
                        p.text.push('\n');
                    }
                },
                _ => read_shape_element(&e, shape.as_mut(), paragraph.as_mut())?,
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                // Empty paragraphs are placeholders for an empty text body.
                b"p" => {},
                b"br" => {
                    if let Some(p) = paragraph.as_mut() {
                        p.text.push('\n');
                    }
                },
                _ => read_shape_element(&e, shape.as_mut(), paragraph.as_mut())?,
            },
            Event::Text(e) if in_text => {
                if let Some(p) = paragraph.as_mut() {
                    let text = std::str::from_utf8(e.as_ref())
                        .map_err(|e| Error::XmlError(e.to_string()))?;
                    p.text.push_str(text);
                }
            },
            Event::GeneralRef(e) if in_text => {
                let name = std::str::from_utf8(e.as_ref())
                    .map_err(|e| Error::XmlError(e.to_string()))?;
                let c = resolve_entity(name).ok_or_else(|| {
                    Error::XmlError(format!("Unknown entity reference '&{};'", name))
                })?;
                if let Some(p) = paragraph.as_mut() {
                    p.text.push(c);
                }
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let (Some(p), Some(s)) = (paragraph.take(), shape.as_mut()) {
                        s.paragraphs.push(p.finish());
                    }
                },
                b"sp" => {
                    if let Some(s) = shape.take() {
                        slide.shapes.push(s.finish()?);
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(slide)
}

fn read_shape_element(
    e: &BytesStart<'_>,
    shape: Option<&mut ShapeState>,
    paragraph: Option<&mut ParagraphState>,
) -> Result<()> {
    let Some(shape) = shape else {
        return Ok(());
    };

    match e.local_name().as_ref() {
        b"cNvSpPr" => shape.text_box = attr_value(e, b"txBox")?.as_deref() == Some("1"),
        b"prstGeom" => shape.preset = attr_value(e, b"prst")?,
        b"off" if shape.off.is_none() => {
            shape.off = emu_attr(e, b"x")?.zip(emu_attr(e, b"y")?);
        },
        b"ext" if shape.ext.is_none() => {
            shape.ext = emu_attr(e, b"cx")?.zip(emu_attr(e, b"cy")?);
        },
        b"rPr" => {
            if let Some(p) = paragraph
                && p.run_props.is_none()
            {
                p.run_props = Some(run_props(e)?);
            }
        },
        b"endParaRPr" => {
            if let Some(p) = paragraph {
                p.end_props = Some(run_props(e)?);
            }
        },
        _ => {},
    }
    Ok(())
}
