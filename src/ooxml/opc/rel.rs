//! Relationship parts (`_rels/*.rels`) of an OPC package.
//!
//! A [`Relationships`] collection belongs to one source (the package or a
//! part). It hands out `rIdN` identifiers in insertion order, serializes to the
//! `Relationships` XML vocabulary, and parses it back when a package is read.
use crate::common::error::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source's directory
    target_ref: String,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
        }
    }

    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Ordered collection of relationships from a single source.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its freshly allocated ID.
    pub fn add(&mut self, reltype: &str, target_ref: &str) -> String {
        let r_id = self.next_r_id();
        self.rels.push(Relationship::new(
            r_id.clone(),
            reltype.to_string(),
            target_ref.to_string(),
        ));
        r_id
    }

    /// Get a relationship by ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// First relationship of `reltype`.
    pub fn by_type(&self, reltype: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.reltype == reltype)
    }

    /// Next available rId: the lowest `rIdN` not in use.
    fn next_r_id(&self) -> String {
        (1..)
            .map(|n| format!("rId{}", n))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to a `.rels` part, in insertion order.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }

    /// Parse a `.rels` part.
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut rels = Self::new();
        loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                    let mut r_id = String::new();
                    let mut reltype = String::new();
                    let mut target = String::new();
                    for attr in e.attributes() {
                        let attr = attr?;
                        let value = attr.unescape_value()?.into_owned();
                        match attr.key.as_ref() {
                            b"Id" => r_id = value,
                            b"Type" => reltype = value,
                            b"Target" => target = value,
                            _ => {},
                        }
                    }
                    rels.rels.push(Relationship::new(r_id, reltype, target));
                },
                Event::Eof => break,
                _ => {},
            }
        }
        Ok(rels)
    }
}

/// Resolve `target_ref` against the directory of its source part.
///
/// `resolve_target("ppt", "slides/slide1.xml")` is `ppt/slides/slide1.xml`,
/// `resolve_target("ppt/slides", "../slideLayouts/slideLayout1.xml")` is
/// `ppt/slideLayouts/slideLayout1.xml`. A leading `/` makes the target
/// package-absolute.
pub fn resolve_target(base_dir: &str, target_ref: &str) -> String {
    let mut segments: Vec<&str> = if target_ref.starts_with('/') {
        Vec::new()
    } else {
        base_dir.split('/').filter(|s| !s.is_empty()).collect()
    };

    for segment in target_ref.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            other => segments.push(other),
        }
    }
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_ids_in_insertion_order() {
        let mut rels = Relationships::new();
        let ids: Vec<_> = (0..11)
            .map(|i| rels.add(rt::SLIDE, &format!("slides/slide{}.xml", i + 1)))
            .collect();
        assert_eq!(ids[0], "rId1");
        assert_eq!(ids[10], "rId11");

        let xml = rels.to_xml();
        let first = xml.find(r#"Id="rId2""#).unwrap();
        let last = xml.find(r#"Id="rId10""#).unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_parse_round_trip() {
        let mut rels = Relationships::new();
        rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        rels.add(rt::SLIDE, "slides/slide1.xml");

        let parsed = Relationships::from_xml(rels.to_xml().as_bytes()).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.get("rId2").unwrap().target_ref(), "slides/slide1.xml");
        assert_eq!(parsed.by_type(rt::SLIDE_MASTER).unwrap().r_id(), "rId1");
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target("ppt", "slides/slide1.xml"), "ppt/slides/slide1.xml");
        assert_eq!(
            resolve_target("ppt/slides", "../slideLayouts/slideLayout1.xml"),
            "ppt/slideLayouts/slideLayout1.xml"
        );
        assert_eq!(resolve_target("", "ppt/presentation.xml"), "ppt/presentation.xml");
        assert_eq!(resolve_target("ppt", "/docProps/app.xml"), "docProps/app.xml");
    }
}
