//! Package writer for OPC packages.
//!
//! Collects parts and their relationships, then serializes them to a ZIP
//! archive with `[Content_Types].xml` as the first member. Saving to disk goes
//! through a temp file in the destination directory that is renamed over the
//! target only after it has been completely written and synced.

use crate::common::error::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Member name of the content types part.
pub const CONTENT_TYPES_URI: &str = "[Content_Types].xml";

/// Accumulates the parts of a package in write order.
///
/// Part names are package-relative, without a leading slash
/// (`ppt/slides/slide1.xml`).
#[derive(Debug, Default)]
pub struct PackageWriter {
    parts: Vec<(String, Vec<u8>)>,
    content_types: ContentTypesItem,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part and register its content type.
    pub fn add_part(&mut self, partname: &str, content_type: &str, blob: impl Into<Vec<u8>>) {
        tracing::debug!(partname, content_type, "adding package part");
        self.content_types.add_content_type(partname, content_type);
        self.parts.push((partname.to_string(), blob.into()));
    }

    /// Add the relationships of `source_partname`; `""` is the package itself.
    pub fn add_rels(&mut self, source_partname: &str, rels: &Relationships) {
        self.parts
            .push((rels_partname(source_partname), rels.to_xml().into_bytes()));
    }

    /// Number of parts added so far, relationship parts included.
    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut phys_writer = PhysPkgWriter::new();
        phys_writer.write(CONTENT_TYPES_URI, self.content_types.to_xml().as_bytes())?;
        for (partname, blob) in &self.parts {
            phys_writer.write(partname, blob)?;
        }
        phys_writer.finish()
    }
}

/// Name of the relationships part belonging to `partname`.
///
/// `ppt/slides/slide1.xml` maps to `ppt/slides/_rels/slide1.xml.rels`,
/// the package itself (`""`) to `_rels/.rels`.
pub fn rels_partname(partname: &str) -> String {
    match partname.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", partname),
    }
}

/// Write `bytes` to `path` atomically.
///
/// The bytes go to a temp file created next to `path`, which is synced and then
/// renamed over `path`. On any failure the temp file is removed and `path` is
/// left untouched.
pub fn persist_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".pitaya-")
        .suffix(".pptx.tmp")
        .tempfile_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(path)?;
    Ok(())
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
#[derive(Debug)]
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl Default for ContentTypesItem {
    fn default() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }
}

impl ContentTypesItem {
    /// Add a content type for a part.
    ///
    /// Uses a default mapping if the extension matches a well-known type,
    /// otherwise uses an override for the specific partname.
    fn add_content_type(&mut self, partname: &str, content_type: &str) {
        let ext = partname.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");

        if Self::is_default_content_type(ext, content_type) {
            self.defaults
                .insert(ext.to_string(), content_type.to_string());
        } else {
            self.overrides
                .insert(format!("/{}", partname), content_type.to_string());
        }
    }

    /// Check if an extension/content-type pair is a standard default.
    fn is_default_content_type(ext: &str, content_type: &str) -> bool {
        matches!(
            (ext, content_type),
            ("rels", ct::OPC_RELATIONSHIPS) | ("xml", ct::XML)
        )
    }

    /// Generate the XML for [Content_Types].xml.
    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::phys_pkg::PhysPkgReader;

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::default();
        cti.add_content_type("ppt/presentation.xml", ct::PML_PRESENTATION_MAIN);
        cti.add_content_type("ppt/slides/slide1.xml", ct::PML_SLIDE);

        let xml = cti.to_xml();
        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Override PartName="/ppt/presentation.xml""#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
    }

    #[test]
    fn test_rels_partname() {
        assert_eq!(rels_partname(""), "_rels/.rels");
        assert_eq!(
            rels_partname("ppt/presentation.xml"),
            "ppt/_rels/presentation.xml.rels"
        );
        assert_eq!(
            rels_partname("ppt/slides/slide12.xml"),
            "ppt/slides/_rels/slide12.xml.rels"
        );
    }

    #[test]
    fn test_content_types_come_first() {
        let mut writer = PackageWriter::new();
        writer.add_part("ppt/presentation.xml", ct::PML_PRESENTATION_MAIN, "<p/>");
        writer.add_rels("", &Relationships::new());
        assert_eq!(writer.part_count(), 2);

        let reader = PhysPkgReader::from_bytes(writer.to_bytes().unwrap()).unwrap();
        assert_eq!(reader.member_names()[0], CONTENT_TYPES_URI);
        assert!(reader.contains("_rels/.rels"));
    }

    #[test]
    fn test_persist_atomic_replaces_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        std::fs::write(&path, b"old").unwrap();

        persist_atomic(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_persist_atomic_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("deck.pptx");
        assert!(matches!(
            persist_atomic(&path, b"data"),
            Err(crate::common::error::Error::Io(_))
        ));
        assert!(!path.exists());
    }
}
