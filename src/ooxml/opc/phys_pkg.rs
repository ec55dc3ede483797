//! Provides a general interface to a physical OPC package (ZIP file).
//!
//! Reading and writing both happen in memory: a package is small, and building
//! it completely before touching the filesystem is what makes saving atomic.

use crate::common::error::{Error, Result};
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Physical package reader over an in-memory ZIP archive.
pub struct PhysPkgReader {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl PhysPkgReader {
    /// Open an OPC package from a file path.
    ///
    /// # Errors
    /// [`Error::Io`] when the file cannot be read, [`Error::ZipError`] when it
    /// is not a ZIP archive.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Create a reader from owned bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    /// Decompressed content of the member `name` (no leading slash).
    ///
    /// # Errors
    /// [`Error::InvalidFormat`] when the member does not exist.
    pub fn blob_for(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut file = match self.archive.by_name(name) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(Error::InvalidFormat(format!(
                    "Package has no part named '{}'",
                    name
                )));
            },
            Err(e) => return Err(e.into()),
        };
        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(blob)
    }

    /// Content of the member `name`, or `None` when it does not exist.
    pub fn optional_blob(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        if self.contains(name) {
            self.blob_for(name).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Whether the archive has a member `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    /// Member names in archive order.
    pub fn member_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }
}

/// Physical package writer producing a deflated ZIP archive in memory.
pub struct PhysPkgWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PhysPkgWriter {
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    /// Write one member.
    pub fn write(&mut self, name: &str, blob: &[u8]) -> Result<()> {
        self.zip.start_file(name, self.options)?;
        self.zip.write_all(blob)?;
        Ok(())
    }

    /// Finish the central directory and return the archive bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.zip.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        writer.write("ppt/presentation.xml", b"<p:presentation/>").unwrap();
        writer.write("[Content_Types].xml", b"<Types/>").unwrap();
        let bytes = writer.finish().unwrap();

        let mut reader = PhysPkgReader::from_bytes(bytes).unwrap();
        assert_eq!(reader.len(), 2);
        let mut names = reader.member_names();
        names.sort();
        assert_eq!(names, ["[Content_Types].xml", "ppt/presentation.xml"]);
        assert_eq!(reader.blob_for("[Content_Types].xml").unwrap(), b"<Types/>");
        assert!(reader.optional_blob("ppt/_rels/presentation.xml.rels").unwrap().is_none());
    }

    #[test]
    fn test_missing_part() {
        let bytes = PhysPkgWriter::new().finish().unwrap();
        let mut reader = PhysPkgReader::from_bytes(bytes).unwrap();
        assert!(reader.is_empty());
        assert!(matches!(
            reader.blob_for("ppt/presentation.xml"),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_not_a_zip() {
        assert!(matches!(
            PhysPkgReader::from_bytes(vec![b'x'; 256]),
            Err(Error::ZipError(_))
        ));
    }
}
