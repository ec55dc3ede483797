//! Open Packaging Conventions (OPC) plumbing.
//!
//! - Content type, namespace and relationship type constants
//! - Relationship parts and target resolution
//! - ZIP-based physical packaging, read and write
//! - Package assembly with an atomic save

pub mod constants;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

pub use phys_pkg::{PhysPkgReader, PhysPkgWriter};
pub use pkgwriter::{PackageWriter, persist_atomic, rels_partname};
pub use rel::{Relationship, Relationships, resolve_target};
