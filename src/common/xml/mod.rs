//! XML text helpers shared by the package writer and reader.

pub mod escape;

pub use escape::{check_text, escape_xml, is_xml_char, unescape_xml};
