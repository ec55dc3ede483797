use crate::common::error::{Error, Result};
use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

// LeftmostLongest so that "&amp;lt;" decodes to "&lt;", not "<"
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape XML special characters for use in text content and attribute values.
///
/// # Examples
///
/// ```
/// use pitaya::common::xml::escape_xml;
/// assert_eq!(escape_xml("Donation & Volunteering"), "Donation &amp; Volunteering");
/// assert_eq!(escape_xml("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Unescape the five predefined XML entities.
///
/// Unknown or malformed entities are left unchanged.
///
/// ```
/// use pitaya::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

/// Whether `c` is allowed in an XML 1.0 document.
///
/// Tab, line feed and carriage return are the only control characters
/// allowed; surrogates cannot occur in a `char`; U+FFFE and U+FFFF are
/// excluded.
#[inline]
pub fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Check that `text` can be stored in a text run.
///
/// Line feeds and vertical tabs are accepted: they are written as line breaks
/// rather than as character data.
///
/// # Errors
///
/// [`Error::Encoding`] naming the first offending character and its offset.
pub fn check_text(text: &str) -> Result<()> {
    for (offset, c) in text.char_indices() {
        if c != '\u{B}' && !is_xml_char(c) {
            return Err(Error::Encoding(format!(
                "character U+{:04X} at byte {} cannot be represented in XML 1.0",
                c as u32, offset
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_round_trip() {
        let text = r#"Campaigns → NGOs & "Donors" <'all'>"#;
        assert_eq!(unescape_xml(&escape_xml(text)), text);
    }

    #[test]
    fn test_check_text() {
        assert!(check_text("Public (8)\nUser (7)").is_ok());
        assert!(check_text("line\u{B}break").is_ok());
        assert!(check_text("✓  Real payment integration").is_ok());
        assert!(matches!(check_text("bell\u{7}"), Err(Error::Encoding(_))));
        assert!(matches!(check_text("\u{FFFE}"), Err(Error::Encoding(_))));
    }

    #[test]
    fn test_error_names_code_point() {
        let err = check_text("ab\u{1}").unwrap_err();
        assert!(err.to_string().contains("U+0001 at byte 2"));
    }
}
