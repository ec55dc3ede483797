//! Unified error type for pitaya.
use thiserror::Error;

/// Main error type for pitaya operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Unrecognized measurement unit, or a negative / non-finite magnitude
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    /// Negative extent, out-of-range canvas, or a rect wholly outside the canvas
    /// when the deck validates geometry
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Non-positive or non-finite scale in a proportional widget
    #[error("Invalid scale: {0}")]
    InvalidScale(String),

    /// Text that cannot be represented in the package's XML parts
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML writing or parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Package content that does not look like a presentation
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Deck plan could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// A content record failed while its slide was being assembled
    #[error("Slide {index} ({layout}): {source}")]
    Slide {
        /// Zero-based position of the failing record
        index: usize,
        /// Layout tag of the failing record
        layout: &'static str,
        /// The error raised by the widget or primitive
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an error raised while assembling the record at `index`.
    pub(crate) fn in_slide(self, index: usize, layout: &'static str) -> Self {
        Error::Slide {
            index,
            layout,
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through [`Error::Slide`] wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Slide { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type for pitaya operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_context_in_message() {
        let err = Error::InvalidScale("max value must be positive, got 0".to_string())
            .in_slide(2, "bar_chart");
        assert_eq!(
            err.to_string(),
            "Slide 2 (bar_chart): Invalid scale: max value must be positive, got 0"
        );
        assert!(matches!(err.root(), Error::InvalidScale(_)));
    }
}
