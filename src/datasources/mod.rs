//! Document sources: content-type classification and concrete document trees.

mod xml;

pub use xml::{XmlDocument, XmlNode};

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

/// An XML declaration or other `<?xml ...?>` instruction on a single line.
static XML_INSTRUCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<\?xml.*?\?>").expect("BUG: invalid XML_INSTRUCTION_RE regex literal")
});

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

/// The broad format of a retrieved document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocType {
    Html,
    Xml,
    Rss,
    Unknown,
}

impl DocType {
    /// Classifies a `Content-Type` value, case-insensitively. Parameters such
    /// as `charset` are ignored.
    pub fn from_mime(mime: Option<&str>) -> Self {
        let Some(mime) = mime else {
            return DocType::Unknown;
        };
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "text/html" => DocType::Html,
            "text/xml" | "application/xml" => DocType::Xml,
            "application/rss+xml" => DocType::Rss,
            other if other.ends_with("+xml") => DocType::Xml,
            _ => DocType::Unknown,
        }
    }

    /// Guesses the type from a file extension.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("html" | "htm" | "xhtml") => DocType::Html,
            Some("xml" | "atom") => DocType::Xml,
            Some("rss") => DocType::Rss,
            _ => DocType::Unknown,
        }
    }
}

/// Removes `<?xml ... ?>` declarations from a document string and trims the
/// result.
pub fn strip_processing_instructions(document: &str) -> String {
    XML_INSTRUCTION_RE.replace_all(document, "").trim().to_string()
}

/// Reads a document from disk, ready for [`XmlDocument::parse`]. Declarations
/// are stripped so that leading whitespace before them is not an error.
pub fn read_document(path: impl AsRef<Path>) -> Result<String, DocumentError> {
    let text = fs::read_to_string(path)?;
    Ok(strip_processing_instructions(&text))
}
