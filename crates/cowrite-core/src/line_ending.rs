//! Line ending helpers.
//!
//! A [`Document`](crate::Document) always separates lines with LF (`'\n'`). When a file that uses
//! CRLF (`"\r\n"`) is opened through [`Document::load`](crate::Document::load), the content is
//! normalized, and the preferred line ending is remembered so the persistence layer can write the
//! file back unchanged.

use serde::{Deserialize, Serialize};

/// The preferred newline sequence used when saving a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    #[default]
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the dominant line ending from a source text.
    ///
    /// Policy: if the input contains any CRLF (`"\r\n"`), returns [`LineEnding::Crlf`],
    /// otherwise [`LineEnding::Lf`].
    pub fn detect_in_text(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Normalize every CRLF in `text` to LF.
    pub fn normalize(text: &str) -> String {
        text.replace("\r\n", "\n")
    }

    /// Convert an LF-normalized text to this line ending for saving.
    pub fn apply_to_text(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }

    /// The newline sequence itself.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_and_apply() {
        assert_eq!(LineEnding::detect_in_text("a\nb"), LineEnding::Lf);
        assert_eq!(LineEnding::detect_in_text("a\r\nb\n"), LineEnding::Crlf);

        let normalized = LineEnding::normalize("a\r\nb\r\n");
        assert_eq!(normalized, "a\nb\n");
        assert_eq!(LineEnding::Crlf.apply_to_text(&normalized), "a\r\nb\r\n");
        assert_eq!(LineEnding::Lf.apply_to_text(&normalized), "a\nb\n");
    }
}
