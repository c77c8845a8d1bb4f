//! Acquired input and its provenance.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Where the validated text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum InputOrigin {
    /// Pasted into the text area.
    Inline,
    /// Fetched from a URL.
    Url(String),
}

/// Text obtained for one validation request.
#[derive(Debug, Clone)]
pub struct RawInput {
    /// The (possibly truncated) text to validate.
    pub text: String,
    /// Source of the text.
    pub origin: InputOrigin,
    /// Number of lines before truncation.
    pub line_count: usize,
    /// Whether the text was cut down to the evaluation limit.
    pub truncated: bool,
    /// Whether both inline text and a URL were given (URL wins).
    pub url_precedence: bool,
}

impl RawInput {
    /// Describe this input without carrying its text.
    pub fn summary(&self) -> InputSummary {
        let mut hasher = Sha256::new();
        hasher.update(self.text.as_bytes());

        InputSummary {
            origin: self.origin.clone(),
            line_count: self.line_count,
            truncated: self.truncated,
            url_precedence: self.url_precedence,
            hash: format!("sha256:{:x}", hasher.finalize()),
        }
    }
}

/// Provenance of an input, disclosed alongside the validation results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSummary {
    pub origin: InputOrigin,
    pub line_count: usize,
    pub truncated: bool,
    pub url_precedence: bool,
    /// SHA-256 of the evaluated text.
    pub hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_hashes_evaluated_text() {
        let input = RawInput {
            text: "a\tb\n".to_string(),
            origin: InputOrigin::Inline,
            line_count: 1,
            truncated: false,
            url_precedence: false,
        };

        let summary = input.summary();
        assert!(summary.hash.starts_with("sha256:"));
        assert_eq!(summary.hash.len(), "sha256:".len() + 64);
        assert_eq!(summary.origin, InputOrigin::Inline);
    }

    #[test]
    fn test_origin_serialization() {
        let json = serde_json::to_value(InputOrigin::Url("https://x.org/a.tsv".into())).unwrap();
        assert_eq!(json["kind"], "url");
        assert_eq!(json["url"], "https://x.org/a.tsv");
    }
}
