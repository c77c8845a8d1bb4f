//! Resolves the text to validate from inline input or a URL.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{Result, ValidateError};

use super::fetch::Fetcher;
use super::source::{InputOrigin, RawInput};

/// Shown to the user when both sources are filled in.
pub const PRECEDENCE_NOTICE: &str = "Both SSSOM text and URL provided. URL will be used.";

/// Keep at most `limit` leading lines of `text`.
///
/// Returns the text unchanged when it is within the limit. Otherwise the
/// first `limit` lines are joined with `\n` and terminated by a newline.
/// The flag reports whether anything was cut.
pub fn prune_lines(text: &str, limit: usize) -> (String, bool) {
    if text.lines().count() <= limit {
        return (text.to_string(), false);
    }

    let mut pruned = text.lines().take(limit).collect::<Vec<_>>().join("\n");
    pruned.push('\n');
    (pruned, true)
}

/// Obtains raw SSSOM text for a single request.
#[derive(Clone)]
pub struct InputAcquirer {
    fetcher: Arc<dyn Fetcher>,
    limit_lines_evaluated: usize,
}

impl InputAcquirer {
    /// Create an acquirer that fetches URLs through `fetcher`.
    pub fn new(fetcher: Arc<dyn Fetcher>, limit_lines_evaluated: usize) -> Self {
        Self {
            fetcher,
            limit_lines_evaluated,
        }
    }

    /// Maximum number of lines passed on for evaluation.
    pub fn limit_lines_evaluated(&self) -> usize {
        self.limit_lines_evaluated
    }

    /// Resolve the input. The URL takes precedence over inline text.
    ///
    /// Blank inline text and an empty URL field count as absent. Fetch
    /// failures are returned as-is; there is no retry.
    pub fn acquire(&self, text: Option<&str>, url: Option<&str>) -> Result<RawInput> {
        let text = text.filter(|t| !t.trim().is_empty());
        let url = url.map(str::trim).filter(|u| !u.is_empty());

        let url_precedence = text.is_some() && url.is_some();
        if url_precedence {
            warn!("{}", PRECEDENCE_NOTICE);
        }

        let (source_text, origin) = match (url, text) {
            (Some(url), _) => {
                info!(url, "using SSSOM file from URL");
                (self.fetcher.fetch(url)?, InputOrigin::Url(url.to_string()))
            }
            // Form fields submit CRLF line breaks and drop the final newline
            (None, Some(text)) => (format!("{}\n", text.replace("\r\n", "\n")), InputOrigin::Inline),
            (None, None) => return Err(ValidateError::NoInput),
        };

        let line_count = source_text.lines().count();
        let (text, truncated) = prune_lines(&source_text, self.limit_lines_evaluated);
        if truncated {
            warn!(
                line_count,
                "Your file is too long, only the first {} lines will be evaluated.",
                self.limit_lines_evaluated
            );
        }

        Ok(RawInput {
            text,
            origin,
            line_count,
            truncated,
            url_precedence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MockFetcher;

    const URL: &str = "https://example.org/mappings.sssom.tsv";

    fn acquirer(limit: usize) -> InputAcquirer {
        let fetcher = MockFetcher::new().with_response(URL, "subject_id\tobject_id\nA:1\tB:1\n");
        InputAcquirer::new(Arc::new(fetcher), limit)
    }

    #[test]
    fn test_inline_text_gets_trailing_newline() {
        let input = acquirer(1000).acquire(Some("a\tb"), None).unwrap();

        assert_eq!(input.text, "a\tb\n");
        assert_eq!(input.origin, InputOrigin::Inline);
        assert!(!input.truncated);
        assert!(!input.url_precedence);
    }

    #[test]
    fn test_inline_crlf_is_normalised() {
        let input = acquirer(1000).acquire(Some("a\tb\r\nc\td"), None).unwrap();
        assert_eq!(input.text, "a\tb\nc\td\n");
    }

    #[test]
    fn test_fetched_crlf_is_kept() {
        let fetcher = MockFetcher::new().with_response(URL, "a\tb\r\n");
        let input = InputAcquirer::new(Arc::new(fetcher), 1000)
            .acquire(None, Some(URL))
            .unwrap();
        assert_eq!(input.text, "a\tb\r\n");
    }

    #[test]
    fn test_url_takes_precedence() {
        let input = acquirer(1000).acquire(Some("a\tb\n"), Some(URL)).unwrap();

        assert_eq!(input.text, "subject_id\tobject_id\nA:1\tB:1\n");
        assert_eq!(input.origin, InputOrigin::Url(URL.to_string()));
        assert!(input.url_precedence);
    }

    #[test]
    fn test_no_input() {
        let err = acquirer(1000).acquire(None, None).unwrap_err();
        assert!(matches!(err, ValidateError::NoInput));

        let err = acquirer(1000).acquire(Some("  \n"), Some("  ")).unwrap_err();
        assert!(matches!(err, ValidateError::NoInput));
    }

    #[test]
    fn test_fetch_failure_propagates() {
        let err = acquirer(1000)
            .acquire(None, Some("https://example.org/other.tsv"))
            .unwrap_err();
        assert!(err.is_fetch());
    }

    #[test]
    fn test_truncates_to_limit() {
        let text: String = (0..1500).map(|i| format!("line{}\n", i)).collect();
        let input = acquirer(1000).acquire(Some(text.trim_end()), None).unwrap();

        assert!(input.truncated);
        assert_eq!(input.line_count, 1500);
        assert_eq!(input.text.lines().count(), 1000);
        assert!(input.text.starts_with("line0\n"));
        assert!(input.text.ends_with("line999\n"));
    }

    #[test]
    fn test_prune_lines_within_limit_is_identity() {
        let (text, truncated) = prune_lines("a\nb\n", 2);
        assert_eq!(text, "a\nb\n");
        assert!(!truncated);

        let (text, truncated) = prune_lines("a\nb\nc", 2);
        assert_eq!(text, "a\nb\n");
        assert!(truncated);
    }
}
