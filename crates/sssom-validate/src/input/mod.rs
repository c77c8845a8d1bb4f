//! Input acquisition: inline text or remote URL, line-limited.

mod acquire;
mod fetch;
mod source;

pub use acquire::{InputAcquirer, PRECEDENCE_NOTICE, prune_lines};
pub use fetch::{FETCH_TIMEOUT, Fetcher, HttpFetcher, MockFetcher};
pub use source::{InputOrigin, InputSummary, RawInput};
