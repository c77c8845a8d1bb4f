//! Validation stages and their reports.

mod finding;
mod schema;
mod status;
mod structural;

pub use finding::{Finding, Severity, Stage, StageReport};
pub use schema::SchemaValidator;
pub use status::Status;
pub use structural::TsvValidator;

/// A validation stage reached through a single synchronous call.
///
/// Implementations never fail: problems with the text are findings in the
/// returned report.
pub trait Validator: Send + Sync {
    /// Check `text` and report what was found.
    fn validate(&self, text: &str) -> StageReport;
}
