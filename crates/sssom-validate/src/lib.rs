//! sssom-validate: checks SSSOM/TSV mapping sets and previews their RDF forms.
//!
//! A request supplies mapping-set text inline or by URL. The text is cut to
//! a line limit and then run through three stages in order:
//!
//! - **Structural**: tab-separated layout, header and field counts
//! - **Schema**: metadata and mapping slots against the SSSOM data model
//! - **Conversion**: the first mappings re-serialised as Turtle and JSON-LD
//!
//! Each stage reports error and warning counts. The overall status is
//! derived from their sums.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use sssom_validate::{HttpFetcher, ValidationPipeline, ValidatorConfig};
//!
//! let fetcher = Arc::new(HttpFetcher::new().unwrap());
//! let pipeline = ValidationPipeline::new(ValidatorConfig::default(), fetcher);
//! let report = pipeline
//!     .run(None, Some("https://example.org/mappings.sssom.tsv"))
//!     .unwrap();
//!
//! println!("{}: {} errors", report.status.label(), report.total_errors);
//! ```

pub mod convert;
pub mod error;
pub mod input;
pub mod model;
pub mod render;
pub mod validation;

mod example;
mod pipeline;

pub use convert::{Conversion, Converter, PreviewRow, PreviewTable, SssomConverter};
pub use error::{Result, ValidateError};
pub use example::generate_example;
pub use input::{
    Fetcher, HttpFetcher, InputAcquirer, InputOrigin, InputSummary, MockFetcher,
    PRECEDENCE_NOTICE, RawInput,
};
pub use model::MappingSetDocument;
pub use pipeline::{
    DEFAULT_LIMIT_LINES_DISPLAYED, DEFAULT_LIMIT_LINES_EVALUATED, ValidationPipeline,
    ValidationReport, ValidatorConfig,
};
pub use render::{HtmlRenderer, MarkdownRenderer, Render, badge_url, version_of};
pub use validation::{
    Finding, SchemaValidator, Severity, Stage, StageReport, Status, TsvValidator, Validator,
};
