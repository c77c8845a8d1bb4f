//! Orchestration of the three validation stages.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::convert::{Converter, PreviewTable, SssomConverter};
use crate::error::{Result, ValidateError};
use crate::input::{Fetcher, InputAcquirer, InputSummary};
use crate::validation::{SchemaValidator, StageReport, Status, TsvValidator, Validator};

/// Default maximum number of input lines evaluated.
pub const DEFAULT_LIMIT_LINES_EVALUATED: usize = 1000;

/// Default number of mappings shown in the preview and converted.
pub const DEFAULT_LIMIT_LINES_DISPLAYED: usize = 5;

/// Limits applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Input lines beyond this count are dropped before validation.
    pub limit_lines_evaluated: usize,
    /// Mappings shown in the preview and converted.
    pub limit_lines_displayed: usize,
}

impl ValidatorConfig {
    /// Create a configuration; both limits must be at least 1.
    pub fn new(limit_lines_evaluated: usize, limit_lines_displayed: usize) -> Result<Self> {
        if limit_lines_evaluated == 0 {
            return Err(ValidateError::Config(
                "limit_lines_evaluated must be at least 1".to_string(),
            ));
        }
        if limit_lines_displayed == 0 {
            return Err(ValidateError::Config(
                "limit_lines_displayed must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            limit_lines_evaluated,
            limit_lines_displayed,
        })
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            limit_lines_evaluated: DEFAULT_LIMIT_LINES_EVALUATED,
            limit_lines_displayed: DEFAULT_LIMIT_LINES_DISPLAYED,
        }
    }
}

/// Consolidated result of one validation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Provenance of the input, when it went through acquisition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<InputSummary>,
    pub structural: StageReport,
    pub schema: StageReport,
    pub conversion: StageReport,
    /// Sum of the stage error counts.
    pub total_errors: usize,
    /// Sum of the stage warning counts.
    pub total_warnings: usize,
    /// Badge status of the totals.
    pub status: Status,
    pub turtle: Option<String>,
    pub json_ld: Option<String>,
    pub preview: PreviewTable,
    pub config: ValidatorConfig,
}

impl ValidationReport {
    /// Combine stage outcomes; totals are the sums of the stage counts.
    pub fn assemble(
        structural: StageReport,
        schema: StageReport,
        conversion: crate::convert::Conversion,
        config: ValidatorConfig,
    ) -> Self {
        let stages = [&structural, &schema, &conversion.report];
        let total_errors = stages.iter().map(|s| s.errors).sum();
        let total_warnings = stages.iter().map(|s| s.warnings).sum();

        Self {
            input: None,
            total_errors,
            total_warnings,
            status: Status::from_counts(total_errors, total_warnings),
            structural,
            schema,
            conversion: conversion.report,
            turtle: conversion.turtle,
            json_ld: conversion.json_ld,
            preview: conversion.preview,
            config,
        }
    }

    /// Stage reports in execution order.
    pub fn stages(&self) -> [&StageReport; 3] {
        [&self.structural, &self.schema, &self.conversion]
    }
}

/// Runs acquisition followed by the structural, schema and conversion stages.
pub struct ValidationPipeline {
    config: ValidatorConfig,
    acquirer: InputAcquirer,
    structural: Arc<dyn Validator>,
    schema: Arc<dyn Validator>,
    converter: Arc<dyn Converter>,
}

impl ValidationPipeline {
    /// Create a pipeline with the built-in stages.
    pub fn new(config: ValidatorConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            acquirer: InputAcquirer::new(fetcher, config.limit_lines_evaluated),
            config,
            structural: Arc::new(TsvValidator::new()),
            schema: Arc::new(SchemaValidator::new()),
            converter: Arc::new(SssomConverter::new()),
        }
    }

    /// Replace the structural stage.
    pub fn with_structural_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.structural = Arc::new(validator);
        self
    }

    /// Replace the schema stage.
    pub fn with_schema_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.schema = Arc::new(validator);
        self
    }

    /// Replace the conversion stage.
    pub fn with_converter(mut self, converter: impl Converter + 'static) -> Self {
        self.converter = Arc::new(converter);
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Acquire the input and validate it.
    ///
    /// Only acquisition can fail; stage problems end up in the report.
    pub fn run(&self, text: Option<&str>, url: Option<&str>) -> Result<ValidationReport> {
        let input = self.acquirer.acquire(text, url)?;
        let mut report = self.validate_text(&input.text);
        report.input = Some(input.summary());
        Ok(report)
    }

    /// Run all three stages on `text`, unconditionally and in order.
    pub fn validate_text(&self, text: &str) -> ValidationReport {
        let structural = self.structural.validate(text);
        debug!(errors = structural.errors, warnings = structural.warnings, "structural check finished");

        let schema = self.schema.validate(text);
        debug!(errors = schema.errors, warnings = schema.warnings, "schema check finished");

        let conversion = self.converter.convert(text, self.config.limit_lines_displayed);
        debug!(
            errors = conversion.report.errors,
            warnings = conversion.report.warnings,
            "conversion finished"
        );

        let report = ValidationReport::assemble(structural, schema, conversion, self.config);
        info!(
            errors = report.total_errors,
            warnings = report.total_warnings,
            status = report.status.label(),
            "validation finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::Conversion;
    use crate::input::MockFetcher;
    use crate::validation::Stage;

    struct FixedValidator(Stage, usize, usize);

    impl Validator for FixedValidator {
        fn validate(&self, _text: &str) -> StageReport {
            StageReport::new(self.0, self.1, self.2, "fixed")
        }
    }

    struct FixedConverter;

    impl Converter for FixedConverter {
        fn convert(&self, _text: &str, _preview_lines: usize) -> Conversion {
            Conversion {
                report: StageReport::new(Stage::Conversion, 4, 0, "fixed"),
                turtle: None,
                json_ld: Some("{}".to_string()),
                preview: PreviewTable::default(),
            }
        }
    }

    fn pipeline() -> ValidationPipeline {
        ValidationPipeline::new(ValidatorConfig::default(), Arc::new(MockFetcher::new()))
    }

    #[test]
    fn test_all_stages_run_and_totals_add_up() {
        let pipeline = pipeline()
            .with_structural_validator(FixedValidator(Stage::Structural, 2, 1))
            .with_schema_validator(FixedValidator(Stage::Schema, 0, 3))
            .with_converter(FixedConverter);

        let report = pipeline.validate_text("anything");

        assert_eq!(report.total_errors, 6);
        assert_eq!(report.total_warnings, 4);
        assert_eq!(report.status, Status::Unsuccessful);
        assert_eq!(report.schema.status(), Status::Warnings);
        assert!(report.turtle.is_none());
        assert_eq!(report.json_ld.as_deref(), Some("{}"));
    }

    #[test]
    fn test_run_records_input_summary() {
        let report = pipeline().run(Some("subject_id\tobject_id\nA:1\tB:1"), None).unwrap();

        let input = report.input.unwrap();
        assert_eq!(input.line_count, 2);
        assert!(!input.truncated);
    }

    #[test]
    fn test_run_without_input_fails() {
        assert!(matches!(pipeline().run(None, None), Err(ValidateError::NoInput)));
    }

    #[test]
    fn test_config_rejects_zero_limits() {
        assert!(ValidatorConfig::new(0, 5).is_err());
        assert!(ValidatorConfig::new(1000, 0).is_err());
        assert_eq!(ValidatorConfig::new(1000, 5).unwrap(), ValidatorConfig::default());
    }
}
