//! Badge status derived from error and warning counts.

use serde::{Deserialize, Serialize};

/// Outcome shown on a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Successful,
    Warnings,
    Unsuccessful,
}

impl Status {
    /// Errors dominate warnings regardless of how many warnings there are.
    pub fn from_counts(errors: usize, warnings: usize) -> Self {
        if errors > 0 {
            Status::Unsuccessful
        } else if warnings > 0 {
            Status::Warnings
        } else {
            Status::Successful
        }
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Successful => "SUCCESSFUL",
            Status::Warnings => "WARNINGS",
            Status::Unsuccessful => "UNSUCCESSFUL",
        }
    }

    /// Badge colour.
    pub fn color(&self) -> &'static str {
        match self {
            Status::Successful => "green",
            Status::Warnings => "yellow",
            Status::Unsuccessful => "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_rule() {
        assert_eq!(Status::from_counts(0, 0), Status::Successful);
        assert_eq!(Status::from_counts(0, 3), Status::Warnings);
        assert_eq!(Status::from_counts(2, 5), Status::Unsuccessful);
        assert_eq!(Status::from_counts(1, 0), Status::Unsuccessful);
    }

    #[test]
    fn test_labels_and_colors() {
        assert_eq!(Status::Unsuccessful.label(), "UNSUCCESSFUL");
        assert_eq!(Status::Warnings.color(), "yellow");
        assert_eq!(
            serde_json::to_value(Status::Successful).unwrap(),
            serde_json::json!("SUCCESSFUL")
        );
    }
}
