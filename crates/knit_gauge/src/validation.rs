//! Field-level validation reports.

use crate::unit::format_amount;
use crate::warning::Warning;

/// Validation result with per-field errors and non-blocking warnings.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<Warning>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    /// Record an error unless `value` is present, finite and strictly positive.
    pub fn require_positive(&mut self, field: &str, value: Option<f64>) -> Option<f64> {
        match value {
            None => {
                self.add_error(format!("{} is required", field));
                None
            }
            Some(v) if !v.is_finite() || v <= 0.0 => {
                self.add_error(format!(
                    "{} must be a positive number (got {})",
                    field,
                    format_amount(v)
                ));
                None
            }
            Some(v) => Some(v),
        }
    }

    /// Like [`require_positive`](Self::require_positive) but for a field that may be absent.
    pub fn optional_positive(&mut self, field: &str, value: Option<f64>) -> Option<f64> {
        value.and_then(|v| self.require_positive(field, Some(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        let mut report = ValidationReport::new();
        assert_eq!(report.require_positive("width", Some(12.0)), Some(12.0));
        assert!(report.valid);

        assert_eq!(report.require_positive("length", None), None);
        assert_eq!(report.require_positive("height", Some(-1.0)), None);
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0], "length is required");
        assert_eq!(report.errors[1], "height must be a positive number (got -1)");
    }

    #[test]
    fn test_optional_positive() {
        let mut report = ValidationReport::new();
        assert_eq!(report.optional_positive("rows", None), None);
        assert!(report.valid);

        assert_eq!(report.optional_positive("rows", Some(0.0)), None);
        assert!(!report.valid);
    }
}
