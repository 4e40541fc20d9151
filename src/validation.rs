//! Style Validation - Rule/Policy Separation
//!
//! Rules produce structured violations against a `StripeStyle`.
//! Errors block generation, warnings are only reported.

use serde::{Deserialize, Serialize};
use crate::style::StripeStyle;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub rule: String,
    pub severity: ViolationSeverity,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<ValidationViolation>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.severity == ViolationSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationViolation> {
        self.violations.iter().filter(|v| v.severity == ViolationSeverity::Warning)
    }

    /// One line per error, `rule: message`
    pub fn error_summary(&self) -> String {
        self.violations.iter()
            .filter(|v| v.severity == ViolationSeverity::Error)
            .map(|v| format!("{}: {}", v.rule, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validation rule trait - produces violations
pub trait ValidationRule {
    fn name(&self) -> &'static str;
    fn validate(&self, style: &StripeStyle) -> Vec<ValidationViolation>;
}

fn error(rule: &str, message: &str, expected: String, actual: String) -> ValidationViolation {
    ValidationViolation {
        rule: rule.to_string(),
        severity: ViolationSeverity::Error,
        message: message.to_string(),
        expected: Some(expected),
        actual: Some(actual),
    }
}

// --- Concrete Rules ---

pub struct LineCountRule;

impl ValidationRule for LineCountRule {
    fn name(&self) -> &'static str { "line_count" }

    fn validate(&self, style: &StripeStyle) -> Vec<ValidationViolation> {
        let mut violations = vec![];
        if style.line_count == 0 {
            violations.push(error(
                self.name(),
                "At least one stripe is required",
                ">= 1".to_string(),
                style.line_count.to_string(),
            ));
        }
        if style.highlight_index >= style.line_count {
            violations.push(error(
                self.name(),
                "Highlighted stripe is outside the stack",
                format!("< {}", style.line_count),
                style.highlight_index.to_string(),
            ));
        }
        violations
    }
}

pub struct LastLineRule;

impl ValidationRule for LastLineRule {
    fn name(&self) -> &'static str { "last_line_fraction" }

    fn validate(&self, style: &StripeStyle) -> Vec<ValidationViolation> {
        let f = style.last_line_fraction;
        if f > 0.0 && f < 1.0 {
            return vec![];
        }
        vec![error(
            self.name(),
            "Last stripe must be strictly shorter than the others",
            "0 < fraction < 1".to_string(),
            format!("{}", f),
        )]
    }
}

pub struct FitRule;

impl ValidationRule for FitRule {
    fn name(&self) -> &'static str { "fit" }

    fn validate(&self, style: &StripeStyle) -> Vec<ValidationViolation> {
        let reference = style.reference_size;
        if reference == 0 {
            return vec![error(self.name(), "Reference size must be positive", ">= 1".to_string(), "0".to_string())];
        }

        let mut violations = vec![];
        if style.line_width > reference {
            violations.push(error(
                self.name(),
                "Stripes are wider than the canvas",
                format!("<= {}", reference),
                style.line_width.to_string(),
            ));
        }

        let bottom = style.start_y as u64
            + style.line_count.saturating_sub(1) as u64 * style.spacing as u64
            + style.line_height as u64;
        if bottom > reference as u64 {
            violations.push(error(
                self.name(),
                "Stripe stack runs past the bottom edge",
                format!("<= {}", reference),
                bottom.to_string(),
            ));
        }

        if style.spacing < style.line_height {
            violations.push(ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Warning,
                message: "Stripes overlap at the reference size".to_string(),
                expected: Some(format!("spacing >= {}", style.line_height)),
                actual: Some(style.spacing.to_string()),
            });
        }
        violations
    }
}

pub struct ContrastRule;

impl ValidationRule for ContrastRule {
    fn name(&self) -> &'static str { "contrast" }

    fn validate(&self, style: &StripeStyle) -> Vec<ValidationViolation> {
        let mut violations = vec![];
        if style.accent == style.neutral {
            violations.push(error(
                self.name(),
                "Accent and neutral colours are identical",
                "accent != neutral".to_string(),
                format!("{:?}", style.accent),
            ));
        }
        if style.neutral == style.background {
            violations.push(ValidationViolation {
                rule: self.name().to_string(),
                severity: ViolationSeverity::Warning,
                message: "Neutral stripes are invisible on the background".to_string(),
                expected: Some("neutral != background".to_string()),
                actual: Some(format!("{:?}", style.neutral)),
            });
        }
        violations
    }
}

/// Validator runs every rule and applies the blocking policy
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(LineCountRule),
                Box::new(LastLineRule),
                Box::new(FitRule),
                Box::new(ContrastRule),
            ],
        }
    }

    pub fn validate(&self, style: &StripeStyle) -> ValidationResult {
        let violations: Vec<_> = self.rules.iter()
            .flat_map(|rule| rule.validate(style))
            .collect();
        let valid = !violations.iter().any(|v| v.severity == ViolationSeverity::Error);
        ValidationResult { valid, violations }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_clean() {
        let result = Validator::new().validate(&StripeStyle::default());
        assert!(result.valid);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_highlight_out_of_range() {
        let style = StripeStyle { highlight_index: 10, ..Default::default() };
        let result = Validator::new().validate(&style);
        assert!(!result.valid);
        assert!(result.error_summary().contains("line_count"));
    }

    #[test]
    fn test_full_width_last_line_rejected() {
        let style = StripeStyle { last_line_fraction: 1.0, ..Default::default() };
        let result = Validator::new().validate(&style);
        assert!(!result.valid);
        assert_eq!(result.violations[0].rule, "last_line_fraction");
    }

    #[test]
    fn test_stack_overflow_rejected() {
        let style = StripeStyle { line_count: 14, ..Default::default() };
        let result = Validator::new().validate(&style);
        assert!(!result.valid);
        assert!(result.violations.iter().any(|v| v.rule == "fit"));
    }

    #[test]
    fn test_overlap_is_warning_only() {
        let style = StripeStyle { spacing: 20, ..Default::default() };
        let result = Validator::new().validate(&style);
        assert!(result.valid);
        assert_eq!(result.warnings().count(), 1);
    }

    #[test]
    fn test_identical_colors_rejected() {
        let style = StripeStyle { accent: crate::style::GRAY, ..Default::default() };
        let result = Validator::new().validate(&style);
        assert!(result.has_errors());
    }
}
