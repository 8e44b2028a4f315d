use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid validation pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Regex compiled once when the rule is built; a compile error is kept and
/// reported on every check.
#[derive(Clone, Debug)]
struct Pattern {
    source: String,
    compiled: Result<Regex, String>,
}

impl Pattern {
    fn new(source: String) -> Self {
        let compiled = Regex::new(&source).map_err(|error| error.to_string());
        Self { source, compiled }
    }

    fn regex(&self) -> Result<&Regex, ValidationError> {
        self.compiled
            .as_ref()
            .map_err(|reason| ValidationError::InvalidPattern {
                pattern: self.source.clone(),
                reason: reason.clone(),
            })
    }
}

type CustomPredicate = Arc<dyn Fn(&str, &ValidationContext) -> bool + Send + Sync>;

/// Field being validated together with the rest of the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationContext {
    pub field: String,
    pub values: BTreeMap<String, String>,
}

impl ValidationContext {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn value_of(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }
}

/// Optional constraints on a single input value.
///
/// `min` and `max` compare numerically when the value parses as a finite
/// number, otherwise against its character count. An empty value only fails
/// `required`.
#[derive(Clone, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pattern: Option<Pattern>,
    pub custom: Option<CustomPredicate>,
    pub message: Option<String>,
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("pattern", &self.pattern_source())
            .field("custom", &self.custom.is_some())
            .field("message", &self.message)
            .finish()
    }
}

impl ValidationRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(Pattern::new(pattern.into()));
        self
    }

    pub fn pattern_source(&self) -> Option<&str> {
        self.pattern.as_ref().map(|pattern| pattern.source.as_str())
    }

    pub fn custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str, &ValidationContext) -> bool + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(predicate));
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Checks `value` and returns the failure message of the first
    /// constraint it breaks, or `None` when it passes.
    pub fn check(
        &self,
        value: &str,
        context: &ValidationContext,
    ) -> Result<Option<String>, ValidationError> {
        let failure = self.first_failure(value, context)?;
        Ok(failure.map(|default| self.message.clone().unwrap_or(default)))
    }

    fn first_failure(
        &self,
        value: &str,
        context: &ValidationContext,
    ) -> Result<Option<String>, ValidationError> {
        if value.trim().is_empty() {
            return Ok(self.required.then(|| "This field is required".to_string()));
        }

        // "NaN" and "inf" parse as f64 but never compare as out of range
        let measure = match value.trim().parse::<f64>() {
            Ok(number) if number.is_finite() => Measure::Number(number),
            _ => Measure::Length(value.chars().count() as f64),
        };
        if let Some(min) = self.min {
            if measure.value() < min {
                return Ok(Some(measure.too_small(min)));
            }
        }
        if let Some(max) = self.max {
            if measure.value() > max {
                return Ok(Some(measure.too_large(max)));
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.regex()?.is_match(value) {
                return Ok(Some("Invalid format".to_string()));
            }
        }

        if let Some(predicate) = &self.custom {
            if !predicate(value, context) {
                return Ok(Some("Invalid value".to_string()));
            }
        }

        Ok(None)
    }
}

enum Measure {
    Number(f64),
    Length(f64),
}

impl Measure {
    fn value(&self) -> f64 {
        match self {
            Measure::Number(value) | Measure::Length(value) => *value,
        }
    }

    fn too_small(&self, min: f64) -> String {
        match self {
            Measure::Number(_) => format!("Must be at least {min}"),
            Measure::Length(_) => format!("Must be at least {min} characters"),
        }
    }

    fn too_large(&self, max: f64) -> String {
        match self {
            Measure::Number(_) => format!("Must be at most {max}"),
            Measure::Length(_) => format!("Must be at most {max} characters"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            field_errors: BTreeMap::new(),
        }
    }
}

impl ValidationResult {
    pub fn push_error(&mut self, field: &str, message: String) {
        self.is_valid = false;
        self.errors.push(message.clone());
        self.field_errors
            .entry(field.to_string())
            .or_default()
            .push(message);
    }

    pub fn first_error_for(&self, field: &str) -> Option<&str> {
        self.field_errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }
}

/// Validates a single standalone value.
pub fn validate_value(
    field: &str,
    value: &str,
    rule: &ValidationRule,
) -> Result<ValidationResult, ValidationError> {
    let mut values = BTreeMap::new();
    values.insert(field.to_string(), value.to_string());
    validate_form([(field, rule)], &values)
}

/// Validates every `(field, rule)` pair against `values`; a missing value
/// counts as empty. Errors keep the order of `rules`.
pub fn validate_form<'a>(
    rules: impl IntoIterator<Item = (&'a str, &'a ValidationRule)>,
    values: &BTreeMap<String, String>,
) -> Result<ValidationResult, ValidationError> {
    let mut result = ValidationResult::default();
    for (field, rule) in rules {
        let context = ValidationContext {
            field: field.to_string(),
            values: values.clone(),
        };
        let value = context.value_of(field).unwrap_or_default();
        if let Some(message) = rule.check(value, &context)? {
            result.push_error(field, message);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ValidationContext {
        ValidationContext::new("field")
    }

    #[test]
    fn required_rejects_blank_values() {
        let rule = ValidationRule::new().required();
        assert_eq!(rule.check("   ", &ctx()).unwrap().as_deref(), Some("This field is required"));
        assert_eq!(rule.check("x", &ctx()).unwrap(), None);
    }

    #[test]
    fn empty_optional_value_skips_other_constraints() {
        let rule = ValidationRule::new().min(3.0).pattern("^[0-9]+$");
        assert_eq!(rule.check("", &ctx()).unwrap(), None);
    }

    #[test]
    fn min_max_compare_numbers_numerically() {
        let rule = ValidationRule::new().min(1.0).max(65535.0);
        assert_eq!(rule.check("0", &ctx()).unwrap().as_deref(), Some("Must be at least 1"));
        assert_eq!(rule.check("70000", &ctx()).unwrap().as_deref(), Some("Must be at most 65535"));
        assert_eq!(rule.check("5173", &ctx()).unwrap(), None);
    }

    #[test]
    fn non_finite_numbers_are_measured_as_text() {
        let rule = ValidationRule::new().min(1.0).max(10.0);
        assert_eq!(rule.check("NaN", &ctx()).unwrap(), None);
        let rule = ValidationRule::new().min(4.0).max(10.0);
        assert_eq!(
            rule.check("NaN", &ctx()).unwrap().as_deref(),
            Some("Must be at least 4 characters")
        );
        assert_eq!(
            rule.check("nan", &ctx()).unwrap().as_deref(),
            Some("Must be at least 4 characters")
        );
        let rule = ValidationRule::new().max(2.0);
        assert_eq!(
            rule.check("inf", &ctx()).unwrap().as_deref(),
            Some("Must be at most 2 characters")
        );
        assert_eq!(
            rule.check("infinity", &ctx()).unwrap().as_deref(),
            Some("Must be at most 2 characters")
        );
    }

    #[test]
    fn min_max_compare_text_by_length() {
        let rule = ValidationRule::new().min(3.0).max(5.0);
        assert_eq!(
            rule.check("ab", &ctx()).unwrap().as_deref(),
            Some("Must be at least 3 characters")
        );
        assert_eq!(
            rule.check("abcdef", &ctx()).unwrap().as_deref(),
            Some("Must be at most 5 characters")
        );
        // Character count, not byte count
        assert_eq!(rule.check("žluť", &ctx()).unwrap(), None);
    }

    #[test]
    fn pattern_must_match() {
        let rule = ValidationRule::new().pattern(r"^[a-z0-9-]+$");
        assert_eq!(rule.check("Berlin 1", &ctx()).unwrap().as_deref(), Some("Invalid format"));
        assert_eq!(rule.check("berlin-1", &ctx()).unwrap(), None);
    }

    #[test]
    fn invalid_pattern_is_an_error_not_a_failure() {
        let rule = ValidationRule::new().pattern("([");
        let error = rule.check("value", &ctx()).unwrap_err();
        assert!(matches!(error, ValidationError::InvalidPattern { ref pattern, .. } if pattern == "(["));
        // Reported on every check, not only the first
        assert_eq!(rule.check("other", &ctx()).unwrap_err(), error);
    }

    #[test]
    fn compiled_pattern_survives_clone() {
        let rule = ValidationRule::new().pattern(r"^[a-z]+$");
        let copy = rule.clone();
        assert_eq!(copy.pattern_source(), Some(r"^[a-z]+$"));
        assert_eq!(copy.check("abc", &ctx()).unwrap(), None);
        assert_eq!(copy.check("ABC", &ctx()).unwrap().as_deref(), Some("Invalid format"));
        assert_eq!(ValidationRule::new().pattern_source(), None);
    }

    #[test]
    fn custom_message_overrides_default() {
        let rule = ValidationRule::new().required().message("Site is mandatory");
        assert_eq!(rule.check("", &ctx()).unwrap().as_deref(), Some("Site is mandatory"));
    }

    #[test]
    fn custom_predicate_sees_other_fields() {
        let confirm = ValidationRule::new()
            .custom(|value, context| context.value_of("password") == Some(value))
            .message("Passwords do not match");
        let password = ValidationRule::new().required().min(4.0);

        let mut values = BTreeMap::new();
        values.insert("password".to_string(), "hunter2".to_string());
        values.insert("confirm".to_string(), "hunter3".to_string());

        let result = validate_form([("password", &password), ("confirm", &confirm)], &values).unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Passwords do not match".to_string()]);
        assert_eq!(result.first_error_for("confirm"), Some("Passwords do not match"));
        assert_eq!(result.first_error_for("password"), None);
    }

    #[test]
    fn form_errors_follow_rule_order_and_missing_counts_as_empty() {
        let required = ValidationRule::new().required();
        let short = ValidationRule::new().max(2.0);
        let mut values = BTreeMap::new();
        values.insert("code".to_string(), "abc".to_string());

        let result = validate_form([("name", &required), ("code", &short)], &values).unwrap();
        assert_eq!(
            result.errors,
            vec!["This field is required".to_string(), "Must be at most 2 characters".to_string()]
        );
        assert_eq!(result.field_errors.len(), 2);
    }

    #[test]
    fn validate_value_passes_clean_input() {
        let rule = ValidationRule::new().required().max(40.0);
        let result = validate_value("site", "berlin", &rule).unwrap();
        assert_eq!(result, ValidationResult::default());
    }
}
