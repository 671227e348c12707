//! Input validation for catalogs and quiz answers.
//!
//! Checks structural integrity of product records before they are served or
//! scored, and completeness of quiz answers before scoring. Detects:
//! - Empty identifiers and display fields
//! - Duplicate IDs within a category
//! - Records filed under the wrong category
//! - Negative or inverted price ranges
//! - Non-positive monitor measurements
//! - Required multi-select answers left empty
//!
//! Every check runs to completion so callers see all problems at once.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Category, MonitorProduct, Product};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two products in one category share the same ID.
    DuplicateId,
    /// A required text field is blank.
    EmptyField,
    /// A record's `category` differs from the file it was loaded from.
    CategoryMismatch,
    /// Price range is negative or its bounds are inverted.
    InvalidPriceRange,
    /// A physical measurement is zero or negative.
    InvalidMeasurement,
    /// A required multi-select answer has no selection.
    MissingSelection,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the products of one category file.
///
/// Checks:
/// 1. `id`, `name` and `brand` are non-blank
/// 2. No duplicate IDs
/// 3. Every record's category equals `expected`
/// 4. Price bounds are non-negative and `min <= max`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_products<A>(expected: Category, products: &[Product<A>]) -> ValidationResult {
    let mut errors = Vec::new();
    check_products(expected, products, &mut errors);
    into_result(errors)
}

/// Validates monitor records: the shared product checks plus positive screen
/// size and refresh rates.
pub fn validate_monitors(products: &[MonitorProduct]) -> ValidationResult {
    let mut errors = Vec::new();
    check_products(Category::Monitor, products, &mut errors);

    for p in products {
        let attrs = &p.core_attributes;
        if attrs.monitor_size_inches <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidMeasurement,
                format!(
                    "Monitor '{}' has non-positive size {}",
                    p.id, attrs.monitor_size_inches
                ),
            ));
        }
        if attrs.monitor_native_refresh_hz <= 0.0 || attrs.monitor_max_refresh_hz <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidMeasurement,
                format!("Monitor '{}' has non-positive refresh rate", p.id),
            ));
        }
    }

    into_result(errors)
}

/// Records an error when a required multi-select answer is empty.
pub(crate) fn require_selection<T>(key: &str, values: &[T], errors: &mut Vec<ValidationError>) {
    if values.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingSelection,
            format!("'{key}' requires at least one selection"),
        ));
    }
}

/// Renders at most `max` errors, one per line, followed by a count of the
/// remainder.
pub fn summarize(errors: &[ValidationError], max: usize) -> String {
    let mut lines: Vec<String> = errors
        .iter()
        .take(max)
        .map(|e| format!("- {}", e.message))
        .collect();

    if errors.len() > max {
        lines.push(format!("... and {} more issues", errors.len() - max));
    }

    lines.join("\n")
}

fn check_products<A>(
    expected: Category,
    products: &[Product<A>],
    errors: &mut Vec<ValidationError>,
) {
    let mut ids = HashSet::new();

    for p in products {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyField,
                format!("{expected} product with name '{}' has an empty id", p.name),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {expected} ID: {}", p.id),
            ));
        }

        for (field, value) in [("name", &p.name), ("brand", &p.brand)] {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyField,
                    format!("Product '{}' has an empty {field}", p.id),
                ));
            }
        }

        if p.category != expected {
            errors.push(ValidationError::new(
                ValidationErrorKind::CategoryMismatch,
                format!(
                    "Product '{}' is a {} but was listed under {expected}",
                    p.id, p.category
                ),
            ));
        }

        let [min, max] = p.price_range_usd;
        if min < 0.0 || max < 0.0 || min > max {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPriceRange,
                format!("Product '{}' has invalid price range [{min}, {max}]", p.id),
            ));
        }
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MonitorAttributes, MouseProduct};

    fn sample_mice() -> Vec<MouseProduct> {
        vec![
            Product::new("viper-v3-pro", Category::Mouse)
                .with_name("Viper V3 Pro")
                .with_brand("Razer")
                .with_price(140.0, 160.0),
            Product::new("g-pro-x-superlight-2", Category::Mouse)
                .with_name("G Pro X Superlight 2")
                .with_brand("Logitech")
                .with_price(129.0, 159.0),
        ]
    }

    #[test]
    fn test_valid_products() {
        assert!(validate_products(Category::Mouse, &sample_mice()).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut mice = sample_mice();
        mice[1].id = mice[0].id.clone();

        let errors = validate_products(Category::Mouse, &mice).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_empty_fields() {
        let mice = vec![MouseProduct::new("", Category::Mouse).with_price(10.0, 20.0)];

        let errors = validate_products(Category::Mouse, &mice).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::EmptyField)
                .count(),
            3
        );
    }

    #[test]
    fn test_category_mismatch() {
        let errors = validate_products(Category::Keyboard, &sample_mice()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::CategoryMismatch));
    }

    #[test]
    fn test_inverted_price_range() {
        let mut mice = sample_mice();
        mice[0].price_range_usd = [200.0, 100.0];
        mice[1].price_range_usd = [-5.0, 10.0];

        let errors = validate_products(Category::Mouse, &mice).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidPriceRange)
                .count(),
            2
        );
    }

    #[test]
    fn test_monitor_measurements() {
        let attrs = MonitorAttributes {
            monitor_size_inches: 0.0,
            monitor_max_refresh_hz: -1.0,
            ..MonitorAttributes::default()
        };
        let monitors = vec![MonitorProduct::new("m1", Category::Monitor)
            .with_name("M1")
            .with_brand("Acme")
            .with_price(200.0, 250.0)
            .with_attributes(attrs)];

        let errors = validate_monitors(&monitors).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidMeasurement));
    }

    #[test]
    fn test_require_selection() {
        let mut errors = Vec::new();
        require_selection::<String>("grip-style", &[], &mut errors);
        require_selection("budget", &["budget"][..], &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("grip-style"));
    }

    #[test]
    fn test_summarize_truncates() {
        let errors: Vec<ValidationError> = (0..13)
            .map(|i| ValidationError::new(ValidationErrorKind::EmptyField, format!("issue {i}")))
            .collect();

        let summary = summarize(&errors, 10);
        assert_eq!(summary.lines().count(), 11);
        assert!(summary.starts_with("- issue 0"));
        assert!(summary.ends_with("... and 3 more issues"));

        assert_eq!(summarize(&errors[..2], 10), "- issue 0\n- issue 1");
    }
}
