//! Input validation for planning requests.
//!
//! Checks user-supplied values against the catalog before they reach the
//! planner. Detects:
//! - Unknown categories
//! - Missing or out-of-range quantities
//! - Missing or out-of-range unit times
//! - Out-of-range line capacities
//! - Duplicate line names, or no lines at all
//! - Categories given more than once in raw `key=value` input
//!
//! The planner itself only guards against values it cannot compute with;
//! range policy lives here.

use std::collections::{BTreeSet, HashSet};

use crate::allocation::MAX_CAPACITY_EPSILON;
use crate::models::Catalog;
use crate::planner::PlanRequest;

/// Largest accepted per-unit processing time (hours).
pub const MAX_UNIT_TIME_HOURS: f64 = 24.0;

/// Largest accepted line capacity rating.
pub const MAX_LINE_CAPACITY: f64 = 2.0;

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
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A quantity or unit time refers to a category not in the catalog.
    UnknownCategory,
    /// A catalog category has no quantity.
    MissingQuantity,
    /// A quantity lies outside the category's declared range.
    QuantityOutOfRange,
    /// A catalog category has no unit time.
    MissingUnitTime,
    /// A unit time is not in (0, 24] hours.
    UnitTimeOutOfRange,
    /// A line capacity is not above the zero-capacity threshold, or above 2.0.
    CapacityOutOfRange,
    /// Two lines share a name.
    DuplicateLine,
    /// The request has no lines.
    NoLines,
    /// A category was given more than one value for the same field.
    DuplicateCategory,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a planning request against a catalog.
///
/// Unit times are optional as a whole (they can be generated), but if any
/// are given, every catalog category needs one.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &PlanRequest, catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    for id in request
        .quantities
        .keys()
        .chain(request.unit_times.keys())
        .collect::<BTreeSet<_>>()
    {
        if catalog.get(id).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCategory,
                format!("Unknown category '{id}'"),
            ));
        }
    }

    for category in catalog.iter() {
        match request.quantities.get(&category.id) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MissingQuantity,
                format!("Quantity of {} is required", category.name),
            )),
            Some(&q) if !category.accepts_quantity(q) => {
                let (min, max) = category.quantity_range;
                errors.push(ValidationError::new(
                    ValidationErrorKind::QuantityOutOfRange,
                    format!("Quantity of {} must be between {min} and {max}, got {q}", category.name),
                ));
            }
            Some(_) => {}
        }

        if request.unit_times.is_empty() {
            continue;
        }
        match request.unit_times.get(&category.id) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MissingUnitTime,
                format!("Unit time of {} is required", category.name),
            )),
            Some(&t) if !(t > 0.0 && t <= MAX_UNIT_TIME_HOURS) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnitTimeOutOfRange,
                    format!(
                        "Unit time of {} must be greater than 0 and at most {MAX_UNIT_TIME_HOURS} hours, got {t}",
                        category.name
                    ),
                ));
            }
            Some(_) => {}
        }
    }

    if request.lines.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoLines,
            "At least one production line is required",
        ));
    }

    let mut names = HashSet::new();
    for line in &request.lines {
        if !names.insert(line.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLine,
                format!("Duplicate line name: {}", line.name),
            ));
        }
        if !(line.capacity > MAX_CAPACITY_EPSILON && line.capacity <= MAX_LINE_CAPACITY) {
            errors.push(ValidationError::new(
                ValidationErrorKind::CapacityOutOfRange,
                format!(
                    "Capacity of Line {} must be greater than 0 and at most {MAX_LINE_CAPACITY}, got {}",
                    line.name, line.capacity
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks raw `(category, value)` pairs for repeated categories.
///
/// Maps in a [`PlanRequest`] keep only one value per category, so this runs
/// on the pairs before they are collected. `field` names the value in the
/// message, e.g. `"Quantity"`.
pub fn validate_unique_categories<V>(pairs: &[(String, V)], field: &str) -> ValidationResult {
    let mut seen = HashSet::new();
    let mut reported = BTreeSet::new();
    let mut errors = Vec::new();

    for (category, _) in pairs {
        if !seen.insert(category.as_str()) && reported.insert(category.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCategory,
                format!("{field} of '{category}' is given more than once"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
