//! Error types for batch planning.
//!
//! Only contract violations are errors. Degenerate allocations (a category
//! left without capacity, no lines at all) are reported through
//! [`Completion::Unbounded`](crate::models::Completion) in the result instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for planning operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors raised by the planner and its configuration layer.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Working hours per day must be a positive, finite number.
    #[error("hours per day must be positive and finite, got {0}")]
    InvalidHoursPerDay(f64),

    /// Capacity epsilon is outside `[0, MAX_CAPACITY_EPSILON]`.
    #[error("capacity epsilon must be between 0 and {max}, got {0}", max = crate::allocation::MAX_CAPACITY_EPSILON)]
    InvalidEpsilon(f64),

    /// A category's required hours are negative or not a number.
    #[error("workload for category '{category}' must be non-negative, got {hours}")]
    NegativeWorkload { category: String, hours: f64 },

    /// A per-unit processing time is negative or not a number.
    #[error("unit time for category '{category}' must be non-negative, got {hours}")]
    InvalidUnitTime { category: String, hours: f64 },

    /// A category has a quantity but no per-unit processing time.
    #[error("no unit time given for category '{0}'")]
    MissingUnitTime(String),

    /// A production line has a negative or non-finite capacity.
    #[error("capacity of line '{line}' must be non-negative and finite, got {capacity}")]
    InvalidCapacity { line: String, capacity: f64 },

    /// Configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`PlannerConfig`](crate::config::PlannerConfig).
    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_hours_per_day() {
        let err = PlanError::InvalidHoursPerDay(0.0);
        assert_eq!(err.to_string(), "hours per day must be positive and finite, got 0");
    }

    #[test]
    fn test_display_missing_unit_time() {
        let err = PlanError::MissingUnitTime("jackets".into());
        assert_eq!(err.to_string(), "no unit time given for category 'jackets'");
    }

    #[test]
    fn test_display_invalid_capacity() {
        let err = PlanError::InvalidCapacity {
            line: "A".into(),
            capacity: -1.5,
        };
        assert_eq!(
            err.to_string(),
            "capacity of line 'A' must be non-negative and finite, got -1.5"
        );
    }
}
