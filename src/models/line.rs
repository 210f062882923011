//! Production line model.
//!
//! A line is a production resource with a capacity rating (an efficiency
//! coefficient against a nominal line, 1.0 = nominal). Lines are created once
//! per run and assigned to exactly one category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A capacity-rated production line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionLine {
    /// Line label (e.g. "A").
    pub name: String,
    /// Capacity rating (1.0 = nominal, <1.0 = slower, >1.0 = faster).
    pub capacity: f64,
}

impl ProductionLine {
    /// Creates a line.
    pub fn new(name: impl Into<String>, capacity: f64) -> Self {
        Self {
            name: name.into(),
            capacity,
        }
    }

    /// Whole units this line finishes per day at the given per-unit time.
    ///
    /// Returns 0 when `unit_time` is not positive.
    pub fn daily_output(&self, unit_time: f64, hours_per_day: f64) -> u64 {
        if unit_time <= 0.0 || !unit_time.is_finite() {
            return 0;
        }
        let units = hours_per_day * self.capacity / unit_time;
        if units.is_finite() && units > 0.0 {
            units.floor() as u64
        } else {
            0
        }
    }

    /// `name:capacity` label used by reports.
    pub fn label(&self) -> String {
        format!("{}:{:.2}", self.name, self.capacity)
    }
}

impl fmt::Display for ProductionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {} (capacity {:.2})", self.name, self.capacity)
    }
}

/// The set of lines available to one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    /// Lines in input order.
    pub lines: Vec<ProductionLine>,
}

impl Plant {
    /// Creates a plant from its lines.
    pub fn new(lines: Vec<ProductionLine>) -> Self {
        Self { lines }
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line capacities.
    pub fn total_capacity(&self) -> f64 {
        self.lines.iter().map(|l| l.capacity).sum()
    }
}
