//! Batch performance indicators.
//!
//! Summarises a [`BatchResult`] for reporting.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total workload | Sum of required hours over all categories |
//! | Assigned capacity | Sum of the capacities of lines granted to a category |
//! | Daily output | Whole units per day a category's lines finish |
//! | Plant daily output | Sum of per-category daily output |
//! | Bottleneck | Category defining the batch duration |
//! | Unbounded | Categories left without capacity |

use std::collections::BTreeMap;

use crate::models::{BatchResult, CategoryId, UnitTimes};

/// Batch performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchKpi {
    /// Sum of required hours (h).
    pub total_workload_hours: f64,
    /// Sum of assigned line capacities.
    pub assigned_capacity: f64,
    /// Units per day per category.
    pub daily_output_by_category: BTreeMap<CategoryId, u64>,
    /// Units per day across the plant.
    pub plant_daily_output: u64,
    /// Category defining the batch duration.
    pub bottleneck: Option<CategoryId>,
    /// Categories that never complete.
    pub unbounded: Vec<CategoryId>,
}

impl BatchKpi {
    /// Computes indicators from a projection and the per-unit times it was
    /// built from.
    ///
    /// Daily output is summed line by line, each line truncated to whole
    /// units. A category without a unit time produces 0 units/day.
    pub fn calculate(result: &BatchResult, unit_times: &UnitTimes) -> Self {
        let mut daily_output_by_category: BTreeMap<CategoryId, u64> = BTreeMap::new();
        for category in &result.categories {
            let output: u64 = match unit_times.get(&category.category) {
                Some(&unit_time) => category
                    .lines
                    .iter()
                    .map(|l| l.daily_output(unit_time, result.hours_per_day))
                    .sum(),
                None => 0,
            };
            daily_output_by_category.insert(category.category.clone(), output);
        }

        Self {
            total_workload_hours: result.categories.iter().map(|c| c.workload_hours).sum(),
            assigned_capacity: result.categories.iter().map(|c| c.capacity).sum(),
            plant_daily_output: daily_output_by_category.values().sum(),
            daily_output_by_category,
            bottleneck: result.bottleneck().map(|c| c.category.clone()),
            unbounded: result.unbounded_categories().into_iter().cloned().collect(),
        }
    }

    /// Whether every category completes.
    pub fn is_feasible(&self) -> bool {
        self.unbounded.is_empty()
    }
}
