//! Projection results.
//!
//! [`BatchResult`] is the final output of one planning run: the allocation
//! together with per-category completion times and the overall batch
//! duration. All values are unrounded.

use serde::{Deserialize, Serialize};

use super::{CategoryId, Completion, ProductionLine};

/// Per-category projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Category.
    pub category: CategoryId,
    /// Required processing hours.
    pub workload_hours: f64,
    /// Lines assigned to the category.
    pub lines: Vec<ProductionLine>,
    /// Sum of assigned line capacities.
    pub capacity: f64,
    /// Hours until the category's workload is processed.
    pub completion_hours: Completion,
    /// Days until the category's workload is processed.
    pub completion_days: Completion,
}

impl CategoryResult {
    /// Whether the category never completes.
    pub fn is_unbounded(&self) -> bool {
        self.completion_hours.is_unbounded()
    }
}

/// Output of a full allocation and projection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Working hours per day used to derive day values.
    pub hours_per_day: f64,
    /// Per-category results, in allocation order.
    pub categories: Vec<CategoryResult>,
    /// Batch duration: the slowest category's completion hours.
    pub duration_hours: Completion,
    /// Batch duration in days.
    pub duration_days: Completion,
}

impl BatchResult {
    /// Result for a category.
    pub fn get(&self, category: &CategoryId) -> Option<&CategoryResult> {
        self.categories.iter().find(|c| &c.category == category)
    }

    /// Whether any category never completes.
    pub fn is_unbounded(&self) -> bool {
        self.duration_hours.is_unbounded()
    }

    /// Categories left without capacity.
    pub fn unbounded_categories(&self) -> Vec<&CategoryId> {
        self.categories
            .iter()
            .filter(|c| c.is_unbounded())
            .map(|c| &c.category)
            .collect()
    }

    /// The category that determines the batch duration.
    ///
    /// On equal completion times, the first in allocation order wins.
    pub fn bottleneck(&self) -> Option<&CategoryResult> {
        self.categories.iter().reduce(|best, c| {
            if c.completion_hours > best.completion_hours {
                c
            } else {
                best
            }
        })
    }

    /// Total number of assigned lines.
    pub fn line_count(&self) -> usize {
        self.categories.iter().map(|c| c.lines.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, hours: Completion) -> CategoryResult {
        CategoryResult {
            category: id.into(),
            workload_hours: 10.0,
            lines: Vec::new(),
            capacity: 0.0,
            completion_hours: hours,
            completion_days: hours.scaled_down(24.0),
        }
    }

    #[test]
    fn test_bottleneck_first_on_tie() {
        let batch = BatchResult {
            hours_per_day: 24.0,
            categories: vec![
                result("a", Completion::Finite(5.0)),
                result("b", Completion::Finite(9.0)),
                result("c", Completion::Finite(9.0)),
            ],
            duration_hours: Completion::Finite(9.0),
            duration_days: Completion::Finite(9.0 / 24.0),
        };
        assert_eq!(batch.bottleneck().unwrap().category.as_str(), "b");
        assert!(batch.unbounded_categories().is_empty());
        assert!(!batch.is_unbounded());
    }

    #[test]
    fn test_unbounded_categories() {
        let batch = BatchResult {
            hours_per_day: 24.0,
            categories: vec![
                result("a", Completion::Finite(5.0)),
                result("b", Completion::Unbounded),
            ],
            duration_hours: Completion::Unbounded,
            duration_days: Completion::Unbounded,
        };
        assert!(batch.is_unbounded());
        assert_eq!(batch.unbounded_categories(), vec![&CategoryId::from("b")]);
        assert_eq!(batch.bottleneck().unwrap().category.as_str(), "b");
    }

    #[test]
    fn test_empty_batch() {
        let batch = BatchResult {
            hours_per_day: 24.0,
            categories: Vec::new(),
            duration_hours: Completion::ZERO,
            duration_days: Completion::ZERO,
        };
        assert!(batch.bottleneck().is_none());
        assert_eq!(batch.line_count(), 0);
    }
}
