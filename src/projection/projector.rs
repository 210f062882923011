//! Completion time projection.

use tracing::debug;

use crate::allocation::DEFAULT_CAPACITY_EPSILON;
use crate::error::{PlanError, PlanResult};
use crate::models::{Allocation, BatchResult, CategoryResult, Completion};

/// Default working hours per day (continuous operation).
pub const DEFAULT_HOURS_PER_DAY: f64 = 24.0;

/// Turns an allocation into per-category and batch completion times.
///
/// For each category, `hours = workload / capacity` when capacity exceeds
/// the zero-capacity threshold and [`Completion::Unbounded`] otherwise; `days = hours /
/// hours_per_day`. Categories run concurrently on their own lines, so the
/// batch takes as long as its slowest category.
///
/// Days are derived from the unrounded hours. Nothing is rounded here.
///
/// The threshold must match the one the
/// [`LineAllocator`](crate::allocation::LineAllocator) scored with, so a
/// category the engine saw as unassigned is never given a finite time.
///
/// # Example
/// ```
/// use u_batch::projection::DurationProjector;
///
/// assert!(DurationProjector::new(24.0).is_ok());
/// assert!(DurationProjector::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DurationProjector {
    hours_per_day: f64,
    capacity_epsilon: f64,
}

impl DurationProjector {
    /// Creates a projector.
    ///
    /// # Errors
    /// [`PlanError::InvalidHoursPerDay`] unless `hours_per_day` is positive
    /// and finite.
    pub fn new(hours_per_day: f64) -> PlanResult<Self> {
        if !(hours_per_day.is_finite() && hours_per_day > 0.0) {
            return Err(PlanError::InvalidHoursPerDay(hours_per_day));
        }
        Ok(Self {
            hours_per_day,
            capacity_epsilon: DEFAULT_CAPACITY_EPSILON,
        })
    }

    /// Sets the zero-capacity threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.capacity_epsilon = epsilon;
        self
    }

    /// Working hours per day.
    pub fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    /// Completion hours for `workload_hours` on `capacity`.
    pub fn completion_hours(&self, workload_hours: f64, capacity: f64) -> Completion {
        if capacity > self.capacity_epsilon {
            Completion::Finite(workload_hours / capacity)
        } else {
            Completion::Unbounded
        }
    }

    /// Projects every category of `allocation` and the batch duration.
    pub fn project(&self, allocation: &Allocation) -> BatchResult {
        let categories: Vec<CategoryResult> = allocation
            .iter()
            .map(|entry| {
                let completion_hours = self.completion_hours(entry.workload_hours, entry.capacity);
                CategoryResult {
                    category: entry.category.clone(),
                    workload_hours: entry.workload_hours,
                    lines: entry.lines.clone(),
                    capacity: entry.capacity,
                    completion_hours,
                    completion_days: completion_hours.scaled_down(self.hours_per_day),
                }
            })
            .collect();

        let duration_hours = categories
            .iter()
            .map(|c| c.completion_hours)
            .max()
            .unwrap_or(Completion::ZERO);

        debug!(
            categories = categories.len(),
            duration_hours = %duration_hours,
            "projection complete"
        );

        BatchResult {
            hours_per_day: self.hours_per_day,
            categories,
            duration_hours,
            duration_days: duration_hours.scaled_down(self.hours_per_day),
        }
    }
}

impl Default for DurationProjector {
    fn default() -> Self {
        Self {
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            capacity_epsilon: DEFAULT_CAPACITY_EPSILON,
        }
    }
}
