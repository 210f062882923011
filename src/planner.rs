//! End-to-end batch planning.
//!
//! # Algorithm
//!
//! 1. Check line capacities.
//! 2. Compute workload (`quantity × unit_time`) per category.
//! 3. Allocate lines with [`LineAllocator`].
//! 4. Project completion times with [`DurationProjector`].
//!
//! Each call works on its own inputs and holds no shared state, so a
//! planner can be used from several threads at once.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::allocation::LineAllocator;
use crate::config::PlannerConfig;
use crate::error::{PlanError, PlanResult};
use crate::models::{BatchResult, CategoryId, ProductionLine, Quantities, UnitTimes};
use crate::projection::DurationProjector;
use crate::workload::Workload;

/// Input of one planning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Units to produce per category.
    pub quantities: Quantities,
    /// Per-unit processing time (hours) per category.
    pub unit_times: UnitTimes,
    /// Available production lines.
    pub lines: Vec<ProductionLine>,
}

impl PlanRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets quantity and unit time for a category.
    pub fn with_category(
        mut self,
        category: impl Into<CategoryId>,
        quantity: u32,
        unit_time: f64,
    ) -> Self {
        let category = category.into();
        self.quantities.insert(category.clone(), quantity);
        self.unit_times.insert(category, unit_time);
        self
    }

    /// Adds a production line.
    pub fn with_line(mut self, name: impl Into<String>, capacity: f64) -> Self {
        self.lines.push(ProductionLine::new(name, capacity));
        self
    }

    /// Replaces the production lines.
    pub fn with_lines(mut self, lines: Vec<ProductionLine>) -> Self {
        self.lines = lines;
        self
    }
}

/// Runs workload calculation, allocation and projection.
///
/// # Example
///
/// ```
/// use u_batch::planner::{BatchPlanner, PlanRequest};
///
/// let request = PlanRequest::new()
///     .with_category("jackets", 100, 4.0)
///     .with_category("shirts", 150, 1.0)
///     .with_line("A", 1.0)
///     .with_line("B", 1.2);
///
/// let result = BatchPlanner::default().plan(&request).unwrap();
/// assert_eq!(result.line_count(), 2);
/// assert!(!result.is_unbounded());
/// ```
#[derive(Debug, Clone)]
pub struct BatchPlanner {
    allocator: LineAllocator,
    projector: DurationProjector,
}

impl BatchPlanner {
    /// Creates a planner from a configuration.
    ///
    /// # Errors
    /// Any [`PlannerConfig::validate`] failure.
    pub fn new(config: &PlannerConfig) -> PlanResult<Self> {
        config.validate()?;
        Ok(Self {
            allocator: LineAllocator::new().with_epsilon(config.capacity_epsilon),
            projector: DurationProjector::new(config.hours_per_day)?
                .with_epsilon(config.capacity_epsilon),
        })
    }

    /// Working hours per day.
    pub fn hours_per_day(&self) -> f64 {
        self.projector.hours_per_day()
    }

    /// Plans one batch.
    ///
    /// Categories left without capacity are reported as unbounded in the
    /// result, not as an error.
    pub fn plan(&self, request: &PlanRequest) -> PlanResult<BatchResult> {
        for line in &request.lines {
            if !line.capacity.is_finite() || line.capacity < 0.0 {
                return Err(PlanError::InvalidCapacity {
                    line: line.name.clone(),
                    capacity: line.capacity,
                });
            }
        }

        let workload = Workload::compute(&request.quantities, &request.unit_times)?;
        if request.lines.len() < workload.demanding_count() {
            warn!(
                lines = request.lines.len(),
                categories = workload.demanding_count(),
                "fewer lines than categories with demand"
            );
        }

        let allocation = self.allocator.allocate(&workload, &request.lines);
        let result = self.projector.project(&allocation);

        let unbounded = result.unbounded_categories();
        if !unbounded.is_empty() {
            let names: Vec<&str> = unbounded.iter().map(|c| c.as_str()).collect();
            warn!(categories = ?names, "categories without capacity never complete");
        }

        info!(
            categories = result.categories.len(),
            lines = result.line_count(),
            total_workload_hours = workload.total_hours(),
            duration_hours = %result.duration_hours,
            "batch planned"
        );

        Ok(result)
    }
}

impl Default for BatchPlanner {
    fn default() -> Self {
        Self {
            allocator: LineAllocator::new(),
            projector: DurationProjector::default(),
        }
    }
}
