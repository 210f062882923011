//! Planner configuration.
//!
//! Loaded from TOML; every key is optional.
//!
//! ```toml
//! hours_per_day = 16.0
//! line_count = 6
//! capacity_epsilon = 1e-12
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::allocation::{DEFAULT_CAPACITY_EPSILON, MAX_CAPACITY_EPSILON};
use crate::error::{PlanError, PlanResult};
use crate::projection::DEFAULT_HOURS_PER_DAY;

/// Default number of generated lines.
pub const DEFAULT_LINE_COUNT: usize = 4;

/// Planner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Working hours per day; must be positive.
    pub hours_per_day: f64,
    /// Lines generated for simulated runs.
    pub line_count: usize,
    /// Granted capacity at or below this counts as none.
    pub capacity_epsilon: f64,
    /// Seed for generated inputs; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            line_count: DEFAULT_LINE_COUNT,
            capacity_epsilon: DEFAULT_CAPACITY_EPSILON,
            seed: None,
        }
    }
}

impl PlannerConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: &Path) -> PlanResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PlanError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| PlanError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Sets hours per day.
    pub fn with_hours_per_day(mut self, hours: f64) -> Self {
        self.hours_per_day = hours;
        self
    }

    /// Sets the generated line count.
    pub fn with_line_count(mut self, count: usize) -> Self {
        self.line_count = count;
        self
    }

    /// Sets the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks values the planner cannot run with.
    pub fn validate(&self) -> PlanResult<()> {
        if !(self.hours_per_day.is_finite() && self.hours_per_day > 0.0) {
            return Err(PlanError::InvalidHoursPerDay(self.hours_per_day));
        }
        if !(self.capacity_epsilon >= 0.0 && self.capacity_epsilon <= MAX_CAPACITY_EPSILON) {
            return Err(PlanError::InvalidEpsilon(self.capacity_epsilon));
        }
        Ok(())
    }
}
