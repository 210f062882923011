//! Workload-proportional line allocation.
//!
//! Distributes a fixed set of production lines across categories so that
//! each category's granted capacity tracks its workload.
//!
//! # Algorithm
//!
//! Greedy, one line at a time, heaviest line first. Each line goes to the
//! category with the highest [`Score`]: a category with no capacity yet
//! outranks every other, otherwise the one with the largest
//! `workload / assigned_capacity` ratio wins. It never rebalances and never
//! looks ahead, so the split is deterministic and proportional but not
//! guaranteed to minimise the makespan.
//!
//! # Usage
//!
//! ```
//! use u_batch::allocation::LineAllocator;
//! use u_batch::models::ProductionLine;
//! use u_batch::workload::Workload;
//!
//! let workload = Workload::from_hours([("jackets", 400.0), ("shirts", 150.0)]).unwrap();
//! let lines = vec![ProductionLine::new("A", 1.0), ProductionLine::new("B", 1.2)];
//!
//! let allocation = LineAllocator::new().allocate(&workload, &lines);
//! assert_eq!(allocation.line_names(&"jackets".into()), vec!["B"]);
//! assert_eq!(allocation.line_names(&"shirts".into()), vec!["A"]);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5 (parallel machines)
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

mod engine;

pub use engine::{LineAllocator, DEFAULT_CAPACITY_EPSILON, MAX_CAPACITY_EPSILON};

use std::cmp::Ordering;

/// Urgency of granting the next line to a category.
///
/// Totally ordered: [`Score::Unassigned`] outranks every ratio, ratios
/// compare numerically. Higher = more under-served.
#[derive(Debug, Clone, Copy)]
pub enum Score {
    /// Ratio of workload to capacity already granted.
    Ratio(f64),
    /// No capacity granted yet.
    Unassigned,
}

impl Score {
    /// Scores a category with `workload` hours and `capacity` granted so far.
    ///
    /// Capacity within `epsilon` of zero counts as unassigned, regardless of
    /// the workload (a zero-workload category still claims its first line).
    pub fn of(workload: f64, capacity: f64, epsilon: f64) -> Self {
        if capacity.abs() <= epsilon {
            Score::Unassigned
        } else {
            Score::Ratio(workload / capacity)
        }
    }

    /// Whether the category has no capacity yet.
    pub fn is_unassigned(&self) -> bool {
        matches!(self, Score::Unassigned)
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Score::Unassigned, Score::Unassigned) => Ordering::Equal,
            (Score::Unassigned, Score::Ratio(_)) => Ordering::Greater,
            (Score::Ratio(_), Score::Unassigned) => Ordering::Less,
            (Score::Ratio(a), Score::Ratio(b)) => a.total_cmp(b),
        }
    }
}
