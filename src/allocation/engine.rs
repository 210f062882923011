//! Greedy line allocation engine.

use std::cmp::Ordering;

use tracing::{debug, trace};

use super::Score;
use crate::models::{Allocation, CategoryAllocation, ProductionLine};
use crate::workload::Workload;

/// Default threshold below which granted capacity counts as zero.
pub const DEFAULT_CAPACITY_EPSILON: f64 = 1e-12;

/// Largest accepted zero-capacity threshold. Any real line must exceed it,
/// otherwise a granted category would still score as unassigned.
pub const MAX_CAPACITY_EPSILON: f64 = 1e-6;

/// Assigns production lines to categories in proportion to workload.
///
/// # Algorithm
/// 1. Order categories by descending workload, ties by category id.
/// 2. Order lines by descending capacity, ties by line name.
/// 3. For each line in that order, grant it to the category with the
///    highest [`Score`]; equal scores go to the larger workload, then to
///    the earlier category in step-1 order.
///
/// Both orders are total, so the result depends only on the inputs.
///
/// # Complexity
/// O(l * c) where l = lines, c = categories.
#[derive(Debug, Clone)]
pub struct LineAllocator {
    capacity_epsilon: f64,
}

impl LineAllocator {
    /// Creates an allocator with the default capacity epsilon.
    pub fn new() -> Self {
        Self {
            capacity_epsilon: DEFAULT_CAPACITY_EPSILON,
        }
    }

    /// Sets the zero-capacity threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.capacity_epsilon = epsilon;
        self
    }

    /// Current zero-capacity threshold.
    pub fn epsilon(&self) -> f64 {
        self.capacity_epsilon
    }

    /// Distributes `lines` over the categories of `workload`.
    ///
    /// Never fails. With no lines every category ends up empty; with no
    /// categories there is nothing to grant lines to and the allocation is
    /// empty.
    pub fn allocate(&self, workload: &Workload, lines: &[ProductionLine]) -> Allocation {
        let mut entries: Vec<CategoryAllocation> = workload
            .iter()
            .map(|(category, hours)| CategoryAllocation::empty(category.clone(), hours))
            .collect();
        entries.sort_by(|a, b| {
            b.workload_hours
                .total_cmp(&a.workload_hours)
                .then_with(|| a.category.cmp(&b.category))
        });

        let mut order: Vec<&ProductionLine> = lines.iter().collect();
        order.sort_by(|a, b| {
            b.capacity
                .total_cmp(&a.capacity)
                .then_with(|| a.name.cmp(&b.name))
        });

        if entries.is_empty() {
            debug!(lines = lines.len(), "no categories, lines left unassigned");
            return Allocation { entries };
        }

        for line in order {
            let (idx, score) = self.select(&entries);
            let entry = &mut entries[idx];
            trace!(
                line = %line.name,
                capacity = line.capacity,
                category = %entry.category,
                ?score,
                "line granted"
            );
            entry.grant(line.clone());
        }

        Allocation { entries }
    }

    /// Scores a category's current grant.
    pub fn score(&self, entry: &CategoryAllocation) -> Score {
        Score::of(entry.workload_hours, entry.capacity, self.capacity_epsilon)
    }

    /// Index and score of the most under-served category.
    ///
    /// `entries` must be non-empty and in allocation order.
    fn select(&self, entries: &[CategoryAllocation]) -> (usize, Score) {
        let mut best = 0;
        let mut best_score = self.score(&entries[0]);

        for (idx, entry) in entries.iter().enumerate().skip(1) {
            let score = self.score(entry);
            let better = match score.cmp(&best_score) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => entry.workload_hours > entries[best].workload_hours,
            };
            if better {
                best = idx;
                best_score = score;
            }
        }

        (best, best_score)
    }
}

impl Default for LineAllocator {
    fn default() -> Self {
        Self::new()
    }
}
