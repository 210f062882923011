//! Completion time value.
//!
//! A category whose assigned capacity is zero never finishes. That case is
//! carried as an explicit [`Completion::Unbounded`] marker rather than an
//! `f64` infinity so it cannot silently turn into NaN downstream.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Time until a workload is processed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Completion {
    /// Finishes after the given amount of time.
    Finite(f64),
    /// Never finishes: no capacity was assigned.
    Unbounded,
}

impl Completion {
    /// Zero duration.
    pub const ZERO: Completion = Completion::Finite(0.0);

    /// Whether this is the unbounded marker.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Completion::Unbounded)
    }

    /// Finite value, or `None` when unbounded.
    pub fn value(&self) -> Option<f64> {
        match self {
            Completion::Finite(v) => Some(*v),
            Completion::Unbounded => None,
        }
    }

    /// Value as `f64`, with `f64::INFINITY` for unbounded.
    pub fn as_f64(&self) -> f64 {
        self.value().unwrap_or(f64::INFINITY)
    }

    /// Divides a finite value by `divisor`; unbounded stays unbounded.
    pub fn scaled_down(&self, divisor: f64) -> Completion {
        match self {
            Completion::Finite(v) => Completion::Finite(v / divisor),
            Completion::Unbounded => Completion::Unbounded,
        }
    }
}

impl PartialEq for Completion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Completion {}

impl PartialOrd for Completion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Completion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Completion::Unbounded, Completion::Unbounded) => Ordering::Equal,
            (Completion::Unbounded, Completion::Finite(_)) => Ordering::Greater,
            (Completion::Finite(_), Completion::Unbounded) => Ordering::Less,
            (Completion::Finite(a), Completion::Finite(b)) => a.total_cmp(b),
        }
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::Finite(v) => write!(f, "{v}"),
            Completion::Unbounded => f.write_str("unbounded"),
        }
    }
}
