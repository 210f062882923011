//! Completion time projection and batch KPIs.
//!
//! # Algorithm
//!
//! [`DurationProjector`] divides each category's workload by the capacity
//! granted to it. A category without capacity is [`Completion::Unbounded`].
//! The batch duration is the maximum over categories, since categories run
//! concurrently on dedicated lines.
//!
//! # KPI
//!
//! [`BatchKpi`] derives reporting figures: total workload, plant capacity,
//! daily output and the bottleneck category.
//!
//! [`Completion::Unbounded`]: crate::models::Completion::Unbounded

mod kpi;
mod projector;

pub use kpi::BatchKpi;
pub use projector::{DurationProjector, DEFAULT_HOURS_PER_DAY};
