//! Batch duration estimation for multi-category production.
//!
//! Several product categories, each with its own per-unit processing time,
//! share a pool of production lines of different capacity. This crate
//! distributes the lines across categories in proportion to their workload
//! and projects how long each category, and the batch as a whole, takes.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProductCategory`, `Catalog`, `ProductionLine`,
//!   `Allocation`, `Completion`, `BatchResult`
//! - **`workload`**: Required hours per category (`quantity × unit_time`)
//! - **`allocation`**: Greedy workload-proportional line allocation
//! - **`projection`**: Completion times, batch duration and KPIs
//! - **`planner`**: End-to-end run from a `PlanRequest`
//! - **`generator`**: Seeded random inputs
//! - **`validation`**: Range checks for user-supplied inputs
//! - **`report`**: Rounded JSON and console views
//!
//! # Data Flow
//!
//! `Catalog → Workload → LineAllocator → DurationProjector → BatchReport`
//!
//! The core is synchronous and pure: no I/O, no global state.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

pub mod allocation;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod models;
pub mod planner;
pub mod projection;
pub mod report;
pub mod validation;
pub mod workload;

pub use error::{PlanError, PlanResult};
