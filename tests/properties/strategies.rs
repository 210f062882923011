//! Shared input strategies.

use proptest::prelude::*;

use u_batch::generator::line_label;
use u_batch::models::ProductionLine;
use u_batch::workload::Workload;

/// Up to 6 categories `c0..`, workload in [0, 1000) hours.
pub fn workload() -> impl Strategy<Value = Workload> {
    proptest::collection::vec(0.0f64..1000.0, 0..=6).prop_map(|hours| {
        Workload::from_hours(
            hours
                .into_iter()
                .enumerate()
                .map(|(i, h)| (format!("c{i}"), h)),
        )
        .expect("generated hours are non-negative")
    })
}

/// Up to 8 uniquely named lines, capacity in [0.1, 2.0).
pub fn lines() -> impl Strategy<Value = Vec<ProductionLine>> {
    proptest::collection::vec(0.1f64..2.0, 0..=8).prop_map(|caps| {
        caps.into_iter()
            .enumerate()
            .map(|(i, c)| ProductionLine::new(line_label(i), c))
            .collect()
    })
}
