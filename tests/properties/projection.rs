//! Property tests for completion time projection.

use proptest::prelude::*;

use u_batch::allocation::LineAllocator;
use u_batch::models::Completion;
use u_batch::projection::DurationProjector;

use crate::strategies::{lines, workload};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Zero capacity means unbounded hours and days; anything else is a finite number.
    #[test]
    fn property_unbounded_marks_zero_capacity(
        workload in workload(),
        lines in lines(),
        hours_per_day in 1.0f64..=24.0,
    ) {
        let allocation = LineAllocator::new().allocate(&workload, &lines);
        let result = DurationProjector::new(hours_per_day).unwrap().project(&allocation);

        for c in &result.categories {
            if c.capacity > 0.0 {
                let hours = c.completion_hours.value();
                prop_assert!(hours.is_some_and(|h| h.is_finite() && h >= 0.0));
                let days = c.completion_days.value();
                prop_assert!(days.is_some_and(|d| d.is_finite()));
            } else {
                prop_assert!(c.completion_hours.is_unbounded());
                prop_assert!(c.completion_days.is_unbounded());
            }
        }
    }

    /// PROPERTY: Batch duration is the maximum category completion, not a sum or average.
    #[test]
    fn property_duration_is_max(workload in workload(), lines in lines()) {
        let allocation = LineAllocator::new().allocate(&workload, &lines);
        let result = DurationProjector::default().project(&allocation);

        let max = result
            .categories
            .iter()
            .map(|c| c.completion_hours)
            .max()
            .unwrap_or(Completion::ZERO);
        prop_assert_eq!(result.duration_hours, max);
        prop_assert!(result.categories.iter().all(|c| c.completion_hours <= result.duration_hours));
        prop_assert_eq!(result.duration_days, max.scaled_down(result.hours_per_day));
    }
}
