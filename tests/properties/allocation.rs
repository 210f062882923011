//! Property tests for line allocation.

use proptest::prelude::*;

use u_batch::allocation::LineAllocator;

use crate::strategies::{lines, workload};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Same inputs give the same allocation, whatever the input line order.
    #[test]
    fn property_allocation_deterministic(workload in workload(), lines in lines()) {
        let allocator = LineAllocator::new();
        let first = allocator.allocate(&workload, &lines);
        let second = allocator.allocate(&workload, &lines);
        prop_assert_eq!(&first, &second);

        let mut reversed = lines.clone();
        reversed.reverse();
        prop_assert_eq!(&first, &allocator.allocate(&workload, &reversed));
    }

    /// PROPERTY: Every line is granted exactly once when there is a category to grant it to.
    #[test]
    fn property_lines_conserved(workload in workload(), lines in lines()) {
        let allocation = LineAllocator::new().allocate(&workload, &lines);
        prop_assert_eq!(allocation.category_count(), workload.len());

        let mut granted: Vec<&str> = allocation
            .iter()
            .flat_map(|e| e.lines.iter().map(|l| l.name.as_str()))
            .collect();
        granted.sort_unstable();

        let mut expected: Vec<&str> = if workload.is_empty() {
            Vec::new()
        } else {
            lines.iter().map(|l| l.name.as_str()).collect()
        };
        expected.sort_unstable();

        prop_assert_eq!(granted, expected);

        for entry in allocation.iter() {
            let sum: f64 = entry.lines.iter().map(|l| l.capacity).sum();
            prop_assert!((entry.capacity - sum).abs() < 1e-9);
        }
    }

    /// PROPERTY: No category gets a second line while another still has none.
    #[test]
    fn property_every_category_served_first(workload in workload(), lines in lines()) {
        let allocation = LineAllocator::new().allocate(&workload, &lines);
        let served = allocation.iter().filter(|e| e.has_lines()).count();
        let expected = lines.len().min(workload.len());
        prop_assert_eq!(served, expected);
    }

    /// PROPERTY: A heavier category receives its first line no later than a lighter one.
    #[test]
    fn property_first_grant_follows_workload(workload in workload(), lines in lines()) {
        let allocation = LineAllocator::new().allocate(&workload, &lines);

        let mut order: Vec<_> = lines.iter().collect();
        order.sort_by(|a, b| b.capacity.total_cmp(&a.capacity).then_with(|| a.name.cmp(&b.name)));
        let position = |name: &str| order.iter().position(|l| l.name == name);

        let first_grant: Vec<(f64, usize)> = allocation
            .iter()
            .map(|e| {
                let pos = e
                    .lines
                    .first()
                    .and_then(|l| position(&l.name))
                    .unwrap_or(usize::MAX);
                (e.workload_hours, pos)
            })
            .collect();

        for &(wa, pa) in &first_grant {
            for &(wb, pb) in &first_grant {
                if wa > wb {
                    prop_assert!(pa <= pb, "heavier ({wa}) first at {pa}, lighter ({wb}) at {pb}");
                }
            }
        }
    }
}
