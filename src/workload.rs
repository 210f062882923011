//! Workload calculation.
//!
//! Converts quantities and per-unit processing times into the total
//! processing hours each category needs: `workload = quantity × unit_time`.
//!
//! Range checks against the catalog belong to [`validation`](crate::validation).
//! This module only rejects values the engine cannot work with at all
//! (negative or non-finite hours).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{PlanError, PlanResult};
use crate::models::{CategoryId, Quantities, UnitTimes};

/// Required processing hours per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    hours: BTreeMap<CategoryId, f64>,
}

impl Workload {
    /// Computes workload hours from quantities and unit times.
    ///
    /// Every category present in either map appears in the result. A
    /// category without a quantity counts as zero units; a category with a
    /// quantity but no unit time is an error.
    ///
    /// # Example
    /// ```
    /// use u_batch::models::{Quantities, UnitTimes};
    /// use u_batch::workload::Workload;
    ///
    /// let quantities = Quantities::from([("jackets".into(), 50)]);
    /// let unit_times = UnitTimes::from([("jackets".into(), 4.0)]);
    /// let workload = Workload::compute(&quantities, &unit_times).unwrap();
    /// assert_eq!(workload.hours(&"jackets".into()), Some(200.0));
    /// ```
    pub fn compute(quantities: &Quantities, unit_times: &UnitTimes) -> PlanResult<Self> {
        let mut hours = BTreeMap::new();

        for (category, &unit_time) in unit_times {
            if !unit_time.is_finite() || unit_time < 0.0 {
                return Err(PlanError::InvalidUnitTime {
                    category: category.to_string(),
                    hours: unit_time,
                });
            }
            let quantity = quantities.get(category).copied().unwrap_or(0);
            hours.insert(category.clone(), f64::from(quantity) * unit_time);
        }

        if let Some(missing) = quantities.keys().find(|c| !unit_times.contains_key(*c)) {
            return Err(PlanError::MissingUnitTime(missing.to_string()));
        }

        Ok(Self { hours })
    }

    /// Builds a workload directly from hours.
    pub fn from_hours<I, K>(entries: I) -> PlanResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<CategoryId>,
    {
        let mut hours = BTreeMap::new();
        for (category, h) in entries {
            let category = category.into();
            if !h.is_finite() || h < 0.0 {
                return Err(PlanError::NegativeWorkload {
                    category: category.to_string(),
                    hours: h,
                });
            }
            hours.insert(category, h);
        }
        Ok(Self { hours })
    }

    /// Hours required by a category.
    pub fn hours(&self, category: &CategoryId) -> Option<f64> {
        self.hours.get(category).copied()
    }

    /// Iterates over `(category, hours)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, f64)> {
        self.hours.iter().map(|(c, &h)| (c, h))
    }

    /// Sum over all categories.
    pub fn total_hours(&self) -> f64 {
        self.hours.values().sum()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    /// Whether there are no categories.
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    /// Number of categories with nonzero demand.
    pub fn demanding_count(&self) -> usize {
        self.hours.values().filter(|&&h| h > 0.0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_basic() {
        let quantities = Quantities::from([("jackets".into(), 50), ("tshirts".into(), 100)]);
        let unit_times = UnitTimes::from([("jackets".into(), 4.0), ("tshirts".into(), 1.0)]);

        let w = Workload::compute(&quantities, &unit_times).unwrap();
        assert_eq!(w.len(), 2);
        assert!((w.hours(&"jackets".into()).unwrap() - 200.0).abs() < 1e-10);
        assert!((w.hours(&"tshirts".into()).unwrap() - 100.0).abs() < 1e-10);
        assert!((w.total_hours() - 300.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_quantity_kept() {
        let quantities = Quantities::from([("jackets".into(), 0)]);
        let unit_times = UnitTimes::from([("jackets".into(), 4.0), ("felpe".into(), 2.0)]);

        let w = Workload::compute(&quantities, &unit_times).unwrap();
        assert_eq!(w.hours(&"jackets".into()), Some(0.0));
        // No quantity given at all still yields an entry
        assert_eq!(w.hours(&"felpe".into()), Some(0.0));
        assert_eq!(w.demanding_count(), 0);
    }

    #[test]
    fn test_missing_unit_time() {
        let quantities = Quantities::from([("jackets".into(), 10)]);
        let err = Workload::compute(&quantities, &UnitTimes::new()).unwrap_err();
        assert!(matches!(err, PlanError::MissingUnitTime(c) if c == "jackets"));
    }

    #[test]
    fn test_negative_unit_time() {
        let quantities = Quantities::from([("jackets".into(), 10)]);
        let unit_times = UnitTimes::from([("jackets".into(), -1.0)]);
        let err = Workload::compute(&quantities, &unit_times).unwrap_err();
        assert!(matches!(err, PlanError::InvalidUnitTime { .. }));
    }

    #[test]
    fn test_from_hours_rejects_negative() {
        assert!(Workload::from_hours([("a", 1.0), ("b", 0.0)]).is_ok());
        let err = Workload::from_hours([("a", -0.5)]).unwrap_err();
        assert!(matches!(err, PlanError::NegativeWorkload { .. }));
        assert!(Workload::from_hours([("a", f64::NAN)]).is_err());
    }

    #[test]
    fn test_empty() {
        let w = Workload::compute(&Quantities::new(), &UnitTimes::new()).unwrap();
        assert!(w.is_empty());
        assert_eq!(w.total_hours(), 0.0);
    }
}
