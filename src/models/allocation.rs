//! Line allocation model.
//!
//! An allocation maps each category to the lines granted to it. It is built
//! incrementally by [`LineAllocator`](crate::allocation::LineAllocator) and
//! is read-only afterwards.

use serde::{Deserialize, Serialize};

use super::{CategoryId, ProductionLine};

/// Lines granted to one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    /// Category receiving the lines.
    pub category: CategoryId,
    /// Required processing hours of the category.
    pub workload_hours: f64,
    /// Granted lines, in grant order.
    pub lines: Vec<ProductionLine>,
    /// Sum of granted line capacities.
    pub capacity: f64,
}

impl CategoryAllocation {
    /// Creates an allocation with no lines.
    pub fn empty(category: CategoryId, workload_hours: f64) -> Self {
        Self {
            category,
            workload_hours,
            lines: Vec::new(),
            capacity: 0.0,
        }
    }

    /// Grants a line to this category.
    pub(crate) fn grant(&mut self, line: ProductionLine) {
        self.capacity += line.capacity;
        self.lines.push(line);
    }

    /// Whether no line was granted.
    pub fn has_lines(&self) -> bool {
        !self.lines.is_empty()
    }
}

/// A complete allocation of lines to categories.
///
/// Entries are kept in allocation order: descending workload, ties by
/// category id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Per-category grants.
    pub entries: Vec<CategoryAllocation>,
}

impl Allocation {
    /// Grant record for a category.
    pub fn get(&self, category: &CategoryId) -> Option<&CategoryAllocation> {
        self.entries.iter().find(|e| &e.category == category)
    }

    /// Iterates over all grant records.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryAllocation> {
        self.entries.iter()
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of granted lines.
    pub fn line_count(&self) -> usize {
        self.entries.iter().map(|e| e.lines.len()).sum()
    }

    /// Names of the lines granted to `category` (empty if unknown).
    pub fn line_names(&self, category: &CategoryId) -> Vec<&str> {
        self.get(category)
            .map(|e| e.lines.iter().map(|l| l.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Categories that received no capacity.
    pub fn starved(&self) -> impl Iterator<Item = &CategoryId> {
        self.entries
            .iter()
            .filter(|e| !e.has_lines())
            .map(|e| &e.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_accumulates_capacity() {
        let mut entry = CategoryAllocation::empty("jackets".into(), 400.0);
        assert!(!entry.has_lines());

        entry.grant(ProductionLine::new("B", 1.2));
        entry.grant(ProductionLine::new("A", 1.0));

        assert!((entry.capacity - 2.2).abs() < 1e-10);
        assert_eq!(entry.lines.len(), 2);
        assert_eq!(entry.lines[0].name, "B");
    }

    #[test]
    fn test_allocation_queries() {
        let mut jackets = CategoryAllocation::empty("jackets".into(), 400.0);
        jackets.grant(ProductionLine::new("B", 1.2));
        let shirts = CategoryAllocation::empty("shirts".into(), 150.0);

        let allocation = Allocation {
            entries: vec![jackets, shirts],
        };

        assert_eq!(allocation.category_count(), 2);
        assert_eq!(allocation.line_count(), 1);
        assert_eq!(allocation.line_names(&"jackets".into()), vec!["B"]);
        assert!(allocation.line_names(&"unknown".into()).is_empty());

        let starved: Vec<_> = allocation.starved().collect();
        assert_eq!(starved, vec![&CategoryId::from("shirts")]);
    }
}
