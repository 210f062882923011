//! Product category model.
//!
//! A category is a distinct product type with its own per-unit processing
//! time and production quantity characteristics. Categories are created once
//! from a catalog and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable category key.
///
/// Used for all map lookups and as the final tie-break when workloads are
/// equal, so that allocation order never depends on hashing or insertion order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a category key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for CategoryId {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A product category with its declared input ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    /// Stable identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Valid per-unit processing time (hours), inclusive.
    pub unit_time_range: (f64, f64),
    /// Valid production quantity (units), inclusive.
    pub quantity_range: (u32, u32),
}

impl ProductCategory {
    /// Creates a category whose display name equals its key.
    pub fn new(id: impl Into<String>) -> Self {
        let id: String = id.into();
        Self {
            name: id.clone(),
            id: CategoryId(id),
            unit_time_range: (0.0, f64::MAX),
            quantity_range: (0, u32::MAX),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the valid per-unit processing time range (hours).
    pub fn with_unit_time_range(mut self, min: f64, max: f64) -> Self {
        self.unit_time_range = (min, max);
        self
    }

    /// Sets the valid quantity range (units).
    pub fn with_quantity_range(mut self, min: u32, max: u32) -> Self {
        self.quantity_range = (min, max);
        self
    }

    /// Whether `quantity` lies in the declared range.
    pub fn accepts_quantity(&self, quantity: u32) -> bool {
        let (min, max) = self.quantity_range;
        (min..=max).contains(&quantity)
    }

    /// Whether `hours` lies in the declared unit time range.
    pub fn accepts_unit_time(&self, hours: f64) -> bool {
        let (min, max) = self.unit_time_range;
        hours >= min && hours <= max
    }
}

/// The fixed set of categories known to a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<ProductCategory>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category. A category with an existing id replaces it.
    pub fn with_category(mut self, category: ProductCategory) -> Self {
        match self.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
        self
    }

    /// Default garment catalog.
    pub fn garments() -> Self {
        Self::new()
            .with_category(
                ProductCategory::new("jackets")
                    .with_name("Winter Jackets")
                    .with_unit_time_range(3.5, 8.0)
                    .with_quantity_range(30, 120),
            )
            .with_category(
                ProductCategory::new("tshirts")
                    .with_name("T-Shirts")
                    .with_unit_time_range(0.5, 1.8)
                    .with_quantity_range(100, 250),
            )
            .with_category(
                ProductCategory::new("sweatshirts")
                    .with_name("Sweatshirts")
                    .with_unit_time_range(1.5, 4.0)
                    .with_quantity_range(65, 190),
            )
            .with_category(
                ProductCategory::new("trousers")
                    .with_name("Trousers")
                    .with_unit_time_range(1.8, 4.5)
                    .with_quantity_range(50, 170),
            )
    }

    /// Looks up a category by id.
    pub fn get(&self, id: &CategoryId) -> Option<&ProductCategory> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Display name for `id`, falling back to the key itself.
    pub fn display_name<'a>(&'a self, id: &'a CategoryId) -> &'a str {
        self.get(id).map(|c| c.name.as_str()).unwrap_or(id.as_str())
    }

    /// Categories in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductCategory> {
        self.categories.iter()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_builder() {
        let c = ProductCategory::new("jackets")
            .with_name("Winter Jackets")
            .with_unit_time_range(3.5, 8.0)
            .with_quantity_range(30, 120);

        assert_eq!(c.id.as_str(), "jackets");
        assert_eq!(c.name, "Winter Jackets");
        assert!(c.accepts_quantity(30));
        assert!(c.accepts_quantity(120));
        assert!(!c.accepts_quantity(121));
        assert!(c.accepts_unit_time(3.5));
        assert!(!c.accepts_unit_time(8.01));
    }

    #[test]
    fn test_category_id_ordering() {
        let mut ids = vec![CategoryId::from("shirts"), CategoryId::from("jackets")];
        ids.sort();
        assert_eq!(ids[0].as_str(), "jackets");
    }

    #[test]
    fn test_garment_catalog() {
        let catalog = Catalog::garments();
        assert_eq!(catalog.len(), 4);

        let tshirts = catalog.get(&"tshirts".into()).unwrap();
        assert_eq!(tshirts.quantity_range, (100, 250));
        assert_eq!(catalog.display_name(&"trousers".into()), "Trousers");
        assert_eq!(catalog.display_name(&"unknown".into()), "unknown");
    }

    #[test]
    fn test_catalog_replaces_same_id() {
        let catalog = Catalog::new()
            .with_category(ProductCategory::new("a").with_quantity_range(1, 2))
            .with_category(ProductCategory::new("a").with_quantity_range(5, 6));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&"a".into()).unwrap().quantity_range, (5, 6));
    }
}
