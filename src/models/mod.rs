//! Batch planning domain models.
//!
//! Provides the value types passed between the workload calculator, the
//! allocation engine and the duration projector. All of them are immutable
//! once built and carry no shared state.
//!
//! # Domain Mappings
//!
//! | u-batch | Apparel | Food | Electronics |
//! |---------|---------|------|-------------|
//! | ProductCategory | Garment type | Product family | Board model |
//! | ProductionLine | Sewing line | Filling line | SMT line |
//! | Workload | Sewing hours | Fill hours | Placement hours |
//! | BatchResult | Lot plan | Production run | Build plan |

mod allocation;
mod category;
mod completion;
mod line;
mod result;

pub use allocation::{Allocation, CategoryAllocation};
pub use category::{Catalog, CategoryId, ProductCategory};
pub use completion::Completion;
pub use line::{Plant, ProductionLine};
pub use result::{BatchResult, CategoryResult};

use std::collections::BTreeMap;

/// Units to produce per category.
pub type Quantities = BTreeMap<CategoryId, u32>;

/// Per-unit processing time (hours) per category.
pub type UnitTimes = BTreeMap<CategoryId, f64>;
