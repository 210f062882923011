//! Randomised planning inputs.
//!
//! Every function takes the random source explicitly, so a seeded RNG gives
//! reproducible runs.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_batch::generator::generate_request;
//! use u_batch::models::Catalog;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let request = generate_request(&Catalog::garments(), 4, &mut rng);
//! assert_eq!(request.lines.len(), 4);
//! assert_eq!(request.quantities.len(), 4);
//! ```

use rand::Rng;

use crate::models::{Catalog, ProductionLine, Quantities, UnitTimes};
use crate::planner::PlanRequest;

/// Capacity bands, cycled by line index.
const CAPACITY_BANDS: [(f64, f64); 4] = [(0.7, 1.0), (0.8, 1.1), (0.9, 1.2), (1.0, 1.3)];

/// Draws a quantity per catalog category, uniform in its declared range.
pub fn generate_quantities<R: Rng>(catalog: &Catalog, rng: &mut R) -> Quantities {
    catalog
        .iter()
        .map(|c| {
            let (min, max) = c.quantity_range;
            (c.id.clone(), rng.random_range(min..=max.max(min)))
        })
        .collect()
}

/// Draws a per-unit time per catalog category, uniform in its declared
/// range and rounded to 2 decimals.
pub fn generate_unit_times<R: Rng>(catalog: &Catalog, rng: &mut R) -> UnitTimes {
    catalog
        .iter()
        .map(|c| {
            let (min, max) = c.unit_time_range;
            (c.id.clone(), uniform_rounded(min, max, rng))
        })
        .collect()
}

/// Creates `count` lines named `A`, `B`, ….
///
/// Line `i` draws its capacity from band `i mod 4` of
/// `[0.7, 1.0]`, `[0.8, 1.1]`, `[0.9, 1.2]`, `[1.0, 1.3]`, rounded to 2 decimals.
pub fn generate_lines<R: Rng>(count: usize, rng: &mut R) -> Vec<ProductionLine> {
    (0..count)
        .map(|i| {
            let (min, max) = CAPACITY_BANDS[i % CAPACITY_BANDS.len()];
            ProductionLine::new(line_label(i), uniform_rounded(min, max, rng))
        })
        .collect()
}

/// Generates a full request for `catalog` with `line_count` lines.
pub fn generate_request<R: Rng>(
    catalog: &Catalog,
    line_count: usize,
    rng: &mut R,
) -> PlanRequest {
    PlanRequest {
        quantities: generate_quantities(catalog, rng),
        unit_times: generate_unit_times(catalog, rng),
        lines: generate_lines(line_count, rng),
    }
}

/// Spreadsheet-style label: 0 → `A`, 25 → `Z`, 26 → `AA`.
pub fn line_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

fn uniform_rounded<R: Rng>(min: f64, max: f64, rng: &mut R) -> f64 {
    let value = if max > min {
        rng.random_range(min..=max)
    } else {
        min
    };
    // Rounding may step just outside the band; clamp back in.
    ((value * 100.0).round() / 100.0).clamp(min, max.max(min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_quantities_in_range() {
        let catalog = Catalog::garments();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let quantities = generate_quantities(&catalog, &mut rng);
            assert_eq!(quantities.len(), 4);
            for (id, &q) in &quantities {
                assert!(catalog.get(id).unwrap().accepts_quantity(q));
            }
        }
    }

    #[test]
    fn test_unit_times_in_range_and_rounded() {
        let catalog = Catalog::garments();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            for (id, &t) in &generate_unit_times(&catalog, &mut rng) {
                assert!(catalog.get(id).unwrap().accepts_unit_time(t));
                assert!(((t * 100.0).round() - t * 100.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_lines_in_band() {
        let mut rng = StdRng::seed_from_u64(1);
        let lines = generate_lines(8, &mut rng);

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0].name, "A");
        assert_eq!(lines[7].name, "H");
        for (i, line) in lines.iter().enumerate() {
            let (min, max) = CAPACITY_BANDS[i % 4];
            assert!(line.capacity >= min && line.capacity <= max);
            assert!(line.capacity >= 0.7 && line.capacity <= 1.3);
        }
    }

    #[test]
    fn test_same_seed_same_request() {
        let catalog = Catalog::garments();
        let a = generate_request(&catalog, 4, &mut StdRng::seed_from_u64(99));
        let b = generate_request(&catalog, 4, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_line_labels() {
        assert_eq!(line_label(0), "A");
        assert_eq!(line_label(25), "Z");
        assert_eq!(line_label(26), "AA");
        assert_eq!(line_label(27), "AB");
        assert_eq!(line_label(701), "ZZ");
        assert_eq!(line_label(702), "AAA");
    }

    #[test]
    fn test_zero_lines() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate_lines(0, &mut rng).is_empty());
    }
}
