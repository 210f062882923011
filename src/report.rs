//! Presentation of planning results.
//!
//! [`BatchReport`] is the serialisable view of a run (used for `--json`
//! output), [`render_table`] the console view. Values are rounded here and
//! nowhere else: hours to 2 decimals, days to 3. Unbounded completion times
//! become `null` with `"unbounded": true`.

use serde::Serialize;
use std::fmt::Write;

use crate::models::{BatchResult, Catalog, Completion, Plant};
use crate::planner::PlanRequest;
use crate::projection::BatchKpi;

const BANNER_WIDTH: usize = 96;

/// One category row of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    /// Category id.
    pub category: String,
    /// Display name.
    pub name: String,
    /// Units produced.
    pub quantity: u32,
    /// Per-unit processing time (h).
    pub unit_time: Option<f64>,
    /// Required hours.
    pub workload_hours: f64,
    /// Assigned lines as `name:capacity`.
    pub lines: Vec<String>,
    /// Summed capacity of assigned lines.
    pub capacity: f64,
    /// Units per day on the assigned lines.
    pub daily_output: u64,
    /// Completion hours, `None` if unbounded.
    pub hours: Option<f64>,
    /// Completion days, `None` if unbounded.
    pub days: Option<f64>,
    /// Whether the category never completes.
    pub unbounded: bool,
}

/// Serialisable summary of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// Working hours per day.
    pub hours_per_day: f64,
    /// Number of available lines.
    pub line_count: usize,
    /// Available lines as `name:capacity`.
    pub lines: Vec<String>,
    /// Sum of all line capacities.
    pub plant_capacity: f64,
    /// Units per day across the plant.
    pub plant_daily_output: u64,
    /// Sum of required hours.
    pub total_workload_hours: f64,
    /// Per-category rows, in allocation order.
    pub categories: Vec<CategoryRow>,
    /// Category defining the batch duration.
    pub bottleneck: Option<String>,
    /// Batch duration in hours, `None` if unbounded.
    pub duration_hours: Option<f64>,
    /// Batch duration in days, `None` if unbounded.
    pub duration_days: Option<f64>,
    /// Whether some category never completes.
    pub unbounded: bool,
}

impl BatchReport {
    /// Builds a report from a result and the request that produced it.
    pub fn new(result: &BatchResult, request: &PlanRequest, catalog: &Catalog) -> Self {
        let kpi = BatchKpi::calculate(result, &request.unit_times);
        let plant = Plant::new(request.lines.clone());

        let categories = result
            .categories
            .iter()
            .map(|c| CategoryRow {
                category: c.category.to_string(),
                name: catalog.display_name(&c.category).to_string(),
                quantity: request.quantities.get(&c.category).copied().unwrap_or(0),
                unit_time: request.unit_times.get(&c.category).copied(),
                workload_hours: round_to(c.workload_hours, 2),
                lines: c.lines.iter().map(|l| l.label()).collect(),
                capacity: round_to(c.capacity, 2),
                daily_output: kpi
                    .daily_output_by_category
                    .get(&c.category)
                    .copied()
                    .unwrap_or(0),
                hours: rounded(c.completion_hours, 2),
                days: rounded(c.completion_days, 3),
                unbounded: c.is_unbounded(),
            })
            .collect();

        Self {
            hours_per_day: result.hours_per_day,
            line_count: plant.line_count(),
            lines: plant.lines.iter().map(|l| l.label()).collect(),
            plant_capacity: round_to(plant.total_capacity(), 2),
            plant_daily_output: kpi.plant_daily_output,
            total_workload_hours: round_to(kpi.total_workload_hours, 2),
            categories,
            bottleneck: kpi.bottleneck.map(|c| catalog.display_name(&c).to_string()),
            duration_hours: rounded(result.duration_hours, 2),
            duration_days: rounded(result.duration_days, 3),
            unbounded: result.is_unbounded(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Rounds `value` to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn rounded(value: Completion, decimals: i32) -> Option<f64> {
    value.value().map(|v| round_to(v, decimals))
}

fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "unbounded".to_string(),
    }
}

/// Renders a report as a console table.
pub fn render_table(report: &BatchReport) -> String {
    let mut out = String::new();
    let title = "· BATCH PRODUCTION PLAN ·";
    let width = BANNER_WIDTH;

    let _ = writeln!(out, "╔{}╗", "═".repeat(width));
    let _ = writeln!(out, " {title:^width$}");
    let _ = writeln!(out, "╚{}╝", "═".repeat(width));

    let _ = writeln!(out, "\nQuantities (units):");
    for row in &report.categories {
        let _ = writeln!(out, "  • {:20}: {:4}", row.name, row.quantity);
    }

    let _ = writeln!(out, "\nUnit processing times (h/unit):");
    for row in &report.categories {
        let unit_time = row
            .unit_time
            .map(|t| format!("{t:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "  • {:20}: {unit_time} h/unit", row.name);
    }

    let _ = writeln!(out, "\nAvailable lines (name:capacity):");
    let _ = writeln!(out, "  • Line count: {}", report.line_count);
    let _ = writeln!(out, "  • Lines: {}", report.lines.join(", "));
    let _ = writeln!(out, "  • Plant capacity: {:.2}", report.plant_capacity);
    let _ = writeln!(out, "  • Plant daily output: {} units/day", report.plant_daily_output);

    render_detail(&mut out, report);

    let _ = writeln!(out, "\nSummary:");
    let _ = writeln!(
        out,
        "  • Batch duration (hours): {}",
        fmt_opt(report.duration_hours, 2)
    );
    let _ = writeln!(
        out,
        "  • Batch duration (days):  {}",
        fmt_opt(report.duration_days, 3)
    );
    if let Some(bottleneck) = &report.bottleneck {
        let _ = writeln!(out, "  • Bottleneck: {bottleneck}");
    }
    if report.unbounded {
        let _ = writeln!(
            out,
            "  ! Some categories have no assigned capacity and never complete"
        );
    }

    out
}

fn render_detail(out: &mut String, report: &BatchReport) {
    let headers = [
        "Category",
        "Workload (h)",
        "Assigned lines (name:cap)",
        "Capacity",
        "Total hours",
        "Total days",
    ];

    let rows: Vec<[String; 6]> = report
        .categories
        .iter()
        .map(|r| {
            let lines = if r.lines.is_empty() {
                "-".to_string()
            } else {
                r.lines.join(", ")
            };
            [
                r.name.clone(),
                format!("{:.2}", r.workload_hours),
                lines,
                format!("{:.2}", r.capacity),
                fmt_opt(r.hours, 2),
                fmt_opt(r.days, 3),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let header = headers
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{h:^w$}"))
        .collect::<Vec<_>>()
        .join(" | ");

    let _ = writeln!(out, "\nAssignments and times per category:");
    let _ = writeln!(out, "  {header}");
    let _ = writeln!(out, "  {}", "-".repeat(header.chars().count()));

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                // Text columns left-aligned, numbers right-aligned
                if i == 0 || i == 2 {
                    format!("{cell:<w$}")
                } else {
                    format!("{cell:>w$}")
                }
            })
            .collect();
        let _ = writeln!(out, "  {}", cells.join(" | "));
    }
}
