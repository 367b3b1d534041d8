//! Report assembly: turns ranked tasks and forecasts into text.

use chrono::{DateTime, Local};
use forge_core::{ForecastResult, Task};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Machine-readable bundle for `--json` output.
#[derive(Debug, Serialize)]
pub struct ReportBundle<'a> {
    pub ranked: &'a [Task],
    pub average_score: f64,
    pub forecast: &'a ForecastResult,
}

/// One-line rendering of a ranked task.
pub fn render_task(task: &Task) -> String {
    format!(
        "{} → Score: {:.3} | Priority: {} | Deadline: {}h | Risk: {} | Cost: ${}",
        task.id(),
        task.score(),
        task.priority(),
        task.deadline_hours(),
        task.risk(),
        task.cost()
    )
}

/// The persisted/printed prioritization report.
pub fn render_report(top: &[Task], average: f64, generated_at: DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str("Forge Prioritization Report\n");
    let _ = writeln!(out, "Generated on: {}", generated_at.format("%Y-%m-%d %H:%M"));
    out.push('\n');
    out.push_str("Ranked Tasks:\n");
    for (i, task) in top.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, render_task(task));
    }
    out.push('\n');
    let _ = writeln!(out, "Average Score: {:.3}", average);
    out
}

/// The demand-forecast section, one line per category in input order.
pub fn render_forecast(result: &ForecastResult) -> String {
    let mut out = String::new();
    out.push_str("Demand Forecast (3-day moving average):\n\n");
    for c in &result.categories {
        let history = c
            .history
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            out,
            "{} → Demand: {}  | Forecast (3-day MA): {:.2}",
            c.category, history, c.forecast
        );
    }
    out.push('\n');
    let _ = writeln!(out, "Highest projected demand: {}", result.top_category);
    out
}

/// Write the report to disk. One call, handle scoped to the write.
///
/// Callers downgrade failure to a warning: the console copy already went out,
/// so a dead disk must not kill the run.
pub fn persist(path: &Path, report: &str) -> std::io::Result<()> {
    std::fs::write(path, report)
}
