//! Report Types and Rendering
//!
//! Machine-readable JSON (via serde) and human terminal output for eval and
//! workload runs. Sequence terms serialize as decimal strings: they are u128
//! and JSON consumers routinely cap out at 64 bits.

use chrono::{DateTime, Utc};
use lento_stats::RunSummary;
use serde::Serialize;
use std::path::Path;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    Human,
    /// Prettified JSON.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Report metadata block.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    /// Tool name.
    pub tool: &'static str,
    /// Tool version.
    pub version: &'static str,
    /// UTC timestamp of the run.
    pub generated_at: DateTime<Utc>,
}

impl ReportMeta {
    /// Metadata stamped with the current time.
    pub fn now() -> Self {
        Self {
            tool: "lento",
            version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now(),
        }
    }
}

/// Result of one term evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    /// Metadata block.
    pub meta: ReportMeta,
    /// Requested index.
    pub n: i64,
    /// Computed term, as a decimal string.
    pub term: String,
    /// Which variant ran: "naive" or "iterative".
    pub strategy: &'static str,
    /// Wall-clock nanoseconds the evaluation took.
    pub elapsed_ns: u64,
}

/// Summary of one workload's repeated runs.
#[derive(Debug, Clone, Serialize)]
pub struct WorkloadResult {
    /// Workload name.
    pub name: &'static str,
    /// Performance character label.
    pub kind: &'static str,
    /// Number of runs.
    pub runs: usize,
    /// Mean run time in nanoseconds.
    pub mean_ns: f64,
    /// Median run time in nanoseconds.
    pub median_ns: f64,
    /// Sample standard deviation in nanoseconds.
    pub std_dev_ns: f64,
    /// Fastest run in nanoseconds.
    pub min_ns: u64,
    /// Slowest run in nanoseconds.
    pub max_ns: u64,
    /// 90th percentile in nanoseconds.
    pub p90_ns: f64,
    /// Total time across runs in nanoseconds.
    pub total_ns: u64,
}

impl WorkloadResult {
    /// Attach a summary to a workload's identity.
    pub fn new(name: &'static str, kind: &'static str, summary: &RunSummary) -> Self {
        Self {
            name,
            kind,
            runs: summary.runs,
            mean_ns: summary.mean_ns,
            median_ns: summary.median_ns,
            std_dev_ns: summary.std_dev_ns,
            min_ns: summary.min_ns,
            max_ns: summary.max_ns,
            p90_ns: summary.p90_ns,
            total_ns: summary.total_ns,
        }
    }
}

/// Full workload-run report.
#[derive(Debug, Clone, Serialize)]
pub struct WorkloadReport {
    /// Metadata block.
    pub meta: ReportMeta,
    /// One entry per workload that ran.
    pub results: Vec<WorkloadResult>,
}

/// Format nanoseconds with an auto-selected unit.
pub fn format_duration(ns: f64) -> String {
    if ns < 1_000.0 {
        format!("{ns:.0} ns")
    } else if ns < 1_000_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else if ns < 1_000_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else {
        format!("{:.2} s", ns / 1_000_000_000.0)
    }
}

/// Render an eval report for the terminal.
pub fn render_eval(report: &EvalReport) -> String {
    format!(
        "term({}) = {}  [{}, {}]\n",
        report.n,
        report.term,
        report.strategy,
        format_duration(report.elapsed_ns as f64)
    )
}

/// Render a workload report for the terminal.
pub fn render_workloads(report: &WorkloadReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<18} {:<6} {:>5} {:>12} {:>12} {:>12} {:>12}\n",
        "workload", "kind", "runs", "mean", "median", "p90", "max"
    ));
    for r in &report.results {
        out.push_str(&format!(
            "{:<18} {:<6} {:>5} {:>12} {:>12} {:>12} {:>12}\n",
            r.name,
            r.kind,
            r.runs,
            format_duration(r.mean_ns),
            format_duration(r.median_ns),
            format_duration(r.p90_ns),
            format_duration(r.max_ns as f64),
        ));
    }
    out
}

/// Write rendered output to a file, or stdout when no path is given.
pub fn write_output(text: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            println!("Report written to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
