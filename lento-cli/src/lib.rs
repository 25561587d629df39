#![warn(missing_docs)]
//! Lento CLI Library
//!
//! The `lento` binary: evaluate sequence terms, run catalog workloads, and
//! list what's available. Configuration comes from a discovered `lento.toml`
//! with CLI flags taking precedence.

mod config;
mod report;

pub use config::{LentoConfig, OutputConfig, WorkloadsConfig};
pub use report::{
    EvalReport, OutputFormat, ReportMeta, WorkloadReport, WorkloadResult, format_duration,
    render_eval, render_workloads, write_output,
};

use clap::{Parser, Subcommand};
use lento_core::{Evaluator, sample_runs, time};
use lento_stats::summarize;
use lento_workloads::{WorkloadScale, catalog};
use regex::Regex;
use std::path::PathBuf;

/// Lento CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "lento")]
#[command(author, version, about = "Lento - characterized practice workloads for profiling")]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: human, json (default: config, then human)
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the n-th sequence term
    Eval {
        /// Index to evaluate (negative values are rejected)
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Use the O(n) iterative variant instead of the naive recursion
        #[arg(long)]
        fast: bool,
    },
    /// Run catalog workloads matching a regex filter
    Workload {
        /// Regex filter on workload names
        #[arg(default_value = ".*")]
        filter: String,

        /// Runs per workload
        #[arg(long)]
        runs: Option<usize>,

        /// Multiplier applied to every stall duration
        #[arg(long)]
        time_scale: Option<f64>,

        /// Terms per summation workload
        #[arg(long)]
        elements: Option<usize>,

        /// Index for the naive sequence workload
        #[arg(long)]
        depth: Option<i64>,
    },
    /// List catalog workloads
    List,
}

/// Parse arguments and run the CLI. Entry point for the `lento` binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    // Discover lento.toml configuration (CLI flags override)
    let config = LentoConfig::discover().unwrap_or_default();

    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(config.output.format.as_str())
        .parse()
        .unwrap_or(OutputFormat::Human);

    match &cli.command {
        Commands::Eval { n, fast } => run_eval(*n, *fast, format, &cli),
        Commands::Workload {
            filter,
            runs,
            time_scale,
            elements,
            depth,
        } => {
            let scale = WorkloadScale {
                time_scale: time_scale.unwrap_or(config.workloads.time_scale),
                elements: elements.unwrap_or(config.workloads.elements),
                depth: depth.unwrap_or(config.workloads.depth),
            };
            let runs = runs.unwrap_or(config.workloads.runs);
            run_workloads(filter, runs, &scale, format, &cli)
        }
        Commands::List => {
            list_workloads();
            Ok(())
        }
    }
}

/// Initialize the tracing subscriber. Advisories arrive at warn level on the
/// `lento::advisory` target; a subscriber may already be installed when
/// tests drive `run_with_cli` repeatedly.
fn init_logging(verbose: bool) {
    let filter = if verbose { "lento=debug" } else { "lento=info" };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run_eval(n: i64, fast: bool, format: OutputFormat, cli: &Cli) -> anyhow::Result<()> {
    let eval = Evaluator::new();
    let timed = time(|| if fast { eval.term_fast(n) } else { eval.term(n) });
    let term = timed.value?;

    let report = EvalReport {
        meta: ReportMeta::now(),
        n,
        term: term.to_string(),
        strategy: if fast { "iterative" } else { "naive" },
        elapsed_ns: u64::try_from(timed.elapsed.as_nanos()).unwrap_or(u64::MAX),
    };

    let text = match format {
        OutputFormat::Human => render_eval(&report),
        OutputFormat::Json => serde_json::to_string_pretty(&report)? + "\n",
    };
    write_output(&text, cli.output.as_deref())
}

fn run_workloads(
    filter: &str,
    runs: usize,
    scale: &WorkloadScale,
    format: OutputFormat,
    cli: &Cli,
) -> anyhow::Result<()> {
    let re = Regex::new(filter).map_err(|e| anyhow::anyhow!("Invalid filter '{filter}': {e}"))?;

    let selected: Vec<_> = catalog().iter().filter(|w| re.is_match(w.name)).collect();
    if selected.is_empty() {
        println!("No workloads matched '{filter}'.");
        return Ok(());
    }

    let mut results = Vec::with_capacity(selected.len());
    for def in selected {
        let samples = sample_runs(runs, || (def.runner)(scale));
        if let Some(summary) = summarize(&samples) {
            results.push(WorkloadResult::new(def.name, def.kind.label(), &summary));
        }
    }

    let report = WorkloadReport {
        meta: ReportMeta::now(),
        results,
    };

    let text = match format {
        OutputFormat::Human => render_workloads(&report),
        OutputFormat::Json => serde_json::to_string_pretty(&report)? + "\n",
    };
    write_output(&text, cli.output.as_deref())
}

fn list_workloads() {
    println!("Lento workload catalog:");
    for def in catalog() {
        println!("  {:<18} [{:<5}] {}", def.name, def.kind.label(), def.description);
    }
    println!("{} workloads available.", catalog().len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_eval_defaults() {
        let cli = Cli::try_parse_from(["lento", "eval", "10"]).unwrap();
        match cli.command {
            Commands::Eval { n, fast } => {
                assert_eq!(n, 10);
                assert!(!fast);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(cli.format.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_eval_accepts_negative_index() {
        let cli = Cli::try_parse_from(["lento", "eval", "--fast", "-1"]).unwrap();
        match cli.command {
            Commands::Eval { n, fast } => {
                assert_eq!(n, -1);
                assert!(fast);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_workload_flags() {
        let cli = Cli::try_parse_from([
            "lento",
            "workload",
            "sine.*",
            "--runs",
            "3",
            "--time-scale",
            "0.01",
        ])
        .unwrap();
        match cli.command {
            Commands::Workload {
                filter,
                runs,
                time_scale,
                ..
            } => {
                assert_eq!(filter, "sine.*");
                assert_eq!(runs, Some(3));
                assert_eq!(time_scale, Some(0.01));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_eval_negative_index_surfaces_the_error() {
        let cli = Cli::try_parse_from(["lento", "eval", "-1"]).unwrap();
        let err = run_with_cli(cli).unwrap_err();
        assert!(err.to_string().contains("got -1"));
    }

    #[test]
    fn test_workload_run_end_to_end_json() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");

        let cli = Cli::try_parse_from([
            "lento",
            "workload",
            "sine_sum_serial",
            "--runs",
            "2",
            "--elements",
            "100",
            "--format",
            "json",
            "--output",
            out.to_str().unwrap(),
        ])
        .unwrap();
        run_with_cli(cli).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["name"], "sine_sum_serial");
        assert_eq!(results[0]["runs"], 2);
    }

    #[test]
    fn test_workload_rejects_bad_filter() {
        let cli = Cli::try_parse_from(["lento", "workload", "("]).unwrap();
        let err = run_with_cli(cli).unwrap_err();
        assert!(err.to_string().contains("Invalid filter"));
    }
}
