//! Profiling Session — point a profiler at something honest
//!
//! Runs each catalog workload a few times at 1% time scale and prints a
//! summary table. Under a real profiler, drop the scaling and watch the
//! layered stall dominate wall-clock while the chatter dominates call counts.
//!
//! Run with: cargo run --example profiling_session -p lento --release

use lento::prelude::*;

fn main() {
    let scale = WorkloadScale {
        time_scale: 0.01,
        elements: 10_000,
        depth: 25,
    };
    let runs = 3;

    println!(
        "{:<18} {:>6} {:>12} {:>12} {:>12}",
        "workload", "runs", "mean", "min", "max"
    );

    for def in catalog() {
        let samples = sample_runs(runs, || (def.runner)(&scale));
        let Some(summary) = summarize(&samples) else {
            continue;
        };
        println!(
            "{:<18} {:>6} {:>10.2}ms {:>10.2}ms {:>10.2}ms",
            def.name,
            summary.runs,
            summary.mean_ns / 1e6,
            summary.min_ns as f64 / 1e6,
            summary.max_ns as f64 / 1e6,
        );
    }
}
