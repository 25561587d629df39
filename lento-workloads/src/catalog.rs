//! Workload Catalog
//!
//! Static registry of every workload, so drivers can list, look up, and run
//! them uniformly. Runners take a [`WorkloadScale`] and return an f64
//! checksum — the value exists to keep the optimizer honest, nothing more.

use crate::sleep::layered_stall;
use crate::sums::{alloc_scaled, combined_sums, sine_sum_parallel, sine_sum_serial};
use lento_core::Evaluator;

/// Performance character of a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadKind {
    /// Time disappears into `thread::sleep`.
    Sleep,
    /// Time disappears into computation.
    Cpu,
    /// Time disappears into the allocator.
    Alloc,
    /// A bit of everything.
    Mixed,
}

impl WorkloadKind {
    /// Lowercase label for display and reports.
    pub fn label(self) -> &'static str {
        match self {
            WorkloadKind::Sleep => "sleep",
            WorkloadKind::Cpu => "cpu",
            WorkloadKind::Alloc => "alloc",
            WorkloadKind::Mixed => "mixed",
        }
    }
}

/// Scaling knobs applied to every catalog run.
///
/// Defaults give the full demonstration timings (a layered stall of roughly
/// 14 s, 100 000-term sums, a million-element churn buffer). Tests and demos
/// dial `time_scale` down to run in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadScale {
    /// Multiplier applied to every stall duration (clamped at 0).
    pub time_scale: f64,
    /// Number of terms for summation workloads.
    pub elements: usize,
    /// Index handed to the naive sequence evaluation.
    pub depth: i64,
}

impl Default for WorkloadScale {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            elements: crate::sums::DEFAULT_ELEMENTS,
            depth: 30,
        }
    }
}

impl WorkloadScale {
    /// Apply `time_scale` to a stall duration.
    pub fn scaled(&self, stall: std::time::Duration) -> std::time::Duration {
        stall.mul_f64(self.time_scale.max(0.0))
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct WorkloadDef {
    /// Unique name, used for lookup and filtering.
    pub name: &'static str,
    /// One-line description for listings.
    pub description: &'static str,
    /// Performance character.
    pub kind: WorkloadKind,
    /// Run the workload once at the given scale.
    pub runner: fn(&WorkloadScale) -> f64,
}

static CATALOG: [WorkloadDef; 6] = [
    WorkloadDef {
        name: "sequence_naive",
        description: "unmemoized recursive sequence evaluation at the configured depth",
        kind: WorkloadKind::Cpu,
        runner: |scale| {
            // Validated index; the catalog never asks for negative depths,
            // but a misconfigured one degrades to the base case.
            Evaluator::new().term(scale.depth.max(0)).unwrap_or(0) as f64
        },
    },
    WorkloadDef {
        name: "layered_stall",
        description: "one long stall buried under ten thousand cheap calls",
        kind: WorkloadKind::Sleep,
        runner: |scale| layered_stall(1, scale) as f64,
    },
    WorkloadDef {
        name: "sine_sum_serial",
        description: "sequential sine summation over the configured element count",
        kind: WorkloadKind::Cpu,
        runner: |scale| sine_sum_serial(scale.elements),
    },
    WorkloadDef {
        name: "sine_sum_parallel",
        description: "rayon-parallel sine summation over the configured element count",
        kind: WorkloadKind::Cpu,
        runner: |scale| sine_sum_parallel(scale.elements),
    },
    WorkloadDef {
        name: "alloc_churn",
        description: "allocate and scale a buffer of 10x the configured element count",
        kind: WorkloadKind::Alloc,
        runner: |scale| alloc_scaled(scale.elements.saturating_mul(10)).len() as f64,
    },
    WorkloadDef {
        name: "combined_sums",
        description: "serial + parallel sums with allocation churn in between",
        kind: WorkloadKind::Mixed,
        runner: |scale| combined_sums(scale.elements),
    },
];

/// All registered workloads, in catalog order.
pub fn catalog() -> &'static [WorkloadDef] {
    &CATALOG
}

/// Look up a workload by exact name.
pub fn find(name: &str) -> Option<&'static WorkloadDef> {
    CATALOG.iter().find(|w| w.name == name)
}
