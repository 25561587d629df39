//! Configuration loading from lento.toml
//!
//! Defaults live in a `lento.toml` discovered by walking up from the current
//! directory; CLI flags override whatever the file says.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lento configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LentoConfig {
    /// Workload run configuration.
    #[serde(default)]
    pub workloads: WorkloadsConfig,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Workload run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadsConfig {
    /// Runs per workload.
    #[serde(default = "default_runs")]
    pub runs: usize,
    /// Multiplier applied to every stall duration.
    #[serde(default = "default_time_scale")]
    pub time_scale: f64,
    /// Terms per summation workload.
    #[serde(default = "default_elements")]
    pub elements: usize,
    /// Index for the naive sequence workload.
    #[serde(default = "default_depth")]
    pub depth: i64,
}

impl Default for WorkloadsConfig {
    fn default() -> Self {
        Self {
            runs: default_runs(),
            time_scale: default_time_scale(),
            elements: default_elements(),
            depth: default_depth(),
        }
    }
}

fn default_runs() -> usize {
    5
}
fn default_time_scale() -> f64 {
    1.0
}
fn default_elements() -> usize {
    lento_workloads::DEFAULT_ELEMENTS
}
fn default_depth() -> i64 {
    30
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human" or "json".
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl LentoConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Discover and load configuration by walking up from the current directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("lento.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }
}
