//! Solver configuration in JSON or TOML
//!
//! ## Example JSON Configuration
//!
//! ```json
//! {
//!     "pivot_tolerance": 1e-12,
//!     "verbosity": 1
//! }
//! ```
//!
//! Missing fields take their defaults, so `{}` is a valid configuration.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for [`reduce_with_config`](crate::direct::reduce_with_config) and
/// [`solve`](crate::direct::solve)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReduceConfig {
    /// Pivots with `|pivot| <= pivot_tolerance` are treated as zero.
    ///
    /// When unset, the tolerance is `n * f64::EPSILON * max|A_ij|`, measured
    /// before elimination starts. `Some(0.0)` only rejects exact zeros.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot_tolerance: Option<f64>,
    /// Log a summary at info level when > 0
    pub verbosity: usize,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: None,
            verbosity: 0,
        }
    }
}

impl ReduceConfig {
    /// Builder-style setter for the pivot tolerance
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = Some(tolerance);
        self
    }

    /// Tolerance used for `matrix`: the explicit override, or one scaled to
    /// the dimension and largest entry
    pub fn pivot_tolerance_for(&self, matrix: &Matrix) -> f64 {
        self.pivot_tolerance.unwrap_or_else(|| {
            let max_abs = matrix
                .as_array()
                .iter()
                .fold(0.0_f64, |acc, v| acc.max(v.abs()));
            matrix.rows() as f64 * f64::EPSILON * max_abs
        })
    }

    /// Builder-style setter for verbosity
    pub fn with_verbosity(mut self, verbosity: usize) -> Self {
        self.verbosity = verbosity;
        self
    }
}

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format
    Json,
    /// TOML format
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        match ext.to_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Load solver configuration from a file
///
/// Format is auto-detected from file extension (.json or .toml)
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ReduceConfig> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| MatrixError::UnsupportedConfigFormat(path.display().to_string()))?;
    let content = fs::read_to_string(path)?;

    parse_config(&content, format)
}

/// Parse solver configuration from a string
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<ReduceConfig> {
    match format {
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|e| MatrixError::Config(e.to_string()))
        }
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| MatrixError::Config(e.to_string()))
        }
    }
}

/// Serialize solver configuration to a string
pub fn serialize_config(config: &ReduceConfig, format: ConfigFormat) -> Result<String> {
    match format {
        ConfigFormat::Json => {
            serde_json::to_string_pretty(config).map_err(|e| MatrixError::Config(e.to_string()))
        }
        ConfigFormat::Toml => {
            toml::to_string_pretty(config).map_err(|e| MatrixError::Config(e.to_string()))
        }
    }
}

/// Save solver configuration to a file, format chosen by extension
pub fn save_config<P: AsRef<Path>>(config: &ReduceConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| MatrixError::UnsupportedConfigFormat(path.display().to_string()))?;

    let content = serialize_config(config, format)?;
    fs::write(path, content)?;
    Ok(())
}
