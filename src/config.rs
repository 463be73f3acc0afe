//! Run configuration for the demo binaries.
//!
//! Configs are plain JSON files deserialized with serde. Everything beyond
//! the input path, the operation caption and the output path is optional and
//! falls back to the documented defaults.

use crate::ops::FilterParams;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Demo run description: one input grid, one operation, one output.
#[derive(Clone, Debug, Deserialize)]
pub struct FilterDemoConfig {
    /// Path of the grayscale input image.
    pub input: String,
    /// Second input, consulted by operations that join two grids.
    #[serde(default)]
    pub second_input: Option<String>,
    /// Caption-style operation name, resolved through the alias table.
    pub op: String,
    /// Operation knobs; missing fields keep their defaults.
    #[serde(default)]
    pub params: FilterParams,
    /// Seed for the noise RNG; omit for entropy-based seeding.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Path of the processed output image.
    pub output: String,
    /// Optional path for the JSON run report.
    #[serde(default)]
    pub report: Option<String>,
}

/// Read and parse a JSON config file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FilterDemoConfig, String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&text)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
