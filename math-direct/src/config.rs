//! Configuration for the pivoted factorization
//!
//! The singularity threshold is a tuning parameter rather than a derived
//! bound, so it lives here instead of being baked into the kernel. Settings
//! round-trip through JSON like the other solver configurations.

use crate::{DirectError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default absolute pivot magnitude below which a matrix is reported singular
pub const DEFAULT_SINGULAR_TOLERANCE: f64 = 1e-10;

/// PLU factorization configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluConfig<R> {
    /// Pivots with magnitude below this value abort the factorization
    pub singular_tolerance: R,
    /// Log progress every N pivot steps (0 = no output)
    #[serde(default)]
    pub print_interval: usize,
}

impl Default for PluConfig<f64> {
    fn default() -> Self {
        Self {
            singular_tolerance: DEFAULT_SINGULAR_TOLERANCE,
            print_interval: 0,
        }
    }
}

impl Default for PluConfig<f32> {
    fn default() -> Self {
        Self {
            singular_tolerance: 1e-6,
            print_interval: 0,
        }
    }
}

impl<R> PluConfig<R> {
    /// Configuration with the given singularity tolerance and no progress output
    pub fn with_tolerance(singular_tolerance: R) -> Self {
        Self {
            singular_tolerance,
            print_interval: 0,
        }
    }
}

impl<R: Serialize + DeserializeOwned> PluConfig<R> {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| DirectError::Config(format!("Failed to parse JSON: {}", e)))
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DirectError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, json)?;
        Ok(())
    }
}
