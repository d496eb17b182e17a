//! Advisor configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, ScoutError};
use crate::ranker::ImbalanceMatching;

/// Configuration for [`crate::ModelAdvisor`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Number of recommendations per report
    pub top_k: usize,

    /// How the imbalance bonus picks candidates
    pub imbalance_matching: ImbalanceMatching,

    /// Compute per-column statistics on the rayon pool
    pub parallel_profiling: bool,

    /// Include strategy tips in reports
    pub include_tips: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            imbalance_matching: ImbalanceMatching::DescriptorText,
            parallel_profiling: true,
            include_tips: true,
        }
    }
}

impl AdvisorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the number of recommendations
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Builder method to set imbalance matching
    pub fn with_imbalance_matching(mut self, matching: ImbalanceMatching) -> Self {
        self.imbalance_matching = matching;
        self
    }

    /// Builder method to toggle parallel profiling
    pub fn with_parallel_profiling(mut self, parallel: bool) -> Self {
        self.parallel_profiling = parallel;
        self
    }

    /// Builder method to toggle strategy tips
    pub fn with_tips(mut self, include: bool) -> Self {
        self.include_tips = include;
        self
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(ScoutError::ConfigError("top_k must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ScoutError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
