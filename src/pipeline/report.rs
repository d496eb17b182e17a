//! Advisory report returned by the pipeline

use serde::{Deserialize, Serialize};

use crate::advisor::RuntimeClass;
use crate::catalog::ProblemType;
use crate::error::Result;
use crate::profiler::DatasetFingerprint;

/// One recommended algorithm with its time estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub algorithm: String,
    pub problem_type: ProblemType,
    pub complexity_score: u8,
    pub score: f64,
    pub reasons: Vec<String>,
    pub runtime: RuntimeClass,
}

/// Fingerprint, ranked recommendations and advice for one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub fingerprint: DatasetFingerprint,
    pub problem_type: ProblemType,
    pub recommendations: Vec<RecommendationEntry>,
    pub baseline: String,
    pub tips: Vec<String>,
}

impl AdvisoryReport {
    /// Name of the best-scoring algorithm, if any survived ranking
    pub fn top_algorithm(&self) -> Option<&str> {
        self.recommendations.first().map(|r| r.algorithm.as_str())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
