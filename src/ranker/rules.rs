//! Scoring rules applied to each candidate algorithm

use serde::{Deserialize, Serialize};

use crate::catalog::AlgorithmDescriptor;
use crate::profiler::DatasetFingerprint;

/// Starting score for every candidate
pub const BASE_SCORE: f64 = 100.0;

pub const MISSING_VALUE_PENALTY: f64 = 50.0;
pub const SMALL_DATA_PENALTY: f64 = 60.0;
pub const TINY_DATA_DEEP_PENALTY: f64 = 80.0;
pub const UNDERFIT_PENALTY: f64 = 10.0;
pub const INTERPRETABILITY_BONUS: f64 = 10.0;
pub const IMBALANCE_BONUS: f64 = 15.0;

/// Rows below which models with complexity above 5 are penalized
pub const SMALL_DATA_ROWS: usize = 50;
/// Rows below which models with complexity above 7 are penalized
pub const DEEP_MODEL_ROWS: usize = 200;
/// Rows above which models with complexity below 3 may underfit
pub const LARGE_DATA_ROWS: usize = 10_000;

/// Descriptor text that marks an algorithm as imbalance-robust
pub const IMBALANCE_MARKERS: [&str; 3] = ["Tree", "Forest", "Boost"];

/// How the imbalance-robustness bonus decides which candidates qualify
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImbalanceMatching {
    /// Name or description contains "Tree", "Forest" or "Boost"
    #[default]
    DescriptorText,
    /// The descriptor's `robust_to_imbalance` flag is set
    CapabilityFlag,
}

impl ImbalanceMatching {
    pub fn qualifies(&self, algo: &AlgorithmDescriptor) -> bool {
        match self {
            ImbalanceMatching::DescriptorText => {
                IMBALANCE_MARKERS.iter().any(|marker| algo.mentions(marker))
            }
            ImbalanceMatching::CapabilityFlag => algo.robust_to_imbalance,
        }
    }
}

/// Scoring outcome for one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Eligibility {
    Eligible { score: f64, reasons: Vec<String> },
    /// Dropped regardless of any bonus
    Excluded { reasons: Vec<String> },
}

impl Eligibility {
    /// Numeric score; excluded candidates report negative infinity
    pub fn score(&self) -> f64 {
        match self {
            Eligibility::Eligible { score, .. } => *score,
            Eligibility::Excluded { .. } => f64::NEG_INFINITY,
        }
    }

    pub fn reasons(&self) -> &[String] {
        match self {
            Eligibility::Eligible { reasons, .. } | Eligibility::Excluded { reasons } => reasons,
        }
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, Eligibility::Excluded { .. })
    }
}

/// Score one candidate against a fingerprint.
///
/// Rules fire in a fixed order and the reason list follows that order. At
/// most one small-data band applies; the under-50-rows band wins.
pub fn score_candidate(
    algo: &AlgorithmDescriptor,
    fingerprint: &DatasetFingerprint,
    matching: ImbalanceMatching,
) -> Eligibility {
    let n_rows = fingerprint.row_count();
    let complexity = algo.complexity_score;
    let mut score = BASE_SCORE;
    let mut reasons = Vec::new();

    let excluded = n_rows < algo.min_samples;
    if excluded {
        reasons.push(format!("Below min samples requirement ({})", algo.min_samples));
    }

    if fingerprint.has_missing_values() && !algo.handle_missing {
        score -= MISSING_VALUE_PENALTY;
        reasons.push("Does not handle missing values natively (requires imputation)".to_string());
    }

    if n_rows < SMALL_DATA_ROWS && complexity > 5 {
        score -= SMALL_DATA_PENALTY;
        reasons.push(format!("Too complex for small dataset ({} rows)", n_rows));
    } else if n_rows < DEEP_MODEL_ROWS && complexity > 7 {
        score -= TINY_DATA_DEEP_PENALTY;
        reasons.push("Requires much more data".to_string());
    }

    if n_rows > LARGE_DATA_ROWS && complexity < 3 {
        score -= UNDERFIT_PENALTY;
        reasons.push("May underfit large/complex data".to_string());
    }

    if complexity <= 3 {
        score += INTERPRETABILITY_BONUS;
        reasons.push("Highly interpretable".to_string());
    }

    if fingerprint.is_target_imbalanced() && matching.qualifies(algo) {
        score += IMBALANCE_BONUS;
        reasons.push("Handles class imbalance well".to_string());
    }

    if excluded {
        Eligibility::Excluded { reasons }
    } else {
        Eligibility::Eligible { score, reasons }
    }
}
