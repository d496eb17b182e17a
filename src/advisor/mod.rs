//! Time-budget estimation and strategy advice

mod tips;

pub use tips::{baseline_suggestion, strategy_tips};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::AlgorithmDescriptor;
use crate::profiler::DatasetFingerprint;

/// Upper bound (exclusive) of the "Seconds" bracket
pub const SECONDS_LOAD: u128 = 500_000;
/// Upper bound (exclusive) of the "Minutes" bracket
pub const MINUTES_LOAD: u128 = 10_000_000;
/// Upper bound (exclusive) of the "Minutes to Hours" bracket
pub const MINUTES_TO_HOURS_LOAD: u128 = 100_000_000;

/// Coarse training-duration bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuntimeClass {
    #[serde(rename = "Seconds")]
    Seconds,
    #[serde(rename = "Minutes")]
    Minutes,
    #[serde(rename = "Minutes to Hours")]
    MinutesToHours,
    #[serde(rename = "Hours (GPU Recommended)")]
    HoursGpuRecommended,
}

impl RuntimeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeClass::Seconds => "Seconds",
            RuntimeClass::Minutes => "Minutes",
            RuntimeClass::MinutesToHours => "Minutes to Hours",
            RuntimeClass::HoursGpuRecommended => "Hours (GPU Recommended)",
        }
    }

    /// Bucket for a `rows * cols * complexity` load
    pub fn from_load(load: u128) -> Self {
        if load < SECONDS_LOAD {
            RuntimeClass::Seconds
        } else if load < MINUTES_LOAD {
            RuntimeClass::Minutes
        } else if load < MINUTES_TO_HOURS_LOAD {
            RuntimeClass::MinutesToHours
        } else {
            RuntimeClass::HoursGpuRecommended
        }
    }
}

impl fmt::Display for RuntimeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimates training time from dataset shape and model complexity
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeBudgetAdvisor;

impl TimeBudgetAdvisor {
    pub fn new() -> Self {
        TimeBudgetAdvisor
    }

    /// `rows * cols * complexity`, saturating at `u128::MAX`
    pub fn training_load(row_count: u64, column_count: u64, complexity_score: u8) -> u128 {
        u128::from(row_count)
            .checked_mul(u128::from(column_count))
            .and_then(|load| load.checked_mul(u128::from(complexity_score)))
            .unwrap_or(u128::MAX)
    }

    /// Runtime class for `rows * cols * complexity`
    pub fn estimate_time_budget(&self, row_count: u64, column_count: u64, complexity_score: u8) -> RuntimeClass {
        RuntimeClass::from_load(Self::training_load(row_count, column_count, complexity_score))
    }

    /// Runtime class for training `algorithm` on the profiled dataset
    pub fn estimate_for(&self, fingerprint: &DatasetFingerprint, algorithm: &AlgorithmDescriptor) -> RuntimeClass {
        self.estimate_time_budget(
            fingerprint.row_count() as u64,
            fingerprint.column_count() as u64,
            algorithm.complexity_score,
        )
    }
}
