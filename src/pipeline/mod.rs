//! End-to-end advisory pipeline
//!
//! [`ModelAdvisor`] wires the profiler, ranker and time-budget advisor
//! together and produces an [`AdvisoryReport`] per dataset.

mod report;

pub use report::{AdvisoryReport, RecommendationEntry};

use polars::prelude::DataFrame;
use std::sync::Arc;
use tracing::info;

use crate::advisor::{baseline_suggestion, strategy_tips, TimeBudgetAdvisor};
use crate::catalog::{AlgorithmCatalog, AlgorithmDescriptor};
use crate::config::AdvisorConfig;
use crate::error::Result;
use crate::profiler::{DatasetFingerprint, DatasetProfiler};
use crate::ranker::HeuristicRanker;

/// Profiles datasets and recommends algorithms from a shared catalog
#[derive(Debug, Clone)]
pub struct ModelAdvisor {
    config: AdvisorConfig,
    profiler: DatasetProfiler,
    ranker: HeuristicRanker,
    time_budget: TimeBudgetAdvisor,
}

impl ModelAdvisor {
    /// Advisor over the built-in catalog with default configuration
    pub fn standard() -> Result<Self> {
        Self::new(Arc::new(AlgorithmCatalog::standard()?), AdvisorConfig::default())
    }

    pub fn new(catalog: Arc<AlgorithmCatalog>, config: AdvisorConfig) -> Result<Self> {
        config.validate()?;
        let profiler = DatasetProfiler::new().with_parallel(config.parallel_profiling);
        let ranker = HeuristicRanker::new(catalog).with_imbalance_matching(config.imbalance_matching);
        Ok(Self {
            config,
            profiler,
            ranker,
            time_budget: TimeBudgetAdvisor::new(),
        })
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<AlgorithmCatalog> {
        self.ranker.catalog()
    }

    pub fn profiler(&self) -> &DatasetProfiler {
        &self.profiler
    }

    pub fn ranker(&self) -> &HeuristicRanker {
        &self.ranker
    }

    /// Profile a table and build its report
    pub fn analyze(&self, df: &DataFrame, target_column: Option<&str>) -> Result<AdvisoryReport> {
        let fingerprint = self.profiler.profile(df, target_column)?;
        Ok(self.recommend(fingerprint))
    }

    /// Build a report from an existing fingerprint
    pub fn recommend(&self, fingerprint: DatasetFingerprint) -> AdvisoryReport {
        let problem_type = fingerprint.problem_type();
        let recommendations: Vec<RecommendationEntry> = self
            .ranker
            .rank(&fingerprint, self.config.top_k)
            .into_iter()
            .map(|rec| RecommendationEntry {
                algorithm: rec.algorithm.name.clone(),
                problem_type: rec.algorithm.problem_type,
                complexity_score: rec.algorithm.complexity_score,
                score: rec.score,
                runtime: self.time_budget.estimate_for(&fingerprint, &rec.algorithm),
                reasons: rec.reasons,
            })
            .collect();

        let tips = if self.config.include_tips {
            strategy_tips(&fingerprint)
        } else {
            Vec::new()
        };

        info!(
            rows = fingerprint.row_count(),
            cols = fingerprint.column_count(),
            problem_type = %problem_type,
            recommendations = recommendations.len(),
            "Advisory report ready"
        );

        AdvisoryReport {
            problem_type,
            recommendations,
            baseline: baseline_suggestion(problem_type).to_string(),
            tips,
            fingerprint,
        }
    }

    /// Resolve algorithm names from a benchmarking request; any miss is an error
    pub fn benchmark_candidates<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Arc<AlgorithmDescriptor>>> {
        self.catalog().resolve_all(names)
    }
}
