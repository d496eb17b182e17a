//! modelscout - dataset profiling and ML algorithm recommendation
//!
//! This crate inspects a tabular dataset and suggests which learning
//! algorithms are worth trying first:
//! - Dataset profiling into a serializable fingerprint
//! - A typed, thread-safe algorithm catalog
//! - Heuristic ranking with per-candidate justifications
//! - Coarse training-time estimates and strategy tips
//!
//! # Modules
//!
//! ## Core
//! - [`profiler`] - Dataset fingerprinting (types, missing values, skew, outliers, target)
//! - [`catalog`] - Algorithm descriptors and registry
//! - [`ranker`] - Heuristic scoring and top-k selection
//! - [`advisor`] - Time-budget classes, baseline suggestions and tips
//!
//! ## Orchestration
//! - [`pipeline`] - End-to-end advisor producing an [`AdvisoryReport`]
//! - [`config`] - Advisor configuration
//!
//! ## Services
//! - [`cli`] - Command-line interface
//! - [`utils`] - Data loading

// Core error handling
pub mod error;

// Core modules
pub mod profiler;
pub mod catalog;
pub mod ranker;
pub mod advisor;

// Orchestration
pub mod config;
pub mod pipeline;

// Utilities
pub mod utils;

// Services
pub mod cli;

pub use error::{Result, ScoutError};
pub use pipeline::{AdvisoryReport, ModelAdvisor};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{Result, ScoutError};

    // Profiling
    pub use crate::profiler::{DatasetFingerprint, DatasetProfiler, FeatureKind, TargetStats};

    // Catalog
    pub use crate::catalog::{AlgorithmCatalog, AlgorithmDescriptor, ProblemType};

    // Ranking
    pub use crate::ranker::{Eligibility, HeuristicRanker, ImbalanceMatching, RankedRecommendation};

    // Advice
    pub use crate::advisor::{RuntimeClass, TimeBudgetAdvisor};

    // Pipeline
    pub use crate::config::AdvisorConfig;
    pub use crate::pipeline::{AdvisoryReport, ModelAdvisor, RecommendationEntry};

    // Loading
    pub use crate::utils::DataLoader;
}
