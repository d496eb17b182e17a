//! Algorithm capability descriptors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScoutError};

/// Default minimum row count when a descriptor does not declare one
pub const DEFAULT_MIN_SAMPLES: usize = 10;

/// Kind of learning problem an algorithm solves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemType {
    Classification,
    Regression,
    Clustering,
    DimensionalityReduction,
}

impl ProblemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemType::Classification => "classification",
            ProblemType::Regression => "regression",
            ProblemType::Clustering => "clustering",
            ProblemType::DimensionalityReduction => "dimensionality_reduction",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProblemType {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "classification" => Ok(ProblemType::Classification),
            "regression" => Ok(ProblemType::Regression),
            "clustering" => Ok(ProblemType::Clustering),
            "dimensionality_reduction" => Ok(ProblemType::DimensionalityReduction),
            other => Err(ScoutError::InvalidParameter {
                name: "problem_type".to_string(),
                value: other.to_string(),
                reason: "expected classification, regression, clustering or dimensionality_reduction"
                    .to_string(),
            }),
        }
    }
}

/// Capability descriptor for one algorithm.
///
/// Descriptors are immutable once built. Use [`AlgorithmDescriptor::builder`]
/// so required fields and value ranges are checked up front. Deserialization
/// goes through the same builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DescriptorBuilder")]
pub struct AlgorithmDescriptor {
    /// Display name, also the (case-insensitive) catalog key
    pub name: String,
    /// Problem type the algorithm solves
    pub problem_type: ProblemType,
    /// Short description
    pub description: String,
    /// Strengths, display only
    pub pros: Vec<String>,
    /// Weaknesses, display only
    pub cons: Vec<String>,
    /// Capacity/cost proxy on a 1-10 scale
    pub complexity_score: u8,
    /// Hard minimum row count
    pub min_samples: usize,
    /// Native missing-value support
    pub handle_missing: bool,
    /// Native sparse-input support
    pub handle_sparse: bool,
    /// Native categorical support
    pub handle_categorical: bool,
    /// Known to cope with skewed class distributions
    pub robust_to_imbalance: bool,
}

impl AlgorithmDescriptor {
    /// Start building a descriptor
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::default()
    }

    /// Whether the name or description contains `needle` (case-sensitive)
    pub fn mentions(&self, needle: &str) -> bool {
        self.name.contains(needle) || self.description.contains(needle)
    }

    /// Catalog key for this descriptor
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Normalize an algorithm name into its catalog key
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Builder for [`AlgorithmDescriptor`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DescriptorBuilder {
    name: Option<String>,
    problem_type: Option<ProblemType>,
    description: String,
    pros: Vec<String>,
    cons: Vec<String>,
    complexity_score: Option<u8>,
    min_samples: Option<usize>,
    handle_missing: bool,
    handle_sparse: bool,
    handle_categorical: bool,
    robust_to_imbalance: bool,
}

impl DescriptorBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn problem_type(mut self, problem_type: ProblemType) -> Self {
        self.problem_type = Some(problem_type);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn pros<I, S>(mut self, pros: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pros = pros.into_iter().map(Into::into).collect();
        self
    }

    pub fn cons<I, S>(mut self, cons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cons = cons.into_iter().map(Into::into).collect();
        self
    }

    pub fn complexity(mut self, score: u8) -> Self {
        self.complexity_score = Some(score);
        self
    }

    pub fn min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = Some(min_samples);
        self
    }

    pub fn handles_missing(mut self, yes: bool) -> Self {
        self.handle_missing = yes;
        self
    }

    pub fn handles_sparse(mut self, yes: bool) -> Self {
        self.handle_sparse = yes;
        self
    }

    pub fn handles_categorical(mut self, yes: bool) -> Self {
        self.handle_categorical = yes;
        self
    }

    pub fn robust_to_imbalance(mut self, yes: bool) -> Self {
        self.robust_to_imbalance = yes;
        self
    }

    /// Validate and build the descriptor
    pub fn build(self) -> Result<AlgorithmDescriptor> {
        let name = self
            .name
            .ok_or_else(|| ScoutError::InvalidDescriptor("missing name".to_string()))?;
        if name.trim().is_empty() {
            return Err(ScoutError::InvalidDescriptor("name must not be empty".to_string()));
        }

        let problem_type = self.problem_type.ok_or_else(|| {
            ScoutError::InvalidDescriptor(format!("{}: missing problem type", name))
        })?;

        let complexity_score = self.complexity_score.ok_or_else(|| {
            ScoutError::InvalidDescriptor(format!("{}: missing complexity score", name))
        })?;
        if !(1..=10).contains(&complexity_score) {
            return Err(ScoutError::InvalidDescriptor(format!(
                "{}: complexity score {} outside 1-10",
                name, complexity_score
            )));
        }

        let min_samples = self.min_samples.unwrap_or(DEFAULT_MIN_SAMPLES);
        if min_samples == 0 {
            return Err(ScoutError::InvalidDescriptor(format!(
                "{}: min_samples must be at least 1",
                name
            )));
        }

        Ok(AlgorithmDescriptor {
            name,
            problem_type,
            description: self.description,
            pros: self.pros,
            cons: self.cons,
            complexity_score,
            min_samples,
            handle_missing: self.handle_missing,
            handle_sparse: self.handle_sparse,
            handle_categorical: self.handle_categorical,
            robust_to_imbalance: self.robust_to_imbalance,
        })
    }
}

impl TryFrom<DescriptorBuilder> for AlgorithmDescriptor {
    type Error = ScoutError;

    fn try_from(builder: DescriptorBuilder) -> Result<Self> {
        builder.build()
    }
}
