//! Dataset fingerprint produced by the profiler

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::ProblemType;
use crate::error::Result;

/// Exactly one of these is assigned to every column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Numerical,
    Categorical,
    Datetime,
    Boolean,
}

/// Table dimensions and size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    pub row_count: usize,
    pub column_count: usize,
    /// Estimated in-memory size in MiB
    pub memory_estimate_mb: f64,
    /// True when the table has no rows or no columns
    pub is_empty: bool,
}

/// Columns sharing one feature kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureGroup {
    pub count: usize,
    pub columns: Vec<String>,
}

impl FeatureGroup {
    pub(crate) fn push(&mut self, column: &str) {
        self.columns.push(column.to_string());
        self.count = self.columns.len();
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

/// Column counts and names per feature kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureTypes {
    pub numerical: FeatureGroup,
    pub categorical: FeatureGroup,
    pub datetime: FeatureGroup,
    pub boolean: FeatureGroup,
}

impl FeatureTypes {
    pub fn group(&self, kind: FeatureKind) -> &FeatureGroup {
        match kind {
            FeatureKind::Numerical => &self.numerical,
            FeatureKind::Categorical => &self.categorical,
            FeatureKind::Datetime => &self.datetime,
            FeatureKind::Boolean => &self.boolean,
        }
    }

    pub(crate) fn group_mut(&mut self, kind: FeatureKind) -> &mut FeatureGroup {
        match kind {
            FeatureKind::Numerical => &mut self.numerical,
            FeatureKind::Categorical => &mut self.categorical,
            FeatureKind::Datetime => &mut self.datetime,
            FeatureKind::Boolean => &mut self.boolean,
        }
    }

    /// Kind assigned to a column, if the column exists
    pub fn kind_of(&self, column: &str) -> Option<FeatureKind> {
        [
            FeatureKind::Numerical,
            FeatureKind::Categorical,
            FeatureKind::Datetime,
            FeatureKind::Boolean,
        ]
        .into_iter()
        .find(|&kind| self.group(kind).contains(column))
    }

    /// Sum of the four group counts
    pub fn total(&self) -> usize {
        self.numerical.count + self.categorical.count + self.datetime.count + self.boolean.count
    }
}

/// Missing-value summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissingStats {
    pub total_missing_cells: usize,
    /// `total_missing_cells / (rows * columns)`, 0.0 for an empty table
    pub missing_ratio: f64,
    pub columns_with_missing: Vec<String>,
    pub has_missing_values: bool,
}

/// Problem type inferred from the target column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetProblemType {
    Classification,
    Regression,
}

impl From<TargetProblemType> for ProblemType {
    fn from(value: TargetProblemType) -> Self {
        match value {
            TargetProblemType::Classification => ProblemType::Classification,
            TargetProblemType::Regression => ProblemType::Regression,
        }
    }
}

/// Binary or multiclass classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationTask {
    Binary,
    Multiclass,
}

/// Statistics about the designated target column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "problem_type", rename_all = "snake_case")]
pub enum TargetStats {
    Classification {
        column: String,
        /// Class label to proportion, most frequent first
        class_distribution: IndexMap<String, f64>,
        num_classes: usize,
        is_imbalanced: bool,
        task: ClassificationTask,
    },
    Regression {
        column: String,
        /// `None` when fewer than three values or zero spread
        skewness: Option<f64>,
    },
}

impl TargetStats {
    pub fn column(&self) -> &str {
        match self {
            TargetStats::Classification { column, .. } | TargetStats::Regression { column, .. } => {
                column
            }
        }
    }

    pub fn problem_type(&self) -> TargetProblemType {
        match self {
            TargetStats::Classification { .. } => TargetProblemType::Classification,
            TargetStats::Regression { .. } => TargetProblemType::Regression,
        }
    }

    pub fn is_imbalanced(&self) -> bool {
        matches!(self, TargetStats::Classification { is_imbalanced: true, .. })
    }
}

/// Statistical summary of a dataset.
///
/// Every map preserves the table's column order. Undefined values (for
/// example the correlation of a constant column) are `None` and serialize as
/// JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetFingerprint {
    pub basic: BasicStats,
    pub feature_types: FeatureTypes,
    pub missing: MissingStats,
    /// Skewness per numerical column with a defined value
    pub skewness: IndexMap<String, f64>,
    /// Symmetric Pearson correlation matrix over numerical columns
    pub correlations: IndexMap<String, IndexMap<String, Option<f64>>>,
    /// IQR outlier counts, only for columns with at least one outlier
    pub outliers: IndexMap<String, usize>,
    pub target: Option<TargetStats>,
}

impl DatasetFingerprint {
    pub fn row_count(&self) -> usize {
        self.basic.row_count
    }

    pub fn column_count(&self) -> usize {
        self.basic.column_count
    }

    pub fn has_missing_values(&self) -> bool {
        self.missing.has_missing_values
    }

    pub fn is_target_imbalanced(&self) -> bool {
        self.target.as_ref().map(TargetStats::is_imbalanced).unwrap_or(false)
    }

    /// Problem type to rank for; classification when no target was designated
    pub fn problem_type(&self) -> ProblemType {
        self.target
            .as_ref()
            .map(|t| t.problem_type().into())
            .unwrap_or(ProblemType::Classification)
    }

    /// Correlation between two numerical columns, `None` if undefined or absent
    pub fn correlation(&self, a: &str, b: &str) -> Option<f64> {
        self.correlations.get(a).and_then(|row| row.get(b)).copied().flatten()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
