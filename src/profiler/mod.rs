//! Dataset profiling
//!
//! Converts a polars [`DataFrame`] into a [`DatasetFingerprint`]:
//! - basic dimensions and memory estimate
//! - feature-type classification (numerical, categorical, datetime, boolean)
//! - missing-value summary
//! - per-column skewness, IQR outlier counts and pairwise correlations
//! - target problem-type inference and class balance
//!
//! Data-quality degeneracies (empty tables, constant or all-missing columns)
//! fall back to defaults. Only structural problems, such as a designated
//! target that is not in the table, produce errors.

mod columns;
mod fingerprint;
pub mod stats;
mod target;

pub use columns::classify_dtype;
pub use fingerprint::{
    BasicStats, ClassificationTask, DatasetFingerprint, FeatureGroup, FeatureKind, FeatureTypes,
    MissingStats, TargetProblemType, TargetStats,
};
pub use target::{CLASSIFICATION_CARDINALITY_LIMIT, IMBALANCE_FACTOR};

use indexmap::IndexMap;
use polars::prelude::*;
use rayon::prelude::*;
use std::time::Instant;
use tracing::debug;

use crate::error::{Result, ScoutError};
use columns::ColumnData;

/// Per-column numeric summary computed before assembly
struct NumericSummary {
    skewness: Option<f64>,
    outliers: usize,
    constant: bool,
    present: usize,
}

/// Builds [`DatasetFingerprint`]s from tables
#[derive(Debug, Clone)]
pub struct DatasetProfiler {
    parallel: bool,
}

impl Default for DatasetProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetProfiler {
    /// Create a profiler that computes column statistics in parallel
    pub fn new() -> Self {
        Self { parallel: true }
    }

    /// Enable or disable parallel column statistics
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Profile a table, optionally designating a target column.
    ///
    /// The table is never modified.
    pub fn profile(&self, df: &DataFrame, target_column: Option<&str>) -> Result<DatasetFingerprint> {
        let start = Instant::now();
        let row_count = df.height();
        let column_count = df.width();

        let target = match target_column {
            Some(name) => Some(
                df.get_columns()
                    .iter()
                    .find(|c| c.name().as_str() == name)
                    .ok_or_else(|| ScoutError::ColumnNotFound(name.to_string()))?,
            ),
            None => None,
        };

        let columns: Vec<ColumnData> = if self.parallel {
            df.get_columns()
                .par_iter()
                .map(ColumnData::from_column)
                .collect::<Result<_>>()?
        } else {
            df.get_columns()
                .iter()
                .map(ColumnData::from_column)
                .collect::<Result<_>>()?
        };

        let basic = BasicStats {
            row_count,
            column_count,
            memory_estimate_mb: df.estimated_size() as f64 / 1024.0 / 1024.0,
            is_empty: row_count == 0 || column_count == 0,
        };

        let feature_types = feature_types(&columns);
        let missing = missing_stats(&columns, row_count, column_count);

        let numeric: Vec<&ColumnData> = columns
            .iter()
            .filter(|c| c.kind == FeatureKind::Numerical)
            .collect();
        let summaries = self.numeric_summaries(&numeric);

        let mut skewness = IndexMap::new();
        let mut outliers = IndexMap::new();
        for (column, summary) in numeric.iter().zip(summaries.iter()) {
            if let Some(skew) = summary.skewness {
                skewness.insert(column.name.clone(), skew);
            }
            if summary.outliers > 0 {
                outliers.insert(column.name.clone(), summary.outliers);
            }
        }

        let correlations = self.correlations(&numeric, &summaries);

        let target = match target {
            Some(column) => Some(profile_target(column)?),
            None => None,
        };

        debug!(
            rows = row_count,
            cols = column_count,
            numeric = numeric.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Dataset profiled"
        );

        Ok(DatasetFingerprint {
            basic,
            feature_types,
            missing,
            skewness,
            correlations,
            outliers,
            target,
        })
    }

    fn numeric_summaries(&self, numeric: &[&ColumnData]) -> Vec<NumericSummary> {
        let summarize = |column: &&ColumnData| {
            let values = column.present_values();
            NumericSummary {
                skewness: stats::skewness(&values),
                outliers: stats::count_iqr_outliers(&values),
                constant: stats::is_constant(&values),
                present: values.len(),
            }
        };

        if self.parallel {
            numeric.par_iter().map(summarize).collect()
        } else {
            numeric.iter().map(summarize).collect()
        }
    }

    fn correlations(
        &self,
        numeric: &[&ColumnData],
        summaries: &[NumericSummary],
    ) -> IndexMap<String, IndexMap<String, Option<f64>>> {
        let n = numeric.len();
        if n < 2 {
            return IndexMap::new();
        }

        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect();
        let pair_value = |&(i, j): &(usize, usize)| match (&numeric[i].numeric, &numeric[j].numeric) {
            (Some(x), Some(y)) => stats::pearson(x, y),
            _ => None,
        };
        let values: Vec<Option<f64>> = if self.parallel {
            pairs.par_iter().map(pair_value).collect()
        } else {
            pairs.iter().map(pair_value).collect()
        };

        let mut matrix = vec![vec![None; n]; n];
        for (i, summary) in summaries.iter().enumerate() {
            matrix[i][i] = (summary.present >= 2 && !summary.constant).then_some(1.0);
        }
        for (&(i, j), value) in pairs.iter().zip(values) {
            matrix[i][j] = value;
            matrix[j][i] = value;
        }

        numeric
            .iter()
            .zip(matrix)
            .map(|(row_column, row)| {
                let row: IndexMap<String, Option<f64>> = numeric
                    .iter()
                    .zip(row)
                    .map(|(column, value)| (column.name.clone(), value))
                    .collect();
                (row_column.name.clone(), row)
            })
            .collect()
    }
}

fn feature_types(columns: &[ColumnData]) -> FeatureTypes {
    let mut types = FeatureTypes::default();
    for column in columns {
        types.group_mut(column.kind).push(&column.name);
    }
    types
}

fn missing_stats(columns: &[ColumnData], row_count: usize, column_count: usize) -> MissingStats {
    let total_missing_cells: usize = columns.iter().map(|c| c.missing).sum();
    let total_cells = row_count * column_count;
    let missing_ratio = if total_cells > 0 {
        total_missing_cells as f64 / total_cells as f64
    } else {
        0.0
    };

    MissingStats {
        total_missing_cells,
        missing_ratio,
        columns_with_missing: columns
            .iter()
            .filter(|c| c.missing > 0)
            .map(|c| c.name.clone())
            .collect(),
        has_missing_values: total_missing_cells > 0,
    }
}

fn profile_target(column: &Column) -> Result<TargetStats> {
    let name = column.name().as_str();
    if classify_dtype(column.dtype()) == FeatureKind::Numerical {
        let values = columns::numeric_values(column)?;
        Ok(target::numeric_target(name, &values))
    } else {
        let labels = columns::label_values(column)?;
        Ok(target::label_target(name, &labels))
    }
}
