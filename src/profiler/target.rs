//! Target column inference

use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::fingerprint::{ClassificationTask, TargetStats};
use super::stats;

/// Integral numeric targets with fewer distinct values than this are classification
pub const CLASSIFICATION_CARDINALITY_LIMIT: usize = 20;

/// A class is rare when its frequency is below `IMBALANCE_FACTOR / num_classes`
pub const IMBALANCE_FACTOR: f64 = 0.5;

/// Infer target statistics for a numerical column
pub(crate) fn numeric_target(column: &str, values: &[Option<f64>]) -> TargetStats {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    let integral = present.iter().all(|v| v.is_finite() && v.fract() == 0.0);

    if integral {
        let labels: Vec<String> = present.iter().map(|&v| integral_label(v)).collect();
        let distinct = count_labels(labels.iter().map(String::as_str));
        if distinct.len() < CLASSIFICATION_CARDINALITY_LIMIT {
            debug!(column, classes = distinct.len(), "Numeric target treated as classification");
            return classification(column, distinct);
        }
    }

    debug!(column, "Numeric target treated as regression");
    TargetStats::Regression {
        column: column.to_string(),
        skewness: stats::skewness(&present),
    }
}

/// Infer target statistics for a non-numeric column
pub(crate) fn label_target(column: &str, labels: &[Option<String>]) -> TargetStats {
    let counts = count_labels(labels.iter().flatten().map(String::as_str));
    classification(column, counts)
}

fn integral_label(value: f64) -> String {
    // -0.0 and 0.0 are the same class
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}

fn count_labels<'a, I>(labels: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = HashMap::new();
    for label in labels {
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}

fn classification(column: &str, counts: HashMap<String, usize>) -> TargetStats {
    let total: usize = counts.values().sum();
    if total == 0 {
        warn!(column, "Target column has no non-missing values");
    }

    let mut ordered: Vec<(String, usize)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let class_distribution: IndexMap<String, f64> = ordered
        .into_iter()
        .map(|(label, count)| (label, count as f64 / total.max(1) as f64))
        .collect();

    let num_classes = class_distribution.len();
    let is_imbalanced = num_classes > 0 && {
        let threshold = 1.0 / num_classes as f64 * IMBALANCE_FACTOR;
        class_distribution.values().any(|&p| p < threshold)
    };
    let task = if num_classes == 2 {
        ClassificationTask::Binary
    } else {
        ClassificationTask::Multiclass
    };

    TargetStats::Classification {
        column: column.to_string(),
        class_distribution,
        num_classes,
        is_imbalanced,
        task,
    }
}
