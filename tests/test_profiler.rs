//! Integration tests for dataset profiling

use modelscout::profiler::{ClassificationTask, DatasetProfiler, FeatureKind, TargetStats};
use modelscout::catalog::ProblemType;
use modelscout::ScoutError;
use polars::prelude::*;

fn profile(df: &DataFrame, target: Option<&str>) -> modelscout::profiler::DatasetFingerprint {
    DatasetProfiler::new().profile(df, target).unwrap()
}

// ============================================================================
// Basic statistics and feature types
// ============================================================================

#[test]
fn test_mixed_table() {
    let df = df!(
        "age" => &[Some(25.0), Some(32.0), None, Some(51.0), Some(46.0)],
        "city" => &[Some("oslo"), Some("rome"), Some("oslo"), None, Some("rome")],
        "active" => &[true, false, true, true, false],
        "visits" => &[3i64, 8, 1, 4, 9]
    )
    .unwrap();

    let fp = profile(&df, None);

    assert_eq!(fp.basic.row_count, 5);
    assert_eq!(fp.basic.column_count, 4);
    assert!(!fp.basic.is_empty);
    assert!(fp.basic.memory_estimate_mb >= 0.0);

    assert_eq!(fp.feature_types.numerical.columns, vec!["age", "visits"]);
    assert_eq!(fp.feature_types.categorical.columns, vec!["city"]);
    assert_eq!(fp.feature_types.boolean.columns, vec!["active"]);
    assert_eq!(fp.feature_types.datetime.count, 0);
    assert_eq!(fp.feature_types.total(), fp.basic.column_count);
    assert_eq!(fp.feature_types.kind_of("active"), Some(FeatureKind::Boolean));

    assert_eq!(fp.missing.total_missing_cells, 2);
    assert!((fp.missing.missing_ratio - 0.1).abs() < 1e-12);
    assert_eq!(fp.missing.columns_with_missing, vec!["age", "city"]);
    assert!(fp.has_missing_values());
    assert!(fp.target.is_none());
    assert_eq!(fp.problem_type(), ProblemType::Classification);
}

#[test]
fn test_datetime_column() {
    let dates = Series::new("day".into(), &[19000i32, 19001, 19002])
        .cast(&DataType::Date)
        .unwrap();
    let values = Series::new("value".into(), &[1.0, 2.0, 4.0]);
    let df = DataFrame::new(vec![dates.into_column(), values.into_column()]).unwrap();

    let fp = profile(&df, None);

    assert_eq!(fp.feature_types.datetime.columns, vec!["day"]);
    assert_eq!(fp.feature_types.numerical.columns, vec!["value"]);
    assert!(!fp.skewness.contains_key("day"));
}

#[test]
fn test_input_is_not_modified() {
    let df = df!("x" => &[Some(1.0), None, Some(3.0)], "y" => &["a", "b", "c"]).unwrap();
    let before = df.clone();

    let _ = profile(&df, Some("y"));

    assert!(df.equals_missing(&before));
}

// ============================================================================
// Degenerate tables
// ============================================================================

#[test]
fn test_empty_dataframe() {
    let fp = profile(&DataFrame::empty(), None);

    assert!(fp.basic.is_empty);
    assert_eq!(fp.basic.row_count, 0);
    assert_eq!(fp.basic.column_count, 0);
    assert_eq!(fp.missing.missing_ratio, 0.0);
    assert!(!fp.has_missing_values());
    assert!(fp.correlations.is_empty());
}

#[test]
fn test_zero_rows() {
    let df = df!("x" => Vec::<f64>::new(), "y" => Vec::<f64>::new()).unwrap();
    let fp = profile(&df, None);

    assert!(fp.basic.is_empty);
    assert_eq!(fp.basic.column_count, 2);
    assert_eq!(fp.missing.missing_ratio, 0.0);
    assert!(fp.skewness.is_empty());
    assert!(fp.outliers.is_empty());
    assert_eq!(fp.correlation("x", "y"), None);
}

#[test]
fn test_single_column() {
    let df = df!("only" => &[1.0, 2.0, 3.0, 10.0]).unwrap();
    let fp = profile(&df, None);

    assert_eq!(fp.feature_types.numerical.count, 1);
    assert!(fp.skewness.contains_key("only"));
    // No pairs, no matrix
    assert!(fp.correlations.is_empty());
}

#[test]
fn test_all_null_column() {
    let nulls = Series::new_null("empty".into(), 4);
    let values = Series::new("v".into(), &[1.0, 2.0, 3.0, 4.0]);
    let df = DataFrame::new(vec![nulls.into_column(), values.into_column()]).unwrap();

    let fp = profile(&df, None);

    assert_eq!(fp.missing.total_missing_cells, 4);
    assert!((fp.missing.missing_ratio - 0.5).abs() < 1e-12);
    assert!(!fp.skewness.contains_key("empty"));
    assert_eq!(fp.correlation("empty", "v"), None);
    assert_eq!(fp.correlation("empty", "empty"), None);
    assert_eq!(fp.correlation("v", "v"), Some(1.0));
}

#[test]
fn test_missing_ratio_bounds() {
    let df = df!(
        "a" => &[None::<f64>, None, None],
        "b" => &[None::<f64>, None, None]
    )
    .unwrap();
    let fp = profile(&df, None);
    assert_eq!(fp.missing.missing_ratio, 1.0);
}

// ============================================================================
// Numeric summaries
// ============================================================================

#[test]
fn test_perfect_negative_correlation() {
    let df = df!("a" => &[1.0, 2.0, 3.0], "b" => &[3.0, 2.0, 1.0]).unwrap();
    let fp = profile(&df, None);

    let r = fp.correlation("a", "b").unwrap();
    assert!((r + 1.0).abs() < 1e-12);
    assert_eq!(fp.correlation("a", "b"), fp.correlation("b", "a"));
    assert_eq!(fp.correlation("a", "a"), Some(1.0));
}

#[test]
fn test_constant_column_correlation_is_null() {
    let df = df!("flat" => &[5.0, 5.0, 5.0, 5.0], "rise" => &[1.0, 2.0, 3.0, 4.0]).unwrap();
    let fp = profile(&df, None);

    assert_eq!(fp.correlation("flat", "rise"), None);
    assert!(!fp.skewness.contains_key("flat"));

    let json = fp.to_json().unwrap();
    assert!(json.contains("null"));
    assert!(!json.contains("NaN"));
}

#[test]
fn test_outliers_counted() {
    let df = df!("x" => &[10.0, 11.0, 12.0, 11.0, 10.0, 12.0, 11.0, 500.0]).unwrap();
    let fp = profile(&df, None);

    assert_eq!(fp.outliers.get("x"), Some(&1));
    assert!(fp.skewness["x"] > 0.0);
}

#[test]
fn test_sequential_matches_parallel() {
    let df = df!(
        "a" => &[1.0, 4.0, 2.0, 8.0, 5.0, 7.0],
        "b" => &[2.0, 1.0, 3.0, 9.0, 4.0, 6.0],
        "c" => &[Some(3.0), None, Some(1.0), Some(2.0), Some(9.0), Some(4.0)]
    )
    .unwrap();

    let parallel = DatasetProfiler::new().profile(&df, None).unwrap();
    let sequential = DatasetProfiler::new().with_parallel(false).profile(&df, None).unwrap();
    assert_eq!(parallel, sequential);
}

// ============================================================================
// Target analysis
// ============================================================================

#[test]
fn test_imbalanced_string_target() {
    let df = df!(
        "x" => &[1.0, 2.0, 3.0, 4.0, 5.0],
        "label" => &["a", "a", "a", "a", "b"]
    )
    .unwrap();

    let fp = profile(&df, Some("label"));

    match fp.target.as_ref().unwrap() {
        TargetStats::Classification { class_distribution, num_classes, is_imbalanced, task, .. } => {
            assert_eq!(*num_classes, 2);
            assert_eq!(*task, ClassificationTask::Binary);
            assert!(*is_imbalanced);
            assert!((class_distribution["a"] - 0.8).abs() < 1e-12);
            assert!((class_distribution["b"] - 0.2).abs() < 1e-12);
            let total: f64 = class_distribution.values().sum();
            assert!((total - 1.0).abs() < 1e-9);
        }
        other => panic!("expected classification, got {:?}", other),
    }
    assert!(fp.is_target_imbalanced());
    assert_eq!(fp.problem_type(), ProblemType::Classification);
}

#[test]
fn test_integer_target_is_classification() {
    let df = df!(
        "x" => (0..60).map(|i| i as f64).collect::<Vec<_>>(),
        "label" => (0..60).map(|i| (i % 3) as i64).collect::<Vec<_>>()
    )
    .unwrap();

    let fp = profile(&df, Some("label"));

    match fp.target.as_ref().unwrap() {
        TargetStats::Classification { num_classes, task, is_imbalanced, .. } => {
            assert_eq!(*num_classes, 3);
            assert_eq!(*task, ClassificationTask::Multiclass);
            assert!(!*is_imbalanced);
        }
        other => panic!("expected classification, got {:?}", other),
    }
}

#[test]
fn test_continuous_target_is_regression() {
    let df = df!(
        "x" => (0..50).map(|i| i as f64).collect::<Vec<_>>(),
        "price" => (0..50).map(|i| i as f64 * 1.37 + 0.5).collect::<Vec<_>>()
    )
    .unwrap();

    let fp = profile(&df, Some("price"));

    assert!(matches!(fp.target, Some(TargetStats::Regression { .. })));
    assert_eq!(fp.problem_type(), ProblemType::Regression);
    assert!(!fp.is_target_imbalanced());
}

#[test]
fn test_target_with_nulls() {
    let df = df!(
        "x" => &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        "label" => &[Some("cat"), None, Some("dog"), Some("cat"), None, Some("dog")]
    )
    .unwrap();

    let fp = profile(&df, Some("label"));

    assert_eq!(fp.missing.total_missing_cells, 2);
    assert_eq!(fp.missing.columns_with_missing, vec!["label"]);
    match fp.target.as_ref().unwrap() {
        TargetStats::Classification { class_distribution, num_classes, task, .. } => {
            assert_eq!(*num_classes, 2);
            assert_eq!(*task, ClassificationTask::Binary);
            assert_eq!(class_distribution.keys().collect::<Vec<_>>(), vec!["cat", "dog"]);
            assert!((class_distribution["cat"] - 0.5).abs() < 1e-12);
        }
        other => panic!("expected classification, got {:?}", other),
    }

    let numeric = df!(
        "x" => &[1.0, 2.0, 3.0, 4.0],
        "label" => &[Some(0i64), None, Some(1), Some(1)]
    )
    .unwrap();
    let fp = profile(&numeric, Some("label"));
    assert_eq!(fp.missing.total_missing_cells, 1);
    assert!(matches!(
        fp.target,
        Some(TargetStats::Classification { num_classes: 2, .. })
    ));
}

#[test]
fn test_missing_target_column() {
    let df = df!("x" => &[1.0, 2.0]).unwrap();
    let result = DatasetProfiler::new().profile(&df, Some("nope"));
    assert!(matches!(result, Err(ScoutError::ColumnNotFound(name)) if name == "nope"));
}

#[test]
fn test_fingerprint_json_round_trip() {
    let df = df!(
        "x" => &[1.0, 2.0, 3.0, 4.0],
        "y" => &[1.0, 1.0, 1.0, 1.0],
        "label" => &["p", "q", "p", "q"]
    )
    .unwrap();
    let fp = profile(&df, Some("label"));

    let json = fp.to_json_pretty().unwrap();
    let back = modelscout::profiler::DatasetFingerprint::from_json(&json).unwrap();
    assert_eq!(back, fp);
}
