//! Baseline suggestions and strategy tips

use crate::catalog::ProblemType;
use crate::profiler::DatasetFingerprint;

/// More categorical columns than this triggers the encoding tip
const MANY_CATEGORICAL_COLUMNS: usize = 5;

/// A solid first model to try for the problem type
pub fn baseline_suggestion(problem_type: ProblemType) -> &'static str {
    match problem_type {
        ProblemType::Classification => "Random Forest (with default parameters) or Logistic Regression",
        _ => "Random Forest Regressor or Ridge Regression",
    }
}

/// Practical modelling tips for the profiled dataset.
///
/// The general baseline tip is always last.
pub fn strategy_tips(fingerprint: &DatasetFingerprint) -> Vec<String> {
    let mut tips = Vec::new();
    let types = &fingerprint.feature_types;

    if fingerprint.has_missing_values() {
        tips.push(
            "Tip: XGBoost and LightGBM handle missing values natively. Using them saves you from complex imputation strategies."
                .to_string(),
        );
    }

    if fingerprint.is_target_imbalanced() {
        tips.push(
            "Tip: For imbalanced data, try StratifiedKFold cross-validation and use metrics like F1-Macro or AUC instead of Accuracy."
                .to_string(),
        );
    }

    if types.numerical.count > 0 && types.categorical.count > 0 {
        tips.push(
            "Tip: Tree-based models (RF, XGB) often outperform linear models on mixed data types without heavy preprocessing."
                .to_string(),
        );
    }

    if types.categorical.count > MANY_CATEGORICAL_COLUMNS {
        tips.push(
            "Tip: Many categorical columns? Try target encoding or CatBoost, which handles them automatically."
                .to_string(),
        );
    }

    tips.push(
        "Tip: Always start with a simple baseline submission to test the end-to-end pipeline before tuning complex models."
            .to_string(),
    );
    tips
}
