//! Column extraction from polars frames

use polars::prelude::*;

use super::fingerprint::FeatureKind;
use crate::error::Result;

/// Assign a feature kind to a polars dtype.
///
/// Priority: boolean, then temporal, then numeric. Untyped all-null columns
/// count as numerical; strings, categoricals and nested types as categorical.
pub fn classify_dtype(dtype: &DataType) -> FeatureKind {
    if dtype.is_bool() {
        FeatureKind::Boolean
    } else if dtype.is_temporal() {
        FeatureKind::Datetime
    } else if dtype.is_primitive_numeric() || matches!(dtype, DataType::Null) {
        FeatureKind::Numerical
    } else {
        FeatureKind::Categorical
    }
}

/// Materialized view of one column
#[derive(Debug, Clone)]
pub(crate) struct ColumnData {
    pub name: String,
    pub kind: FeatureKind,
    /// Nulls, plus NaN for float columns
    pub missing: usize,
    /// Populated for numerical columns only; NaN is stored as `None`
    pub numeric: Option<Vec<Option<f64>>>,
}

impl ColumnData {
    pub fn from_column(column: &Column) -> Result<Self> {
        let name = column.name().to_string();
        let kind = classify_dtype(column.dtype());

        if kind == FeatureKind::Numerical {
            let values = numeric_values(column)?;
            let missing = values.iter().filter(|v| v.is_none()).count();
            return Ok(Self {
                name,
                kind,
                missing,
                numeric: Some(values),
            });
        }

        Ok(Self {
            name,
            kind,
            missing: column.null_count(),
            numeric: None,
        })
    }

    /// Non-missing numeric values, empty for other kinds
    pub fn present_values(&self) -> Vec<f64> {
        self.numeric
            .as_ref()
            .map(|values| values.iter().flatten().copied().collect())
            .unwrap_or_default()
    }
}

/// Numeric values cast to f64, NaN mapped to `None`
pub(crate) fn numeric_values(column: &Column) -> Result<Vec<Option<f64>>> {
    let series = column.as_materialized_series().cast(&DataType::Float64)?;
    let ca = series.f64()?;
    Ok(ca
        .into_iter()
        .map(|v| v.filter(|x| !x.is_nan()))
        .collect())
}

/// Values rendered as labels, `None` for nulls
pub(crate) fn label_values(column: &Column) -> Result<Vec<Option<String>>> {
    let series = column.as_materialized_series();
    let as_text = match series.cast(&DataType::String) {
        Ok(text) => text,
        // Some physical types (durations) have no string cast
        Err(_) => series.to_physical_repr().cast(&DataType::String)?,
    };
    let ca = as_text.str()?;
    Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect())
}
