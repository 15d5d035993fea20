//! Utilities for working with Polars DataFrames
//!
//! Prediction tables usually arrive as DataFrames with one row per sample.
//! These helpers pull aligned label/score vectors out of such a table and turn
//! a computed curve back into a DataFrame.

use polars::prelude::*;
use crate::error::MccF1Error;
use crate::types::MccF1Curve;

/// Validate that a DataFrame contains all required columns
///
/// # Arguments
///
/// * `df` - The DataFrame to validate
/// * `required_columns` - Slice of required column names
///
/// # Returns
///
/// `Ok(())` if all columns are present, error otherwise
pub fn validate_columns(df: &DataFrame, required_columns: &[&str]) -> Result<(), MccF1Error> {
    let column_names: Vec<String> = df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for col in required_columns {
        if !column_names.iter().any(|c| c == col) {
            return Err(MccF1Error::MissingColumn(col.to_string()));
        }
    }

    Ok(())
}

/// Extract aligned labels and scores from a DataFrame
///
/// The label column may be Boolean or an integer column holding 0/1. The score
/// column may be any numeric type; it is cast to Float64.
///
/// # Errors
///
/// * `MissingColumn` if either column is absent
/// * `InvalidDataFrame` if a value is null, or a label is not 0/1
pub fn inputs_from_dataframe(
    df: &DataFrame,
    label_column: &str,
    score_column: &str,
) -> Result<(Vec<bool>, Vec<f64>), MccF1Error> {
    validate_columns(df, &[label_column, score_column])?;

    let labels = extract_labels(df.column(label_column)?.as_materialized_series())?;

    let score_series = df
        .column(score_column)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let scores = score_series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.ok_or_else(|| MccF1Error::InvalidDataFrame(
                format!("null score in column '{}' at row {}", score_column, row)
            ))
        })
        .collect::<Result<Vec<f64>, MccF1Error>>()?;

    Ok((labels, scores))
}

fn extract_labels(series: &Series) -> Result<Vec<bool>, MccF1Error> {
    let name = series.name().to_string();

    if matches!(series.dtype(), DataType::Boolean) {
        return series
            .bool()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| {
                v.ok_or_else(|| MccF1Error::InvalidDataFrame(
                    format!("null label in column '{}' at row {}", name, row)
                ))
            })
            .collect();
    }

    if !series.dtype().is_integer() {
        return Err(MccF1Error::InvalidDataFrame(
            format!("label column '{}' must be Boolean or integer, got {:?}", name, series.dtype())
        ));
    }

    let as_int = series.cast(&DataType::Int64)?;
    let labels = as_int
        .i64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| match v {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            Some(other) => Err(MccF1Error::InvalidDataFrame(
                format!("label in column '{}' at row {} must be 0 or 1, got {}", name, row, other)
            )),
            None => Err(MccF1Error::InvalidDataFrame(
                format!("null label in column '{}' at row {}", name, row)
            )),
        })
        .collect::<Result<Vec<bool>, MccF1Error>>()?;

    Ok(labels)
}

/// Convert an MCC-F1 curve into a DataFrame
///
/// Columns: `threshold`, `mcc`, `f1`, one row per curve point.
pub fn curve_to_dataframe(curve: &MccF1Curve) -> Result<DataFrame, MccF1Error> {
    let df = df! {
        "threshold" => curve.thresholds.as_slice(),
        "mcc" => curve.mcc.as_slice(),
        "f1" => curve.f1.as_slice(),
    }?;

    Ok(df)
}
