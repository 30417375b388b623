//! Input-contract validation for event tables.
//!
//! The core never invents values for missing inputs: an absent column or a
//! text column where numbers are expected stops the step before any output
//! is produced.

use pbp_model::columns;
use pbp_model::{PbpError, Result};
use polars::prelude::*;
use tracing::trace;

/// Returns true if `df` has a column called `name`.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Fail with [`PbpError::MissingColumn`] on the first absent column.
pub fn require_columns(df: &DataFrame, required: &[&str], stage: &str) -> Result<()> {
    for name in required {
        if !has_column(df, name) {
            return Err(PbpError::MissingColumn {
                column: (*name).to_string(),
                stage: stage.to_string(),
            });
        }
    }
    Ok(())
}

/// Fail with [`PbpError::ColumnType`] if a present column is not numeric.
///
/// All-null columns are accepted; they carry no values to misread.
pub fn require_numeric(df: &DataFrame, names: &[&str]) -> Result<()> {
    for name in names {
        let Ok(column) = df.column(name) else {
            continue;
        };
        let dtype = column.dtype();
        if !is_numeric_dtype(dtype) && column.null_count() != column.len() {
            return Err(PbpError::ColumnType {
                column: (*name).to_string(),
                expected: "numeric".to_string(),
                found: dtype.to_string(),
            });
        }
    }
    Ok(())
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
            | DataType::Null
    )
}

/// Cast every roster slot and actor id column present in `df` to `Int64`.
///
/// Ids are often exported as floats (`8471214.0`) and unused roster slots
/// arrive as empty text. Both become integers or nulls here so that id
/// comparisons never see mismatched types.
pub fn coerce_id_columns(df: &DataFrame) -> Result<DataFrame> {
    let exprs: Vec<Expr> = columns::id_columns()
        .filter(|name| has_column(df, name))
        .map(|name| {
            col(name)
                .cast(DataType::Float64)
                .cast(DataType::Int64)
                .alias(name)
        })
        .collect();
    if exprs.is_empty() {
        return Ok(df.clone());
    }
    trace!(columns = exprs.len(), "coercing id columns to Int64");
    Ok(df.clone().lazy().with_columns(exprs).collect()?)
}

/// Read a column as `Float64`, keeping nulls.
pub fn float_column(df: &DataFrame, name: &str) -> Result<Float64Chunked> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.clone())
}
