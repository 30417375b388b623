//! Polars `AnyValue` conversions used when reading results back out.

use pbp_model::Result;
use polars::prelude::*;

/// Renders an `AnyValue` for display; nulls become an empty string.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float64(v) => format_float(v),
        AnyValue::Float32(v) => format_float(f64::from(v)),
        other => other.to_string(),
    }
}

fn format_float(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Collect a column as `i64` values, casting as needed.
pub fn i64_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    let column = df.column(name)?.cast(&DataType::Int64)?;
    Ok(column.i64()?.into_iter().collect())
}
