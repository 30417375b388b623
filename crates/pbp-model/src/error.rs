use thiserror::Error;

#[derive(Debug, Error)]
pub enum PbpError {
    #[error("missing required column `{column}` for {stage}")]
    MissingColumn { column: String, stage: String },
    #[error("column `{column}` must be {expected}, found {found}")]
    ColumnType {
        column: String,
        expected: String,
        found: String,
    },
    #[error("invalid strength state: {0}")]
    InvalidStrength(String),
    #[error("invalid feature configuration: {0}")]
    InvalidConfig(String),
    #[error("step `{step}` is out of order: requires {requires}")]
    StepOrder { step: String, requires: String },
    #[error("unknown statistic category: {0}")]
    UnknownCategory(String),
    #[cfg(feature = "polars")]
    #[error("polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

pub type Result<T> = std::result::Result<T, PbpError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn stage_of(error: &PbpError) -> &'static str {
        match error {
            PbpError::MissingColumn { .. } | PbpError::ColumnType { .. } => "input contract",
            PbpError::InvalidStrength(_) | PbpError::InvalidConfig(_) => "arguments",
            PbpError::StepOrder { .. } | PbpError::UnknownCategory(_) => "composition",
            #[cfg(feature = "polars")]
            PbpError::Polars(_) => "engine",
        }
    }

    #[test]
    fn errors_name_the_offending_input() {
        let cases = [
            (
                PbpError::MissingColumn {
                    column: "xC".to_string(),
                    stage: "distance".to_string(),
                },
                "xC",
            ),
            (PbpError::InvalidStrength("6v5".to_string()), "6v5"),
            (
                PbpError::StepOrder {
                    step: "Rebound".to_string(),
                    requires: "time_diff".to_string(),
                },
                "time_diff",
            ),
            (PbpError::UnknownCategory("assists".to_string()), "assists"),
        ];
        for (error, needle) in cases {
            assert!(error.to_string().contains(needle), "{error}");
            assert_ne!(stage_of(&error), "engine");
        }
    }
}
