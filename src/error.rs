use crate::problem::Operator;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum SheetError {
    /// The configured operator symbol is not one of `+`, `-`, `*`, `/`
    #[error("invalid operator {0:?}, expected one of \"+\", \"-\", \"*\", \"/\"")]
    InvalidOperator(String),

    /// A division-only query was made against a non-division problem
    #[error("remainder is only defined for division problems, not {operator}")]
    NotApplicable { operator: Operator },

    /// A configured numeric range has its minimum above its maximum
    #[error("invalid {what} range: minimum {min} exceeds maximum {max}")]
    InvalidRange {
        what: &'static str,
        min: i64,
        max: i64,
    },

    /// The operand sampler could not find a pair whose answer lands in the
    /// configured answer range
    #[error(
        "gave up sampling operands after {attempts} attempts; the answer range is likely unsatisfiable"
    )]
    ExhaustedSampling { attempts: u32 },

    /// Canvas save/restore calls were not strictly nested
    #[error("unbalanced canvas graphics state: {0}")]
    GraphicsState(&'static str),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    /// The settings file could not be deserialized
    Config(#[from] serde_json::Error),
}
