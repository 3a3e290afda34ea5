//! XGID decode error types

use thiserror::Error;

/// Shape the coarse structural gate checks before the full field split.
pub const EXPECTED_SHAPE: &str = "[XGID=]<points>:<cube>:<cube owner>:<turn>:<dice>:<score X>:<score O>:<rules>:<match length>";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid XGID: input must be a non-empty string")]
    Empty,

    #[error("Invalid XGID format: does not match expected pattern {}", EXPECTED_SHAPE)]
    Pattern,

    #[error("Invalid XGID format: expected at least 9 parts, got {found}")]
    FieldCount { found: usize },

    #[error("Invalid XGID format: {field} is not a valid value: '{value}'")]
    InvalidField { field: &'static str, value: String },
}
