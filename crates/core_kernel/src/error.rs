//! Core error types used across the system

use thiserror::Error;

use crate::record::FieldKind;

/// Errors raised while parsing a flat field record
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: expected {expected}, found {found}")]
    InvalidValue {
        field: &'static str,
        expected: FieldKind,
        found: String,
    },
}

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        CoreError::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}
