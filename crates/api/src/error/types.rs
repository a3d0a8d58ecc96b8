//! Error type definitions for the hygiene primitives

use thiserror::Error as ThisError;

/// Primary error type for the fallible hygiene entry points
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The entropy source reported a hard failure
    #[error("Random generation error: {context}: {message}")]
    RandomGeneration {
        context: &'static str,
        message: String,
    },

    /// A caller-supplied parameter is outside its documented domain
    #[error("Invalid parameter '{context}': {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// A buffer is shorter than the length the operation was asked to cover
    #[error("{context}: invalid length (expected at least {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Result type for the hygiene primitives
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::RandomGeneration { message, .. } => Self::RandomGeneration { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
        }
    }

    /// Shorthand to create a `RandomGeneration` error
    pub fn random(context: &'static str, message: impl Into<String>) -> Self {
        Self::RandomGeneration {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }
}
