use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid vector name: '{0}'")]
    InvalidName(String),

    #[error("vector name '{name}' is longer than {max} characters")]
    NameTooLong { name: String, max: usize },

    #[error("{role} not found: {name}")]
    NotFound { role: &'static str, name: String },

    #[error("syntax: {usage}")]
    Syntax { usage: &'static str },

    #[error("{0}")]
    InvalidExpression(String),

    #[error("dot product is a scalar and cannot be assigned to a vector")]
    ScalarAssignment,

    #[error("scalar multiplication requires one number and one vector")]
    AmbiguousMultiply,

    #[error("storage full ({capacity} vectors)")]
    CapacityExceeded { capacity: usize },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn not_found(role: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            role,
            name: name.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
