use thiserror::Error;

use crate::antenna::PatternKind;

#[derive(Error, Debug)]
pub enum GainError {
    #[error("antenna '{id}' is a {kind} pattern and cannot answer a {query} query")]
    InvalidConfiguration {
        id: String,
        kind: PatternKind,
        query: &'static str,
    },

    #[error("{file}:{line}: {message}")]
    Parse {
        file: String,
        line: usize,
        message: String,
    },

    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Insufficient data: need {needed} samples, have {available}")]
    InsufficientData { needed: usize, available: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("invalid antenna catalog: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GainError {
    /// True for faults caused by querying a pattern the wrong way, as opposed
    /// to faults caused by bad input data.
    pub fn is_configuration_fault(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}

pub type Result<T> = std::result::Result<T, GainError>;
