use crate::projection::Metric;
use strum::VariantNames;
use thiserror::Error;

/// Failure to load a dataset. Loading is all or nothing, so any of these means
/// no records were produced.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Malformed dataset JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset must be a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },

    #[error("Record {index} must be a JSON object, found {found}")]
    NotAnObject { index: usize, found: &'static str },

    #[error("Record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("Record {index} has invalid `{field}`: {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

impl LoadError {
    /// Position of the record that failed validation, when the failure is
    /// attributable to a single record.
    pub fn offending_index(&self) -> Option<usize> {
        match self {
            LoadError::NotAnObject { index, .. }
            | LoadError::MissingField { index, .. }
            | LoadError::InvalidField { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// A metric selection that does not name a known metric.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid metric `{value}`, expected one of: {}", Metric::VARIANTS.join(", "))]
pub struct InvalidMetricError {
    pub value: String,
}
