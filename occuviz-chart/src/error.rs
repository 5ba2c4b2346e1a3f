use occuviz_data::{InvalidMetricError, LoadError};
use occuviz_scales::OccuvizScaleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OccuvizChartError {
    #[error("Load error: `{0}`")]
    LoadError(#[from] LoadError),

    #[error(transparent)]
    InvalidMetric(#[from] InvalidMetricError),

    #[error("Scale error: `{0}`")]
    ScaleError(#[from] OccuvizScaleError),

    #[error("Invalid range [{min}, {max}] for limit {limit}")]
    InvalidRange { min: f64, max: f64, limit: f64 },

    #[error("Unknown chart kind: `{0}`")]
    UnknownChartKind(String),

    #[error("Failed to read config: `{0}`")]
    ConfigIoError(#[from] std::io::Error),

    #[error("JSON error: `{0}`")]
    JsonError(#[from] serde_json::Error),
}
