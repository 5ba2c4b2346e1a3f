#[derive(Debug, PartialEq, thiserror::Error)]
pub enum OccuvizScaleError {
    #[error("Palette must contain at least one color")]
    EmptyPalette,

    #[error("Invalid palette color `{color}`: {reason}")]
    InvalidColor { color: String, reason: String },
}
