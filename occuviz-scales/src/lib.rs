pub mod color;
pub mod error;
pub mod format;

pub use color::{hash_key, ColorAssigner, ColorAssignment, ColorPalette, CATEGORY10};
pub use error::OccuvizScaleError;
pub use format::{
    display_count, display_name, display_value, format_count, format_thousands,
    MissingDisplayValue, NumberFormat,
};
