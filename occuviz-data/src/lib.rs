pub mod error;
pub mod projection;
pub mod record;

pub use error::{InvalidMetricError, LoadError};
pub use projection::{
    to_employment_view, to_wage_view, EmploymentView, HasEmployment, HasWages, Metric,
    Occupational, WageView,
};
pub use record::{load, Dataset, OccupationRecord, MAX_EMPLOYMENT};
