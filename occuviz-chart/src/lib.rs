pub mod bindings;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod hierarchy;

pub use bindings::{
    filterable_bar, grouped_bar, packing, Cell, ChartSpec, FilterableBarSpec, GroupedBarSpec,
    PackedNode, PackingSpec, RangeFilter, Row,
};
pub use config::ChartConfig;
pub use dashboard::{ChartKind, Dashboard, EmploymentIndicator};
pub use error::OccuvizChartError;
pub use filter::{max_for_metric, FilterController, FilterState, RebuildKey, Transition};
pub use hierarchy::{build_employment_hierarchy, build_named_employment_hierarchy, HierarchyNode};
