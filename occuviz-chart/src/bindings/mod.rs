//! Chart bindings turn projected data, styling and filter state into
//! declarative chart specifications for an external renderer.
//!
//! Bindings are pure. A spec is built once and handed off; nothing in this
//! crate reads it back except for tests.

pub mod filterable_bar;
pub mod grouped_bar;
pub mod packing;

use serde::Serialize;

pub use filterable_bar::{filterable_bar, FilterableBarSpec, RangeFilter};
pub use grouped_bar::{grouped_bar, GroupedBarSpec};
pub use packing::{packing, PackedNode, PackingSpec};

/// One cell of a tabular data row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Integer(u64),
    Number(f64),
    /// Column role marker used in header rows, e.g. `{"role": "style"}`
    Role { role: String },
}

impl Cell {
    pub fn style_role() -> Self {
        Cell::Role {
            role: "style".to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(v) => Some(*v as f64),
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::Integer(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

pub type Row = Vec<Cell>;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slanted_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slanted_text_angle: Option<u32>,
}

impl AxisOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            min_value: None,
            slanted_text: None,
            slanted_text_angle: None,
        }
    }
}

/// Any chart this crate can describe
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    GroupedBar(GroupedBarSpec),
    Packing(PackingSpec),
    FilterableBar(FilterableBarSpec),
}

impl ChartSpec {
    pub fn to_json_string(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl From<GroupedBarSpec> for ChartSpec {
    fn from(spec: GroupedBarSpec) -> Self {
        ChartSpec::GroupedBar(spec)
    }
}

impl From<PackingSpec> for ChartSpec {
    fn from(spec: PackingSpec) -> Self {
        ChartSpec::Packing(spec)
    }
}

impl From<FilterableBarSpec> for ChartSpec {
    fn from(spec: FilterableBarSpec) -> Self {
        ChartSpec::FilterableBar(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cells_serialize_untagged() {
        let row: Row = vec!["Nurse".into(), 1000u64.into(), 40.5.into(), Cell::style_role()];
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!(["Nurse", 1000, 40.5, {"role": "style"}])
        );
    }

    #[test]
    fn test_cell_accessors() {
        assert_eq!(Cell::from("Pilot").as_str(), Some("Pilot"));
        assert_eq!(Cell::from(200u64).as_f64(), Some(200.0));
        assert_eq!(Cell::style_role().as_f64(), None);
    }
}
