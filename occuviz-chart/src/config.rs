use crate::error::OccuvizChartError;
use crate::hierarchy::DEFAULT_ROOT_NAME;
use occuviz_data::Metric;
use occuviz_scales::{ColorAssigner, ColorPalette};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Titles, axis labels and palette shared by all chart bindings.
///
/// Every field is optional when deserializing; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ChartConfig {
    pub category_label: String,
    pub employment_label: String,
    pub hierarchy_root: String,
    pub grouped_bar_title: String,
    pub hourly_wage_label: String,
    pub annual_wage_label: String,
    pub hourly_wage_title: String,
    pub annual_wage_title: String,
    pub indicator_caption: String,
    /// CSS hex colors, in palette order
    pub palette: Vec<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            category_label: "Occupation".to_string(),
            employment_label: "Employment".to_string(),
            hierarchy_root: DEFAULT_ROOT_NAME.to_string(),
            grouped_bar_title: "Occupational Employment".to_string(),
            hourly_wage_label: "Hourly Wage ($)".to_string(),
            annual_wage_label: "Annual Wage ($)".to_string(),
            hourly_wage_title: "Hourly Wage by Occupation".to_string(),
            annual_wage_title: "Annual Wage by Occupation".to_string(),
            indicator_caption: "Employers".to_string(),
            palette: ColorPalette::category10().to_hex_vec(),
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> Result<Self, OccuvizChartError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OccuvizChartError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    pub fn metric_label(&self, metric: Metric) -> &str {
        match metric {
            Metric::HourlyWage => &self.hourly_wage_label,
            Metric::AnnualWage => &self.annual_wage_label,
        }
    }

    pub fn metric_title(&self, metric: Metric) -> &str {
        match metric {
            Metric::HourlyWage => &self.hourly_wage_title,
            Metric::AnnualWage => &self.annual_wage_title,
        }
    }

    pub fn color_assigner(&self) -> Result<ColorAssigner, OccuvizChartError> {
        Ok(ColorAssigner::new(ColorPalette::from_hex(&self.palette)?))
    }
}
