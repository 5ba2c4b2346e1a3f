use super::{AxisOptions, Cell, Row};
use crate::config::ChartConfig;
use occuviz_data::EmploymentView;
use occuviz_scales::ColorAssigner;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOptions {
    pub position: &'static str,
    pub max_lines: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarOptions {
    pub group_width: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedBarOptions {
    pub title: String,
    pub legend: LegendOptions,
    pub bar: BarOptions,
    pub v_axis: AxisOptions,
    pub h_axis: AxisOptions,
}

/// Column chart of employment per occupation, one colored bar per record.
///
/// `data[0]` is the header row `[category, value, {role: "style"}]`; the
/// remaining rows follow input order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedBarSpec {
    pub chart_type: &'static str,
    pub data: Vec<Row>,
    pub options: GroupedBarOptions,
}

impl GroupedBarSpec {
    pub fn header(&self) -> &Row {
        &self.data[0]
    }

    pub fn rows(&self) -> &[Row] {
        &self.data[1..]
    }
}

#[tracing::instrument(skip_all, fields(rows = views.len()))]
pub fn grouped_bar(
    views: &[EmploymentView],
    colors: &ColorAssigner,
    config: &ChartConfig,
) -> GroupedBarSpec {
    let header: Row = vec![
        config.category_label.as_str().into(),
        config.employment_label.as_str().into(),
        Cell::style_role(),
    ];

    let data = std::iter::once(header)
        .chain(views.iter().map(|v| {
            vec![
                v.occupation.as_str().into(),
                v.employment.into(),
                colors.style_for(colors.color_index_of(&v.occupation)).into(),
            ]
        }))
        .collect();

    GroupedBarSpec {
        chart_type: "ColumnChart",
        data,
        options: GroupedBarOptions {
            title: config.grouped_bar_title.clone(),
            legend: LegendOptions {
                position: "top",
                max_lines: 3,
            },
            bar: BarOptions { group_width: "80%" },
            v_axis: AxisOptions::titled(&config.employment_label),
            h_axis: AxisOptions {
                slanted_text: Some(true),
                slanted_text_angle: Some(30),
                ..AxisOptions::titled(&config.category_label)
            },
        },
    }
}
