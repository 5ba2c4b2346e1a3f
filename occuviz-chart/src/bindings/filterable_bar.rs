use super::{AxisOptions, Cell, Row};
use crate::config::ChartConfig;
use crate::filter::{max_for_metric, FilterState, RebuildKey};
use occuviz_data::{Metric, WageView};
use serde::Serialize;

/// Column of the data table the range control filters on
pub const FILTER_COLUMN_INDEX: usize = 1;

/// Range control descriptor. `min`/`max` are the slider extent; `low`/`high`
/// are the currently selected bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeFilter {
    pub control_type: &'static str,
    pub filter_column_index: usize,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterableBarOptions {
    pub title: String,
    pub chart_area_width: &'static str,
    pub h_axis: AxisOptions,
    pub v_axis: AxisOptions,
}

/// Horizontal bar chart of one wage metric with a range control.
///
/// Carries the controller's rebuild key: a renderer seeing a new key must
/// discard the previous chart rather than update it in place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterableBarSpec {
    pub chart_type: &'static str,
    pub key: RebuildKey,
    pub metric: Metric,
    pub data: Vec<Row>,
    pub options: FilterableBarOptions,
    pub range_filter: RangeFilter,
}

impl FilterableBarSpec {
    pub fn header(&self) -> &Row {
        &self.data[0]
    }

    pub fn rows(&self) -> &[Row] {
        &self.data[1..]
    }

    /// Rows the range control currently admits
    pub fn rows_in_range(&self) -> Vec<&Row> {
        self.rows()
            .iter()
            .filter(|row| {
                row.get(FILTER_COLUMN_INDEX)
                    .and_then(Cell::as_f64)
                    .is_some_and(|v| v >= self.range_filter.low && v <= self.range_filter.high)
            })
            .collect()
    }
}

#[tracing::instrument(skip_all, fields(metric = %state.metric, key = key.value()))]
pub fn filterable_bar(
    wages: &[WageView],
    state: &FilterState,
    key: RebuildKey,
    config: &ChartConfig,
) -> FilterableBarSpec {
    let metric = state.metric;
    let metric_label = config.metric_label(metric);
    let header: Row = vec![config.category_label.as_str().into(), metric_label.into()];

    let data = std::iter::once(header)
        .chain(wages.iter().filter_map(|w| {
            if w.occupation.is_empty() {
                return None;
            }
            w.metric_value(metric)
                .map(|value| vec![w.occupation.as_str().into(), value.into()])
        }))
        .collect();

    FilterableBarSpec {
        chart_type: "BarChart",
        key,
        metric,
        data,
        options: FilterableBarOptions {
            title: config.metric_title(metric).to_string(),
            chart_area_width: "65%",
            h_axis: AxisOptions {
                min_value: Some(0.0),
                ..AxisOptions::titled(metric_label)
            },
            v_axis: AxisOptions::titled(&config.category_label),
        },
        range_filter: RangeFilter {
            control_type: "NumberRangeFilter",
            filter_column_index: FILTER_COLUMN_INDEX,
            label: format!("Filter {metric_label}"),
            min: 0.0,
            max: max_for_metric(wages, metric),
            low: state.range_min,
            high: state.range_max,
        },
    }
}
