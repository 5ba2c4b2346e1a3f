use crate::bindings::{filterable_bar, grouped_bar, packing, ChartSpec};
use crate::config::ChartConfig;
use crate::error::OccuvizChartError;
use crate::filter::{FilterController, FilterState, Transition};
use crate::hierarchy::build_named_employment_hierarchy;
use occuviz_data::{Dataset, Metric};
use occuviz_scales::{display_count, ColorAssigner};
use serde::Serialize;
use strum::{Display, EnumIter, EnumString, VariantNames};

/// Selectable chart views. Parses from the kebab-case name or the legacy
/// selector letter (`a`, `b`, `c`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum ChartKind {
    #[strum(to_string = "grouped-bar", serialize = "a")]
    GroupedBar,
    #[strum(to_string = "filterable-bar", serialize = "b")]
    FilterableBar,
    #[strum(to_string = "packing", serialize = "c")]
    Packing,
}

impl ChartKind {
    pub fn parse(value: &str) -> Result<Self, OccuvizChartError> {
        value
            .trim()
            .parse()
            .map_err(|_| OccuvizChartError::UnknownChartKind(value.to_string()))
    }
}

/// Headline employment figure shown above the packing chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmploymentIndicator {
    pub headline: String,
    pub caption: String,
}

/// Owns the dataset and the filter controller for one dashboard view and
/// renders whichever chart is selected.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    config: ChartConfig,
    colors: ColorAssigner,
    filter: FilterController,
}

impl Dashboard {
    pub fn new(dataset: Dataset, config: ChartConfig) -> Result<Self, OccuvizChartError> {
        let colors = config.color_assigner()?;
        let filter = FilterController::new(dataset.wage_view());
        Ok(Self {
            dataset,
            config,
            colors,
            filter,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn colors(&self) -> &ColorAssigner {
        &self.colors
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter.state()
    }

    pub fn filter(&self) -> &FilterController {
        &self.filter
    }

    pub fn render(&self, kind: ChartKind) -> ChartSpec {
        tracing::debug!(%kind, "rendering chart");
        match kind {
            ChartKind::GroupedBar => {
                grouped_bar(&self.dataset.employment_view(), &self.colors, &self.config).into()
            }
            ChartKind::FilterableBar => filterable_bar(
                self.filter.wages(),
                &self.filter.state(),
                self.filter.rebuild_key(),
                &self.config,
            )
            .into(),
            ChartKind::Packing => {
                let root = build_named_employment_hierarchy(
                    &self.config.hierarchy_root,
                    &self.dataset.employment_view(),
                );
                packing(&root, &self.colors).into()
            }
        }
    }

    pub fn render_str(&self, selector: &str) -> Result<ChartSpec, OccuvizChartError> {
        ChartKind::parse(selector)
            .inspect_err(|err| tracing::warn!("unexpected chart selector: {err}"))
            .map(|kind| self.render(kind))
    }

    pub fn select_metric(&mut self, metric: Metric) -> Transition {
        self.filter.select_metric(metric)
    }

    pub fn select_metric_str(&mut self, value: &str) -> Result<Transition, OccuvizChartError> {
        Ok(self.filter.select_metric_str(value)?)
    }

    pub fn narrow_range(&mut self, min: f64, max: f64) -> Result<FilterState, OccuvizChartError> {
        self.filter.narrow_range(min, max)
    }

    /// First record's employment, thousands-separated; `"0"` with no records
    pub fn employment_indicator(&self) -> EmploymentIndicator {
        EmploymentIndicator {
            headline: display_count(self.dataset.get(0).map(|r| r.employment)),
            caption: self.config.indicator_caption.clone(),
        }
    }
}
