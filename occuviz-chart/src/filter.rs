//! Metric selection and range bounds for the filterable bar chart.
//!
//! The controller is a two state machine over [`Metric`]. Every effective
//! metric change replaces the whole [`FilterState`] in one assignment and issues
//! a new [`RebuildKey`], which tells the binding to rebuild its chart instead of
//! patching axis ranges carried over from the previous metric.

use crate::error::OccuvizChartError;
use occuviz_data::{InvalidMetricError, Metric, WageView};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub metric: Metric,
    pub range_min: f64,
    pub range_max: f64,
}

impl FilterState {
    /// Full range `[0, max]` for `metric` over `wages`
    pub fn reset(metric: Metric, wages: &[WageView]) -> Self {
        Self {
            metric,
            range_min: 0.0,
            range_max: max_for_metric(wages, metric),
        }
    }
}

/// Identity of a chart build. Changes exactly when the metric changes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RebuildKey(u64);

impl RebuildKey {
    pub fn value(&self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Selected metric was already active
    Unchanged,
    /// Metric switched; rebuild the chart under the new key
    Rebuild(RebuildKey),
}

/// Largest defined value of `metric`, 0 when there is none
pub fn max_for_metric(wages: &[WageView], metric: Metric) -> f64 {
    wages
        .iter()
        .filter_map(|w| w.metric_value(metric))
        .fold(0.0, f64::max)
}

#[derive(Debug, Clone)]
pub struct FilterController {
    wages: Vec<WageView>,
    state: FilterState,
    key: RebuildKey,
}

impl FilterController {
    /// Controller starting on the default metric (hourly wage)
    pub fn new(wages: Vec<WageView>) -> Self {
        Self::with_metric(wages, Metric::default())
    }

    pub fn with_metric(wages: Vec<WageView>, metric: Metric) -> Self {
        let state = FilterState::reset(metric, &wages);
        Self {
            wages,
            state,
            key: RebuildKey::default(),
        }
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn metric(&self) -> Metric {
        self.state.metric
    }

    pub fn rebuild_key(&self) -> RebuildKey {
        self.key
    }

    pub fn wages(&self) -> &[WageView] {
        &self.wages
    }

    /// Upper limit the range may be narrowed within
    pub fn limit(&self) -> f64 {
        max_for_metric(&self.wages, self.state.metric)
    }

    pub fn select_metric(&mut self, metric: Metric) -> Transition {
        if metric == self.state.metric {
            return Transition::Unchanged;
        }

        self.state = FilterState::reset(metric, &self.wages);
        self.key = self.key.next();
        tracing::debug!(
            %metric,
            range_max = self.state.range_max,
            key = self.key.value(),
            "metric changed, chart rebuild required"
        );
        Transition::Rebuild(self.key)
    }

    /// Select from a raw UI value. Unknown values leave the state untouched.
    pub fn select_metric_str(&mut self, value: &str) -> Result<Transition, InvalidMetricError> {
        match Metric::parse(value) {
            Ok(metric) => Ok(self.select_metric(metric)),
            Err(err) => {
                tracing::warn!("ignoring metric selection: {err}");
                Err(err)
            }
        }
    }

    /// Narrow the visible range. Bounds are clamped into `[0, limit]`; a range
    /// that is still inverted after clamping is rejected without changing state.
    pub fn narrow_range(&mut self, min: f64, max: f64) -> Result<FilterState, OccuvizChartError> {
        let limit = self.limit();
        if min.is_nan() || max.is_nan() {
            return Err(OccuvizChartError::InvalidRange { min, max, limit });
        }
        let lo = min.clamp(0.0, limit);
        let hi = max.clamp(0.0, limit);
        if lo > hi {
            return Err(OccuvizChartError::InvalidRange { min, max, limit });
        }

        self.state.range_min = lo;
        self.state.range_max = hi;
        tracing::debug!(range_min = lo, range_max = hi, "range narrowed");
        Ok(self.state)
    }
}
