//! Narrow views over occupation records, one per chart family.
//!
//! Projections are pure and order preserving. They accept anything that exposes
//! the needed fields, so projecting an already projected view is the identity.

use crate::error::InvalidMetricError;
use crate::record::OccupationRecord;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

/// Wage figure a filterable chart plots
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Metric {
    #[default]
    HourlyWage,
    AnnualWage,
}

impl Metric {
    /// Parse a raw selection value such as `"annual_wage"`
    pub fn parse(value: &str) -> Result<Self, InvalidMetricError> {
        value.trim().parse().map_err(|_| InvalidMetricError {
            value: value.to_string(),
        })
    }
}

pub trait Occupational {
    fn occupation(&self) -> &str;
}

pub trait HasEmployment: Occupational {
    fn employment(&self) -> u64;
}

pub trait HasWages: Occupational {
    fn hourly_wage(&self) -> f64;
    fn annual_wage(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmploymentView {
    pub occupation: String,
    pub employment: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageView {
    pub occupation: String,
    pub hourly_wage: f64,
    pub annual_wage: f64,
}

impl WageView {
    /// Value of the selected metric, `None` when it is not a finite number
    pub fn metric_value(&self, metric: Metric) -> Option<f64> {
        let value = match metric {
            Metric::HourlyWage => self.hourly_wage,
            Metric::AnnualWage => self.annual_wage,
        };
        value.is_finite().then_some(value)
    }
}

pub fn to_employment_view<R: HasEmployment>(records: &[R]) -> Vec<EmploymentView> {
    records
        .iter()
        .map(|r| EmploymentView {
            occupation: r.occupation().to_string(),
            employment: r.employment(),
        })
        .collect()
}

pub fn to_wage_view<R: HasWages>(records: &[R]) -> Vec<WageView> {
    records
        .iter()
        .map(|r| WageView {
            occupation: r.occupation().to_string(),
            hourly_wage: r.hourly_wage(),
            annual_wage: r.annual_wage(),
        })
        .collect()
}

impl Occupational for OccupationRecord {
    fn occupation(&self) -> &str {
        &self.occupation
    }
}

impl HasEmployment for OccupationRecord {
    fn employment(&self) -> u64 {
        self.employment
    }
}

impl HasWages for OccupationRecord {
    fn hourly_wage(&self) -> f64 {
        self.hourly_wage
    }

    fn annual_wage(&self) -> f64 {
        self.annual_wage
    }
}

impl Occupational for EmploymentView {
    fn occupation(&self) -> &str {
        &self.occupation
    }
}

impl HasEmployment for EmploymentView {
    fn employment(&self) -> u64 {
        self.employment
    }
}

impl Occupational for WageView {
    fn occupation(&self) -> &str {
        &self.occupation
    }
}

impl HasWages for WageView {
    fn hourly_wage(&self) -> f64 {
        self.hourly_wage
    }

    fn annual_wage(&self) -> f64 {
        self.annual_wage
    }
}

impl crate::record::Dataset {
    pub fn employment_view(&self) -> Vec<EmploymentView> {
        to_employment_view(self.records())
    }

    pub fn wage_view(&self) -> Vec<WageView> {
        to_wage_view(self.records())
    }
}
