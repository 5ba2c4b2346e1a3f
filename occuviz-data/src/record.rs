use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

pub const OCCUPATION_FIELD: &str = "occupation";
pub const EMPLOYMENT_FIELD: &str = "employment";
pub const HOURLY_WAGE_FIELD: &str = "hourly_wage";
pub const ANNUAL_WAGE_FIELD: &str = "annual_wage";

/// Largest accepted employment count, 2^53. Every count up to it is exact as
/// both an integer and a JSON float.
pub const MAX_EMPLOYMENT: u64 = 1 << 53;

/// Employment and wage figures for a single occupation.
///
/// `occupation` acts as the natural key. Uniqueness is not enforced, so a
/// dataset with repeated occupations loads fine but lookups by name
/// ([`Dataset::find`]) and name-derived colors cannot tell the entries apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationRecord {
    pub occupation: String,
    pub employment: u64,
    pub hourly_wage: f64,
    pub annual_wage: f64,
}

impl OccupationRecord {
    pub fn new(
        occupation: impl Into<String>,
        employment: u64,
        hourly_wage: f64,
        annual_wage: f64,
    ) -> Self {
        Self {
            occupation: occupation.into(),
            employment,
            hourly_wage,
            annual_wage,
        }
    }

    fn from_json(index: usize, value: &Value) -> Result<Self, LoadError> {
        let Value::Object(fields) = value else {
            return Err(LoadError::NotAnObject {
                index,
                found: json_type_name(value),
            });
        };

        let occupation = match required(fields, index, OCCUPATION_FIELD)? {
            Value::String(s) => s.clone(),
            other => {
                return Err(LoadError::InvalidField {
                    index,
                    field: OCCUPATION_FIELD,
                    reason: format!("expected a string, found {}", json_type_name(other)),
                })
            }
        };

        Ok(Self {
            occupation,
            employment: employment_count(fields, index)?,
            hourly_wage: non_negative_number(fields, index, HOURLY_WAGE_FIELD)?,
            annual_wage: non_negative_number(fields, index, ANNUAL_WAGE_FIELD)?,
        })
    }

    fn validate(&self, index: usize) -> Result<(), LoadError> {
        check_employment(index, self.employment)?;
        check_non_negative(index, HOURLY_WAGE_FIELD, self.hourly_wage)?;
        check_non_negative(index, ANNUAL_WAGE_FIELD, self.annual_wage)
    }
}

/// Read-only, validated sequence of records in source order.
///
/// Cloning is cheap: clones share the same storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Arc<[OccupationRecord]>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }
}

impl Dataset {
    /// Validate an already parsed JSON value
    #[tracing::instrument(skip_all)]
    pub fn from_value(value: &Value) -> Result<Self, LoadError> {
        let result = Self::validate_value(value);
        match &result {
            Ok(dataset) => tracing::debug!(records = dataset.len(), "loaded occupation dataset"),
            Err(err) => tracing::warn!(
                index = err.offending_index(),
                "rejected occupation dataset: {err}"
            ),
        }
        result
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(&value)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Build a dataset from records constructed in code, applying the same
    /// numeric checks as the JSON boundary.
    pub fn from_records(records: Vec<OccupationRecord>) -> Result<Self, LoadError> {
        for (index, record) in records.iter().enumerate() {
            record.validate(index)?;
        }
        Ok(Self {
            records: records.into(),
        })
    }

    fn validate_value(value: &Value) -> Result<Self, LoadError> {
        let Value::Array(items) = value else {
            return Err(LoadError::NotAnArray {
                found: json_type_name(value),
            });
        };

        let records = items
            .iter()
            .enumerate()
            .map(|(index, item)| OccupationRecord::from_json(index, item))
            .collect::<Result<Vec<_>, LoadError>>()?;

        Ok(Self {
            records: records.into(),
        })
    }

    pub fn records(&self) -> &[OccupationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&OccupationRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OccupationRecord> {
        self.records.iter()
    }

    /// First record with the given occupation. With duplicate occupations the
    /// later entries are unreachable through this lookup.
    pub fn find(&self, occupation: &str) -> Option<&OccupationRecord> {
        self.records.iter().find(|r| r.occupation == occupation)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a OccupationRecord;
    type IntoIter = std::slice::Iter<'a, OccupationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Load a dataset from a JSON source
pub fn load<R: Read>(source: R) -> Result<Dataset, LoadError> {
    Dataset::from_reader(source)
}

fn required<'a>(
    fields: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<&'a Value, LoadError> {
    // An explicit null counts as absent
    match fields.get(field) {
        None | Some(Value::Null) => Err(LoadError::MissingField { index, field }),
        Some(value) => Ok(value),
    }
}

fn non_negative_number(
    fields: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<f64, LoadError> {
    let value = required(fields, index, field)?;
    let number = value.as_f64().ok_or_else(|| LoadError::InvalidField {
        index,
        field,
        reason: format!("expected a number, found {}", json_type_name(value)),
    })?;
    check_non_negative(index, field, number)?;
    Ok(number)
}

fn employment_count(fields: &Map<String, Value>, index: usize) -> Result<u64, LoadError> {
    let value = required(fields, index, EMPLOYMENT_FIELD)?;
    if let Some(count) = value.as_u64() {
        check_employment(index, count)?;
        return Ok(count);
    }

    let number = non_negative_number(fields, index, EMPLOYMENT_FIELD)?;
    if number.fract() != 0.0 {
        return Err(LoadError::InvalidField {
            index,
            field: EMPLOYMENT_FIELD,
            reason: format!("expected a whole number, found {number}"),
        });
    }
    if number > MAX_EMPLOYMENT as f64 {
        return Err(employment_too_large(index, number));
    }
    Ok(number as u64)
}

fn check_employment(index: usize, count: u64) -> Result<(), LoadError> {
    if count > MAX_EMPLOYMENT {
        return Err(employment_too_large(index, count));
    }
    Ok(())
}

fn employment_too_large(index: usize, found: impl std::fmt::Display) -> LoadError {
    LoadError::InvalidField {
        index,
        field: EMPLOYMENT_FIELD,
        reason: format!("expected at most {MAX_EMPLOYMENT}, found {found}"),
    }
}

fn check_non_negative(index: usize, field: &'static str, number: f64) -> Result<(), LoadError> {
    if !number.is_finite() {
        return Err(LoadError::InvalidField {
            index,
            field,
            reason: format!("expected a finite number, found {number}"),
        });
    }
    if number < 0.0 {
        return Err(LoadError::InvalidField {
            index,
            field,
            reason: format!("expected a non-negative number, found {number}"),
        });
    }
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
