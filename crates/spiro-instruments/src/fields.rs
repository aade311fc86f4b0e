use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// What kind of value a questionnaire field holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Spirometric ratio (e.g. FEV1/FVC).
    Ratio,
    /// Percentage of a predicted value.
    Percent,
    /// Non-negative event count.
    Count,
    /// Bounded integer scale (e.g. mMRC 0-4).
    Scale,
    /// One of a fixed set of category tokens.
    Category { options: Vec<String> },
    /// Free text.
    Text,
}

/// Valid numeric range for a field. `max` is open-ended for counts and
/// percentages that may exceed 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldRange {
    pub min: f64,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl FieldRange {
    pub fn contains(&self, value: f64) -> bool {
        if value < self.min {
            return false;
        }
        if let Some(max) = self.max
            && value > max
        {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// Declarative description of one questionnaire field. The wizard renders
/// its steps from these; validation checks forms against them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub id: String,
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub range: Option<FieldRange>,
}

/// A single presence or range violation found while validating a form.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field_id: String,
    /// The offending value, absent when the field itself was missing.
    pub value: Option<f64>,
    pub expected_range: Option<FieldRange>,
    pub message: String,
}

impl ValidationError {
    pub fn missing(instrument: &str, field_id: &str, field_name: &str) -> Self {
        Self {
            field_id: field_id.to_string(),
            value: None,
            expected_range: None,
            message: format!("{instrument}: {field_name} is required"),
        }
    }

    pub fn out_of_range(instrument: &str, field: &FieldSpec, value: f64, range: FieldRange) -> Self {
        let bound = match range.max {
            Some(max) => format!("[{}, {}]", range.min, max),
            None => format!("[{}, +inf)", range.min),
        };
        Self {
            field_id: field.id.clone(),
            value: Some(value),
            expected_range: Some(range),
            message: format!(
                "{}: {} value {} is outside range {}",
                instrument, field.name, value, bound,
            ),
        }
    }
}
