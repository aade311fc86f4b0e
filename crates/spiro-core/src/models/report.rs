use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// One line of a rendered report. The renderer emits these in display
/// order; document sinks (PDF, DOCX) and the UI consume them without
/// recomputing anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ReportLine {
    Heading { text: String },
    Subheading { text: String },
    Field { label: String, value: String },
    Bullet { text: String },
    Paragraph { text: String },
    Blank,
}

/// A rendered report, ready for export or display.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportDocument {
    pub id: Uuid,
    pub title: String,
    /// Which instrument produced this report ("copd", "asthma").
    pub instrument_id: String,
    pub generated_at: jiff::Timestamp,
    pub lines: Vec<ReportLine>,
}

impl ReportDocument {
    pub fn new(title: impl Into<String>, instrument_id: impl Into<String>, lines: Vec<ReportLine>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            instrument_id: instrument_id.into(),
            generated_at: jiff::Timestamp::now(),
            lines,
        }
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
