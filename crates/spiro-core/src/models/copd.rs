use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Raw COPD questionnaire state as the wizard hands it over. Fields the
/// respondent has not reached yet are `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CopdForm {
    pub ratio: Option<f64>,
    pub fev1_percent: Option<f64>,
    pub exacerbations: Option<u32>,
    pub hospitalizations: Option<u32>,
    pub mmrc: Option<u8>,
    #[serde(default)]
    pub inhalers: Vec<String>,
    pub frequency: Option<String>,
}

/// Validated COPD inputs. Immutable once constructed; one classification
/// call consumes one of these.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CopdInput {
    /// FEV1/FVC ratio. Below 0.70 is the conventional obstruction threshold.
    pub ratio: f64,
    /// FEV1 as a percentage of predicted.
    pub fev1_percent: f64,
    /// Moderate exacerbations in the past year.
    pub exacerbations: u32,
    /// Exacerbations requiring hospitalization in the past year.
    pub hospitalizations: u32,
    /// mMRC dyspnea scale, 0-4.
    pub mmrc: u8,
    pub inhalers: Vec<String>,
    /// Free-text inhaler use frequency (times per week).
    pub frequency: Option<String>,
}

/// GOLD airflow-obstruction grade, from FEV1 % predicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GoldGrade {
    Gold1,
    Gold2,
    Gold3,
    Gold4,
}

impl GoldGrade {
    pub fn number(self) -> u8 {
        match self {
            GoldGrade::Gold1 => 1,
            GoldGrade::Gold2 => 2,
            GoldGrade::Gold3 => 3,
            GoldGrade::Gold4 => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GoldGrade::Gold1 => "GOLD 1 (Mild)",
            GoldGrade::Gold2 => "GOLD 2 (Moderate)",
            GoldGrade::Gold3 => "GOLD 3 (Severe)",
            GoldGrade::Gold4 => "GOLD 4 (Very Severe)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GoldGrade::Gold1 => "Mild airflow limitation: FEV1 at or above 80% of predicted.",
            GoldGrade::Gold2 => "Moderate airflow limitation: FEV1 between 50% and 79% of predicted.",
            GoldGrade::Gold3 => "Severe airflow limitation: FEV1 between 30% and 49% of predicted.",
            GoldGrade::Gold4 => "Very severe airflow limitation: FEV1 below 30% of predicted.",
        }
    }
}

impl TryFrom<u8> for GoldGrade {
    type Error = CoreError;

    fn try_from(number: u8) -> Result<Self, CoreError> {
        match number {
            1 => Ok(GoldGrade::Gold1),
            2 => Ok(GoldGrade::Gold2),
            3 => Ok(GoldGrade::Gold3),
            4 => Ok(GoldGrade::Gold4),
            other => Err(CoreError::InvalidGrade(other)),
        }
    }
}

/// GOLD risk/symptom group. Exacerbation risk dominates symptom burden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AbeGroup {
    A,
    B,
    E,
}

impl AbeGroup {
    pub fn letter(self) -> &'static str {
        match self {
            AbeGroup::A => "A",
            AbeGroup::B => "B",
            AbeGroup::E => "E",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AbeGroup::A => "Low exacerbation risk, fewer symptoms (mMRC 0-1).",
            AbeGroup::B => "Low exacerbation risk, more symptoms (mMRC 2 or higher).",
            AbeGroup::E => {
                "High exacerbation risk: two or more moderate exacerbations, \
                 or at least one requiring hospitalization, in the past year."
            }
        }
    }

    /// Initial pharmacological treatment per group. Static guideline text.
    pub fn recommendation(self) -> &'static str {
        match self {
            AbeGroup::A => {
                "A bronchodilator, long-acting (LABA or LAMA) preferred. \
                 A short-acting bronchodilator (SABA) should be available for rescue use."
            }
            AbeGroup::B => {
                "LABA + LAMA combination therapy, in a single inhaler where possible. \
                 A rescue SABA should remain available."
            }
            AbeGroup::E => {
                "LABA + LAMA combination therapy. Consider escalation to triple therapy \
                 (LABA + LAMA + ICS) if blood eosinophils are 300 cells/uL or higher, or \
                 with a history of concomitant asthma. A rescue SABA should remain available."
            }
        }
    }
}

/// Full COPD classification outcome. Carries every derived display string
/// the report renderer needs; the renderer performs no interpretation of
/// raw codes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CopdResult {
    pub gold_grade: GoldGrade,
    pub gold_description: String,
    pub abe_group: AbeGroup,
    pub abe_description: String,
    pub recommendation: String,
    /// Diagnostic note from the FEV1/FVC ratio. Informational only; it does
    /// not alter grade or group.
    pub obstruction_note: String,
    /// Echo of the validated inputs, for report display.
    pub input: CopdInput,
}

impl CopdResult {
    /// Assemble a result from the classified grade and group. The derived
    /// description strings are filled in here so they stay a pure function
    /// of the grade and group.
    pub fn new(
        gold_grade: GoldGrade,
        abe_group: AbeGroup,
        obstruction_note: String,
        input: CopdInput,
    ) -> Self {
        Self {
            gold_grade,
            gold_description: gold_grade.description().to_string(),
            abe_group,
            abe_description: abe_group.description().to_string(),
            recommendation: abe_group.recommendation().to_string(),
            obstruction_note,
            input,
        }
    }
}
