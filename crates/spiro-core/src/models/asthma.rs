use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One inhaler the respondent uses, with how often per week.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InhalerUse {
    pub name: String,
    pub weekly_frequency: u32,
}

/// Raw asthma questionnaire state as the wizard hands it over.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AsthmaForm {
    pub fev1: Option<f64>,
    pub daytime: Option<String>,
    pub nighttime: Option<String>,
    pub activity: Option<String>,
    #[serde(default)]
    pub inhalers: Vec<InhalerUse>,
}

/// Validated asthma inputs. FEV1 is genuinely optional: spirometry is not
/// always available, and an absent value is excluded from the severity
/// calculation rather than treated as missing data.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AsthmaInput {
    pub fev1: Option<f64>,
    /// Daytime symptom frequency category.
    pub daytime: String,
    /// Nighttime awakening frequency category.
    pub nighttime: String,
    /// Activity limitation category.
    pub activity: String,
    pub inhalers: Vec<InhalerUse>,
}

/// Asthma severity stage. Ordering follows severity, so the worst of
/// several contributions is the `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AsthmaStage {
    Intermittent,
    MildPersistent,
    ModeratePersistent,
    SeverePersistent,
}

impl AsthmaStage {
    pub fn severity(self) -> u8 {
        match self {
            AsthmaStage::Intermittent => 1,
            AsthmaStage::MildPersistent => 2,
            AsthmaStage::ModeratePersistent => 3,
            AsthmaStage::SeverePersistent => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AsthmaStage::Intermittent => "Intermittent",
            AsthmaStage::MildPersistent => "Mild Persistent",
            AsthmaStage::ModeratePersistent => "Moderate Persistent",
            AsthmaStage::SeverePersistent => "Severe Persistent",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AsthmaStage::Intermittent => {
                "Symptoms twice a week or less, with normal lung function between episodes."
            }
            AsthmaStage::MildPersistent => {
                "Symptoms more than twice a week, but less than daily."
            }
            AsthmaStage::ModeratePersistent => {
                "Daily symptoms with some limitation of normal activity."
            }
            AsthmaStage::SeverePersistent => {
                "Symptoms throughout the day with extreme limitation of activity."
            }
        }
    }
}

impl TryFrom<u8> for AsthmaStage {
    type Error = CoreError;

    fn try_from(severity: u8) -> Result<Self, CoreError> {
        match severity {
            1 => Ok(AsthmaStage::Intermittent),
            2 => Ok(AsthmaStage::MildPersistent),
            3 => Ok(AsthmaStage::ModeratePersistent),
            4 => Ok(AsthmaStage::SeverePersistent),
            other => Err(CoreError::InvalidSeverity(other)),
        }
    }
}

/// Full asthma classification outcome, with every derived display string
/// the report renderer needs.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AsthmaResult {
    pub severity: u8,
    pub stage: AsthmaStage,
    pub stage_name: String,
    pub stage_description: String,
    /// Echo of the validated inputs, for report display.
    pub input: AsthmaInput,
}

impl AsthmaResult {
    pub fn new(stage: AsthmaStage, input: AsthmaInput) -> Self {
        Self {
            severity: stage.severity(),
            stage,
            stage_name: stage.name().to_string(),
            stage_description: stage.description().to_string(),
            input,
        }
    }
}
