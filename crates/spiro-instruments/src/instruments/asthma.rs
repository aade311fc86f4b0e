use spiro_core::models::asthma::{AsthmaForm, AsthmaInput, AsthmaResult, AsthmaStage};

use crate::error::InstrumentError;
use crate::fields::{FieldKind, FieldRange, FieldSpec, ValidationError};
use crate::instruments::require;
use crate::{Instrument, InstrumentMeta};

/// Asthma severity staging: four independent contributions (FEV1 band,
/// daytime symptoms, nighttime awakenings, activity limitation), the worst
/// of which sets the stage.
pub struct Asthma;

/// FEV1 contribution. Below 60% of predicted is severe, 60-79% moderate,
/// 80% or above contributes nothing. Absent spirometry is excluded from
/// the calculation rather than treated as missing data.
pub fn fev1_stage(fev1: Option<f64>) -> AsthmaStage {
    match fev1 {
        Some(v) if v < 60.0 => AsthmaStage::SeverePersistent,
        Some(v) if v < 80.0 => AsthmaStage::ModeratePersistent,
        _ => AsthmaStage::Intermittent,
    }
}

/// Daytime symptom frequency contribution, times per week. Unrecognized
/// tokens stage as best-case instead of erroring.
pub fn daytime_stage(category: &str) -> AsthmaStage {
    match category {
        "<=2" => AsthmaStage::Intermittent,
        "3-6" => AsthmaStage::MildPersistent,
        "daily" => AsthmaStage::ModeratePersistent,
        "throughout" => AsthmaStage::SeverePersistent,
        _ => AsthmaStage::Intermittent,
    }
}

/// Nighttime awakening frequency contribution, times per month.
pub fn nighttime_stage(category: &str) -> AsthmaStage {
    match category {
        "<=2" => AsthmaStage::Intermittent,
        "3-4" => AsthmaStage::MildPersistent,
        ">=5" => AsthmaStage::ModeratePersistent,
        "often" => AsthmaStage::SeverePersistent,
        _ => AsthmaStage::Intermittent,
    }
}

/// Activity limitation contribution.
pub fn activity_stage(category: &str) -> AsthmaStage {
    match category {
        "none" => AsthmaStage::Intermittent,
        "minor" => AsthmaStage::MildPersistent,
        "some" => AsthmaStage::ModeratePersistent,
        "extreme" => AsthmaStage::SeverePersistent,
        _ => AsthmaStage::Intermittent,
    }
}

impl InstrumentMeta for Asthma {
    fn id(&self) -> &str {
        "asthma"
    }

    fn name(&self) -> &str {
        "Asthma Severity (GINA)"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            let category = |id: &str, name: &str, options: &[&str]| FieldSpec {
                id: id.to_string(),
                name: name.to_string(),
                kind: FieldKind::Category {
                    options: options.iter().map(|s| s.to_string()).collect(),
                },
                required: true,
                range: None,
            };

            vec![
                FieldSpec {
                    id: "fev1".to_string(),
                    name: "FEV1 % of predicted".to_string(),
                    kind: FieldKind::Percent,
                    required: false,
                    range: Some(FieldRange {
                        min: 0.0,
                        max: None,
                        step: None,
                    }),
                },
                category(
                    "daytime",
                    "Daytime symptoms, times per week",
                    &["<=2", "3-6", "daily", "throughout"],
                ),
                category(
                    "nighttime",
                    "Nighttime awakenings, times per month",
                    &["<=2", "3-4", ">=5", "often"],
                ),
                category(
                    "activity",
                    "Limitation of normal activity",
                    &["none", "minor", "some", "extreme"],
                ),
                FieldSpec {
                    id: "inhalers".to_string(),
                    name: "Inhalers and weekly use".to_string(),
                    kind: FieldKind::Text,
                    required: false,
                    range: None,
                },
            ]
        });
        &FIELDS
    }
}

impl Instrument for Asthma {
    type Form = AsthmaForm;
    type Output = AsthmaResult;

    // Category tokens are deliberately not checked for membership here:
    // an unrecognized token stages as best-case in the contribution
    // tables, it is not a validation failure.
    fn validate(&self, form: &AsthmaForm) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for field in self.fields() {
            match field.id.as_str() {
                "fev1" => {
                    if let Some(v) = form.fev1
                        && let Some(range) = field.range
                        && !range.contains(v)
                    {
                        errors.push(ValidationError::out_of_range(self.name(), field, v, range));
                    }
                }
                "daytime" | "nighttime" | "activity" => {
                    let present = match field.id.as_str() {
                        "daytime" => form.daytime.is_some(),
                        "nighttime" => form.nighttime.is_some(),
                        _ => form.activity.is_some(),
                    };
                    if !present {
                        errors.push(ValidationError::missing(self.name(), &field.id, &field.name));
                    }
                }
                _ => {}
            }
        }
        errors
    }

    fn classify(&self, form: &AsthmaForm) -> Result<AsthmaResult, InstrumentError> {
        if let Some(violation) = self.validate(form).into_iter().next() {
            return Err(violation.into());
        }

        let input = AsthmaInput {
            fev1: form.fev1,
            daytime: require(self, "daytime", form.daytime.clone())?,
            nighttime: require(self, "nighttime", form.nighttime.clone())?,
            activity: require(self, "activity", form.activity.clone())?,
            inhalers: form.inhalers.clone(),
        };

        let stage = fev1_stage(input.fev1)
            .max(daytime_stage(&input.daytime))
            .max(nighttime_stage(&input.nighttime))
            .max(activity_stage(&input.activity));
        Ok(AsthmaResult::new(stage, input))
    }
}
