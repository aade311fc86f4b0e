use spiro_core::models::copd::{AbeGroup, CopdForm, CopdInput, CopdResult, GoldGrade};

use crate::error::InstrumentError;
use crate::fields::{FieldKind, FieldRange, FieldSpec, ValidationError};
use crate::instruments::require;
use crate::{Instrument, InstrumentMeta};

/// COPD staging per GOLD: airflow grade from FEV1 % predicted, ABE group
/// from exacerbation history and mMRC score, initial treatment text keyed
/// by the group.
pub struct Copd;

/// GOLD grade from FEV1 % predicted. Descending thresholds, closed lower
/// bounds: 80 is still grade 1, 50 grade 2, 30 grade 3.
pub fn gold_grade(fev1_percent: f64) -> GoldGrade {
    if fev1_percent >= 80.0 {
        GoldGrade::Gold1
    } else if fev1_percent >= 50.0 {
        GoldGrade::Gold2
    } else if fev1_percent >= 30.0 {
        GoldGrade::Gold3
    } else {
        GoldGrade::Gold4
    }
}

/// ABE group. Exacerbation risk dominates: any hospitalization or two or
/// more moderate exacerbations puts the patient in E regardless of mMRC.
pub fn abe_group(exacerbations: u32, hospitalizations: u32, mmrc: u8) -> AbeGroup {
    if hospitalizations >= 1 || exacerbations >= 2 {
        AbeGroup::E
    } else if mmrc >= 2 {
        AbeGroup::B
    } else {
        AbeGroup::A
    }
}

/// Diagnostic note from the FEV1/FVC ratio. Computed independently of
/// grade and group; staging is not gated on the ratio.
pub fn obstruction_note(ratio: f64) -> String {
    if ratio < 0.70 {
        format!(
            "FEV1/FVC ratio {ratio:.2} is below the 0.70 threshold; \
             airflow obstruction is confirmed."
        )
    } else {
        format!(
            "FEV1/FVC ratio {ratio:.2} is at or above the 0.70 threshold; \
             airflow obstruction is not confirmed by spirometry."
        )
    }
}

impl InstrumentMeta for Copd {
    fn id(&self) -> &str {
        "copd"
    }

    fn name(&self) -> &str {
        "COPD Staging (GOLD)"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            let count_range = FieldRange {
                min: 0.0,
                max: None,
                step: Some(1.0),
            };

            vec![
                FieldSpec {
                    id: "ratio".to_string(),
                    name: "FEV1/FVC ratio".to_string(),
                    kind: FieldKind::Ratio,
                    required: true,
                    range: Some(FieldRange {
                        min: 0.0,
                        max: None,
                        step: None,
                    }),
                },
                FieldSpec {
                    id: "fev1_percent".to_string(),
                    name: "FEV1 % of predicted".to_string(),
                    kind: FieldKind::Percent,
                    required: true,
                    range: Some(FieldRange {
                        min: 0.0,
                        max: None,
                        step: None,
                    }),
                },
                FieldSpec {
                    id: "exacerbations".to_string(),
                    name: "Moderate exacerbations in the past year".to_string(),
                    kind: FieldKind::Count,
                    required: true,
                    range: Some(count_range),
                },
                FieldSpec {
                    id: "hospitalizations".to_string(),
                    name: "Exacerbations requiring hospitalization in the past year".to_string(),
                    kind: FieldKind::Count,
                    required: true,
                    range: Some(count_range),
                },
                FieldSpec {
                    id: "mmrc".to_string(),
                    name: "mMRC dyspnea scale".to_string(),
                    kind: FieldKind::Scale,
                    required: true,
                    range: Some(FieldRange {
                        min: 0.0,
                        max: Some(4.0),
                        step: Some(1.0),
                    }),
                },
                FieldSpec {
                    id: "inhalers".to_string(),
                    name: "Current inhalers".to_string(),
                    kind: FieldKind::Category {
                        options: ["SABA", "LABA", "LAMA", "ICS", "LABA+LAMA", "LABA+LAMA+ICS"]
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                    },
                    required: false,
                    range: None,
                },
                FieldSpec {
                    id: "frequency".to_string(),
                    name: "Inhaler use, times per week".to_string(),
                    kind: FieldKind::Text,
                    required: false,
                    range: None,
                },
            ]
        });
        &FIELDS
    }
}

impl Instrument for Copd {
    type Form = CopdForm;
    type Output = CopdResult;

    fn validate(&self, form: &CopdForm) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for field in self.fields() {
            let value = match field.id.as_str() {
                "ratio" => form.ratio,
                "fev1_percent" => form.fev1_percent,
                "exacerbations" => form.exacerbations.map(f64::from),
                "hospitalizations" => form.hospitalizations.map(f64::from),
                "mmrc" => form.mmrc.map(f64::from),
                // inhalers and frequency carry no numeric rules
                _ => continue,
            };
            match value {
                None if field.required => {
                    errors.push(ValidationError::missing(self.name(), &field.id, &field.name));
                }
                Some(v) => {
                    if let Some(range) = field.range
                        && !range.contains(v)
                    {
                        errors.push(ValidationError::out_of_range(self.name(), field, v, range));
                    }
                }
                None => {}
            }
        }
        errors
    }

    fn classify(&self, form: &CopdForm) -> Result<CopdResult, InstrumentError> {
        if let Some(violation) = self.validate(form).into_iter().next() {
            return Err(violation.into());
        }

        let input = CopdInput {
            ratio: require(self, "ratio", form.ratio)?,
            fev1_percent: require(self, "fev1_percent", form.fev1_percent)?,
            exacerbations: require(self, "exacerbations", form.exacerbations)?,
            hospitalizations: require(self, "hospitalizations", form.hospitalizations)?,
            mmrc: require(self, "mmrc", form.mmrc)?,
            inhalers: form.inhalers.clone(),
            frequency: form.frequency.clone(),
        };

        let grade = gold_grade(input.fev1_percent);
        let group = abe_group(input.exacerbations, input.hospitalizations, input.mmrc);
        let note = obstruction_note(input.ratio);
        Ok(CopdResult::new(grade, group, note, input))
    }
}
