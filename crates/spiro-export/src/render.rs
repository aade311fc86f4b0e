use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use spiro_core::models::asthma::AsthmaResult;
use spiro_core::models::copd::CopdResult;
use spiro_core::models::report::{ReportDocument, ReportLine};

use crate::error::ExportError;

/// Render a COPD result into ordered report lines. Every rendered value
/// reads a result field; nothing is recomputed here.
pub fn copd_report(result: &CopdResult) -> ReportDocument {
    let input = &result.input;
    let mut lines = vec![
        ReportLine::Heading {
            text: "COPD Staging Report".to_string(),
        },
        ReportLine::Paragraph {
            text: result.obstruction_note.clone(),
        },
        ReportLine::Blank,
        ReportLine::Field {
            label: "GOLD grade".to_string(),
            value: result.gold_grade.label().to_string(),
        },
        ReportLine::Paragraph {
            text: result.gold_description.clone(),
        },
        ReportLine::Field {
            label: "Group".to_string(),
            value: result.abe_group.letter().to_string(),
        },
        ReportLine::Paragraph {
            text: result.abe_description.clone(),
        },
        ReportLine::Blank,
        ReportLine::Subheading {
            text: "Reported values".to_string(),
        },
        ReportLine::Field {
            label: "FEV1/FVC ratio".to_string(),
            value: format!("{:.2}", input.ratio),
        },
        ReportLine::Field {
            label: "FEV1 % of predicted".to_string(),
            value: format!("{}", input.fev1_percent),
        },
        ReportLine::Field {
            label: "Moderate exacerbations in the past year".to_string(),
            value: input.exacerbations.to_string(),
        },
        ReportLine::Field {
            label: "Exacerbations requiring hospitalization".to_string(),
            value: input.hospitalizations.to_string(),
        },
        ReportLine::Field {
            label: "mMRC dyspnea scale".to_string(),
            value: input.mmrc.to_string(),
        },
    ];

    if !input.inhalers.is_empty() {
        lines.push(ReportLine::Subheading {
            text: "Current inhalers".to_string(),
        });
        for inhaler in &input.inhalers {
            lines.push(ReportLine::Bullet {
                text: inhaler.clone(),
            });
        }
        if let Some(frequency) = &input.frequency {
            lines.push(ReportLine::Field {
                label: "Use frequency, times per week".to_string(),
                value: frequency.clone(),
            });
        }
    }

    lines.push(ReportLine::Blank);
    lines.push(ReportLine::Subheading {
        text: "Initial treatment".to_string(),
    });
    lines.push(ReportLine::Paragraph {
        text: result.recommendation.clone(),
    });

    debug!(lines = lines.len(), "rendered copd report");
    ReportDocument::new("COPD Staging Report", "copd", lines)
}

/// Render an asthma result into ordered report lines.
pub fn asthma_report(result: &AsthmaResult) -> ReportDocument {
    let input = &result.input;
    let fev1_display = match input.fev1 {
        Some(v) => format!("{v}"),
        None => "not recorded".to_string(),
    };

    let mut lines = vec![
        ReportLine::Heading {
            text: "Asthma Severity Report".to_string(),
        },
        ReportLine::Field {
            label: "Stage".to_string(),
            value: result.stage_name.clone(),
        },
        ReportLine::Field {
            label: "Severity".to_string(),
            value: format!("{} of 4", result.severity),
        },
        ReportLine::Paragraph {
            text: result.stage_description.clone(),
        },
        ReportLine::Blank,
        ReportLine::Subheading {
            text: "Reported values".to_string(),
        },
        ReportLine::Field {
            label: "FEV1 % of predicted".to_string(),
            value: fev1_display,
        },
        ReportLine::Field {
            label: "Daytime symptoms, times per week".to_string(),
            value: input.daytime.clone(),
        },
        ReportLine::Field {
            label: "Nighttime awakenings, times per month".to_string(),
            value: input.nighttime.clone(),
        },
        ReportLine::Field {
            label: "Limitation of normal activity".to_string(),
            value: input.activity.clone(),
        },
    ];

    if !input.inhalers.is_empty() {
        lines.push(ReportLine::Subheading {
            text: "Inhalers".to_string(),
        });
        for inhaler in &input.inhalers {
            lines.push(ReportLine::Bullet {
                text: format!("{}, {} times per week", inhaler.name, inhaler.weekly_frequency),
            });
        }
    }

    debug!(lines = lines.len(), "rendered asthma report");
    ReportDocument::new("Asthma Severity Report", "asthma", lines)
}

/// Flatten report lines into plain text for the document sinks.
/// Deterministic: the same report always yields the same string.
pub fn to_plain_text(report: &ReportDocument) -> String {
    let mut out = String::new();
    for line in &report.lines {
        match line {
            ReportLine::Heading { text } => {
                out.push_str("# ");
                out.push_str(text);
            }
            ReportLine::Subheading { text } => {
                out.push_str("## ");
                out.push_str(text);
            }
            ReportLine::Field { label, value } => {
                out.push_str(label);
                out.push_str(": ");
                out.push_str(value);
            }
            ReportLine::Bullet { text } => {
                out.push_str("- ");
                out.push_str(text);
            }
            ReportLine::Paragraph { text } => out.push_str(text),
            ReportLine::Blank => {}
        }
        out.push('\n');
    }
    out
}

/// Render a Tera template against a staging result.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The result's fields become the template context variables, so clinics
/// can letterhead their reports without touching the classifier.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    result: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Convert the result to a Tera context via serde_json
    let value = serde_json::to_value(result)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    debug!(template = template_name, bytes = rendered.len(), "rendered template");
    Ok(rendered)
}
