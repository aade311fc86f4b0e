use spiro_core::models::asthma::{AsthmaInput, AsthmaResult, AsthmaStage, InhalerUse};
use spiro_core::models::copd::{AbeGroup, CopdInput, CopdResult, GoldGrade};
use spiro_core::models::report::ReportLine;
use spiro_export::render::{asthma_report, copd_report, render_template, to_plain_text};

fn copd_result() -> CopdResult {
    let input = CopdInput {
        ratio: 0.65,
        fev1_percent: 55.0,
        exacerbations: 1,
        hospitalizations: 0,
        mmrc: 1,
        inhalers: vec!["LABA".to_string(), "ICS".to_string()],
        frequency: Some("14".to_string()),
    };
    CopdResult::new(
        GoldGrade::Gold2,
        AbeGroup::A,
        "FEV1/FVC ratio 0.65 is below the 0.70 threshold; airflow obstruction is confirmed."
            .to_string(),
        input,
    )
}

fn asthma_result(fev1: Option<f64>) -> AsthmaResult {
    AsthmaResult::new(
        AsthmaStage::ModeratePersistent,
        AsthmaInput {
            fev1,
            daytime: "daily".to_string(),
            nighttime: "<=2".to_string(),
            activity: "none".to_string(),
            inhalers: vec![InhalerUse {
                name: "salbutamol".to_string(),
                weekly_frequency: 3,
            }],
        },
    )
}

#[test]
fn copd_report_opens_with_title_and_diagnostic_note() {
    let report = copd_report(&copd_result());

    assert_eq!(report.instrument_id, "copd");
    assert_eq!(
        report.lines[0],
        ReportLine::Heading {
            text: "COPD Staging Report".to_string()
        },
    );
    match &report.lines[1] {
        ReportLine::Paragraph { text } => assert!(text.contains("0.65")),
        other => panic!("expected diagnostic note paragraph, got: {other:?}"),
    }
}

#[test]
fn copd_plain_text_carries_every_reported_value() {
    let text = to_plain_text(&copd_report(&copd_result()));

    assert!(text.starts_with("# COPD Staging Report\n"));
    assert!(text.contains("GOLD grade: GOLD 2 (Moderate)\n"));
    assert!(text.contains("Group: A\n"));
    assert!(text.contains("## Reported values\n"));
    assert!(text.contains("FEV1/FVC ratio: 0.65\n"));
    assert!(text.contains("FEV1 % of predicted: 55\n"));
    assert!(text.contains("mMRC dyspnea scale: 1\n"));
    assert!(text.contains("- LABA\n"));
    assert!(text.contains("- ICS\n"));
    assert!(text.contains("Use frequency, times per week: 14\n"));
    assert!(text.contains("## Initial treatment\n"));
    assert!(text.contains("SABA"));
}

#[test]
fn asthma_report_shows_missing_spirometry_as_not_recorded() {
    let text = to_plain_text(&asthma_report(&asthma_result(None)));

    assert!(text.starts_with("# Asthma Severity Report\n"));
    assert!(text.contains("Stage: Moderate Persistent\n"));
    assert!(text.contains("Severity: 3 of 4\n"));
    assert!(text.contains("FEV1 % of predicted: not recorded\n"));
    assert!(text.contains("- salbutamol, 3 times per week\n"));
}

#[test]
fn renderer_echoes_result_fields_without_recomputing() {
    // A doctored description must come through verbatim: the renderer
    // reads result fields, it does not re-derive them from the grade.
    let mut result = copd_result();
    result.gold_description = "doctored description".to_string();

    let text = to_plain_text(&copd_report(&result));
    assert!(text.contains("doctored description"));
    assert!(!text.contains(GoldGrade::Gold2.description()));
}

#[test]
fn rendering_is_deterministic() {
    let result = asthma_result(Some(72.0));
    let first = to_plain_text(&asthma_report(&result));
    let second = to_plain_text(&asthma_report(&result));
    assert_eq!(first, second);
}

#[test]
fn template_sees_result_fields_by_name() {
    let rendered = render_template(
        "letterhead",
        "Grade {{ gold_grade }}, group {{ abe_group }}: {{ recommendation }}",
        &copd_result(),
    )
    .expect("template should render");

    assert!(rendered.starts_with("Grade gold2, group a: "));
    assert!(rendered.contains("SABA"));
}

#[test]
fn malformed_template_is_a_parse_error() {
    let err = render_template("broken", "{{ unclosed", &copd_result())
        .expect_err("parse should fail");
    assert!(err.to_string().contains("template parse error"));
}
