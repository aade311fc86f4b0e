use spiro_core::models::report::{ReportDocument, ReportLine};
use spiro_export::docx::generate_docx;
use spiro_export::pdf::generate_pdf;
use spiro_export::render::to_plain_text;
use spiro_export::styles::DocumentStyles;

fn sample_report(paragraphs: usize) -> ReportDocument {
    let mut lines = vec![
        ReportLine::Heading {
            text: "COPD Staging Report".to_string(),
        },
        ReportLine::Subheading {
            text: "Reported values".to_string(),
        },
        ReportLine::Field {
            label: "GOLD grade".to_string(),
            value: "GOLD 2 (Moderate)".to_string(),
        },
        ReportLine::Bullet {
            text: "LABA".to_string(),
        },
        ReportLine::Blank,
    ];
    for n in 0..paragraphs {
        lines.push(ReportLine::Paragraph {
            text: format!("Paragraph {n} with enough words to be wrapped when the column width is small."),
        });
    }
    ReportDocument::new("COPD Staging Report", "copd", lines)
}

#[test]
fn pdf_bytes_have_pdf_magic() {
    let text = to_plain_text(&sample_report(2));
    let bytes = generate_pdf(&text, &DocumentStyles::default()).expect("pdf should generate");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn long_reports_paginate_instead_of_failing() {
    let styles = DocumentStyles {
        lines_per_page: 10,
        ..DocumentStyles::default()
    };

    let short = generate_pdf(&to_plain_text(&sample_report(2)), &styles)
        .expect("short pdf should generate");
    let long = generate_pdf(&to_plain_text(&sample_report(120)), &styles)
        .expect("long pdf should generate");

    assert!(long.len() > short.len());
}

#[test]
fn narrow_column_width_still_renders() {
    let styles = DocumentStyles {
        wrap_columns: 20,
        ..DocumentStyles::default()
    };
    let one_long_line = "word ".repeat(200);

    let bytes = generate_pdf(&one_long_line, &styles).expect("pdf should generate");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn empty_text_produces_a_valid_single_page() {
    let bytes = generate_pdf("", &DocumentStyles::default()).expect("pdf should generate");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn docx_bytes_are_a_zip_archive() {
    let bytes = generate_docx(&sample_report(2), &DocumentStyles::default())
        .expect("docx should generate");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn docx_accepts_every_line_kind() {
    let report = ReportDocument::new(
        "kinds",
        "copd",
        vec![
            ReportLine::Heading { text: "h".to_string() },
            ReportLine::Subheading { text: "s".to_string() },
            ReportLine::Field {
                label: "l".to_string(),
                value: "v".to_string(),
            },
            ReportLine::Bullet { text: "b".to_string() },
            ReportLine::Paragraph { text: "p".to_string() },
            ReportLine::Blank,
        ],
    );

    let bytes = generate_docx(&report, &DocumentStyles::default()).expect("docx should generate");
    assert!(!bytes.is_empty());
}
