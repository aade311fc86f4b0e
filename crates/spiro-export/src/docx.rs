use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};
use tracing::debug;

use spiro_core::models::report::{ReportDocument, ReportLine};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Generate a DOCX document from report lines.
///
/// Headings map to the DOCX heading styles, fields become a bold label
/// followed by the value, bullets are prefixed with a bullet character.
pub fn generate_docx(report: &ReportDocument, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size));

    for line in &report.lines {
        docx = match line {
            ReportLine::Heading { text } => docx.add_paragraph(heading_paragraph(text, "Heading1")),
            ReportLine::Subheading { text } => {
                docx.add_paragraph(heading_paragraph(text, "Heading2"))
            }
            ReportLine::Field { label, value } => {
                docx.add_paragraph(field_paragraph(label, value, styles))
            }
            ReportLine::Bullet { text } => docx.add_paragraph(bullet_paragraph(text, styles)),
            ReportLine::Paragraph { text } => docx.add_paragraph(body_paragraph(text, styles)),
            ReportLine::Blank => docx.add_paragraph(Paragraph::new()),
        };
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    debug!(lines = report.lines.len(), "generated docx");
    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text))
}

fn field_paragraph(label: &str, value: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(
            Run::new()
                .add_text(format!("{label}: "))
                .bold()
                .fonts(RunFonts::new().ascii(&styles.body_font)),
        )
        .add_run(
            Run::new()
                .add_text(value)
                .fonts(RunFonts::new().ascii(&styles.body_font)),
        )
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(
            Run::new()
                .add_text(format!("\u{2022} {text}"))
                .fonts(RunFonts::new().ascii(&styles.body_font)),
        )
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(
            Run::new()
                .add_text(text)
                .fonts(RunFonts::new().ascii(&styles.body_font)),
        )
}
