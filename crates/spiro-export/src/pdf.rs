use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::debug;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MM_PER_INCH: f64 = 25.4;

/// Generate a PDF from rendered report text.
///
/// The text is the output of [`crate::render::to_plain_text`]: `# ` and
/// `## ` prefixes mark headings, everything else is body text. Lines are
/// wrapped at `styles.wrap_columns` and paginated at
/// `styles.lines_per_page`; the body is set in Courier so the column
/// count maps directly to line width. Download or file handling stays
/// with the caller.
pub fn generate_pdf(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let margin = styles.margin_inches * MM_PER_INCH;
    let usable_height = PAGE_HEIGHT_MM - 2.0 * margin;
    let line_height = usable_height / styles.lines_per_page as f64;

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Staging Report",
        Mm(PAGE_WIDTH_MM as f32),
        Mm(PAGE_HEIGHT_MM as f32),
        "text",
    );
    let body = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::CourierBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut line_no = 0usize;
    let mut pages = 1usize;

    for raw in rendered.lines() {
        let (text, font, size) = if let Some(rest) = raw.strip_prefix("## ") {
            (rest, &bold, styles.heading2_size as f64)
        } else if let Some(rest) = raw.strip_prefix("# ") {
            (rest, &bold, styles.heading1_size as f64)
        } else {
            (raw, &body, styles.body_size as f64)
        };

        let wrapped: Vec<String> = if text.is_empty() {
            vec![String::new()]
        } else {
            textwrap::wrap(text, styles.wrap_columns)
                .into_iter()
                .map(|piece| piece.into_owned())
                .collect()
        };

        for piece in wrapped {
            if line_no >= styles.lines_per_page {
                let (page, layer_index) =
                    doc.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "text");
                layer = doc.get_page(page).get_layer(layer_index);
                line_no = 0;
                pages += 1;
            }
            let y = PAGE_HEIGHT_MM - margin - line_height * (line_no as f64 + 1.0);
            if !piece.is_empty() {
                layer.use_text(piece, size as f32, Mm(margin as f32), Mm(y as f32), font);
            }
            line_no += 1;
        }
    }

    debug!(pages, "generated pdf");
    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}
