use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for DOCX body text (e.g. "Times New Roman", "Calibri").
    pub body_font: String,

    /// Font for DOCX headings (e.g. "Arial", "Calibri").
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Heading 1 font size in points.
    pub heading1_size: usize,

    /// Heading 2 font size in points.
    pub heading2_size: usize,

    /// Page margin in inches (applied uniformly).
    pub margin_inches: f64,

    /// Column width for the fixed-width PDF wrap. The PDF body is set in
    /// Courier, so columns translate directly to page width.
    pub wrap_columns: usize,

    /// Text lines per PDF page before a page break.
    pub lines_per_page: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Times New Roman".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 12,
            heading1_size: 16,
            heading2_size: 14,
            margin_inches: 1.0,
            wrap_columns: 90,
            lines_per_page: 54,
        }
    }
}
