//! Plain text rendering for RTF documents.

use crate::error::Result;
use crate::model::Document;

use super::RenderOptions;

/// Convert a document to plain text.
///
/// Each non-ignorable block contributes its visible text; blocks are
/// joined with the configured paragraph separator.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let output = doc
        .content
        .iter()
        .filter(|block| !block.is_ignorable())
        .map(|block| block.to_paragraph().plain_text())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(&options.para_breaks);

    Ok(output.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Span, Style};

    #[test]
    fn test_to_text() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Hello, world!"));
        let mut para = Paragraph::new();
        para.add_span(Span::new("Second ").styled(Style::new().with_bold(true)));
        para.add_metadata("fldinst", "HYPERLINK \"http://x.com\"");
        para.add_span(Span::new("paragraph."));
        doc.add_paragraph(para);

        let result = to_text(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(result, "Hello, world!\nSecond paragraph.");
    }

    #[test]
    fn test_to_text_skips_metadata_blocks() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::metadata(Vec::new()));
        doc.add_paragraph(Paragraph::new());
        doc.add_paragraph(Paragraph::with_text("only"));

        let options = RenderOptions::default().with_para_breaks("\n\n");
        assert_eq!(to_text(&doc, &options).unwrap(), "only");
    }
}
