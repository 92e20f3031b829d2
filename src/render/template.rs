//! Document templates wrapping rendered content in a complete HTML page.

use crate::error::Result;
use crate::model::Document;

use super::style::{half_points_to_points, twips_to_points};
use super::StyleContext;

/// Produces the final document around the rendered paragraphs.
///
/// Receives the source document (for margins), the resolved top-level
/// style context (for the base font size and indent) and the rendered
/// content.
pub trait DocumentTemplate: Send + Sync {
    fn render(&self, doc: &Document, defaults: &StyleContext, content: &str) -> Result<String>;
}

impl<F> DocumentTemplate for F
where
    F: Fn(&Document, &StyleContext, &str) -> Result<String> + Send + Sync,
{
    fn render(&self, doc: &Document, defaults: &StyleContext, content: &str) -> Result<String> {
        self(doc, defaults, content)
    }
}

/// Minimal HTML5 page with body margins, font size and text indent.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTemplate;

impl DocumentTemplate for HtmlTemplate {
    fn render(&self, doc: &Document, defaults: &StyleContext, content: &str) -> Result<String> {
        let margins = &doc.margins;
        Ok(format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <style>
    body {{
      margin-left: {}pt;
      margin-right: {}pt;
      margin-top: {}pt;
      margin-bottom: {}pt;
      font-size: {}pt;
      text-indent: {}pt;
    }}
    </style>
  </head>
  <body>
    {}
  </body>
</html>
"#,
            twips_to_points(margins.margin_left),
            twips_to_points(margins.margin_right),
            twips_to_points(margins.margin_top),
            twips_to_points(margins.margin_bottom),
            half_points_to_points(defaults.font_size),
            twips_to_points(defaults.first_line_indent),
            content.replacen('\n', "\n    ", 1),
        ))
    }
}
