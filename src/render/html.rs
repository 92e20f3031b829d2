//! HTML rendering for RTF document trees.

use crate::error::Result;
use crate::model::{Document, Inline, MetadataSpan, Paragraph, Span};

use super::cleanup::clean_raw_markup;
use super::style::{inline_css, tag_wrap};
use super::{RenderOptions, RenderResult, RenderStats, StyleContext};

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    stats: RenderStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to HTML with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc)?;
        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        self.options.validate()?;

        let defaults = StyleContext::resolve(doc, &self.options);
        let raw = self.options.raw_html;

        let mut paragraphs = Vec::with_capacity(doc.content.len());
        for block in &doc.content {
            if block.is_ignorable() && !raw {
                self.count_skipped();
                continue;
            }
            let html = self.render_paragraph(&block.to_paragraph(), &defaults);
            if html.is_empty() {
                self.count_skipped();
                continue;
            }
            if self.options.collect_stats {
                self.stats.add_paragraph();
            }
            paragraphs.push(html);
        }
        log::debug!(
            "Rendered {} of {} blocks",
            paragraphs.len(),
            doc.content.len()
        );

        let mut content = paragraphs.join(&self.options.para_breaks);
        if raw {
            content = clean_raw_markup(&content);
        }

        match self.options.template {
            Some(ref template) if !content.contains("<html") => {
                self.stats.templated = true;
                template.render(doc, &defaults, &content)
            }
            _ => Ok(content),
        }
    }

    fn render_paragraph(&mut self, para: &Paragraph, defaults: &StyleContext) -> String {
        if para.is_empty() {
            return String::new();
        }

        if self.options.raw_html && para.ignorable {
            return self.render_metadata_paragraph(para);
        }

        // Spans are diffed against the paragraph's own context...
        let context = defaults.overlay(&para.style);

        if self.has_raw_content(para) {
            log::debug!("Paragraph mixes raw metadata with text; emitting without wrapper");
            return para
                .content
                .iter()
                .map(|inline| match inline {
                    Inline::Text(span) => self.render_span(span, &context),
                    Inline::Metadata(meta) => self.render_metadata(meta),
                })
                .collect();
        }

        // ...while the paragraph itself is diffed against the top-level defaults.
        let css = inline_css(&para.style, defaults, self.options.disable_fonts);
        let tags = tag_wrap(&para.style, defaults);
        let content: String = para
            .spans()
            .map(|span| self.render_span(span, &context))
            .collect();

        let tag = &self.options.para_tag;
        let style_attr = if css.is_empty() {
            String::new()
        } else {
            format!(" style=\"{}\"", css)
        };
        format!("<{tag}{style_attr}>{}</{tag}>", tags.wrap(&content))
    }

    /// Raw mode, ignorable paragraph: concatenated trimmed node values.
    fn render_metadata_paragraph(&mut self, para: &Paragraph) -> String {
        let mut output = String::new();
        for inline in &para.content {
            if inline.value().is_empty() || inline.kind().is_some_and(|k| self.options.ignores(k)) {
                continue;
            }
            if self.options.collect_stats && inline.is_metadata() {
                self.stats.add_metadata();
            }
            output.push_str(inline.value().trim());
        }
        output
    }

    /// Whether the paragraph holds metadata that raw mode must surface.
    fn has_raw_content(&self, para: &Paragraph) -> bool {
        self.options.raw_html
            && para.content.iter().any(|inline| match inline {
                Inline::Metadata(meta) => {
                    !self.options.ignores(&meta.kind) && !meta.value.trim().is_empty()
                }
                Inline::Text(_) => false,
            })
    }

    fn render_metadata(&mut self, meta: &MetadataSpan) -> String {
        if self.options.ignores(&meta.kind) {
            return String::new();
        }
        let value = meta.value.trim();
        if self.options.collect_stats && !value.is_empty() {
            self.stats.add_metadata();
        }
        value.to_string()
    }

    fn render_span(&mut self, span: &Span, context: &StyleContext) -> String {
        let css = inline_css(&span.style, context, self.options.disable_fonts);
        let tags = tag_wrap(&span.style, context);
        log::trace!("span css={:?} tags={:?}", css, tags.open);

        if self.options.collect_stats {
            self.stats.add_span(!css.is_empty() || !tags.is_empty());
        }

        let value = tags.wrap(&span.value);
        if css.is_empty() {
            value
        } else {
            format!("<span style=\"{}\">{}</span>", css, value)
        }
    }

    fn count_skipped(&mut self) {
        if self.options.collect_stats {
            self.stats.add_skipped();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, Style};

    fn fragment() -> RenderOptions {
        RenderOptions::new().without_template()
    }

    fn single(span: Span) -> Document {
        let mut doc = Document::new();
        let mut para = Paragraph::new();
        para.add_span(span);
        doc.add_paragraph(para);
        doc
    }

    #[test]
    fn test_plain_paragraph() {
        let doc = single(Span::new("Hello"));
        assert_eq!(to_html(&doc, &fragment()).unwrap(), "<p>Hello</p>");
    }

    #[test]
    fn test_bold_span() {
        let doc = single(Span::new("Hello").styled(Style::new().with_bold(true)));
        assert_eq!(
            to_html(&doc, &fragment()).unwrap(),
            "<p><strong>Hello</strong></p>"
        );
    }

    #[test]
    fn test_colored_span() {
        let doc =
            single(Span::new("Hello").styled(Style::new().with_foreground(Color::rgb(255, 0, 0))));
        assert_eq!(
            to_html(&doc, &fragment()).unwrap(),
            "<p><span style=\"color: rgb(255, 0, 0);\">Hello</span></p>"
        );
    }

    #[test]
    fn test_span_diffed_against_paragraph_context() {
        let mut doc = Document::new();
        let mut para = Paragraph::new().styled(Style::new().with_italic(true));
        para.add_span(Span::new("a").styled(Style::new().with_italic(true)));
        para.add_span(Span::new("b").styled(Style::new().with_italic(false)));
        doc.add_paragraph(para);

        assert_eq!(
            to_html(&doc, &fragment()).unwrap(),
            "<p><em>a<em>b</em></em></p>"
        );
    }

    #[test]
    fn test_paragraph_diffed_against_defaults() {
        let options = fragment().with_style(Style::new().with_bold(true));
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("x").styled(Style::new().with_bold(true)));
        doc.add_paragraph(Paragraph::with_text("y").styled(Style::new().with_bold(false)));

        assert_eq!(
            to_html(&doc, &options).unwrap(),
            "<p>x</p>\n<p><strong>y</strong></p>"
        );
    }

    #[test]
    fn test_siblings_do_not_share_overrides() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("a").styled(Style::new().with_font_size(40)));
        let mut second = Paragraph::new();
        second.add_span(Span::new("b").styled(Style::new().with_font_size(40)));
        doc.add_paragraph(second);

        assert_eq!(
            to_html(&doc, &fragment()).unwrap(),
            "<p style=\"font-size: 20pt;\">a</p>\n\
             <p><span style=\"font-size: 20pt;\">b</span></p>"
        );
    }

    #[test]
    fn test_ignorable_paragraph_dropped() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::metadata(vec![Inline::Metadata(MetadataSpan::new(
            "info", "Title",
        ))]));
        doc.add_paragraph(Paragraph::with_text("Body"));

        assert_eq!(to_html(&doc, &fragment()).unwrap(), "<p>Body</p>");
    }

    #[test]
    fn test_empty_paragraph_skipped() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new());
        doc.add_paragraph(Paragraph::with_text("x"));
        assert_eq!(to_html(&doc, &fragment()).unwrap(), "<p>x</p>");
    }

    #[test]
    fn test_metadata_spans_filtered_in_normal_paragraph() {
        let mut doc = Document::new();
        let mut para = Paragraph::new();
        para.add_metadata("bkmkstart", "anchor");
        para.add_span(Span::new("text"));
        doc.add_paragraph(para);

        assert_eq!(to_html(&doc, &fragment()).unwrap(), "<p>text</p>");
    }

    #[test]
    fn test_raw_mode_ignorable_paragraph() {
        let options = fragment().with_raw_html(true);
        let mut doc = Document::new();
        let mut meta = Paragraph::metadata(Vec::new());
        meta.add_metadata("htmltag", "  <div>  ");
        meta.add_metadata("fldinst", "HYPERLINK \"http://x.com\"");
        meta.add_metadata("htmltag", "");
        doc.add_paragraph(meta);

        assert_eq!(to_html(&doc, &options).unwrap(), "<div>");
    }

    #[test]
    fn test_raw_mode_mixed_paragraph() {
        let options = fragment().with_raw_html(true);
        let mut doc = Document::new();
        let mut para = Paragraph::new().styled(Style::new().with_bold(true));
        para.add_metadata("htmltag", " <a href=\"#\"> ");
        para.add_span(Span::new("link").styled(Style::new().with_bold(true)));
        para.add_span(Span::new("!").styled(Style::new().with_bold(false)));
        para.add_metadata("stylesheet", "Normal;");
        para.add_metadata("htmltag", "</a>");
        doc.add_paragraph(para);

        assert_eq!(
            to_html(&doc, &options).unwrap(),
            "<a href=\"#\">link<strong>!</strong></a>"
        );
    }

    #[test]
    fn test_raw_mode_blank_metadata_keeps_wrapper() {
        let options = fragment().with_raw_html(true);
        let mut doc = Document::new();
        let mut para = Paragraph::new();
        para.add_metadata("htmltag", "   ");
        para.add_span(Span::new("x"));
        doc.add_paragraph(para);

        assert_eq!(to_html(&doc, &options).unwrap(), "<p>x</p>");
    }

    #[test]
    fn test_raw_mode_hyperlink_cleanup() {
        let options = fragment().with_raw_html(true);
        let doc = single(Span::new("HYPERLINK \"http://example.com\""));
        assert_eq!(
            to_html(&doc, &options).unwrap(),
            "<p>http://example.com</p>"
        );
    }

    #[test]
    fn test_custom_para_tag_and_breaks() {
        let options = fragment().with_para_tag("div").with_para_breaks("<br>");
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("a"));
        doc.add_paragraph(Paragraph::with_text("b"));

        assert_eq!(
            to_html(&doc, &options).unwrap(),
            "<div>a</div><br><div>b</div>"
        );
    }

    #[test]
    fn test_template_skipped_for_full_document() {
        let options = RenderOptions::new().with_raw_html(true);
        let mut doc = Document::new();
        let mut meta = Paragraph::metadata(Vec::new());
        meta.add_metadata("htmltag", "<html><body>");
        doc.add_paragraph(meta);

        let result = to_html_with_stats(&doc, &options).unwrap();
        assert_eq!(result.content, "<html><body>");
        assert!(!result.stats.templated);
    }

    #[test]
    fn test_stats() {
        let mut doc = Document::new();
        let mut para = Paragraph::new();
        para.add_span(Span::new("a"));
        para.add_span(Span::new("b").styled(Style::new().with_underline(true)));
        doc.add_paragraph(para);
        doc.add_paragraph(Paragraph::metadata(vec![]));
        doc.add_paragraph(Paragraph::new());

        let result = to_html_with_stats(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.stats.span_count, 2);
        assert_eq!(result.stats.styled_span_count, 1);
        assert_eq!(result.stats.skipped_count, 2);
        assert!(result.stats.templated);
        assert!(result.content.contains("<p>a<u>b</u></p>"));
    }

    #[test]
    fn test_invalid_para_tag_fails() {
        let doc = single(Span::new("x"));
        let options = fragment().with_para_tag("");
        assert!(to_html(&doc, &options).is_err());
    }
}
