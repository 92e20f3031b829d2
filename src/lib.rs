//! # rtfhtml
//!
//! Render parsed RTF document trees to HTML.
//!
//! An upstream RTF parser produces a tree of paragraphs made of styled
//! spans, with a style object at every level and document-wide defaults.
//! This library turns that tree into markup that states each node's style
//! only where it differs from what the node inherits: inline CSS for
//! colors, indents, alignment and fonts, and `em`/`strong`/`s`/`u`/`sup`
//! elements for the boolean attributes.
//!
//! ## Quick Start
//!
//! ```
//! use rtfhtml::model::{Color, Document, Paragraph, Span, Style};
//! use rtfhtml::RenderOptions;
//!
//! let mut doc = Document::new();
//! let mut para = Paragraph::new();
//! para.add_span(Span::new("Hello").styled(Style::new().with_foreground(Color::rgb(255, 0, 0))));
//! doc.add_paragraph(para);
//!
//! let options = RenderOptions::new().without_template();
//! let html = rtfhtml::to_html(&doc, &options)?;
//! assert_eq!(html, "<p><span style=\"color: rgb(255, 0, 0);\">Hello</span></p>");
//! # Ok::<(), rtfhtml::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Minimal styling**: attributes equal to the inherited context are never emitted
//! - **Raw-markup mode**: surfaces metadata nodes such as HTML tags and hyperlink fields
//! - **Pluggable templates**: wrap output in any document shell, or none
//! - **Parser seam**: any RTF parser can feed the renderer through [`parser::DocumentParser`]

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertResult, Converter, OutputFormat};
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, Color, Document, Font, FontFamily, Inline, Margins, MetadataSpan, Paragraph,
    Span, Style, VerticalAlign,
};
pub use parser::{DocumentParser, ErrorMode, JsonTreeParser, ParseOptions};
pub use render::{
    to_html, to_html_with_stats, to_json, to_text, DocumentTemplate, HtmlTemplate, JsonFormat,
    RenderOptions, RenderResult, RenderStats, StyleContext,
};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse a JSON document tree from a string.
///
/// # Example
///
/// ```
/// let doc = rtfhtml::parse_str(r#"{"content":[{"content":[{"value":"Hi"}]}]}"#)?;
/// assert_eq!(doc.plain_text(), "Hi");
/// # Ok::<(), rtfhtml::Error>(())
/// ```
pub fn parse_str(input: &str) -> Result<Document> {
    JsonTreeParser::new().parse_str(input, &ParseOptions::default())
}

/// Parse a JSON document tree from a reader.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Document> {
    JsonTreeParser::new().parse_reader(&mut reader, &ParseOptions::default())
}

/// Parse a JSON document tree from a file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    parse_reader(BufReader::new(File::open(path)?))
}

/// Convert a JSON document tree string to HTML.
///
/// # Example
///
/// ```
/// use rtfhtml::RenderOptions;
///
/// let input = r#"{"content":[{"content":[{"value":"Hi","style":{"bold":true}}]}]}"#;
/// let html = rtfhtml::convert_str(input, &RenderOptions::new().without_template())?;
/// assert_eq!(html, "<p><strong>Hi</strong></p>");
/// # Ok::<(), rtfhtml::Error>(())
/// ```
pub fn convert_str(input: &str, options: &RenderOptions) -> Result<String> {
    let options = ConvertOptions::new().with_render_options(options.clone());
    Ok(Converter::json().convert_str(input, &options)?.content)
}

/// Convert a JSON document tree read from a stream to HTML.
pub fn convert_reader<R: Read>(mut reader: R, options: &RenderOptions) -> Result<String> {
    let options = ConvertOptions::new().with_render_options(options.clone());
    Ok(Converter::json().convert_reader(&mut reader, &options)?.content)
}

/// Convert a JSON document tree file to HTML.
pub fn convert_file<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let options = ConvertOptions::new().with_render_options(options.clone());
    Ok(Converter::json().convert_file(path, &options)?.content)
}

/// Builder for parsing and rendering document trees.
///
/// # Example
///
/// ```
/// use rtfhtml::RtfHtml;
///
/// let html = RtfHtml::new()
///     .raw_html()
///     .without_template()
///     .parse_str(r#"{"content":[{"content":[{"value":"HYPERLINK \"http://a.io\""}]}]}"#)?
///     .to_html()?;
/// assert_eq!(html, "<p>http://a.io</p>");
/// # Ok::<(), rtfhtml::Error>(())
/// ```
pub struct RtfHtml {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl RtfHtml {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Skip malformed blocks instead of failing.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Enable raw-markup passthrough.
    pub fn raw_html(mut self) -> Self {
        self.parse_options = self.parse_options.with_raw_html(true);
        self.render_options = self.render_options.with_raw_html(true);
        self
    }

    /// Emit content without a document wrapper.
    pub fn without_template(mut self) -> Self {
        self.render_options = self.render_options.without_template();
        self
    }

    /// Set the document template.
    pub fn with_template(mut self, template: impl DocumentTemplate + 'static) -> Self {
        self.render_options = self.render_options.with_template(template);
        self
    }

    /// Never emit `font-family` declarations.
    pub fn disable_fonts(mut self) -> Self {
        self.render_options = self.render_options.with_disable_fonts(true);
        self
    }

    /// Set the paragraph element name.
    pub fn with_para_tag(mut self, tag: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_para_tag(tag);
        self
    }

    /// Set the paragraph separator.
    pub fn with_para_breaks(mut self, breaks: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_para_breaks(breaks);
        self
    }

    /// Set baseline style overrides.
    pub fn with_style(mut self, style: Style) -> Self {
        self.render_options = self.render_options.with_style(style);
        self
    }

    /// Parse a JSON document tree string.
    pub fn parse_str(self, input: &str) -> Result<RtfHtmlResult> {
        let document = JsonTreeParser::new().parse_str(input, &self.parse_options)?;
        Ok(self.with_document(document))
    }

    /// Parse a JSON document tree file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<RtfHtmlResult> {
        let mut reader = BufReader::new(File::open(path)?);
        let document = JsonTreeParser::new().parse_reader(&mut reader, &self.parse_options)?;
        Ok(self.with_document(document))
    }

    /// Use an already parsed document.
    pub fn with_document(self, document: Document) -> RtfHtmlResult {
        RtfHtmlResult {
            document,
            render_options: self.render_options,
        }
    }
}

impl Default for RtfHtml {
    fn default() -> Self {
        Self::new()
    }
}

/// A parsed document ready to render.
pub struct RtfHtmlResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl RtfHtmlResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to HTML with render statistics.
    pub fn to_html_with_stats(&self) -> Result<RenderResult> {
        render::to_html_with_stats(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
