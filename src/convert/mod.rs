//! Conversion entry points.
//!
//! Every input shape (an already parsed tree, a string, raw bytes, a
//! reader or a file) converges on a single render call. Parsing and
//! rendering are separated by one error boundary: parser failures are
//! returned unchanged, and any failure after parsing is reported as
//! [`Error::Render`]. No partial output is returned on failure.
//!
//! # Example
//!
//! ```
//! use rtfhtml::convert::{ConvertOptions, Converter};
//!
//! let converter = Converter::json();
//! let input = r#"{"content":[{"content":[{"value":"Hello"}]}]}"#;
//! let options = ConvertOptions::new().with_render_options(
//!     rtfhtml::RenderOptions::new().without_template(),
//! );
//! let result = converter.convert_str(input, &options)?;
//! assert_eq!(result.content, "<p>Hello</p>");
//! # Ok::<(), rtfhtml::Error>(())
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::parser::{DocumentParser, JsonTreeParser, ParseOptions};
use crate::render::{to_html, to_html_with_stats, to_json, to_text, JsonFormat, RenderOptions, RenderStats};

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Rendering options
    pub render: RenderOptions,

    /// Parsing options
    pub parse: ParseOptions,

    /// Whether to collect statistics during conversion
    pub collect_stats: bool,

    /// Output format
    pub output_format: OutputFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Parse options as handed to the parser; raw mode follows the renderer.
    fn effective_parse_options(&self) -> ParseOptions {
        self.parse.clone().with_raw_html(self.render.raw_html)
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// HTML fragment or document
    #[default]
    Html,

    /// Plain text
    Text,

    /// JSON document tree
    Json,
}

impl OutputFormat {
    /// MIME type of the output.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Html => "text/html",
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Converted content
    pub content: String,

    /// Render statistics (if collected)
    pub stats: Option<RenderStats>,

    /// MIME type of the output
    pub mime_type: &'static str,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(content: String, format: OutputFormat) -> Self {
        Self {
            content,
            stats: None,
            mime_type: format.mime_type(),
        }
    }

    /// Set render statistics.
    pub fn with_stats(mut self, stats: RenderStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Parses input with a [`DocumentParser`] and renders the resulting tree.
#[derive(Clone)]
pub struct Converter {
    parser: Arc<dyn DocumentParser>,
}

impl Converter {
    /// Create a converter around a parser.
    pub fn new(parser: impl DocumentParser + 'static) -> Self {
        Self {
            parser: Arc::new(parser),
        }
    }

    /// Create a converter reading JSON document trees.
    pub fn json() -> Self {
        Self::new(JsonTreeParser::new())
    }

    /// Name of the underlying parser.
    pub fn parser_name(&self) -> &str {
        self.parser.name()
    }

    /// Render an already parsed document.
    pub fn convert_document(&self, doc: &Document, options: &ConvertOptions) -> Result<ConvertResult> {
        render_document(doc, options).map_err(into_render_error)
    }

    /// Parse and render a string.
    pub fn convert_str(&self, input: &str, options: &ConvertOptions) -> Result<ConvertResult> {
        let doc = self
            .parser
            .parse_str(input, &options.effective_parse_options())?;
        self.convert_document(&doc, options)
    }

    /// Parse and render raw bytes.
    pub fn convert_bytes(&self, data: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let doc = self
            .parser
            .parse_bytes(data, &options.effective_parse_options())?;
        self.convert_document(&doc, options)
    }

    /// Parse and render everything read from a stream.
    pub fn convert_reader(
        &self,
        reader: &mut dyn Read,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let doc = self
            .parser
            .parse_reader(reader, &options.effective_parse_options())?;
        self.convert_document(&doc, options)
    }

    /// Parse and render a file.
    pub fn convert_file<P: AsRef<Path>>(
        &self,
        path: P,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let mut reader = BufReader::new(File::open(path)?);
        self.convert_reader(&mut reader, options)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::json()
    }
}

fn render_document(doc: &Document, options: &ConvertOptions) -> Result<ConvertResult> {
    let format = options.output_format;
    match format {
        OutputFormat::Html if options.collect_stats => {
            let result = to_html_with_stats(doc, &options.render)?;
            Ok(ConvertResult::new(result.content, format).with_stats(result.stats))
        }
        OutputFormat::Html => Ok(ConvertResult::new(to_html(doc, &options.render)?, format)),
        OutputFormat::Text => Ok(ConvertResult::new(to_text(doc, &options.render)?, format)),
        OutputFormat::Json => Ok(ConvertResult::new(
            to_json(doc, JsonFormat::Pretty)?,
            format,
        )),
    }
}

/// Everything that fails after parsing surfaces as a render error.
fn into_render_error(err: Error) -> Error {
    match err {
        Error::Render(_) => err,
        other => {
            log::debug!("Render failed: {}", other);
            Error::Render(other.to_string())
        }
    }
}
