//! Rendering options and configuration.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::Style;

use super::{DocumentTemplate, HtmlTemplate};

/// Metadata node types suppressed in raw mode unless configured otherwise.
pub const DEFAULT_IGNORE_NODES: &[&str] = &[
    "stylesheet",
    "adeflang",
    "revtbl",
    "xmlnstbl",
    "pnseclvl",
    "fldinst",
    "latentstyles",
    "listlevel",
];

/// Options for rendering a document.
#[derive(Clone)]
pub struct RenderOptions {
    /// Baseline style overrides, layered over the document defaults
    pub style: Style,

    /// Separator placed between rendered paragraphs
    pub para_breaks: String,

    /// HTML element used to wrap paragraphs
    pub para_tag: String,

    /// Pass metadata node text through instead of suppressing it
    pub raw_html: bool,

    /// Document wrapper; `None` emits the bare paragraph sequence
    pub template: Option<Arc<dyn DocumentTemplate>>,

    /// Metadata node types that are always suppressed in raw mode
    pub ignore_nodes: Vec<String>,

    /// Never emit `font-family` declarations
    pub disable_fonts: bool,

    /// Collect render statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set baseline style overrides.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the paragraph separator.
    pub fn with_para_breaks(mut self, breaks: impl Into<String>) -> Self {
        self.para_breaks = breaks.into();
        self
    }

    /// Set the paragraph element name.
    pub fn with_para_tag(mut self, tag: impl Into<String>) -> Self {
        self.para_tag = tag.into();
        self
    }

    /// Enable or disable raw-markup passthrough.
    pub fn with_raw_html(mut self, raw: bool) -> Self {
        self.raw_html = raw;
        self
    }

    /// Set the document template.
    pub fn with_template(mut self, template: impl DocumentTemplate + 'static) -> Self {
        self.template = Some(Arc::new(template));
        self
    }

    /// Emit the content without a document wrapper.
    pub fn without_template(mut self) -> Self {
        self.template = None;
        self
    }

    /// Replace the set of suppressed metadata node types.
    pub fn with_ignore_nodes<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_nodes = kinds.into_iter().map(Into::into).collect();
        self
    }

    /// Add one suppressed metadata node type.
    pub fn with_ignore_node(mut self, kind: impl Into<String>) -> Self {
        let kind = kind.into();
        if !self.ignore_nodes.contains(&kind) {
            self.ignore_nodes.push(kind);
        }
        self
    }

    /// Enable or disable `font-family` emission.
    pub fn with_disable_fonts(mut self, disable: bool) -> Self {
        self.disable_fonts = disable;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Check if a metadata node type is suppressed.
    pub fn ignores(&self, kind: &str) -> bool {
        self.ignore_nodes.iter().any(|k| k == kind)
    }

    /// Check the options for values that cannot produce valid markup.
    pub fn validate(&self) -> Result<()> {
        if self.para_tag.is_empty() {
            return Err(Error::InvalidOption("paragraph tag is empty".into()));
        }
        if !self.para_tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidOption(format!(
                "paragraph tag {:?} is not a valid element name",
                self.para_tag
            )));
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: Style::default(),
            para_breaks: "\n".to_string(),
            para_tag: "p".to_string(),
            raw_html: false,
            template: Some(Arc::new(HtmlTemplate)),
            ignore_nodes: DEFAULT_IGNORE_NODES.iter().map(|s| s.to_string()).collect(),
            disable_fonts: false,
            collect_stats: false,
        }
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("style", &self.style)
            .field("para_breaks", &self.para_breaks)
            .field("para_tag", &self.para_tag)
            .field("raw_html", &self.raw_html)
            .field("template", &self.template.is_some())
            .field("ignore_nodes", &self.ignore_nodes)
            .field("disable_fonts", &self.disable_fonts)
            .field("collect_stats", &self.collect_stats)
            .finish()
    }
}
