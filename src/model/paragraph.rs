//! Paragraph and span-level types.

use serde::{Deserialize, Serialize};

use super::Style;

/// A paragraph of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph style overrides
    #[serde(default)]
    pub style: Style,

    /// Spans in the paragraph
    pub content: Vec<Inline>,

    /// Structural or metadata node (stylesheet, field instruction, ...)
    #[serde(default, skip_serializing_if = "is_false")]
    pub ignorable: bool,
}

pub(super) fn is_false(value: &bool) -> bool {
    !*value
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single unstyled span.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_span(Span::new(text));
        p
    }

    /// Create an ignorable paragraph holding metadata nodes.
    pub fn metadata(content: Vec<Inline>) -> Self {
        Self {
            style: Style::default(),
            content,
            ignorable: true,
        }
    }

    /// Set the paragraph style.
    pub fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Add a text span.
    pub fn add_span(&mut self, span: Span) {
        self.content.push(Inline::Text(span));
    }

    /// Add a metadata node.
    pub fn add_metadata(&mut self, kind: impl Into<String>, value: impl Into<String>) {
        self.content.push(Inline::Metadata(MetadataSpan::new(kind, value)));
    }

    /// Visible text of the paragraph (metadata nodes are skipped).
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .filter_map(|inline| match inline {
                Inline::Text(span) => Some(span.value.as_str()),
                Inline::Metadata(_) => None,
            })
            .collect()
    }

    /// Check if the paragraph has no content at all.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Iterate over the text spans only.
    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.content.iter().filter_map(Inline::as_text)
    }
}

/// Content of a paragraph: renderable text or a metadata node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawInline", into = "RawInline")]
pub enum Inline {
    /// Styled body text
    Text(Span),

    /// Non-visible document metadata, passed through only in raw mode
    Metadata(MetadataSpan),
}

impl Inline {
    /// Check if this node is metadata rather than body text.
    pub fn is_metadata(&self) -> bool {
        matches!(self, Inline::Metadata(_))
    }

    /// The node's raw text value.
    pub fn value(&self) -> &str {
        match self {
            Inline::Text(span) => &span.value,
            Inline::Metadata(meta) => &meta.value,
        }
    }

    /// The metadata kind, if this is a metadata node.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Inline::Text(_) => None,
            Inline::Metadata(meta) => Some(&meta.kind),
        }
    }

    /// Get the text span if this is body text.
    pub fn as_text(&self) -> Option<&Span> {
        match self {
            Inline::Text(span) => Some(span),
            Inline::Metadata(_) => None,
        }
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Span {
    /// Span style overrides
    pub style: Style,

    /// The text content
    pub value: String,
}

impl Span {
    /// Create an unstyled span.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            style: Style::default(),
            value: value.into(),
        }
    }

    /// Set the span style.
    pub fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// A metadata node such as a field instruction or stylesheet entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataSpan {
    /// Node type name (e.g. `fldinst`, `stylesheet`)
    pub kind: String,

    /// Raw text carried by the node
    pub value: String,
}

impl MetadataSpan {
    /// Create a metadata node.
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Wire shape of a span: an `ignorable` flag plus a `type` tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(super) struct RawInline {
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub(super) style: Style,
    pub(super) value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub(super) kind: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub(super) ignorable: bool,
}

impl From<RawInline> for Inline {
    fn from(raw: RawInline) -> Self {
        if raw.ignorable {
            Inline::Metadata(MetadataSpan {
                kind: raw.kind.unwrap_or_default(),
                value: raw.value,
            })
        } else {
            Inline::Text(Span {
                style: raw.style,
                value: raw.value,
            })
        }
    }
}

impl From<Inline> for RawInline {
    fn from(inline: Inline) -> Self {
        match inline {
            Inline::Text(span) => RawInline {
                style: span.style,
                value: span.value,
                kind: None,
                ignorable: false,
            },
            Inline::Metadata(meta) => RawInline {
                style: Style::default(),
                value: meta.value,
                kind: Some(meta.kind),
                ignorable: true,
            },
        }
    }
}
