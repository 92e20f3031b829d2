//! Document-level types.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::paragraph::{is_false, RawInline};
use super::{Inline, Paragraph, Style};

/// A parsed RTF document tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Page margins
    #[serde(flatten)]
    pub margins: Margins,

    /// Document-wide base style (default font, font size, first line indent)
    #[serde(default)]
    pub style: Style,

    /// Top-level blocks in document order
    #[serde(default)]
    pub content: Vec<Block>,
}

impl Document {
    /// Create a new empty document with default margins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.content.push(Block::Paragraph(paragraph));
    }

    /// Add a bare span at paragraph level.
    pub fn add_inline(&mut self, inline: Inline) {
        self.content.push(Block::Inline(inline));
    }

    /// Number of top-level blocks.
    pub fn block_count(&self) -> usize {
        self.content.len()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Visible text of the document, one line per non-ignorable block.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .filter(|block| !block.is_ignorable())
            .map(|block| block.to_paragraph().plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Page margins in twentieths of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    #[serde(default = "default_horizontal_margin")]
    pub margin_left: i32,
    #[serde(default = "default_horizontal_margin")]
    pub margin_right: i32,
    #[serde(default = "default_vertical_margin")]
    pub margin_top: i32,
    #[serde(default = "default_vertical_margin")]
    pub margin_bottom: i32,
}

// RTF defaults: 1.25in left/right, 1in top/bottom.
fn default_horizontal_margin() -> i32 {
    1800
}

fn default_vertical_margin() -> i32 {
    1440
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            margin_left: default_horizontal_margin(),
            margin_right: default_horizontal_margin(),
            margin_top: default_vertical_margin(),
            margin_bottom: default_vertical_margin(),
        }
    }
}

/// A top-level node: a paragraph, or a bare span promoted to paragraph level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBlock", into = "RawBlock")]
pub enum Block {
    Paragraph(Paragraph),
    Inline(Inline),
}

impl Block {
    /// Check if the block itself is marked ignorable.
    pub fn is_ignorable(&self) -> bool {
        match self {
            Block::Paragraph(p) => p.ignorable,
            Block::Inline(inline) => inline.is_metadata(),
        }
    }

    /// View the block as a paragraph.
    ///
    /// A bare span is wrapped in a singleton paragraph with an empty style.
    pub fn to_paragraph(&self) -> Cow<'_, Paragraph> {
        match self {
            Block::Paragraph(p) => Cow::Borrowed(p),
            Block::Inline(inline) => Cow::Owned(Paragraph {
                style: Style::default(),
                content: vec![inline.clone()],
                ignorable: false,
            }),
        }
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

/// Wire shape of a block; the presence of `content` marks a paragraph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawBlock {
    #[serde(skip_serializing_if = "Style::is_empty")]
    style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<Vec<Inline>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    ignorable: bool,
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        match raw.content {
            Some(content) => Block::Paragraph(Paragraph {
                style: raw.style,
                content,
                ignorable: raw.ignorable,
            }),
            None => Block::Inline(Inline::from(RawInline {
                style: raw.style,
                value: raw.value,
                kind: raw.kind,
                ignorable: raw.ignorable,
            })),
        }
    }
}

impl From<Block> for RawBlock {
    fn from(block: Block) -> Self {
        match block {
            Block::Paragraph(p) => RawBlock {
                style: p.style,
                content: Some(p.content),
                ignorable: p.ignorable,
                ..Default::default()
            },
            Block::Inline(inline) => {
                let raw = RawInline::from(inline);
                RawBlock {
                    style: raw.style,
                    content: None,
                    value: raw.value,
                    kind: raw.kind,
                    ignorable: raw.ignorable,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Span;

    #[test]
    fn test_document_defaults() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.margins.margin_left, 1800);
        assert_eq!(doc.margins.margin_top, 1440);
    }

    #[test]
    fn test_margins_are_top_level_keys() {
        let doc: Document =
            serde_json::from_str(r#"{"marginLeft":720,"marginBottom":360,"content":[]}"#).unwrap();
        assert_eq!(doc.margins.margin_left, 720);
        assert_eq!(doc.margins.margin_right, 1800);
        assert_eq!(doc.margins.margin_bottom, 360);
    }

    #[test]
    fn test_bare_span_block() {
        let doc: Document = serde_json::from_str(
            r#"{"content":[{"value":"loose","style":{"bold":true}},{"content":[{"value":"para"}]}]}"#,
        )
        .unwrap();

        assert!(matches!(doc.content[0], Block::Inline(_)));
        assert!(matches!(doc.content[1], Block::Paragraph(_)));

        let para = doc.content[0].to_paragraph();
        assert!(para.style.is_empty());
        assert!(!para.ignorable);
        assert_eq!(para.content.len(), 1);
    }

    #[test]
    fn test_block_ignorable() {
        let block = Block::Inline(Inline::Metadata(crate::model::MetadataSpan::new(
            "stylesheet",
            "",
        )));
        assert!(block.is_ignorable());

        let block = Block::Paragraph(Paragraph::metadata(Vec::new()));
        assert!(block.is_ignorable());

        let block = Block::Inline(Inline::Text(Span::new("x")));
        assert!(!block.is_ignorable());
    }

    #[test]
    fn test_plain_text_skips_ignorable_blocks() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("First"));
        doc.add_paragraph(Paragraph::metadata(Vec::new()));
        doc.add_inline(Inline::Text(Span::new("Second")));

        assert_eq!(doc.plain_text(), "First\nSecond");
    }
}
