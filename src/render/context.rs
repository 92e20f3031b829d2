//! Effective style context used as the diffing baseline.

use crate::model::{Alignment, Color, Document, Font, FontFamily, Style, VerticalAlign};

use super::RenderOptions;

/// Fully resolved style values inherited at some depth of the tree.
///
/// A node's own [`Style`] is rendered relative to the context it sits in;
/// only attributes that are set *and* differ from the context produce
/// output. Contexts are values: deriving a child context with
/// [`StyleContext::overlay`] never touches the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleContext {
    pub font: Font,
    /// Font size in half-points
    pub font_size: u32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub foreground: Color,
    pub background: Color,
    /// First line indent in twentieths of a point
    pub first_line_indent: i32,
    /// Left indent in twentieths of a point
    pub indent: i32,
    pub align: Alignment,
    pub valign: VerticalAlign,
}

impl StyleContext {
    /// Build the top-level context for a document.
    ///
    /// The document's base style supplies font, font size and first line
    /// indent; everything else falls back to fixed values. Caller overrides
    /// from `options.style` are applied last.
    pub fn resolve(doc: &Document, options: &RenderOptions) -> Self {
        let base = Self {
            font: doc
                .style
                .font
                .clone()
                .unwrap_or_else(|| Font::new("Times", FontFamily::Roman)),
            font_size: doc.style.font_size.filter(|&size| size > 0).unwrap_or(24),
            first_line_indent: doc.style.first_line_indent.unwrap_or(0),
            ..Self::default()
        };
        base.overlay(&options.style)
    }

    /// Derive a new context with every set attribute of `style` applied.
    pub fn overlay(&self, style: &Style) -> Self {
        Self {
            font: style.font.clone().unwrap_or_else(|| self.font.clone()),
            font_size: style.font_size.unwrap_or(self.font_size),
            bold: style.bold.unwrap_or(self.bold),
            italic: style.italic.unwrap_or(self.italic),
            underline: style.underline.unwrap_or(self.underline),
            strikethrough: style.strikethrough.unwrap_or(self.strikethrough),
            foreground: style.foreground.unwrap_or(self.foreground),
            background: style.background.unwrap_or(self.background),
            first_line_indent: style.first_line_indent.unwrap_or(self.first_line_indent),
            indent: style.indent.unwrap_or(self.indent),
            align: style.align.unwrap_or(self.align),
            valign: style.valign.unwrap_or(self.valign),
        }
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        Self {
            font: Font::new("Times", FontFamily::Roman),
            font_size: 24,
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            foreground: Color::BLACK,
            background: Color::WHITE,
            first_line_indent: 0,
            indent: 0,
            align: Alignment::Left,
            valign: VerticalAlign::Normal,
        }
    }
}
