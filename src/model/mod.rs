//! Document model types for parsed RTF content.
//!
//! This module defines the tree handed over by the RTF parser: a document
//! with margins and a base style, holding paragraphs of styled spans and
//! metadata nodes. Every style attribute is optional so that rendering can
//! diff each node against the style it inherits.

mod document;
mod paragraph;
mod style;

pub use document::{Block, Document, Margins};
pub use paragraph::{Inline, MetadataSpan, Paragraph, Span};
pub use style::{Alignment, Color, Font, FontFamily, Style, VerticalAlign};
