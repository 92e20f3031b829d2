//! Document parser interface.
//!
//! Tokenizing RTF is the job of an external parser; this module defines the
//! seam it plugs into. A parser turns input into a [`Document`] tree, and
//! every input shape (string, bytes, reader) converges on
//! [`DocumentParser::parse_str`].

mod json_tree;
mod options;

pub use json_tree::JsonTreeParser;
pub use options::{ErrorMode, ParseOptions};

use std::io::Read;

use crate::error::{Error, Result};
use crate::model::Document;

/// Abstract interface for producing document trees.
pub trait DocumentParser: Send + Sync {
    /// Short name used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Parse a complete input string.
    fn parse_str(&self, input: &str, options: &ParseOptions) -> Result<Document>;

    /// Parse raw bytes. The default requires UTF-8.
    fn parse_bytes(&self, data: &[u8], options: &ParseOptions) -> Result<Document> {
        let input = std::str::from_utf8(data)
            .map_err(|e| Error::Parse(format!("input is not valid UTF-8: {}", e)))?;
        self.parse_str(input, options)
    }

    /// Read the whole stream, then parse it.
    fn parse_reader(&self, reader: &mut dyn Read, options: &ParseOptions) -> Result<Document> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.parse_bytes(&data, options)
    }
}
