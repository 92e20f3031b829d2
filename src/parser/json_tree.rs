//! Parser for pre-parsed document trees serialized as JSON.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{Block, Document};

use super::{DocumentParser, ErrorMode, ParseOptions};

/// Reads the JSON tree emitted by an upstream RTF parser.
///
/// The expected shape is an object with optional `marginLeft`,
/// `marginRight`, `marginTop`, `marginBottom`, a base `style` and a
/// `content` array of paragraphs (`{style, content, ignorable}`) or bare
/// spans (`{style, value, type, ignorable}`).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTreeParser;

impl JsonTreeParser {
    /// Create a new JSON tree parser.
    pub fn new() -> Self {
        Self
    }

    fn parse_lenient(&self, mut value: Value) -> Result<Document> {
        let blocks = value
            .as_object_mut()
            .and_then(|obj| obj.remove("content"))
            .unwrap_or(Value::Null);
        let mut doc: Document = serde_json::from_value(value).map_err(parse_error)?;

        match blocks {
            Value::Array(items) => {
                for (index, item) in items.into_iter().enumerate() {
                    match serde_json::from_value::<Block>(item) {
                        Ok(block) => doc.content.push(block),
                        Err(e) => log::warn!("Skipping malformed block {}: {}", index, e),
                    }
                }
            }
            Value::Null => {}
            other => log::warn!("Ignoring non-array document content: {}", other),
        }
        Ok(doc)
    }
}

fn parse_error(err: serde_json::Error) -> Error {
    Error::Parse(err.to_string())
}

impl DocumentParser for JsonTreeParser {
    fn name(&self) -> &str {
        "json-tree"
    }

    fn parse_str(&self, input: &str, options: &ParseOptions) -> Result<Document> {
        let value: Value = serde_json::from_str(input).map_err(parse_error)?;
        let doc: Document = match options.error_mode {
            ErrorMode::Strict => serde_json::from_value(value).map_err(parse_error)?,
            ErrorMode::Lenient => self.parse_lenient(value)?,
        };
        log::debug!("{}: parsed {} blocks", self.name(), doc.block_count());
        Ok(doc)
    }
}
