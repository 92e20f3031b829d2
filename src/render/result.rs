//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML fragment or full document)
    pub content: String,

    /// Render statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Paragraphs that produced output
    pub paragraph_count: u32,

    /// Text spans rendered
    pub span_count: u32,

    /// Text spans that needed CSS or inline elements
    pub styled_span_count: u32,

    /// Metadata values passed through in raw mode
    pub metadata_count: u32,

    /// Blocks dropped as ignorable or empty
    pub skipped_count: u32,

    /// Whether the output was wrapped in a document template
    pub templated: bool,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    pub fn add_span(&mut self, styled: bool) {
        self.span_count += 1;
        if styled {
            self.styled_span_count += 1;
        }
    }

    pub fn add_metadata(&mut self) {
        self.metadata_count += 1;
    }

    pub fn add_skipped(&mut self) {
        self.skipped_count += 1;
    }
}
