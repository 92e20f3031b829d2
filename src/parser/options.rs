//! Parsing options and configuration.

/// Options handed to a [`DocumentParser`](super::DocumentParser).
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Keep metadata groups (field instructions, HTML tags, ...) in the
    /// tree so raw-markup rendering can surface them
    pub raw_html: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip malformed blocks).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Keep or drop metadata groups.
    pub fn with_raw_html(mut self, raw: bool) -> Self {
        self.raw_html = raw;
        self
    }
}

/// Error handling mode during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any malformed node
    #[default]
    Strict,
    /// Skip malformed blocks and keep going
    Lenient,
}
