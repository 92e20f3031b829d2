//! Rendering module for converting document trees to HTML and text.

pub mod cleanup;
mod context;
mod html;
mod json;
mod options;
mod result;
pub mod style;
mod template;
mod text;

pub use context::StyleContext;
pub use html::{to_html, to_html_with_stats, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_IGNORE_NODES};
pub use result::{RenderResult, RenderStats};
pub use style::{font_family, inline_css, tag_wrap, TagWrap};
pub use template::{DocumentTemplate, HtmlTemplate};
pub use text::to_text;
