//! Minimal style diffing.
//!
//! Computes the CSS declarations and inline element wrappers needed to
//! express a node's [`Style`] relative to the [`StyleContext`] it inherits.
//! An attribute contributes output only when it is set on the node and its
//! value differs from the context, so nested nodes never restate styling
//! they already inherit.

use crate::model::{Font, Style, VerticalAlign};

use super::StyleContext;

/// Font name that is never emitted as a `font-family`.
pub const DINGBAT_FONT: &str = "ZapfDingbatsITC";

/// Opening and closing inline element sequences for a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagWrap {
    pub open: String,
    pub close: String,
}

impl TagWrap {
    /// Build a wrap from element names in opening order.
    fn from_tags(tags: &[&str]) -> Self {
        let open = tags.iter().map(|t| format!("<{}>", t)).collect();
        let close = tags.iter().rev().map(|t| format!("</{}>", t)).collect();
        Self { open, close }
    }

    /// Check if the wrap adds no elements.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Surround `inner` with the wrap.
    pub fn wrap(&self, inner: &str) -> String {
        format!("{}{}{}", self.open, inner, self.close)
    }
}

/// Compute the inline CSS declarations for `style` against `ctx`.
///
/// Declarations appear in a fixed order (color, background-color,
/// text-indent, padding-left, text-align, font-size, font-family), each
/// terminated by `;` with no separator between them.
pub fn inline_css(style: &Style, ctx: &StyleContext, disable_fonts: bool) -> String {
    let mut css = String::new();

    if let Some(color) = style.foreground.filter(|c| *c != ctx.foreground) {
        css.push_str(&format!("color: {};", color.to_css()));
    }
    if let Some(color) = style.background.filter(|c| *c != ctx.background) {
        css.push_str(&format!("background-color: {};", color.to_css()));
    }
    // A zero or negative first line indent is never emitted.
    if let Some(indent) = style
        .first_line_indent
        .filter(|&i| i > 0 && i != ctx.first_line_indent)
    {
        css.push_str(&format!("text-indent: {}pt;", twips_to_points(indent)));
    }
    if let Some(indent) = style.indent.filter(|&i| i != ctx.indent) {
        css.push_str(&format!("padding-left: {}pt;", twips_to_points(indent)));
    }
    if let Some(align) = style.align.filter(|a| *a != ctx.align) {
        css.push_str(&format!("text-align: {};", align.as_str()));
    }
    if let Some(size) = style.font_size.filter(|&s| s != ctx.font_size) {
        css.push_str(&format!("font-size: {}pt;", half_points_to_points(size)));
    }
    if !disable_fonts {
        if let Some(font) = style
            .font
            .as_ref()
            .filter(|f| f.base_name() != ctx.font.base_name())
        {
            if let Some(family) = font_family(font) {
                css.push_str(&format!("font-family: {};", family));
            }
        }
    }

    css
}

/// Compute the inline element wrap for `style` against `ctx`.
///
/// Elements open in the order em, strong, s, u, sup and close in reverse.
/// Both superscript and subscript map to `<sup>`.
pub fn tag_wrap(style: &Style, ctx: &StyleContext) -> TagWrap {
    let mut tags = Vec::new();

    if style.italic.is_some_and(|v| v != ctx.italic) {
        tags.push("em");
    }
    if style.bold.is_some_and(|v| v != ctx.bold) {
        tags.push("strong");
    }
    if style.strikethrough.is_some_and(|v| v != ctx.strikethrough) {
        tags.push("s");
    }
    if style.underline.is_some_and(|v| v != ctx.underline) {
        tags.push("u");
    }
    match style.valign {
        Some(valign) if valign != ctx.valign => match valign {
            VerticalAlign::Super | VerticalAlign::Sub => tags.push("sup"),
            VerticalAlign::Normal => {}
        },
        _ => {}
    }

    TagWrap::from_tags(&tags)
}

/// The `font-family` value for a font, or `None` for the dingbat font.
///
/// The style suffix is stripped from the name and the generic CSS family
/// for the RTF family keyword is appended as a fallback when one exists.
pub fn font_family(font: &Font) -> Option<String> {
    let name = font.base_name();
    if name == DINGBAT_FONT {
        return None;
    }
    Some(match font.family.css_generic() {
        Some(generic) => format!("{}, {}", name, generic),
        None => name.to_string(),
    })
}

pub(crate) fn twips_to_points(twips: i32) -> f64 {
    f64::from(twips) / 20.0
}

pub(crate) fn half_points_to_points(half_points: u32) -> f64 {
    f64::from(half_points) / 2.0
}
