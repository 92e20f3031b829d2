//! Style attributes shared by paragraphs and spans.

use serde::{Deserialize, Serialize};

/// Style overrides attached to a paragraph or span.
///
/// Every attribute is optional: `None` means "not set at this level",
/// so the value is inherited from the enclosing context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    /// Font face
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,

    /// Font size in half-points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,

    /// Bold text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    /// Italic text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    /// Underlined text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,

    /// Strikethrough text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,

    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,

    /// Background/highlight color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,

    /// First line indent in twentieths of a point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_line_indent: Option<i32>,

    /// Left indent in twentieths of a point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<i32>,

    /// Horizontal alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,

    /// Vertical alignment (superscript/subscript)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valign: Option<VerticalAlign>,
}

impl Style {
    /// Create an empty style (everything inherited).
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_font_size(mut self, half_points: u32) -> Self {
        self.font_size = Some(half_points);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn with_strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = Some(strikethrough);
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_first_line_indent(mut self, twips: i32) -> Self {
        self.first_line_indent = Some(twips);
        self
    }

    pub fn with_indent(mut self, twips: i32) -> Self {
        self.indent = Some(twips);
        self
    }

    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    pub fn with_valign(mut self, valign: VerticalAlign) -> Self {
        self.valign = Some(valign);
        self
    }
}

/// A font from the document font table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    /// Font name as written in the font table (e.g. "Helvetica-Bold")
    #[serde(default)]
    pub name: String,

    /// Generic RTF font family
    #[serde(default)]
    pub family: FontFamily,
}

impl Font {
    /// Create a font.
    pub fn new(name: impl Into<String>, family: FontFamily) -> Self {
        Self {
            name: name.into(),
            family,
        }
    }

    /// Font name with any trailing `-Style` suffix removed.
    ///
    /// `"Helvetica-Bold"` becomes `"Helvetica"`; names without a suffix
    /// are returned unchanged.
    pub fn base_name(&self) -> &str {
        match self.name.rsplit_once('-') {
            Some((base, suffix))
                if !suffix.is_empty()
                    && suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') =>
            {
                base
            }
            _ => &self.name,
        }
    }
}

/// RTF font family keyword (`\froman`, `\fswiss`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Roman,
    Swiss,
    Script,
    Decor,
    Modern,
    Tech,
    Bidi,
    /// Unknown or unspecified family (`\fnil`)
    #[default]
    #[serde(other)]
    Nil,
}

impl FontFamily {
    /// Generic CSS family used as a fallback for this RTF family.
    pub fn css_generic(&self) -> Option<&'static str> {
        match self {
            FontFamily::Roman | FontFamily::Bidi => Some("serif"),
            FontFamily::Swiss | FontFamily::Modern => Some("sans-serif"),
            FontFamily::Script => Some("cursive"),
            FontFamily::Decor => Some("fantasy"),
            FontFamily::Tech => Some("monospace"),
            FontFamily::Nil => None,
        }
    }
}

/// An RGB color from the document color table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color from its channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// CSS functional notation, e.g. `rgb(255, 0, 0)`.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
    Distribute,
}

impl Alignment {
    /// Keyword used for the `text-align` property.
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
            Alignment::Distribute => "distribute",
        }
    }
}

/// Vertical text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Normal,
    Super,
    Sub,
}
