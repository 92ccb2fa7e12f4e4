//! Closed option sets and field readers used by every block normalizer.
//!
//! Each reader takes the untrusted field map and always returns a value from
//! its closed set / range, falling back to the default the caller passes in.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::descriptor::Fields;
use crate::shared::numbers::lenient_f64;

// ============================================================================
// Margins
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Margin {
    None,
    Small,
    Medium,
    Large,
}

impl Margin {
    pub fn key(&self) -> &'static str {
        match self {
            Margin::None => "none",
            Margin::Small => "small",
            Margin::Medium => "medium",
            Margin::Large => "large",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "none" => Some(Margin::None),
            "small" => Some(Margin::Small),
            "medium" => Some(Margin::Medium),
            "large" => Some(Margin::Large),
            _ => None,
        }
    }

    pub fn top_class(&self) -> &'static str {
        match self {
            Margin::None => "block--mt-none",
            Margin::Small => "block--mt-small",
            Margin::Medium => "block--mt-medium",
            Margin::Large => "block--mt-large",
        }
    }

    pub fn bottom_class(&self) -> &'static str {
        match self {
            Margin::None => "block--mb-none",
            Margin::Small => "block--mb-small",
            Margin::Medium => "block--mb-medium",
            Margin::Large => "block--mb-large",
        }
    }
}

/// Top / bottom margin pair shared by every block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub top: Margin,
    pub bottom: Margin,
}

impl Spacing {
    pub fn uniform(margin: Margin) -> Self {
        Self {
            top: margin,
            bottom: margin,
        }
    }

    pub fn read(fields: &Fields, default: Margin) -> Self {
        Self {
            top: read_margin(fields, "marginTop", default),
            bottom: read_margin(fields, "marginBottom", default),
        }
    }

    pub fn write(&self, fields: &mut Fields) {
        fields.insert("marginTop".into(), self.top.key().into());
        fields.insert("marginBottom".into(), self.bottom.key().into());
    }

    /// Combined CSS class list for the block wrapper
    pub fn classes(&self) -> String {
        format!("{} {}", self.top.top_class(), self.bottom.bottom_class())
    }
}

pub fn read_margin(fields: &Fields, name: &str, default: Margin) -> Margin {
    fields
        .get(name)
        .and_then(Value::as_str)
        .and_then(Margin::from_key)
        .unwrap_or(default)
}

// ============================================================================
// Colors
// ============================================================================

/// Validated `#rrggbb` color (always lowercase, always 6 digits).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HexColor(String);

impl HexColor {
    /// Accepts `#rgb` and `#rrggbb`; anything else is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return None,
        };
        Some(HexColor(format!("#{}", expanded.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        HexColor::parse(&raw).ok_or_else(|| serde::de::Error::custom("invalid hex color"))
    }
}

/// Palette entries an author can pick without typing a hex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Primary,
    Secondary,
    Accent,
    Neutral,
    Dark,
}

impl NamedColor {
    pub fn key(&self) -> &'static str {
        match self {
            NamedColor::Primary => "primary",
            NamedColor::Secondary => "secondary",
            NamedColor::Accent => "accent",
            NamedColor::Neutral => "neutral",
            NamedColor::Dark => "dark",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "primary" => Some(NamedColor::Primary),
            "secondary" => Some(NamedColor::Secondary),
            "accent" => Some(NamedColor::Accent),
            "neutral" => Some(NamedColor::Neutral),
            "dark" => Some(NamedColor::Dark),
            _ => None,
        }
    }

    pub fn hex(&self) -> HexColor {
        let raw = match self {
            NamedColor::Primary => "#1f5f8b",
            NamedColor::Secondary => "#f2a541",
            NamedColor::Accent => "#c8553d",
            NamedColor::Neutral => "#d0d4d9",
            NamedColor::Dark => "#1b1f24",
        };
        HexColor(raw.to_string())
    }
}

/// Resolve the `color` / `customColor` pair.
///
/// `color: "custom"` only wins when `customColor` is a well-formed hex value.
pub fn read_color(fields: &Fields, default: NamedColor) -> HexColor {
    match fields.get("color").and_then(Value::as_str).map(str::trim) {
        Some("custom") => fields
            .get("customColor")
            .and_then(Value::as_str)
            .and_then(HexColor::parse)
            .unwrap_or_else(|| default.hex()),
        Some(key) => NamedColor::from_key(key)
            .map(|c| c.hex())
            .unwrap_or_else(|| default.hex()),
        None => default.hex(),
    }
}

pub fn write_color(fields: &mut Fields, color: &HexColor) {
    fields.insert("color".into(), "custom".into());
    fields.insert("customColor".into(), color.as_str().into());
}

// ============================================================================
// Numbers
// ============================================================================

/// Inclusive integer range with the value used when the author gave nothing usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRange {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl PixelRange {
    pub const fn new(min: u32, max: u32, default: u32) -> Self {
        Self { min, max, default }
    }

    /// Missing / non-numeric → default, out of range → clamped.
    pub fn resolve(&self, value: Option<&Value>) -> u32 {
        match value.and_then(lenient_f64) {
            Some(n) => n.round().clamp(self.min as f64, self.max as f64) as u32,
            None => self.default,
        }
    }
}

pub fn read_pixels(fields: &Fields, name: &str, range: PixelRange) -> u32 {
    range.resolve(fields.get(name))
}

/// Upper bound for authored figures; keeps sums of them finite.
pub const MAX_AMOUNT: f64 = 1e15;

/// Monetary / per-capita figure: finite, within `0..=MAX_AMOUNT`, junk reads as zero.
pub fn read_amount(fields: &Fields, name: &str) -> f64 {
    read_optional_amount(fields, name).unwrap_or(0.0)
}

pub fn read_optional_amount(fields: &Fields, name: &str) -> Option<f64> {
    fields
        .get(name)
        .and_then(lenient_f64)
        .map(|n| n.clamp(0.0, MAX_AMOUNT))
}

// ============================================================================
// Text
// ============================================================================

/// Strip control characters, trim, cap to `max_chars`.
pub fn sanitize_text(raw: &str, max_chars: usize) -> String {
    let cleaned: String = raw.chars().filter(|c| !c.is_control()).collect();
    let capped: String = cleaned.trim().chars().take(max_chars).collect();
    capped.trim_end().to_string()
}

pub fn read_text(fields: &Fields, name: &str, max_chars: usize, default: &str) -> String {
    let text = fields
        .get(name)
        .and_then(Value::as_str)
        .map(|s| sanitize_text(s, max_chars))
        .unwrap_or_default();
    if text.is_empty() {
        default.to_string()
    } else {
        text
    }
}

/// Paragraph list: accepts an array of strings or one string with blank-line breaks.
pub fn read_paragraphs(fields: &Fields, name: &str, max_paragraphs: usize, max_chars: usize) -> Vec<String> {
    let raw: Vec<String> = match fields.get(name) {
        Some(Value::String(s)) => s.split("\n\n").map(str::to_string).collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };
    raw.iter()
        .map(|p| sanitize_text(p, max_chars))
        .filter(|p| !p.is_empty())
        .take(max_paragraphs)
        .collect()
}
