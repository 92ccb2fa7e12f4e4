//! Rendering configurations: the validated output of block normalization.
//!
//! Every struct here implements [`BlockSpec`], which pairs the content-model
//! type tag with the per-variant normalizer and its inverse (`to_fields`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::descriptor::{Fields, RawBlock};
use super::presets::*;
use crate::domain::a001_locality::IndicatorKey;
use crate::shared::sector_data::PayorRow;

const MAX_TITLE_CHARS: usize = 160;
const MAX_LABEL_CHARS: usize = 80;
const MAX_PARAGRAPH_CHARS: usize = 4000;
const MAX_PARAGRAPHS: usize = 40;
const MAX_PAYOR_ROWS: usize = 32;

/// A block type known to the content model.
///
/// `from_fields` must be total (any field map yields a valid config) and
/// `from_fields(&c.to_fields()) == c` must hold for every config it produces.
pub trait BlockSpec: Sized + Into<BlockConfig> {
    const TAG: &'static str;

    fn from_fields(fields: &Fields) -> Self;

    fn to_fields(&self) -> Fields;
}

// ============================================================================
// Horizontal rule
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalRuleConfig {
    pub spacing: Spacing,
    pub width: u32,
    pub thickness: u32,
    pub color: HexColor,
}

impl HorizontalRuleConfig {
    pub const WIDTH: PixelRange = PixelRange::new(300, 1200, 1200);
    pub const THICKNESS: PixelRange = PixelRange::new(1, 16, 1);
}

impl BlockSpec for HorizontalRuleConfig {
    const TAG: &'static str = "horizontalRule";

    fn from_fields(fields: &Fields) -> Self {
        Self {
            spacing: Spacing::read(fields, Margin::None),
            width: read_pixels(fields, "width", Self::WIDTH),
            thickness: read_pixels(fields, "thickness", Self::THICKNESS),
            color: read_color(fields, NamedColor::Neutral),
        }
    }

    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        self.spacing.write(&mut fields);
        fields.insert("width".into(), self.width.into());
        fields.insert("thickness".into(), self.thickness.into());
        write_color(&mut fields, &self.color);
        fields
    }
}

// ============================================================================
// Sector selector
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSelectorConfig {
    pub spacing: Spacing,
    pub label: String,
}

impl BlockSpec for SectorSelectorConfig {
    const TAG: &'static str = "sectorSelector";

    fn from_fields(fields: &Fields) -> Self {
        Self {
            spacing: Spacing::read(fields, Margin::Medium),
            label: read_text(fields, "label", MAX_LABEL_CHARS, "Select a sector"),
        }
    }

    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        self.spacing.write(&mut fields);
        fields.insert("label".into(), self.label.clone().into());
        fields
    }
}

// ============================================================================
// Jitter plot
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JitterPlotConfig {
    pub spacing: Spacing,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub point_radius: u32,
    pub color: HexColor,
}

impl JitterPlotConfig {
    pub const WIDTH: PixelRange = PixelRange::new(300, 1200, 800);
    pub const HEIGHT: PixelRange = PixelRange::new(200, 800, 400);
    pub const POINT_RADIUS: PixelRange = PixelRange::new(1, 12, 4);
}

impl BlockSpec for JitterPlotConfig {
    const TAG: &'static str = "jitterPlot";

    fn from_fields(fields: &Fields) -> Self {
        Self {
            spacing: Spacing::read(fields, Margin::Medium),
            title: read_text(fields, "title", MAX_TITLE_CHARS, ""),
            width: read_pixels(fields, "width", Self::WIDTH),
            height: read_pixels(fields, "height", Self::HEIGHT),
            point_radius: read_pixels(fields, "pointRadius", Self::POINT_RADIUS),
            color: read_color(fields, NamedColor::Primary),
        }
    }

    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        self.spacing.write(&mut fields);
        fields.insert("title".into(), self.title.clone().into());
        fields.insert("width".into(), self.width.into());
        fields.insert("height".into(), self.height.into());
        fields.insert("pointRadius".into(), self.point_radius.into());
        write_color(&mut fields, &self.color);
        fields
    }
}

// ============================================================================
// Payor breakdown
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayorBreakdownConfig {
    pub spacing: Spacing,
    pub title: String,
    pub rows: Vec<PayorRow>,
}

impl BlockSpec for PayorBreakdownConfig {
    const TAG: &'static str = "payorBreakdown";

    fn from_fields(fields: &Fields) -> Self {
        let rows = match fields.get("rows") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_object)
                .take(MAX_PAYOR_ROWS)
                .map(PayorRow::from_fields)
                .collect(),
            _ => Vec::new(),
        };
        Self {
            spacing: Spacing::read(fields, Margin::Medium),
            title: read_text(fields, "title", MAX_TITLE_CHARS, ""),
            rows,
        }
    }

    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        self.spacing.write(&mut fields);
        fields.insert("title".into(), self.title.clone().into());
        let rows: Vec<Value> = self
            .rows
            .iter()
            .map(|r| Value::Object(r.to_fields()))
            .collect();
        fields.insert("rows".into(), Value::Array(rows));
        fields
    }
}

// ============================================================================
// Text section
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSectionConfig {
    pub spacing: Spacing,
    pub heading: String,
    pub body: Vec<String>,
}

impl BlockSpec for TextSectionConfig {
    const TAG: &'static str = "textSection";

    fn from_fields(fields: &Fields) -> Self {
        Self {
            spacing: Spacing::read(fields, Margin::Small),
            heading: read_text(fields, "heading", MAX_TITLE_CHARS, ""),
            body: read_paragraphs(fields, "body", MAX_PARAGRAPHS, MAX_PARAGRAPH_CHARS),
        }
    }

    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        self.spacing.write(&mut fields);
        fields.insert("heading".into(), self.heading.clone().into());
        fields.insert(
            "body".into(),
            Value::Array(self.body.iter().cloned().map(Value::String).collect()),
        );
        fields
    }
}

// ============================================================================
// Indicator map
// ============================================================================

/// Ranked per-locality view of one indicator, fetched through `/api/indicator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorMapConfig {
    pub spacing: Spacing,
    pub title: String,
    pub indicator: IndicatorKey,
    pub width: u32,
    pub color: HexColor,
}

impl IndicatorMapConfig {
    pub const WIDTH: PixelRange = PixelRange::new(300, 1200, 1000);
}

impl BlockSpec for IndicatorMapConfig {
    const TAG: &'static str = "indicatorMap";

    fn from_fields(fields: &Fields) -> Self {
        let indicator = fields
            .get("indicator")
            .and_then(Value::as_str)
            .and_then(|s| IndicatorKey::parse(s).ok())
            .unwrap_or_else(IndicatorKey::total_per_capita);
        Self {
            spacing: Spacing::read(fields, Margin::Large),
            title: read_text(fields, "title", MAX_TITLE_CHARS, ""),
            indicator,
            width: read_pixels(fields, "width", Self::WIDTH),
            color: read_color(fields, NamedColor::Accent),
        }
    }

    fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        self.spacing.write(&mut fields);
        fields.insert("title".into(), self.title.clone().into());
        fields.insert("indicator".into(), self.indicator.as_str().into());
        fields.insert("width".into(), self.width.into());
        write_color(&mut fields, &self.color);
        fields
    }
}

// ============================================================================
// Tagged union
// ============================================================================

/// Normalized configuration of one block, the only thing renderers see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "config")]
pub enum BlockConfig {
    HorizontalRule(HorizontalRuleConfig),
    SectorSelector(SectorSelectorConfig),
    JitterPlot(JitterPlotConfig),
    PayorBreakdown(PayorBreakdownConfig),
    TextSection(TextSectionConfig),
    IndicatorMap(IndicatorMapConfig),
}

impl BlockConfig {
    pub fn tag(&self) -> &'static str {
        match self {
            BlockConfig::HorizontalRule(_) => HorizontalRuleConfig::TAG,
            BlockConfig::SectorSelector(_) => SectorSelectorConfig::TAG,
            BlockConfig::JitterPlot(_) => JitterPlotConfig::TAG,
            BlockConfig::PayorBreakdown(_) => PayorBreakdownConfig::TAG,
            BlockConfig::TextSection(_) => TextSectionConfig::TAG,
            BlockConfig::IndicatorMap(_) => IndicatorMapConfig::TAG,
        }
    }

    pub fn spacing(&self) -> Spacing {
        match self {
            BlockConfig::HorizontalRule(c) => c.spacing,
            BlockConfig::SectorSelector(c) => c.spacing,
            BlockConfig::JitterPlot(c) => c.spacing,
            BlockConfig::PayorBreakdown(c) => c.spacing,
            BlockConfig::TextSection(c) => c.spacing,
            BlockConfig::IndicatorMap(c) => c.spacing,
        }
    }

    /// Re-emit as an authored descriptor; normalizing it yields `self` again.
    pub fn to_raw(&self) -> RawBlock {
        let fields = match self {
            BlockConfig::HorizontalRule(c) => c.to_fields(),
            BlockConfig::SectorSelector(c) => c.to_fields(),
            BlockConfig::JitterPlot(c) => c.to_fields(),
            BlockConfig::PayorBreakdown(c) => c.to_fields(),
            BlockConfig::TextSection(c) => c.to_fields(),
            BlockConfig::IndicatorMap(c) => c.to_fields(),
        };
        RawBlock {
            type_tag: self.tag().to_string(),
            key: None,
            fields,
        }
    }
}

impl From<HorizontalRuleConfig> for BlockConfig {
    fn from(c: HorizontalRuleConfig) -> Self {
        BlockConfig::HorizontalRule(c)
    }
}

impl From<SectorSelectorConfig> for BlockConfig {
    fn from(c: SectorSelectorConfig) -> Self {
        BlockConfig::SectorSelector(c)
    }
}

impl From<JitterPlotConfig> for BlockConfig {
    fn from(c: JitterPlotConfig) -> Self {
        BlockConfig::JitterPlot(c)
    }
}

impl From<PayorBreakdownConfig> for BlockConfig {
    fn from(c: PayorBreakdownConfig) -> Self {
        BlockConfig::PayorBreakdown(c)
    }
}

impl From<TextSectionConfig> for BlockConfig {
    fn from(c: TextSectionConfig) -> Self {
        BlockConfig::TextSection(c)
    }
}

impl From<IndicatorMapConfig> for BlockConfig {
    fn from(c: IndicatorMapConfig) -> Self {
        BlockConfig::IndicatorMap(c)
    }
}
