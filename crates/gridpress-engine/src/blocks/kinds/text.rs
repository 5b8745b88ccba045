//! Text-carrying block types: paragraph, heading, list, quote.

use serde::{Deserialize, Deserializer, Serialize};

use crate::layout::{
    Alignment, BlockSize, LayoutAttributes, LayoutStyle, de_alignment, de_block_size,
    de_layout_style,
};

/// Inline text alignment inside a block (distinct from the block's own
/// horizontal placement in the column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

pub(crate) fn de_text_align<'de, D>(de: D) -> Result<TextAlign, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)
        .ok()
        .flatten()
        .and_then(|s| TextAlign::from_tag(&s))
        .unwrap_or_default())
}

/// `custom/paragraph` — running body text. Always rendered simple style,
/// full bleed; carries no layout attributes of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParagraphAttrs {
    pub content: String,
    pub drop_cap: bool,
}

impl Default for ParagraphAttrs {
    fn default() -> Self {
        Self {
            content: String::new(),
            drop_cap: false,
        }
    }
}

impl ParagraphAttrs {
    pub fn layout(&self) -> LayoutAttributes {
        LayoutAttributes {
            size: None,
            align: None,
            style: Some(LayoutStyle::Simple),
        }
    }
}

/// `custom/heading` — section heading, levels 1-6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadingAttrs {
    pub content: String,
    pub level: u8,
    #[serde(deserialize_with = "de_text_align")]
    pub text_align: TextAlign,
    #[serde(deserialize_with = "de_block_size", skip_serializing_if = "Option::is_none")]
    pub block_size: Option<BlockSize>,
    #[serde(deserialize_with = "de_alignment", skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
}

impl Default for HeadingAttrs {
    fn default() -> Self {
        Self {
            content: String::new(),
            level: 2,
            text_align: TextAlign::Left,
            block_size: Some(BlockSize::Full),
            align: Some(Alignment::Center),
        }
    }
}

impl HeadingAttrs {
    pub fn layout(&self) -> LayoutAttributes {
        LayoutAttributes {
            size: self.block_size,
            align: self.align,
            style: None,
        }
    }

    /// Heading level clamped to the renderable 1-6 range.
    pub fn clamped_level(&self) -> u8 {
        self.level.clamp(1, 6)
    }
}

/// `custom/list` — titled bullet or numbered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListAttrs {
    pub title: String,
    pub items: Vec<String>,
    pub ordered: bool,
    #[serde(deserialize_with = "de_block_size", skip_serializing_if = "Option::is_none")]
    pub block_size: Option<BlockSize>,
    #[serde(deserialize_with = "de_alignment", skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(deserialize_with = "de_layout_style", skip_serializing_if = "Option::is_none")]
    pub style: Option<LayoutStyle>,
}

impl Default for ListAttrs {
    fn default() -> Self {
        Self {
            title: String::new(),
            items: vec![String::new()],
            ordered: false,
            block_size: Some(BlockSize::Full),
            align: Some(Alignment::Center),
            style: Some(LayoutStyle::Card),
        }
    }
}

impl ListAttrs {
    pub fn layout(&self) -> LayoutAttributes {
        LayoutAttributes {
            size: self.block_size,
            align: self.align,
            style: self.style,
        }
    }
}

/// `custom/quote` — pull quote with optional attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteAttrs {
    pub content: String,
    pub attribution: String,
    #[serde(deserialize_with = "de_block_size", skip_serializing_if = "Option::is_none")]
    pub block_size: Option<BlockSize>,
    #[serde(deserialize_with = "de_alignment", skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(deserialize_with = "de_layout_style", skip_serializing_if = "Option::is_none")]
    pub style: Option<LayoutStyle>,
}

impl Default for QuoteAttrs {
    fn default() -> Self {
        Self {
            content: String::new(),
            attribution: String::new(),
            block_size: Some(BlockSize::Medium),
            align: Some(Alignment::Center),
            style: Some(LayoutStyle::Card),
        }
    }
}

impl QuoteAttrs {
    pub fn layout(&self) -> LayoutAttributes {
        LayoutAttributes {
            size: self.block_size,
            align: self.align,
            style: self.style,
        }
    }
}

/// `custom/divider` — thematic break between sections. No attributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerAttrs {}

impl DividerAttrs {
    pub fn layout(&self) -> LayoutAttributes {
        LayoutAttributes {
            size: None,
            align: None,
            style: Some(LayoutStyle::Simple),
        }
    }
}
