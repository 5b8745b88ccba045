//! `custom/table` — titled data table with a header row.

use serde::{Deserialize, Serialize};

use crate::layout::{
    Alignment, BlockSize, LayoutAttributes, LayoutStyle, de_alignment, de_block_size,
    de_layout_style,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableAttrs {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(deserialize_with = "de_block_size", skip_serializing_if = "Option::is_none")]
    pub block_size: Option<BlockSize>,
    #[serde(deserialize_with = "de_alignment", skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(deserialize_with = "de_layout_style", skip_serializing_if = "Option::is_none")]
    pub style: Option<LayoutStyle>,
}

impl Default for TableAttrs {
    fn default() -> Self {
        Self {
            title: String::new(),
            header: Vec::new(),
            rows: Vec::new(),
            block_size: Some(BlockSize::Full),
            align: Some(Alignment::Center),
            style: Some(LayoutStyle::Card),
        }
    }
}

impl TableAttrs {
    pub fn layout(&self) -> LayoutAttributes {
        LayoutAttributes {
            size: self.block_size,
            align: self.align,
            style: self.style,
        }
    }
}
