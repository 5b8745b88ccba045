//! Media block types: single image, gallery grid, image slider.

use serde::{Deserialize, Deserializer, Serialize};

use crate::layout::{
    Alignment, BlockSize, LayoutAttributes, LayoutStyle, de_alignment, de_block_size,
    de_layout_style,
};

/// Aspect ratio hint for image cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "4:3")]
    Classic,
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "auto" => Some(Self::Auto),
            "16:9" => Some(Self::Widescreen),
            "4:3" => Some(Self::Classic),
            "1:1" => Some(Self::Square),
            _ => None,
        }
    }
}

pub(crate) fn de_aspect_ratio<'de, D>(de: D) -> Result<AspectRatio, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)
        .ok()
        .flatten()
        .and_then(|s| AspectRatio::from_tag(&s))
        .unwrap_or_default())
}

/// One image entry inside a gallery or slider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
    pub credits: String,
}

/// `custom/image` — a single captioned image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageAttrs {
    pub url: String,
    pub alt: String,
    pub credits: String,
    #[serde(deserialize_with = "de_aspect_ratio")]
    pub aspect_ratio: AspectRatio,
    pub crop: bool,
    #[serde(deserialize_with = "de_block_size", skip_serializing_if = "Option::is_none")]
    pub block_size: Option<BlockSize>,
    #[serde(deserialize_with = "de_alignment", skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(deserialize_with = "de_layout_style", skip_serializing_if = "Option::is_none")]
    pub style: Option<LayoutStyle>,
}

impl Default for ImageAttrs {
    fn default() -> Self {
        Self {
            url: String::new(),
            alt: String::new(),
            credits: String::new(),
            aspect_ratio: AspectRatio::Auto,
            crop: true,
            block_size: Some(BlockSize::Large),
            align: Some(Alignment::Center),
            style: Some(LayoutStyle::Card),
        }
    }
}

impl ImageAttrs {
    pub fn layout(&self) -> LayoutAttributes {
        LayoutAttributes {
            size: self.block_size,
            align: self.align,
            style: self.style,
        }
    }
}

/// `custom/gallery` — titled grid of images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryAttrs {
    pub title: String,
    pub images: Vec<GalleryImage>,
    #[serde(deserialize_with = "de_block_size", skip_serializing_if = "Option::is_none")]
    pub block_size: Option<BlockSize>,
    #[serde(deserialize_with = "de_alignment", skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(deserialize_with = "de_layout_style", skip_serializing_if = "Option::is_none")]
    pub style: Option<LayoutStyle>,
}

impl Default for GalleryAttrs {
    fn default() -> Self {
        Self {
            title: String::new(),
            images: Vec::new(),
            block_size: Some(BlockSize::Full),
            align: Some(Alignment::Center),
            style: Some(LayoutStyle::Card),
        }
    }
}

impl GalleryAttrs {
    pub fn layout(&self) -> LayoutAttributes {
        LayoutAttributes {
            size: self.block_size,
            align: self.align,
            style: self.style,
        }
    }
}

/// `custom/slider` — scrolling image strip. Width is pinned to full by the
/// registry's layout profile; stored size/align are kept on the wire but
/// never affect resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderAttrs {
    pub title: String,
    pub images: Vec<GalleryImage>,
    #[serde(deserialize_with = "de_block_size", skip_serializing_if = "Option::is_none")]
    pub block_size: Option<BlockSize>,
    #[serde(deserialize_with = "de_alignment", skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
}

impl Default for SliderAttrs {
    fn default() -> Self {
        Self {
            title: String::new(),
            images: Vec::new(),
            block_size: None,
            align: None,
        }
    }
}

impl SliderAttrs {
    pub fn layout(&self) -> LayoutAttributes {
        LayoutAttributes {
            size: self.block_size,
            align: self.align,
            style: None,
        }
    }
}
