//! Static block type registry.
//!
//! The one place new block types are wired in: tag, editor label, default
//! attribute set, wire decoder, and layout profile. Lookups are pure reads;
//! duplicate tags are impossible because the table is keyed by the closed
//! [`BlockKind`] enum.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::kinds::{
    DividerAttrs, DriverCardAttrs, GalleryAttrs, HeadingAttrs, ImageAttrs, ListAttrs,
    ParagraphAttrs, QuoteAttrs, RaceResultAttrs, SliderAttrs, StandingsAttrs, TableAttrs,
    TeamCardAttrs,
};
use super::{BlockAttributes, BlockKind};
use crate::layout::{BlockSize, LayoutProfile};

/// Registry entry for one block type.
pub struct Registration {
    pub kind: BlockKind,
    /// Human-readable name shown in the authoring surface's insert menu.
    pub label: &'static str,
    /// The type's default attribute set, used to seed new instances.
    pub defaults: fn() -> BlockAttributes,
    /// Decode a wire attribute payload; malformed payloads yield defaults.
    pub decode: fn(Value) -> BlockAttributes,
    /// Per-type layout defaults consumed by the shared resolver.
    pub layout: LayoutProfile,
}

fn decode<T: DeserializeOwned + Default>(value: Value) -> T {
    serde_json::from_value(value).unwrap_or_default()
}

macro_rules! entry {
    ($kind:expr, $label:literal, $variant:ident, $attrs:ty, $layout:expr) => {
        Registration {
            kind: $kind,
            label: $label,
            defaults: || BlockAttributes::$variant(<$attrs>::default()),
            decode: |v| BlockAttributes::$variant(decode::<$attrs>(v)),
            layout: $layout,
        }
    };
}

static REGISTRY: &[Registration] = &[
    entry!(
        BlockKind::Paragraph,
        "Paragraph",
        Paragraph,
        ParagraphAttrs,
        LayoutProfile::simple()
    ),
    entry!(
        BlockKind::Heading,
        "Heading",
        Heading,
        HeadingAttrs,
        LayoutProfile::card(BlockSize::Full)
    ),
    entry!(
        BlockKind::List,
        "List",
        List,
        ListAttrs,
        LayoutProfile::card(BlockSize::Full)
    ),
    entry!(
        BlockKind::Quote,
        "Quote",
        Quote,
        QuoteAttrs,
        LayoutProfile::card(BlockSize::Medium)
    ),
    entry!(
        BlockKind::Image,
        "Image",
        Image,
        ImageAttrs,
        LayoutProfile::card(BlockSize::Large)
    ),
    entry!(
        BlockKind::Gallery,
        "Gallery",
        Gallery,
        GalleryAttrs,
        LayoutProfile::card(BlockSize::Full)
    ),
    entry!(
        BlockKind::Slider,
        "Image slider",
        Slider,
        SliderAttrs,
        LayoutProfile::locked_full()
    ),
    entry!(
        BlockKind::Table,
        "Table",
        Table,
        TableAttrs,
        LayoutProfile::card(BlockSize::Full)
    ),
    entry!(
        BlockKind::Divider,
        "Divider",
        Divider,
        DividerAttrs,
        LayoutProfile::simple()
    ),
    entry!(
        BlockKind::DriverCard,
        "Driver card",
        DriverCard,
        DriverCardAttrs,
        LayoutProfile::locked_full()
    ),
    entry!(
        BlockKind::TeamCard,
        "Team card",
        TeamCard,
        TeamCardAttrs,
        LayoutProfile::locked_full()
    ),
    entry!(
        BlockKind::RaceResult,
        "Race result",
        RaceResult,
        RaceResultAttrs,
        LayoutProfile::card(BlockSize::Full)
    ),
    entry!(
        BlockKind::Standings,
        "Standings",
        Standings,
        StandingsAttrs,
        LayoutProfile::card(BlockSize::Full)
    ),
];

/// All registered block types, in insert-menu order.
pub fn all() -> &'static [Registration] {
    REGISTRY
}

/// Look up the registration for a kind. `Unknown` kinds are never registered.
pub fn lookup(kind: &BlockKind) -> Option<&'static Registration> {
    REGISTRY.iter().find(|reg| reg.kind == *kind)
}

/// Look up a registration by wire tag.
pub fn lookup_tag(tag: &str) -> Option<&'static Registration> {
    REGISTRY.iter().find(|reg| reg.kind.tag() == tag)
}
