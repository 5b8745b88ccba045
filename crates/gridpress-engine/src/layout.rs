//! Shared layout policy for block rendering.
//!
//! Every block type stores the same three cross-cutting layout attributes
//! (`blockSize`, `align`, `style`) and resolves them through the single
//! [`resolve`] function below. Both render modes (authoring and published)
//! must go through this resolver; per-type reimplementation is forbidden.

use serde::{Deserialize, Deserializer, Serialize};

/// Stored width hint for a block, as written on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockSize {
    Small,
    Medium,
    Large,
    #[default]
    Full,
}

impl BlockSize {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "full" => Some(Self::Full),
            _ => None,
        }
    }
}

/// Stored horizontal placement hint for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Visual style of a block. `Simple` means full-bleed, start-packed layout
/// where `blockSize`/`align` are ignored entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStyle {
    #[default]
    Card,
    Simple,
}

impl LayoutStyle {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "card" => Some(Self::Card),
            "simple" => Some(Self::Simple),
            _ => None,
        }
    }
}

/// The three stored layout attributes of a block, before resolution.
///
/// `None` means "absent or unrecognized on the wire"; the resolver fills the
/// gap from the block type's [`LayoutProfile`]. Malformed wire values are
/// mapped to `None` at the deserialization boundary so resolution never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutAttributes {
    pub size: Option<BlockSize>,
    pub align: Option<Alignment>,
    pub style: Option<LayoutStyle>,
}

/// Per-type layout defaults, carried by the registry.
///
/// `lock_full` marks the types (slider, driver card, team card) that render
/// full width regardless of any stored `blockSize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutProfile {
    pub default_size: BlockSize,
    pub default_style: LayoutStyle,
    pub lock_full: bool,
}

impl LayoutProfile {
    pub const fn card(default_size: BlockSize) -> Self {
        Self {
            default_size,
            default_style: LayoutStyle::Card,
            lock_full: false,
        }
    }

    pub const fn simple() -> Self {
        Self {
            default_size: BlockSize::Full,
            default_style: LayoutStyle::Simple,
            lock_full: false,
        }
    }

    pub const fn locked_full() -> Self {
        Self {
            default_size: BlockSize::Full,
            default_style: LayoutStyle::Card,
            lock_full: true,
        }
    }
}

/// Abstract width directive produced by resolution. The UI layer maps these
/// to concrete presentation; the engine never speaks CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    /// One third of the content column.
    Third,
    /// Two thirds of the content column.
    TwoThirds,
    /// Five sixths of the content column.
    FiveSixths,
    /// The whole content column.
    Full,
}

/// Abstract horizontal packing directive produced by resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignDirective {
    Start,
    Center,
    End,
}

/// Fully resolved layout parameters for one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub width: WidthClass,
    pub align: AlignDirective,
}

const WIDTH_TABLE: &[(BlockSize, WidthClass)] = &[
    (BlockSize::Small, WidthClass::Third),
    (BlockSize::Medium, WidthClass::TwoThirds),
    (BlockSize::Large, WidthClass::FiveSixths),
    (BlockSize::Full, WidthClass::Full),
];

const ALIGN_TABLE: &[(Alignment, AlignDirective)] = &[
    (Alignment::Left, AlignDirective::Start),
    (Alignment::Center, AlignDirective::Center),
    (Alignment::Right, AlignDirective::End),
];

/// Resolve stored layout attributes against a type's layout profile.
///
/// Pure and total: absent or unrecognized inputs fall back to the profile's
/// defaults, `Simple` style forces full-bleed start-packed output, and
/// `lock_full` profiles pin the width to [`WidthClass::Full`].
pub fn resolve(attrs: &LayoutAttributes, profile: &LayoutProfile) -> ResolvedLayout {
    let style = attrs.style.unwrap_or(profile.default_style);
    if style == LayoutStyle::Simple {
        return ResolvedLayout {
            width: WidthClass::Full,
            align: AlignDirective::Start,
        };
    }

    let size = if profile.lock_full {
        BlockSize::Full
    } else {
        attrs.size.unwrap_or(profile.default_size)
    };
    let width = WIDTH_TABLE
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, w)| *w)
        .unwrap_or(WidthClass::Full);

    let align = attrs.align.unwrap_or_default();
    let align = ALIGN_TABLE
        .iter()
        .find(|(a, _)| *a == align)
        .map(|(_, d)| *d)
        .unwrap_or(AlignDirective::Center);

    ResolvedLayout { width, align }
}

// Tolerant deserializers for the wire enums. Unknown strings and wrong
// primitive shapes both decode to `None`, which resolves to the type's
// defaults. Used with `deserialize_with` on the attribute records.

pub(crate) fn de_block_size<'de, D>(de: D) -> Result<Option<BlockSize>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)
        .ok()
        .flatten()
        .and_then(|s| BlockSize::from_tag(&s)))
}

pub(crate) fn de_alignment<'de, D>(de: D) -> Result<Option<Alignment>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)
        .ok()
        .flatten()
        .and_then(|s| Alignment::from_tag(&s)))
}

pub(crate) fn de_layout_style<'de, D>(de: D) -> Result<Option<LayoutStyle>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)
        .ok()
        .flatten()
        .and_then(|s| LayoutStyle::from_tag(&s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const CARD_FULL: LayoutProfile = LayoutProfile::card(BlockSize::Full);

    fn attrs(
        size: Option<BlockSize>,
        align: Option<Alignment>,
        style: Option<LayoutStyle>,
    ) -> LayoutAttributes {
        LayoutAttributes { size, align, style }
    }

    #[rstest]
    #[case(BlockSize::Small, WidthClass::Third)]
    #[case(BlockSize::Medium, WidthClass::TwoThirds)]
    #[case(BlockSize::Large, WidthClass::FiveSixths)]
    #[case(BlockSize::Full, WidthClass::Full)]
    fn card_width_follows_block_size(#[case] size: BlockSize, #[case] expected: WidthClass) {
        let resolved = resolve(&attrs(Some(size), None, None), &CARD_FULL);
        assert_eq!(resolved.width, expected);
    }

    #[rstest]
    #[case(Alignment::Left, AlignDirective::Start)]
    #[case(Alignment::Center, AlignDirective::Center)]
    #[case(Alignment::Right, AlignDirective::End)]
    fn card_align_follows_alignment(#[case] align: Alignment, #[case] expected: AlignDirective) {
        let resolved = resolve(&attrs(None, Some(align), None), &CARD_FULL);
        assert_eq!(resolved.align, expected);
    }

    #[test]
    fn absent_attributes_take_profile_defaults() {
        let profile = LayoutProfile::card(BlockSize::Medium);
        let resolved = resolve(&LayoutAttributes::default(), &profile);
        assert_eq!(resolved.width, WidthClass::TwoThirds);
        assert_eq!(resolved.align, AlignDirective::Center);
    }

    #[rstest]
    #[case(Some(BlockSize::Small))]
    #[case(Some(BlockSize::Full))]
    #[case(None)]
    fn simple_style_ignores_size_and_align(#[case] size: Option<BlockSize>) {
        let resolved = resolve(
            &attrs(size, Some(Alignment::Right), Some(LayoutStyle::Simple)),
            &CARD_FULL,
        );
        assert_eq!(resolved.width, WidthClass::Full);
        assert_eq!(resolved.align, AlignDirective::Start);
    }

    #[test]
    fn locked_profile_pins_width_to_full() {
        let resolved = resolve(
            &attrs(Some(BlockSize::Small), Some(Alignment::Left), None),
            &LayoutProfile::locked_full(),
        );
        assert_eq!(resolved.width, WidthClass::Full);
        // alignment still honoured, only width is pinned
        assert_eq!(resolved.align, AlignDirective::Start);
    }

    #[test]
    fn resolution_is_deterministic() {
        let input = attrs(Some(BlockSize::Large), Some(Alignment::Right), None);
        assert_eq!(resolve(&input, &CARD_FULL), resolve(&input, &CARD_FULL));
    }

    #[test]
    fn unknown_wire_values_decode_to_none() {
        #[derive(serde::Deserialize)]
        struct Probe {
            #[serde(default, deserialize_with = "de_block_size")]
            size: Option<BlockSize>,
        }
        let probe: Probe = serde_json::from_str(r#"{"size":"gigantic"}"#).unwrap();
        assert_eq!(probe.size, None);
        let probe: Probe = serde_json::from_str(r#"{"size":42}"#).unwrap();
        assert_eq!(probe.size, None);
        let probe: Probe = serde_json::from_str(r#"{"size":"medium"}"#).unwrap();
        assert_eq!(probe.size, Some(BlockSize::Medium));
    }
}
