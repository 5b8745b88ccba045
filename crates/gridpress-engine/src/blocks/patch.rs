//! Typed partial-attribute patches.
//!
//! `updateBlock` carries one of these instead of an open key/value bag:
//! every field is an `Option`, `Some` overwrites the stored value, `None`
//! leaves it alone. Applying the same patch twice is a no-op (idempotent
//! shallow merge). A patch only applies to attributes of its own kind;
//! a mismatched pairing is a silent no-op.

use super::BlockAttributes;
use super::kinds::{
    AspectRatio, GalleryImage, StandingsTable, TextAlign,
};
use crate::layout::{Alignment, BlockSize, LayoutStyle};
use crate::models::refdata::SessionKind;

/// Patch for the shared layout attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPatch {
    pub block_size: Option<BlockSize>,
    pub align: Option<Alignment>,
    pub style: Option<LayoutStyle>,
}

impl LayoutPatch {
    fn apply(
        &self,
        size: &mut Option<BlockSize>,
        align: &mut Option<Alignment>,
        style: Option<&mut Option<LayoutStyle>>,
    ) {
        if let Some(v) = self.block_size {
            *size = Some(v);
        }
        if let Some(v) = self.align {
            *align = Some(v);
        }
        if let (Some(slot), Some(v)) = (style, self.style) {
            *slot = Some(v);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphPatch {
    pub content: Option<String>,
    pub drop_cap: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadingPatch {
    pub content: Option<String>,
    pub level: Option<u8>,
    pub text_align: Option<TextAlign>,
    pub layout: LayoutPatch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPatch {
    pub title: Option<String>,
    pub items: Option<Vec<String>>,
    pub ordered: Option<bool>,
    pub layout: LayoutPatch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuotePatch {
    pub content: Option<String>,
    pub attribution: Option<String>,
    pub layout: LayoutPatch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImagePatch {
    pub url: Option<String>,
    pub alt: Option<String>,
    pub credits: Option<String>,
    pub aspect_ratio: Option<AspectRatio>,
    pub crop: Option<bool>,
    pub layout: LayoutPatch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryPatch {
    pub title: Option<String>,
    pub images: Option<Vec<GalleryImage>>,
    pub layout: LayoutPatch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderPatch {
    pub title: Option<String>,
    pub images: Option<Vec<GalleryImage>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TablePatch {
    pub title: Option<String>,
    pub header: Option<Vec<String>>,
    pub rows: Option<Vec<Vec<String>>>,
    pub layout: LayoutPatch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverCardPatch {
    pub id: Option<String>,
    pub show_stats: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamCardPatch {
    pub id: Option<String>,
    pub show_drivers: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RaceResultPatch {
    pub id: Option<String>,
    pub session: Option<SessionKind>,
    pub row_limit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandingsPatch {
    pub table: Option<StandingsTable>,
    pub row_limit: Option<u32>,
}

/// Union over the per-kind patches. Divider has no mutable attributes, so it
/// has no patch variant.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockPatch {
    Paragraph(ParagraphPatch),
    Heading(HeadingPatch),
    List(ListPatch),
    Quote(QuotePatch),
    Image(ImagePatch),
    Gallery(GalleryPatch),
    Slider(SliderPatch),
    Table(TablePatch),
    DriverCard(DriverCardPatch),
    TeamCard(TeamCardPatch),
    RaceResult(RaceResultPatch),
    Standings(StandingsPatch),
}

macro_rules! set {
    ($target:expr, $src:expr) => {
        if let Some(v) = $src {
            $target = v;
        }
    };
}

impl BlockPatch {
    /// Shallow-merge this patch into an attribute record. Returns `false`
    /// without touching anything when the kinds do not match.
    pub fn apply_to(&self, attrs: &mut BlockAttributes) -> bool {
        match (self, attrs) {
            (Self::Paragraph(p), BlockAttributes::Paragraph(a)) => {
                set!(a.content, p.content.clone());
                set!(a.drop_cap, p.drop_cap);
                true
            }
            (Self::Heading(p), BlockAttributes::Heading(a)) => {
                set!(a.content, p.content.clone());
                set!(a.level, p.level);
                set!(a.text_align, p.text_align);
                p.layout.apply(&mut a.block_size, &mut a.align, None);
                true
            }
            (Self::List(p), BlockAttributes::List(a)) => {
                set!(a.title, p.title.clone());
                set!(a.items, p.items.clone());
                set!(a.ordered, p.ordered);
                p.layout
                    .apply(&mut a.block_size, &mut a.align, Some(&mut a.style));
                true
            }
            (Self::Quote(p), BlockAttributes::Quote(a)) => {
                set!(a.content, p.content.clone());
                set!(a.attribution, p.attribution.clone());
                p.layout
                    .apply(&mut a.block_size, &mut a.align, Some(&mut a.style));
                true
            }
            (Self::Image(p), BlockAttributes::Image(a)) => {
                set!(a.url, p.url.clone());
                set!(a.alt, p.alt.clone());
                set!(a.credits, p.credits.clone());
                set!(a.aspect_ratio, p.aspect_ratio);
                set!(a.crop, p.crop);
                p.layout
                    .apply(&mut a.block_size, &mut a.align, Some(&mut a.style));
                true
            }
            (Self::Gallery(p), BlockAttributes::Gallery(a)) => {
                set!(a.title, p.title.clone());
                set!(a.images, p.images.clone());
                p.layout
                    .apply(&mut a.block_size, &mut a.align, Some(&mut a.style));
                true
            }
            (Self::Slider(p), BlockAttributes::Slider(a)) => {
                set!(a.title, p.title.clone());
                set!(a.images, p.images.clone());
                true
            }
            (Self::Table(p), BlockAttributes::Table(a)) => {
                set!(a.title, p.title.clone());
                set!(a.header, p.header.clone());
                set!(a.rows, p.rows.clone());
                p.layout
                    .apply(&mut a.block_size, &mut a.align, Some(&mut a.style));
                true
            }
            (Self::DriverCard(p), BlockAttributes::DriverCard(a)) => {
                set!(a.id, p.id.clone());
                set!(a.show_stats, p.show_stats);
                true
            }
            (Self::TeamCard(p), BlockAttributes::TeamCard(a)) => {
                set!(a.id, p.id.clone());
                set!(a.show_drivers, p.show_drivers);
                true
            }
            (Self::RaceResult(p), BlockAttributes::RaceResult(a)) => {
                set!(a.id, p.id.clone());
                set!(a.session, p.session);
                set!(a.row_limit, p.row_limit);
                true
            }
            (Self::Standings(p), BlockAttributes::Standings(a)) => {
                set!(a.table, p.table);
                set!(a.row_limit, p.row_limit);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::kinds::{HeadingAttrs, ParagraphAttrs};
    use pretty_assertions::assert_eq;

    #[test]
    fn merge_overwrites_only_given_fields() {
        let mut attrs = BlockAttributes::Heading(HeadingAttrs::default());
        let patch = BlockPatch::Heading(HeadingPatch {
            content: Some("Lights out".to_string()),
            ..Default::default()
        });
        assert!(patch.apply_to(&mut attrs));

        let BlockAttributes::Heading(heading) = &attrs else {
            panic!("kind changed");
        };
        assert_eq!(heading.content, "Lights out");
        assert_eq!(heading.level, 2);
        assert_eq!(heading.block_size, Some(BlockSize::Full));
    }

    #[test]
    fn merge_is_idempotent() {
        let mut attrs = BlockAttributes::Quote(Default::default());
        let patch = BlockPatch::Quote(QuotePatch {
            content: Some("box box".to_string()),
            layout: LayoutPatch {
                block_size: Some(BlockSize::Small),
                ..Default::default()
            },
            ..Default::default()
        });
        patch.apply_to(&mut attrs);
        let once = attrs.clone();
        patch.apply_to(&mut attrs);
        assert_eq!(attrs, once);
    }

    #[test]
    fn mismatched_kind_is_a_no_op() {
        let mut attrs = BlockAttributes::Paragraph(ParagraphAttrs::default());
        let before = attrs.clone();
        let patch = BlockPatch::Heading(HeadingPatch {
            content: Some("nope".to_string()),
            ..Default::default()
        });
        assert!(!patch.apply_to(&mut attrs));
        assert_eq!(attrs, before);
    }
}
