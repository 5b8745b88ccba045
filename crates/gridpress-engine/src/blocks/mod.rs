//! The polymorphic block content model.
//!
//! An article body is a flat ordered sequence of [`Block`]s. Each block has
//! a stable [`BlockId`], a type tag, and one typed attribute record from the
//! [`BlockAttributes`] union. Unknown type tags survive the deserialization
//! boundary as [`BlockAttributes::Unknown`] and round-trip unchanged.

pub mod kinds;
pub mod patch;
pub mod registry;

use std::fmt;

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::layout::LayoutAttributes;
use kinds::{
    DividerAttrs, DriverCardAttrs, GalleryAttrs, HeadingAttrs, ImageAttrs, ListAttrs,
    ParagraphAttrs, QuoteAttrs, RaceResultAttrs, SliderAttrs, StandingsAttrs, TableAttrs,
    TeamCardAttrs,
};

/// Opaque stable identity of a block instance. Generated once at creation,
/// never reused, never shared between blocks of one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Block type identifier. The string tags use the flat `namespace/kind`
/// convention; [`BlockKind::Unknown`] carries any tag the registry does not
/// know, for forward compatibility with future documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading,
    List,
    Quote,
    Image,
    Gallery,
    Slider,
    Table,
    Divider,
    DriverCard,
    TeamCard,
    RaceResult,
    Standings,
    Unknown(String),
}

impl BlockKind {
    /// The wire tag for this kind.
    pub fn tag(&self) -> &str {
        match self {
            Self::Paragraph => "custom/paragraph",
            Self::Heading => "custom/heading",
            Self::List => "custom/list",
            Self::Quote => "custom/quote",
            Self::Image => "custom/image",
            Self::Gallery => "custom/gallery",
            Self::Slider => "custom/slider",
            Self::Table => "custom/table",
            Self::Divider => "custom/divider",
            Self::DriverCard => "f1/driver",
            Self::TeamCard => "f1/team",
            Self::RaceResult => "f1/race-result",
            Self::Standings => "f1/standings",
            Self::Unknown(tag) => tag,
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match registry::lookup_tag(tag) {
            Some(reg) => reg.kind.clone(),
            None => Self::Unknown(tag.to_string()),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Tagged union over the per-type attribute records.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockAttributes {
    Paragraph(ParagraphAttrs),
    Heading(HeadingAttrs),
    List(ListAttrs),
    Quote(QuoteAttrs),
    Image(ImageAttrs),
    Gallery(GalleryAttrs),
    Slider(SliderAttrs),
    Table(TableAttrs),
    Divider(DividerAttrs),
    DriverCard(DriverCardAttrs),
    TeamCard(TeamCardAttrs),
    RaceResult(RaceResultAttrs),
    Standings(StandingsAttrs),
    /// Attributes of a type this build does not know. Kept verbatim so the
    /// document round-trips; core logic skips these blocks.
    Unknown {
        tag: String,
        raw: serde_json::Value,
    },
}

impl BlockAttributes {
    /// The kind this attribute record belongs to. Kind and attributes cannot
    /// disagree because the kind is derived from the variant.
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Paragraph(_) => BlockKind::Paragraph,
            Self::Heading(_) => BlockKind::Heading,
            Self::List(_) => BlockKind::List,
            Self::Quote(_) => BlockKind::Quote,
            Self::Image(_) => BlockKind::Image,
            Self::Gallery(_) => BlockKind::Gallery,
            Self::Slider(_) => BlockKind::Slider,
            Self::Table(_) => BlockKind::Table,
            Self::Divider(_) => BlockKind::Divider,
            Self::DriverCard(_) => BlockKind::DriverCard,
            Self::TeamCard(_) => BlockKind::TeamCard,
            Self::RaceResult(_) => BlockKind::RaceResult,
            Self::Standings(_) => BlockKind::Standings,
            Self::Unknown { tag, .. } => BlockKind::Unknown(tag.clone()),
        }
    }

    /// The stored layout attributes of this record, for the shared resolver.
    pub fn layout(&self) -> LayoutAttributes {
        match self {
            Self::Paragraph(a) => a.layout(),
            Self::Heading(a) => a.layout(),
            Self::List(a) => a.layout(),
            Self::Quote(a) => a.layout(),
            Self::Image(a) => a.layout(),
            Self::Gallery(a) => a.layout(),
            Self::Slider(a) => a.layout(),
            Self::Table(a) => a.layout(),
            Self::Divider(a) => a.layout(),
            Self::DriverCard(a) => a.layout(),
            Self::TeamCard(a) => a.layout(),
            Self::RaceResult(a) => a.layout(),
            Self::Standings(a) => a.layout(),
            Self::Unknown { .. } => LayoutAttributes::default(),
        }
    }

    fn to_wire_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Self::Paragraph(a) => serde_json::to_value(a),
            Self::Heading(a) => serde_json::to_value(a),
            Self::List(a) => serde_json::to_value(a),
            Self::Quote(a) => serde_json::to_value(a),
            Self::Image(a) => serde_json::to_value(a),
            Self::Gallery(a) => serde_json::to_value(a),
            Self::Slider(a) => serde_json::to_value(a),
            Self::Table(a) => serde_json::to_value(a),
            Self::Divider(a) => serde_json::to_value(a),
            Self::DriverCard(a) => serde_json::to_value(a),
            Self::TeamCard(a) => serde_json::to_value(a),
            Self::RaceResult(a) => serde_json::to_value(a),
            Self::Standings(a) => serde_json::to_value(a),
            Self::Unknown { raw, .. } => Ok(raw.clone()),
        }
    }
}

/// One entry in a document's ordered block sequence.
///
/// `id` and the attribute variant (the type) are immutable for the life of
/// the instance; attribute contents mutate through typed patches.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub attrs: BlockAttributes,
}

impl Block {
    pub fn new(attrs: BlockAttributes) -> Self {
        Self {
            id: BlockId::new(),
            attrs,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.attrs.kind()
    }
}

/// Wire shape of one block: `{"clientId": ..., "type": ..., "attributes": ...}`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlock {
    #[serde(default)]
    client_id: BlockId,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    attributes: serde_json::Value,
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawBlock {
            client_id: self.id,
            kind: self.kind().tag().to_string(),
            attributes: self.attrs.to_wire_value().map_err(S::Error::custom)?,
        };
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBlock::deserialize(deserializer)?;
        if raw.kind.is_empty() {
            return Err(D::Error::custom("block is missing a type tag"));
        }
        let attrs = match registry::lookup_tag(&raw.kind) {
            // Attribute payloads that fail to decode fall back to the
            // type's defaults rather than failing the whole document.
            Some(reg) => (reg.decode)(raw.attributes),
            None => BlockAttributes::Unknown {
                tag: raw.kind,
                raw: raw.attributes,
            },
        };
        Ok(Self {
            id: raw.client_id,
            attrs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_round_trips_through_tags() {
        for reg in registry::all() {
            assert_eq!(BlockKind::from_tag(reg.kind.tag()), reg.kind);
        }
        assert_eq!(
            BlockKind::from_tag("custom/hologram"),
            BlockKind::Unknown("custom/hologram".to_string())
        );
    }

    #[test]
    fn block_serializes_with_tag_and_client_id() {
        let block = Block::new(BlockAttributes::Heading(HeadingAttrs::default()));
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["type"], "custom/heading");
        assert_eq!(value["clientId"], serde_json::to_value(block.id).unwrap());
        assert_eq!(value["attributes"]["level"], 2);
        assert_eq!(value["attributes"]["blockSize"], "full");
    }

    #[test]
    fn missing_attributes_decode_to_defaults() {
        let json = format!(
            r#"{{"clientId":"{}","type":"custom/list"}}"#,
            Uuid::new_v4()
        );
        let block: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(block.attrs, BlockAttributes::List(ListAttrs::default()));
    }

    #[test]
    fn unknown_type_round_trips_raw_attributes() {
        let json = format!(
            r#"{{"clientId":"{}","type":"custom/poll","attributes":{{"question":"?","votes":3}}}}"#,
            Uuid::new_v4()
        );
        let block: Block = serde_json::from_str(&json).unwrap();
        assert!(matches!(block.attrs, BlockAttributes::Unknown { .. }));

        let out = serde_json::to_value(&block).unwrap();
        assert_eq!(out["type"], "custom/poll");
        assert_eq!(out["attributes"]["question"], "?");
        assert_eq!(out["attributes"]["votes"], 3);
    }

    #[test]
    fn malformed_attribute_payload_falls_back_to_defaults() {
        let json = format!(
            r#"{{"clientId":"{}","type":"custom/heading","attributes":"not an object"}}"#,
            Uuid::new_v4()
        );
        let block: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(
            block.attrs,
            BlockAttributes::Heading(HeadingAttrs::default())
        );
    }

    #[test]
    fn malformed_enum_field_falls_back_to_field_default() {
        let json = format!(
            r#"{{"clientId":"{}","type":"custom/heading","attributes":{{"content":"Hi","blockSize":"gigantic"}}}}"#,
            Uuid::new_v4()
        );
        let block: Block = serde_json::from_str(&json).unwrap();
        let BlockAttributes::Heading(attrs) = block.attrs else {
            panic!("expected heading attributes");
        };
        assert_eq!(attrs.content, "Hi");
        assert_eq!(attrs.block_size, None);
    }
}
