//! Domain block types referencing externally owned F1 data.
//!
//! These blocks store only foreign-key ids; resolution happens at render
//! time against a [`crate::models::refdata::ReferenceLookup`]. A dangling id
//! is a defined empty rendering state, never an error.

use serde::{Deserialize, Deserializer, Serialize};

use crate::layout::{Alignment, BlockSize, LayoutAttributes, de_alignment, de_block_size};
use crate::models::refdata::SessionKind;

pub(crate) fn de_session_kind<'de, D>(de: D) -> Result<SessionKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)
        .ok()
        .flatten()
        .and_then(|s| SessionKind::from_tag(&s))
        .unwrap_or_default())
}

/// `f1/driver` — driver profile card. Width pinned to full by the registry
/// profile regardless of stored size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DriverCardAttrs {
    /// Foreign key into the external driver collection; may dangle.
    pub id: String,
    pub show_stats: bool,
    #[serde(deserialize_with = "de_block_size", skip_serializing_if = "Option::is_none")]
    pub block_size: Option<BlockSize>,
    #[serde(deserialize_with = "de_alignment", skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
}

impl Default for DriverCardAttrs {
    fn default() -> Self {
        Self {
            id: String::new(),
            show_stats: true,
            block_size: None,
            align: None,
        }
    }
}

impl DriverCardAttrs {
    pub fn layout(&self) -> LayoutAttributes {
        LayoutAttributes {
            size: self.block_size,
            align: self.align,
            style: None,
        }
    }
}

/// `f1/team` — constructor profile card. Width pinned to full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamCardAttrs {
    /// Foreign key into the external team collection; may dangle.
    pub id: String,
    pub show_drivers: bool,
    #[serde(deserialize_with = "de_block_size", skip_serializing_if = "Option::is_none")]
    pub block_size: Option<BlockSize>,
    #[serde(deserialize_with = "de_alignment", skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
}

impl Default for TeamCardAttrs {
    fn default() -> Self {
        Self {
            id: String::new(),
            show_drivers: false,
            block_size: None,
            align: None,
        }
    }
}

impl TeamCardAttrs {
    pub fn layout(&self) -> LayoutAttributes {
        LayoutAttributes {
            size: self.block_size,
            align: self.align,
            style: None,
        }
    }
}

/// `f1/race-result` — classification table for one session of a race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RaceResultAttrs {
    /// Foreign key into the external race collection; may dangle.
    pub id: String,
    #[serde(deserialize_with = "de_session_kind")]
    pub session: SessionKind,
    /// Number of classification rows shown; 0 means all.
    pub row_limit: u32,
    #[serde(deserialize_with = "de_block_size", skip_serializing_if = "Option::is_none")]
    pub block_size: Option<BlockSize>,
    #[serde(deserialize_with = "de_alignment", skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
}

impl Default for RaceResultAttrs {
    fn default() -> Self {
        Self {
            id: String::new(),
            session: SessionKind::Race,
            row_limit: 10,
            block_size: Some(BlockSize::Full),
            align: Some(Alignment::Center),
        }
    }
}

impl RaceResultAttrs {
    pub fn layout(&self) -> LayoutAttributes {
        LayoutAttributes {
            size: self.block_size,
            align: self.align,
            style: None,
        }
    }
}

/// Which championship table a standings block shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StandingsTable {
    #[default]
    Drivers,
    Constructors,
}

impl StandingsTable {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "drivers" => Some(Self::Drivers),
            "constructors" => Some(Self::Constructors),
            _ => None,
        }
    }
}

pub(crate) fn de_standings_table<'de, D>(de: D) -> Result<StandingsTable, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)
        .ok()
        .flatten()
        .and_then(|s| StandingsTable::from_tag(&s))
        .unwrap_or_default())
}

/// `f1/standings` — current championship standings, computed from the
/// external reference data at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StandingsAttrs {
    #[serde(deserialize_with = "de_standings_table")]
    pub table: StandingsTable,
    /// Number of standings rows shown; 0 means all.
    pub row_limit: u32,
    #[serde(deserialize_with = "de_block_size", skip_serializing_if = "Option::is_none")]
    pub block_size: Option<BlockSize>,
    #[serde(deserialize_with = "de_alignment", skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
}

impl Default for StandingsAttrs {
    fn default() -> Self {
        Self {
            table: StandingsTable::Drivers,
            row_limit: 10,
            block_size: Some(BlockSize::Full),
            align: Some(Alignment::Center),
        }
    }
}

impl StandingsAttrs {
    pub fn layout(&self) -> LayoutAttributes {
        LayoutAttributes {
            size: self.block_size,
            align: self.align,
            style: None,
        }
    }
}
