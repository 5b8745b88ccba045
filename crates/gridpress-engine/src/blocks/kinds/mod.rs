//! One attribute record per block type. Each record's `Default` impl is the
//! type's registered default attribute set; serde shapes follow the
//! camelCase wire format.

pub mod f1;
pub mod media;
pub mod table;
pub mod text;

pub use f1::{DriverCardAttrs, RaceResultAttrs, StandingsAttrs, StandingsTable, TeamCardAttrs};
pub use media::{AspectRatio, GalleryAttrs, GalleryImage, ImageAttrs, SliderAttrs};
pub use table::TableAttrs;
pub use text::{DividerAttrs, HeadingAttrs, ListAttrs, ParagraphAttrs, QuoteAttrs, TextAlign};
