pub mod article;
pub mod refdata;

pub use article::Article;
pub use refdata::{
    Driver, DriverId, Race, RaceId, ReferenceLookup, ReferenceStore, ResultRow, SessionKind,
    SessionResult, Team, TeamId,
};
