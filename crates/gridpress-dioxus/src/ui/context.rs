//! Shared rendering context types.

use std::sync::Arc;

use gridpress_engine::models::refdata::{DriverId, TeamId};
use gridpress_engine::{ReferenceLookup, ReferenceStore};

/// Which of the two rendering pipelines a component is serving.
///
/// Both modes must agree on resolved content and layout; `Edit` differs only
/// in exposing mutation affordances and suppressing navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Edit,
    Publish,
}

impl RenderMode {
    pub fn is_edit(self) -> bool {
        self == Self::Edit
    }
}

/// Navigation requests fired by publish-mode rendering. Fire-and-forget;
/// the renderer never observes a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Driver(DriverId),
    Team(TeamId),
    Calendar,
    Standings,
}

/// Cheap-to-clone handle to the externally owned reference data, usable as a
/// component prop. Compared by pointer identity.
#[derive(Clone)]
pub struct RefData(Arc<dyn ReferenceLookup + Send + Sync>);

impl RefData {
    pub fn new(lookup: impl ReferenceLookup + Send + Sync + 'static) -> Self {
        Self(Arc::new(lookup))
    }

    pub fn empty() -> Self {
        Self::new(ReferenceStore::new())
    }

    pub fn get(&self) -> &(dyn ReferenceLookup + Send + Sync) {
        &*self.0
    }
}

impl PartialEq for RefData {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
