use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{CountyFips, StateFips};

/// A selected state. Created when a state polygon is first toggled on,
/// dropped when it is toggled off, removed, or the selection is reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    pub name: Arc<str>,
    /// Identifier used by the topology source (often the FIPS code itself).
    pub id: Arc<str>,
    pub fips: StateFips,
}

/// A selected county.
///
/// `state` is the owning state's display name resolved from the FIPS
/// prefix, kept denormalized rather than as a structural reference. It may
/// read "Unknown" until the geography index can resolve it, and is
/// back-filled once the index is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyRecord {
    pub name: Arc<str>,
    pub id: Arc<str>,
    pub state: Arc<str>,
    pub fips: CountyFips,
}
