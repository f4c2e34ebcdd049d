use serde::{Deserialize, Serialize};

use super::EntityId;

/// A series as returned by `GET /series`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Series {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// One side of a series. Wraps exactly one roster reference.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Participant {
    pub roster: RosterRef,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct RosterRef {
    pub id: EntityId,
}

/// Client-facing projection of a [`Series`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SeriesDetails {
    pub id: EntityId,
    pub title: String,
}

impl From<&Series> for SeriesDetails {
    fn from(series: &Series) -> Self {
        Self {
            id: series.id,
            title: series.title.clone(),
        }
    }
}
