use serde::{Deserialize, Serialize};

use super::EntityId;

/// A team's line-up for one series, as returned by `GET /rosters`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Roster {
    pub id: EntityId,
    /// Owning team. Upstream omits or nulls it for mixed rosters.
    #[serde(default)]
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub line_up: LineUp,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct TeamRef {
    pub id: EntityId,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LineUp {
    #[serde(default)]
    pub players: Vec<PlayerRef>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PlayerRef {
    pub id: EntityId,
}
