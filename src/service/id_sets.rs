//! Id extraction between aggregation steps.

use std::collections::BTreeSet;

use crate::data_fetcher::models::{EntityId, Roster, Series};

/// Every participant roster id across `series`, in order. Not deduplicated.
pub fn roster_ids(series: &[Series]) -> Vec<EntityId> {
    series
        .iter()
        .flat_map(|s| s.participants.iter().map(|p| p.roster.id))
        .collect()
}

/// Distinct line-up player ids across `rosters`, ascending.
pub fn unique_player_ids(rosters: &[Roster]) -> Vec<EntityId> {
    rosters
        .iter()
        .flat_map(|r| r.line_up.players.iter().map(|p| p.id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct owning team ids across `rosters`, ascending. Rosters without a
/// team contribute nothing.
pub fn unique_team_ids(rosters: &[Roster]) -> Vec<EntityId> {
    rosters
        .iter()
        .filter_map(|r| r.team.map(|t| t.id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
