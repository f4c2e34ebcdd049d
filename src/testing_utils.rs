use crate::data_fetcher::models::{
    EntityId, LineUp, Participant, Player, PlayerRef, Roster, RosterRef, Series, Team, TeamRef,
};

/// Test utilities for creating upstream records
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a series with one participant per roster id
    pub fn create_series(id: EntityId, title: &str, roster_ids: &[EntityId]) -> Series {
        Series {
            id,
            title: title.to_string(),
            participants: roster_ids
                .iter()
                .map(|&roster_id| Participant {
                    roster: RosterRef { id: roster_id },
                })
                .collect(),
        }
    }

    /// Creates a roster, optionally owned by a team
    pub fn create_roster(
        id: EntityId,
        team_id: Option<EntityId>,
        player_ids: &[EntityId],
    ) -> Roster {
        Roster {
            id,
            team: team_id.map(|team_id| TeamRef { id: team_id }),
            line_up: LineUp {
                players: player_ids.iter().map(|&id| PlayerRef { id }).collect(),
            },
        }
    }

    pub fn create_player(id: EntityId, nickname: &str) -> Player {
        Player {
            id,
            nickname: nickname.to_string(),
        }
    }

    pub fn create_team(id: EntityId, name: &str) -> Team {
        Team {
            id,
            name: name.to_string(),
        }
    }

    /// Series JSON as upstream sends it
    pub fn series_json(series: &[Series]) -> String {
        serde_json::to_string(series).unwrap_or_else(|_| "[]".to_string())
    }

    /// Roster JSON as upstream sends it
    pub fn rosters_json(rosters: &[Roster]) -> String {
        serde_json::to_string(rosters).unwrap_or_else(|_| "[]".to_string())
    }
}
