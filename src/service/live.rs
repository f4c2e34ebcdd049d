use async_trait::async_trait;
use tracing::{debug, info, instrument};

use super::id_sets::{roster_ids, unique_player_ids, unique_team_ids};
use crate::data_fetcher::api::AbiosClient;
use crate::data_fetcher::context::RequestContext;
use crate::data_fetcher::models::{Player, Roster, SeriesDetails, Team};
use crate::error::AppError;

/// The three live views.
///
/// `Ok` with an empty vec means nothing is live. Any failing upstream step
/// fails the whole call with that step's error; there are no partial results.
#[async_trait]
pub trait LiveService: Send + Sync {
    async fn get_live_series_details(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<SeriesDetails>, AppError>;

    async fn get_live_players(&self, ctx: &RequestContext) -> Result<Vec<Player>, AppError>;

    async fn get_live_teams(&self, ctx: &RequestContext) -> Result<Vec<Team>, AppError>;
}

pub struct AbiosLiveService<C> {
    client: C,
}

impl<C: AbiosClient> AbiosLiveService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Live series, then the rosters taking part in them.
    async fn live_rosters(&self, ctx: &RequestContext) -> Result<Vec<Roster>, AppError> {
        let series = self.client.get_live_series(ctx).await?;
        let roster_ids = roster_ids(&series);
        debug!(
            "{} live series reference {} rosters",
            series.len(),
            roster_ids.len()
        );

        if roster_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.client.get_rosters_by_id(ctx, &roster_ids).await
    }
}

#[async_trait]
impl<C: AbiosClient> LiveService for AbiosLiveService<C> {
    #[instrument(skip_all)]
    async fn get_live_series_details(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<SeriesDetails>, AppError> {
        let series = self.client.get_live_series(ctx).await?;
        info!("Found {} live series", series.len());
        Ok(series.iter().map(SeriesDetails::from).collect())
    }

    #[instrument(skip_all)]
    async fn get_live_players(&self, ctx: &RequestContext) -> Result<Vec<Player>, AppError> {
        let rosters = self.live_rosters(ctx).await?;
        let player_ids = unique_player_ids(&rosters);
        if player_ids.is_empty() {
            info!("No live players");
            return Ok(Vec::new());
        }

        let players = self.client.get_players_by_id(ctx, &player_ids).await?;
        info!("Found {} live players", players.len());
        Ok(players)
    }

    #[instrument(skip_all)]
    async fn get_live_teams(&self, ctx: &RequestContext) -> Result<Vec<Team>, AppError> {
        let rosters = self.live_rosters(ctx).await?;
        let team_ids = unique_team_ids(&rosters);
        if team_ids.is_empty() {
            info!("No live teams");
            return Ok(Vec::new());
        }

        let teams = self.client.get_teams_by_id(ctx, &team_ids).await?;
        info!("Found {} live teams", teams.len());
        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{EntityId, Series};
    use crate::testing_utils::TestDataBuilder;
    use std::sync::Mutex;

    /// In-memory upstream. Records every batch call with the ids it received.
    #[derive(Default)]
    struct FakeClient {
        series: Vec<Series>,
        rosters: Vec<Roster>,
        players: Vec<Player>,
        teams: Vec<Team>,
        fail_rosters: bool,
        calls: Mutex<Vec<(&'static str, Vec<EntityId>)>>,
    }

    impl FakeClient {
        fn calls(&self) -> Vec<(&'static str, Vec<EntityId>)> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, name: &'static str, ids: &[EntityId]) {
            self.calls.lock().unwrap().push((name, ids.to_vec()));
        }
    }

    #[async_trait]
    impl AbiosClient for FakeClient {
        async fn get_live_series(&self, _ctx: &RequestContext) -> Result<Vec<Series>, AppError> {
            self.record("series", &[]);
            Ok(self.series.clone())
        }

        async fn get_rosters_by_id(
            &self,
            _ctx: &RequestContext,
            ids: &[EntityId],
        ) -> Result<Vec<Roster>, AppError> {
            self.record("rosters", ids);
            if self.fail_rosters {
                return Err(AppError::unexpected_status(500, "https://api.example.com/rosters"));
            }
            Ok(self
                .rosters
                .iter()
                .filter(|r| ids.contains(&r.id))
                .cloned()
                .collect())
        }

        async fn get_teams_by_id(
            &self,
            _ctx: &RequestContext,
            ids: &[EntityId],
        ) -> Result<Vec<Team>, AppError> {
            self.record("teams", ids);
            Ok(self
                .teams
                .iter()
                .filter(|t| ids.contains(&t.id))
                .cloned()
                .collect())
        }

        async fn get_players_by_id(
            &self,
            _ctx: &RequestContext,
            ids: &[EntityId],
        ) -> Result<Vec<Player>, AppError> {
            self.record("players", ids);
            Ok(self
                .players
                .iter()
                .filter(|p| ids.contains(&p.id))
                .cloned()
                .collect())
        }
    }

    fn scenario() -> FakeClient {
        FakeClient {
            series: vec![TestDataBuilder::create_series(1, "Grand Final", &[10, 20])],
            rosters: vec![
                TestDataBuilder::create_roster(10, Some(100), &[100, 101]),
                TestDataBuilder::create_roster(20, Some(200), &[101, 102]),
            ],
            players: vec![
                TestDataBuilder::create_player(100, "alpha"),
                TestDataBuilder::create_player(101, "bravo"),
                TestDataBuilder::create_player(102, "charlie"),
            ],
            teams: vec![
                TestDataBuilder::create_team(100, "Team 100"),
                TestDataBuilder::create_team(200, "Team 200"),
            ],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_live_series_details_projection() {
        let client = FakeClient {
            series: vec![
                TestDataBuilder::create_series(1, "Series 1", &[10]),
                TestDataBuilder::create_series(2, "Series 2", &[]),
            ],
            ..Default::default()
        };
        let service = AbiosLiveService::new(client);

        let details = service
            .get_live_series_details(&RequestContext::new())
            .await
            .unwrap();

        assert_eq!(
            details,
            vec![
                SeriesDetails {
                    id: 1,
                    title: "Series 1".to_string()
                },
                SeriesDetails {
                    id: 2,
                    title: "Series 2".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_live_players_deduplicates_before_lookup() {
        let service = AbiosLiveService::new(scenario());
        let players = service.get_live_players(&RequestContext::new()).await.unwrap();

        let mut ids: Vec<_> = players.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![100, 101, 102]);

        assert_eq!(
            service.client.calls(),
            vec![
                ("series", vec![]),
                ("rosters", vec![10, 20]),
                ("players", vec![100, 101, 102]),
            ]
        );
    }

    #[tokio::test]
    async fn test_live_teams_deduplicates_before_lookup() {
        let mut client = scenario();
        client
            .series
            .push(TestDataBuilder::create_series(2, "Rematch", &[20, 10]));
        let service = AbiosLiveService::new(client);

        let teams = service.get_live_teams(&RequestContext::new()).await.unwrap();

        let mut ids: Vec<_> = teams.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![100, 200]);

        // Roster ids go out as collected, team ids deduplicated.
        assert_eq!(
            service.client.calls(),
            vec![
                ("series", vec![]),
                ("rosters", vec![10, 20, 20, 10]),
                ("teams", vec![100, 200]),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_live_series_makes_no_downstream_calls() {
        let service = AbiosLiveService::new(FakeClient::default());
        let ctx = RequestContext::new();

        assert!(service.get_live_series_details(&ctx).await.unwrap().is_empty());
        assert!(service.get_live_players(&ctx).await.unwrap().is_empty());
        assert!(service.get_live_teams(&ctx).await.unwrap().is_empty());

        assert!(
            service
                .client
                .calls()
                .iter()
                .all(|(name, _)| *name == "series")
        );
    }

    #[tokio::test]
    async fn test_rosters_without_team_or_players() {
        let client = FakeClient {
            series: vec![TestDataBuilder::create_series(1, "Mixed", &[10])],
            rosters: vec![TestDataBuilder::create_roster(10, None, &[])],
            ..Default::default()
        };
        let service = AbiosLiveService::new(client);
        let ctx = RequestContext::new();

        assert!(service.get_live_teams(&ctx).await.unwrap().is_empty());
        assert!(service.get_live_players(&ctx).await.unwrap().is_empty());
        assert!(
            service
                .client
                .calls()
                .iter()
                .all(|(name, _)| *name == "series" || *name == "rosters")
        );
    }

    #[tokio::test]
    async fn test_step_failure_aborts_aggregation() {
        let mut client = scenario();
        client.fail_rosters = true;
        let service = AbiosLiveService::new(client);

        let error = service
            .get_live_players(&RequestContext::new())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::UnexpectedStatus { status: 500, .. }));

        let calls = service.client.calls();
        assert!(!calls.iter().any(|(name, _)| *name == "players"));
    }
}
