use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{
    GameOfTheDay, LeaderBoard, LeaderQuery, PlayerOfTheDay, PlayerPerGameStats,
    PlayerSeasonTotals, PlayerSummary,
};
use crate::error::{CourtsideError, Result};
use crate::stats::normalize_stats;

/// Player and game data from the statistics service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlayerLookup: Send + Sync {
    /// Players whose names contain `name`; may be empty.
    async fn search_players(&self, name: &str) -> Result<Vec<PlayerSummary>>;

    /// Current-season aggregates for a resolved player.
    async fn season_totals(&self, player: &PlayerSummary) -> Result<PlayerSeasonTotals>;

    async fn player_of_the_day(&self, days_ago: u32) -> Result<PlayerOfTheDay>;

    async fn games_of_the_day(&self, days_ago: u32) -> Result<Vec<GameOfTheDay>>;

    async fn league_leaders(&self, query: &LeaderQuery) -> Result<LeaderBoard>;
}

/// Picture lookup for a free-text query
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// Link to the first matching image.
    async fn first_image(&self, query: &str) -> Result<String>;
}

/// Resolve a name query to its first match.
pub async fn find_player(lookup: &dyn PlayerLookup, name: &str) -> Result<PlayerSummary> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CourtsideError::Validation(
            "Player name is required".to_string(),
        ));
    }
    lookup
        .search_players(name)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| CourtsideError::NotFound(format!("No players found matching '{}'", name)))
}

/// Name query -> first matching player -> per-game stats.
pub async fn per_game_stats(lookup: &dyn PlayerLookup, name: &str) -> Result<PlayerPerGameStats> {
    let player = find_player(lookup, name).await?;
    let totals = lookup.season_totals(&player).await?;
    Ok(normalize_stats(&totals)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curry() -> PlayerSummary {
        PlayerSummary {
            id: 201939,
            full_name: "Stephen Curry".to_string(),
            current_team: Some("GSW".to_string()),
        }
    }

    #[test]
    fn find_player_returns_first_match() {
        let mut lookup = MockPlayerLookup::new();
        lookup
            .expect_search_players()
            .withf(|name| name == "curry")
            .returning(|_| {
                Ok(vec![
                    curry(),
                    PlayerSummary {
                        id: 203552,
                        full_name: "Seth Curry".to_string(),
                        current_team: None,
                    },
                ])
            });

        let found = tokio_test::block_on(find_player(&lookup, "  curry ")).unwrap();
        assert_eq!(found, curry());
    }

    #[test]
    fn find_player_empty_result_is_not_found() {
        let mut lookup = MockPlayerLookup::new();
        lookup.expect_search_players().returning(|_| Ok(vec![]));

        let err = tokio_test::block_on(find_player(&lookup, "nobody")).unwrap_err();
        assert!(matches!(err, CourtsideError::NotFound(_)));
    }

    #[test]
    fn per_game_stats_surfaces_division_undefined() {
        use crate::domain::StatCode;
        use crate::error::StatError;

        let mut lookup = MockPlayerLookup::new();
        lookup.expect_search_players().returning(|_| Ok(vec![curry()]));
        lookup
            .expect_season_totals()
            .returning(|p| Ok(PlayerSeasonTotals::empty(p)));

        let err = tokio_test::block_on(per_game_stats(&lookup, "curry")).unwrap_err();
        assert!(matches!(
            err,
            CourtsideError::Stat(StatError::DivisionUndefined { stat: StatCode::Pts })
        ));
    }

    #[test]
    fn find_player_blank_name_skips_upstream() {
        let lookup = MockPlayerLookup::new();
        let err = tokio_test::block_on(find_player(&lookup, "   ")).unwrap_err();
        assert!(matches!(err, CourtsideError::Validation(_)));
    }
}
