use axum::{routing::get, Router};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::api::{handlers, state::AppState};
use crate::services::health_routes;

pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let health = health_routes(state.health.clone());

    Router::new()
        // Pages
        .route("/", get(handlers::home_page))
        .route("/matches-today", get(handlers::matches_page))
        .route(
            "/player-stats",
            get(handlers::player_stats_form).post(handlers::player_stats),
        )
        .route(
            "/league-leaders",
            get(handlers::leaders_form).post(handlers::league_leaders),
        )
        .route(
            "/player-comparison",
            get(handlers::comparison_form).post(handlers::player_comparison),
        )
        // Add state, probes, static assets and request tracing
        .with_state(state)
        .merge(health)
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::traits::{MockImageSearch, MockPlayerLookup};
    use crate::domain::{
        GameOfTheDay, GameRoster, LeaderBoard, LeaderEntry, PlayerContribution, PlayerOfTheDay,
        PlayerSeasonTotals, PlayerSummary, StatCode,
    };
    use crate::error::CourtsideError;
    use crate::services::HealthStatus;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use mockall::predicate::eq;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn lebron() -> PlayerSummary {
        PlayerSummary {
            id: 2544,
            full_name: "LeBron James".to_string(),
            current_team: Some("LAL".to_string()),
        }
    }

    fn totals(player: &PlayerSummary, games_played: u32) -> PlayerSeasonTotals {
        let mut t = PlayerSeasonTotals::empty(player);
        t.season = Some("2024-25".to_string());
        t.games_played = games_played;
        t.points = 255.0;
        t.field_goal_pct = 0.452;
        t
    }

    fn images_ok() -> MockImageSearch {
        let mut images = MockImageSearch::new();
        images
            .expect_first_image()
            .returning(|_| Ok("https://img.example/player.jpg".to_string()));
        images
    }

    fn app(players: MockPlayerLookup, images: MockImageSearch) -> (Router, AppState) {
        let state = AppState::new(Arc::new(players), Arc::new(images)).with_default_days_ago(3);
        (create_router(state.clone(), "does-not-exist"), state)
    }

    fn form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(router: Router, req: Request<Body>) -> (StatusCode, String) {
        let resp = router.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn player_stats_renders_per_game_table() {
        let mut players = MockPlayerLookup::new();
        players
            .expect_search_players()
            .withf(|name| name == "LeBron")
            .returning(|_| Ok(vec![lebron()]));
        players
            .expect_season_totals()
            .returning(|p| Ok(totals(p, 10)));

        let (router, state) = app(players, images_ok());
        let (status, body) = send(router, form("/player-stats", "playerName=LeBron")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<td>25.5</td>"), "{body}");
        assert!(body.contains("<td>45.2%</td>"));
        assert!(body.contains("https://img.example/player.jpg"));
        assert_eq!(
            state
                .health
                .pages_rendered
                .load(std::sync::atomic::Ordering::Relaxed),
            1
        );
    }

    #[tokio::test]
    async fn player_stats_zero_games_is_unprocessable() {
        let mut players = MockPlayerLookup::new();
        players
            .expect_search_players()
            .returning(|_| Ok(vec![lebron()]));
        players.expect_season_totals().returning(|p| Ok(totals(p, 0)));
        let mut images = MockImageSearch::new();
        images.expect_first_image().never();

        let (router, _) = app(players, images);
        let (status, body) = send(router, form("/player-stats", "playerName=LeBron")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("games played is zero"));
        assert!(!body.contains("NaN"));
    }

    #[tokio::test]
    async fn player_stats_unknown_player_is_not_found() {
        let mut players = MockPlayerLookup::new();
        players.expect_search_players().returning(|_| Ok(vec![]));
        players.expect_season_totals().never();

        let (router, _) = app(players, MockImageSearch::new());
        let (status, body) = send(router, form("/player-stats", "playerName=Nobody")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("No players found matching &#39;Nobody&#39;"));
    }

    #[tokio::test]
    async fn image_failure_does_not_fail_the_page() {
        let mut players = MockPlayerLookup::new();
        players
            .expect_search_players()
            .returning(|_| Ok(vec![lebron()]));
        players
            .expect_season_totals()
            .returning(|p| Ok(totals(p, 10)));
        let mut images = MockImageSearch::new();
        images
            .expect_first_image()
            .returning(|_| Err(CourtsideError::upstream("image_search", "quota exceeded")));

        let (router, _) = app(players, images);
        let (status, body) = send(router, form("/player-stats", "playerName=LeBron")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("player-image"));
    }

    #[tokio::test]
    async fn league_leaders_rejects_unknown_inputs() {
        for (body, message) in [
            ("stat=MIN&limit=5", "Invalid stat category"),
            ("stat=PTS&limit=7", "Invalid limit"),
            ("limit=5", "Invalid stat category"),
        ] {
            let mut players = MockPlayerLookup::new();
            players.expect_league_leaders().never();

            let (router, _) = app(players, MockImageSearch::new());
            let (status, html) = send(router, form("/league-leaders", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert!(html.contains(message), "{body}");
        }
    }

    #[tokio::test]
    async fn league_leaders_renders_board() {
        let mut players = MockPlayerLookup::new();
        players
            .expect_league_leaders()
            .withf(|q| q.stat == StatCode::Ast && q.limit == 10)
            .returning(|q| {
                Ok(LeaderBoard {
                    season: "2024-25".to_string(),
                    stat: q.stat,
                    leaders: vec![LeaderEntry {
                        player_id: 1,
                        player_name: "Trae Young".to_string(),
                        team_abbr: Some("ATL".to_string()),
                        value: Some(11.56),
                    }],
                })
            });

        let (router, _) = app(players, MockImageSearch::new());
        let (status, body) = send(router, form("/league-leaders", "stat=AST&limit=10")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Trae Young"));
        assert!(body.contains("<td>11.6</td>"));
    }

    #[tokio::test]
    async fn matches_page_scores_each_game() {
        let mut players = MockPlayerLookup::new();
        players
            .expect_games_of_the_day()
            .with(eq(3))
            .returning(|_| {
                let entry = |team: &str, points| PlayerContribution {
                    player_name: None,
                    team: team.to_string(),
                    points,
                };
                Ok(vec![
                    GameOfTheDay {
                        date: None,
                        final_score: None,
                        roster: GameRoster {
                            matchup: "Lakers vs Celtics".to_string(),
                            players: vec![
                                entry("Lakers", Some(20)),
                                entry("Celtics", Some(15)),
                                entry("Lakers", Some(10)),
                                entry("Celtics", None),
                            ],
                        },
                    },
                    GameOfTheDay {
                        date: None,
                        final_score: None,
                        roster: GameRoster {
                            matchup: "BOS @ LAL".to_string(),
                            players: vec![],
                        },
                    },
                ])
            });

        let (router, _) = app(players, MockImageSearch::new());
        let (status, body) = send(router, get("/matches-today")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Lakers <b>30</b> (W) - <b>15</b> Celtics (L)"));
        assert!(body.contains("BOS @ LAL"));
        assert!(body.contains("score unavailable"));
    }

    #[tokio::test]
    async fn home_page_honours_days_ago_and_degrades_health_on_failure() {
        let mut players = MockPlayerLookup::new();
        players
            .expect_player_of_the_day()
            .with(eq(7))
            .returning(|_| Err(CourtsideError::upstream("nba_api", "connection refused")));

        let (router, state) = app(players, MockImageSearch::new());
        let (status, body) = send(router, get("/?days_ago=7")).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("nba_api service is unavailable"));
        assert!(!body.contains("connection refused"));
        assert_eq!(state.health.get_health().await.status, HealthStatus::Degraded);
    }

    #[tokio::test]
    async fn home_page_without_games_is_a_notice() {
        let mut players = MockPlayerLookup::new();
        players.expect_player_of_the_day().returning(|_| {
            Err(CourtsideError::NotFound(
                "No NBA games were played on 07/20/2025.".to_string(),
            ))
        });

        let (router, _) = app(players, MockImageSearch::new());
        let (status, body) = send(router, get("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No NBA games were played"));
    }

    #[tokio::test]
    async fn home_page_renders_player_of_the_day() {
        let mut players = MockPlayerLookup::new();
        players.expect_player_of_the_day().returning(|_| {
            Ok(PlayerOfTheDay {
                date: "05/12/2025".to_string(),
                player: "Nikola Jokic".to_string(),
                team: Some("DEN".to_string()),
                points: 32,
                rebounds: 14,
                assists: 11,
                opponent: Some("OKC".to_string()),
                final_score: Some("DEN@OKC: 112-105".to_string()),
            })
        });

        let (router, _) = app(players, images_ok());
        let (status, body) = send(router, get("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Nikola Jokic"));
        assert!(body.contains("Opponent: OKC"));
    }

    #[tokio::test]
    async fn comparison_renders_both_players() {
        let mut players = MockPlayerLookup::new();
        players.expect_search_players().returning(|name| {
            let id = if name == "Curry" { 201939 } else { 2544 };
            Ok(vec![PlayerSummary {
                id,
                full_name: name.to_string(),
                current_team: None,
            }])
        });
        players
            .expect_season_totals()
            .times(2)
            .returning(|p| Ok(totals(p, if p.id == 201939 { 5 } else { 10 })));

        let (router, _) = app(players, MockImageSearch::new());
        let (status, body) = send(
            router,
            form("/player-comparison", "player1Name=Curry&player2Name=LeBron"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<td>51.0</td><td>25.5</td>"), "{body}");
    }

    #[tokio::test]
    async fn probes_and_forms_respond() {
        for uri in [
            "/healthz",
            "/readyz",
            "/health",
            "/metrics",
            "/player-stats",
            "/league-leaders",
            "/player-comparison",
        ] {
            let (router, _) = app(MockPlayerLookup::new(), MockImageSearch::new());
            let (status, _) = send(router, get(uri)).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
        }
    }
}
