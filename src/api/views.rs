//! HTML pages. Every upstream or user-supplied string goes through `escape`.

use std::fmt::Write;

use crate::domain::{
    GameOfTheDay, LeaderBoard, LeaderQuery, MatchResult, PlayerOfTheDay, PlayerPerGameStats,
    StatCode, LEADER_LIMITS,
};
use crate::error::StatError;
use crate::stats::display_value;

const NAV: [(&str, &str); 5] = [
    ("/", "Player of the Day"),
    ("/matches-today", "Matches"),
    ("/player-stats", "Player Stats"),
    ("/league-leaders", "League Leaders"),
    ("/player-comparison", "Compare Players"),
];

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn opt(value: Option<&str>) -> String {
    value.map(escape).unwrap_or_else(|| "-".to_string())
}

pub fn layout(title: &str, body: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| format!(r#"<li><a href="{}">{}</a></li>"#, href, label))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Courtside</title>
<link rel="stylesheet" href="/styles/main.css">
</head>
<body>
<header><nav><span class="brand">Courtside</span><ul>{nav}</ul></nav></header>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        nav = nav,
        body = body,
    )
}

pub fn error_page(status: u16, message: &str) -> String {
    layout(
        "Something went wrong",
        &format!(
            r#"<p class="error"><strong>{}</strong> {}</p>"#,
            status,
            escape(message)
        ),
    )
}

fn image(src: Option<&str>, alt: &str) -> String {
    match src {
        Some(src) => format!(
            r#"<img class="player-image" src="{}" alt="{}">"#,
            escape(src),
            escape(alt)
        ),
        None => String::new(),
    }
}

pub fn home(potd: &PlayerOfTheDay, image_src: Option<&str>) -> String {
    let body = format!(
        r#"<section class="potd">
<p class="date">{date}</p>
{image}
<h2>{player} <small>{team}</small></h2>
<ul class="line">
<li><span>PTS</span> {pts}</li>
<li><span>REB</span> {reb}</li>
<li><span>AST</span> {ast}</li>
<li><span>PTS+REB+AST</span> {total}</li>
</ul>
<p>Opponent: {opp}</p>
<p>Final score: {score}</p>
</section>"#,
        date = escape(&potd.date),
        image = image(image_src, &potd.player),
        player = escape(&potd.player),
        team = opt(potd.team.as_deref()),
        pts = potd.points,
        reb = potd.rebounds,
        ast = potd.assists,
        total = potd.line_total(),
        opp = opt(potd.opponent.as_deref()),
        score = opt(potd.final_score.as_deref()),
    );
    layout("Player of the Day", &body)
}

pub fn home_unavailable(message: &str) -> String {
    layout(
        "Player of the Day",
        &format!(r#"<p class="notice">{}</p>"#, escape(message)),
    )
}

pub fn matches(games: &[(GameOfTheDay, Result<MatchResult, StatError>)]) -> String {
    if games.is_empty() {
        return layout(
            "Matches",
            r#"<p class="notice">No games were played on this day.</p>"#,
        );
    }

    let mut rows = String::new();
    for (game, result) in games {
        let (score, winner) = match result {
            Ok(r) => (
                format!(
                    "{} <b>{}</b> ({}) - <b>{}</b> {} ({})",
                    escape(&r.team1),
                    r.team1_score,
                    r.team1_status,
                    r.team2_score,
                    escape(&r.team2),
                    r.team2_status
                ),
                escape(r.winner()),
            ),
            Err(_) => ("score unavailable".to_string(), "-".to_string()),
        };
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&game.roster.matchup),
            score,
            winner,
            opt(game.final_score.as_deref()),
        );
    }

    layout(
        "Matches",
        &format!(
            r#"<table class="matches">
<thead><tr><th>Matchup</th><th>Score</th><th>Winner</th><th>Reported</th></tr></thead>
<tbody>{}</tbody>
</table>"#,
            rows
        ),
    )
}

fn player_form(action: &str, fields: &[(&str, &str, Option<&str>)]) -> String {
    let inputs: String = fields
        .iter()
        .map(|(name, placeholder, value)| {
            format!(
                r#"<input type="text" name="{}" placeholder="{}" value="{}" required>"#,
                name,
                placeholder,
                value.map(escape).unwrap_or_default()
            )
        })
        .collect();
    format!(
        r#"<form method="post" action="{}">{}<button type="submit">Search</button></form>"#,
        action, inputs
    )
}

fn stats_table(columns: &[&PlayerPerGameStats]) -> String {
    let mut head = String::from("<th>Stat</th>");
    for stats in columns {
        let _ = write!(
            head,
            "<th>{}<br><small>{} &middot; {} GP</small></th>",
            escape(&stats.full_name),
            opt(stats.team.as_deref()),
            stats.games_played
        );
    }

    let mut rows = String::new();
    for code in StatCode::ALL {
        let _ = write!(rows, "<tr><th>{}</th>", code.label());
        for stats in columns {
            let _ = write!(rows, "<td>{}</td>", opt(stats.get(code)));
        }
        rows.push_str("</tr>");
    }

    format!(
        r#"<table class="stats"><thead><tr>{}</tr></thead><tbody>{}</tbody></table>"#,
        head, rows
    )
}

pub fn player_stats_form() -> String {
    layout(
        "Player Stats",
        &player_form("/player-stats", &[("playerName", "Player name", None)]),
    )
}

pub fn player_stats(query: &str, stats: &PlayerPerGameStats, image_src: Option<&str>) -> String {
    let season = stats
        .season
        .as_deref()
        .map(|s| format!(r#"<p class="season">Season {}</p>"#, escape(s)))
        .unwrap_or_default();
    let body = format!(
        "{}{}{}{}",
        player_form("/player-stats", &[("playerName", "Player name", Some(query))]),
        image(image_src, &stats.full_name),
        season,
        stats_table(&[stats]),
    );
    layout("Player Stats", &body)
}

fn leaders_form(selected: Option<&LeaderQuery>) -> String {
    let stat_options: String = StatCode::ALL
        .iter()
        .map(|code| {
            let sel = if selected.map(|q| q.stat) == Some(*code) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                code.as_str(),
                sel,
                code.label()
            )
        })
        .collect();
    let limit_options: String = LEADER_LIMITS
        .iter()
        .map(|limit| {
            let sel = if selected.map(|q| q.limit) == Some(*limit) {
                " selected"
            } else {
                ""
            };
            format!(r#"<option value="{0}"{1}>Top {0}</option>"#, limit, sel)
        })
        .collect();

    format!(
        r#"<form method="post" action="/league-leaders">
<select name="stat">{}</select>
<select name="limit">{}</select>
<button type="submit">Show leaders</button>
</form>"#,
        stat_options, limit_options
    )
}

pub fn leaders_form_page() -> String {
    layout("League Leaders", &leaders_form(None))
}

pub fn leaders(query: &LeaderQuery, board: &LeaderBoard) -> String {
    let mut rows = String::new();
    for (rank, entry) in board.leaders.iter().enumerate() {
        let value = entry
            .value
            .and_then(|v| display_value(board.stat, v).ok())
            .unwrap_or_else(|| "-".to_string());
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            rank + 1,
            escape(&entry.player_name),
            opt(entry.team_abbr.as_deref()),
            value
        );
    }

    let body = format!(
        r#"{}
<h2>{} <small>{} &middot; {}</small></h2>
<table class="leaders">
<thead><tr><th>#</th><th>Player</th><th>Team</th><th>{}</th></tr></thead>
<tbody>{}</tbody>
</table>"#,
        leaders_form(Some(query)),
        board.stat.label(),
        escape(&board.season),
        board.stat.as_str(),
        board.stat.as_str(),
        rows
    );
    layout("League Leaders", &body)
}

pub fn comparison_form() -> String {
    layout(
        "Compare Players",
        &player_form(
            "/player-comparison",
            &[
                ("player1Name", "First player", None),
                ("player2Name", "Second player", None),
            ],
        ),
    )
}

pub fn comparison(
    names: (&str, &str),
    first: &PlayerPerGameStats,
    second: &PlayerPerGameStats,
) -> String {
    let body = format!(
        "{}{}",
        player_form(
            "/player-comparison",
            &[
                ("player1Name", "First player", Some(names.0)),
                ("player2Name", "Second player", Some(names.1)),
            ],
        ),
        stats_table(&[first, second]),
    );
    layout("Compare Players", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GameRoster, LeaderEntry, Outcome};

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x & y")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; y&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_layout_escapes_title_and_links_pages() {
        let html = layout("<b>", "<p>body</p>");
        assert!(html.contains("<title>&lt;b&gt; | Courtside</title>"));
        assert!(html.contains(r#"href="/league-leaders""#));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_matches_falls_back_on_malformed_label() {
        let game = GameOfTheDay {
            date: None,
            final_score: Some("101 - 99".to_string()),
            roster: GameRoster {
                matchup: "LAL @ BOS".to_string(),
                players: vec![],
            },
        };
        let err = StatError::MalformedMatchupLabel {
            label: "LAL @ BOS".to_string(),
        };
        let html = matches(&[(game, Err(err))]);
        assert!(html.contains("LAL @ BOS"));
        assert!(html.contains("score unavailable"));
    }

    #[test]
    fn test_matches_renders_result() {
        let game = GameOfTheDay {
            date: None,
            final_score: None,
            roster: GameRoster {
                matchup: "LAL vs BOS".to_string(),
                players: vec![],
            },
        };
        let result = MatchResult {
            team1: "LAL".to_string(),
            team1_score: 30,
            team1_status: Outcome::Win,
            team2: "BOS".to_string(),
            team2_score: 15,
            team2_status: Outcome::Loss,
            unattributed_entries: 0,
        };
        let html = matches(&[(game, Ok(result))]);
        assert!(html.contains("LAL <b>30</b> (W) - <b>15</b> BOS (L)"));
    }

    #[test]
    fn test_leaders_formats_by_category() {
        let query = LeaderQuery {
            stat: StatCode::FgPct,
            limit: 5,
        };
        let board = LeaderBoard {
            season: "2024-25".to_string(),
            stat: StatCode::FgPct,
            leaders: vec![
                LeaderEntry {
                    player_id: 1,
                    player_name: "Big Man".to_string(),
                    team_abbr: Some("DEN".to_string()),
                    value: Some(0.634),
                },
                LeaderEntry {
                    player_id: 2,
                    player_name: "Unknown".to_string(),
                    team_abbr: None,
                    value: None,
                },
            ],
        };
        let html = leaders(&query, &board);
        assert!(html.contains("<td>63.4%</td>"));
        assert!(html.contains(r#"<option value="FG_PCT" selected>"#));
        assert!(html.contains(r#"<option value="5" selected>"#));
    }

    #[test]
    fn test_home_shows_line_total() {
        let potd = PlayerOfTheDay {
            date: "2025-01-15".to_string(),
            player: "Nikola Jokic".to_string(),
            team: Some("DEN".to_string()),
            points: 31,
            rebounds: 12,
            assists: 14,
            opponent: Some("MIN".to_string()),
            final_score: Some("DEN 120 - 111 MIN".to_string()),
        };
        let html = home(&potd, None);
        assert!(html.contains("<li><span>PTS+REB+AST</span> 57</li>"));
        assert!(!html.contains("player-image"));
    }
}
