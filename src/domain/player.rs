use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Stat categories tracked for players, keyed by their upstream column code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatCode {
    Pts,
    Reb,
    Ast,
    Stl,
    Blk,
    Fg3m,
    Fg3Pct,
    Fgm,
    FgPct,
}

impl StatCode {
    /// Display order used by every stats table.
    pub const ALL: [StatCode; 9] = [
        StatCode::Pts,
        StatCode::Reb,
        StatCode::Ast,
        StatCode::Stl,
        StatCode::Blk,
        StatCode::Fg3m,
        StatCode::Fg3Pct,
        StatCode::Fgm,
        StatCode::FgPct,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatCode::Pts => "PTS",
            StatCode::Reb => "REB",
            StatCode::Ast => "AST",
            StatCode::Stl => "STL",
            StatCode::Blk => "BLK",
            StatCode::Fg3m => "FG3M",
            StatCode::Fg3Pct => "FG3_PCT",
            StatCode::Fgm => "FGM",
            StatCode::FgPct => "FG_PCT",
        }
    }

    /// Human label shown in forms and table headers
    pub fn label(&self) -> &'static str {
        match self {
            StatCode::Pts => "Points per game",
            StatCode::Reb => "Rebounds per game",
            StatCode::Ast => "Assists per game",
            StatCode::Stl => "Steals per game",
            StatCode::Blk => "Blocks per game",
            StatCode::Fg3m => "3-Pointers per game",
            StatCode::Fg3Pct => "3-Pointers %",
            StatCode::Fgm => "Field goals per game",
            StatCode::FgPct => "Field Goal %",
        }
    }

    /// Percentage stats are already rates; everything else is a season count.
    pub fn is_percentage(&self) -> bool {
        matches!(self, StatCode::Fg3Pct | StatCode::FgPct)
    }

    pub fn counting() -> impl Iterator<Item = StatCode> {
        Self::ALL.into_iter().filter(|code| !code.is_percentage())
    }
}

impl std::fmt::Display for StatCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatCode {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == wanted)
            .ok_or_else(|| format!("unknown stat category '{}'", raw.trim()))
    }
}

/// A player as returned by a name search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: u64,
    pub full_name: String,
    /// Team abbreviation; `None` for retired or unsigned players
    #[serde(default)]
    pub current_team: Option<String>,
}

/// Raw season aggregates for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeasonTotals {
    pub player_id: u64,
    pub full_name: String,
    pub team: Option<String>,
    pub season: Option<String>,
    pub games_played: u32,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub three_pointers_made: f64,
    /// Fraction in [0, 1]
    pub three_point_pct: f64,
    pub field_goals_made: f64,
    /// Fraction in [0, 1]
    pub field_goal_pct: f64,
}

impl PlayerSeasonTotals {
    /// An all-zero record for the given player; callers fill in what they have.
    pub fn empty(player: &PlayerSummary) -> Self {
        Self {
            player_id: player.id,
            full_name: player.full_name.clone(),
            team: player.current_team.clone(),
            season: None,
            games_played: 0,
            points: 0.0,
            rebounds: 0.0,
            assists: 0.0,
            steals: 0.0,
            blocks: 0.0,
            three_pointers_made: 0.0,
            three_point_pct: 0.0,
            field_goals_made: 0.0,
            field_goal_pct: 0.0,
        }
    }

    /// Raw value for a stat: the season total, or the fraction for percentages.
    pub fn raw(&self, code: StatCode) -> f64 {
        match code {
            StatCode::Pts => self.points,
            StatCode::Reb => self.rebounds,
            StatCode::Ast => self.assists,
            StatCode::Stl => self.steals,
            StatCode::Blk => self.blocks,
            StatCode::Fg3m => self.three_pointers_made,
            StatCode::Fg3Pct => self.three_point_pct,
            StatCode::Fgm => self.field_goals_made,
            StatCode::FgPct => self.field_goal_pct,
        }
    }

    pub fn set_raw(&mut self, code: StatCode, value: f64) {
        let slot = match code {
            StatCode::Pts => &mut self.points,
            StatCode::Reb => &mut self.rebounds,
            StatCode::Ast => &mut self.assists,
            StatCode::Stl => &mut self.steals,
            StatCode::Blk => &mut self.blocks,
            StatCode::Fg3m => &mut self.three_pointers_made,
            StatCode::Fg3Pct => &mut self.three_point_pct,
            StatCode::Fgm => &mut self.field_goals_made,
            StatCode::FgPct => &mut self.field_goal_pct,
        };
        *slot = value;
    }
}

/// Display-ready per-game stats, in `StatCode::ALL` order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerPerGameStats {
    pub player_id: u64,
    pub full_name: String,
    pub team: Option<String>,
    pub season: Option<String>,
    pub games_played: u32,
    pub values: Vec<(StatCode, String)>,
}

impl PlayerPerGameStats {
    pub fn get(&self, code: StatCode) -> Option<&str> {
        self.values
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_code_parses_upstream_codes() {
        assert_eq!("PTS".parse::<StatCode>().unwrap(), StatCode::Pts);
        assert_eq!("fg3_pct".parse::<StatCode>().unwrap(), StatCode::Fg3Pct);
        assert_eq!(" FGM ".parse::<StatCode>().unwrap(), StatCode::Fgm);
        assert!("MIN".parse::<StatCode>().is_err());
    }

    #[test]
    fn test_counting_excludes_percentages() {
        let counting: Vec<_> = StatCode::counting().collect();
        assert_eq!(counting.len(), 7);
        assert!(!counting.contains(&StatCode::FgPct));
        assert!(!counting.contains(&StatCode::Fg3Pct));
    }

    #[test]
    fn test_set_raw_round_trips_every_code() {
        let player = PlayerSummary {
            id: 1,
            full_name: "Test Player".to_string(),
            current_team: None,
        };
        let mut totals = PlayerSeasonTotals::empty(&player);
        for (i, code) in StatCode::ALL.into_iter().enumerate() {
            totals.set_raw(code, i as f64 + 1.0);
        }
        for (i, code) in StatCode::ALL.into_iter().enumerate() {
            assert_eq!(totals.raw(code), i as f64 + 1.0, "{code}");
        }
    }
}
