use serde::{Deserialize, Serialize};

/// Win/loss label for one side of a matchup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "W",
            Outcome::Loss => "L",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One player's line in a box score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerContribution {
    pub player_name: Option<String>,
    pub team: String,
    /// `None` when the player did not play or has no recorded points yet
    pub points: Option<u32>,
}

/// A matchup label ("TeamA vs TeamB") with its box score lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRoster {
    pub matchup: String,
    pub players: Vec<PlayerContribution>,
}

/// Scores and outcomes derived from a roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub team1: String,
    pub team1_score: u32,
    pub team1_status: Outcome,
    pub team2: String,
    pub team2_score: u32,
    pub team2_status: Outcome,
    /// Scored entries whose team matched neither side of the label
    pub unattributed_entries: usize,
}

impl MatchResult {
    pub fn scoreline(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.team1, self.team1_score, self.team2_score, self.team2
        )
    }

    pub fn winner(&self) -> &str {
        match self.team1_status {
            Outcome::Win => &self.team1,
            Outcome::Loss => &self.team2,
        }
    }
}

/// A game played on the requested day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOfTheDay {
    pub date: Option<String>,
    /// Final score string as reported upstream, e.g. "112 - 104"
    pub final_score: Option<String>,
    pub roster: GameRoster,
}

/// Best single-game line (PTS + REB + AST) on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerOfTheDay {
    pub date: String,
    pub player: String,
    pub team: Option<String>,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub opponent: Option<String>,
    pub final_score: Option<String>,
}

impl PlayerOfTheDay {
    /// PTS + REB + AST, saturating at `u32::MAX`
    pub fn line_total(&self) -> u32 {
        self.points
            .saturating_add(self.rebounds)
            .saturating_add(self.assists)
    }
}
