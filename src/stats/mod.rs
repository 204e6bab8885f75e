pub mod format;
pub mod normalizer;
pub mod scorer;

pub use format::display_value;
pub use normalizer::{normalize_stats, per_game_value};
pub use scorer::{parse_matchup, score_match, MATCHUP_SEPARATOR};
