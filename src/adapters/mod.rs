pub mod image_search;
pub mod nba_api;
pub mod traits;

pub use image_search::GoogleImageSearch;
pub use nba_api::NbaApiClient;
pub use traits::{find_player, per_game_stats, ImageSearch, PlayerLookup};
