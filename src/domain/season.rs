use chrono::{Datelike, NaiveDate};

/// Season string such as "2024-25". Seasons start in October.
pub fn season_for(date: NaiveDate) -> String {
    let start = if date.month() >= 10 {
        date.year()
    } else {
        date.year() - 1
    };
    format!("{}-{:02}", start, (start + 1).rem_euclid(100))
}

pub fn current_season() -> String {
    season_for(chrono::Local::now().date_naive())
}
