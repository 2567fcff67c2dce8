//! Derived fields: players from courts, default game date and start time.

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};

/// Players for a number of courts: 6 on a single court, otherwise 5 per court.
pub fn players_for_courts(courts: u8) -> u32 {
    if courts == 1 {
        6
    } else {
        u32::from(courts) * 5
    }
}

/// Default start time for a game day: 20:00 on Wednesday, 12:00 on Saturday, none otherwise.
pub fn default_time_for(date: NaiveDate) -> Option<NaiveTime> {
    match date.weekday() {
        Weekday::Wed => NaiveTime::from_hms_opt(20, 0, 0),
        Weekday::Sat => NaiveTime::from_hms_opt(12, 0, 0),
        _ => None,
    }
}

/// Nearest Wednesday or Saturday on or after `today`.
pub fn next_game_date(today: NaiveDate) -> NaiveDate {
    (0..7)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .find(|d| matches!(d.weekday(), Weekday::Wed | Weekday::Sat))
        .unwrap_or(today)
}
