//! Integration tests for derived fields: players from courts, default date and time.

use badminton_announcement_web::{
    apply_edit, default_time_for, next_game_date, players_for_courts, Announcement, AnnouncementError,
    FieldEdit,
};
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn players_follow_courts_for_every_stepper_value() {
    for courts in 1..=4u8 {
        let expected = if courts == 1 { 6 } else { u32::from(courts) * 5 };
        assert_eq!(players_for_courts(courts), expected);

        let mut a = Announcement::default();
        apply_edit(&mut a, FieldEdit::Courts(courts)).unwrap();
        assert_eq!(a.courts, courts);
        assert_eq!(a.players, expected);
    }
}

#[test]
fn courts_outside_range_are_rejected_and_state_kept() {
    let mut a = Announcement::default();
    let before = a.clone();
    assert_eq!(
        apply_edit(&mut a, FieldEdit::Courts(0)),
        Err(AnnouncementError::CourtsOutOfRange(0))
    );
    assert_eq!(
        apply_edit(&mut a, FieldEdit::Courts(5)),
        Err(AnnouncementError::CourtsOutOfRange(5))
    );
    assert_eq!(a, before);
}

#[test]
fn manual_players_override_survives_until_courts_change() {
    let mut a = Announcement::default();
    apply_edit(&mut a, FieldEdit::Players(12)).unwrap();
    assert_eq!(a.players, 12);
    apply_edit(&mut a, FieldEdit::Courts(3)).unwrap();
    assert_eq!(a.players, 15);
}

#[test]
fn default_times_for_game_days() {
    assert_eq!(default_time_for(date(2024, 6, 12)), Some(hm(20, 0))); // Wednesday
    assert_eq!(default_time_for(date(2024, 6, 15)), Some(hm(12, 0))); // Saturday
    assert_eq!(default_time_for(date(2024, 6, 13)), None); // Thursday
}

#[test]
fn next_game_date_picks_nearest_wednesday_or_saturday() {
    assert_eq!(next_game_date(date(2024, 6, 10)), date(2024, 6, 12)); // Mon -> Wed
    assert_eq!(next_game_date(date(2024, 6, 13)), date(2024, 6, 15)); // Thu -> Sat
    assert_eq!(next_game_date(date(2024, 6, 16)), date(2024, 6, 19)); // Sun -> Wed
    assert_eq!(next_game_date(date(2024, 6, 12)), date(2024, 6, 12)); // today counts
    for day in 1..=30 {
        let d = next_game_date(date(2024, 9, day));
        assert!(matches!(d.weekday(), Weekday::Wed | Weekday::Sat));
    }
}

#[test]
fn defaults_on_creation_match_date() {
    let a = Announcement::with_defaults(date(2024, 6, 13));
    assert_eq!(a.date, Some(date(2024, 6, 15)));
    assert_eq!(a.time, Some(hm(12, 0)));
    assert_eq!(a.courts, 2);
    assert_eq!(a.players, 10);
    assert_eq!(a.price, "10");

    let a = Announcement::with_defaults(date(2024, 6, 11));
    assert_eq!(a.date, Some(date(2024, 6, 12)));
    assert_eq!(a.time, Some(hm(20, 0)));
}

#[test]
fn date_change_overwrites_time_only_on_game_days() {
    let mut a = Announcement::default();
    apply_edit(&mut a, FieldEdit::Time("18:30".into())).unwrap();

    apply_edit(&mut a, FieldEdit::Date("2024-06-13".into())).unwrap(); // Thursday
    assert_eq!(a.time, Some(hm(18, 30)));

    apply_edit(&mut a, FieldEdit::Date("2024-06-12".into())).unwrap(); // Wednesday
    assert_eq!(a.time, Some(hm(20, 0)));

    apply_edit(&mut a, FieldEdit::Date("2024-06-15".into())).unwrap(); // Saturday
    assert_eq!(a.time, Some(hm(12, 0)));

    apply_edit(&mut a, FieldEdit::Date("2024-06-17".into())).unwrap(); // Monday
    assert_eq!(a.time, Some(hm(12, 0)));
}

#[test]
fn malformed_date_and_time_are_rejected() {
    let mut a = Announcement::with_defaults(date(2024, 6, 13));
    let before = a.clone();
    assert!(matches!(
        apply_edit(&mut a, FieldEdit::Date("15/06/2024".into())),
        Err(AnnouncementError::InvalidDate(_))
    ));
    assert!(matches!(
        apply_edit(&mut a, FieldEdit::Time("noon".into())),
        Err(AnnouncementError::InvalidTime(_))
    ));
    assert_eq!(a, before);

    apply_edit(&mut a, FieldEdit::Time("19:15:00".into())).unwrap();
    assert_eq!(a.time, Some(hm(19, 15)));
}
