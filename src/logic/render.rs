//! Announcement text for the two message templates.

use crate::logic::validate::{validate, ValidationErrors};
use crate::models::{Announcement, MessageType, GAME_DURATION_HOURS, SHUTTLE_TYPE};
use chrono::{NaiveTime, Timelike};
use serde::Serialize;

const CALL_TO_ACTION: &str = "If anyone would like to play please confirm using the link below 😊";

/// What the page shows after each edit: state, inline errors, and the message once complete.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FormView {
    pub announcement: Announcement,
    pub errors: ValidationErrors,
    /// Present only when there are no errors.
    pub message: Option<String>,
}

/// End of the game window as `HH:MM`. The hour is not wrapped, so 23:00 ends at "25:00".
pub fn end_time(start: NaiveTime) -> String {
    format!("{:02}:{:02}", start.hour() + GAME_DURATION_HOURS, start.minute())
}

/// Render the announcement in its selected template. Empty if date or time is unset.
pub fn render_message(announcement: &Announcement) -> String {
    let (date, time) = match (announcement.date, announcement.time) {
        (Some(date), Some(time)) => (date, time),
        _ => return String::new(),
    };
    let location = announcement.location.map(|l| l.label()).unwrap_or_default();
    let header = format!(
        "Hello Everyone, We are playing on {} at the {} from *{} to {}*",
        date.format("%A %-d/%-m/%Y"),
        location,
        time.format("%H:%M"),
        end_time(time),
    );

    let mut lines = vec![header, String::new()];
    match announcement.message_type {
        MessageType::Whatsapp => {
            lines.push(format!("No. Courts: {}", announcement.courts));
            lines.push(format!("Players: {}", announcement.players));
        }
        MessageType::Racketpal => {
            let level = announcement.level.map(|l| l.label()).unwrap_or_default();
            let plural = if announcement.courts > 1 { "s" } else { "" };
            lines.push(format!(
                "{} | {} hours | £{}",
                date.format("%A"),
                GAME_DURATION_HOURS,
                announcement.price
            ));
            lines.push(format!(
                "{} Court{} | {} Players",
                announcement.courts, plural, announcement.players
            ));
            lines.push(format!("{} shuttles", SHUTTLE_TYPE));
            lines.push(level.to_string());
            lines.push("Badminton game".to_string());
        }
    }
    lines.push(String::new());
    lines.push(CALL_TO_ACTION.to_string());
    lines.push(String::new());
    lines.push(announcement.link.clone());
    lines.join("\n")
}

/// Validate and render in one go, hiding the message while any required field is empty.
pub fn render_view(announcement: &Announcement) -> FormView {
    let errors = validate(announcement);
    let message = errors.is_empty().then(|| render_message(announcement));
    FormView {
        announcement: announcement.clone(),
        errors,
        message,
    }
}
