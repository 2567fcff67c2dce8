//! Required-field validation and the single edit step (merge, derive, validate).

use crate::logic::derive::{default_time_for, players_for_courts};
use crate::models::{
    normalise_price, parse_date, parse_time, Announcement, AnnouncementError, Field, FieldEdit, MAX_COURTS,
    MIN_COURTS,
};
use std::collections::BTreeMap;

/// Field -> "<Field> is required", one entry per empty required field.
pub type ValidationErrors = BTreeMap<Field, String>;

fn is_empty(announcement: &Announcement, field: Field) -> bool {
    match field {
        Field::Location => announcement.location.is_none(),
        Field::Date => announcement.date.is_none(),
        Field::Time => announcement.time.is_none(),
        Field::Price => announcement.price.trim().is_empty(),
        Field::Level => announcement.level.is_none(),
        Field::Link => announcement.link.trim().is_empty(),
    }
}

/// Report every empty required field.
pub fn validate(announcement: &Announcement) -> ValidationErrors {
    Field::REQUIRED
        .iter()
        .copied()
        .filter(|&field| is_empty(announcement, field))
        .map(|field| (field, format!("{} is required", field.label())))
        .collect()
}

/// True when no required field is empty (message may be shown and copied).
pub fn is_complete(announcement: &Announcement) -> bool {
    Field::REQUIRED.iter().all(|&field| !is_empty(announcement, field))
}

/// Merge one edit into the form, re-run the derivations it triggers, then validate the result.
/// On error the form is left unchanged.
pub fn apply_edit(announcement: &mut Announcement, edit: FieldEdit) -> Result<ValidationErrors, AnnouncementError> {
    match edit {
        FieldEdit::Location(location) => announcement.location = location,
        FieldEdit::Courts(courts) => {
            if !(MIN_COURTS..=MAX_COURTS).contains(&courts) {
                return Err(AnnouncementError::CourtsOutOfRange(courts));
            }
            announcement.courts = courts;
            announcement.players = players_for_courts(courts);
        }
        FieldEdit::Players(players) => announcement.players = players,
        FieldEdit::Date(raw) => {
            let date = parse_date(&raw)?;
            announcement.date = date;
            // Only game days carry a default; other days keep whatever time was set.
            if let Some(time) = date.and_then(default_time_for) {
                announcement.time = Some(time);
            }
        }
        FieldEdit::Time(raw) => announcement.time = parse_time(&raw)?,
        FieldEdit::Price(raw) => announcement.price = normalise_price(&raw)?,
        FieldEdit::Level(level) => announcement.level = level,
        FieldEdit::Link(link) => announcement.link = link.trim().to_string(),
        FieldEdit::MessageType(message_type) => announcement.message_type = message_type,
    }
    Ok(validate(announcement))
}
