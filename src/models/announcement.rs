//! Announcement (the form state), its field edits and errors.

use crate::models::options::{Location, MessageType, SkillLevel, MAX_COURTS, MIN_COURTS};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one open form (one browser page).
pub type FormId = Uuid;

/// Errors that can occur while editing or copying an announcement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AnnouncementError {
    /// Courts must stay within the stepper range.
    CourtsOutOfRange(u8),
    /// Date is not `YYYY-MM-DD`.
    InvalidDate(String),
    /// Time is not `HH:MM` (or `HH:MM:SS`).
    InvalidTime(String),
    /// Price is not a plain non-negative decimal.
    InvalidPrice(String),
    /// Required fields are still empty; the message cannot be copied.
    Incomplete { missing: usize },
    /// The clipboard refused the text.
    Clipboard(String),
    /// No open form with this id (never created, discarded or expired).
    FormNotFound(FormId),
}

impl std::fmt::Display for AnnouncementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnouncementError::CourtsOutOfRange(courts) => {
                write!(f, "Courts must be between {} and {} (got {})", MIN_COURTS, MAX_COURTS, courts)
            }
            AnnouncementError::InvalidDate(raw) => write!(f, "Invalid date: {}", raw),
            AnnouncementError::InvalidTime(raw) => write!(f, "Invalid time: {}", raw),
            AnnouncementError::InvalidPrice(raw) => write!(f, "Price must be a number: {}", raw),
            AnnouncementError::Incomplete { missing } => {
                write!(f, "Fill in all required fields first ({} missing)", missing)
            }
            AnnouncementError::Clipboard(reason) => write!(f, "Could not copy to clipboard: {}", reason),
            AnnouncementError::FormNotFound(_) => write!(f, "No form"),
        }
    }
}

/// Required fields, reported by the validator. Ordered the way they appear on the page.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Location,
    Date,
    Time,
    Price,
    Level,
    Link,
}

impl Field {
    pub const REQUIRED: [Field; 6] = [
        Field::Location,
        Field::Date,
        Field::Time,
        Field::Price,
        Field::Level,
        Field::Link,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Location => "Location",
            Field::Date => "Date",
            Field::Time => "Time",
            Field::Price => "Price",
            Field::Level => "Level",
            Field::Link => "Link",
        }
    }
}

/// A single user edit, as sent by the page: `{"field": "courts", "value": 3}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldEdit {
    Location(Option<Location>),
    Courts(u8),
    Players(u32),
    /// `YYYY-MM-DD`; empty clears the date.
    Date(String),
    /// `HH:MM`; empty clears the time.
    Time(String),
    Price(String),
    Level(Option<SkillLevel>),
    Link(String),
    MessageType(MessageType),
}

/// The form state. Derived fields (`players`, default `time`) are kept in sync by `logic::apply_edit`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Announcement {
    pub location: Option<Location>,
    pub courts: u8,
    /// Derived from courts on every courts change; may be overridden afterwards.
    pub players: u32,
    pub date: Option<NaiveDate>,
    #[serde(serialize_with = "serialize_hhmm")]
    pub time: Option<NaiveTime>,
    /// Numeric string, stored trimmed. Empty means unset.
    pub price: String,
    pub level: Option<SkillLevel>,
    /// External signup link (RacketPal match page, etc.).
    pub link: String,
    pub message_type: MessageType,
}

impl Default for Announcement {
    /// Blank form: every required field empty, 2 courts / 10 players, WhatsApp template.
    fn default() -> Self {
        Self {
            location: None,
            courts: 2,
            players: 10,
            date: None,
            time: None,
            price: String::new(),
            level: None,
            link: String::new(),
            message_type: MessageType::Whatsapp,
        }
    }
}

impl Announcement {
    /// Form as shown on page load: first venue, £10, Intermediate, and the
    /// nearest Wednesday/Saturday from `today` with its default start time.
    pub fn with_defaults(today: NaiveDate) -> Self {
        let date = crate::logic::next_game_date(today);
        Self {
            location: Location::ALL.first().copied(),
            date: Some(date),
            time: crate::logic::default_time_for(date),
            price: "10".to_string(),
            level: Some(SkillLevel::Intermediate),
            ..Self::default()
        }
    }
}

fn serialize_hhmm<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match time {
        Some(t) => serializer.serialize_str(&t.format("%H:%M").to_string()),
        None => serializer.serialize_none(),
    }
}

/// Parse a date-picker value. Empty input yields `None`.
pub fn parse_date(raw: &str) -> Result<Option<NaiveDate>, AnnouncementError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AnnouncementError::InvalidDate(raw.to_string()))
}

/// Parse a time-picker value (`HH:MM`, browsers may add seconds). Empty input yields `None`.
pub fn parse_time(raw: &str) -> Result<Option<NaiveTime>, AnnouncementError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map(Some)
        .map_err(|_| AnnouncementError::InvalidTime(raw.to_string()))
}

/// Check a price field: empty is allowed (the validator reports it), otherwise plain
/// digits with at most one decimal point (no sign, no exponent). Stored as typed.
pub fn normalise_price(raw: &str) -> Result<String, AnnouncementError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(String::new());
    }
    let plain_decimal = raw.chars().all(|c| c.is_ascii_digit() || c == '.')
        && raw.chars().filter(|&c| c == '.').count() <= 1
        && raw.chars().any(|c| c.is_ascii_digit());
    if !plain_decimal {
        return Err(AnnouncementError::InvalidPrice(raw.to_string()));
    }
    Ok(raw.to_string())
}
