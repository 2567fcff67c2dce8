//! Data structures for the announcement form: form state, edits, fixed option lists.

mod announcement;
mod options;

pub use announcement::{
    normalise_price, parse_date, parse_time, Announcement, AnnouncementError, Field, FieldEdit, FormId,
};
pub use options::{
    FormOptions, Location, MessageType, SkillLevel, GAME_DURATION_HOURS, MAX_COURTS, MIN_COURTS,
    SHUTTLE_TYPE,
};
