//! Badminton announcement creator: library with the form model and its logic.

pub mod config;
pub mod logic;
pub mod models;

pub use config::Config;
pub use logic::{
    apply_edit, copy_announcement, default_time_for, end_time, is_complete, next_game_date,
    players_for_courts, render_message, render_view, validate, CapturedClipboard, ClipboardError,
    ClipboardSink, CopyAcknowledgement, CopyResponse, FormView, ValidationErrors, ACK_DURATION,
};
pub use models::{
    Announcement, AnnouncementError, Field, FieldEdit, FormId, FormOptions, Location, MessageType,
    SkillLevel, GAME_DURATION_HOURS, MAX_COURTS, MIN_COURTS, SHUTTLE_TYPE,
};
