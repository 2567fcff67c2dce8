//! Form logic: derivations, validation, rendering, copying.

mod clipboard;
mod derive;
mod render;
mod validate;

pub use clipboard::{
    copy_announcement, CapturedClipboard, ClipboardError, ClipboardSink, CopyAcknowledgement, CopyResponse,
    ACK_DURATION,
};
pub use derive::{default_time_for, next_game_date, players_for_courts};
pub use render::{end_time, render_message, render_view, FormView};
pub use validate::{apply_edit, is_complete, validate, ValidationErrors};
