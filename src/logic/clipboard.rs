//! Copy-to-clipboard: the sink seam and the short "Copied!" acknowledgement.

use crate::logic::render::render_message;
use crate::logic::validate::validate;
use crate::models::{Announcement, AnnouncementError};
use serde::Serialize;
use std::time::{Duration, Instant};

/// How long the copy acknowledgement stays visible.
pub const ACK_DURATION: Duration = Duration::from_secs(3);

/// Why a clipboard write failed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClipboardError(pub String);

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host clipboard.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Sink that keeps the text so the server can hand it to the browser,
/// which performs the actual clipboard write.
#[derive(Clone, Debug, Default)]
pub struct CapturedClipboard {
    text: Option<String>,
}

impl CapturedClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_text(self) -> Option<String> {
        self.text
    }
}

impl ClipboardSink for CapturedClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError("nothing to copy".to_string()));
        }
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// Transient acknowledgement shown after a successful copy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CopyAcknowledgement {
    pub copied_at: Instant,
    pub visible_for: Duration,
}

impl CopyAcknowledgement {
    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.copied_at) < self.visible_for
    }
}

/// Copy result sent to the page: text for the browser clipboard and how long to show "Copied!".
#[derive(Clone, Debug, Serialize)]
pub struct CopyResponse {
    pub text: String,
    pub acknowledge_ms: u64,
}

/// Render the announcement and write it to `sink`. Refuses incomplete forms and
/// surfaces sink failures instead of dropping them.
pub fn copy_announcement<S: ClipboardSink>(
    announcement: &Announcement,
    sink: &mut S,
    now: Instant,
) -> Result<CopyAcknowledgement, AnnouncementError> {
    let errors = validate(announcement);
    if !errors.is_empty() {
        return Err(AnnouncementError::Incomplete { missing: errors.len() });
    }
    let text = render_message(announcement);
    sink.write_text(&text)
        .map_err(|e| AnnouncementError::Clipboard(e.to_string()))?;
    Ok(CopyAcknowledgement {
        copied_at: now,
        visible_for: ACK_DURATION,
    })
}
