//! Integration tests for copying the announcement to a clipboard sink.

use badminton_announcement_web::{
    apply_edit, copy_announcement, render_message, Announcement, AnnouncementError, CapturedClipboard,
    ClipboardError, ClipboardSink, FieldEdit, ACK_DURATION,
};
use chrono::NaiveDate;
use std::time::{Duration, Instant};

struct DeniedClipboard;

impl ClipboardSink for DeniedClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError("permission denied".to_string()))
    }
}

fn complete_form() -> Announcement {
    let mut a = Announcement::with_defaults(NaiveDate::from_ymd_opt(2024, 6, 13).unwrap());
    apply_edit(&mut a, FieldEdit::Link("https://x".into())).unwrap();
    a
}

#[test]
fn copy_writes_rendered_message_and_acknowledges_for_three_seconds() {
    let a = complete_form();
    let mut clipboard = CapturedClipboard::new();
    let now = Instant::now();
    let ack = copy_announcement(&a, &mut clipboard, now).unwrap();

    assert_eq!(clipboard.into_text(), Some(render_message(&a)));
    assert_eq!(ack.visible_for, ACK_DURATION);
    assert!(ack.is_visible(now));
    assert!(ack.is_visible(now + Duration::from_millis(2999)));
    assert!(!ack.is_visible(now + Duration::from_secs(3)));
}

#[test]
fn copy_refuses_incomplete_form() {
    let a = Announcement::with_defaults(NaiveDate::from_ymd_opt(2024, 6, 13).unwrap());
    let mut clipboard = CapturedClipboard::new();
    assert_eq!(
        copy_announcement(&a, &mut clipboard, Instant::now()),
        Err(AnnouncementError::Incomplete { missing: 1 })
    );
    assert_eq!(clipboard.into_text(), None);
}

#[test]
fn clipboard_failure_is_surfaced() {
    let err = copy_announcement(&complete_form(), &mut DeniedClipboard, Instant::now()).unwrap_err();
    assert_eq!(err, AnnouncementError::Clipboard("permission denied".to_string()));
    assert_eq!(err.to_string(), "Could not copy to clipboard: permission denied");
}
