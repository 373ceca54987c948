use dioxus::prelude::Key;
use services::InputSender;
use speedmath_core::model::{Digit, InputEvent};
use tracing::warn;

/// Maps a key press to a drill input.
///
/// Backspace removes, Enter submits, a single `0`-`9` character enters a
/// digit. Anything else yields `None` and should be discarded.
#[must_use]
pub fn input_for_key(key: &Key) -> Option<InputEvent> {
    match key {
        Key::Backspace => Some(InputEvent::RemoveLast),
        Key::Enter => Some(InputEvent::Submit),
        Key::Character(text) => {
            let mut chars = text.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return None;
            };
            Digit::try_from(ch).ok().map(InputEvent::Digit)
        }
        _ => None,
    }
}

/// Queues the input for `key`, if any.
///
/// Returns `true` when the key belongs to the drill, so the caller can
/// suppress the browser default.
pub fn forward_key(key: &Key, input: &InputSender) -> bool {
    let Some(event) = input_for_key(key) else {
        return false;
    };
    if let Err(err) = input.send(event) {
        warn!(%err, ?event, "dropping key press");
    }
    true
}
