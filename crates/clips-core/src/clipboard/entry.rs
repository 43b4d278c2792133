use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{ClipboardName, ExpiryPolicy};

/// A single named text slot.
///
/// The text and its last-access timestamp live behind one mutex so a reader
/// never observes text from one write paired with the timestamp of another.
/// Whether the clipboard is fresh or expired is not stored; it is derived from
/// the elapsed time at each access.
#[derive(Debug)]
pub struct Clipboard {
    name: ClipboardName,
    state: Mutex<ClipboardState>,
}

#[derive(Debug)]
struct ClipboardState {
    text: String,
    last_access_ms: i64,
}

impl Clipboard {
    /// Create an empty clipboard whose activity window starts at `now_ms`.
    pub fn new(name: ClipboardName, now_ms: i64) -> Self {
        Self {
            name,
            state: Mutex::new(ClipboardState {
                text: String::new(),
                last_access_ms: now_ms,
            }),
        }
    }

    pub fn name(&self) -> &ClipboardName {
        &self.name
    }

    /// Read the text, clearing it first if the activity window has elapsed.
    ///
    /// The access always restarts the window, even when it found the content
    /// expired.
    pub fn get(&self, policy: &ExpiryPolicy, now_ms: i64) -> String {
        let mut state = self.lock();
        if policy.is_expired(state.last_access_ms, now_ms) {
            state.text.clear();
        }
        state.last_access_ms = now_ms;
        state.text.clone()
    }

    /// Replace the text and restart the activity window.
    pub fn set(&self, text: String, now_ms: i64) {
        let mut state = self.lock();
        state.text = text;
        state.last_access_ms = now_ms;
    }

    pub fn last_access_ms(&self) -> i64 {
        self.lock().last_access_ms
    }

    // Both fields are always assigned together under the guard, so a poisoned
    // lock still protects a coherent pair.
    fn lock(&self) -> MutexGuard<'_, ClipboardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT_MS: i64 = 900_000;

    fn clipboard_at(now_ms: i64) -> Clipboard {
        Clipboard::new(ClipboardName::new("demo"), now_ms)
    }

    #[test]
    fn new_clipboard_is_empty() {
        let clipboard = clipboard_at(0);
        assert_eq!(clipboard.get(&ExpiryPolicy::default(), 0), "");
        assert_eq!(clipboard.name().as_str(), "demo");
    }

    #[test]
    fn set_then_get_returns_text() {
        let policy = ExpiryPolicy::default();
        let clipboard = clipboard_at(0);

        clipboard.set("hello".to_string(), 10);

        assert_eq!(clipboard.get(&policy, 10), "hello");
    }

    #[test]
    fn get_before_timeout_keeps_text() {
        let policy = ExpiryPolicy::default();
        let clipboard = clipboard_at(0);
        clipboard.set("hello".to_string(), 1_000);

        assert_eq!(clipboard.get(&policy, 1_000 + TIMEOUT_MS - 1), "hello");
    }

    #[test]
    fn get_at_timeout_clears_text() {
        let policy = ExpiryPolicy::default();
        let clipboard = clipboard_at(0);
        clipboard.set("hello".to_string(), 1_000);

        assert_eq!(clipboard.get(&policy, 1_000 + TIMEOUT_MS), "");
        // Cleared content stays cleared.
        assert_eq!(clipboard.get(&policy, 1_000 + TIMEOUT_MS + 1), "");
    }

    #[test]
    fn every_get_restarts_the_window() {
        let policy = ExpiryPolicy::default();
        let clipboard = clipboard_at(0);
        clipboard.set("keepalive".to_string(), 0);

        let mut now = 0;
        for _ in 0..10 {
            now += TIMEOUT_MS - 1;
            assert_eq!(clipboard.get(&policy, now), "keepalive");
        }
        assert_eq!(clipboard.last_access_ms(), now);
    }

    #[test]
    fn expired_touch_restarts_the_window() {
        let policy = ExpiryPolicy::default();
        let clipboard = clipboard_at(0);
        clipboard.set("old".to_string(), 0);

        assert_eq!(clipboard.get(&policy, 2 * TIMEOUT_MS), "");
        assert_eq!(clipboard.last_access_ms(), 2 * TIMEOUT_MS);
    }

    #[test]
    fn set_after_expiry_produces_content_without_check() {
        let policy = ExpiryPolicy::default();
        let clipboard = clipboard_at(0);
        clipboard.set("old".to_string(), 0);

        clipboard.set("new".to_string(), 5 * TIMEOUT_MS);

        assert_eq!(clipboard.get(&policy, 5 * TIMEOUT_MS), "new");
    }
}
