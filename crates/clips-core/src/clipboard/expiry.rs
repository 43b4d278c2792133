/// Inactivity window after which a clipboard's content is cleared on next access.
pub const DEFAULT_CLIPBOARD_TIMEOUT_SECS: u64 = 900;

/// Lazy time-to-live rule shared by every clipboard in a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    timeout_ms: i64,
}

impl ExpiryPolicy {
    pub fn from_secs(secs: u64) -> Self {
        Self {
            timeout_ms: i64::try_from(secs.saturating_mul(1000)).unwrap_or(i64::MAX),
        }
    }

    pub fn timeout_ms(&self) -> i64 {
        self.timeout_ms
    }

    /// Content last touched at `last_access_ms` is expired at `now_ms` once the
    /// full window has elapsed. A clock that went backwards never expires content.
    pub fn is_expired(&self, last_access_ms: i64, now_ms: i64) -> bool {
        now_ms.saturating_sub(last_access_ms) >= self.timeout_ms
    }
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self::from_secs(DEFAULT_CLIPBOARD_TIMEOUT_SECS)
    }
}
