//! Clipboard domain: a named text slot with a lazily evaluated inactivity timeout.

mod entry;
mod expiry;
mod name;

pub use entry::Clipboard;
pub use expiry::{ExpiryPolicy, DEFAULT_CLIPBOARD_TIMEOUT_SECS};
pub use name::ClipboardName;
