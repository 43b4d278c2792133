use std::sync::Arc;

use crate::clipboard::{Clipboard, ClipboardName};

/// Name to clipboard registry.
///
/// Implementations must be safe under concurrent access:
///
/// - `get_or_create` for the same unseen name from several callers creates
///   exactly one [`Clipboard`] and hands that instance to every caller.
/// - Lookups for different names must not serialize on a single lock.
/// - Entries are never removed; `len` is monotonically non-decreasing.
pub trait ClipboardRegistryPort: Send + Sync {
    /// Return the clipboard registered under `name`, inserting an empty one
    /// created at `now_ms` when the name has not been seen before.
    fn get_or_create(&self, name: &ClipboardName, now_ms: i64) -> Arc<Clipboard>;

    /// Number of clipboards ever created.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
