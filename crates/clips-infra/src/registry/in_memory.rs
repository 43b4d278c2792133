//! Process-lifetime clipboard registry.

use std::sync::Arc;

use clips_core::ports::ClipboardRegistryPort;
use clips_core::{Clipboard, ClipboardName};
use dashmap::DashMap;
use tracing::debug;

/// Sharded in-memory registry.
///
/// Lookups take a shard read lock; only the first access to a name takes the
/// shard write lock, and the insert happens under it so racing callers all get
/// the same instance. Entries are never evicted.
#[derive(Default)]
pub struct InMemoryClipboardRegistry {
    entries: DashMap<ClipboardName, Arc<Clipboard>>,
}

impl InMemoryClipboardRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardRegistryPort for InMemoryClipboardRegistry {
    fn get_or_create(&self, name: &ClipboardName, now_ms: i64) -> Arc<Clipboard> {
        if let Some(existing) = self.entries.get(name) {
            return Arc::clone(existing.value());
        }

        let entry = self.entries.entry(name.clone()).or_insert_with(|| {
            debug!(clipboard = %name, "clipboard created");
            Arc::new(Clipboard::new(name.clone(), now_ms))
        });
        Arc::clone(entry.value())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
