use std::sync::Arc;

use clips_core::ports::{ClipboardRegistryPort, ClockPort};
use clips_core::{Clipboard, ClipboardName, ExpiryPolicy};

/// Name-addressed clipboard store.
///
/// Created once at startup and shared by `Arc`. Every read or write touches
/// the clipboard, creating it on first access; nothing is ever removed.
pub struct ClipboardStore {
    registry: Arc<dyn ClipboardRegistryPort>,
    clock: Arc<dyn ClockPort>,
    policy: ExpiryPolicy,
}

impl ClipboardStore {
    pub fn new(
        registry: Arc<dyn ClipboardRegistryPort>,
        clock: Arc<dyn ClockPort>,
        policy: ExpiryPolicy,
    ) -> Self {
        Self {
            registry,
            clock,
            policy,
        }
    }

    pub fn policy(&self) -> ExpiryPolicy {
        self.policy
    }

    /// Existing clipboard for `name`, or a new empty one.
    pub fn get_or_create(&self, name: &ClipboardName) -> Arc<Clipboard> {
        self.registry.get_or_create(name, self.clock.now_ms())
    }

    /// Current text of `name`; empty when the clipboard expired or is new.
    pub fn read(&self, name: &ClipboardName) -> String {
        let now_ms = self.clock.now_ms();
        self.registry
            .get_or_create(name, now_ms)
            .get(&self.policy, now_ms)
    }

    pub fn write(&self, name: &ClipboardName, text: String) {
        let now_ms = self.clock.now_ms();
        self.registry.get_or_create(name, now_ms).set(text, now_ms);
    }

    /// Number of clipboards created since startup.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
