use std::sync::Arc;

use clips_core::ClipboardName;
use tracing::{debug, debug_span};

use crate::store::ClipboardStore;

/// Read a clipboard's text, touching it.
pub struct ReadClipboardTextUseCase {
    store: Arc<ClipboardStore>,
}

impl ReadClipboardTextUseCase {
    pub fn new(store: Arc<ClipboardStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, name: &ClipboardName) -> String {
        let _span = debug_span!("usecase.read_clipboard_text.execute", clipboard = %name).entered();

        let text = self.store.read(name);
        debug!(len = text.len(), "clipboard read");
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WriteClipboardTextUseCase;
    use clips_core::ports::ClockPort;
    use clips_core::ExpiryPolicy;
    use clips_infra::InMemoryClipboardRegistry;

    struct FixedClock;

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            0
        }
    }

    #[test]
    fn execute_returns_written_text() {
        let store = Arc::new(ClipboardStore::new(
            Arc::new(InMemoryClipboardRegistry::new()),
            Arc::new(FixedClock),
            ExpiryPolicy::default(),
        ));
        let name = ClipboardName::new("demo");
        WriteClipboardTextUseCase::new(store.clone()).execute(&name, "hello".to_string());

        let text = ReadClipboardTextUseCase::new(store).execute(&name);

        assert_eq!(text, "hello");
    }
}
