use std::sync::Arc;

use clips_core::ClipboardName;
use tracing::{debug, debug_span};

use crate::store::ClipboardStore;

/// Replace a clipboard's text, restarting its inactivity window.
pub struct WriteClipboardTextUseCase {
    store: Arc<ClipboardStore>,
}

impl WriteClipboardTextUseCase {
    pub fn new(store: Arc<ClipboardStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, name: &ClipboardName, text: String) {
        let _span =
            debug_span!("usecase.write_clipboard_text.execute", clipboard = %name).entered();

        debug!(len = text.len(), "clipboard written");
        self.store.write(name, text);
    }
}
