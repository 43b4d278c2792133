//! Dependency wiring: config → store, name generator and use cases.

use std::sync::Arc;

use anyhow::Context;
use clips_app::{
    ClipboardStore, GenerateClipboardNameUseCase, ReadClipboardTextUseCase,
    WriteClipboardTextUseCase,
};
use clips_core::naming::MIN_ENTROPY_BITS;
use clips_core::{AppConfig, ExpiryPolicy, NameGenerator, WordList};
use clips_infra::{default_word_list, load_word_list, InMemoryClipboardRegistry, SystemClock};
use tracing::{info, warn};

/// Use cases shared by every request handler.
pub struct AppServices {
    store: Arc<ClipboardStore>,
    read_text: ReadClipboardTextUseCase,
    write_text: WriteClipboardTextUseCase,
    generate_name: GenerateClipboardNameUseCase,
}

impl AppServices {
    pub fn new(store: Arc<ClipboardStore>, generator: NameGenerator) -> Self {
        Self {
            read_text: ReadClipboardTextUseCase::new(store.clone()),
            write_text: WriteClipboardTextUseCase::new(store.clone()),
            generate_name: GenerateClipboardNameUseCase::new(generator),
            store,
        }
    }

    /// Production wiring: in-memory registry, wall clock, configured word list.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let store = Arc::new(ClipboardStore::new(
            Arc::new(InMemoryClipboardRegistry::new()),
            Arc::new(SystemClock),
            ExpiryPolicy::from_secs(config.clipboard_timeout_secs),
        ));

        let words = build_word_list(config)?;
        report_entropy(&words, config.num_random_words);
        let generator = NameGenerator::new(Arc::new(words), config.num_random_words)
            .context("Word list cannot supply a generated name")?;

        info!(
            timeout_secs = config.clipboard_timeout_secs,
            words_per_name = generator.num_words(),
            "clipboard store ready"
        );
        Ok(Self::new(store, generator))
    }

    pub fn store(&self) -> &ClipboardStore {
        &self.store
    }

    pub fn read_text(&self) -> &ReadClipboardTextUseCase {
        &self.read_text
    }

    pub fn write_text(&self) -> &WriteClipboardTextUseCase {
        &self.write_text
    }

    pub fn generate_name(&self) -> &GenerateClipboardNameUseCase {
        &self.generate_name
    }
}

fn build_word_list(config: &AppConfig) -> anyhow::Result<WordList> {
    match &config.wordlist_path {
        Some(path) => {
            info!(path = %path.display(), "loading word list");
            load_word_list(path, config.num_random_words)
        }
        None => default_word_list(config.num_random_words),
    }
}

fn report_entropy(words: &WordList, draws: usize) {
    let bits = words.entropy_bits(draws);
    if bits < MIN_ENTROPY_BITS {
        warn!(
            words = words.len(),
            draws,
            bits,
            "generated clipboard names are easy to guess; use a larger word list"
        );
    } else {
        info!(words = words.len(), draws, bits, "word list loaded");
    }
}
