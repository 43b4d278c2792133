use clips_core::NameGenerator;
use tracing::debug;

/// Produce a fresh random clipboard name for the `/random` redirect.
pub struct GenerateClipboardNameUseCase {
    generator: NameGenerator,
}

impl GenerateClipboardNameUseCase {
    pub fn new(generator: NameGenerator) -> Self {
        Self { generator }
    }

    pub fn execute(&self) -> String {
        let name = self.generator.generate();
        debug!(words = self.generator.num_words(), "clipboard name generated");
        name
    }
}
