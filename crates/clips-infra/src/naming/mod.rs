//! Word list sources for generated clipboard names.

use std::fs;
use std::path::Path;

use anyhow::Context;
use clips_core::WordList;

/// Bundled list: 7 776 distinct lower-case words, about 38.8 bits for three draws.
const DEFAULT_WORDLIST: &str = include_str!("../../assets/wordlist.txt");

/// The word list compiled into the binary.
pub fn default_word_list(required: usize) -> anyhow::Result<WordList> {
    WordList::parse(DEFAULT_WORDLIST, required).context("bundled word list is invalid")
}

/// Load a newline-separated word list from disk.
pub fn load_word_list(path: &Path, required: usize) -> anyhow::Result<WordList> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list: {}", path.display()))?;
    WordList::parse(&content, required)
        .with_context(|| format!("Invalid word list: {}", path.display()))
}
