use std::sync::Arc;

use rand::seq::index;
use rand::Rng;

use super::{WordList, WordListError};

/// Number of words in a generated clipboard name.
pub const NUM_RANDOM_WORDS: usize = 3;

/// Builds names such as `WordOneWordTwoWordThree` from a shared word list.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    words: Arc<WordList>,
    num_words: usize,
}

impl NameGenerator {
    pub fn new(words: Arc<WordList>, num_words: usize) -> Result<Self, WordListError> {
        let required = num_words.max(1);
        if words.len() < required {
            return Err(WordListError::TooFewWords {
                found: words.len(),
                required,
            });
        }
        Ok(Self {
            words,
            num_words: required,
        })
    }

    pub fn num_words(&self) -> usize {
        self.num_words
    }

    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    /// Generate a name using the thread-local CSPRNG.
    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::rng())
    }

    /// Draw distinct words uniformly without replacement and join them capitalized.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        index::sample(rng, self.words.len(), self.num_words)
            .iter()
            .filter_map(|i| self.words.get(i))
            .map(capitalize)
            .collect()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
