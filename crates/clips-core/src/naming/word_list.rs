use std::collections::HashSet;

use thiserror::Error;

/// Entropy a generated name should carry for the name alone to be a usable secret.
pub const MIN_ENTROPY_BITS: f64 = 38.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordListError {
    #[error("word list has {found} distinct words, at least {required} are required")]
    TooFewWords { found: usize, required: usize },
}

/// Deduplicated, lower-cased candidate words for generated names.
///
/// # Precondition
///
/// The list size decides how guessable generated names are. Three ordered
/// draws without replacement from `n` words give `log2(n * (n-1) * (n-2))`
/// bits; reaching [`MIN_ENTROPY_BITS`] needs roughly 6 500 words. Only the
/// hard minimum (one word per draw) is enforced here, callers report the
/// entropy via [`WordList::entropy_bits`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a list from arbitrary words, keeping first occurrences in order.
    ///
    /// Words are trimmed and lower-cased; blank entries are dropped.
    pub fn new<I, S>(words: I, required: usize) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .filter(|word| seen.insert(word.clone()))
            .collect();

        if words.len() < required {
            return Err(WordListError::TooFewWords {
                found: words.len(),
                required,
            });
        }

        Ok(Self { words })
    }

    /// Parse a newline-separated word file.
    pub fn parse(content: &str, required: usize) -> Result<Self, WordListError> {
        Self::new(content.lines(), required)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Bits of uncertainty in a name made of `draws` distinct words in order.
    pub fn entropy_bits(&self, draws: usize) -> f64 {
        let n = self.words.len();
        if draws > n {
            return 0.0;
        }
        (0..draws).map(|i| ((n - i) as f64).log2()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_lowercases_and_dedupes() {
        let list = WordList::parse("Apple\n  banana \n\napple\nCHERRY\n", 3).unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0), Some("apple"));
        assert_eq!(list.get(1), Some("banana"));
        assert_eq!(list.get(2), Some("cherry"));
    }

    #[test]
    fn parse_accepts_crlf_line_endings() {
        let list = WordList::parse("one\r\ntwo\r\nthree\r\n", 3).unwrap();
        assert!(list.contains("two"));
        assert!(!list.contains("two\r"));
    }

    #[test]
    fn too_few_distinct_words_is_rejected() {
        let err = WordList::parse("same\nSame\nSAME\nother\n", 3).unwrap_err();
        assert_eq!(
            err,
            WordListError::TooFewWords {
                found: 2,
                required: 3
            }
        );
    }

    #[test]
    fn entropy_of_three_draws() {
        let words: Vec<String> = (0..7776).map(|i| format!("w{i}")).collect();
        let list = WordList::new(&words, 3).unwrap();

        let bits = list.entropy_bits(3);
        assert!(bits > MIN_ENTROPY_BITS, "got {bits}");
        assert!(bits < 39.0, "got {bits}");
    }

    #[test]
    fn entropy_is_zero_when_draws_exceed_list() {
        let list = WordList::new(["a", "b"], 0).unwrap();
        assert_eq!(list.entropy_bits(3), 0.0);
    }
}
