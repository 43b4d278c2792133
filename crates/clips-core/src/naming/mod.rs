//! Random clipboard names built from a fixed word list.

mod generator;
mod word_list;

pub use generator::{NameGenerator, NUM_RANDOM_WORDS};
pub use word_list::{WordList, WordListError, MIN_ENTROPY_BITS};
