//! # clips-core
//!
//! Core domain models and business logic for clips.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the clipboard entity and its lazy expiry rule, the name generator, and the
//! ports implemented by `clips-infra`.

pub mod clipboard;
pub mod config;
pub mod naming;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{Clipboard, ClipboardName, ExpiryPolicy};
pub use config::AppConfig;
pub use naming::{NameGenerator, WordList, WordListError};
