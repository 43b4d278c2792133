//! Use cases behind the HTTP routes.
//!
//! GET  /<name>/text  → ReadClipboardTextUseCase
//! POST /<name>/text  → WriteClipboardTextUseCase
//! GET  /random       → GenerateClipboardNameUseCase

mod generate_clipboard_name;
mod read_clipboard_text;
mod write_clipboard_text;

pub use generate_clipboard_name::GenerateClipboardNameUseCase;
pub use read_clipboard_text::ReadClipboardTextUseCase;
pub use write_clipboard_text::WriteClipboardTextUseCase;
