//! clips application layer
//!
//! The clipboard store that ties registry, clock and expiry policy together,
//! and the use cases the HTTP adapter calls.

pub mod store;
pub mod usecases;

pub use store::ClipboardStore;
pub use usecases::{
    GenerateClipboardNameUseCase, ReadClipboardTextUseCase, WriteClipboardTextUseCase,
};
