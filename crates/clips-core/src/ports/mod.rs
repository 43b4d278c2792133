//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, keeping the clipboard rules
//! independent of how time is read or where clipboards are kept.

mod clipboard_registry;
mod clock;

pub use clipboard_registry::ClipboardRegistryPort;
pub use clock::ClockPort;
