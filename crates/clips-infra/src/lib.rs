pub mod naming;
pub mod registry;
pub mod time;

pub use naming::{default_word_list, load_word_list};
pub use registry::InMemoryClipboardRegistry;
pub use time::SystemClock;
