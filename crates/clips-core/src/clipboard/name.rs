use std::fmt::{Display, Formatter};

/// Normalized clipboard name.
///
/// Names are case-insensitive: the wrapped value is always lower-cased, so
/// `FooBar` and `foobar` address the same clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClipboardName(String);

impl ClipboardName {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ClipboardName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClipboardName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ClipboardName {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl AsRef<str> for ClipboardName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
