//! Route path keys.

use std::fmt;

/// The string key identifying a navigable destination.
///
/// A thin, immutable wrapper: equality and hashing are those of the wrapped
/// string. No format is enforced; the empty string is a valid path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RoutePath(String);

impl RoutePath {
    /// Create a path from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The wrapped path string.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Consume the path, returning the wrapped string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for RoutePath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RoutePath {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
