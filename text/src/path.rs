//! Key paths for locating values in error messages.

use std::fmt;

/// A borrowed chain of keys from the root to a value.
#[derive(Debug, Clone, Copy)]
pub struct KeyPath<'a> {
    parent: Option<&'a KeyPath<'a>>,
    key: &'a str,
}

impl<'a> KeyPath<'a> {
    #[must_use]
    pub const fn root() -> Self {
        Self {
            parent: None,
            key: "",
        }
    }

    #[must_use]
    pub const fn child(&'a self, key: &'a str) -> Self {
        Self {
            parent: Some(self),
            key,
        }
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parent {
            None => f.write_str("<root>"),
            Some(parent) if parent.parent.is_none() => f.write_str(self.key),
            Some(parent) => write!(f, "{parent}.{}", self.key),
        }
    }
}
