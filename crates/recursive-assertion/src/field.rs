// crates/recursive-assertion/src/field.rs
// ============================================================================
// Module: Field Paths
// Description: Dotted paths locating a field from the root object.
// Purpose: Give ignore rules a single, comparable notion of "which field".
// Dependencies: none
// ============================================================================

//! ## Overview
//! Paths are dot-separated field names starting below the root object, so the
//! `bar` field of the root's `foo` field is `foo.bar`. The root itself is the
//! empty path.

use std::fmt;

/// Separator between field names in a path.
const SEPARATOR: char = '.';

/// Dotted path of a field relative to the root object.
///
/// # Invariants
/// - The root path is the empty string.
/// - Segments are joined by `.`; no escaping is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath(String);

impl FieldPath {
    /// Returns the path of the root object.
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Creates a path from its dotted representation.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the path of the named field below this one.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        if self.is_root() {
            Self(name.to_string())
        } else {
            Self(format!("{}{SEPARATOR}{name}", self.0))
        }
    }

    /// Returns the dotted representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the last segment, or the empty string for the root.
    #[must_use]
    pub fn field_name(&self) -> &str {
        self.0.rsplit(SEPARATOR).next().unwrap_or_default()
    }

    /// Returns the enclosing path, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.0.rsplit_once(SEPARATOR) {
            Some((parent, _)) => Some(Self(parent.to_string())),
            None => Some(Self::root()),
        }
    }

    /// Returns true when this path equals `other` or lies underneath it.
    #[must_use]
    pub fn is_within(&self, other: &str) -> bool {
        match self.0.strip_prefix(other) {
            Some(rest) => rest.is_empty() || (!other.is_empty() && rest.starts_with(SEPARATOR)),
            None => false,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() { f.write_str("<root>") } else { f.write_str(&self.0) }
    }
}

impl From<&str> for FieldPath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
