// crates/recursive-assertion/src/type_name.rs
// ============================================================================
// Module: Type Names
// Description: Fully-qualified type identifiers used by ignore rules.
// Purpose: Name ignored types and detect the class-library traversal boundary.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`TypeName`] is the fully-qualified name of a runtime type as reported by
//! the object graph under assertion (for example `java.util.UUID`). Names are
//! compared verbatim.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Namespaces owned by the Java Class Library.
const CLASS_LIBRARY_PREFIXES: [&str; 2] = ["java.", "javax."];

/// Fully-qualified type name.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Creates a new type name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the Rust type path of `T`.
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the type lives in the `java.*` or `javax.*` namespace.
    #[must_use]
    pub fn is_class_library_type(&self) -> bool {
        CLASS_LIBRARY_PREFIXES.iter().any(|prefix| self.0.starts_with(prefix))
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TypeName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TypeName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
