// crates/recursive-assertion/src/policy.rs
// ============================================================================
// Module: Container Assertion Policies
// Description: Closed policy sets for collections, maps, and optionals.
// Purpose: Tell a traversal whether containers, their contents, or both are
//          subject to the recursive assertion.
// Dependencies: serde, crate::error
// ============================================================================

//! ## Overview
//! Each policy family is a closed enum whose stable label is the
//! SCREAMING_SNAKE variant name. Labels are shared by the description text,
//! the TOML schema, and [`std::str::FromStr`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::PolicyParseError;

// ============================================================================
// SECTION: Collection Policy
// ============================================================================

/// Controls how collections (and arrays) are asserted.
///
/// # Invariants
/// - Labels are stable; they appear verbatim in descriptions and config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionAssertionPolicy {
    /// Assert the collection object itself and then each of its elements.
    CollectionObjectAndElements,
    /// Assert only the elements, never the collection object.
    #[default]
    ElementsOnly,
}

impl CollectionAssertionPolicy {
    /// All variants in declaration order.
    pub const ALL: [Self; 2] = [Self::CollectionObjectAndElements, Self::ElementsOnly];

    /// Returns the stable label for the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CollectionObjectAndElements => "COLLECTION_OBJECT_AND_ELEMENTS",
            Self::ElementsOnly => "ELEMENTS_ONLY",
        }
    }

    /// Returns true when the collection object itself is asserted.
    #[must_use]
    pub const fn asserts_container(self) -> bool {
        matches!(self, Self::CollectionObjectAndElements)
    }

    /// Returns true when the collection elements are asserted.
    #[must_use]
    pub const fn asserts_contents(self) -> bool {
        matches!(self, Self::CollectionObjectAndElements | Self::ElementsOnly)
    }
}

impl fmt::Display for CollectionAssertionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionAssertionPolicy {
    type Err = PolicyParseError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == label)
            .ok_or_else(|| PolicyParseError::new("collection assertion policy", label))
    }
}

// ============================================================================
// SECTION: Map Policy
// ============================================================================

/// Controls how maps are asserted.
///
/// # Invariants
/// - Labels are stable; they appear verbatim in descriptions and config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MapAssertionPolicy {
    /// Assert the map object only; keys and values are not visited.
    MapObjectOnly,
    /// Assert only the values, never the map object or its keys.
    #[default]
    MapValuesOnly,
    /// Assert the map object, then every key and every value.
    MapObjectAndEntries,
}

impl MapAssertionPolicy {
    /// All variants in declaration order.
    pub const ALL: [Self; 3] = [Self::MapObjectOnly, Self::MapValuesOnly, Self::MapObjectAndEntries];

    /// Returns the stable label for the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MapObjectOnly => "MAP_OBJECT_ONLY",
            Self::MapValuesOnly => "MAP_VALUES_ONLY",
            Self::MapObjectAndEntries => "MAP_OBJECT_AND_ENTRIES",
        }
    }

    /// Returns true when the map object itself is asserted.
    #[must_use]
    pub const fn asserts_container(self) -> bool {
        matches!(self, Self::MapObjectOnly | Self::MapObjectAndEntries)
    }

    /// Returns true when map values are asserted.
    #[must_use]
    pub const fn asserts_contents(self) -> bool {
        matches!(self, Self::MapValuesOnly | Self::MapObjectAndEntries)
    }

    /// Returns true when map keys are asserted.
    #[must_use]
    pub const fn asserts_keys(self) -> bool {
        matches!(self, Self::MapObjectAndEntries)
    }
}

impl fmt::Display for MapAssertionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapAssertionPolicy {
    type Err = PolicyParseError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == label)
            .ok_or_else(|| PolicyParseError::new("map assertion policy", label))
    }
}

// ============================================================================
// SECTION: Optional Policy
// ============================================================================

/// Controls how optional values are asserted.
///
/// # Invariants
/// - Labels are stable; they appear verbatim in descriptions and config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionalAssertionPolicy {
    /// Assert the optional wrapper only; the wrapped value is not visited.
    OptionalObjectOnly,
    /// Assert only the wrapped value, when present.
    #[default]
    OptionalValueOnly,
    /// Assert the optional wrapper and then the wrapped value.
    OptionalObjectAndValue,
}

impl OptionalAssertionPolicy {
    /// All variants in declaration order.
    pub const ALL: [Self; 3] =
        [Self::OptionalObjectOnly, Self::OptionalValueOnly, Self::OptionalObjectAndValue];

    /// Returns the stable label for the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OptionalObjectOnly => "OPTIONAL_OBJECT_ONLY",
            Self::OptionalValueOnly => "OPTIONAL_VALUE_ONLY",
            Self::OptionalObjectAndValue => "OPTIONAL_OBJECT_AND_VALUE",
        }
    }

    /// Returns true when the optional wrapper itself is asserted.
    #[must_use]
    pub const fn asserts_container(self) -> bool {
        matches!(self, Self::OptionalObjectOnly | Self::OptionalObjectAndValue)
    }

    /// Returns true when the wrapped value is asserted.
    #[must_use]
    pub const fn asserts_contents(self) -> bool {
        matches!(self, Self::OptionalValueOnly | Self::OptionalObjectAndValue)
    }
}

impl fmt::Display for OptionalAssertionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionalAssertionPolicy {
    type Err = PolicyParseError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == label)
            .ok_or_else(|| PolicyParseError::new("optional assertion policy", label))
    }
}
