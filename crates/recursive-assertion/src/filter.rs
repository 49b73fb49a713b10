// crates/recursive-assertion/src/filter.rs
// ============================================================================
// Module: Field Filter
// Description: Compiled ignore rules derived from a configuration.
// Purpose: Answer "should this field be skipped?" during traversal.
// Dependencies: regex, crate::{config, error, field, telemetry, type_name}
// ============================================================================

//! ## Overview
//! A [`FieldFilter`] is the query side of a
//! [`RecursiveAssertionConfiguration`]: regexes are compiled once, and each
//! visited field is checked against the null, primitive, exact-path, regex,
//! and type rules in that order. The root object is never ignored by a path
//! or regex rule.

// ============================================================================
// SECTION: Imports
// ============================================================================

use regex::Regex;

use crate::config::RecursiveAssertionConfiguration;
use crate::error::ConfigError;
use crate::field::FieldPath;
use crate::telemetry;
use crate::type_name::TypeName;

// ============================================================================
// SECTION: Field Visits
// ============================================================================

/// Facts about a field reached during traversal.
#[derive(Debug, Clone, Copy)]
pub struct FieldVisit<'a> {
    /// Location of the field.
    pub path: &'a FieldPath,
    /// Runtime type of the value, when known.
    pub type_name: Option<&'a TypeName>,
    /// The value is null.
    pub is_null: bool,
    /// The declared type is primitive.
    pub is_primitive: bool,
}

impl<'a> FieldVisit<'a> {
    /// Creates a visit for a non-null, non-primitive field of unknown type.
    #[must_use]
    pub const fn new(path: &'a FieldPath) -> Self {
        Self {
            path,
            type_name: None,
            is_null: false,
            is_primitive: false,
        }
    }

    /// Records the runtime type of the value.
    #[must_use]
    pub const fn of_type(mut self, type_name: &'a TypeName) -> Self {
        self.type_name = Some(type_name);
        self
    }

    /// Marks the value as null.
    #[must_use]
    pub const fn null(mut self) -> Self {
        self.is_null = true;
        self
    }

    /// Marks the field as primitive.
    #[must_use]
    pub const fn primitive(mut self) -> Self {
        self.is_primitive = true;
        self
    }
}

/// Rule that caused a field to be ignored.
///
/// # Invariants
/// - Variants are listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// The value is null and null fields are ignored.
    NullField,
    /// The field is primitive and primitive fields are ignored.
    PrimitiveField,
    /// The path equals, or lies under, an ignored field.
    IgnoredField,
    /// The path matches an ignored regex.
    IgnoredFieldRegex,
    /// The value's type is ignored.
    IgnoredType,
}

// ============================================================================
// SECTION: Field Filter
// ============================================================================

/// Compiled ignore rules.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    /// Skip null values.
    ignore_all_null_fields: bool,
    /// Skip primitive fields.
    ignore_primitive_fields: bool,
    /// Exact ignored paths.
    ignored_fields: Vec<String>,
    /// Anchored ignore regexes.
    ignored_field_regexes: Vec<Regex>,
    /// Ignored value types.
    ignored_types: Vec<TypeName>,
    /// Descend into class-library types.
    recurse_into_class_library_types: bool,
}

impl FieldFilter {
    /// Compiles the ignore rules of `config`.
    ///
    /// Regexes must match the whole dotted path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRegex`] for the first pattern that fails
    /// to compile.
    pub fn compile(config: &RecursiveAssertionConfiguration) -> Result<Self, ConfigError> {
        let ignored_field_regexes = config
            .ignored_fields_matching_regexes()
            .iter()
            .map(|pattern| compile_anchored(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        let filter = Self {
            ignore_all_null_fields: config.ignore_all_null_fields(),
            ignore_primitive_fields: config.ignore_primitive_fields(),
            ignored_fields: config.ignored_fields().to_vec(),
            ignored_field_regexes,
            ignored_types: config.ignored_fields_of_types().to_vec(),
            recurse_into_class_library_types: config.recurse_into_java_class_library_types(),
        };
        telemetry::record_filter_compiled(filter.ignored_field_regexes.len());
        Ok(filter)
    }

    /// Returns true when `path` equals or lies under an ignored field.
    #[must_use]
    pub fn matches_an_ignored_field(&self, path: &FieldPath) -> bool {
        !path.is_root() && self.ignored_fields.iter().any(|ignored| path.is_within(ignored))
    }

    /// Returns true when `path` fully matches an ignored regex.
    #[must_use]
    pub fn matches_an_ignored_field_regex(&self, path: &FieldPath) -> bool {
        !path.is_root() && self.ignored_field_regexes.iter().any(|regex| regex.is_match(path.as_str()))
    }

    /// Returns true when values of `type_name` are ignored.
    #[must_use]
    pub fn is_ignored_type(&self, type_name: &TypeName) -> bool {
        self.ignored_types.contains(type_name)
    }

    /// Returns true when the traversal may descend into values of `type_name`.
    #[must_use]
    pub fn should_recurse_into(&self, type_name: &TypeName) -> bool {
        self.recurse_into_class_library_types || !type_name.is_class_library_type()
    }

    /// Returns the first rule that ignores `visit`, if any.
    #[must_use]
    pub fn ignore_reason(&self, visit: &FieldVisit<'_>) -> Option<IgnoreReason> {
        if visit.is_null && self.ignore_all_null_fields {
            return Some(IgnoreReason::NullField);
        }
        if visit.is_primitive && self.ignore_primitive_fields {
            return Some(IgnoreReason::PrimitiveField);
        }
        if self.matches_an_ignored_field(visit.path) {
            return Some(IgnoreReason::IgnoredField);
        }
        if self.matches_an_ignored_field_regex(visit.path) {
            return Some(IgnoreReason::IgnoredFieldRegex);
        }
        if visit.type_name.is_some_and(|type_name| self.is_ignored_type(type_name)) {
            return Some(IgnoreReason::IgnoredType);
        }
        None
    }

    /// Returns true when any rule ignores `visit`.
    #[must_use]
    pub fn should_ignore(&self, visit: &FieldVisit<'_>) -> bool {
        self.ignore_reason(visit).is_some()
    }
}

/// Compiles `pattern` so it must match an entire path.
fn compile_anchored(pattern: &str) -> Result<Regex, ConfigError> {
    let invalid = |err: regex::Error| ConfigError::InvalidRegex {
        pattern: pattern.to_string(),
        reason: err.to_string(),
    };
    // Validate the bare pattern first so unbalanced groups cannot pair up
    // with the anchoring group.
    Regex::new(pattern).map_err(invalid)?;
    Regex::new(&format!("^(?:{pattern})$")).map_err(invalid)
}
