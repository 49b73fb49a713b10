// crates/recursive-assertion/src/config.rs
// ============================================================================
// Module: Recursive Assertion Configuration
// Description: Immutable settings, fluent builder, description, and loading.
// Purpose: Carry the flags a recursive assertion consults while walking an
//          object graph, and describe them for failure reports.
// Dependencies: serde, toml, crate::{filter, policy, telemetry, type_name}
// ============================================================================

//! ## Overview
//! [`RecursiveAssertionConfiguration`] is an immutable snapshot produced by a
//! [`Builder`]. Its [`fmt::Display`] output is the human-readable description
//! embedded in assertion failure messages: one `- ` prefixed sentence per
//! line, in a fixed order, with the optional sentences omitted entirely when
//! the matching setting is inactive.
//!
//! Configurations can also be read from a TOML document. Loading compiles the
//! regex rules eagerly; building from code never validates.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashSet;
use std::env;
use std::fmt;
use std::fs;
use std::hash::Hash;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::filter::FieldFilter;
use crate::policy::CollectionAssertionPolicy;
use crate::policy::MapAssertionPolicy;
use crate::policy::OptionalAssertionPolicy;
use crate::telemetry;
use crate::type_name::TypeName;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Line terminator appended to every description line.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Line terminator appended to every description line.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "recursive-assertion.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "RECURSIVE_ASSERTION_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

/// Separator used when rendering lists inside a description line.
const LIST_SEPARATOR: &str = ", ";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Settings consulted by a recursive, field-by-field assertion.
///
/// # Invariants
/// - Immutable once built; only [`Builder`] produces new values.
/// - `ignored_fields_of_types` holds no duplicates and keeps first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecursiveAssertionConfiguration {
    /// Skip every field whose value is null.
    ignore_all_null_fields: bool,
    /// Skip every field of a primitive type.
    ignore_primitive_fields: bool,
    /// Field paths excluded by exact name, in call order.
    ignored_fields: Vec<String>,
    /// Regexes excluding the field paths they match, in call order.
    ignored_fields_matching_regexes: Vec<String>,
    /// Types whose fields are excluded, in call order.
    ignored_fields_of_types: Vec<TypeName>,
    /// Descend into `java.*` / `javax.*` types instead of stopping at them.
    recurse_into_java_class_library_types: bool,
    /// Collection handling.
    collection_assertion_policy: CollectionAssertionPolicy,
    /// Map handling.
    map_assertion_policy: MapAssertionPolicy,
    /// Optional handling.
    optional_assertion_policy: OptionalAssertionPolicy,
}

impl RecursiveAssertionConfiguration {
    /// Returns a builder seeded with the default settings.
    #[must_use]
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Returns true when null fields are skipped.
    #[must_use]
    pub const fn ignore_all_null_fields(&self) -> bool {
        self.ignore_all_null_fields
    }

    /// Returns true when primitive fields are skipped.
    #[must_use]
    pub const fn ignore_primitive_fields(&self) -> bool {
        self.ignore_primitive_fields
    }

    /// Returns the ignored field paths in call order.
    #[must_use]
    pub fn ignored_fields(&self) -> &[String] {
        &self.ignored_fields
    }

    /// Returns the ignored field regexes in call order.
    #[must_use]
    pub fn ignored_fields_matching_regexes(&self) -> &[String] {
        &self.ignored_fields_matching_regexes
    }

    /// Returns the ignored types in call order.
    #[must_use]
    pub fn ignored_fields_of_types(&self) -> &[TypeName] {
        &self.ignored_fields_of_types
    }

    /// Returns true when the assertion descends into class-library types.
    #[must_use]
    pub const fn recurse_into_java_class_library_types(&self) -> bool {
        self.recurse_into_java_class_library_types
    }

    /// Returns the collection policy.
    #[must_use]
    pub const fn collection_assertion_policy(&self) -> CollectionAssertionPolicy {
        self.collection_assertion_policy
    }

    /// Returns the map policy.
    #[must_use]
    pub const fn map_assertion_policy(&self) -> MapAssertionPolicy {
        self.map_assertion_policy
    }

    /// Returns the optional policy.
    #[must_use]
    pub const fn optional_assertion_policy(&self) -> OptionalAssertionPolicy {
        self.optional_assertion_policy
    }

    /// Returns the multi-line description of the active settings.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// Compiles the ignore rules into a [`FieldFilter`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRegex`] when a regex does not compile.
    pub fn field_filter(&self) -> Result<FieldFilter, ConfigError> {
        FieldFilter::compile(self)
    }

    /// Validates that every ignore rule can be compiled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRegex`] when a regex does not compile.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.field_filter().map(|_| ())
    }

    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config = Self::from_toml_str(content)?;
        telemetry::record_load(&resolved);
        Ok(config)
    }

    /// Parses and validates configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents or unknown keys,
    /// and [`ConfigError::InvalidRegex`] for regexes that do not compile.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let document: ConfigDocument =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        let config = document.into_builder().build();
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration using the TOML schema read by [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|err| ConfigError::Invalid(err.to_string()))
    }
}

// ============================================================================
// SECTION: Description
// ============================================================================

impl fmt::Display for RecursiveAssertionConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ignore_all_null_fields {
            write_line(f, format_args!("all null fields were ignored in the assertion"))?;
        }
        if !self.ignored_fields.is_empty() {
            write_line(
                f,
                format_args!(
                    "the following fields were ignored in the comparison: {}",
                    Joined(&self.ignored_fields)
                ),
            )?;
        }
        if !self.ignored_fields_matching_regexes.is_empty() {
            write_line(
                f,
                format_args!(
                    "the fields matching the following regexes were ignored in the comparison: {}",
                    Joined(&self.ignored_fields_matching_regexes)
                ),
            )?;
        }
        if !self.ignored_fields_of_types.is_empty() {
            write_line(
                f,
                format_args!(
                    "the following types were ignored in the assertion: {}",
                    Joined(&self.ignored_fields_of_types)
                ),
            )?;
        }
        if self.ignore_primitive_fields {
            write_line(f, format_args!("primitive fields were ignored in the recursive assertion"))?;
        }
        let inclusion = if self.recurse_into_java_class_library_types { "included" } else { "excluded" };
        write_line(
            f,
            format_args!(
                "fields from Java Class Library types (java.* or javax.*) were {inclusion} in the recursive assertion"
            ),
        )?;
        write_line(
            f,
            format_args!("the collection assertion policy was {}", self.collection_assertion_policy),
        )?;
        write_line(f, format_args!("the map assertion policy was {}", self.map_assertion_policy))?;
        write_line(
            f,
            format_args!("the optional assertion policy was {}", self.optional_assertion_policy),
        )
    }
}

/// Writes one `- ` prefixed, terminated description line.
fn write_line(f: &mut fmt::Formatter<'_>, sentence: fmt::Arguments<'_>) -> fmt::Result {
    write!(f, "- {sentence}{LINE_SEPARATOR}")
}

/// Displays a slice as a `, ` separated list without allocating.
struct Joined<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for Joined<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(LIST_SEPARATOR)?;
            }
            item.fmt(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Fluent builder for [`RecursiveAssertionConfiguration`].
///
/// Every setter replaces the previous value. [`Builder::build`] snapshots the
/// current draft, so the builder can keep being adjusted afterwards without
/// affecting configurations it already produced.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    /// Draft settings copied out on every build.
    draft: RecursiveAssertionConfiguration,
}

impl Builder {
    /// Creates a builder seeded with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether null fields are skipped.
    #[must_use]
    pub const fn with_ignore_all_null_fields(mut self, ignore: bool) -> Self {
        self.draft.ignore_all_null_fields = ignore;
        self
    }

    /// Sets whether primitive fields are skipped.
    #[must_use]
    pub const fn with_ignore_primitive_fields(mut self, ignore: bool) -> Self {
        self.draft.ignore_primitive_fields = ignore;
        self
    }

    /// Replaces the ignored field paths.
    #[must_use]
    pub fn with_ignored_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.ignored_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the ignored field regexes.
    #[must_use]
    pub fn with_ignored_fields_matching_regexes<I, S>(mut self, regexes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft.ignored_fields_matching_regexes = regexes.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the ignored types. Repeated names keep their first position.
    #[must_use]
    pub fn with_ignored_fields_of_types<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        let mut seen = HashSet::new();
        self.draft.ignored_fields_of_types =
            types.into_iter().map(Into::into).filter(|name| seen.insert(name.clone())).collect();
        self
    }

    /// Sets whether the assertion descends into class-library types.
    #[must_use]
    pub const fn with_recursion_into_java_class_library_types(mut self, recurse: bool) -> Self {
        self.draft.recurse_into_java_class_library_types = recurse;
        self
    }

    /// Sets the collection policy.
    #[must_use]
    pub const fn with_collection_assertion_policy(
        mut self,
        policy: CollectionAssertionPolicy,
    ) -> Self {
        self.draft.collection_assertion_policy = policy;
        self
    }

    /// Sets the map policy.
    #[must_use]
    pub const fn with_map_assertion_policy(mut self, policy: MapAssertionPolicy) -> Self {
        self.draft.map_assertion_policy = policy;
        self
    }

    /// Sets the optional policy.
    #[must_use]
    pub const fn with_optional_assertion_policy(mut self, policy: OptionalAssertionPolicy) -> Self {
        self.draft.optional_assertion_policy = policy;
        self
    }

    /// Snapshots the current settings into an immutable configuration.
    #[must_use]
    pub fn build(&self) -> RecursiveAssertionConfiguration {
        let snapshot = self.draft.clone();
        telemetry::record_duplicates("ignored_fields", count_duplicates(&snapshot.ignored_fields));
        telemetry::record_duplicates(
            "ignored_fields_matching_regexes",
            count_duplicates(&snapshot.ignored_fields_matching_regexes),
        );
        telemetry::record_build(&snapshot);
        snapshot
    }
}

/// Counts entries that repeat an earlier entry.
fn count_duplicates<T: Eq + Hash>(items: &[T]) -> usize {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().filter(|item| !seen.insert(*item)).count()
}

// ============================================================================
// SECTION: TOML Document
// ============================================================================

/// On-disk representation; every key is optional and unknown keys fail.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigDocument {
    /// See [`RecursiveAssertionConfiguration::ignore_all_null_fields`].
    ignore_all_null_fields: bool,
    /// See [`RecursiveAssertionConfiguration::ignore_primitive_fields`].
    ignore_primitive_fields: bool,
    /// See [`RecursiveAssertionConfiguration::ignored_fields`].
    ignored_fields: Vec<String>,
    /// See [`RecursiveAssertionConfiguration::ignored_fields_matching_regexes`].
    ignored_fields_matching_regexes: Vec<String>,
    /// See [`RecursiveAssertionConfiguration::ignored_fields_of_types`].
    ignored_fields_of_types: Vec<TypeName>,
    /// See [`RecursiveAssertionConfiguration::recurse_into_java_class_library_types`].
    recurse_into_java_class_library_types: bool,
    /// See [`RecursiveAssertionConfiguration::collection_assertion_policy`].
    collection_assertion_policy: CollectionAssertionPolicy,
    /// See [`RecursiveAssertionConfiguration::map_assertion_policy`].
    map_assertion_policy: MapAssertionPolicy,
    /// See [`RecursiveAssertionConfiguration::optional_assertion_policy`].
    optional_assertion_policy: OptionalAssertionPolicy,
}

impl ConfigDocument {
    /// Routes the document through the builder so its invariants apply.
    fn into_builder(self) -> Builder {
        Builder::new()
            .with_ignore_all_null_fields(self.ignore_all_null_fields)
            .with_ignore_primitive_fields(self.ignore_primitive_fields)
            .with_ignored_fields(self.ignored_fields)
            .with_ignored_fields_matching_regexes(self.ignored_fields_matching_regexes)
            .with_ignored_fields_of_types(self.ignored_fields_of_types)
            .with_recursion_into_java_class_library_types(self.recurse_into_java_class_library_types)
            .with_collection_assertion_policy(self.collection_assertion_policy)
            .with_map_assertion_policy(self.map_assertion_policy)
            .with_optional_assertion_policy(self.optional_assertion_policy)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
