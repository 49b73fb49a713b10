// crates/recursive-assertion/src/error.rs
// ============================================================================
// Module: Recursive Assertion Errors
// Description: Error taxonomy for configuration loading and rule compilation.
// Purpose: Give callers structured, displayable failures without panics.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Building a configuration never fails. Errors only arise when a
//! configuration is read from a document, validated, or compiled into a
//! [`crate::FieldFilter`], and when a policy label is parsed from text.

use thiserror::Error;

// ============================================================================
// SECTION: Configuration Errors
// ============================================================================

/// Configuration loading, validation, and compilation errors.
///
/// # Invariants
/// - Messages never include file contents, only paths and offending values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// An ignored-field regex does not compile.
    #[error("invalid ignored field regex `{pattern}`: {reason}")]
    InvalidRegex {
        /// Pattern exactly as configured.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },
}

// ============================================================================
// SECTION: Policy Parse Errors
// ============================================================================

/// Raised when a policy label does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {policy} label: {label}")]
pub struct PolicyParseError {
    /// Policy family being parsed (for example `collection assertion policy`).
    pub policy: &'static str,
    /// Label that failed to parse.
    pub label: String,
}

impl PolicyParseError {
    /// Creates a parse error for the given policy family.
    pub(crate) fn new(policy: &'static str, label: &str) -> Self {
        Self {
            policy,
            label: label.to_string(),
        }
    }
}
