// crates/recursive-assertion/src/lib.rs
// ============================================================================
// Module: Recursive Assertion Root
// Description: Public API surface for recursive assertion configuration.
// Purpose: Wire together policies, configuration, and compiled ignore rules.
// Dependencies: crate::{config, error, field, filter, policy, telemetry, type_name}
// ============================================================================

//! ## Overview
//! A recursive assertion checks an entire object graph field by field. This
//! crate holds the settings such an assertion consults: which fields to
//! ignore, whether to stop at class-library types, and how collections,
//! maps, and optionals are handled. It renders those settings as the
//! description used in failure reports and compiles them into a
//! [`FieldFilter`] that a traversal can query.
//!
//! ```
//! use recursive_assertion::RecursiveAssertionConfiguration;
//!
//! let config = RecursiveAssertionConfiguration::builder()
//!     .with_ignore_all_null_fields(true)
//!     .with_ignored_fields(["id"])
//!     .build();
//! assert!(config.description().starts_with("- all null fields were ignored"));
//! ```

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod field;
pub mod filter;
pub mod policy;
pub mod telemetry;
pub mod type_name;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::Builder;
pub use config::LINE_SEPARATOR;
pub use config::RecursiveAssertionConfiguration;
pub use error::ConfigError;
pub use error::PolicyParseError;
pub use field::FieldPath;
pub use filter::FieldFilter;
pub use filter::FieldVisit;
pub use filter::IgnoreReason;
pub use policy::CollectionAssertionPolicy;
pub use policy::MapAssertionPolicy;
pub use policy::OptionalAssertionPolicy;
pub use type_name::TypeName;
