// crates/recursive-assertion/src/telemetry.rs
// ============================================================================
// Module: Telemetry
// Description: Structured log events for configuration lifecycle.
// Purpose: Surface builds, loads, and suspicious rule lists without
//          installing a subscriber.
// Dependencies: tracing, crate::config
// ============================================================================

//! ## Overview
//! Events are emitted under [`TRACING_TARGET`]. The library never installs a
//! subscriber; hosts opt in by filtering on the target. Field values are
//! counts and paths only; rule contents are not logged.

use std::path::Path;

use crate::config::RecursiveAssertionConfiguration;

/// Target used by every event emitted from this crate.
pub const TRACING_TARGET: &str = "recursive_assertion";

/// Records a freshly built configuration.
pub(crate) fn record_build(config: &RecursiveAssertionConfiguration) {
    tracing::debug!(
        target: TRACING_TARGET,
        ignored_fields = config.ignored_fields().len(),
        ignored_regexes = config.ignored_fields_matching_regexes().len(),
        ignored_types = config.ignored_fields_of_types().len(),
        collection_policy = config.collection_assertion_policy().as_str(),
        map_policy = config.map_assertion_policy().as_str(),
        optional_policy = config.optional_assertion_policy().as_str(),
        "built recursive assertion configuration"
    );
}

/// Warns when a rule list repeats entries.
pub(crate) fn record_duplicates(option: &'static str, duplicates: usize) {
    if duplicates > 0 {
        tracing::warn!(target: TRACING_TARGET, option, duplicates, "ignore rule list has duplicates");
    }
}

/// Records a compiled field filter.
pub(crate) fn record_filter_compiled(regexes: usize) {
    tracing::debug!(target: TRACING_TARGET, regexes, "compiled field filter");
}

/// Records a configuration loaded from disk.
pub(crate) fn record_load(path: &Path) {
    tracing::debug!(target: TRACING_TARGET, path = %path.display(), "loaded recursive assertion configuration");
}
