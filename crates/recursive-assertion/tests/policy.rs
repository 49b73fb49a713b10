// crates/recursive-assertion/tests/policy.rs
// ============================================================================
// Module: Policy Tests
// Description: Labels, parsing, and container semantics of assertion policies.
// Purpose: Keep policy labels stable across description, config, and parsing.
// ============================================================================
//! ## Overview
//! Integration tests for the collection, map, and optional policy enums.

mod support;

use recursive_assertion::CollectionAssertionPolicy;
use recursive_assertion::MapAssertionPolicy;
use recursive_assertion::OptionalAssertionPolicy;
use support::TestResult;
use support::ensure;
use support::ensure_eq;

#[test]
fn defaults_match_documented_values() -> TestResult {
    ensure_eq(CollectionAssertionPolicy::default(), CollectionAssertionPolicy::ElementsOnly, "collection")?;
    ensure_eq(MapAssertionPolicy::default(), MapAssertionPolicy::MapValuesOnly, "map")?;
    ensure_eq(OptionalAssertionPolicy::default(), OptionalAssertionPolicy::OptionalValueOnly, "optional")
}

#[test]
fn labels_are_screaming_snake_case_names() -> TestResult {
    let collection: Vec<&str> =
        CollectionAssertionPolicy::ALL.iter().map(|policy| policy.as_str()).collect();
    ensure_eq(collection, vec!["COLLECTION_OBJECT_AND_ELEMENTS", "ELEMENTS_ONLY"], "collection labels")?;
    let map: Vec<&str> = MapAssertionPolicy::ALL.iter().map(|policy| policy.as_str()).collect();
    ensure_eq(map, vec!["MAP_OBJECT_ONLY", "MAP_VALUES_ONLY", "MAP_OBJECT_AND_ENTRIES"], "map labels")?;
    let optional: Vec<&str> =
        OptionalAssertionPolicy::ALL.iter().map(|policy| policy.as_str()).collect();
    ensure_eq(
        optional,
        vec!["OPTIONAL_OBJECT_ONLY", "OPTIONAL_VALUE_ONLY", "OPTIONAL_OBJECT_AND_VALUE"],
        "optional labels",
    )
}

#[test]
fn display_matches_label() -> TestResult {
    for policy in MapAssertionPolicy::ALL {
        ensure_eq(policy.to_string(), policy.as_str().to_string(), "map display")?;
    }
    ensure_eq(CollectionAssertionPolicy::ElementsOnly.to_string(), "ELEMENTS_ONLY".to_string(), "display")
}

#[test]
fn labels_parse_back_to_variants() -> TestResult {
    for policy in CollectionAssertionPolicy::ALL {
        ensure_eq(policy.as_str().parse::<CollectionAssertionPolicy>()?, policy, "collection parse")?;
    }
    for policy in MapAssertionPolicy::ALL {
        ensure_eq(policy.as_str().parse::<MapAssertionPolicy>()?, policy, "map parse")?;
    }
    for policy in OptionalAssertionPolicy::ALL {
        ensure_eq(policy.as_str().parse::<OptionalAssertionPolicy>()?, policy, "optional parse")?;
    }
    Ok(())
}

#[test]
fn unknown_labels_are_rejected() -> TestResult {
    let Err(error) = "elements_only".parse::<CollectionAssertionPolicy>() else {
        return Err("lowercase label must not parse".into());
    };
    ensure_eq(
        error.to_string(),
        "unknown collection assertion policy label: elements_only".to_string(),
        "parse error message",
    )?;
    ensure("MAP_KEYS_ONLY".parse::<MapAssertionPolicy>().is_err(), "unknown map label")?;
    ensure("".parse::<OptionalAssertionPolicy>().is_err(), "empty optional label")
}

#[test]
fn collection_policies_describe_what_is_asserted() -> TestResult {
    let both = CollectionAssertionPolicy::CollectionObjectAndElements;
    ensure(both.asserts_container() && both.asserts_contents(), "object and elements")?;
    let elements = CollectionAssertionPolicy::ElementsOnly;
    ensure(!elements.asserts_container() && elements.asserts_contents(), "elements only")
}

#[test]
fn map_policies_describe_what_is_asserted() -> TestResult {
    let object = MapAssertionPolicy::MapObjectOnly;
    ensure(object.asserts_container() && !object.asserts_contents(), "object only")?;
    ensure(!object.asserts_keys(), "object only skips keys")?;
    let values = MapAssertionPolicy::MapValuesOnly;
    ensure(!values.asserts_container() && values.asserts_contents(), "values only")?;
    ensure(!values.asserts_keys(), "values only skips keys")?;
    let entries = MapAssertionPolicy::MapObjectAndEntries;
    ensure(entries.asserts_container() && entries.asserts_contents(), "object and entries")?;
    ensure(entries.asserts_keys(), "entries include keys")
}

#[test]
fn optional_policies_describe_what_is_asserted() -> TestResult {
    let object = OptionalAssertionPolicy::OptionalObjectOnly;
    ensure(object.asserts_container() && !object.asserts_contents(), "object only")?;
    let value = OptionalAssertionPolicy::OptionalValueOnly;
    ensure(!value.asserts_container() && value.asserts_contents(), "value only")?;
    let both = OptionalAssertionPolicy::OptionalObjectAndValue;
    ensure(both.asserts_container() && both.asserts_contents(), "object and value")
}
