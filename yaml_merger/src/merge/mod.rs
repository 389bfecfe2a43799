//! Type-directed recursive merge of two document values.
//!
//! [`merge`] combines a lower-priority `main` value with a higher-priority
//! `complement`. The rule applied depends only on the kinds of the two
//! arguments:
//!
//! | main      | complement | result                                              |
//! |-----------|------------|-----------------------------------------------------|
//! | any       | null       | `main`                                              |
//! | null      | any        | `complement`                                        |
//! | primitive | primitive  | `complement`                                        |
//! | sequence  | primitive  | `main` with `complement` appended                   |
//! | primitive | sequence   | `complement` with `main` appended                   |
//! | sequence  | mapping    | merged into the single-shared-key item, or appended |
//! | mapping   | sequence   | `merge(complement, main)`                           |
//! | mapping   | mapping    | key-wise recursive merge into `main`                |
//! | sequence  | sequence   | each complement item merged into `main` in turn     |
//! | primitive | mapping    | `complement`                                        |
//! | mapping   | primitive  | `complement`                                        |
//!
//! Both inputs are consumed; the result reuses whichever container survives.

use crate::value::{Mapping, Value};

/// Merge `complement` over `main`, returning the combined value.
///
/// `complement` wins whenever the two values cannot be combined. Null never
/// overrides anything.
///
/// # Examples
///
/// ```
/// use yaml_merger::{Value, merge};
///
/// let main: Value = [("name", Value::from("Alex")), ("age", Value::from(20))]
///     .into_iter()
///     .collect();
/// let complement: Value = [("name", Value::from("Bobby")), ("age", Value::Null)]
///     .into_iter()
///     .collect();
///
/// let merged = merge(main, complement);
/// assert_eq!(merged.get("name"), Some(&Value::from("Bobby")));
/// assert_eq!(merged.get("age"), Some(&Value::from(20)));
/// ```
#[must_use]
pub fn merge(main: Value, complement: Value) -> Value {
    match (main, complement) {
        (main, Value::Null) => main,
        (Value::Null, complement) => complement,
        (Value::Sequence(mut items), complement) => {
            merge_into_sequence(&mut items, complement);
            Value::Sequence(items)
        }
        (
            main @ (Value::Bool(_) | Value::Number(_) | Value::String(_)),
            Value::Sequence(mut items),
        ) => {
            items.push(main);
            Value::Sequence(items)
        }
        (main @ Value::Mapping(_), complement @ Value::Sequence(_)) => merge(complement, main),
        (Value::Mapping(mut main), Value::Mapping(complement)) => {
            merge_mappings(&mut main, complement);
            Value::Mapping(main)
        }
        (
            Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Mapping(_),
            complement @ (Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Mapping(_)),
        ) => complement,
    }
}

/// Applies `complement` to a sequence accumulator in place.
fn merge_into_sequence(items: &mut Vec<Value>, complement: Value) {
    match complement {
        Value::Null => {}
        Value::Sequence(overlay) => {
            for item in overlay {
                merge_into_sequence(items, item);
            }
        }
        Value::Mapping(overlay) => merge_mapping_into_sequence(items, overlay),
        primitive @ (Value::Bool(_) | Value::Number(_) | Value::String(_)) => items.push(primitive),
    }
}

/// Merges `overlay` into the first mapping item sharing exactly one key with
/// it, appending `overlay` as a new item when no such item exists.
fn merge_mapping_into_sequence(items: &mut Vec<Value>, overlay: Mapping) {
    let target = items.iter_mut().find_map(|item| match item {
        Value::Mapping(candidate) if shared_key_count(candidate, &overlay) == 1 => Some(candidate),
        _ => None,
    });
    match target {
        Some(candidate) => merge_mappings(candidate, overlay),
        None => items.push(Value::Mapping(overlay)),
    }
}

fn shared_key_count(candidate: &Mapping, overlay: &Mapping) -> usize {
    overlay
        .keys()
        .filter(|key| candidate.contains_key(key.as_str()))
        .count()
}

/// Merges every entry of `complement` into `main`. Keys missing from `main`
/// are merged against null and therefore appended as-is.
fn merge_mappings(main: &mut Mapping, complement: Mapping) {
    for (key, value) in complement {
        let slot = main.entry(key).or_default();
        let existing = std::mem::take(slot);
        *slot = merge(existing, value);
    }
}
