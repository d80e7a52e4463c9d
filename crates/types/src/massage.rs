//! Recursive normalization of raw Adyen response bodies.
//!
//! Two things happen while walking the tree:
//!
//! - every object key is passed through [`normalize_key`]
//! - an object that is a direct element of a list and holds exactly one entry
//!   is replaced by that entry's value
//!
//! The second rule strips the wrapper Adyen puts around list items, e.g.
//! `"details": [{"RecurringDetail": {...}}]` becomes `"details": [{...}]`.
//! Single-entry objects anywhere else are kept as objects.

use serde_json::{Map, Value};

use crate::normalize::normalize_key;

/// Structural kind of the container a value sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
    Root,
    List,
    Map,
}

/// Massage a raw response body into its normalized form
///
/// # Example
/// ```
/// use adyen_types::massage;
/// use serde_json::json;
///
/// let raw = json!({"details": [{"RecurringDetail": {"variant": "visa"}}]});
/// assert_eq!(massage(raw), json!({"details": [{"variant": "visa"}]}));
/// ```
pub fn massage(value: Value) -> Value {
    massage_with_parent(value, Parent::Root)
}

fn massage_with_parent(value: Value, parent: Parent) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| massage_with_parent(item, Parent::List))
                .collect(),
        ),
        Value::Object(map) if parent == Parent::List && map.len() == 1 => {
            match map.into_iter().next() {
                Some((_, single)) => massage_with_parent(single, Parent::Map),
                None => Value::Object(Map::new()),
            }
        }
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (normalize_key(&key), massage_with_parent(value, Parent::Map)))
                .collect(),
        ),
        scalar => scalar,
    }
}
