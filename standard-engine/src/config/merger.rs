//! Deep merging of configuration trees.
//!
//! Configuration layers (defaults, config-file contents, ignore patterns and
//! command-line overrides) are plain JSON-like trees. This module folds them
//! into one effective tree with three structural rules:
//!
//! - collection arrays gain the source elements the target lacks, in order,
//! - rule entries (`["error", "always"]`) are atomic and replaced wholesale,
//! - nested mappings merge recursively; everything else is last-write-wins.
//!
//! Deduplication relies on [`equals`], which ignores array element order and
//! object key order.

use serde_json::{Map, Number, Value};

/// A configuration tree: string keys mapped to JSON-like values.
pub type ConfigObject = Map<String, Value>;

/// First-element tokens that mark an array as a rule entry.
const SEVERITY_TOKENS: [&str; 6] = ["off", "warn", "error", "0", "1", "2"];

/// Structural equality that ignores array order and object key order.
///
/// Arrays are compared as multisets: they must have the same length and every
/// element of one must pair up with a distinct equal element of the other.
/// Numbers compare by numeric value, so `1` equals `1.0`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use standard_engine::config::equals;
///
/// assert!(equals(&json!([1, 2, 3]), &json!([3, 2, 1])));
/// assert!(!equals(&json!([1, 1, 2]), &json!([1, 2])));
/// assert!(equals(&json!({"a": 1, "b": [2]}), &json!({"b": [2], "a": 1})));
/// ```
#[must_use]
pub fn equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(left), Value::Array(right)) => arrays_equal(left, right),
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, value)| right.get(key).is_some_and(|other| equals(value, other)))
        }
        (Value::Number(left), Value::Number(right)) => numbers_equal(left, right),
        _ => a == b,
    }
}

fn arrays_equal(left: &[Value], right: &[Value]) -> bool {
    if left.len() != right.len() {
        return false;
    }

    let mut claimed = vec![false; right.len()];
    for item in left {
        let partner = right
            .iter()
            .enumerate()
            .position(|(i, other)| !claimed[i] && equals(item, other));
        match partner {
            Some(i) => claimed[i] = true,
            None => return false,
        }
    }
    true
}

#[allow(clippy::float_cmp)]
fn numbers_equal(left: &Number, right: &Number) -> bool {
    left == right || matches!((left.as_f64(), right.as_f64()), (Some(x), Some(y)) if x == y)
}

/// Returns true if `seq` looks like a rule declaration.
///
/// Only the first element is inspected: its string form must be exactly one
/// of `off`, `warn`, `error`, `0`, `1` or `2`. Matching is case-sensitive.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use standard_engine::config::is_rule_entry;
///
/// assert!(is_rule_entry(&[json!("error"), json!("always")]));
/// assert!(is_rule_entry(&[json!(2)]));
/// assert!(!is_rule_entry(&[json!("Error")]));
/// assert!(!is_rule_entry(&[]));
/// ```
#[must_use]
pub fn is_rule_entry(seq: &[Value]) -> bool {
    seq.first()
        .is_some_and(|first| SEVERITY_TOKENS.contains(&string_form(first).as_str()))
}

/// Renders a value the way a script runtime coerces it to a string.
fn string_form(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => string_form(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use standard_engine::config::{ConfigMerger, ConfigObject};
///
/// let base: ConfigObject = serde_json::from_value(json!({"tags": ["a", "b"]})).unwrap();
/// let extra: ConfigObject = serde_json::from_value(json!({"tags": ["b", "c"]})).unwrap();
///
/// let merged = ConfigMerger::merge(&base, &[Some(&extra)]);
/// assert_eq!(merged["tags"], json!(["a", "b", "c"]));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge `sources` into a copy of `target`, left to right.
    ///
    /// Neither `target` nor any source is modified. Absent sources are
    /// skipped. Later sources win on direct conflicts, while collection
    /// arrays accumulate the novel values of every source.
    #[must_use]
    pub fn merge(target: &ConfigObject, sources: &[Option<&ConfigObject>]) -> ConfigObject {
        let mut result = target.clone();

        for source in sources.iter().flatten() {
            Self::merge_into(&mut result, source);
        }

        result
    }

    /// Merge a single `source` into `target` in place.
    ///
    /// # Merging Rules
    ///
    /// For every key in `source`:
    /// - `null` values mean "not provided" and leave the target untouched
    /// - values deep-equal to the target's are skipped
    /// - a non-rule array in the target absorbs the novel elements of a source array
    /// - two mappings merge recursively
    /// - anything else (scalars, rule entries, type mismatches) is replaced
    pub fn merge_into(target: &mut ConfigObject, source: &ConfigObject) {
        for (key, incoming) in source {
            if incoming.is_null() {
                continue;
            }

            let incoming = without_nulls(incoming);
            match target.get_mut(key) {
                Some(current) => Self::merge_value(current, incoming),
                None => {
                    target.insert(key.clone(), incoming);
                }
            }
        }
    }

    fn merge_value(current: &mut Value, incoming: Value) {
        if equals(current, &incoming) {
            return;
        }

        match (current, incoming) {
            // Rule entries must be ruled out before the generic array branch.
            (Value::Array(existing), Value::Array(additions))
                if !is_rule_entry(existing.as_slice()) =>
            {
                // Novelty is judged against the target as it was before this
                // source, so repeats within one source are kept.
                let novel: Vec<Value> = additions
                    .into_iter()
                    .filter(|item| !existing.iter().any(|present| equals(present, item)))
                    .collect();
                existing.extend(novel);
            }
            (Value::Object(existing), Value::Object(nested)) => {
                Self::merge_into(existing, &nested);
            }
            (current, incoming) => *current = incoming,
        }
    }
}

/// Copy of `value` with every `null` mapping entry removed, at any depth.
///
/// Array elements are kept as they are, apart from mappings nested in them.
fn without_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, nested)| !nested.is_null())
                .map(|(key, nested)| (key.clone(), without_nulls(nested)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(without_nulls).collect()),
        other => other.clone(),
    }
}
