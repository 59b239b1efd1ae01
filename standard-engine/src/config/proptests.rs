//! Property-based tests for configuration merging on linter-shaped configs.

use super::merger::{equals, is_rule_entry, ConfigMerger, ConfigObject};
use proptest::prelude::*;
use serde_json::{json, Value};

// Strategy for severity tokens in both spellings
fn severity_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::sample::select(vec!["off", "warn", "error"]).prop_map(Value::from),
        (0i64..=2).prop_map(Value::from),
    ]
}

// Strategy for a rule entry: a severity optionally followed by settings
fn rule_entry_strategy() -> impl Strategy<Value = Value> {
    (
        severity_strategy(),
        prop::option::of(prop::sample::select(vec!["always", "never"])),
    )
        .prop_map(|(severity, setting)| match setting {
            Some(setting) => json!([severity, setting]),
            None => json!([severity]),
        })
}

// Strategy for collection arrays such as plugins or ignore patterns
fn pattern_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}/\\*\\*", 0..6)
}

// Strategy for plain lists that may happen to lead with a severity token
fn severity_led_list_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec(
        prop_oneof![severity_strategy(), "[a-c]{1,2}".prop_map(Value::from)],
        0..5,
    )
    .prop_map(Value::Array)
}

fn rules_strategy() -> impl Strategy<Value = ConfigObject> {
    prop::collection::btree_map("[a-z]{2,8}", rule_entry_strategy(), 0..6)
        .prop_map(|rules| rules.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Rule entries from the later layer always win unchanged
    #[test]
    fn rule_entries_replace_atomically(low in rules_strategy(), high in rules_strategy()) {
        let mut target = ConfigObject::new();
        target.insert("rules".to_string(), Value::Object(low.clone()));
        let mut source = ConfigObject::new();
        source.insert("rules".to_string(), Value::Object(high.clone()));

        let merged = ConfigMerger::merge(&target, &[Some(&source)]);
        let rules = merged["rules"].as_object().unwrap();

        for (name, entry) in &high {
            prop_assert!(equals(&rules[name], entry));
        }
        for (name, entry) in &low {
            if !high.contains_key(name) {
                prop_assert_eq!(&rules[name], entry);
            }
        }
    }

    // Collection arrays: target order first, then novel source items, no repeats
    #[test]
    fn collections_union_in_order(low in pattern_list_strategy(), high in pattern_list_strategy()) {
        let mut target = ConfigObject::new();
        target.insert("ignorePatterns".to_string(), json!(low));
        let mut source = ConfigObject::new();
        source.insert("ignorePatterns".to_string(), json!(high));

        let merged = ConfigMerger::merge(&target, &[Some(&source)]);
        let patterns: Vec<String> = serde_json::from_value(merged["ignorePatterns"].clone()).unwrap();

        if equals(&json!(low), &json!(high)) {
            prop_assert_eq!(&patterns, &low);
        } else {
            prop_assert_eq!(&patterns[..low.len()], &low[..]);
            for item in &high {
                prop_assert!(patterns.contains(item));
            }
            for item in &patterns[low.len()..] {
                prop_assert_eq!(patterns.iter().filter(|p| *p == item).count(), 1);
                prop_assert!(!low.contains(item));
            }
        }
    }

    // Later layers have strictly higher precedence for scalars
    #[test]
    fn later_layers_win(
        values in prop::collection::vec(prop::option::of("[a-z]{1,8}"), 1..6)
    ) {
        let layers: Vec<ConfigObject> = values
            .iter()
            .map(|value| {
                let mut layer = ConfigObject::new();
                layer.insert("parser".to_string(), value.clone().map_or(Value::Null, Value::from));
                layer
            })
            .collect();
        let sources: Vec<Option<&ConfigObject>> = layers.iter().map(Some).collect();

        let merged = ConfigMerger::merge(&ConfigObject::new(), &sources);
        let expected = values.iter().rev().flatten().next();

        prop_assert_eq!(merged.get("parser").and_then(Value::as_str), expected.map(String::as_str));
    }

    // Applying the same layer a second time changes nothing
    #[test]
    fn reapplying_a_layer_is_stable(
        low in severity_led_list_strategy(),
        high in severity_led_list_strategy(),
    ) {
        let mut target = ConfigObject::new();
        target.insert("plugins".to_string(), low);
        let mut source = ConfigObject::new();
        source.insert("plugins".to_string(), high);

        let once = ConfigMerger::merge(&target, &[Some(&source)]);
        let twice = ConfigMerger::merge(&once, &[Some(&source)]);
        prop_assert!(equals(&once["plugins"], &twice["plugins"]));
    }

    // Every generated rule entry is classified as one
    #[test]
    fn generated_rule_entries_are_classified(entry in rule_entry_strategy()) {
        prop_assert!(is_rule_entry(entry.as_array().unwrap()));
    }
}
