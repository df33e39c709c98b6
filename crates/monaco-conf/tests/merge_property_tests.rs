use monaco_conf::merge::merged;
use proptest::prelude::*;
use serde_json::{Map, Value};

/// Strategy producing arbitrary JSON values an options table could hold.
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn json_object() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-z]{1,6}", json_value(), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn test_merging_a_map_with_itself_is_identity(map in json_object()) {
        let result = merged(&map, &map);
        prop_assert_eq!(&result, &map);
    }

    #[test]
    fn test_merge_with_empty_overlay_is_identity(base in json_object()) {
        let result = merged(&base, &Map::new());
        prop_assert_eq!(result, base);
    }

    #[test]
    fn test_overlay_keys_always_present_after_merge(
        base in json_object(),
        overlay in json_object(),
    ) {
        let result = merged(&base, &overlay);
        for key in overlay.keys() {
            prop_assert!(result.contains_key(key));
        }
    }

    #[test]
    fn test_base_only_keys_survive_unchanged(
        base in json_object(),
        overlay in json_object(),
    ) {
        let result = merged(&base, &overlay);
        for (key, value) in &base {
            if !overlay.contains_key(key) {
                prop_assert_eq!(result.get(key), Some(value));
            }
        }
    }

    #[test]
    fn test_non_object_overlay_values_always_win(
        base in json_object(),
        overlay in json_object(),
    ) {
        let result = merged(&base, &overlay);
        for (key, value) in &overlay {
            if !value.is_object() {
                prop_assert_eq!(result.get(key), Some(value));
            }
        }
    }
}
