//! Integration tests for the public inspection API.

use tagstat::{
    DEFAULT_MAX_DEPTH, Function, Inspector, Map, Object, Set, Value, inspect_deep,
    inspect_deep_bounded, inspect_shallow,
};

use super::helpers::*;

// ===== MODULE SURFACE =====

#[test]
fn version_is_exposed() {
    assert!(!tagstat::VERSION.is_empty());
}

#[test]
fn default_max_depth_is_six() {
    assert_eq!(DEFAULT_MAX_DEPTH, 6);
    assert_eq!(Inspector::new().max_depth(), 6);
    assert_eq!(Inspector::default(), Inspector::new());
}

// ===== INPUT CONTRACT =====

#[test]
fn shallow_requires_a_coercible_input() {
    let err = inspect_shallow(&Value::from("seed")).unwrap_err();
    assert!(err.is_input_error());
    assert_eq!(err.module(), "inspect");

    let err = inspect_shallow(&Value::Null).unwrap_err();
    assert!(err.is_input_error());
}

#[test]
fn deep_requires_a_coercible_input() {
    assert!(inspect_deep(&Value::Int(42)).unwrap_err().is_input_error());
    assert!(
        inspect_deep(&Value::from(Function::named("go")))
            .unwrap_err()
            .is_input_error()
    );
}

#[test]
fn input_error_identifies_the_offending_value() {
    let message = inspect_shallow(&Value::from("seed"))
        .unwrap_err()
        .to_string();
    assert_eq!(message, "seed isn't and can't be iterable");

    let message = inspect_shallow(&Value::Null).unwrap_err().to_string();
    assert!(message.starts_with("null "));
}

#[test]
fn a_class_instance_is_not_a_plain_object() {
    let dog = Value::from(tagstat::Instance::new("Dog"));
    assert!(inspect_shallow(&dog).unwrap_err().is_input_error());
}

// ===== SHALLOW INSPECTION =====

#[test]
fn shallow_collects_stats_over_plain_object_fields() {
    let counts = inspect_shallow(&particle()).unwrap();
    let expected: Vec<(&str, usize)> = vec![("Boolean", 1), ("Number", 2), ("String", 1)];
    let actual: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(actual, expected);
}

#[test]
fn shallow_collects_stats_over_a_list() {
    let list = Value::List(vec![
        Value::Float(f64::INFINITY),
        Value::from(Function::anonymous()),
        some_date(),
    ]);
    let counts = inspect_shallow(&list).unwrap();
    assert_eq!(counts.get("Number"), Some(&1));
    assert_eq!(counts.get("Function"), Some(&1));
    assert_eq!(counts.get("Date"), Some(&1));
    assert_eq!(total(&counts), 3);
}

#[test]
fn shallow_tags_map_entries_as_sequences() {
    let map: Map = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    let counts = inspect_shallow(&Value::from(map)).unwrap();
    assert_eq!(counts.get("Array"), Some(&3));
    assert_eq!(total(&counts), 3);
}

#[test]
fn shallow_counts_distinct_set_elements() {
    let set: Set = [1, 1, 2, 2, 3].into_iter().collect();
    let counts = inspect_shallow(&Value::from(set)).unwrap();
    assert_eq!(counts.get("Number"), Some(&3));
    assert_eq!(total(&counts), 3);
}

#[test]
fn shallow_walks_custom_iterables() {
    let items = (0..10).map(Value::Int).collect();
    let counts = inspect_shallow(&Value::Iterable(items)).unwrap();
    assert_eq!(counts.get("Number"), Some(&10));
}

#[test]
fn shallow_keeps_nested_containers_intact() {
    let counts = inspect_shallow(&nested_mixture()).unwrap();
    assert_eq!(counts.get("Object"), Some(&1));
    assert_eq!(counts.get("Array"), Some(&1));
    assert_eq!(total(&counts), 2);
}

#[test]
fn shallow_reports_explicit_labels() {
    let kitten = Value::labeled("Kitten", tagstat::Instance::new("Cat"));
    let counts = inspect_shallow(&Value::List(vec![kitten, Value::Int(1)])).unwrap();
    assert_eq!(counts.get("Kitten"), Some(&1));
    assert_eq!(counts.get("Number"), Some(&1));
}

#[test]
fn shallow_of_empty_container_is_empty() {
    assert!(inspect_shallow(&Value::from(Object::new())).unwrap().is_empty());
    assert!(inspect_shallow(&Value::List(vec![])).unwrap().is_empty());
}

// ===== DEEP INSPECTION =====

#[test]
fn deep_collects_stats_recursively() {
    let counts = inspect_deep(&nested_mixture()).unwrap();
    assert_eq!(counts.get("Number"), Some(&5));
    assert_eq!(total(&counts), 5);
}

#[test]
fn deep_respects_an_explicit_max_depth() {
    let counts = inspect_deep_bounded(&object_chain(3), 2).unwrap();
    assert_eq!(counts.get("Object"), Some(&1));
    assert_eq!(total(&counts), 1);
}

#[test]
fn deep_respects_the_default_max_depth() {
    let counts = inspect_deep(&object_chain(7)).unwrap();
    assert_eq!(counts.get("Object"), Some(&1));

    let counts = inspect_deep(&object_chain(6)).unwrap();
    assert_eq!(counts.get("Boolean"), Some(&1));
}

#[test]
fn deep_decomposes_map_entries_past_the_first_level() {
    let map: Map = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    let counts = inspect_deep(&Value::from(map)).unwrap();
    assert_eq!(counts.get("String"), Some(&3));
    assert_eq!(counts.get("Number"), Some(&3));
    assert_eq!(total(&counts), 6);
}

#[test]
fn unlimited_depth_reaches_every_leaf() {
    let counts = inspect_deep_bounded(&object_chain(40), 0).unwrap();
    assert_eq!(counts.get("Boolean"), Some(&1));
    assert_eq!(total(&counts), 1);

    let counts = inspect_deep_bounded(&nested_mixture(), 0).unwrap();
    assert_eq!(counts.get("Number"), Some(&5));
}

#[test]
fn a_limit_beyond_the_structure_changes_nothing() {
    let bounded = inspect_deep_bounded(&nested_mixture(), 50).unwrap();
    let unlimited = inspect_deep_bounded(&nested_mixture(), 0).unwrap();
    assert_eq!(bounded, unlimited);
}

// ===== EQUIVALENCES AND INVARIANTS =====

#[test]
fn shallow_is_deep_with_limit_one() {
    let inputs = [
        particle(),
        nested_mixture(),
        Value::from(Set::from_iter([1, 1, 2, 2, 3])),
        Value::from(Map::from_iter([("a", 1), ("b", 2)])),
        object_chain(4),
    ];
    for input in &inputs {
        assert_eq!(
            inspect_shallow(input).unwrap(),
            inspect_deep_bounded(input, 1).unwrap(),
        );
    }
}

#[test]
fn counts_sum_to_the_number_of_leaves() {
    // One tag per leaf, regardless of depth limit.
    let input = nested_mixture();
    assert_eq!(total(&inspect_shallow(&input).unwrap()), 2);
    assert_eq!(total(&inspect_deep_bounded(&input, 2).unwrap()), 4);
    assert_eq!(total(&inspect_deep(&input).unwrap()), 5);
}

#[test]
fn inspection_is_deterministic() {
    let input = nested_mixture();
    let first = inspect_deep(&input).unwrap();
    for _ in 0..3 {
        assert_eq!(inspect_deep(&input).unwrap(), first);
    }
}

#[test]
fn inspector_configuration_is_a_value() {
    let strict = Inspector::with_max_depth(2);
    let loose = Inspector::with_max_depth(0);
    let chain = object_chain(3);
    assert_eq!(strict.deep(&chain).unwrap().get("Object"), Some(&1));
    assert_eq!(loose.deep(&chain).unwrap().get("Boolean"), Some(&1));
    // The original inspector is unchanged by use.
    assert_eq!(strict.max_depth(), 2);
}
