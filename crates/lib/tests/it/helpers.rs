//! Shared fixture builders for the integration tests.

use chrono::{TimeZone, Utc};
use tagstat::{Object, Value};

/// The `{x: 10, y: 20, exists: true, name: "p1"}` particle object.
pub fn particle() -> Value {
    let mut object = Object::new();
    object
        .set("x", 10)
        .set("y", 20)
        .set("exists", true)
        .set("name", "p1");
    object.into()
}

/// A fixed date value for deterministic fixtures.
pub fn some_date() -> Value {
    Value::Date(Utc.with_ymd_and_hms(2017, 6, 1, 12, 0, 0).unwrap())
}

/// `{obj: {x: 10}, arr: [1, 2, [3, 4]]}` - five numeric leaves under
/// unbounded depth, one object and one array when kept flat.
pub fn nested_mixture() -> Value {
    let mut object = Object::new();
    object.set("obj", Object::from_iter([("x", 10)]));
    object.set(
        "arr",
        vec![
            Value::Int(1),
            Value::Int(2),
            Value::List(vec![Value::Int(3), Value::Int(4)]),
        ],
    );
    object.into()
}

/// A chain of single-key objects `depth` levels tall with `true` at the
/// bottom: `{1: {2: ... {depth: true}}}`.
pub fn object_chain(depth: usize) -> Value {
    let mut value = Value::Bool(true);
    for level in (1..=depth).rev() {
        let mut object = Object::new();
        object.set(level.to_string(), value);
        value = object.into();
    }
    value
}

/// Sum of all counts in a result mapping.
pub fn total(counts: &tagstat::TagCounts) -> usize {
    counts.values().sum()
}
