//! The dynamic value model and tag resolution.
//!
//! This module provides the [`Value`] enum that represents all shapes of
//! heterogeneous, dynamically-typed data the inspector understands.
//! Values are either leaves (primitives, dates, functions) or branches
//! (sequences and keyed structures whose children can be visited), plus
//! two nominal wrappers: class instances and explicitly labeled values.
//!
//! # Core Types
//!
//! - [`Value`] - the closed sum type over all representational categories
//! - [`Object`] - insertion-ordered plain keyed structure
//! - [`Map`] / [`Set`] - insertion-ordered collections
//! - [`Function`] / [`Instance`] - nominal leaf and instance shapes

use std::fmt;

use chrono::{DateTime, Utc};

// Submodules
pub mod json;
pub mod map;
pub mod object;
pub mod set;

// Convenience re-exports for the core value types
pub use map::Map;
pub use object::Object;
pub use set::Set;

/// A function value.
///
/// Functions are always leaves and always resolve to the tag
/// `"Function"`, whether named or anonymous; the name only shows up in
/// display output.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Function {
    name: Option<String>,
}

impl Function {
    /// Creates a named function value.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Creates an anonymous function value.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Returns the function's name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "[Function: {name}]"),
            None => write!(f, "[Function (anonymous)]"),
        }
    }
}

/// An instance of a named class.
///
/// Instances are keyed like objects but are *not* plain objects: they
/// are never coercible into a child sequence, and their tag is the
/// class name rather than the generic `"Object"`. An empty class name
/// models an anonymous class and falls back to `"Object"`.
///
/// # Examples
///
/// ```
/// use tagstat::{Instance, Value};
///
/// let dog = Value::from(Instance::new("Dog"));
/// assert_eq!(dog.tag(), "Dog");
///
/// let anonymous = Value::from(Instance::new(""));
/// assert_eq!(anonymous.tag(), "Object");
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Instance {
    class: String,
    fields: Object,
}

impl Instance {
    /// Creates an instance of the given class with no fields.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: Object::new(),
        }
    }

    /// Creates an instance of the given class with the given fields.
    pub fn with_fields(class: impl Into<String>, fields: Object) -> Self {
        Self {
            class: class.into(),
            fields,
        }
    }

    /// Returns the class name (may be empty for anonymous classes).
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Returns the instance's fields.
    pub fn fields(&self) -> &Object {
        &self.fields
    }

    /// Sets a field on the instance.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.set(key, value);
        self
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.class.is_empty() {
            write!(f, "{}", self.fields)
        } else {
            write!(f, "{} {}", self.class, self.fields)
        }
    }
}

/// A heterogeneous dynamic value.
///
/// `Value` is the closed sum type the inspector traverses. Each variant
/// belongs to one of three groups:
///
/// ## Leaf variants (never decomposed)
/// - [`Value::Undefined`] / [`Value::Null`] - absent-value kinds, each
///   with its own distinct tag
/// - [`Value::Bool`], [`Value::Int`], [`Value::Float`], [`Value::Text`] -
///   primitives (`Int` and `Float` both tag as `"Number"`; NaN needs no
///   special case)
/// - [`Value::Date`], [`Value::Function`] - built-in object kinds that
///   carry no visitable children
///
/// ## Branch variants (coercible into a child sequence)
/// - [`Value::List`] - ordered sequence, tag `"Array"`
/// - [`Value::Set`] - insertion-ordered distinct elements, tag `"Set"`
/// - [`Value::Map`] - keyed entries, tag `"Map"`; iteration yields the
///   *entries*, each viewed as a two-element sequence
/// - [`Value::Object`] - plain keyed structure, tag `"Object"`;
///   iteration yields its field values in key insertion order
/// - [`Value::Iterable`] - a custom sequence-producing object, tag
///   `"Object"`; iteration yields the produced items
///
/// ## Nominal wrappers
/// - [`Value::Instance`] - class instance, tagged by class name, never
///   coercible
/// - [`Value::Labeled`] - a value carrying an explicit description
///   label that wins over every other tag resolution rule; coercibility
///   delegates to the wrapped value
///
/// # Tag Resolution
///
/// ```
/// use tagstat::{Instance, Value};
///
/// // An explicit label always wins, even over a named class.
/// let cat = Value::labeled("Kitten", Instance::new("Cat"));
/// assert_eq!(cat.tag(), "Kitten");
///
/// // A named class wins over the generic fallback.
/// assert_eq!(Value::from(Instance::new("Dog")).tag(), "Dog");
///
/// // Everything else derives a canonical category name.
/// assert_eq!(Value::Null.tag(), "Null");
/// assert_eq!(Value::Float(f64::NAN).tag(), "Number");
/// ```
///
/// # Direct Comparisons
///
/// `Value` implements `PartialEq` with primitive types for ergonomic
/// comparisons:
///
/// ```
/// use tagstat::Value;
///
/// assert!(Value::from("hello") == "hello");
/// assert!(Value::Int(42) == 42);
/// assert!(true == Value::Bool(true));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    // Leaf values (terminal nodes)
    /// The undefined/absent value
    Undefined,
    /// The null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer number
    Int(i64),
    /// Floating point number (including NaN and the infinities)
    Float(f64),
    /// Text string value (a string is a leaf, never a sequence)
    Text(String),
    /// Calendar date-time value
    Date(DateTime<Utc>),
    /// Function value, named or anonymous
    Function(Function),

    // Branch values (can contain other values)
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Insertion-ordered distinct elements
    Set(Set),
    /// Insertion-ordered entries keyed by arbitrary values
    Map(Map),
    /// Plain keyed structure
    Object(Object),
    /// Custom sequence-producing object yielding the given items
    Iterable(Vec<Value>),

    // Nominal wrappers
    /// Instance of a named class
    Instance(Instance),
    /// Value carrying an explicit description label
    Labeled {
        /// The self-declared label, returned verbatim by [`Value::tag`]
        label: String,
        /// The wrapped value; coercibility delegates to it
        value: Box<Value>,
    },
}

impl Value {
    /// Wraps a value with an explicit description label.
    ///
    /// The label wins over every other tag resolution rule, including a
    /// named class on the wrapped value.
    pub fn labeled(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Value::Labeled {
            label: label.into(),
            value: Box::new(value.into()),
        }
    }

    /// Resolves this value's tag.
    ///
    /// Total and pure: every value resolves to a non-empty tag, and the
    /// same value always resolves to the same tag. Resolution order:
    ///
    /// 1. an explicit label, verbatim;
    /// 2. a non-empty class name on an instance;
    /// 3. the canonical category name (`"Null"`, `"Undefined"`,
    ///    `"Number"`, `"String"`, `"Boolean"`, `"Date"`, `"Function"`,
    ///    `"Array"`, `"Set"`, `"Map"`, `"Object"`).
    pub fn tag(&self) -> &str {
        match self {
            Value::Labeled { label, .. } => label,
            Value::Instance(instance) if !instance.class().is_empty() => instance.class(),
            // Anonymous classes fall through to the generic category.
            Value::Instance(_) => "Object",
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Bool(_) => "Boolean",
            Value::Int(_) | Value::Float(_) => "Number",
            Value::Text(_) => "String",
            Value::Date(_) => "Date",
            Value::Function(_) => "Function",
            Value::List(_) => "Array",
            Value::Set(_) => "Set",
            Value::Map(_) => "Map",
            Value::Object(_) | Value::Iterable(_) => "Object",
        }
    }

    /// Returns true if this value can be viewed as a sequence of
    /// children for further inspection.
    pub fn is_coercible(&self) -> bool {
        match self {
            Value::List(_)
            | Value::Set(_)
            | Value::Map(_)
            | Value::Object(_)
            | Value::Iterable(_) => true,
            Value::Labeled { value, .. } => value.is_coercible(),
            _ => false,
        }
    }

    /// Returns true if this value is tagged directly rather than
    /// decomposed during traversal.
    pub fn is_leaf(&self) -> bool {
        !self.is_coercible()
    }

    /// Returns true if this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is the undefined value.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Attempts to convert to a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a number, widening integers to floats.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Attempts to convert to a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a list slice.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to an object reference.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Attempts to convert to a map reference.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a set reference.
    pub fn as_set(&self) -> Option<&Set> {
        match self {
            Value::Set(set) => Some(set),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) if x.is_nan() => write!(f, "NaN"),
            Value::Float(x) if x.is_infinite() => {
                write!(f, "{}Infinity", if *x < 0.0 { "-" } else { "" })
            }
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Date(d) => write!(f, "{}", d.to_rfc3339()),
            Value::Function(function) => write!(f, "{function}"),
            Value::List(items) | Value::Iterable(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Set(set) => write!(f, "{set}"),
            Value::Map(map) => write!(f, "{map}"),
            Value::Object(object) => write!(f, "{object}"),
            Value::Instance(instance) => write!(f, "{instance}"),
            Value::Labeled { value, .. } => write!(f, "{value}"),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Set> for Value {
    fn from(value: Set) -> Self {
        Value::Set(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Instance> for Value {
    fn from(value: Instance) -> Self {
        Value::Instance(value)
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Value::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Value::Int(n) => *n == *other as i64,
            _ => false,
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        match self {
            Value::Float(x) => x == other,
            _ => false,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Value::Bool(b) => b == other,
            _ => false,
        }
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for f64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
