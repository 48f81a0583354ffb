//! JSON interop for the value model.
//!
//! Parsed JSON converts losslessly into [`Value`] (JSON has no
//! undefined, date, or function kinds), so JSON documents can be
//! inspected directly.

use super::{Object, Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // Out-of-range integers degrade to their float reading.
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl Value {
    /// Parses a JSON document into a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagstat::Value;
    ///
    /// let value = Value::from_json_str(r#"{"x": 10, "name": "p1"}"#).unwrap();
    /// assert_eq!(value.tag(), "Object");
    /// ```
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        Ok(parsed.into())
    }
}
