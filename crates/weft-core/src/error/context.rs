//! Structured diagnostic context attached to errors

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Key/value diagnostics carried by a [`WeftError`](super::WeftError).
///
/// Keys are unique; a later insert for the same key overwrites the earlier
/// value. Iteration is sorted by key so renderings are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorContext(BTreeMap<String, Value>);

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, overwriting any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert a string only when one was supplied and it is non-empty.
    pub fn insert_str_if_present(&mut self, key: &str, value: Option<String>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.0.insert(key.to_string(), Value::String(value));
        }
    }

    /// Insert a duration as float seconds when one was supplied.
    pub fn insert_duration_if_present(&mut self, key: &str, value: Option<Duration>) {
        if let Some(value) = value {
            self.0
                .insert(key.to_string(), Value::from(value.as_secs_f64()));
        }
    }

    /// Copy every entry of `other` into `self`, `other` winning on conflicts.
    pub fn extend(&mut self, other: ErrorContext) {
        self.0.extend(other.0);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value for `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> BTreeMap<String, Value> {
        self.0
    }

    /// The context as a single JSON object value.
    pub fn to_json_value(&self) -> Value {
        Value::Object(self.0.clone().into_iter().collect())
    }
}

impl From<BTreeMap<String, Value>> for ErrorContext {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ErrorContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a ErrorContext {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders as `{"key": value, ...}` with values in JSON form.
impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", Value::String(key.clone()), value)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_overwrites() {
        let mut ctx = ErrorContext::new();
        ctx.insert("attempt", 1);
        ctx.insert("attempt", 2);
        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.get("attempt"), Some(&json!(2)));
    }

    #[test]
    fn test_insert_str_if_present_skips_missing_and_empty() {
        let mut ctx = ErrorContext::new();
        ctx.insert_str_if_present("a", None);
        ctx.insert_str_if_present("b", Some(String::new()));
        ctx.insert_str_if_present("c", Some("value".to_string()));
        assert!(!ctx.contains_key("a"));
        assert!(!ctx.contains_key("b"));
        assert_eq!(ctx.get_str("c"), Some("value"));
    }

    #[test]
    fn test_insert_duration_keeps_zero() {
        let mut ctx = ErrorContext::new();
        ctx.insert_duration_if_present("none", None);
        ctx.insert_duration_if_present("zero", Some(Duration::ZERO));
        ctx.insert_duration_if_present("half", Some(Duration::from_millis(1500)));
        assert!(!ctx.contains_key("none"));
        assert_eq!(ctx.get("zero"), Some(&json!(0.0)));
        assert_eq!(ctx.get("half"), Some(&json!(1.5)));
    }

    #[test]
    fn test_display_is_sorted_json_like() {
        let ctx: ErrorContext = [("state_type", json!("session")), ("attempt", json!(3))]
            .into_iter()
            .collect();
        assert_eq!(ctx.to_string(), r#"{"attempt": 3, "state_type": "session"}"#);
        assert_eq!(ErrorContext::new().to_string(), "{}");
    }

    #[test]
    fn test_display_escapes_keys_as_json() {
        let mut ctx = ErrorContext::new();
        ctx.insert("tab\there", "line\nbreak");
        assert_eq!(ctx.to_string(), r#"{"tab\there": "line\nbreak"}"#);

        let mut ctx = ErrorContext::new();
        ctx.insert("bell\u{7}", 1);
        let rendered = ctx.to_string();
        let key_json = serde_json::to_string("bell\u{7}").unwrap();
        assert_eq!(rendered, format!("{{{}: 1}}", key_json));
        assert!(rendered.contains("\\u0007"));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut ctx = ErrorContext::new();
        ctx.insert("node_id", "planner");
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value, json!({"node_id": "planner"}));
        assert_eq!(ctx.to_json_value(), value);
    }
}
