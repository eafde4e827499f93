//! Lenient accessors over a raw JSON object.

use serde_json::{Map, Value};

/// Read-only view of a raw JSON object with fallback-chain lookups.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a>(&'a Map<String, Value>);

impl<'a> Fields<'a> {
    pub(crate) fn new(raw: &'a Map<String, Value>) -> Self {
        Self(raw)
    }

    /// First non-null value among `keys`, in order.
    pub(crate) fn first(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| !value.is_null())
    }

    /// First non-null value among `keys`, if it is a string.
    pub(crate) fn text(&self, keys: &[&str]) -> Option<String> {
        self.first(keys).and_then(as_text)
    }

    /// First non-null value among `keys` as an id. Numeric ids are
    /// stringified.
    pub(crate) fn id(&self, keys: &[&str]) -> Option<String> {
        self.first(keys).and_then(as_id)
    }

    /// First non-null value among `keys`, parsed leniently as an integer.
    pub(crate) fn int(&self, keys: &[&str]) -> Option<i64> {
        self.first(keys).and_then(lenient_int)
    }

    /// First non-null value among `keys`, parsed leniently as a boolean.
    pub(crate) fn flag(&self, keys: &[&str]) -> Option<bool> {
        self.first(keys).and_then(lenient_bool)
    }
}

pub(crate) fn as_text(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

pub(crate) fn as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parses anything integer-like.
///
/// Accepts JSON integers, finite floats (truncated toward zero), and
/// strings that hold an integer once trimmed. Everything else, booleans
/// included, yields `None`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn lenient_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            if n.as_u64().is_some() {
                // Larger than i64::MAX.
                return None;
            }
            let f = n.as_f64()?.trunc();
            if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                Some(f as i64)
            } else {
                None
            }
        }
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parses a tri-state boolean.
///
/// Booleans pass through; the strings `true`/`yes`/`1` and `false`/`no`/`0`
/// (any case, surrounding whitespace ignored) map to `true` and `false`.
/// Anything else is unknown.
pub fn lenient_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_int() {
        assert_eq!(lenient_int(&json!(12)), Some(12));
        assert_eq!(lenient_int(&json!(-3)), Some(-3));
        assert_eq!(lenient_int(&json!(7.9)), Some(7));
        assert_eq!(lenient_int(&json!("  42 ")), Some(42));
        assert_eq!(lenient_int(&json!("+5")), Some(5));
        assert_eq!(lenient_int(&json!("4.5")), None);
        assert_eq!(lenient_int(&json!("many")), None);
        assert_eq!(lenient_int(&json!(true)), None);
        assert_eq!(lenient_int(&json!(null)), None);
        assert_eq!(lenient_int(&json!([1])), None);
        assert_eq!(lenient_int(&json!(u64::MAX)), None);
        assert_eq!(lenient_int(&json!(1e300)), None);
    }

    #[test]
    fn test_lenient_bool() {
        assert_eq!(lenient_bool(&json!(true)), Some(true));
        assert_eq!(lenient_bool(&json!(false)), Some(false));
        for s in ["true", "YES", " 1 ", "True"] {
            assert_eq!(lenient_bool(&json!(s)), Some(true), "Failed for {s:?}");
        }
        for s in ["false", "No", "0"] {
            assert_eq!(lenient_bool(&json!(s)), Some(false), "Failed for {s:?}");
        }
        assert_eq!(lenient_bool(&json!("maybe")), None);
        assert_eq!(lenient_bool(&json!(1)), None);
        assert_eq!(lenient_bool(&json!(null)), None);
    }

    #[test]
    fn test_first_skips_null_but_keeps_zero() {
        let raw = json!({"a": null, "b": 0, "c": 5});
        let fields = Fields::new(raw.as_object().unwrap());
        assert_eq!(fields.int(&["a", "b", "c"]), Some(0));
        assert_eq!(fields.int(&["missing", "c"]), Some(5));
        assert_eq!(fields.int(&["missing"]), None);
    }

    #[test]
    fn test_text_does_not_fall_through_on_wrong_type() {
        let raw = json!({"a": 3, "b": "text"});
        let fields = Fields::new(raw.as_object().unwrap());
        assert_eq!(fields.text(&["a", "b"]), None);
        assert_eq!(fields.id(&["a", "b"]), Some("3".to_string()));
    }
}
