//! Cell values
//!
//! A cell holds `Option<Value>`; `None` is the missing-value marker.

use std::fmt;

/// A single typed cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl Value {
    /// Infers a typed value from raw text read out of a CSV cell or XML attribute
    ///
    /// Empty text and `NaN` are missing. Otherwise the text is tried as an
    /// integer, then as a finite float, then as a boolean, and is kept as text
    /// when none of those apply.
    pub fn infer(raw: &str) -> Option<Value> {
        if raw.is_empty() {
            return None;
        }

        let trimmed = raw.trim();
        if let Ok(integer) = trimmed.parse::<i64>() {
            return Some(Value::Integer(integer));
        }
        if let Ok(float) = trimmed.parse::<f64>() {
            if float.is_nan() {
                return None;
            }
            if float.is_finite() {
                return Some(Value::Float(float));
            }
        }
        match trimmed {
            "true" | "True" | "TRUE" => Some(Value::Boolean(true)),
            "false" | "False" | "FALSE" => Some(Value::Boolean(false)),
            _ => Some(Value::Text(raw.to_string())),
        }
    }

    /// Maps a parsed JSON value onto a cell
    ///
    /// Arrays and objects are kept as their compact JSON text.
    pub fn from_json(value: serde_json::Value) -> Option<Value> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::Bool(flag) => Some(Value::Boolean(flag)),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(integer) => Some(Value::Integer(integer)),
                None => number.as_f64().map(Value::Float),
            },
            serde_json::Value::String(text) => Some(Value::Text(text)),
            nested @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Some(Value::Text(nested.to_string()))
            }
        }
    }

    /// Numeric view of the value, used by unit conversions
    ///
    /// Text is accepted when it parses as a finite number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(integer) => Some(*integer as f64),
            Value::Float(float) => Some(*float),
            Value::Boolean(_) => None,
            Value::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|float| float.is_finite()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(integer) => write!(f, "{integer}"),
            // Debug keeps the trailing `.0` on integral floats
            Value::Float(float) => write!(f, "{float:?}"),
            Value::Boolean(true) => f.write_str("True"),
            Value::Boolean(false) => f.write_str("False"),
            Value::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_infer_numbers() {
        assert_eq!(Value::infer("42"), Some(Value::Integer(42)));
        assert_eq!(Value::infer("-7"), Some(Value::Integer(-7)));
        assert_eq!(Value::infer("10.5"), Some(Value::Float(10.5)));
        assert_eq!(Value::infer("1e3"), Some(Value::Float(1000.0)));
        assert_eq!(Value::infer(" 12 "), Some(Value::Integer(12)));
    }

    #[test]
    fn test_infer_missing_values() {
        assert_eq!(Value::infer(""), None);
        assert_eq!(Value::infer("NaN"), None);
        assert_eq!(Value::infer("nan"), None);
    }

    #[test]
    fn test_infer_booleans_and_text() {
        assert_eq!(Value::infer("True"), Some(Value::Boolean(true)));
        assert_eq!(Value::infer("false"), Some(Value::Boolean(false)));
        assert_eq!(Value::infer("alex"), Some(Value::Text("alex".to_string())));
        assert_eq!(Value::infer("inf"), Some(Value::Text("inf".to_string())));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from_json(json!(null)), None);
        assert_eq!(Value::from_json(json!(3)), Some(Value::Integer(3)));
        assert_eq!(Value::from_json(json!(3.5)), Some(Value::Float(3.5)));
        assert_eq!(Value::from_json(json!(true)), Some(Value::Boolean(true)));
        assert_eq!(Value::from_json(json!("x")), Some(Value::Text("x".into())));
        assert_eq!(
            Value::from_json(json!([1, 2])),
            Some(Value::Text("[1,2]".into()))
        );
        assert_eq!(
            Value::from_json(json!(u64::MAX)),
            Some(Value::Float(u64::MAX as f64))
        );
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(Value::Integer(10).as_f64(), Some(10.0));
        assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::Text("60".into()).as_f64(), Some(60.0));
        assert_eq!(Value::Text("tall".into()).as_f64(), None);
        assert_eq!(Value::Boolean(true).as_f64(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Integer(5).to_string(), "5");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::Float(0.907184).to_string(), "0.907184");
        assert_eq!(Value::Boolean(true).to_string(), "True");
        assert_eq!(Value::Text("a,b".into()).to_string(), "a,b");
    }
}
