//! Lenient serde adapters for descriptive backend fields.
//!
//! The backend hands database columns straight to JSON, so a DECIMAL income
//! arrives as `"12345.50"` and a numeric serial number as `120034`. Fields the
//! engine only displays go through these adapters: any scalar is accepted and
//! anything unusable becomes `None`, so a record is never rejected over them.
//!
//! Use with `#[serde(default, with = "lenient::text_option")]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// `Option<String>` accepting strings, numbers and booleans.
pub mod text_option {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        value.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        })
    }
}

/// `Option<f64>` accepting JSON numbers and numeric strings.
pub mod number_option {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        value.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().replace(',', ".").parse().ok(),
            _ => None,
        })
    }
}
