//! Encoding entities back to wire JSON.
//!
//! The inverse of decoding: every converter used here is the inverse of
//! the one that produced the value, so `encode(decode(json))` reproduces
//! `json` modulo keys the shape never declared. Absent optional fields
//! encode as key omission.

use serde_json::{Map, Value};

use crate::value::{Entity, FieldValue};

impl Entity {
    /// Serializes this entity to its wire representation.
    #[must_use]
    pub fn to_wire(&self) -> Value {
        let mut obj = Map::new();
        for (key, value) in &self.fields {
            if let Some(encoded) = value.to_wire() {
                obj.insert(key.clone(), encoded);
            }
        }
        Value::Object(obj)
    }
}

impl FieldValue {
    /// Serializes one field value; `None` means omit the key.
    #[must_use]
    pub fn to_wire(&self) -> Option<Value> {
        match self {
            Self::Absent => None,
            Self::Str(s) => Some(Value::String(s.clone())),
            Self::Int(n) => Some(Value::from(*n)),
            Self::Float(n) => Some(Value::Number(n.clone())),
            Self::Bool(b) => Some(Value::Bool(*b)),
            Self::Enum(tag) => Some(Value::String(tag.clone())),
            Self::Duration(d) => Some(Value::from(d.get())),
            Self::Timestamp(t) => Some(Value::String(t.to_wire())),
            Self::Entity(e) => Some(e.to_wire()),
            Self::List(items) => Some(Value::Array(
                items.iter().filter_map(FieldValue::to_wire).collect(),
            )),
            Self::Opaque(v) => Some(v.clone()),
        }
    }
}
