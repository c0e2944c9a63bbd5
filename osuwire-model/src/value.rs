//! Decoded entities and field values.

use osuwire_types::{Seconds, Timestamp, WireEnum};
use std::collections::BTreeMap;

/// One decoded field value.
///
/// [`FieldValue::Absent`] is the distinguished sentinel for an optional
/// field the payload omitted (or sent as `null`). It is distinct from
/// every valid scalar value — an absent integer is not `0`, an absent
/// string is not `""`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Absent,
    Str(String),
    Int(i64),
    /// Kept as the original JSON number so integral floats (`178`, not
    /// `178.0`) re-encode exactly as they arrived.
    Float(serde_json::Number),
    Bool(bool),
    /// The validated canonical wire tag of an enum value.
    Enum(String),
    Duration(Seconds),
    Timestamp(Timestamp),
    Entity(Box<Entity>),
    List(Vec<FieldValue>),
    /// Verbatim JSON for fields with unspecified semantics.
    Opaque(serde_json::Value),
}

impl FieldValue {
    /// Returns true for the absent sentinel.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// A decoded entity: the shape it was decoded under plus one value per
/// field in the resolved field set, keyed by wire key.
///
/// Entities own their nested entities outright; relations between shapes
/// (a beatmap naming its beatmapset) exist only where the payload
/// actually nested them, so no ownership cycle can form.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub shape: String,
    pub fields: BTreeMap<String, FieldValue>,
}

impl Entity {
    /// Creates an empty entity for the given shape.
    #[must_use]
    pub fn new(shape: &str) -> Self {
        Self {
            shape: shape.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Returns the raw value of a field, including the absent sentinel.
    #[must_use]
    pub fn get(&self, wire_key: &str) -> Option<&FieldValue> {
        self.fields.get(wire_key)
    }

    /// Extract a string field. `None` if absent or not a string.
    #[must_use]
    pub fn get_str(&self, wire_key: &str) -> Option<&str> {
        match self.get(wire_key)? {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extract an integer field.
    #[must_use]
    pub fn get_i64(&self, wire_key: &str) -> Option<i64> {
        match self.get(wire_key)? {
            FieldValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract a float field.
    #[must_use]
    pub fn get_f64(&self, wire_key: &str) -> Option<f64> {
        match self.get(wire_key)? {
            FieldValue::Float(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Extract a boolean field.
    #[must_use]
    pub fn get_bool(&self, wire_key: &str) -> Option<bool> {
        match self.get(wire_key)? {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract an enum field as its typed variant.
    ///
    /// The stored tag was validated against the enum's table at decode
    /// time, so this only returns `None` when the field is absent, not
    /// an enum field, or belongs to a different enum.
    #[must_use]
    pub fn get_enum<E: WireEnum>(&self, wire_key: &str) -> Option<E> {
        match self.get(wire_key)? {
            FieldValue::Enum(tag) => E::from_tag(tag).ok(),
            _ => None,
        }
    }

    /// Extract a duration field.
    #[must_use]
    pub fn get_duration(&self, wire_key: &str) -> Option<Seconds> {
        match self.get(wire_key)? {
            FieldValue::Duration(d) => Some(*d),
            _ => None,
        }
    }

    /// Extract a timestamp field.
    #[must_use]
    pub fn get_timestamp(&self, wire_key: &str) -> Option<Timestamp> {
        match self.get(wire_key)? {
            FieldValue::Timestamp(t) => Some(t.clone()),
            _ => None,
        }
    }

    /// Extract a nested entity field.
    #[must_use]
    pub fn get_entity(&self, wire_key: &str) -> Option<&Entity> {
        match self.get(wire_key)? {
            FieldValue::Entity(e) => Some(e),
            _ => None,
        }
    }

    /// Extract a list field.
    #[must_use]
    pub fn get_list(&self, wire_key: &str) -> Option<&[FieldValue]> {
        match self.get(wire_key)? {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns true if the field decoded to the absent sentinel.
    #[must_use]
    pub fn is_absent(&self, wire_key: &str) -> bool {
        matches!(self.get(wire_key), Some(FieldValue::Absent))
    }
}
