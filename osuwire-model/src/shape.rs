//! Declarative shape tables.
//!
//! A [`Shape`] describes one entity as data: wire key, target kind and
//! cardinality per field, plus an optional specialization base and an
//! override list. Shapes are built once at startup and handed to the
//! registry, which flattens specialization into a single resolved field
//! set — the decoder never sees base links or overrides.

use serde::{Deserialize, Serialize};

/// The target kind a field decodes into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Str,
    Int,
    Float,
    Bool,
    /// A wire-string enum, validated against the named tag table.
    Enum(String),
    /// A duration wire-encoded as whole seconds.
    DurationSecs,
    /// An RFC 3339 timestamp.
    Timestamp,
    /// A nested entity, decoded under the named shape.
    Entity(String),
    /// A JSON array of the inner kind.
    List(Box<FieldKind>),
    /// Decoded and re-encoded verbatim; semantics unknown.
    Opaque,
}

/// Whether a field must be present on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    Required,
    /// Omission and explicit `null` both decode to the absent sentinel.
    Optional,
}

/// One field of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// The JSON object key used on the network.
    pub wire_key: String,
    pub kind: FieldKind,
    pub cardinality: Cardinality,
}

impl FieldSpec {
    fn new(wire_key: &str, kind: FieldKind, cardinality: Cardinality) -> Self {
        Self {
            wire_key: wire_key.into(),
            kind,
            cardinality,
        }
    }

    /// Shorthand for a required field.
    pub fn required(wire_key: &str, kind: FieldKind) -> Self {
        Self::new(wire_key, kind, Cardinality::Required)
    }

    /// Shorthand for an optional field.
    pub fn optional(wire_key: &str, kind: FieldKind) -> Self {
        Self::new(wire_key, kind, Cardinality::Optional)
    }
}

/// The declarative schema of one entity.
///
/// A specialized shape names its base and may override inherited fields
/// by wire key — overrides keep the key and may only change the target
/// kind (e.g. narrowing a nested relation to its extended shape) or the
/// cardinality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub name: String,
    pub base: Option<String>,
    pub fields: Vec<FieldSpec>,
    pub overrides: Vec<FieldSpec>,
}

impl Shape {
    /// Starts a shape with no base.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            base: None,
            fields: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// Starts a shape specializing `base`.
    #[must_use]
    pub fn extending(name: &str, base: &str) -> Self {
        Self {
            name: name.into(),
            base: Some(base.into()),
            fields: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Appends an override for a field inherited from the base.
    #[must_use]
    pub fn override_field(mut self, spec: FieldSpec) -> Self {
        self.overrides.push(spec);
        self
    }
}
