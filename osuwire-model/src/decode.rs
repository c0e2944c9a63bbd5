//! Decoding JSON payloads into entities.
//!
//! The algorithm walks the resolved field set, never the raw JSON: keys
//! the shape does not declare are ignored so the client survives additive
//! API changes. Decoding is all-or-nothing — the first failure aborts the
//! whole entity and no partial instance escapes.

use serde_json::Value;

use crate::error::{DecodeError, FieldCause};
use crate::registry::ShapeRegistry;
use crate::shape::{Cardinality, FieldKind};
use crate::value::{Entity, FieldValue};

impl ShapeRegistry {
    /// Decodes a JSON payload under the named shape.
    ///
    /// Required fields that are omitted or explicitly `null` fail with
    /// [`DecodeError::MissingField`]; optional ones decode to
    /// [`FieldValue::Absent`] without invoking any converter.
    pub fn decode(&self, json: &Value, shape_name: &str) -> Result<Entity, DecodeError> {
        let resolved = self.resolve(shape_name)?;
        let obj = json
            .as_object()
            .ok_or_else(|| DecodeError::ExpectedObject(shape_name.to_string()))?;

        let mut entity = Entity::new(shape_name);
        for spec in &resolved.fields {
            let value = match obj.get(&spec.wire_key) {
                None | Some(Value::Null) => match spec.cardinality {
                    Cardinality::Required => {
                        return Err(DecodeError::MissingField(spec.wire_key.clone()));
                    }
                    Cardinality::Optional => FieldValue::Absent,
                },
                Some(raw) => self.decode_value(raw, &spec.kind).map_err(|(index, cause)| {
                    DecodeError::InvalidFieldValue {
                        key: spec.wire_key.clone(),
                        index,
                        cause,
                    }
                })?,
            };
            entity.fields.insert(spec.wire_key.clone(), value);
        }
        Ok(entity)
    }

    /// Decodes one present value. The error side carries the sequence
    /// index when the failure happened inside a list element.
    fn decode_value(
        &self,
        raw: &Value,
        kind: &FieldKind,
    ) -> Result<FieldValue, (Option<usize>, FieldCause)> {
        match kind {
            FieldKind::Str => match raw.as_str() {
                Some(s) => Ok(FieldValue::Str(s.to_string())),
                None => Err((None, wrong_type("a string"))),
            },
            FieldKind::Int => match raw.as_i64() {
                Some(n) => Ok(FieldValue::Int(n)),
                None => Err((None, wrong_type("an integer"))),
            },
            // The number is kept as-is: osu-web sends whole-valued
            // floats without a decimal point, and re-encoding must
            // reproduce that.
            FieldKind::Float => match raw {
                Value::Number(n) => Ok(FieldValue::Float(n.clone())),
                _ => Err((None, wrong_type("a number"))),
            },
            FieldKind::Bool => match raw.as_bool() {
                Some(b) => Ok(FieldValue::Bool(b)),
                None => Err((None, wrong_type("a boolean"))),
            },
            FieldKind::Enum(enum_name) => {
                let tag = raw.as_str().ok_or((None, wrong_type("an enum tag string")))?;
                let table = self.enum_table(enum_name).ok_or((
                    None,
                    FieldCause::Nested(Box::new(DecodeError::UnknownEntity(enum_name.clone()))),
                ))?;
                if !table.contains(tag) {
                    return Err((
                        None,
                        FieldCause::Convert(osuwire_types::Error::UnknownTag {
                            enum_name: table.name,
                            tag: tag.to_string(),
                        }),
                    ));
                }
                Ok(FieldValue::Enum(tag.to_string()))
            }
            FieldKind::DurationSecs => match raw.as_i64() {
                Some(n) => Ok(FieldValue::Duration(osuwire_types::Seconds::new(n))),
                None => Err((None, wrong_type("whole seconds"))),
            },
            FieldKind::Timestamp => {
                let s = raw.as_str().ok_or((None, wrong_type("a timestamp string")))?;
                osuwire_types::Timestamp::parse(s)
                    .map(FieldValue::Timestamp)
                    .map_err(|e| (None, FieldCause::Convert(e)))
            }
            FieldKind::Entity(shape_name) => self
                .decode(raw, shape_name)
                .map(|e| FieldValue::Entity(Box::new(e)))
                .map_err(|e| (None, FieldCause::Nested(Box::new(e)))),
            FieldKind::List(inner) => {
                let items = raw.as_array().ok_or((None, wrong_type("an array")))?;
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    // Fail fast: the first bad element aborts the field.
                    let value = self
                        .decode_value(item, inner)
                        .map_err(|(_, cause)| (Some(i), cause))?;
                    out.push(value);
                }
                Ok(FieldValue::List(out))
            }
            FieldKind::Opaque => Ok(FieldValue::Opaque(raw.clone())),
        }
    }
}

fn wrong_type(expected: &'static str) -> FieldCause {
    FieldCause::WrongType { expected }
}
