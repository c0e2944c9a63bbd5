//! The shape registry.
//!
//! Shapes and enum tables are registered once at process start; the
//! registry is read-only afterwards, which is what makes concurrent
//! decodes coordination-free. Specialization is flattened here, at
//! registration time: a resolved shape is one flat field list with
//! overrides already applied, so the decoder never dispatches on types
//! or walks base links.

use std::collections::HashMap;

use osuwire_types::EnumTable;
use tracing::debug;

use crate::error::{DecodeError, RegistryError};
use crate::shape::{FieldKind, FieldSpec, Shape};

/// A shape with its specialization chain flattened into one field list.
///
/// Field order is base-first, subclass fields appended; an overridden
/// field keeps its base position.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedShape {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

/// Holds every registered shape and enum table.
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    shapes: HashMap<String, Shape>,
    resolved: HashMap<String, ResolvedShape>,
    enums: HashMap<String, EnumTable>,
}

impl ShapeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one enum tag table.
    ///
    /// Fails with [`RegistryError::DuplicateEntity`] if the name is taken
    /// and [`RegistryError::ShapeConflict`] if two variants share a tag.
    pub fn register_enum(&mut self, table: EnumTable) -> Result<(), RegistryError> {
        if self.enums.contains_key(table.name) {
            return Err(RegistryError::DuplicateEntity(table.name.to_string()));
        }
        if let Some(tag) = table.duplicate_tag() {
            return Err(RegistryError::ShapeConflict {
                shape: table.name.to_string(),
                detail: format!("duplicate wire tag {tag:?}"),
            });
        }
        self.enums.insert(table.name.to_string(), table);
        Ok(())
    }

    /// Registers one shape. The declared base, if any, must already be
    /// registered; use [`ShapeRegistry::register_many`] for batches with
    /// interdependent shapes.
    pub fn register(&mut self, shape: Shape) -> Result<(), RegistryError> {
        if self.shapes.contains_key(&shape.name) {
            return Err(RegistryError::DuplicateEntity(shape.name.clone()));
        }
        let fields = flatten(&shape.name, &shape, &self.shapes, &self.enums, &mut Vec::new())?;
        debug!(shape = %shape.name, fields = fields.len(), "registered shape");
        self.resolved.insert(
            shape.name.clone(),
            ResolvedShape {
                name: shape.name.clone(),
                fields,
            },
        );
        self.shapes.insert(shape.name.clone(), shape);
        Ok(())
    }

    /// Registers a batch of shapes, all or nothing.
    ///
    /// Names are visible to each other during resolution, so a shape may
    /// specialize another member of the same batch regardless of order.
    /// On any error the registry is left exactly as it was.
    pub fn register_many(&mut self, batch: Vec<Shape>) -> Result<(), RegistryError> {
        let mut combined = self.shapes.clone();
        for shape in &batch {
            if combined.contains_key(&shape.name) {
                return Err(RegistryError::DuplicateEntity(shape.name.clone()));
            }
            combined.insert(shape.name.clone(), shape.clone());
        }

        let mut resolved = Vec::with_capacity(batch.len());
        for shape in &batch {
            let fields = flatten(&shape.name, shape, &combined, &self.enums, &mut Vec::new())?;
            resolved.push(ResolvedShape {
                name: shape.name.clone(),
                fields,
            });
        }

        debug!(shapes = batch.len(), "registered shape batch");
        for (shape, resolved) in batch.into_iter().zip(resolved) {
            self.resolved.insert(shape.name.clone(), resolved);
            self.shapes.insert(shape.name.clone(), shape);
        }
        Ok(())
    }

    /// Looks up the flattened field set for a shape name.
    pub fn resolve(&self, name: &str) -> Result<&ResolvedShape, DecodeError> {
        self.resolved
            .get(name)
            .ok_or_else(|| DecodeError::UnknownEntity(name.to_string()))
    }

    /// Looks up an enum tag table by name.
    #[must_use]
    pub fn enum_table(&self, name: &str) -> Option<&EnumTable> {
        self.enums.get(name)
    }

    /// Returns true if a shape with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.resolved.contains_key(name)
    }

    /// Number of registered shapes.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.resolved.len()
    }
}

/// Flattens `shape` against the full declaration map.
///
/// `stack` carries the names currently being flattened; a base link
/// back into it means the specialization graph has a cycle. The cycle
/// check runs before the base lookup so that a self-specializing shape
/// is reported as cyclic even when its base is not (yet) registered.
fn flatten(
    name: &str,
    shape: &Shape,
    shapes: &HashMap<String, Shape>,
    enums: &HashMap<String, EnumTable>,
    stack: &mut Vec<String>,
) -> Result<Vec<FieldSpec>, RegistryError> {
    stack.push(name.to_string());

    let base_fields = match &shape.base {
        None => Vec::new(),
        Some(base_name) => {
            if stack.iter().any(|n| n == base_name) {
                return Err(RegistryError::CyclicSpecialization(base_name.clone()));
            }
            let base = shapes.get(base_name).ok_or_else(|| RegistryError::ShapeConflict {
                shape: name.to_string(),
                detail: format!("base {base_name:?} is not registered"),
            })?;
            flatten(base_name, base, shapes, enums, stack)?
        }
    };
    stack.pop();

    let mut fields = base_fields;
    let base_len = fields.len();

    for spec in &shape.fields {
        if fields.iter().any(|f| f.wire_key == spec.wire_key) {
            let detail = if fields[..base_len].iter().any(|f| f.wire_key == spec.wire_key) {
                format!(
                    "field {:?} re-declares an inherited wire key; use an override",
                    spec.wire_key
                )
            } else {
                format!("duplicate wire key {:?}", spec.wire_key)
            };
            return Err(RegistryError::ShapeConflict {
                shape: name.to_string(),
                detail,
            });
        }
        check_enum_refs(name, &spec.wire_key, &spec.kind, enums)?;
        fields.push(spec.clone());
    }

    for spec in &shape.overrides {
        // Overrides target inherited fields only; the key keeps its
        // base position so field order is stable across specialization.
        let slot = fields[..base_len]
            .iter()
            .position(|f| f.wire_key == spec.wire_key)
            .ok_or_else(|| RegistryError::ShapeConflict {
                shape: name.to_string(),
                detail: format!(
                    "override targets {:?}, which no base field declares",
                    spec.wire_key
                ),
            })?;
        check_enum_refs(name, &spec.wire_key, &spec.kind, enums)?;
        fields[slot] = spec.clone();
    }

    Ok(fields)
}

/// Enum references are checked eagerly — decoding needs the tag table —
/// while entity references stay lazy so mutually-referencing shapes can
/// be declared in any order.
fn check_enum_refs(
    shape: &str,
    wire_key: &str,
    kind: &FieldKind,
    enums: &HashMap<String, EnumTable>,
) -> Result<(), RegistryError> {
    match kind {
        FieldKind::Enum(enum_name) => {
            if !enums.contains_key(enum_name) {
                return Err(RegistryError::ShapeConflict {
                    shape: shape.to_string(),
                    detail: format!(
                        "field {wire_key:?} references unregistered enum {enum_name:?}"
                    ),
                });
            }
            Ok(())
        }
        FieldKind::List(inner) => check_enum_refs(shape, wire_key, inner, enums),
        _ => Ok(()),
    }
}
