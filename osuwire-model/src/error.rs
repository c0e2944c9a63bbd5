//! Error types for shape registration and decoding.

use thiserror::Error;

/// Registration-time errors. These indicate a malformed catalog and are
/// fatal at process start; none of them can occur during decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A shape or enum with this name is already registered.
    #[error("entity {0:?} is already registered")]
    DuplicateEntity(String),

    /// A shape declaration contradicts itself or its base.
    #[error("shape conflict in {shape:?}: {detail}")]
    ShapeConflict { shape: String, detail: String },

    /// The specialization graph contains a cycle through this shape.
    #[error("cyclic specialization through {0:?}")]
    CyclicSpecialization(String),
}

/// Why a present field's value could not be decoded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldCause {
    /// A scalar converter rejected the wire value.
    #[error(transparent)]
    Convert(#[from] osuwire_types::Error),

    /// The JSON value has the wrong primitive type for the field.
    #[error("expected {expected}")]
    WrongType { expected: &'static str },

    /// A nested entity or list element failed to decode.
    #[error("{0}")]
    Nested(Box<DecodeError>),
}

/// Decode-time errors. Always recoverable by the caller; the offending
/// payload should be surfaced alongside for diagnostics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// No shape is registered under this name.
    #[error("unknown entity shape {0:?}")]
    UnknownEntity(String),

    /// The payload is not a JSON object.
    #[error("shape {0:?} expects a JSON object")]
    ExpectedObject(String),

    /// A required field was omitted or explicitly null.
    #[error("missing required field {0:?}")]
    MissingField(String),

    /// A present field's value was rejected. For sequence fields,
    /// `index` names the first element that failed.
    #[error("invalid value for field {key:?}{}: {cause}", index_suffix(.index))]
    InvalidFieldValue {
        key: String,
        index: Option<usize>,
        cause: FieldCause,
    },
}

fn index_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {i}"),
        None => String::new(),
    }
}
