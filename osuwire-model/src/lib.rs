//! Typed model and conversion layer for the osu! v2 API.
//!
//! The API returns loosely-structured JSON whose shape varies by endpoint:
//! list views return base entities, detail views return "extended" variants
//! that add fields and narrow the type of nested relations. This crate
//! turns those payloads into typed entities through declarative shape
//! tables rather than per-entity deserializers:
//!
//! - [`Shape`] / [`FieldSpec`] — one entity's wire keys, target kinds and
//!   cardinalities, plus its specialization base and field overrides
//! - [`ShapeRegistry`] — holds every shape, flattens specialization chains
//!   at registration time, and drives [`ShapeRegistry::decode`]
//! - [`Entity`] / [`FieldValue`] — the decoded runtime representation,
//!   with a distinguished [`FieldValue::Absent`] sentinel for optional
//!   fields the payload omitted
//! - [`catalog`] — the full osu! entity catalog (users, beatmaps,
//!   beatmapsets, changelog), registered in one call
//!
//! Decoding is pure, synchronous and all-or-nothing: the same payload and
//! shape name always produce the same entity or the same error, and no
//! partially populated entity ever escapes. Transport, auth and rate
//! limiting live elsewhere; this layer only ever sees complete payloads.

pub mod catalog;
mod decode;
mod encode;
mod error;
mod registry;
mod shape;
mod value;

pub use error::{DecodeError, FieldCause, RegistryError};
pub use registry::{ResolvedShape, ShapeRegistry};
pub use shape::{Cardinality, FieldKind, FieldSpec, Shape};
pub use value::{Entity, FieldValue};
