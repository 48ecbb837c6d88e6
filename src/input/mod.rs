//! Schema input boundary
//!
//! The caller-supplied nested definition tree is the engine's only wire
//! contract. DTOs here carry the serde derives; `mapper` converts them
//! into the pure contract models, assigning identifiers from map keys.

pub mod dto;
pub mod mapper;

pub use dto::{FieldInput, SchemaInput, SectionInput};
