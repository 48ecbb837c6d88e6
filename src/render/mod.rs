//! Rendering layer - field definitions to control descriptions

pub mod adapter;
pub mod control;

pub use adapter::{CustomFieldRenderer, RenderAdapter};
pub use control::{Control, ControlKind};
