//! Per-type and per-field customizations of the engine.
//!
//! ## Menu
//!
//! - [`Context`]: the registry, one [`Mapping`] per type.
//! - [`ContextArc`]: a shareable, lockable context; [`ContextArc::global`]
//!   is the process-wide instance.
//! - [`Mapping`]: customizations of one type, holding a whole-type transform
//!   pair and the customized [`Field`]s.
//! - [`Field`]: wire name and transform pair of one record field.
//! - [`MappingMut`], [`FieldMut`]: typed builders returned by registration.
//! - [`FlattenTransform`], [`UnflattenTransform`]: type-erased user functions.
//!
//! ## Precedence
//!
//! When flattening a value the engine asks the context for the value's type:
//!
//! 1. a whole-type flatten transform replaces the value entirely;
//! 2. otherwise a record visits its fields, where a field's own transform
//!    replaces the default traversal of that field only;
//! 3. otherwise the value's structure is used as is.
//!
//! Unflattening follows the same order with the unflatten transforms.
//!
//! ## auto_register
//!
//! With the `auto_register` feature, registration functions submitted with
//! [`submit_mapping!`](crate::submit_mapping) are applied to the global
//! context when it is first accessed, and can be applied to any other
//! context with [`Context::auto_register`]. The `inventory` crate collects
//! them; on platforms it does not support nothing is collected.

// -----------------------------------------------------------------------------
// Modules

mod context;
mod context_arc;
mod field;
mod mapping;
mod transform;

#[cfg(feature = "auto_register")]
mod auto_register;

// -----------------------------------------------------------------------------
// Exports

pub use context::Context;
pub use context_arc::ContextArc;
pub use field::{Field, FieldMut};
pub use mapping::{Mapping, MappingMut};
pub use transform::{FlattenTransform, UnflattenTransform};

#[cfg(feature = "auto_register")]
pub use auto_register::AutoRegistration;
