//! Capabilities describing how a type flattens.
//!
//! ## Menu
//!
//! - [`TypeShape`]: static description of a type, used at registration.
//! - [`Flatten`]: object-safe access to a value's [`FlatRef`].
//! - [`Record`]: a value with named fields (e.g. `struct A { .. }`).
//! - [`Sequence`]: an ordered collection (e.g. `Vec<T>`).
//! - [`Unflatten`]: construction of a value from a [`Flat`](crate::Flat).
//!
//! `#[derive(Record)]` implements all of them for structs with named fields.

// -----------------------------------------------------------------------------
// Modules

mod flatten;
mod record;
mod sequence;
mod type_shape;
mod unflatten;

// -----------------------------------------------------------------------------
// Exports

pub use flatten::{FlatRef, Flatten};
pub use record::{Record, RecordFieldIter};
pub use sequence::{Sequence, SequenceIter};
pub use type_shape::{Shape, TypeShape};
pub use unflatten::Unflatten;
