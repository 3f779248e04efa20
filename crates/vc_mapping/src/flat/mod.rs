//! The wire-neutral value exchanged between the engine and the codec.
//!
//! - [`Flat`]: one node of a flattened tree.
//! - [`FlatMap`]: the insertion-ordered entries of a flattened record.

// -----------------------------------------------------------------------------
// Modules

mod flat_map;
mod serde_impls;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use flat_map::{FlatMap, FlatMapIter};
pub use value::Flat;
