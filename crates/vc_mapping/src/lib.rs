//! Flattening of typed values into a wire-neutral [`Flat`] tree, and back.
//!
//! Records become maps keyed by wire names, sequences become ordered lists
//! and scalars pass through. A [`Context`] holds the per-type customizations
//! consulted along the way: renamed fields, field transforms and whole-type
//! transforms, applied with this precedence:
//!
//! 1. a whole-type transform of the visited type;
//! 2. a field transform of the visited record field;
//! 3. the default structural traversal.
//!
//! # Example
//!
//! ```
//! use vc_mapping::{Context, Flat, codec, derive::Record};
//!
//! #[derive(Record, Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let mut context = Context::new();
//! context
//!     .register::<Point>()
//!     .with_field("x", |f| f.rename("X"))
//!     .with_field("y", |f| f.rename("Y"));
//!
//! let flat = vc_mapping::flatten(&Point { x: 1, y: 2 }, &context);
//! assert_eq!(codec::encode_to_vec(&flat).unwrap(), br#"{"X":1,"Y":2}"#);
//!
//! let point: Point = vc_mapping::unflatten(&flat, &context);
//! assert_eq!(point, Point { x: 1, y: 2 });
//! ```
//!
//! ## Features
//!
//! - `auto_register` (default): [`submit_mapping!`] and
//!   [`Context::auto_register`].
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// `#[derive(Record)]` names this crate as `vc_mapping`, which must also
// resolve inside the crate itself.
extern crate self as vc_mapping;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod flat;
mod impls;

pub mod codec;
pub mod engine;
pub mod registry;
pub mod shape;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports {
    #[cfg(feature = "auto_register")]
    pub use inventory;
}

pub use vc_mapping_derive as derive;

pub use engine::{RecordReader, flatten, unflatten};
pub use error::CodecError;
pub use flat::{Flat, FlatMap, FlatMapIter};
pub use registry::{Context, ContextArc, Field, FieldMut, Mapping, MappingMut};
pub use shape::{FlatRef, Flatten, Record, Sequence, Shape, TypeShape, Unflatten};
