//! Shape implementations for standard types.
//!
//! ## Implemented Menu
//!
//! - leaf:
//!     - `i8`-`i64`, `u8`-`u64`, `isize`, `usize`, `f32`, `f64`
//!     - `bool`, `char`, `String`, `()`
//! - transparent:
//!     - `Option<T>`: `None` is `Flat::Null`, `Some` flattens as its value.
//!     - `Box<T>`
//! - sequence:
//!     - `Vec<T>`, `VecDeque<T>`
//!
//! Leaf types rebuild from any scalar that converts without loss, so an
//! `i32` field accepts `Flat::Uint(3)` or `Flat::Float(3.0)` but not `3.5`.

// -----------------------------------------------------------------------------
// Modules

mod native;
mod sequence;
mod wrapper;
