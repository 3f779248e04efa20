//! See following macros:
//!
//! - [`Record`]
#![cfg_attr(docsrs, feature(doc_cfg))]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

// -----------------------------------------------------------------------------
// Modules

mod path;
mod record;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` implements the following traits:
///
/// - `TypeShape`, with `Shape::Record` and the declared field names
/// - `Flatten`
/// - `Record`
/// - `Unflatten`, building the value field by field
///
/// Structs with named fields and unit structs are supported. Tuple structs,
/// enums and unions are rejected.
///
/// Every field type must implement `Flatten` and `Unflatten`. Type
/// parameters receive a `'static` bound; lifetime parameters are rejected.
///
/// The derive reads no attributes. Wire names and transforms are registered
/// on a `Context` at runtime:
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// context.register::<Point>().with_field("x", |f| f.rename("X"));
/// ```
#[proc_macro_derive(Record)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match record::expand(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
