use super::TypeShape;
use crate::Flat;
use crate::engine::RecordReader;
use crate::registry::Context;

// -----------------------------------------------------------------------------
// Unflatten

/// A type the engine can rebuild from a [`Flat`].
///
/// The engine in [`unflatten`](crate::unflatten) decides which hook to call:
/// registered transforms come first, then the hook matching the incoming
/// shape. A hook returns `None` when the value is not something this type
/// can be built from; the engine then moves on and finally falls back to
/// [`zero`](Unflatten::zero).
///
/// Raw fragments are decoded before any hook sees them.
///
/// # Examples
///
/// ```
/// use vc_mapping::{Context, Flat, Shape, TypeShape, Unflatten};
///
/// #[derive(Debug, PartialEq)]
/// struct Celsius(f64);
///
/// impl TypeShape for Celsius {
///     fn shape() -> Shape {
///         Shape::Leaf
///     }
/// }
///
/// impl Unflatten for Celsius {
///     fn zero() -> Self {
///         Celsius(0.0)
///     }
///
///     fn unflatten_leaf(flat: &Flat, _: &Context) -> Option<Self> {
///         flat.as_f64().map(Celsius)
///     }
/// }
///
/// let context = Context::new();
/// let value: Celsius = vc_mapping::unflatten(&Flat::Int(20), &context);
/// assert_eq!(value, Celsius(20.0));
///
/// let value: Celsius = vc_mapping::unflatten(&Flat::from("warm"), &context);
/// assert_eq!(value, Celsius(0.0));
/// ```
pub trait Unflatten: TypeShape + Sized {
    /// The value used for absent fields and unresolved positions.
    fn zero() -> Self;

    /// Builds the value from the entries of a flattened record.
    #[inline]
    fn unflatten_record(_reader: &RecordReader<'_>) -> Option<Self> {
        None
    }

    /// Builds the value from the elements of a flattened sequence.
    #[inline]
    fn unflatten_sequence(_items: &[Flat], _context: &Context) -> Option<Self> {
        None
    }

    /// Builds the value from any other flat value.
    ///
    /// Types of [`Shape::Transparent`](super::Shape::Transparent) receive
    /// every value here, whatever its shape.
    #[inline]
    fn unflatten_leaf(_flat: &Flat, _context: &Context) -> Option<Self> {
        None
    }
}
