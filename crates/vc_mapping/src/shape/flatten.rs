use core::any::Any;

use super::{Record, Sequence};
use crate::Flat;

// -----------------------------------------------------------------------------
// FlatRef

/// Shape-tagged view of a value, returned by [`Flatten::flat_ref`].
pub enum FlatRef<'a> {
    Record(&'a dyn Record),
    Sequence(&'a dyn Sequence),
    Leaf(Flat),
    Transparent(&'a dyn Flatten),
}

// -----------------------------------------------------------------------------
// Flatten

/// A value the engine can traverse.
///
/// The trait is object safe: the engine walks values as `&dyn Flatten`
/// and finds their mappings by the concrete [`TypeId`](core::any::TypeId).
///
/// Implementations only describe structure. Whether a registered
/// transform replaces that structure is decided by the engine.
///
/// # Examples
///
/// ```
/// use vc_mapping::{Flat, FlatRef, Flatten, Shape, TypeShape};
///
/// struct Celsius(f64);
///
/// impl TypeShape for Celsius {
///     fn shape() -> Shape {
///         Shape::Leaf
///     }
/// }
///
/// impl Flatten for Celsius {
///     fn flat_ref(&self) -> FlatRef<'_> {
///         FlatRef::Leaf(Flat::Float(self.0))
///     }
/// }
///
/// let context = vc_mapping::Context::new();
/// assert_eq!(vc_mapping::flatten(&Celsius(21.5), &context), Flat::Float(21.5));
/// ```
pub trait Flatten: Any {
    fn flat_ref(&self) -> FlatRef<'_>;
}

impl dyn Flatten {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    /// Downcasts to a concrete type.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
