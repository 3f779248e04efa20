use core::any::{Any, TypeId};
use core::fmt;
use std::sync::Arc;

use crate::Flat;

// -----------------------------------------------------------------------------
// FlattenTransform

/// A user function turning a value of one concrete type into a [`Flat`].
///
/// The function is stored type-erased; [`apply`](Self::apply) returns `None`
/// when handed a value of another type.
#[derive(Clone)]
pub struct FlattenTransform {
    target: TypeId,
    target_name: &'static str,
    func: Arc<dyn Fn(&dyn Any) -> Option<Flat> + Send + Sync>,
}

impl FlattenTransform {
    pub fn new<T: Any>(func: impl Fn(&T) -> Flat + Send + Sync + 'static) -> Self {
        Self {
            target: TypeId::of::<T>(),
            target_name: core::any::type_name::<T>(),
            func: Arc::new(move |value: &dyn Any| value.downcast_ref::<T>().map(&func)),
        }
    }

    /// The [`TypeId`] of the type this transform accepts.
    #[inline]
    pub fn target(&self) -> TypeId {
        self.target
    }

    #[inline]
    pub fn target_name(&self) -> &'static str {
        self.target_name
    }

    #[inline]
    pub fn apply(&self, value: &dyn Any) -> Option<Flat> {
        (self.func)(value)
    }
}

impl fmt::Debug for FlattenTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FlattenTransform")
            .field(&self.target_name)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// UnflattenTransform

/// A user function building a value of one concrete type from a [`Flat`].
///
/// [`apply`](Self::apply) returns `None` without calling the function when
/// asked for a type other than the one it was created for.
#[derive(Clone)]
pub struct UnflattenTransform {
    target: TypeId,
    target_name: &'static str,
    func: Arc<dyn Fn(&Flat) -> Box<dyn Any> + Send + Sync>,
}

impl UnflattenTransform {
    pub fn new<T: Any>(func: impl Fn(&Flat) -> T + Send + Sync + 'static) -> Self {
        Self {
            target: TypeId::of::<T>(),
            target_name: core::any::type_name::<T>(),
            func: Arc::new(move |flat: &Flat| Box::new(func(flat)) as Box<dyn Any>),
        }
    }

    /// The [`TypeId`] of the type this transform produces.
    #[inline]
    pub fn target(&self) -> TypeId {
        self.target
    }

    #[inline]
    pub fn target_name(&self) -> &'static str {
        self.target_name
    }

    pub fn apply<T: Any>(&self, flat: &Flat) -> Option<T> {
        if self.target != TypeId::of::<T>() {
            return None;
        }
        (self.func)(flat).downcast::<T>().ok().map(|value| *value)
    }
}

impl fmt::Debug for UnflattenTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnflattenTransform")
            .field(&self.target_name)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::Any;

    use super::{FlattenTransform, UnflattenTransform};
    use crate::Flat;

    #[test]
    fn flatten_checks_input_type() {
        let transform = FlattenTransform::new(|v: &u8| Flat::from(*v as u64 * 2));
        assert_eq!(transform.apply(&4_u8 as &dyn Any), Some(Flat::Uint(8)));
        assert_eq!(transform.apply(&4_u16 as &dyn Any), None);
    }

    #[test]
    fn unflatten_checks_output_type() {
        let transform = UnflattenTransform::new(|f: &Flat| f.as_str().unwrap_or("").len());
        assert_eq!(transform.apply::<usize>(&Flat::from("abc")), Some(3));
        assert_eq!(transform.apply::<u32>(&Flat::from("abc")), None);
    }
}
