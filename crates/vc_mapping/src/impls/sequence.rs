use std::collections::VecDeque;

use crate::registry::Context;
use crate::shape::{FlatRef, Flatten, Sequence, Shape, TypeShape, Unflatten};
use crate::{Flat, unflatten};

// -----------------------------------------------------------------------------
// Macros

macro_rules! impl_sequence {
    ($ty:ident) => {
        impl<T: TypeShape> TypeShape for $ty<T> {
            #[inline]
            fn shape() -> Shape {
                Shape::Sequence
            }
        }

        impl<T: Flatten> Flatten for $ty<T> {
            #[inline]
            fn flat_ref(&self) -> FlatRef<'_> {
                FlatRef::Sequence(self)
            }
        }

        impl<T: Flatten> Sequence for $ty<T> {
            #[inline]
            fn len(&self) -> usize {
                $ty::len(self)
            }

            #[inline]
            fn element(&self, index: usize) -> Option<&dyn Flatten> {
                self.get(index).map(|value| value as &dyn Flatten)
            }
        }

        impl<T: Unflatten> Unflatten for $ty<T> {
            #[inline]
            fn zero() -> Self {
                $ty::new()
            }

            fn unflatten_sequence(items: &[Flat], context: &Context) -> Option<Self> {
                Some(items.iter().map(|item| unflatten::<T>(item, context)).collect())
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Implementations

impl_sequence!(Vec);
impl_sequence!(VecDeque);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::registry::Context;
    use crate::{Flat, flatten, unflatten};

    #[test]
    fn elements_keep_order() {
        let context = Context::new();
        let flat = flatten(&vec![3_u8, 1, 2], &context);
        let raw: Vec<_> = flat.as_seq().unwrap().iter().map(|f| f.as_raw().unwrap()).collect();
        assert_eq!(raw, ["3", "1", "2"]);

        let back: VecDeque<u8> = unflatten(&flat, &context);
        assert_eq!(back, [3, 1, 2]);
    }

    #[test]
    fn non_sequence_input_is_empty() {
        let context = Context::new();
        assert!(unflatten::<Vec<u8>>(&Flat::from("x"), &context).is_empty());
    }
}
