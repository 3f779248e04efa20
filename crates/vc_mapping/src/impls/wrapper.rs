use crate::registry::Context;
use crate::shape::{FlatRef, Flatten, Shape, TypeShape, Unflatten};
use crate::{Flat, unflatten};

// -----------------------------------------------------------------------------
// Option

impl<T: TypeShape> TypeShape for Option<T> {
    #[inline]
    fn shape() -> Shape {
        Shape::Transparent
    }
}

impl<T: Flatten> Flatten for Option<T> {
    fn flat_ref(&self) -> FlatRef<'_> {
        match self {
            Some(value) => FlatRef::Transparent(value),
            None => FlatRef::Leaf(Flat::Null),
        }
    }
}

impl<T: Unflatten> Unflatten for Option<T> {
    #[inline]
    fn zero() -> Self {
        None
    }

    fn unflatten_leaf(flat: &Flat, context: &Context) -> Option<Self> {
        if flat.is_null() {
            Some(None)
        } else {
            Some(Some(unflatten::<T>(flat, context)))
        }
    }
}

// -----------------------------------------------------------------------------
// Box

impl<T: TypeShape> TypeShape for Box<T> {
    #[inline]
    fn shape() -> Shape {
        Shape::Transparent
    }
}

impl<T: Flatten> Flatten for Box<T> {
    #[inline]
    fn flat_ref(&self) -> FlatRef<'_> {
        FlatRef::Transparent(&**self)
    }
}

impl<T: Unflatten> Unflatten for Box<T> {
    #[inline]
    fn zero() -> Self {
        Box::new(T::zero())
    }

    #[inline]
    fn unflatten_leaf(flat: &Flat, context: &Context) -> Option<Self> {
        Some(Box::new(unflatten::<T>(flat, context)))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::registry::Context;
    use crate::{Flat, flatten, unflatten};

    #[test]
    fn option_flattens_through() {
        let context = Context::new();
        assert_eq!(flatten(&Some(3_u8), &context), Flat::Uint(3));
        assert_eq!(flatten(&None::<u8>, &context), Flat::Null);

        assert_eq!(unflatten::<Option<u8>>(&Flat::Uint(3), &context), Some(3));
        assert_eq!(unflatten::<Option<u8>>(&Flat::Null, &context), None);
    }

    #[test]
    fn box_flattens_through() {
        let mut context = Context::new();
        context.register::<u8>().on_flatten(|v: &u8| Flat::from(format!("#{v}")));

        assert_eq!(flatten(&Box::new(3_u8), &context), Flat::from("#3"));
        assert_eq!(*unflatten::<Box<i32>>(&Flat::Int(-2), &context), -2);
    }
}
