use crate::Flat;
use crate::registry::Context;
use crate::shape::{FlatRef, Flatten, Shape, TypeShape, Unflatten};

// -----------------------------------------------------------------------------
// Macros

macro_rules! impl_leaf {
    ($ty:ty, zero: $zero:expr, |$value:ident| $to_flat:expr, |$flat:ident| $from_flat:expr) => {
        impl TypeShape for $ty {
            #[inline]
            fn shape() -> Shape {
                Shape::Leaf
            }
        }

        impl Flatten for $ty {
            #[inline]
            fn flat_ref(&self) -> FlatRef<'_> {
                let $value = self;
                FlatRef::Leaf($to_flat)
            }
        }

        impl Unflatten for $ty {
            #[inline]
            fn zero() -> Self {
                $zero
            }

            #[inline]
            fn unflatten_leaf($flat: &Flat, _context: &Context) -> Option<Self> {
                $from_flat
            }
        }
    };
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {$(
        impl_leaf!($ty, zero: 0, |v| Flat::from(*v), |flat| {
            flat.as_i64().and_then(|v| <$ty>::try_from(v).ok())
        });
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {$(
        impl_leaf!($ty, zero: 0, |v| Flat::from(*v), |flat| {
            flat.as_u64().and_then(|v| <$ty>::try_from(v).ok())
        });
    )*};
}

// -----------------------------------------------------------------------------
// Implementations

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl_leaf!(f64, zero: 0.0, |v| Flat::Float(*v), |flat| flat.as_f64());
impl_leaf!(f32, zero: 0.0, |v| Flat::from(*v), |flat| flat.as_f64().map(|v| v as f32));
impl_leaf!(bool, zero: false, |v| Flat::Bool(*v), |flat| flat.as_bool());
impl_leaf!(String, zero: String::new(), |v| Flat::Str(v.clone()), |flat| {
    flat.as_str().map(str::to_owned)
});

impl_leaf!(char, zero: '\0', |v| Flat::from(*v), |flat| {
    let mut chars = flat.as_str()?.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
});

impl_leaf!((), zero: (), |_v| Flat::Null, |flat| flat.is_null().then_some(()));

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::registry::Context;
    use crate::{Flat, flatten, unflatten};

    #[test]
    fn integers_convert_without_loss() {
        let context = Context::new();
        assert_eq!(unflatten::<i32>(&Flat::Uint(7), &context), 7);
        assert_eq!(unflatten::<u8>(&Flat::Float(3.0), &context), 3);
        assert_eq!(unflatten::<u8>(&Flat::Int(300), &context), 0);
        assert_eq!(unflatten::<u64>(&Flat::Int(-1), &context), 0);
        assert_eq!(unflatten::<i64>(&Flat::Float(2.5), &context), 0);
    }

    #[test]
    fn scalars_flatten_to_leaves() {
        let context = Context::new();
        assert_eq!(flatten(&-4_i16, &context), Flat::Int(-4));
        assert_eq!(flatten(&true, &context), Flat::Bool(true));
        assert_eq!(flatten(&'x', &context), Flat::from("x"));
        assert_eq!(flatten(&(), &context), Flat::Null);
        assert_eq!(flatten(&String::from("s"), &context), Flat::from("s"));
    }

    #[test]
    fn mismatched_scalars_take_zero() {
        let context = Context::new();
        assert!(!unflatten::<bool>(&Flat::Int(1), &context));
        assert_eq!(unflatten::<String>(&Flat::Int(1), &context), "");
        assert_eq!(unflatten::<char>(&Flat::from("ab"), &context), '\0');
        assert_eq!(unflatten::<f32>(&Flat::Int(2), &context), 2.0);
    }
}
