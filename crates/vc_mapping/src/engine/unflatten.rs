use core::any::TypeId;
use std::borrow::Cow;

use super::RecordReader;
use crate::{Flat, codec};
use crate::error::CodecError;
use crate::registry::{Context, Mapping};
use crate::shape::{Shape, Unflatten};

// -----------------------------------------------------------------------------
// unflatten

/// Rebuilds a `T` from a flat value, consulting `context` at every visited
/// position.
///
/// Raw fragments are decoded first. A whole-type transform registered for
/// `T` then takes the value as a whole. Otherwise the hook of [`Unflatten`]
/// matching the incoming value is called: maps go to
/// [`unflatten_record`](Unflatten::unflatten_record), sequences to
/// [`unflatten_sequence`](Unflatten::unflatten_sequence) and everything else
/// to [`unflatten_leaf`](Unflatten::unflatten_leaf). Wrappers of
/// [`Shape::Transparent`] receive every value through `unflatten_leaf`.
///
/// Nothing here fails: a value `T` cannot be built from yields
/// [`Unflatten::zero`].
///
/// # Examples
///
/// ```
/// use vc_mapping::{Context, codec, derive::Record};
///
/// #[derive(Record, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let context = Context::new();
/// let flat = codec::decode(br#"{"x":1}"#).unwrap();
///
/// let point: Point = vc_mapping::unflatten(&flat, &context);
/// assert_eq!(point, Point { x: 1, y: 0 });
/// ```
pub fn unflatten<T: Unflatten>(flat: &Flat, context: &Context) -> T {
    let flat = match decoded(flat) {
        Ok(flat) => flat,
        Err(err) => {
            log::debug!("cannot decode fragment for `{}`: {err}", T::type_name());
            return zero_fallback(flat);
        }
    };

    let mapping = context.get(TypeId::of::<T>());

    if let Some(transform) = mapping.and_then(Mapping::unflatten_transform)
        && let Some(value) = transform.apply::<T>(&flat)
    {
        return value;
    }

    let value = match &*flat {
        _ if T::shape() == Shape::Transparent => T::unflatten_leaf(&flat, context),
        Flat::Map(entries) => T::unflatten_record(&RecordReader::new(entries, mapping, context)),
        Flat::Seq(items) => T::unflatten_sequence(items, context),
        other => T::unflatten_leaf(other, context),
    };

    value.unwrap_or_else(|| zero_fallback(&flat))
}

/// Resolves a [`Flat::Raw`] fragment into the value it encodes.
pub(super) fn decoded(flat: &Flat) -> Result<Cow<'_, Flat>, CodecError> {
    match flat {
        Flat::Raw(raw) => codec::decode_raw(raw).map(Cow::Owned),
        _ => Ok(Cow::Borrowed(flat)),
    }
}

/// The named fallback for positions that cannot be rebuilt.
pub(super) fn zero_fallback<T: Unflatten>(flat: &Flat) -> T {
    log::debug!(
        "cannot build `{}` from a {} value, using its zero value",
        T::type_name(),
        flat.kind(),
    );
    T::zero()
}
