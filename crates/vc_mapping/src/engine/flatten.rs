use core::any::Any;

use crate::codec;
use crate::registry::{Context, Field, Mapping};
use crate::shape::{FlatRef, Flatten, Record, RecordFieldIter, Sequence, SequenceIter};
use crate::{Flat, FlatMap};

// -----------------------------------------------------------------------------
// flatten

/// Flattens a value, consulting `context` at every visited position.
///
/// A whole-type transform registered for the value's type replaces the
/// value entirely. Otherwise records become a [`Flat::Map`] of their
/// fields under their wire names, sequences become a [`Flat::Seq`], and
/// leaves are returned as they are. Each field and element is encoded
/// into a [`Flat::Raw`] fragment as it is visited.
///
/// # Examples
///
/// ```
/// use vc_mapping::{Context, Flat, derive::Record};
///
/// #[derive(Record)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let mut context = Context::new();
/// context.register::<Point>().with_field("x", |f| f.rename("X"));
///
/// let flat = vc_mapping::flatten(&Point { x: 1, y: 2 }, &context);
/// let map = flat.as_map().unwrap();
/// assert_eq!(map.get("X").and_then(Flat::as_raw), Some("1"));
/// assert_eq!(map.get("y").and_then(Flat::as_raw), Some("2"));
/// ```
pub fn flatten(value: &dyn Flatten, context: &Context) -> Flat {
    let value_any = value as &dyn Any;
    let mapping = context.get(value_any.type_id());

    if let Some(transform) = mapping.and_then(Mapping::flatten_transform)
        && let Some(flat) = transform.apply(value_any)
    {
        return flat;
    }

    match value.flat_ref() {
        FlatRef::Record(record) => Flat::Map(flatten_record(record, mapping, context)),
        FlatRef::Sequence(sequence) => Flat::Seq(flatten_sequence(sequence, context)),
        FlatRef::Leaf(flat) => flat,
        FlatRef::Transparent(inner) => flatten(inner, context),
    }
}

fn flatten_record(record: &dyn Record, mapping: Option<&Mapping>, context: &Context) -> FlatMap {
    let mut map = FlatMap::with_capacity(record.field_len());

    for (name, value) in RecordFieldIter::new(record) {
        let field = mapping.and_then(|m| m.field_by_name(name));
        let wire_name = field.map_or(name, Field::wire_name);

        let flat = match field.and_then(Field::flatten_transform) {
            Some(transform) => transform.apply(value as &dyn Any).unwrap_or_else(|| {
                log::warn!(
                    "flatten transform of `{}::{name}` expects `{}`, using the default traversal",
                    record.type_ident(),
                    transform.target_name(),
                );
                flatten(value, context)
            }),
            None => flatten(value, context),
        };

        match codec::encode(&flat) {
            Ok(raw) => {
                map.insert(wire_name, Flat::Raw(raw));
            }
            Err(err) => log::debug!("omitting field `{}::{name}`: {err}", record.type_ident()),
        }
    }

    map
}

fn flatten_sequence(sequence: &dyn Sequence, context: &Context) -> Vec<Flat> {
    let mut items = Vec::with_capacity(sequence.len());

    for (index, element) in SequenceIter::new(sequence).enumerate() {
        match codec::encode(&flatten(element, context)) {
            Ok(raw) => items.push(Flat::Raw(raw)),
            Err(err) => log::debug!("omitting sequence element {index}: {err}"),
        }
    }

    items
}
