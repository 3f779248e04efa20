use crate::registry::{Context, Field, Mapping};
use crate::shape::Unflatten;
use crate::{Flat, FlatMap, unflatten};

use super::unflatten::{decoded, zero_fallback};

// -----------------------------------------------------------------------------
// RecordReader

/// The entries of a flattened record, as handed to
/// [`Unflatten::unflatten_record`].
///
/// Fields are looked up by their declared names; the reader translates them
/// to wire names through the record type's mapping, if it has one.
pub struct RecordReader<'a> {
    entries: &'a FlatMap,
    mapping: Option<&'a Mapping>,
    context: &'a Context,
}

impl<'a> RecordReader<'a> {
    #[inline]
    pub fn new(entries: &'a FlatMap, mapping: Option<&'a Mapping>, context: &'a Context) -> Self {
        Self {
            entries,
            mapping,
            context,
        }
    }

    #[inline]
    pub fn entries(&self) -> &'a FlatMap {
        self.entries
    }

    #[inline]
    pub fn context(&self) -> &'a Context {
        self.context
    }

    /// Returns the wire-side entry of a declared field, if present.
    pub fn get(&self, name: &str) -> Option<&'a Flat> {
        self.entries.get(self.lookup(name).1)
    }

    /// Rebuilds a declared field.
    ///
    /// An absent entry yields the zero value of `F`. A present entry goes
    /// through the field's unflatten transform if one is registered for `F`,
    /// and through [`unflatten`] otherwise.
    pub fn field<F: Unflatten>(&self, name: &str) -> F {
        let (field, wire_name) = self.lookup(name);

        let Some(entry) = self.entries.get(wire_name) else {
            log::debug!("`{wire_name}` is absent, using the zero value of `{}`", F::type_name());
            return F::zero();
        };

        let Some(transform) = field.and_then(Field::unflatten_transform) else {
            return unflatten::<F>(entry, self.context);
        };

        let entry = match decoded(entry) {
            Ok(entry) => entry,
            Err(err) => {
                log::debug!("cannot decode `{wire_name}`: {err}");
                return zero_fallback::<F>(entry);
            }
        };

        transform.apply::<F>(&entry).unwrap_or_else(|| {
            log::warn!(
                "unflatten transform of `{name}` builds `{}` but the field is `{}`, using the default traversal",
                transform.target_name(),
                F::type_name(),
            );
            unflatten::<F>(&entry, self.context)
        })
    }

    fn lookup<'n>(&self, name: &'n str) -> (Option<&'a Field>, &'n str)
    where
        'a: 'n,
    {
        let field = self.mapping.and_then(|m| m.field_by_name(name));
        (field, field.map_or(name, Field::wire_name))
    }
}
