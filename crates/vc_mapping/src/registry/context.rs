use core::any::TypeId;
use core::fmt;

use vc_utils::TypeIdMap;

use super::{Mapping, MappingMut};
use crate::shape::TypeShape;

// -----------------------------------------------------------------------------
// Context

/// A registry of [`Mapping`]s, at most one per type.
///
/// Contexts are independent of each other. Engine functions take the
/// context to consult as an argument and never fall back to the global
/// one on their own; see [`ContextArc::global`](super::ContextArc::global)
/// for the process-wide instance.
///
/// Register mappings before traversing values with the context. Mutation
/// needs `&mut Context`, so a context shared between threads goes through
/// a [`ContextArc`](super::ContextArc).
///
/// # Example
///
/// ```
/// use vc_mapping::{Context, derive::Record};
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
/// let mapping = context.get_type::<Point>().unwrap();
/// assert_eq!(mapping.field_by_name("x").unwrap().wire_name(), "X");
/// assert!(mapping.field_by_name("y").is_none());
///
/// context.remove::<Point>();
/// assert!(context.get_type::<Point>().is_none());
/// ```
#[derive(Clone, Default)]
pub struct Context {
    mappings: TypeIdMap<Mapping>,
}

impl Context {
    /// Creates an empty context.
    #[inline]
    pub const fn new() -> Self {
        Self {
            mappings: TypeIdMap::new(),
        }
    }

    /// Creates a fresh, empty mapping for `T` and returns its builder.
    ///
    /// Any previous mapping of `T` is dropped.
    pub fn register<T: TypeShape>(&mut self) -> MappingMut<'_, T> {
        let mapping = self.mappings.replace(TypeId::of::<T>(), Mapping::new::<T>());
        log::trace!("registered mapping for `{}`", T::type_name());
        MappingMut::new(mapping)
    }

    /// Returns the builder of the existing mapping of `T`, if any.
    pub fn mapping_mut<T: TypeShape>(&mut self) -> Option<MappingMut<'_, T>> {
        self.mappings
            .get_mut(&TypeId::of::<T>())
            .map(MappingMut::new)
    }

    /// Returns the mapping registered for the given type.
    ///
    /// Absence is the common case and means default traversal.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&Mapping> {
        self.mappings.get(&type_id)
    }

    /// Returns the mapping registered for `T`.
    #[inline]
    pub fn get_type<T: 'static>(&self) -> Option<&Mapping> {
        self.mappings.get_type::<T>()
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.mappings.contains(&type_id)
    }

    /// Removes the mapping of `T`, returning it if it was registered.
    #[inline]
    pub fn remove<T: 'static>(&mut self) -> Option<Mapping> {
        self.remove_by_id(TypeId::of::<T>())
    }

    /// Removes the mapping of the given type, returning it if it was registered.
    pub fn remove_by_id(&mut self, type_id: TypeId) -> Option<Mapping> {
        let removed = self.mappings.remove(&type_id);
        if let Some(mapping) = &removed {
            log::trace!("removed mapping for `{}`", mapping.type_name());
        }
        removed
    }

    /// Removes every mapping.
    #[inline]
    pub fn clear(&mut self) {
        self.mappings.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Iterates over the registered mappings in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Mapping> {
        self.mappings.values()
    }

    /// Applies every registration function submitted with
    /// [`submit_mapping!`](crate::submit_mapping) and returns how many ran.
    ///
    /// Applying them again re-registers the same types from scratch.
    #[cfg(feature = "auto_register")]
    pub fn auto_register(&mut self) -> usize {
        let mut count = 0;
        for registration in inventory::iter::<super::AutoRegistration> {
            registration.apply(self);
            count += 1;
        }
        log::debug!("applied {count} submitted mapping registrations");
        count
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.mappings.values().map(Mapping::type_name))
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::Context;
    use crate::Flat;

    #[test]
    fn register_replaces_previous_mapping() {
        let mut context = Context::new();
        context.register::<u8>().on_flatten(|v: &u8| Flat::from(*v));
        assert!(context.get_type::<u8>().unwrap().has_flatten());

        context.register::<u8>();
        assert!(!context.get_type::<u8>().unwrap().has_flatten());
        assert_eq!(context.len(), 1);
    }

    #[test]
    fn lookup_and_remove() {
        let mut context = Context::new();
        assert!(context.get(TypeId::of::<u8>()).is_none());

        context.register::<u8>();
        context.register::<String>();
        assert!(context.contains(TypeId::of::<String>()));
        assert_eq!(context.get_type::<u8>().unwrap().type_name(), "u8");

        assert!(context.remove::<u8>().is_some());
        assert!(context.remove::<u8>().is_none());
        assert!(context.get(TypeId::of::<u8>()).is_none());
        assert_eq!(context.len(), 1);

        context.clear();
        assert!(context.is_empty());
    }

    #[test]
    fn contexts_are_isolated() {
        let mut a = Context::new();
        let b = Context::new();
        a.register::<bool>();
        assert!(a.get_type::<bool>().is_some());
        assert!(b.get_type::<bool>().is_none());

        let copy = a.clone();
        a.remove::<bool>();
        assert!(copy.get_type::<bool>().is_some());
    }

    #[test]
    fn reconfigure_existing_mapping() {
        let mut context = Context::new();
        assert!(context.mapping_mut::<u16>().is_none());

        context.register::<u16>();
        context
            .mapping_mut::<u16>()
            .unwrap()
            .on_flatten(|v: &u16| Flat::from(*v + 1));
        assert!(context.get_type::<u16>().unwrap().has_flatten());
    }
}
