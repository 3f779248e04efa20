use core::any::TypeId;
use core::fmt::Debug;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;
use crate::hash::hashbrown::hash_map::Entry;

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map with [`TypeId`] keys.
///
/// `TypeId` is already a hash, so lookups skip rehashing it.
/// Only the operations the registries need are exposed.
pub struct TypeIdMap<V>(HashMap<TypeId, V, NoOpHashState>);

impl<V> TypeIdMap<V> {
    /// Creates an empty `TypeIdMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_utils::TypeIdMap;
    /// let map = TypeIdMap::<&str>::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(NoOpHashState))
    }

    /// Stores `v` for `type_id` and returns a reference to it,
    /// dropping any previous value.
    #[inline]
    pub fn replace(&mut self, type_id: TypeId, v: V) -> &mut V {
        match self.0.entry(type_id) {
            Entry::Vacant(entry) => entry.insert(v),
            Entry::Occupied(mut entry) => {
                entry.insert(v);
                entry.into_mut()
            }
        }
    }

    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    #[inline(always)]
    pub fn get_type<T: ?Sized + 'static>(&self) -> Option<&V> {
        self.get(&TypeId::of::<T>())
    }

    #[inline]
    pub fn get_mut(&mut self, type_id: &TypeId) -> Option<&mut V> {
        self.0.get_mut(type_id)
    }

    /// Removes a key, returning its value if it was present.
    #[inline]
    pub fn remove(&mut self, type_id: &TypeId) -> Option<V> {
        self.0.remove(type_id)
    }

    /// Removes every entry, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the stored values in arbitrary order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.0.values()
    }

}

// -----------------------------------------------------------------------------
// Traits

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for TypeIdMap<V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<V: Debug> Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.0.values()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeIdMap;

    #[test]
    fn replace_overwrites() {
        let mut map = TypeIdMap::new();
        map.replace(TypeId::of::<u8>(), "first");
        let slot = map.replace(TypeId::of::<u8>(), "second");
        assert_eq!(*slot, "second");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_type::<u8>(), Some(&"second"));
    }

    #[test]
    fn remove_and_contains() {
        let mut map = TypeIdMap::new();
        map.replace(TypeId::of::<u8>(), 1);
        map.replace(TypeId::of::<u16>(), 2);
        assert!(map.contains(&TypeId::of::<u16>()));
        assert_eq!(map.remove(&TypeId::of::<u16>()), Some(2));
        assert!(!map.contains(&TypeId::of::<u16>()));
        assert_eq!(map.remove(&TypeId::of::<u16>()), None);

        *map.get_mut(&TypeId::of::<u8>()).unwrap() += 1;
        assert_eq!(map.get_type::<u8>(), Some(&2));
    }
}
