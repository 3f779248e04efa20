use core::fmt;
use core::hash::BuildHasher;
use core::slice;

use vc_utils::hash::FixedHashState;
use vc_utils::hash::hashbrown::HashTable;

use super::Flat;

// -----------------------------------------------------------------------------
// FlatMap

/// Entries of a flattened record, in insertion order.
///
/// Keys are indexed by hash, so lookups and inserts stay constant time
/// on wide objects. Inserting a key that already exists replaces its value
/// in place.
#[derive(Clone, Default)]
pub struct FlatMap {
    entries: Vec<(String, Flat)>,
    // Positions into `entries`.
    indices: HashTable<usize>,
}

#[inline]
fn hash_key(key: &str) -> u64 {
    FixedHashState.hash_one(key)
}

impl FlatMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            indices: HashTable::with_capacity(capacity),
        }
    }

    /// Inserts an entry, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: Flat) -> Option<Flat> {
        let key = key.into();
        let hash = hash_key(&key);

        if let Some(&index) = self.indices.find(hash, |&i| self.entries[i].0 == key) {
            return Some(core::mem::replace(&mut self.entries[index].1, value));
        }

        let index = self.entries.len();
        self.entries.push((key, value));
        let entries = &self.entries;
        self.indices
            .insert_unique(hash, index, |&i| hash_key(&entries[i].0));
        None
    }

    pub fn get(&self, key: &str) -> Option<&Flat> {
        self.indices
            .find(hash_key(key), |&i| self.entries[i].0 == key)
            .map(|&i| &self.entries[i].1)
    }

    /// Removes an entry, shifting later entries down to keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Flat> {
        let entries = &self.entries;
        let (index, _) = self
            .indices
            .find_entry(hash_key(key), |&i| entries[i].0 == key)
            .ok()?
            .remove();

        let (_, value) = self.entries.remove(index);
        for slot in self.indices.iter_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        Some(value)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> FlatMapIter<'_> {
        FlatMapIter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl PartialEq for FlatMap {
    /// Maps are equal when they hold equal entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for FlatMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K: Into<String>> FromIterator<(K, Flat)> for FlatMap {
    fn from_iter<I: IntoIterator<Item = (K, Flat)>>(iter: I) -> Self {
        let mut map = FlatMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for FlatMap {
    type Item = (String, Flat);
    type IntoIter = std::vec::IntoIter<(String, Flat)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlatMap {
    type Item = (&'a str, &'a Flat);
    type IntoIter = FlatMapIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// -----------------------------------------------------------------------------
// FlatMapIter

/// Iterator over the entries of a [`FlatMap`].
pub struct FlatMapIter<'a> {
    inner: slice::Iter<'a, (String, Flat)>,
}

impl<'a> Iterator for FlatMapIter<'a> {
    type Item = (&'a str, &'a Flat);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for FlatMapIter<'_> {}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::FlatMap;
    use crate::Flat;

    #[test]
    fn insert_keeps_order_and_replaces_in_place() {
        let mut map = FlatMap::new();
        map.insert("b", Flat::from(1_u8));
        map.insert("a", Flat::from(2_u8));
        let old = map.insert("b", Flat::from(3_u8));

        assert_eq!(old, Some(Flat::Uint(1)));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(map.get("b"), Some(&Flat::Uint(3)));
    }

    #[test]
    fn remove_entry() {
        let mut map: FlatMap = [("x", Flat::Null), ("y", Flat::Bool(true))]
            .into_iter()
            .collect();
        assert_eq!(map.remove("x"), Some(Flat::Null));
        assert!(!map.contains_key("x"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.remove("missing"), None);
    }

    #[test]
    fn remove_keeps_later_entries_reachable() {
        let mut map: FlatMap = (0..5_i64).map(|i| (format!("k{i}"), Flat::from(i))).collect();
        assert_eq!(map.remove("k1"), Some(Flat::Int(1)));

        assert_eq!(map.keys().collect::<Vec<_>>(), ["k0", "k2", "k3", "k4"]);
        assert_eq!(map.get("k4"), Some(&Flat::Int(4)));
        map.insert("k2", Flat::Null);
        assert_eq!(map.get("k2"), Some(&Flat::Null));
        assert_eq!(map.len(), 4);
    }
}
