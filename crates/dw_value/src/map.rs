//! Provide the keyed container kind.

use alloc::rc::Rc;
use alloc::string::String;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::Value;
use crate::hash::FixedHashState;

/// The entry storage of a [`Map`]: string keys to values, insertion order.
pub type Entries = IndexMap<String, Value, FixedHashState>;

// -----------------------------------------------------------------------------
// Map

/// An insertion-order-preserving keyed container.
///
/// A `Map` holds its *own* entries plus an optional **fallback** map: a
/// shared reference consulted (transitively) when an own entry is missing.
/// The fallback is the explicit stand-in for inherited defaults — lookups
/// read through it, writes never touch it.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use dw_value::{Map, Value};
///
/// let defaults = Rc::new(Map::from([("unit", Value::from("px"))]));
/// let mut style = Map::with_fallback(defaults);
/// style.insert("width", Value::Int(120));
///
/// // Own entry and inherited entry are both readable...
/// assert_eq!(style.get("width"), Some(&Value::Int(120)));
/// assert_eq!(style.get("unit"), Some(&Value::from("px")));
///
/// // ...but only the own entry is owned.
/// assert_eq!(style.get_own("unit"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    entries: Entries,
    fallback: Option<Rc<Map>>,
}

impl Map {
    /// Creates an empty map with no fallback.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Entries::with_hasher(FixedHashState),
            fallback: None,
        }
    }

    /// Creates an empty map with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Entries::with_capacity_and_hasher(capacity, FixedHashState),
            fallback: None,
        }
    }

    /// Creates an empty map whose lookups fall back to `fallback`.
    #[inline]
    pub fn with_fallback(fallback: Rc<Map>) -> Self {
        Self {
            entries: Entries::with_hasher(FixedHashState),
            fallback: Some(fallback),
        }
    }

    /// Returns the fallback map, if any.
    #[inline]
    pub fn fallback(&self) -> Option<&Rc<Map>> {
        self.fallback.as_ref()
    }

    /// Replaces the fallback map.
    #[inline]
    pub fn set_fallback(&mut self, fallback: Option<Rc<Map>>) {
        self.fallback = fallback;
    }

    /// Returns the value for `key`, consulting own entries first and then
    /// the fallback chain.
    pub fn get(&self, key: &str) -> Option<&Value> {
        if let Some(value) = self.entries.get(key) {
            return Some(value);
        }

        let mut fallback = self.fallback.as_deref();
        while let Some(map) = fallback {
            if let Some(value) = map.entries.get(key) {
                return Some(value);
            }
            fallback = map.fallback.as_deref();
        }

        None
    }

    /// Returns the value for `key` from own entries only.
    #[inline]
    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the own entry for `key`.
    ///
    /// Fallback values are shared and never handed out mutably; shadow them
    /// with [`insert`](Map::insert) instead.
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Returns whether `key` is reachable, through the fallback chain or not.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns whether `key` is an own entry.
    #[inline]
    pub fn contains_own(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts an own entry, shadowing any fallback value for `key`.
    ///
    /// Returns the previous own value, if there was one.
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Inserts an own entry and returns a reference to its slot.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Value {
        match self.entries.entry(key.into()) {
            Entry::Occupied(mut entry) => {
                entry.insert(value.into());
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(value.into()),
        }
    }

    /// Returns the slot for `key`, inserting `value` when the own entry is
    /// missing. An existing own entry is left untouched.
    #[inline]
    pub fn or_insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Value {
        self.entries.entry(key.into()).or_insert_with(|| value.into())
    }

    /// Removes the own entry for `key`, preserving the order of the rest.
    ///
    /// A fallback value for the same key becomes visible again.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Returns the number of own entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether there are no own entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over own entries in insertion order.
    ///
    /// Fallback entries are defaults, not data; they are never iterated.
    #[inline]
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Iterates mutably over own entries in insertion order.
    #[inline]
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    /// Iterates over own keys in insertion order.
    #[inline]
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    /// Iterates over own values in insertion order.
    #[inline]
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.entries.values()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Map {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(key, value)| (key.into(), value.into())));
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Map {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::Map;
    use crate::Value;

    #[test]
    fn lookup_reads_through_the_fallback_chain() {
        let base = Rc::new(Map::from([("a", Value::Int(1))]));
        let middle = Rc::new({
            let mut map = Map::with_fallback(base);
            map.insert("b", Value::Int(2));
            map
        });
        let leaf = Map::with_fallback(middle);

        assert_eq!(leaf.get("a"), Some(&Value::Int(1)));
        assert_eq!(leaf.get("b"), Some(&Value::Int(2)));
        assert_eq!(leaf.get("c"), None);

        assert!(leaf.contains("a"));
        assert!(!leaf.contains_own("a"));
        assert_eq!(leaf.get_own("a"), None);
    }

    #[test]
    fn insert_shadows_and_remove_unshadows() {
        let base = Rc::new(Map::from([("a", Value::Int(1))]));
        let mut map = Map::with_fallback(base);

        map.insert("a", Value::Int(10));
        assert_eq!(map.get("a"), Some(&Value::Int(10)));

        map.remove("a");
        assert_eq!(map.get("a"), Some(&Value::Int(1)));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut map = Map::new();
        map.insert("z", Value::Int(1));
        map.insert("a", Value::Int(2));
        map.insert("m", Value::Int(3));

        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn or_insert_keeps_existing_entries() {
        let mut map = Map::from([("a", Value::Int(1))]);

        assert_eq!(*map.or_insert("a", Value::Int(9)), Value::Int(1));
        assert_eq!(*map.or_insert("b", Value::Int(9)), Value::Int(9));
    }

    #[test]
    fn put_overwrites_and_returns_the_slot() {
        let mut map = Map::from([("a", Value::Int(1))]);

        let slot = map.put("a", Value::Int(2));
        *slot = Value::Int(3);
        assert_eq!(map.get("a"), Some(&Value::Int(3)));

        map.put("b", Value::Int(4));
        assert_eq!(map.get("b"), Some(&Value::Int(4)));
    }

    #[test]
    fn mutable_iteration_touches_own_entries_only() {
        let base = Rc::new(Map::from([("inherited", Value::Int(1))]));
        let mut map = Map::with_fallback(base);
        map.insert("a", Value::Int(10));
        map.insert("b", Value::Int(20));

        for (_, value) in map.iter_mut() {
            if let Value::Int(n) = value {
                *n += 1;
            }
        }

        let values: Vec<&Value> = map.values().collect();
        assert_eq!(values, [&Value::Int(11), &Value::Int(21)]);
        assert_eq!(map.get("inherited"), Some(&Value::Int(1)));
    }
}
