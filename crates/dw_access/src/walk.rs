//! Provide the existence and retrieval walkers.
//!
//! Four operations share one traversal skeleton, differing only in the
//! lookup policy applied at each step:
//!
//! - [`Path::exists_in`] / [`Path::resolve`] read through fallback maps.
//! - [`Path::exists_own_in`] / [`Path::resolve_own`] accept own entries
//!   only. Indexed containers have no own/inherited distinction; a valid
//!   index always matches.
//!
//! Missing branches are ordinary results, not errors: retrieval returns
//! `None`, a marker cleanly distinct from a stored `Null`.

use alloc::string::ToString;

use dw_value::{Map, Value};

use crate::key::Key;
use crate::path::Path;

/// Looks a name up in a map, honoring the lookup policy.
#[inline]
fn map_lookup<'r>(map: &'r Map, name: &str, own_only: bool) -> Option<&'r Value> {
    if own_only {
        map.get_own(name)
    } else {
        map.get(name)
    }
}

/// Resolves one traversal step.
fn step<'r>(node: &'r Value, key: &Key, own_only: bool) -> Option<&'r Value> {
    match node {
        Value::Map(map) => match key {
            Key::Name(name) => map_lookup(map, name, own_only),
            // an index key probes a map by its decimal name
            Key::Index(index) => map_lookup(map, &index.to_string(), own_only),
        },
        Value::List(items) => key.as_index().and_then(|index| items.get(index)),
        _ => None,
    }
}

/// Resolves one traversal step mutably. Own entries only: fallback values
/// are shared and cannot be borrowed mutably.
fn step_mut<'r>(node: &'r mut Value, key: &Key) -> Option<&'r mut Value> {
    match node {
        Value::Map(map) => match key {
            Key::Name(name) => map.get_mut(name),
            Key::Index(index) => map.get_mut(&index.to_string()),
        },
        Value::List(items) => key.as_index().and_then(|index| items.get_mut(index)),
        _ => None,
    }
}

impl Path {
    /// Returns whether every key of this path matches in `root`, reading
    /// through fallback maps.
    ///
    /// # Examples
    ///
    /// ```
    /// use dw_access::Path;
    /// use dw_access::value::Value;
    ///
    /// let tree = Value::from([("a", Value::from_iter([Value::Int(7)]))]);
    ///
    /// assert!(Path::parse("a.0").unwrap().exists_in(&tree));
    /// assert!(!Path::parse("a.1").unwrap().exists_in(&tree));
    /// ```
    #[inline]
    pub fn exists_in(&self, root: &Value) -> bool {
        self.resolve(root).is_some()
    }

    /// Returns whether every key of this path matches an own entry (or a
    /// valid list index) in `root`.
    #[inline]
    pub fn exists_own_in(&self, root: &Value) -> bool {
        self.resolve_own(root).is_some()
    }

    /// Returns the value this path addresses, reading through fallback
    /// maps, or `None` when any step misses.
    ///
    /// The empty path addresses `root` itself.
    pub fn resolve<'r>(&self, root: &'r Value) -> Option<&'r Value> {
        let mut node = root;
        for key in self.keys() {
            node = step(node, key, false)?;
        }
        Some(node)
    }

    /// Returns the value this path addresses through own entries only.
    pub fn resolve_own<'r>(&self, root: &'r Value) -> Option<&'r Value> {
        let mut node = root;
        for key in self.keys() {
            node = step(node, key, true)?;
        }
        Some(node)
    }

    /// Returns the value this path addresses, mutably.
    ///
    /// Descends through own entries only; values reachable only through a
    /// fallback map stay immutable (write through [`Path::set_in`] to
    /// shadow them).
    pub fn resolve_mut<'r>(&self, root: &'r mut Value) -> Option<&'r mut Value> {
        let mut node = root;
        for key in self.keys() {
            node = step_mut(node, key)?;
        }
        Some(node)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;

    use dw_value::{Map, Value};

    use crate::key::Key;
    use crate::path::Path;

    /// The shared fixture: `level1.level2` inherits `level3` (a list of one
    /// map) from a fallback, and owns `value`.
    fn fixture() -> Value {
        let inherited = Rc::new(Map::from([(
            "level3",
            Value::from_iter([Value::from([("value", Value::from("value 3"))])]),
        )]));

        let mut level2 = Map::with_fallback(inherited);
        level2.insert("value", Value::from("value 2"));

        Value::from([(
            "level1",
            Value::from([
                ("value", Value::from("value 1")),
                ("level2", Value::Map(level2)),
            ]),
        )])
    }

    fn path(notation: &str) -> Path {
        Path::parse(notation).unwrap()
    }

    #[test]
    fn exists_reads_through_fallbacks() {
        let tree = fixture();

        assert!(path("level1").exists_in(&tree));
        assert!(path("level1.value").exists_in(&tree));
        assert!(path("level1.level2.value").exists_in(&tree));
        assert!(path("level1.level2.level3.0").exists_in(&tree));
        assert!(path("level1.level2.level3.0.value").exists_in(&tree));

        assert!(!path("blah").exists_in(&tree));
        assert!(!path("level1.blah").exists_in(&tree));
        assert!(!path("level1.level2.level3.0.blah").exists_in(&tree));
    }

    #[test]
    fn exists_own_stops_at_fallbacks() {
        let tree = fixture();

        assert!(path("level1").exists_own_in(&tree));
        assert!(path("level1.value").exists_own_in(&tree));
        assert!(path("level1.level2.value").exists_own_in(&tree));

        // level3 is only reachable through the fallback
        assert!(!path("level1.level2.level3").exists_own_in(&tree));
        assert!(!path("level1.level2.level3.0").exists_own_in(&tree));
        assert!(!path("level1.level2.level3.0.value").exists_own_in(&tree));
    }

    #[test]
    fn resolve_returns_the_addressed_value() {
        let tree = fixture();

        assert_eq!(
            path("level1.value").resolve(&tree),
            Some(&Value::from("value 1")),
        );
        assert_eq!(
            path("level1.level2.level3.0.value").resolve(&tree),
            Some(&Value::from("value 3")),
        );

        assert_eq!(path("level1.blah").resolve(&tree), None);
        assert_eq!(path("level1.level2.level3.0.blah").resolve(&tree), None);
    }

    #[test]
    fn resolve_own_misses_inherited_branches() {
        let tree = fixture();

        assert_eq!(
            path("level1.level2.value").resolve_own(&tree),
            Some(&Value::from("value 2")),
        );
        assert_eq!(path("level1.level2.level3").resolve_own(&tree), None);
        assert_eq!(path("level1.level2.level3.0.value").resolve_own(&tree), None);
    }

    #[test]
    fn pre_split_paths_walk_like_parsed_ones() {
        let tree = fixture();
        let keys = Path::from_iter([
            Key::from("level1"),
            Key::from("level2"),
            Key::from("level3"),
            Key::from(0_usize),
            Key::from("value"),
        ]);

        assert!(keys.exists_in(&tree));
        assert!(!keys.exists_own_in(&tree));
        assert_eq!(keys.resolve(&tree), Some(&Value::from("value 3")));
    }

    #[test]
    fn index_keys_probe_maps_by_decimal_name() {
        let tree = Value::from([("0", Value::from("zero"))]);

        assert_eq!(
            Path::from_iter([Key::from(0_usize)]).resolve(&tree),
            Some(&Value::from("zero")),
        );
    }

    #[test]
    fn name_keys_probe_lists_when_canonical() {
        let tree = Value::from_iter([Value::from("first")]);

        assert!(path("0").exists_in(&tree));
        assert!(!path("00").exists_in(&tree));
        assert!(!path("blah").exists_in(&tree));
    }

    #[test]
    fn empty_path_addresses_the_root() {
        let tree = fixture();
        let empty = Path::default();

        assert!(empty.exists_in(&tree));
        assert!(empty.exists_own_in(&tree));
        assert_eq!(empty.resolve(&tree), Some(&tree));

        // scalars too: the degenerate case stays consistent
        let scalar = Value::Int(3);
        assert!(empty.exists_in(&scalar));
        assert_eq!(empty.resolve(&scalar), Some(&scalar));
    }

    #[test]
    fn scalars_terminate_traversal() {
        let tree = Value::from([("a", Value::from(1))]);

        assert!(!path("a.b").exists_in(&tree));
        assert_eq!(path("a.b.c").resolve(&tree), None);
    }

    #[test]
    fn resolve_mut_reaches_own_entries() {
        let mut tree = fixture();

        if let Some(slot) = path("level1.value").resolve_mut(&mut tree) {
            *slot = Value::from("rewritten");
        }
        assert_eq!(
            path("level1.value").resolve(&tree),
            Some(&Value::from("rewritten")),
        );

        // inherited branches are not mutably reachable
        assert!(path("level1.level2.level3.0").resolve_mut(&mut tree).is_none());
    }
}
