//! Provide the autovivifying setter.
//!
//! Writes walk the tree like the retrieval walkers but create what is
//! missing: a non-container value found where the path still has keys left
//! is replaced with a fresh container, chosen by the shape of the *next*
//! key — a list for an index-like key, a map otherwise. The final key is
//! assigned unconditionally.
//!
//! The destructive cases are deliberate (loss-tolerant config patching):
//! a scalar in the way of a longer path is overwritten, a list written
//! with a name key degrades to a map with decimal keys, and a scalar root
//! under a non-empty path becomes a fresh container. Each such overwrite
//! is reported through `log::trace!` and nothing else.

use alloc::string::ToString;
use alloc::vec::Vec;

use dw_value::{Map, Value};

use crate::key::Key;
use crate::path::Path;

/// Creates the container kind `key` calls for.
fn fresh_container(key: &Key) -> Value {
    if key.as_index().is_some() {
        Value::List(Vec::new())
    } else {
        Value::Map(Map::new())
    }
}

/// Rebuilds a list as a map keyed by decimal position, keeping every
/// element reachable at its old path.
fn list_into_map(items: Vec<Value>) -> Map {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item))
        .collect()
}

/// Makes `node` a container able to hold `key`, then returns the slot for
/// `key`. A missing slot is created holding `vacant`; an existing slot is
/// returned untouched.
fn slot<'r>(node: &'r mut Value, key: &Key, vacant: Value) -> &'r mut Value {
    let index = key.as_index();

    match node {
        Value::Map(_) => {}
        Value::List(_) if index.is_some() => {}
        Value::List(items) => {
            log::trace!("deep set: converting a list to a map for name key `{key}`");
            let entries = core::mem::take(items);
            *node = Value::Map(list_into_map(entries));
        }
        Value::Null => *node = fresh_container(key),
        _ => {
            log::trace!("deep set: overwriting a {} value with a container", node.kind());
            *node = fresh_container(key);
        }
    }

    match (node, index) {
        (Value::List(items), Some(index)) => {
            if items.len() <= index {
                // missing list slots pad with nulls
                items.resize(index + 1, Value::Null);
            }
            &mut items[index]
        }
        (Value::Map(map), _) => match key {
            Key::Name(name) => map.or_insert(name.as_str(), vacant),
            Key::Index(index) => map.or_insert(index.to_string(), vacant),
        },
        _ => unreachable!("the base was just normalized for the key"),
    }
}

/// Walks the non-final keys, creating intermediate containers sized to the
/// following key, and returns the node holding the final slot.
fn descend<'r>(root: &'r mut Value, keys: &[Key]) -> &'r mut Value {
    let mut node = root;
    for (position, key) in keys[..keys.len() - 1].iter().enumerate() {
        let target = slot(node, key, Value::Null);
        if !target.is_container() {
            if !target.is_null() {
                log::trace!(
                    "deep set: overwriting a {} value on the way to `{}`",
                    target.kind(),
                    keys[position + 1],
                );
            }
            *target = fresh_container(&keys[position + 1]);
        }
        node = target;
    }
    node
}

impl Path {
    /// Writes `value` at this path in `root`, creating missing intermediate
    /// containers, and returns the written slot.
    ///
    /// The empty path writes nothing and returns `root`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dw_access::Path;
    /// use dw_access::value::{Value, ValueKind};
    ///
    /// let mut tree = Value::Map(Default::default());
    /// Path::parse("a.0.b").unwrap().set_in(&mut tree, Value::Int(1));
    ///
    /// // `a` autovivified as a list because the next key is index-like
    /// let a = Path::parse("a").unwrap().resolve(&tree).unwrap();
    /// assert_eq!(a.kind(), ValueKind::List);
    /// assert_eq!(
    ///     Path::parse("a.0.b").unwrap().resolve(&tree),
    ///     Some(&Value::Int(1)),
    /// );
    /// ```
    pub fn set_in<'r>(&self, root: &'r mut Value, value: Value) -> &'r mut Value {
        let keys = self.keys();
        let Some(last) = keys.last() else {
            return root;
        };

        let node = descend(root, keys);
        let target = slot(node, last, Value::Null);
        *target = value;
        target
    }

    /// Returns the slot at this path, writing `value` there first when the
    /// own-path does not already resolve.
    ///
    /// The presence test mirrors the write: own entries and list indices
    /// count, a value reachable only through a fallback map does not (it
    /// gets shadowed, exactly as [`Path::set_in`] would shadow it).
    ///
    /// # Examples
    ///
    /// ```
    /// use dw_access::Path;
    /// use dw_access::value::Value;
    ///
    /// let mut tree = Value::from([("port", Value::Int(80))]);
    ///
    /// let port = Path::parse("port").unwrap();
    /// assert_eq!(*port.or_insert_in(&mut tree, Value::Int(8080)), Value::Int(80));
    ///
    /// let host = Path::parse("host").unwrap();
    /// assert_eq!(
    ///     *host.or_insert_in(&mut tree, Value::from("localhost")),
    ///     Value::from("localhost"),
    /// );
    /// ```
    pub fn or_insert_in<'r>(&self, root: &'r mut Value, value: Value) -> &'r mut Value {
        let keys = self.keys();
        let Some(last) = keys.last() else {
            return root;
        };

        let node = descend(root, keys);
        slot(node, last, value)
    }
}

// -----------------------------------------------------------------------------
// Tests
