//! Provide the deep value mapper.

use alloc::string::ToString;
use alloc::vec::Vec;

use dw_value::{Map, Value};

use crate::key::Key;

/// Rebuilds a tree, mapping every leaf through `mapper`.
///
/// Containers are rebuilt fresh, preserving their shape: a list stays a
/// list of the same length, a map keeps its own entries in order *and* its
/// fallback reference. Everything else — scalars and callables — is a leaf,
/// passed to the callback together with the key sequence accumulated from
/// the root.
///
/// Fallback entries are never visited and never recursed into: the rebuilt
/// map shares the original's fallback reference, so inherited values stay
/// reachable on the copy, unmapped.
///
/// The input tree is not mutated.
///
/// # Examples
///
/// ```
/// use dw_access::map_values;
/// use dw_access::value::Value;
///
/// let tree = Value::from([(
///     "a",
///     Value::from_iter([Value::Int(1), Value::Int(2)]),
/// )]);
///
/// let doubled = map_values(&tree, |leaf, _| match leaf {
///     Value::Int(n) => Value::Int(n * 2),
///     other => other.clone(),
/// });
///
/// assert_eq!(
///     doubled,
///     Value::from([("a", Value::from_iter([Value::Int(2), Value::Int(4)]))]),
/// );
/// ```
pub fn map_values<F>(root: &Value, mut mapper: F) -> Value
where
    F: FnMut(&Value, &[Key]) -> Value,
{
    let mut trail = Vec::new();
    walk(root, &mut mapper, &mut trail)
}

fn walk<F>(node: &Value, mapper: &mut F, trail: &mut Vec<Key>) -> Value
where
    F: FnMut(&Value, &[Key]) -> Value,
{
    match node {
        Value::List(items) => {
            let mut rebuilt = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                trail.push(Key::Index(index));
                rebuilt.push(walk(item, mapper, trail));
                trail.pop();
            }
            Value::List(rebuilt)
        }
        Value::Map(map) => {
            let mut rebuilt = Map::with_capacity(map.len());
            rebuilt.set_fallback(map.fallback().cloned());
            for (name, item) in map.iter() {
                trail.push(Key::Name(name.clone()));
                let mapped = walk(item, mapper, trail);
                trail.pop();
                rebuilt.insert(name.to_string(), mapped);
            }
            Value::Map(rebuilt)
        }
        leaf => mapper(leaf, trail),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use dw_value::{Map, NativeFn, Value};

    use super::map_values;
    use crate::key::Key;
    use crate::path::Path;

    fn template_tree() -> Value {
        Value::from([(
            "a",
            Value::from([(
                "b",
                Value::from_iter([
                    Value::from([("c", Value::from("{{k}}"))]),
                    Value::from([("d", Value::from("{{k}}"))]),
                ]),
            )]),
        )])
    }

    #[test]
    fn shape_is_preserved() {
        let tree = template_tree();
        let mapped = map_values(&tree, |_, _| Value::from("x"));

        // `a.b` stayed a list, its elements stayed maps
        let b = Path::parse("a.b").unwrap().resolve(&mapped).unwrap();
        assert_eq!(b.as_list().map(|items| items.len()), Some(2));
        assert_eq!(
            Path::parse("a.b.0.c").unwrap().resolve(&mapped),
            Some(&Value::from("x")),
        );
        assert_eq!(
            Path::parse("a.b.1.d").unwrap().resolve(&mapped),
            Some(&Value::from("x")),
        );
    }

    #[test]
    fn the_input_is_not_mutated() {
        let tree = template_tree();
        let before = tree.clone();

        let _ = map_values(&tree, |_, _| Value::Int(0));
        assert_eq!(tree, before);
    }

    #[test]
    fn the_callback_sees_the_accumulated_path() {
        let tree = template_tree();
        let mut seen: Vec<String> = Vec::new();

        let _ = map_values(&tree, |_, trail| {
            let path: Path = trail.iter().cloned().collect();
            seen.push(path.to_string());
            Value::Null
        });

        assert_eq!(seen, [".a.b[0].c", ".a.b[1].d"]);
    }

    #[test]
    fn substitution_by_path_works() {
        let tree = template_tree();

        let mapped = map_values(&tree, |leaf, trail| match leaf.as_str() {
            Some("{{k}}") => match trail.last() {
                Some(Key::Name(name)) => Value::from(name.as_str()),
                _ => leaf.clone(),
            },
            _ => leaf.clone(),
        });

        assert_eq!(
            Path::parse("a.b.0.c").unwrap().resolve(&mapped),
            Some(&Value::from("c")),
        );
        assert_eq!(
            Path::parse("a.b.1.d").unwrap().resolve(&mapped),
            Some(&Value::from("d")),
        );
    }

    #[test]
    fn fallbacks_carry_over_unmapped() {
        let inherited = Rc::new(Map::from([("inherited", Value::from("{{k}}"))]));
        let mut map = Map::with_fallback(inherited.clone());
        map.insert("own", Value::from("{{k}}"));
        let tree = Value::Map(map);

        let mapped = map_values(&tree, |_, _| Value::from("mapped"));

        let rebuilt = mapped.as_map().unwrap();
        // the own entry was mapped, the inherited one was not even visited
        assert_eq!(rebuilt.get_own("own"), Some(&Value::from("mapped")));
        assert_eq!(rebuilt.get("inherited"), Some(&Value::from("{{k}}")));
        assert!(Rc::ptr_eq(rebuilt.fallback().unwrap(), &inherited));
    }

    #[test]
    fn callables_are_leaves() {
        let func = NativeFn::new(|_, _| Value::Null);
        let tree = Value::from([("f", Value::Func(func))]);

        let mapped = map_values(&tree, |leaf, _| Value::from(leaf.kind().to_string()));
        assert_eq!(
            Path::parse("f").unwrap().resolve(&mapped),
            Some(&Value::from("Func")),
        );
    }

    #[test]
    fn a_scalar_root_maps_directly() {
        let mapped = map_values(&Value::Int(2), |leaf, trail| {
            assert!(trail.is_empty());
            Value::Int(leaf.as_int().unwrap_or_default() + 1)
        });
        assert_eq!(mapped, Value::Int(3));
    }
}
