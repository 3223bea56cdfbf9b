//! Provide the one-shot operation surface.

use dw_value::Value;

use crate::key::Key;
use crate::map_values::map_values;
use crate::parse::PathSyntaxError;
use crate::path::AsPath;

/// Deep operations on a tree, parsing the path per call.
///
/// Every method accepts any [`AsPath`] input: notation strings are parsed
/// on the spot, pre-split key sequences pass through untouched. When the
/// same path runs many times, parse it once into a
/// [`Path`](crate::Path) and use its methods instead.
///
/// A [`PathSyntaxError`] means the path string itself was malformed; a
/// missing branch is never an error, it is `false`/`None` inside `Ok`.
///
/// # Examples
///
/// ```
/// use dw_access::DeepAccess;
/// use dw_access::value::Value;
///
/// let mut tree = Value::from([(
///     "level1",
///     Value::from([("value", Value::from("value 1"))]),
/// )]);
///
/// // dot, bracket and quoted-bracket notation address the same key
/// assert!(tree.deep_in("level1.value").unwrap());
/// assert!(tree.deep_in("level1[value]").unwrap());
/// assert!(tree.deep_in(r#"level1["value"]"#).unwrap());
///
/// // absence is a result, not an error
/// assert_eq!(tree.deep_get("level1.level2.level3.0.blah").unwrap(), None);
///
/// tree.deep_set("level1.items.1", Value::Int(7)).unwrap();
/// assert_eq!(tree.deep_get("level1.items.1").unwrap(), Some(&Value::Int(7)));
/// ```
pub trait DeepAccess {
    /// Returns whether the path matches, reading through fallback maps.
    fn deep_in(&self, path: impl AsPath) -> Result<bool, PathSyntaxError>;

    /// Returns whether the path matches through own entries only.
    fn deep_has(&self, path: impl AsPath) -> Result<bool, PathSyntaxError>;

    /// Returns the addressed value, reading through fallback maps.
    fn deep_get(&self, path: impl AsPath) -> Result<Option<&Value>, PathSyntaxError>;

    /// Returns the addressed value through own entries only.
    fn deep_own(&self, path: impl AsPath) -> Result<Option<&Value>, PathSyntaxError>;

    /// Returns the addressed value mutably (own entries only).
    fn deep_get_mut(&mut self, path: impl AsPath) -> Result<Option<&mut Value>, PathSyntaxError>;

    /// Writes `value` at the path, creating missing intermediate
    /// containers, and returns the written slot.
    fn deep_set(
        &mut self,
        path: impl AsPath,
        value: impl Into<Value>,
    ) -> Result<&mut Value, PathSyntaxError>;

    /// Returns the slot at the path, writing `value` there first when the
    /// own-path does not already resolve.
    fn deep_default(
        &mut self,
        path: impl AsPath,
        value: impl Into<Value>,
    ) -> Result<&mut Value, PathSyntaxError>;

    /// Invokes the callable at the path with the given receiver and
    /// arguments. Missing or non-callable targets yield `Ok(None)`.
    fn deep_call(
        &self,
        path: impl AsPath,
        receiver: Option<&Value>,
        args: &[Value],
    ) -> Result<Option<Value>, PathSyntaxError>;

    /// Rebuilds the tree, mapping every leaf through `mapper` together
    /// with its accumulated key path. See [`map_values`].
    fn deep_map_values<F>(&self, mapper: F) -> Value
    where
        F: FnMut(&Value, &[Key]) -> Value;
}

impl DeepAccess for Value {
    #[inline]
    fn deep_in(&self, path: impl AsPath) -> Result<bool, PathSyntaxError> {
        Ok(path.as_path()?.exists_in(self))
    }

    #[inline]
    fn deep_has(&self, path: impl AsPath) -> Result<bool, PathSyntaxError> {
        Ok(path.as_path()?.exists_own_in(self))
    }

    #[inline]
    fn deep_get(&self, path: impl AsPath) -> Result<Option<&Value>, PathSyntaxError> {
        Ok(path.as_path()?.resolve(self))
    }

    #[inline]
    fn deep_own(&self, path: impl AsPath) -> Result<Option<&Value>, PathSyntaxError> {
        Ok(path.as_path()?.resolve_own(self))
    }

    #[inline]
    fn deep_get_mut(&mut self, path: impl AsPath) -> Result<Option<&mut Value>, PathSyntaxError> {
        Ok(path.as_path()?.resolve_mut(self))
    }

    #[inline]
    fn deep_set(
        &mut self,
        path: impl AsPath,
        value: impl Into<Value>,
    ) -> Result<&mut Value, PathSyntaxError> {
        Ok(path.as_path()?.set_in(self, value.into()))
    }

    #[inline]
    fn deep_default(
        &mut self,
        path: impl AsPath,
        value: impl Into<Value>,
    ) -> Result<&mut Value, PathSyntaxError> {
        Ok(path.as_path()?.or_insert_in(self, value.into()))
    }

    #[inline]
    fn deep_call(
        &self,
        path: impl AsPath,
        receiver: Option<&Value>,
        args: &[Value],
    ) -> Result<Option<Value>, PathSyntaxError> {
        Ok(path.as_path()?.call_in(self, receiver, args))
    }

    #[inline]
    fn deep_map_values<F>(&self, mapper: F) -> Value
    where
        F: FnMut(&Value, &[Key]) -> Value,
    {
        map_values(self, mapper)
    }
}

// -----------------------------------------------------------------------------
// Tests
