//! Provide the call-at-path helper.

use dw_value::Value;

use crate::path::Path;

impl Path {
    /// Resolves this path and, only when it addresses a callable, invokes
    /// it bound to `receiver` with `args`.
    ///
    /// A missing or non-callable target is ordinary absence (`None`), not
    /// an error — deep call targets are probed speculatively, like deep
    /// reads.
    ///
    /// # Examples
    ///
    /// ```
    /// use dw_access::Path;
    /// use dw_access::value::{NativeFn, Value};
    ///
    /// let tree = Value::from([(
    ///     "math",
    ///     Value::from([(
    ///         "sum",
    ///         Value::Func(NativeFn::new(|_, args| {
    ///             Value::Int(args.iter().filter_map(Value::as_int).sum())
    ///         })),
    ///     )]),
    /// )]);
    ///
    /// let sum = Path::parse("math.sum").unwrap();
    /// assert_eq!(
    ///     sum.call_in(&tree, None, &[Value::Int(2), Value::Int(3)]),
    ///     Some(Value::Int(5)),
    /// );
    ///
    /// // Missing and non-callable targets degrade to absence.
    /// assert_eq!(Path::parse("math.nope").unwrap().call_in(&tree, None, &[]), None);
    /// assert_eq!(Path::parse("math").unwrap().call_in(&tree, None, &[]), None);
    /// ```
    pub fn call_in(&self, root: &Value, receiver: Option<&Value>, args: &[Value]) -> Option<Value> {
        match self.resolve(root) {
            Some(Value::Func(func)) => Some(func.invoke(receiver, args)),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use dw_value::{NativeFn, Value};

    use crate::path::Path;

    fn path(notation: &str) -> Path {
        Path::parse(notation).unwrap()
    }

    fn fixture() -> Value {
        Value::from([(
            "api",
            Value::from([
                ("version", Value::Int(2)),
                (
                    "describe",
                    Value::Func(NativeFn::new(|receiver, args| {
                        let version = receiver
                            .and_then(|this| {
                                Path::parse("api.version").ok()?.resolve(this).cloned()
                            })
                            .and_then(|value| value.as_int())
                            .unwrap_or_default();
                        Value::Int(version + args.len() as i64)
                    })),
                ),
            ]),
        )])
    }

    #[test]
    fn callables_run_with_receiver_and_args() {
        let tree = fixture();

        let result = path("api.describe").call_in(&tree, Some(&tree), &[Value::Null]);
        assert_eq!(result, Some(Value::Int(3)));

        let result = path("api.describe").call_in(&tree, None, &[]);
        assert_eq!(result, Some(Value::Int(0)));
    }

    #[test]
    fn non_callable_targets_are_absent() {
        let tree = fixture();

        assert_eq!(path("api.version").call_in(&tree, None, &[]), None);
        assert_eq!(path("api").call_in(&tree, None, &[]), None);
    }

    #[test]
    fn missing_targets_are_absent() {
        let tree = fixture();

        assert_eq!(path("api.missing").call_in(&tree, None, &[]), None);
        assert_eq!(path("blah.blah").call_in(&tree, None, &[]), None);
    }
}
