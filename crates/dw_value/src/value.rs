//! Provide the tree node type.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::func::NativeFn;
use crate::map::Map;

// -----------------------------------------------------------------------------
// Value

/// A node in a tree.
///
/// Every node is one of: a scalar (`Null`, `Bool`, `Int`, `Float`, `Str`),
/// an indexed container ([`List`](Value::List), contiguous from 0), a keyed
/// container ([`Map`](Value::Map), insertion-ordered, with optional
/// fallback), or a callable leaf ([`Func`](Value::Func)). The kind of a
/// node is structural: operations inspect it at traversal time rather than
/// requiring a declaration up front.
///
/// # Examples
///
/// ```
/// use dw_value::Value;
///
/// let tree = Value::from([
///     ("name", Value::from("deepwalk")),
///     ("tags", Value::from_iter([Value::from("tree"), Value::from("path")])),
/// ]);
///
/// let map = tree.as_map().unwrap();
/// assert_eq!(map.get("name").and_then(Value::as_str), Some("deepwalk"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// The empty scalar.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// An indexed container.
    List(Vec<Value>),
    /// A keyed container.
    Map(Map),
    /// A callable leaf.
    Func(NativeFn),
}

impl Value {
    /// Returns the structural kind of this node.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
            Value::Func(_) => ValueKind::Func,
        }
    }

    /// Returns whether this node is `Null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns whether this node is a container (a list or a map).
    ///
    /// Scalars and callables are leaves: traversal never descends into them.
    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_func(&self) -> Option<&NativeFn> {
        match self {
            Value::Func(func) => Some(func),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// ValueKind

/// The structural kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    List,
    Map,
    Func,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.pad("Null"),
            Self::Bool => f.pad("Bool"),
            Self::Int => f.pad("Int"),
            Self::Float => f.pad("Float"),
            Self::Str => f.pad("Str"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Func => f.pad("Func"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
