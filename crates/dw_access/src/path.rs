//! Provide the parsed, reusable property path.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::slice;

use fastvec::FastVec;

use crate::key::Key;
use crate::parse::{PathSyntaxError, parse_path};

// -----------------------------------------------------------------------------
// Path

/// A parsed property path: an immutable ordered key sequence.
///
/// Parsing happens once, at construction; afterwards a `Path` can be run
/// against any number of trees without reparsing. Reparsing the same
/// notation string always yields an equal `Path`.
///
/// # Examples
///
/// ```
/// use dw_access::{Key, Path};
///
/// let path = Path::parse("servers[0].host").unwrap();
/// assert_eq!(path.keys(), [
///     Key::from("servers"),
///     Key::from("0"),
///     Key::from("host"),
/// ]);
///
/// // Pre-split paths skip the scanner entirely, so a literal key may
/// // contain delimiter characters.
/// let path = Path::from_iter([Key::from("dotted.key"), Key::from(3_usize)]);
/// assert_eq!(path.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Box<[Key]>);

impl Path {
    /// Parses a dot/bracket notation string.
    ///
    /// Returns [`PathSyntaxError`] when a delimiter appears inside an
    /// unterminated bracket segment.
    #[inline]
    pub fn parse(path: &str) -> Result<Self, PathSyntaxError> {
        parse_path(path)
    }

    #[inline]
    pub(crate) fn from_boxed(keys: Box<[Key]>) -> Self {
        Self(keys)
    }

    /// Returns the ordered key sequence.
    #[inline]
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    /// Returns the number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the path has no keys.
    ///
    /// An empty path addresses the root itself.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the keys in order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Key> {
        self.0.iter()
    }

    /// Concatenates two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dw_access::Path;
    /// let head = Path::parse("a.b").unwrap();
    /// let tail = Path::parse("[2].c").unwrap();
    /// assert_eq!(head.concat(tail), Path::parse("a.b[2].c").unwrap());
    /// ```
    pub fn concat(self, other: Path) -> Path {
        let mut vec: FastVec<Key, 12> = FastVec::new();
        let data = vec.data();
        data.extend(self.0);
        data.extend(other.0);
        Self(vec.into_boxed_slice())
    }
}

impl From<Vec<Key>> for Path {
    #[inline]
    fn from(keys: Vec<Key>) -> Self {
        Self(keys.into_boxed_slice())
    }
}

impl From<&[Key]> for Path {
    #[inline]
    fn from(keys: &[Key]) -> Self {
        Self(keys.to_vec().into_boxed_slice())
    }
}

impl FromIterator<Key> for Path {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = slice::Iter<'a, Key>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes the path in notation form, delimiters re-escaped.
///
/// The output re-parses to a traversal-equivalent path: name keys survive
/// exactly, index keys come back in name form (`[3]` parses to the name
/// `"3"`, which addresses the same element).
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in &self.0 {
            fmt::Display::fmt(key, f)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// AsPath

/// A path input: a notation string, parsed on use, or an already-ordered
/// key sequence, passed through untouched.
///
/// The pass-through impls are what make literal keys containing delimiter
/// characters addressable — a pre-split sequence never meets the scanner.
pub trait AsPath {
    /// Returns the canonical key-sequence form.
    fn as_path(&self) -> Result<Cow<'_, Path>, PathSyntaxError>;
}

impl AsPath for str {
    #[inline]
    fn as_path(&self) -> Result<Cow<'_, Path>, PathSyntaxError> {
        Path::parse(self).map(Cow::Owned)
    }
}

impl AsPath for alloc::string::String {
    #[inline]
    fn as_path(&self) -> Result<Cow<'_, Path>, PathSyntaxError> {
        self.as_str().as_path()
    }
}

impl AsPath for Path {
    #[inline]
    fn as_path(&self) -> Result<Cow<'_, Path>, PathSyntaxError> {
        Ok(Cow::Borrowed(self))
    }
}

impl AsPath for [Key] {
    #[inline]
    fn as_path(&self) -> Result<Cow<'_, Path>, PathSyntaxError> {
        Ok(Cow::Owned(Path::from(self)))
    }
}

impl<const N: usize> AsPath for [Key; N] {
    #[inline]
    fn as_path(&self) -> Result<Cow<'_, Path>, PathSyntaxError> {
        self.as_slice().as_path()
    }
}

impl AsPath for Vec<Key> {
    #[inline]
    fn as_path(&self) -> Result<Cow<'_, Path>, PathSyntaxError> {
        self.as_slice().as_path()
    }
}

impl AsPath for Key {
    #[inline]
    fn as_path(&self) -> Result<Cow<'_, Path>, PathSyntaxError> {
        Ok(Cow::Owned(core::iter::once(self.clone()).collect()))
    }
}

impl<T: AsPath + ?Sized> AsPath for &T {
    #[inline]
    fn as_path(&self) -> Result<Cow<'_, Path>, PathSyntaxError> {
        (**self).as_path()
    }
}

// -----------------------------------------------------------------------------
// Tests
