//! Fully-qualified type names.
//!
//! A `QualifiedName` is the stable key of a declared type. Cloning is a
//! reference-count bump, so names can be stored freely in references,
//! repositories, and visited sets.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Dot-separated, fully-qualified name of a declared type.
///
/// Equality, ordering, and hashing are those of the underlying string, and
/// `QualifiedName: Borrow<str>` so maps keyed by name can be queried with a
/// plain `&str`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct QualifiedName(Arc<str>);

impl QualifiedName {
    /// Separator between package segments and the simple name.
    pub const SEPARATOR: char = '.';

    /// Create a name from its dotted form.
    pub fn new(name: &str) -> Self {
        QualifiedName(Arc::from(name))
    }

    /// The dotted form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the last separator, or `""` for an unqualified name.
    pub fn package(&self) -> &str {
        match self.0.rfind(Self::SEPARATOR) {
            Some(pos) => &self.0[..pos],
            None => "",
        }
    }

    /// The last segment.
    pub fn simple_name(&self) -> &str {
        match self.0.rfind(Self::SEPARATOR) {
            Some(pos) => &self.0[pos + 1..],
            None => &self.0,
        }
    }

    /// Iterate over the dot-separated segments, left to right.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.0.split(Self::SEPARATOR)
    }

    /// Build a name from a package and a simple name.
    ///
    /// An empty package yields the bare simple name.
    pub fn from_parts(package: &str, simple_name: &str) -> Self {
        if package.is_empty() {
            Self::new(simple_name)
        } else {
            QualifiedName(Arc::from(format!("{package}.{simple_name}")))
        }
    }
}

impl Borrow<str> for QualifiedName {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for QualifiedName {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QualifiedName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for QualifiedName {
    fn from(name: String) -> Self {
        QualifiedName(Arc::from(name))
    }
}

impl PartialEq<str> for QualifiedName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for QualifiedName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QualifiedName({})", self.0)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
