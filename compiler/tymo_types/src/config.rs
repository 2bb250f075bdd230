//! Resolver configuration.

use tymo_ir::{well_known, QualifiedName};

/// Configuration for hierarchy resolution.
///
/// Passed explicitly to [`Resolver`](crate::Resolver); there is no ambient
/// default instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    /// The universal root type. Walks stop here, and unrolling the root
    /// itself yields an empty hierarchy.
    /// Defaults to `java.lang.Object`.
    pub root: QualifiedName,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            root: QualifiedName::new(well_known::JAVA_LANG_OBJECT),
        }
    }
}

impl ResolverConfig {
    /// Create a config with a different root type.
    pub fn with_root(root: impl Into<QualifiedName>) -> Self {
        ResolverConfig { root: root.into() }
    }

    #[inline]
    pub fn is_root(&self, name: &QualifiedName) -> bool {
        self.root == *name
    }
}
