//! Hierarchy errors.

use tymo_ir::QualifiedName;

/// Error from a strict hierarchy walk.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    /// A type is its own ancestor.
    ///
    /// `path` starts and ends with the same name: `[A, B, A]` for
    /// `A extends B`, `B extends A`.
    #[error("cyclic inheritance: {}", render_path(.path))]
    Cycle { path: Vec<QualifiedName> },
}

pub(crate) fn render_path(path: &[QualifiedName]) -> String {
    path.iter()
        .map(QualifiedName::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}
