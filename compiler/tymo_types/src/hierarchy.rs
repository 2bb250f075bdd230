//! Hierarchy resolution.
//!
//! Two walks over the declared super-types of a definition:
//!
//! - [`Resolver::unroll_hierarchy`]: the definition and its transitive
//!   superclasses (extends edges only), de-duplicated by qualified name.
//!   Member and abstractness queries are answered from this set.
//! - [`Resolver::visit_parents`]: implements and extends edges, in post-order,
//!   so every ancestor is listed after its own ancestors and the most-derived
//!   type comes last. Emitters use this order to declare ancestors first.
//!
//! Both walks resolve super-types through the repository and stop at the
//! configured root type, at unresolved references, and at types already on
//! the current path, so they terminate on cyclic input.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use tymo_ir::{Property, QualifiedName, TypeDef, TypeRef};

use crate::error::render_path;
use crate::stack::ensure_sufficient_stack;
use crate::{DefinitionRepository, HierarchyError, ResolverConfig};

/// Answers hierarchy-aware questions against one repository.
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'r> {
    repository: &'r DefinitionRepository,
    config: &'r ResolverConfig,
}

/// The unrolled hierarchy of a definition.
///
/// Members are in discovery order: the definition itself first, then its
/// superclasses depth-first. Each qualified name appears at most once.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Hierarchy {
    members: Vec<Arc<TypeDef>>,
    cycles: Vec<Vec<QualifiedName>>,
}

impl Hierarchy {
    pub fn iter(&self) -> impl Iterator<Item = &Arc<TypeDef>> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether a definition with this qualified name is a member.
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|d| d.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &QualifiedName> {
        self.members.iter().map(|d| d.name())
    }

    /// Inheritance cycles the walk ran into and cut. Each path starts and
    /// ends with the same name.
    pub fn cycles(&self) -> &[Vec<QualifiedName>] {
        &self.cycles
    }

    pub fn into_members(self) -> Vec<Arc<TypeDef>> {
        self.members
    }
}

impl<'a> IntoIterator for &'a Hierarchy {
    type Item = &'a Arc<TypeDef>;
    type IntoIter = std::slice::Iter<'a, Arc<TypeDef>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Walk state for [`Resolver::unroll_hierarchy`].
#[derive(Default)]
struct Unroll {
    hierarchy: Hierarchy,
    seen: FxHashSet<QualifiedName>,
    /// Names on the current path, root-most first.
    path: Vec<QualifiedName>,
}

impl<'r> Resolver<'r> {
    pub fn new(repository: &'r DefinitionRepository, config: &'r ResolverConfig) -> Self {
        Resolver { repository, config }
    }

    #[inline]
    pub fn repository(&self) -> &'r DefinitionRepository {
        self.repository
    }

    #[inline]
    pub fn config(&self) -> &'r ResolverConfig {
        self.config
    }

    /// The definition and all of its superclasses.
    ///
    /// Empty for the root type. The walk never enters the root, stops at
    /// superclasses the repository cannot resolve, and cuts inheritance
    /// cycles (recording them in [`Hierarchy::cycles`]). Use
    /// [`try_unroll_hierarchy`](Self::try_unroll_hierarchy) to treat a cycle
    /// as an error instead.
    #[tracing::instrument(level = "trace", skip_all, fields(ty = %def.name()))]
    pub fn unroll_hierarchy(&self, def: &TypeDef) -> Hierarchy {
        let hierarchy = self.unroll(def);
        for path in hierarchy.cycles() {
            tracing::warn!(
                ty = %def.name(),
                cycle = %render_path(path),
                "inheritance cycle; hierarchy truncated"
            );
        }
        hierarchy
    }

    /// Like [`unroll_hierarchy`](Self::unroll_hierarchy), but an inheritance
    /// cycle is an error.
    pub fn try_unroll_hierarchy(&self, def: &TypeDef) -> Result<Hierarchy, HierarchyError> {
        let mut hierarchy = self.unroll(def);
        if hierarchy.cycles.is_empty() {
            Ok(hierarchy)
        } else {
            let path = hierarchy.cycles.swap_remove(0);
            Err(HierarchyError::Cycle { path })
        }
    }

    fn unroll(&self, def: &TypeDef) -> Hierarchy {
        let mut state = Unroll::default();
        self.unroll_into(&Arc::new(def.clone()), &mut state);
        state.hierarchy
    }

    fn unroll_into(&self, def: &Arc<TypeDef>, state: &mut Unroll) {
        let name = def.name();
        if self.config.is_root(name) {
            return;
        }
        if let Some(start) = state.path.iter().position(|n| n == name) {
            let mut cycle = state.path[start..].to_vec();
            cycle.push(name.clone());
            state.hierarchy.cycles.push(cycle);
            return;
        }
        if !state.seen.insert(name.clone()) {
            // Reached again through another path (diamond).
            return;
        }

        state.hierarchy.members.push(Arc::clone(def));
        state.path.push(name.clone());
        for superclass in def.extends_list() {
            if self.config.is_root(&superclass.name) {
                continue;
            }
            match self.repository.lookup_class(superclass) {
                Some(parent) => ensure_sufficient_stack(|| self.unroll_into(&parent, state)),
                None => {
                    tracing::debug!(
                        ty = %name,
                        superclass = %superclass.name,
                        "unresolved superclass; hierarchy walk stops here"
                    );
                }
            }
        }
        state.path.pop();
    }

    /// Whether the definition or any superclass declares a method named `name`.
    pub fn has_method(&self, def: &TypeDef, name: &str) -> bool {
        self.unroll_hierarchy(def)
            .iter()
            .flat_map(|d| d.methods())
            .any(|m| m.name == name)
    }

    /// Whether the definition or any superclass declares a property named `name`.
    pub fn has_property(&self, def: &TypeDef, name: &str) -> bool {
        self.unroll_hierarchy(def)
            .iter()
            .flat_map(|d| d.properties())
            .any(|p| p.name == name)
    }

    /// Declared properties of the definition and all superclasses, in
    /// hierarchy order. Shadowed names are not removed.
    pub fn all_properties(&self, def: &TypeDef) -> Vec<Property> {
        self.unroll_hierarchy(def)
            .iter()
            .flat_map(|d| d.properties().iter().cloned())
            .collect()
    }

    /// Whether the referenced type is declared abstract.
    ///
    /// `false` when the reference does not resolve.
    pub fn is_abstract(&self, reference: &TypeRef) -> bool {
        self.repository
            .lookup(reference)
            .is_some_and(|d| d.is_abstract())
    }

    /// Whether the referenced type is neither abstract nor an interface.
    ///
    /// Also `false` when the reference does not resolve: an unknown type is
    /// not known to be concrete.
    pub fn is_concrete(&self, reference: &TypeRef) -> bool {
        self.repository
            .lookup(reference)
            .is_some_and(|d| !d.is_abstract() && !d.is_interface())
    }

    /// Ancestors of `def` (implements and extends edges) in post-order,
    /// followed by `def` itself, appended to `types`.
    ///
    /// `visited` carries the names already handled; pass the same set across
    /// calls to emit each type once for a batch of roots. The root type, an
    /// unresolved reference, and any visited name end a branch.
    pub fn visit_parents(
        &self,
        def: &TypeDef,
        types: &mut Vec<Arc<TypeDef>>,
        visited: &mut FxHashSet<QualifiedName>,
    ) {
        self.visit_parents_of(&Arc::new(def.clone()), types, visited);
    }

    /// [`visit_parents`](Self::visit_parents) with fresh accumulators.
    #[tracing::instrument(level = "trace", skip_all, fields(ty = %def.name()))]
    pub fn parents(&self, def: &TypeDef) -> Vec<Arc<TypeDef>> {
        let mut types = Vec::new();
        self.visit_parents(def, &mut types, &mut FxHashSet::default());
        types
    }

    fn visit_parents_of(
        &self,
        def: &Arc<TypeDef>,
        types: &mut Vec<Arc<TypeDef>>,
        visited: &mut FxHashSet<QualifiedName>,
    ) {
        if self.config.is_root(def.name()) || !visited.insert(def.name().clone()) {
            return;
        }
        for parent_ref in def.implements_list().iter().chain(def.extends_list()) {
            match self.repository.lookup_class(parent_ref) {
                Some(parent) => {
                    ensure_sufficient_stack(|| self.visit_parents_of(&parent, types, visited));
                }
                None => {
                    tracing::debug!(
                        ty = %def.name(),
                        parent = %parent_ref.name,
                        "unresolved parent skipped"
                    );
                }
            }
        }
        types.push(Arc::clone(def));
    }

    /// Whether the referenced class is `target` or inherits from it through
    /// any chain of implements and extends edges.
    ///
    /// Every non-array class reference is an instance of the root type.
    /// Primitives, parameters, and arrays are instances of nothing.
    pub fn is_instance_of(&self, reference: &TypeRef, target: &str) -> bool {
        let TypeRef::Class(class) = reference else {
            return false;
        };
        if class.is_array() {
            return false;
        }
        if class.name == target || self.config.root == target {
            return true;
        }
        match self.repository.lookup_class(class) {
            Some(def) => self.inherits_from(&def, target, &mut FxHashSet::default()),
            None => false,
        }
    }

    fn inherits_from(
        &self,
        def: &TypeDef,
        target: &str,
        visited: &mut FxHashSet<QualifiedName>,
    ) -> bool {
        if !visited.insert(def.name().clone()) {
            return false;
        }
        def.implements_list()
            .iter()
            .chain(def.extends_list())
            .any(|parent_ref| {
                parent_ref.name == target
                    || self
                        .repository
                        .lookup_class(parent_ref)
                        .is_some_and(|parent| {
                            ensure_sufficient_stack(|| self.inherits_from(&parent, target, visited))
                        })
            })
    }
}
