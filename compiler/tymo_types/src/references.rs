//! Reference extraction.
//!
//! Computes the set of type references a model element depends on: what an
//! emitter must be able to name (import) to write the element out.
//!
//! Extraction stops at the reference boundary. A property of type `C`
//! contributes `C` and `C`'s generic arguments, never the superclass or
//! members of `C`'s definition, so the result stays bounded by the element's
//! own signature.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use tymo_ir::visitor::{self, Visitor};
use tymo_ir::{
    ClassRef, Method, PrimitiveRef, Property, QualifiedName, TypeDef, TypeParamDef, TypeParamRef,
    TypeRef,
};

use crate::stack::ensure_sufficient_stack;

/// A de-duplicated set of references, in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct ReferenceSet {
    order: Vec<TypeRef>,
    seen: FxHashSet<TypeRef>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reference. Returns `false` if it was already present.
    pub fn insert(&mut self, reference: TypeRef) -> bool {
        if self.seen.contains(&reference) {
            return false;
        }
        self.seen.insert(reference.clone());
        self.order.push(reference);
        true
    }

    pub fn contains(&self, reference: &TypeRef) -> bool {
        self.seen.contains(reference)
    }

    /// Whether any class reference in the set names `name`, regardless of
    /// generic arguments or dimensions.
    pub fn contains_class(&self, name: &str) -> bool {
        self.order
            .iter()
            .any(|r| r.as_class().is_some_and(|c| c.name == name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeRef> {
        self.order.iter()
    }

    /// Distinct qualified names of the class references, sorted.
    ///
    /// This is the import list of the element the set was extracted from.
    pub fn class_names(&self) -> Vec<QualifiedName> {
        let mut names: Vec<QualifiedName> = self
            .order
            .iter()
            .filter_map(TypeRef::as_class)
            .map(|c| c.name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn into_vec(self) -> Vec<TypeRef> {
        self.order
    }
}

impl PartialEq for ReferenceSet {
    /// Set equality; insertion order is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl Eq for ReferenceSet {}

impl Extend<TypeRef> for ReferenceSet {
    fn extend<I: IntoIterator<Item = TypeRef>>(&mut self, iter: I) {
        for reference in iter {
            self.insert(reference);
        }
    }
}

impl FromIterator<TypeRef> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = TypeRef>>(iter: I) -> Self {
        let mut set = ReferenceSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for ReferenceSet {
    type Item = TypeRef;
    type IntoIter = std::vec::IntoIter<TypeRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReferenceSet {
    type Item = &'a TypeRef;
    type IntoIter = std::slice::Iter<'a, TypeRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// Model elements whose transitive references can be extracted.
pub trait References {
    /// Add every reference reachable from `self` to `out`.
    fn collect_references(&self, out: &mut ReferenceSet);

    /// Every reference reachable from `self`.
    fn references(&self) -> ReferenceSet {
        let mut out = ReferenceSet::new();
        self.collect_references(&mut out);
        out
    }
}

/// Visitor that records every reference it passes.
struct Collector<'a> {
    out: &'a mut ReferenceSet,
}

impl<'m> Visitor<'m> for Collector<'_> {
    fn visit_class_ref(&mut self, class: &'m ClassRef) {
        // Arguments of an already-recorded reference were recorded with it.
        if self.out.insert(TypeRef::Class(class.clone())) {
            ensure_sufficient_stack(|| visitor::walk_class_ref(self, class));
        }
    }

    fn visit_primitive_ref(&mut self, primitive: &'m PrimitiveRef) {
        self.out.insert(TypeRef::Primitive(primitive.clone()));
    }

    fn visit_type_param_ref(&mut self, param: &'m TypeParamRef) {
        self.out.insert(TypeRef::Param(param.clone()));
    }
}

macro_rules! impl_references {
    ($( ($ty:ty, $visit:ident) ),+ $(,)?) => {
        $(
            impl References for $ty {
                fn collect_references(&self, out: &mut ReferenceSet) {
                    Collector { out }.$visit(self);
                }
            }
        )+
    };
}

impl_references!(
    (TypeRef, visit_type_ref),
    (ClassRef, visit_class_ref),
    (Property, visit_property),
    (Method, visit_method),
    (TypeParamDef, visit_type_param_def),
    (TypeDef, visit_type_def),
);

impl<T: References + ?Sized> References for Arc<T> {
    fn collect_references(&self, out: &mut ReferenceSet) {
        (**self).collect_references(out);
    }
}

impl<T: References> References for [T] {
    fn collect_references(&self, out: &mut ReferenceSet) {
        for item in self {
            item.collect_references(out);
        }
    }
}
