//! Structural queries over references.
//!
//! The free functions look only at the reference itself. The collection
//! queries on [`Resolver`] need the hierarchy of the referenced type, so they
//! go through the repository.

use tymo_ir::well_known::{
    JAVA_LANG_BOOLEAN, JAVA_UTIL_COLLECTION, JAVA_UTIL_LIST, JAVA_UTIL_MAP, JAVA_UTIL_OPTIONAL,
    JAVA_UTIL_OPTIONAL_DOUBLE, JAVA_UTIL_OPTIONAL_INT, JAVA_UTIL_OPTIONAL_LONG, JAVA_UTIL_SET,
};
use tymo_ir::{Primitive, TypeRef};

use crate::Resolver;

#[inline]
pub fn is_primitive(ty: &TypeRef) -> bool {
    ty.is_primitive()
}

#[inline]
pub fn is_array(ty: &TypeRef) -> bool {
    ty.is_array()
}

/// `boolean` or `java.lang.Boolean`, not an array of either.
pub fn is_boolean(ty: &TypeRef) -> bool {
    match ty {
        TypeRef::Primitive(p) => p.kind == Primitive::Boolean && p.dimensions == 0,
        TypeRef::Class(c) => c.name == JAVA_LANG_BOOLEAN && c.dimensions == 0,
        TypeRef::Param(_) => false,
    }
}

/// Compares the qualified name only; `Optional[]` is still an optional.
fn is_class_named(ty: &TypeRef, name: &str) -> bool {
    ty.as_class().is_some_and(|c| c.name == name)
}

pub fn is_optional(ty: &TypeRef) -> bool {
    is_class_named(ty, JAVA_UTIL_OPTIONAL)
}

pub fn is_optional_int(ty: &TypeRef) -> bool {
    is_class_named(ty, JAVA_UTIL_OPTIONAL_INT)
}

pub fn is_optional_double(ty: &TypeRef) -> bool {
    is_class_named(ty, JAVA_UTIL_OPTIONAL_DOUBLE)
}

pub fn is_optional_long(ty: &TypeRef) -> bool {
    is_class_named(ty, JAVA_UTIL_OPTIONAL_LONG)
}

impl Resolver<'_> {
    /// Whether the type is, or inherits from, `java.util.Collection`.
    pub fn is_collection(&self, ty: &TypeRef) -> bool {
        self.is_instance_of(ty, JAVA_UTIL_COLLECTION)
    }

    pub fn is_list(&self, ty: &TypeRef) -> bool {
        self.is_instance_of(ty, JAVA_UTIL_LIST)
    }

    pub fn is_set(&self, ty: &TypeRef) -> bool {
        self.is_instance_of(ty, JAVA_UTIL_SET)
    }

    pub fn is_map(&self, ty: &TypeRef) -> bool {
        self.is_instance_of(ty, JAVA_UTIL_MAP)
    }
}
