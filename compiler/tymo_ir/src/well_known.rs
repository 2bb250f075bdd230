//! Names and references of types the model treats specially.

use crate::{
    ClassRef, Modifier, Primitive, PrimitiveRef, QualifiedName, TypeDef, TypeKind, TypeRef,
};

/// The universal root of the class hierarchy.
pub const JAVA_LANG_OBJECT: &str = "java.lang.Object";
pub const JAVA_LANG_BOOLEAN: &str = "java.lang.Boolean";
pub const JAVA_LANG_STRING: &str = "java.lang.String";

pub const JAVA_UTIL_COLLECTION: &str = "java.util.Collection";
pub const JAVA_UTIL_LIST: &str = "java.util.List";
pub const JAVA_UTIL_SET: &str = "java.util.Set";
pub const JAVA_UTIL_MAP: &str = "java.util.Map";

pub const JAVA_UTIL_OPTIONAL: &str = "java.util.Optional";
pub const JAVA_UTIL_OPTIONAL_INT: &str = "java.util.OptionalInt";
pub const JAVA_UTIL_OPTIONAL_DOUBLE: &str = "java.util.OptionalDouble";
pub const JAVA_UTIL_OPTIONAL_LONG: &str = "java.util.OptionalLong";

pub const PRIMITIVE_BOOLEAN_REF: PrimitiveRef = PrimitiveRef::new(Primitive::Boolean);
pub const VOID_REF: PrimitiveRef = PrimitiveRef::new(Primitive::Void);

/// The definition of the universal root type.
pub fn object() -> TypeDef {
    TypeDef::builder(TypeKind::Class, JAVA_LANG_OBJECT)
        .modifier(Modifier::Public)
        .build()
}

pub fn object_ref() -> ClassRef {
    ClassRef::new(QualifiedName::new(JAVA_LANG_OBJECT))
}

pub fn boolean_ref() -> TypeRef {
    TypeRef::Class(ClassRef::new(JAVA_LANG_BOOLEAN))
}

pub fn string_ref() -> TypeRef {
    TypeRef::Class(ClassRef::new(JAVA_LANG_STRING))
}
