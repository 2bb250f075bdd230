//! Type references: descriptions of a type *usage* at some site.
//!
//! A reference names a type (a primitive, a declared class or interface, or a
//! generic parameter) together with its array dimensions and generic
//! arguments. References never own the definition they name; resolution is
//! done through the repository in `tymo_types`.
//!
//! Equality and hashing are structural over kind, name, dimensions, and
//! arguments.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{QualifiedName, TypeDef};

/// A reference to a type at a usage site.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A primitive type, e.g. `int` or `boolean[]`.
    Primitive(PrimitiveRef),
    /// A class or interface, e.g. `java.util.List<T>`.
    Class(ClassRef),
    /// A use of a declared generic parameter, e.g. `T[]`.
    Param(TypeParamRef),
}

impl TypeRef {
    /// The name this reference uses: a qualified name for classes, a keyword
    /// for primitives, a parameter name for parameters.
    pub fn name(&self) -> &str {
        match self {
            TypeRef::Primitive(p) => p.kind.keyword(),
            TypeRef::Class(c) => c.name.as_str(),
            TypeRef::Param(p) => &p.name,
        }
    }

    /// Number of array dimensions (0 for a non-array).
    pub fn dimensions(&self) -> u32 {
        match self {
            TypeRef::Primitive(p) => p.dimensions,
            TypeRef::Class(c) => c.dimensions,
            TypeRef::Param(p) => p.dimensions,
        }
    }

    /// Generic arguments. Only class references carry any.
    pub fn arguments(&self) -> &[TypeRef] {
        match self {
            TypeRef::Class(c) => &c.arguments,
            TypeRef::Primitive(_) | TypeRef::Param(_) => &[],
        }
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }

    #[inline]
    pub fn is_class(&self) -> bool {
        matches!(self, TypeRef::Class(_))
    }

    #[inline]
    pub fn is_parameter(&self) -> bool {
        matches!(self, TypeRef::Param(_))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        self.dimensions() > 0
    }

    /// The class reference, if this is one.
    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            TypeRef::Class(c) => Some(c),
            TypeRef::Primitive(_) | TypeRef::Param(_) => None,
        }
    }

    /// The same reference with `dimensions` array dimensions.
    #[must_use]
    pub fn with_dimensions(&self, dimensions: u32) -> TypeRef {
        match self {
            TypeRef::Primitive(p) => TypeRef::Primitive(PrimitiveRef {
                dimensions,
                ..p.clone()
            }),
            TypeRef::Class(c) => TypeRef::Class(c.with_dimensions(dimensions)),
            TypeRef::Param(p) => TypeRef::Param(TypeParamRef {
                dimensions,
                ..p.clone()
            }),
        }
    }
}

impl From<PrimitiveRef> for TypeRef {
    fn from(r: PrimitiveRef) -> Self {
        TypeRef::Primitive(r)
    }
}

impl From<ClassRef> for TypeRef {
    fn from(r: ClassRef) -> Self {
        TypeRef::Class(r)
    }
}

impl From<TypeParamRef> for TypeRef {
    fn from(r: TypeParamRef) -> Self {
        TypeRef::Param(r)
    }
}

/// Primitive types of the target language.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl Primitive {
    pub const ALL: [Primitive; 9] = [
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::Char,
        Primitive::Short,
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
        Primitive::Void,
    ];

    pub const fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Void => "void",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }
}

/// Reference to a primitive type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimitiveRef {
    pub kind: Primitive,
    pub dimensions: u32,
}

impl PrimitiveRef {
    pub const fn new(kind: Primitive) -> Self {
        PrimitiveRef {
            kind,
            dimensions: 0,
        }
    }

    pub const fn array(kind: Primitive, dimensions: u32) -> Self {
        PrimitiveRef { kind, dimensions }
    }
}

/// Reference to a use of a generic parameter, e.g. `T` in `List<T>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeParamRef {
    pub name: String,
    pub dimensions: u32,
}

impl TypeParamRef {
    pub fn new(name: impl Into<String>) -> Self {
        TypeParamRef {
            name: name.into(),
            dimensions: 0,
        }
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.dimensions = dimensions;
        self
    }
}

/// Reference to a class or interface.
///
/// May carry an inline definition supplied by the front end. The payload is
/// a resolution fallback only; it takes no part in equality or hashing.
#[derive(Clone, Debug)]
pub struct ClassRef {
    pub name: QualifiedName,
    pub dimensions: u32,
    pub arguments: Vec<TypeRef>,
    definition: Option<Arc<TypeDef>>,
}

impl ClassRef {
    /// A non-array, non-generic reference to `name`.
    pub fn new(name: impl Into<QualifiedName>) -> Self {
        ClassRef {
            name: name.into(),
            dimensions: 0,
            arguments: Vec::new(),
            definition: None,
        }
    }

    /// A reference to `name` with generic arguments.
    pub fn generic(name: impl Into<QualifiedName>, arguments: Vec<TypeRef>) -> Self {
        ClassRef {
            arguments,
            ..Self::new(name)
        }
    }

    #[must_use]
    pub fn with_dimensions(&self, dimensions: u32) -> Self {
        ClassRef {
            dimensions,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_arguments(&self, arguments: Vec<TypeRef>) -> Self {
        ClassRef {
            arguments,
            ..self.clone()
        }
    }

    /// Attach an inline definition payload.
    #[must_use]
    pub fn with_definition(mut self, definition: Arc<TypeDef>) -> Self {
        self.definition = Some(definition);
        self
    }

    /// Drop the inline definition payload, keeping the structural parts.
    #[must_use]
    pub fn without_definition(mut self) -> Self {
        self.definition = None;
        self
    }

    /// The inline definition payload, if the front end supplied one.
    pub fn definition(&self) -> Option<&Arc<TypeDef>> {
        self.definition.as_ref()
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        self.dimensions > 0
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.dimensions == other.dimensions
            && self.arguments == other.arguments
    }
}

impl Eq for ClassRef {}

impl Hash for ClassRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.dimensions.hash(state);
        self.arguments.hash(state);
    }
}

fn write_dimensions(f: &mut fmt::Formatter<'_>, dimensions: u32) -> fmt::Result {
    for _ in 0..dimensions {
        f.write_str("[]")?;
    }
    Ok(())
}

impl fmt::Display for PrimitiveRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.keyword())?;
        write_dimensions(f, self.dimensions)
    }
}

impl fmt::Display for TypeParamRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        write_dimensions(f, self.dimensions)
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.arguments.is_empty() {
            f.write_str("<")?;
            crate::format::write_comma_separated(f, &self.arguments)?;
            f.write_str(">")?;
        }
        write_dimensions(f, self.dimensions)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(p) => p.fmt(f),
            TypeRef::Class(c) => c.fmt(f),
            TypeRef::Param(p) => p.fmt(f),
        }
    }
}
