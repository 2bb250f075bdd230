//! Type definitions: the canonical declaration of a named type.
//!
//! A `TypeDef` is immutable. Its super-types are `ClassRef`s, never inline
//! definitions, so a cyclic declaration graph (`A extends B`, `B` has a
//! property of type `A`) stays a tree of values in memory.

use crate::{ClassRef, Modifiers, QualifiedName, TypeDefBuilder, TypeParamRef, TypeRef};

/// The kind of a declared type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
}

impl TypeKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Annotation => "@interface",
        }
    }
}

/// A declared generic parameter, e.g. `T extends Comparable<T>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeParamDef {
    /// Parameter name (`T`).
    pub name: String,
    /// Upper bounds, in declaration order. Empty means unbounded.
    pub bounds: Vec<ClassRef>,
}

impl TypeParamDef {
    pub fn new(name: impl Into<String>) -> Self {
        TypeParamDef {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bounded(name: impl Into<String>, bounds: Vec<ClassRef>) -> Self {
        TypeParamDef {
            name: name.into(),
            bounds,
        }
    }

    /// A use of this parameter at a reference site.
    pub fn to_reference(&self) -> TypeParamRef {
        TypeParamRef::new(self.name.clone())
    }
}

/// A field-like member: a declared property, or a method argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Property {
    pub name: String,
    pub type_ref: TypeRef,
    pub modifiers: Modifiers,
}

impl Property {
    pub fn new(name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Self {
        Property {
            name: name.into(),
            type_ref: type_ref.into(),
            modifiers: Modifiers::empty(),
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_type(&self, type_ref: TypeRef) -> Self {
        Property {
            type_ref,
            ..self.clone()
        }
    }
}

/// A declared method.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Method {
    pub name: String,
    pub return_type: TypeRef,
    /// Arguments in declaration order.
    pub arguments: Vec<Property>,
    /// Declared (`throws`) exceptions.
    pub exceptions: Vec<ClassRef>,
    pub modifiers: Modifiers,
    /// Method-level generic parameters (`<T> T first(List<T>)`).
    pub parameters: Vec<TypeParamDef>,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: impl Into<TypeRef>) -> Self {
        Method {
            name: name.into(),
            return_type: return_type.into(),
            arguments: Vec::new(),
            exceptions: Vec::new(),
            modifiers: Modifiers::empty(),
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_argument(mut self, argument: Property) -> Self {
        self.arguments.push(argument);
        self
    }

    #[must_use]
    pub fn with_exception(mut self, exception: ClassRef) -> Self {
        self.exceptions.push(exception);
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: Vec<TypeParamDef>) -> Self {
        self.parameters = parameters;
        self
    }
}

/// The canonical declaration of a named type.
///
/// Built with [`TypeDefBuilder`]; never mutated afterwards. Equality is
/// structural over every attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDef {
    pub(crate) kind: TypeKind,
    pub(crate) name: QualifiedName,
    pub(crate) modifiers: Modifiers,
    pub(crate) parameters: Vec<TypeParamDef>,
    pub(crate) extends_list: Vec<ClassRef>,
    pub(crate) implements_list: Vec<ClassRef>,
    pub(crate) properties: Vec<Property>,
    pub(crate) methods: Vec<Method>,
}

impl TypeDef {
    /// Start building a definition named `name`.
    pub fn builder(kind: TypeKind, name: impl Into<QualifiedName>) -> TypeDefBuilder {
        TypeDefBuilder::new(kind, name)
    }

    /// Start building a copy of this definition.
    pub fn to_builder(&self) -> TypeDefBuilder {
        TypeDefBuilder::from(self)
    }

    #[inline]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The fully-qualified name; the repository key.
    #[inline]
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    #[inline]
    pub fn fully_qualified_name(&self) -> &str {
        self.name.as_str()
    }

    pub fn package(&self) -> &str {
        self.name.package()
    }

    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }

    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Declared generic parameters.
    #[inline]
    pub fn parameters(&self) -> &[TypeParamDef] {
        &self.parameters
    }

    /// Directly extended types. One entry for a class, any number for an
    /// interface.
    #[inline]
    pub fn extends_list(&self) -> &[ClassRef] {
        &self.extends_list
    }

    /// Directly implemented interfaces.
    #[inline]
    pub fn implements_list(&self) -> &[ClassRef] {
        &self.implements_list
    }

    #[inline]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    #[inline]
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    #[inline]
    pub fn is_abstract(&self) -> bool {
        self.modifiers.is_abstract()
    }

    #[inline]
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    #[inline]
    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    #[inline]
    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }

    /// Find a declared (not inherited) property by name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Find declared (not inherited) methods by name, overloads included.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Method> + 'a {
        self.methods.iter().filter(move |m| m.name == name)
    }

    /// A reference to this type with the given generic arguments.
    pub fn to_reference(&self, arguments: Vec<TypeRef>) -> ClassRef {
        ClassRef::generic(self.name.clone(), arguments)
    }

    /// A reference to this type as seen from inside its own declaration:
    /// every declared parameter is passed through as an argument.
    pub fn to_internal_reference(&self) -> ClassRef {
        self.to_reference(
            self.parameters
                .iter()
                .map(|p| TypeRef::Param(p.to_reference()))
                .collect(),
        )
    }
}
