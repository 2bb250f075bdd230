//! Builder for [`TypeDef`].
//!
//! Definitions are immutable; every derived definition is produced by
//! copying an existing one into a builder, changing some fields, and
//! building again.

use crate::{
    ClassRef, Method, Modifier, Modifiers, Property, QualifiedName, TypeDef, TypeKind, TypeParamDef,
};

/// Accumulates the parts of a [`TypeDef`].
///
/// Super-type references added here lose any inline definition payload, so a
/// built definition only ever names its ancestors.
#[derive(Clone, Debug)]
pub struct TypeDefBuilder {
    def: TypeDef,
}

impl TypeDefBuilder {
    pub fn new(kind: TypeKind, name: impl Into<QualifiedName>) -> Self {
        TypeDefBuilder {
            def: TypeDef {
                kind,
                name: name.into(),
                modifiers: Modifiers::empty(),
                parameters: Vec::new(),
                extends_list: Vec::new(),
                implements_list: Vec::new(),
                properties: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: TypeKind) -> Self {
        self.def.kind = kind;
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<QualifiedName>) -> Self {
        self.def.name = name.into();
        self
    }

    #[must_use]
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.def.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.def.modifiers |= modifier.flag();
        self
    }

    /// Replace the declared generic parameters.
    #[must_use]
    pub fn parameters(mut self, parameters: Vec<TypeParamDef>) -> Self {
        self.def.parameters = parameters;
        self
    }

    #[must_use]
    pub fn parameter(mut self, parameter: TypeParamDef) -> Self {
        self.def.parameters.push(parameter);
        self
    }

    /// Replace the extends list.
    #[must_use]
    pub fn extends_list(mut self, supertypes: Vec<ClassRef>) -> Self {
        self.def.extends_list = supertypes
            .into_iter()
            .map(ClassRef::without_definition)
            .collect();
        self
    }

    /// Append to the extends list.
    #[must_use]
    pub fn extends(mut self, supertype: ClassRef) -> Self {
        self.def.extends_list.push(supertype.without_definition());
        self
    }

    /// Replace the implements list.
    #[must_use]
    pub fn implements_list(mut self, interfaces: Vec<ClassRef>) -> Self {
        self.def.implements_list = interfaces
            .into_iter()
            .map(ClassRef::without_definition)
            .collect();
        self
    }

    /// Append to the implements list.
    #[must_use]
    pub fn implements(mut self, interface: ClassRef) -> Self {
        self.def.implements_list.push(interface.without_definition());
        self
    }

    #[must_use]
    pub fn properties(mut self, properties: Vec<Property>) -> Self {
        self.def.properties = properties;
        self
    }

    #[must_use]
    pub fn property(mut self, property: Property) -> Self {
        self.def.properties.push(property);
        self
    }

    #[must_use]
    pub fn methods(mut self, methods: Vec<Method>) -> Self {
        self.def.methods = methods;
        self
    }

    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.def.methods.push(method);
        self
    }

    pub fn build(self) -> TypeDef {
        self.def
    }
}

impl From<&TypeDef> for TypeDefBuilder {
    fn from(def: &TypeDef) -> Self {
        TypeDefBuilder { def: def.clone() }
    }
}

impl From<TypeDef> for TypeDefBuilder {
    fn from(def: TypeDef) -> Self {
        TypeDefBuilder { def }
    }
}
