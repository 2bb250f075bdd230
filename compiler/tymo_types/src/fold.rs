//! Structural transformation of type references.
//!
//! Implement [`TypeRefFolder`] and override the `fold_*` methods for the
//! variants you want to rewrite. The default `fold` dispatches by variant and
//! rebuilds class references from their folded arguments.
//!
//! # Example
//!
//! ```text
//! struct Erase;
//!
//! impl TypeRefFolder for Erase {
//!     fn fold_param(&mut self, param: &TypeParamRef) -> TypeRef {
//!         TypeRef::Class(well_known::object_ref().with_dimensions(param.dimensions))
//!     }
//! }
//! ```

use tymo_ir::{ClassRef, Method, PrimitiveRef, Property, TypeParamDef, TypeParamRef, TypeRef};

use crate::stack::ensure_sufficient_stack;

/// Rewrites references bottom-up.
pub trait TypeRefFolder {
    /// Fold a reference by dispatching to variant-specific methods.
    fn fold(&mut self, ty: &TypeRef) -> TypeRef {
        match ty {
            TypeRef::Primitive(p) => self.fold_primitive(p),
            TypeRef::Class(c) => TypeRef::Class(self.fold_class(c)),
            TypeRef::Param(p) => self.fold_param(p),
        }
    }

    fn fold_primitive(&mut self, primitive: &PrimitiveRef) -> TypeRef {
        TypeRef::Primitive(primitive.clone())
    }

    /// Fold the generic arguments; name, dimensions, and any inline
    /// definition are kept.
    fn fold_class(&mut self, class: &ClassRef) -> ClassRef {
        let arguments = class
            .arguments
            .iter()
            .map(|a| ensure_sufficient_stack(|| self.fold(a)))
            .collect();
        class.with_arguments(arguments)
    }

    fn fold_param(&mut self, param: &TypeParamRef) -> TypeRef {
        TypeRef::Param(param.clone())
    }

    fn fold_property(&mut self, property: &Property) -> Property {
        property.with_type(self.fold(&property.type_ref))
    }

    fn fold_type_param_def(&mut self, param: &TypeParamDef) -> TypeParamDef {
        TypeParamDef {
            name: param.name.clone(),
            bounds: param.bounds.iter().map(|b| self.fold_class(b)).collect(),
        }
    }

    fn fold_method(&mut self, method: &Method) -> Method {
        Method {
            name: method.name.clone(),
            return_type: self.fold(&method.return_type),
            arguments: method
                .arguments
                .iter()
                .map(|a| self.fold_property(a))
                .collect(),
            exceptions: method
                .exceptions
                .iter()
                .map(|e| self.fold_class(e))
                .collect(),
            modifiers: method.modifiers,
            parameters: method
                .parameters
                .iter()
                .map(|p| self.fold_type_param_def(p))
                .collect(),
        }
    }
}
