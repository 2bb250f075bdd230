//! Visitor over the type model.
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to act at specific nodes, and call the matching
//! `walk_*` function to keep descending.
//!
//! Traversal is shallow with respect to the type graph: visiting a
//! [`ClassRef`] walks its generic arguments, never the definition it names.
//!
//! # Example
//!
//! ```text
//! struct CountParams {
//!     count: usize,
//! }
//!
//! impl<'m> Visitor<'m> for CountParams {
//!     fn visit_type_param_ref(&mut self, _param: &'m TypeParamRef) {
//!         self.count += 1;
//!     }
//! }
//! ```

use crate::{
    ClassRef, Method, PrimitiveRef, Property, TypeDef, TypeParamDef, TypeParamRef, TypeRef,
};

/// Model visitor.
///
/// The visitor can mutate its own state; the model stays immutable.
pub trait Visitor<'m> {
    fn visit_type_def(&mut self, def: &'m TypeDef) {
        walk_type_def(self, def);
    }

    fn visit_method(&mut self, method: &'m Method) {
        walk_method(self, method);
    }

    fn visit_property(&mut self, property: &'m Property) {
        walk_property(self, property);
    }

    fn visit_type_param_def(&mut self, param: &'m TypeParamDef) {
        walk_type_param_def(self, param);
    }

    fn visit_type_ref(&mut self, ty: &'m TypeRef) {
        walk_type_ref(self, ty);
    }

    fn visit_class_ref(&mut self, class: &'m ClassRef) {
        walk_class_ref(self, class);
    }

    /// Leaf.
    fn visit_primitive_ref(&mut self, primitive: &'m PrimitiveRef) {
        let _ = primitive;
    }

    /// Leaf.
    fn visit_type_param_ref(&mut self, param: &'m TypeParamRef) {
        let _ = param;
    }
}

/// Parameters, then extends, implements, properties, and methods, each in
/// declaration order.
pub fn walk_type_def<'m, V: Visitor<'m> + ?Sized>(visitor: &mut V, def: &'m TypeDef) {
    for param in def.parameters() {
        visitor.visit_type_param_def(param);
    }
    for supertype in def.extends_list() {
        visitor.visit_class_ref(supertype);
    }
    for interface in def.implements_list() {
        visitor.visit_class_ref(interface);
    }
    for property in def.properties() {
        visitor.visit_property(property);
    }
    for method in def.methods() {
        visitor.visit_method(method);
    }
}

/// Generic parameters, return type, exceptions, then arguments.
pub fn walk_method<'m, V: Visitor<'m> + ?Sized>(visitor: &mut V, method: &'m Method) {
    for param in &method.parameters {
        visitor.visit_type_param_def(param);
    }
    visitor.visit_type_ref(&method.return_type);
    for exception in &method.exceptions {
        visitor.visit_class_ref(exception);
    }
    for argument in &method.arguments {
        visitor.visit_property(argument);
    }
}

pub fn walk_property<'m, V: Visitor<'m> + ?Sized>(visitor: &mut V, property: &'m Property) {
    visitor.visit_type_ref(&property.type_ref);
}

pub fn walk_type_param_def<'m, V: Visitor<'m> + ?Sized>(visitor: &mut V, param: &'m TypeParamDef) {
    for bound in &param.bounds {
        visitor.visit_class_ref(bound);
    }
}

pub fn walk_type_ref<'m, V: Visitor<'m> + ?Sized>(visitor: &mut V, ty: &'m TypeRef) {
    match ty {
        TypeRef::Primitive(p) => visitor.visit_primitive_ref(p),
        TypeRef::Class(c) => visitor.visit_class_ref(c),
        TypeRef::Param(p) => visitor.visit_type_param_ref(p),
    }
}

pub fn walk_class_ref<'m, V: Visitor<'m> + ?Sized>(visitor: &mut V, class: &'m ClassRef) {
    for argument in &class.arguments {
        visitor.visit_type_ref(argument);
    }
}
