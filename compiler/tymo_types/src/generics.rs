//! Generic binding and copy-on-write definition utilities.
//!
//! Every function here returns a new value; inputs are never modified.

use rustc_hash::FxHashMap;
use tymo_ir::{ClassRef, Method, Property, TypeDef, TypeParamDef, TypeParamRef, TypeRef};

use crate::fold::TypeRefFolder;

/// A copy of `base` whose declared parameters are `parameters`.
pub fn type_generic_of(base: &TypeDef, parameters: Vec<TypeParamDef>) -> TypeDef {
    base.to_builder().parameters(parameters).build()
}

/// A copy of `base` with no declared parameters (its erasure).
pub fn unwrap_generic(base: &TypeDef) -> TypeDef {
    base.to_builder().parameters(Vec::new()).build()
}

/// A copy of `base` that also extends `superclass`.
///
/// A reference already in the extends list is not added twice.
pub fn type_extends(base: &TypeDef, superclass: ClassRef) -> TypeDef {
    if base.extends_list().contains(&superclass) {
        return base.clone();
    }
    base.to_builder().extends(superclass).build()
}

/// A copy of `base` that also implements every interface in `interfaces`.
///
/// References already in the implements list are not added twice.
pub fn type_implements(
    base: &TypeDef,
    interfaces: impl IntoIterator<Item = ClassRef>,
) -> TypeDef {
    let mut builder = base.to_builder();
    let mut present: Vec<ClassRef> = base.implements_list().to_vec();
    for interface in interfaces {
        if !present.contains(&interface) {
            present.push(interface.clone());
            builder = builder.implements(interface);
        }
    }
    builder.build()
}

/// The declared parameter a reference names, if any.
///
/// A class reference matches by its simple name, so a front end that emits
/// an unresolved type variable as `com.acme.T` still finds `T`.
///
/// `None` means the reference does not name one of `parameters`; callers
/// treat such a parameter reference as free, not as an error.
pub fn parameter_definition<'a>(
    reference: &TypeRef,
    parameters: &'a [TypeParamDef],
) -> Option<&'a TypeParamDef> {
    let name = match reference {
        TypeRef::Class(class) => class.name.simple_name(),
        TypeRef::Primitive(_) | TypeRef::Param(_) => reference.name(),
    };
    parameters.iter().find(|p| p.name == name)
}

/// A fresh parameter reference named `name`.
pub fn new_type_param_ref(name: &str) -> TypeParamRef {
    TypeParamRef::new(name)
}

/// A fresh, unbounded parameter declaration named `name`.
pub fn new_type_param_def(name: &str) -> TypeParamDef {
    TypeParamDef::new(name)
}

/// Assignment of concrete references to generic parameters, by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    bound: FxHashMap<String, TypeRef>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `parameters` to `arguments` positionally.
    ///
    /// Surplus arguments are dropped; parameters without an argument stay
    /// unbound.
    pub fn bind(parameters: &[TypeParamDef], arguments: &[TypeRef]) -> Self {
        if parameters.len() != arguments.len() && !arguments.is_empty() {
            tracing::debug!(
                parameters = parameters.len(),
                arguments = arguments.len(),
                "argument count differs from parameter count"
            );
        }
        Bindings {
            bound: parameters
                .iter()
                .zip(arguments)
                .map(|(p, a)| (p.name.clone(), a.clone()))
                .collect(),
        }
    }

    /// Bind the parameters of `def` to the arguments of a use-site
    /// reference to it, e.g. `Map<K, V>` against `Map<String, Integer>`.
    pub fn for_reference(def: &TypeDef, reference: &ClassRef) -> Self {
        Self::bind(def.parameters(), &reference.arguments)
    }

    /// Bind one parameter, replacing any previous binding.
    pub fn insert(&mut self, parameter: &str, argument: TypeRef) -> Option<TypeRef> {
        self.bound.insert(parameter.to_owned(), argument)
    }

    pub fn get(&self, parameter: &str) -> Option<&TypeRef> {
        self.bound.get(parameter)
    }

    pub fn is_bound(&self, parameter: &str) -> bool {
        self.bound.contains_key(parameter)
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Substitute bound parameters in `ty`.
    ///
    /// An array of a parameter bound to an array keeps both dimension counts
    /// (`T[]` with `T = int[]` becomes `int[][]`). Unbound parameters stay.
    pub fn apply(&self, ty: &TypeRef) -> TypeRef {
        Substitute { bindings: self }.fold(ty)
    }

    pub fn apply_class(&self, class: &ClassRef) -> ClassRef {
        Substitute { bindings: self }.fold_class(class)
    }

    pub fn apply_property(&self, property: &Property) -> Property {
        Substitute { bindings: self }.fold_property(property)
    }

    /// Substitute in a method signature.
    ///
    /// The method's own generic parameters shadow bindings of the same name.
    pub fn apply_method(&self, method: &Method) -> Method {
        let scoped = self.without(method.parameters.iter().map(|p| p.name.as_str()));
        Substitute { bindings: &scoped }.fold_method(method)
    }

    /// Specialize a definition: substitute in super-types, properties, and
    /// methods, and drop the parameters that are now bound.
    ///
    /// The result keeps the definition's name; registering it is up to the
    /// caller.
    pub fn apply_type_def(&self, def: &TypeDef) -> TypeDef {
        let mut folder = Substitute { bindings: self };
        def.to_builder()
            .parameters(
                def.parameters()
                    .iter()
                    .filter(|p| !self.is_bound(&p.name))
                    .map(|p| folder.fold_type_param_def(p))
                    .collect(),
            )
            .extends_list(def.extends_list().iter().map(|c| folder.fold_class(c)).collect())
            .implements_list(
                def.implements_list()
                    .iter()
                    .map(|c| folder.fold_class(c))
                    .collect(),
            )
            .properties(def.properties().iter().map(|p| folder.fold_property(p)).collect())
            .methods(def.methods().iter().map(|m| self.apply_method(m)).collect())
            .build()
    }

    fn without<'a>(&self, shadowed: impl Iterator<Item = &'a str>) -> Bindings {
        let mut scoped = self.clone();
        for name in shadowed {
            scoped.bound.remove(name);
        }
        scoped
    }
}

struct Substitute<'b> {
    bindings: &'b Bindings,
}

impl TypeRefFolder for Substitute<'_> {
    fn fold_param(&mut self, param: &TypeParamRef) -> TypeRef {
        match self.bindings.get(&param.name) {
            Some(bound) => bound.with_dimensions(bound.dimensions() + param.dimensions),
            None => TypeRef::Param(param.clone()),
        }
    }
}

#[cfg(test)]
mod tests;
