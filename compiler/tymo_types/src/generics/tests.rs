use std::sync::Arc;

use super::*;
use pretty_assertions::assert_eq;
use tymo_ir::{well_known, Modifiers, Primitive, PrimitiveRef, TypeKind};

fn class_ref(name: &str) -> ClassRef {
    ClassRef::new(name)
}

fn param(name: &str) -> TypeRef {
    TypeRef::Param(TypeParamRef::new(name))
}

fn int() -> TypeRef {
    TypeRef::Primitive(PrimitiveRef::new(Primitive::Int))
}

fn container() -> TypeDef {
    TypeDef::builder(TypeKind::Class, "a.Container")
        .parameter(TypeParamDef::new("T"))
        .extends(ClassRef::generic("a.Base", vec![param("T")]))
        .property(Property::new("item", TypeParamRef::new("T")))
        .property(Property::new("items", TypeParamRef::new("T").with_dimensions(1)))
        .method(
            Method::new("map", param("U"))
                .with_parameters(vec![TypeParamDef::new("U")])
                .with_argument(Property::new("seed", TypeParamRef::new("T"))),
        )
        .method(
            Method::new("shadow", param("T"))
                .with_parameters(vec![TypeParamDef::new("T")]),
        )
        .build()
}

#[test]
fn generic_of_copies_without_touching_the_base() {
    let base = TypeDef::builder(TypeKind::Class, "a.Box").build();
    let before = base.clone();

    let generic = type_generic_of(&base, vec![new_type_param_def("T")]);
    assert_eq!(base, before);
    assert_eq!(generic.parameters(), &[TypeParamDef::new("T")]);
    assert_eq!(generic.name(), base.name());

    let erased = unwrap_generic(&generic);
    assert!(erased.parameters().is_empty());
    assert_eq!(generic.parameters().len(), 1);
    assert_eq!(erased, base);
}

#[test]
fn extends_appends_once() {
    let base = TypeDef::builder(TypeKind::Interface, "a.Child")
        .extends(class_ref("a.First"))
        .build();

    let derived = type_extends(&base, class_ref("a.Second"));
    assert_eq!(base.extends_list(), &[class_ref("a.First")]);
    assert_eq!(
        derived.extends_list(),
        &[class_ref("a.First"), class_ref("a.Second")]
    );

    let again = type_extends(&derived, class_ref("a.Second"));
    assert_eq!(again, derived);
}

#[test]
fn extends_strips_inline_payloads() {
    let base = TypeDef::builder(TypeKind::Class, "a.Child").build();
    let parent = Arc::new(TypeDef::builder(TypeKind::Class, "a.Parent").build());

    let derived = type_extends(&base, class_ref("a.Parent").with_definition(parent));
    assert!(derived.extends_list()[0].definition().is_none());
}

#[test]
fn implements_appends_new_interfaces_only() {
    let base = TypeDef::builder(TypeKind::Class, "a.Impl")
        .implements(class_ref("a.Named"))
        .build();

    let derived = type_implements(
        &base,
        [
            class_ref("a.Sized"),
            class_ref("a.Named"),
            class_ref("a.Sized"),
        ],
    );
    assert_eq!(
        derived.implements_list(),
        &[class_ref("a.Named"), class_ref("a.Sized")]
    );
    assert_eq!(base.implements_list().len(), 1);
}

#[test]
fn parameter_definition_finds_declared_parameters() {
    let bounded = TypeParamDef::bounded("T", vec![class_ref("a.Shape")]);
    let parameters = vec![TypeParamDef::new("K"), bounded.clone()];

    assert_eq!(
        parameter_definition(&param("T"), &parameters),
        Some(&bounded)
    );
    assert_eq!(parameter_definition(&param("X"), &parameters), None);
    assert_eq!(parameter_definition(&param("T"), &[]), None);
}

#[test]
fn qualified_class_reference_matches_by_simple_name() {
    let parameters = [TypeParamDef::new("T")];

    let qualified = TypeRef::Class(class_ref("com.acme.T"));
    assert_eq!(
        parameter_definition(&qualified, &parameters),
        Some(&parameters[0])
    );
    assert_eq!(
        parameter_definition(&TypeRef::Class(class_ref("T")), &parameters),
        Some(&parameters[0])
    );
    assert_eq!(
        parameter_definition(&TypeRef::Class(class_ref("com.T.Other")), &parameters),
        None
    );
}

#[test]
fn fresh_parameters() {
    assert_eq!(new_type_param_ref("E"), TypeParamRef::new("E"));
    assert_eq!(new_type_param_ref("E").dimensions, 0);
    assert!(new_type_param_def("E").bounds.is_empty());
}

#[test]
fn bind_pairs_parameters_with_arguments() {
    let def = TypeDef::builder(TypeKind::Interface, well_known::JAVA_UTIL_MAP)
        .parameter(TypeParamDef::new("K"))
        .parameter(TypeParamDef::new("V"))
        .build();
    let use_site = ClassRef::generic(
        well_known::JAVA_UTIL_MAP,
        vec![well_known::string_ref(), int()],
    );

    let bindings = Bindings::for_reference(&def, &use_site);
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings.get("K"), Some(&well_known::string_ref()));
    assert_eq!(bindings.get("V"), Some(&int()));
}

#[test]
fn bind_tolerates_count_mismatch() {
    let parameters = [TypeParamDef::new("K"), TypeParamDef::new("V")];

    let short = Bindings::bind(&parameters, &[int()]);
    assert!(short.is_bound("K"));
    assert!(!short.is_bound("V"));

    let raw = Bindings::bind(&parameters, &[]);
    assert!(raw.is_empty());

    let long = Bindings::bind(&parameters[..1], &[int(), int()]);
    assert_eq!(long.len(), 1);
}

#[test]
fn apply_substitutes_nested_parameters() {
    let mut bindings = Bindings::new();
    bindings.insert("T", well_known::string_ref());

    let list_of_t =
        TypeRef::Class(ClassRef::generic(well_known::JAVA_UTIL_LIST, vec![param("T")]));
    assert_eq!(
        bindings.apply(&list_of_t),
        TypeRef::Class(ClassRef::generic(
            well_known::JAVA_UTIL_LIST,
            vec![well_known::string_ref()]
        ))
    );
    assert_eq!(bindings.apply(&param("U")), param("U"));
    assert_eq!(bindings.apply(&int()), int());
}

#[test]
fn apply_adds_dimensions() {
    let mut bindings = Bindings::new();
    bindings.insert("T", int().with_dimensions(1));

    let array_of_t = TypeRef::Param(TypeParamRef::new("T").with_dimensions(1));
    assert_eq!(bindings.apply(&array_of_t), int().with_dimensions(2));
}

#[test]
fn insert_replaces() {
    let mut bindings = Bindings::new();
    assert_eq!(bindings.insert("T", int()), None);
    assert_eq!(bindings.insert("T", well_known::string_ref()), Some(int()));
    assert_eq!(bindings.get("T"), Some(&well_known::string_ref()));
}

#[test]
fn method_parameters_shadow_bindings() {
    let def = container();
    let mut bindings = Bindings::new();
    bindings.insert("T", well_known::string_ref());

    let map = bindings.apply_method(&def.methods()[0]);
    assert_eq!(map.arguments[0].type_ref, well_known::string_ref());
    assert_eq!(map.return_type, param("U"));

    let shadow = bindings.apply_method(&def.methods()[1]);
    assert_eq!(shadow.return_type, param("T"));
}

#[test]
fn apply_type_def_specializes_and_drops_bound_parameters() {
    let def = container();
    let bindings = Bindings::for_reference(
        &def,
        &ClassRef::generic("a.Container", vec![well_known::string_ref()]),
    );

    let specialized = bindings.apply_type_def(&def);
    assert!(specialized.parameters().is_empty());
    assert_eq!(specialized.name(), def.name());
    assert_eq!(
        specialized.extends_list(),
        &[ClassRef::generic("a.Base", vec![well_known::string_ref()])]
    );
    assert_eq!(
        specialized.properties()[0],
        Property::new("item", well_known::string_ref())
    );
    assert_eq!(
        specialized.properties()[1].type_ref,
        well_known::string_ref().with_dimensions(1)
    );
    // The input is untouched.
    assert_eq!(def.parameters().len(), 1);
}

#[test]
fn apply_property_keeps_name_and_modifiers() {
    let mut bindings = Bindings::new();
    bindings.insert("T", int());
    let property = Property::new("value", TypeParamRef::new("T"))
        .with_modifiers(Modifiers::FINAL);

    let applied = bindings.apply_property(&property);
    assert_eq!(applied.name, "value");
    assert_eq!(applied.modifiers, Modifiers::FINAL);
    assert_eq!(applied.type_ref, int());
}

#[test]
fn apply_class_keeps_dimensions() {
    let mut bindings = Bindings::new();
    bindings.insert("T", int());
    let class =
        ClassRef::generic(well_known::JAVA_UTIL_LIST, vec![param("T")]).with_dimensions(2);

    let applied = bindings.apply_class(&class);
    assert_eq!(applied.dimensions, 2);
    assert_eq!(applied.arguments, vec![int()]);
}
