//! End-to-end flows as a code emitter drives them: register a model, order
//! the types for declaration, compute imports, and specialize generics.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tymo_ir::{
    well_known, ClassRef, Method, Modifier, Primitive, PrimitiveRef, Property, TypeDef, TypeKind,
    TypeParamDef, TypeParamRef, TypeRef,
};
use tymo_types::{
    init_tracing, type_generic_of, Bindings, DefinitionRepository, References, Resolver,
    ResolverConfig, SharedRepository,
};

fn param(name: &str) -> TypeRef {
    TypeRef::Param(TypeParamRef::new(name))
}

/// A small shapes model:
///
/// ```text
/// interface a.Named
/// abstract class a.Shape implements a.Named { String name; }
/// class a.Circle extends a.Shape { double radius; }
/// class a.Drawing<T extends a.Shape> { List<T> shapes; T first() throws a.EmptyDrawing; }
/// ```
fn shapes_model() -> Vec<TypeDef> {
    vec![
        well_known::object(),
        TypeDef::builder(TypeKind::Interface, "a.Named")
            .method(Method::new("name", well_known::string_ref()))
            .build(),
        TypeDef::builder(TypeKind::Class, "a.Shape")
            .modifier(Modifier::Public)
            .modifier(Modifier::Abstract)
            .extends(well_known::object_ref())
            .implements(ClassRef::new("a.Named"))
            .property(Property::new("name", well_known::string_ref()))
            .build(),
        TypeDef::builder(TypeKind::Class, "a.Circle")
            .extends(ClassRef::new("a.Shape"))
            .property(Property::new("radius", PrimitiveRef::new(Primitive::Double)))
            .build(),
        TypeDef::builder(TypeKind::Class, "a.Drawing")
            .parameter(TypeParamDef::bounded("T", vec![ClassRef::new("a.Shape")]))
            .property(Property::new(
                "shapes",
                ClassRef::generic(well_known::JAVA_UTIL_LIST, vec![param("T")]),
            ))
            .method(
                Method::new("first", param("T")).with_exception(ClassRef::new("a.EmptyDrawing")),
            )
            .build(),
    ]
}

fn registered(model: Vec<TypeDef>) -> DefinitionRepository {
    let repo = DefinitionRepository::new();
    repo.register_all(model);
    repo
}

#[test]
fn declaration_order_puts_ancestors_first() {
    init_tracing();
    let repo = registered(shapes_model());
    let config = ResolverConfig::default();
    let resolver = Resolver::new(&repo, &config);

    let mut ordered = Vec::new();
    let mut visited = FxHashSet::default();
    for def in repo.snapshot() {
        resolver.visit_parents(&def, &mut ordered, &mut visited);
    }

    let names: Vec<&str> = ordered.iter().map(|d| d.fully_qualified_name()).collect();
    assert_eq!(names, vec!["a.Named", "a.Shape", "a.Circle", "a.Drawing"]);
}

#[test]
fn imports_come_from_the_signature_only() {
    let repo = registered(shapes_model());
    let Some(drawing) = repo.get("a.Drawing") else {
        panic!("a.Drawing is registered");
    };

    let imports: Vec<String> = drawing
        .references()
        .class_names()
        .iter()
        .map(ToString::to_string)
        .collect();
    // a.Named is reachable only through a.Shape's definition.
    assert_eq!(
        imports,
        vec!["a.EmptyDrawing", "a.Shape", well_known::JAVA_UTIL_LIST]
    );
}

#[test]
fn member_queries_reach_through_superclasses() {
    let repo = registered(shapes_model());
    let config = ResolverConfig::default();
    let resolver = Resolver::new(&repo, &config);
    let Some(circle) = repo.get("a.Circle") else {
        panic!("a.Circle is registered");
    };

    assert!(resolver.has_property(&circle, "name"));
    assert!(resolver.has_property(&circle, "radius"));
    // Interface members are not part of the unrolled class hierarchy.
    assert!(!resolver.has_method(&circle, "name"));

    let circle_ref = TypeRef::Class(circle.to_reference(Vec::new()));
    assert!(resolver.is_concrete(&circle_ref));
    assert!(resolver.is_abstract(&TypeRef::Class(ClassRef::new("a.Shape"))));
    assert!(resolver.is_instance_of(&circle_ref, "a.Named"));
}

#[test]
fn specialization_binds_use_site_arguments() {
    let repo = registered(shapes_model());
    let Some(drawing) = repo.get("a.Drawing") else {
        panic!("a.Drawing is registered");
    };
    let use_site = ClassRef::generic("a.Drawing", vec![TypeRef::Class(ClassRef::new("a.Circle"))]);

    let specialized = Bindings::for_reference(&drawing, &use_site).apply_type_def(&drawing);
    assert!(specialized.parameters().is_empty());
    assert_eq!(
        specialized.methods()[0].return_type,
        TypeRef::Class(ClassRef::new("a.Circle"))
    );
    assert_eq!(
        specialized.to_string(),
        "class a.Drawing",
        "specialized header has no parameter list"
    );

    // Re-parameterizing a copy leaves the registered definition alone.
    let widened = type_generic_of(&drawing, vec![TypeParamDef::new("S")]);
    assert_eq!(widened.parameters()[0].name, "S");
    assert!(repo
        .get("a.Drawing")
        .is_some_and(|d| d.parameters()[0].name == "T"));
}

#[test]
fn concurrent_registration_and_reads() {
    let shared = SharedRepository::new(DefinitionRepository::new());
    shared.register(well_known::object());

    (0..512).into_par_iter().for_each(|i| {
        let repo = shared.clone();
        let parent = if i == 0 {
            well_known::object_ref()
        } else {
            ClassRef::new(format!("gen.T{}", i - 1))
        };
        repo.register(
            TypeDef::builder(TypeKind::Class, format!("gen.T{i}"))
                .extends(parent)
                .build(),
        );
        // Readers may run before or after any given writer.
        let _ = repo.get(&format!("gen.T{}", i / 2));
    });

    assert_eq!(shared.len(), 513);

    let config = ResolverConfig::default();
    let resolver = Resolver::new(&shared, &config);
    let Some(last) = shared.get("gen.T511") else {
        panic!("gen.T511 is registered");
    };
    assert_eq!(resolver.unroll_hierarchy(&last).len(), 512);

    let defs: Vec<Arc<TypeDef>> = shared.snapshot();
    let walked: usize = defs
        .par_iter()
        .map(|d| resolver.unroll_hierarchy(d).len())
        .sum();
    // Sum of 1..=512 chain lengths; the root contributes nothing.
    assert_eq!(walked, 512 * 513 / 2);
}
