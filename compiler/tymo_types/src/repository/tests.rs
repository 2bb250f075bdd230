use super::*;
use pretty_assertions::assert_eq;
use tymo_ir::{Primitive, PrimitiveRef, TypeKind, TypeParamRef};

fn class(name: &str) -> TypeDef {
    TypeDef::builder(TypeKind::Class, name).build()
}

#[test]
fn register_then_resolve() {
    let repo = DefinitionRepository::new();
    let def = class("com.acme.Widget");
    repo.register(def.clone());

    let resolved = repo.resolve(&TypeRef::Class(ClassRef::new("com.acme.Widget")));
    assert_eq!(resolved.as_deref(), Some(&def));
    assert!(repo.contains("com.acme.Widget"));
    assert_eq!(repo.get("com.acme.Widget").as_deref(), Some(&def));
}

#[test]
fn miss_is_none() {
    let repo = DefinitionRepository::new();
    assert!(repo.resolve(&TypeRef::Class(ClassRef::new("a.Missing"))).is_none());
    assert!(repo.lookup(&TypeRef::Class(ClassRef::new("a.Missing"))).is_none());
    assert!(repo.get("a.Missing").is_none());
}

#[test]
fn primitives_and_parameters_never_resolve() {
    let repo = DefinitionRepository::new();
    repo.register(class("int"));
    repo.register(class("T"));

    let int = TypeRef::Primitive(PrimitiveRef::new(Primitive::Int));
    let t = TypeRef::Param(TypeParamRef::new("T"));
    assert!(repo.resolve(&int).is_none());
    assert!(repo.resolve(&t).is_none());
    assert!(repo.lookup(&int).is_none());
    assert!(repo.lookup(&t).is_none());
}

#[test]
fn last_writer_wins() {
    let repo = DefinitionRepository::new();
    let first = class("a.Thing");
    let second = TypeDef::builder(TypeKind::Interface, "a.Thing").build();

    assert!(repo.register(first.clone()).is_none());
    let replaced = repo.register(second.clone());

    assert_eq!(replaced.as_deref(), Some(&first));
    assert_eq!(repo.get("a.Thing").as_deref(), Some(&second));
    assert_eq!(repo.len(), 1);
}

#[test]
fn resolve_prefers_inline_payload_and_lookup_prefers_registry() {
    let repo = DefinitionRepository::new();
    let registered = TypeDef::builder(TypeKind::Class, "a.Shape").build();
    let inline = TypeDef::builder(TypeKind::Interface, "a.Shape").build();
    repo.register(registered.clone());

    let reference = TypeRef::Class(ClassRef::new("a.Shape").with_definition(Arc::new(inline.clone())));
    assert_eq!(repo.resolve(&reference).as_deref(), Some(&inline));
    assert_eq!(repo.lookup(&reference).as_deref(), Some(&registered));
}

#[test]
fn inline_payload_is_a_fallback_for_unregistered_names() {
    let repo = DefinitionRepository::new();
    let inline = class("a.Unregistered");
    let reference = ClassRef::new("a.Unregistered").with_definition(Arc::new(inline.clone()));

    assert_eq!(repo.lookup_class(&reference).as_deref(), Some(&inline));
    assert_eq!(repo.resolve_class(&reference).as_deref(), Some(&inline));
}

#[test]
fn clear_len_and_snapshot() {
    let repo = DefinitionRepository::default();
    assert!(repo.is_empty());

    repo.register_all(["b.B", "a.A", "c.C"].into_iter().map(class));
    assert_eq!(repo.len(), 3);
    assert!(!repo.is_empty());

    let names: Vec<String> = repo
        .snapshot()
        .iter()
        .map(|d| d.fully_qualified_name().to_owned())
        .collect();
    assert_eq!(names, vec!["a.A", "b.B", "c.C"]);

    repo.clear();
    assert!(repo.is_empty());
    assert_eq!(repo.len(), 0);
}

#[test]
fn shared_repository_sees_registrations_through_clones() {
    let shared = SharedRepository::new(DefinitionRepository::new());
    let other = shared.clone();
    shared.register(class("a.A"));
    assert!(other.contains("a.A"));
}
