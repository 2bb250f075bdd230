//! Tymo IR - value model for object-oriented type graphs.
//!
//! This crate contains the immutable data structures that describe a type
//! universe:
//! - Qualified names for declared types
//! - References (`TypeRef`) describing a type *usage* at some site
//! - Definitions (`TypeDef`) describing the canonical *declaration* of a type
//! - Properties, methods, and generic parameters
//! - Modifier sets and their access-flag encoding
//!
//! # Design Philosophy
//!
//! - **Closed references**: `TypeRef` is a sum type; every consumer matches
//!   exhaustively over primitives, class references, and parameter references.
//! - **Names, not ownership**: a definition refers to its super-types by
//!   `ClassRef` only. Resolving a reference into a definition is the job of
//!   the repository in `tymo_types`, which keeps cyclic graphs acyclic in memory.
//! - **Immutable after construction**: "modifying" a definition means building
//!   a new one with [`TypeDefBuilder`] or a `with_*` update.

mod builder;
mod definition;
mod format;
mod modifiers;
mod name;
mod reference;
pub mod visitor;
pub mod well_known;

pub use builder::TypeDefBuilder;
pub use definition::{Method, Property, TypeDef, TypeKind, TypeParamDef};
pub use modifiers::{access, modifiers_to_int, Modifier, Modifiers};
pub use name::QualifiedName;
pub use reference::{ClassRef, Primitive, PrimitiveRef, TypeParamRef, TypeRef};
