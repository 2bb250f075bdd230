//! Reasoning over a tymo type graph.
//!
//! Builds on the value model in `tymo_ir`:
//!
//! ```text
//! DefinitionRepository (qualified name -> TypeDef)
//!     └── Resolver (hierarchy walks, member and abstractness queries)
//! References (bounded reference extraction, for imports)
//! Bindings / generics (parameter binding, copy-on-write derivation)
//! ```
//!
//! # Design Decisions
//!
//! - The repository is an explicit value created per generation run; there
//!   is no process-wide instance.
//! - Definitions refer to each other by qualified name. Every walk resolves
//!   through the repository and carries its own cycle guard.
//! - Resolution misses are `None`, never errors. The only error is an
//!   inheritance cycle, and only from the strict
//!   [`Resolver::try_unroll_hierarchy`].

mod config;
mod error;
mod fold;
pub mod generics;
mod hierarchy;
mod logging;
pub mod names;
pub mod queries;
mod references;
mod repository;
mod stack;

pub use config::ResolverConfig;
pub use error::HierarchyError;
pub use fold::TypeRefFolder;
pub use generics::{
    new_type_param_def, new_type_param_ref, parameter_definition, type_extends, type_generic_of,
    type_implements, unwrap_generic, Bindings,
};
pub use hierarchy::{Hierarchy, Resolver};
pub use logging::init_tracing;
pub use names::fully_qualified_name_diff;
pub use references::{ReferenceSet, References};
pub use repository::{DefinitionRepository, SharedRepository};
