//! Definition repository.
//!
//! Maps fully-qualified names to their canonical [`TypeDef`]. Every other
//! component holds names or references and resolves through here to reach a
//! definition body.
//!
//! # Lifetime
//!
//! One repository per generation run. It is populated as the front end
//! discovers types, queried read-mostly afterwards, and dropped (or
//! [`clear`](DefinitionRepository::clear)ed) between independent runs.
//!
//! # Thread Safety
//!
//! Entries are spread across `RwLock`-protected shards by name hash.
//! Definitions are stored behind `Arc` and swapped in whole, so a reader
//! never observes a partially registered definition, and registering a name
//! only blocks readers of the same shard.

use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};
use tymo_ir::{ClassRef, QualifiedName, TypeDef, TypeRef};

/// Number of shards.
const NUM_SHARDS: usize = 16;

/// Registry of canonical type definitions, keyed by qualified name.
pub struct DefinitionRepository {
    shards: [RwLock<FxHashMap<QualifiedName, Arc<TypeDef>>>; NUM_SHARDS],
}

impl DefinitionRepository {
    pub fn new() -> Self {
        DefinitionRepository {
            shards: std::array::from_fn(|_| RwLock::new(FxHashMap::default())),
        }
    }

    #[inline]
    fn shard_for(name: &str) -> usize {
        let mut hasher = FxHasher::default();
        name.hash(&mut hasher);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "truncation is fine for hash-based shard selection"
        )]
        let hash = hasher.finish() as usize;
        hash % NUM_SHARDS
    }

    /// Insert or replace the definition registered under `definition.name()`.
    ///
    /// Last writer wins. Returns the definition that was replaced, if any.
    pub fn register(&self, definition: TypeDef) -> Option<Arc<TypeDef>> {
        self.register_shared(Arc::new(definition))
    }

    /// Like [`register`](Self::register), for a definition that is already shared.
    pub fn register_shared(&self, definition: Arc<TypeDef>) -> Option<Arc<TypeDef>> {
        let name = definition.name().clone();
        let shard = &self.shards[Self::shard_for(name.as_str())];
        let previous = shard.write().insert(name, definition);
        if let Some(previous) = &previous {
            tracing::debug!(name = %previous.name(), "replaced registered definition");
        }
        previous
    }

    /// Register every definition in `definitions`, in order.
    pub fn register_all(&self, definitions: impl IntoIterator<Item = TypeDef>) {
        for definition in definitions {
            self.register(definition);
        }
    }

    /// Look up a definition by qualified name.
    pub fn get(&self, name: &str) -> Option<Arc<TypeDef>> {
        self.shards[Self::shard_for(name)].read().get(name).cloned()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.shards[Self::shard_for(name)].read().contains_key(name)
    }

    /// Resolve a reference, preferring the payload it carries.
    ///
    /// For a class reference: its inline definition if the front end supplied
    /// one, otherwise the registered definition. Primitives and type
    /// parameters never resolve. A miss is not an error; callers pick their
    /// own conservative default.
    pub fn resolve(&self, reference: &TypeRef) -> Option<Arc<TypeDef>> {
        match reference {
            TypeRef::Class(class) => self.resolve_class(class),
            TypeRef::Primitive(_) | TypeRef::Param(_) => None,
        }
    }

    /// [`resolve`](Self::resolve) for a class reference.
    pub fn resolve_class(&self, class: &ClassRef) -> Option<Arc<TypeDef>> {
        class
            .definition()
            .cloned()
            .or_else(|| self.get(class.name.as_str()))
    }

    /// Resolve a reference, preferring the registry.
    ///
    /// The registered definition is authoritative; the inline payload is
    /// only a fallback for names the front end never registered. Hierarchy
    /// walks and abstractness checks resolve this way.
    pub fn lookup(&self, reference: &TypeRef) -> Option<Arc<TypeDef>> {
        match reference {
            TypeRef::Class(class) => self.lookup_class(class),
            TypeRef::Primitive(_) | TypeRef::Param(_) => None,
        }
    }

    /// [`lookup`](Self::lookup) for a class reference.
    pub fn lookup_class(&self, class: &ClassRef) -> Option<Arc<TypeDef>> {
        self.get(class.name.as_str())
            .or_else(|| class.definition().cloned())
    }

    /// Remove every definition.
    pub fn clear(&self) {
        for shard in &self.shards {
            shard.write().clear();
        }
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|s| s.read().is_empty())
    }

    /// All registered definitions, sorted by qualified name.
    ///
    /// Shards are read one at a time, so a snapshot taken while another
    /// thread registers may or may not include that registration.
    pub fn snapshot(&self) -> Vec<Arc<TypeDef>> {
        let mut all: Vec<Arc<TypeDef>> = self
            .shards
            .iter()
            .flat_map(|s| s.read().values().cloned().collect::<Vec<_>>())
            .collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        all
    }
}

impl std::fmt::Debug for DefinitionRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefinitionRepository")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl Default for DefinitionRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// A repository shared between the workers of one generation run.
#[derive(Clone, Debug, Default)]
pub struct SharedRepository(Arc<DefinitionRepository>);

impl SharedRepository {
    pub fn new(repository: DefinitionRepository) -> Self {
        SharedRepository(Arc::new(repository))
    }
}

impl Deref for SharedRepository {
    type Target = DefinitionRepository;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests;
