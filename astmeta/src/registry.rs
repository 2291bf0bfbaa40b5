use std::{collections::BTreeMap, sync::Arc};

use log::trace;

use crate::{
    error::{Error, Result},
    value::MetadataValue,
};

/// Per-node attribute storage backing `node::HasMetadata`.
///
/// Maps attribute names to type-erased values. Most nodes never carry any
/// metadata, so the map itself is only allocated on the first write; until
/// then the registry costs one niche-optimized pointer. Each registry is
/// exclusively owned by its node and dies with it.
///
/// Stored values are reference-counted: cloning a registry (or copying it
/// into another node via [`MetadataRegistry::copy_from`]) shares the values
/// rather than deep-cloning them.
#[derive(Clone, Debug, Default)]
pub struct MetadataRegistry {
    slots: Option<Box<BTreeMap<String, Arc<dyn MetadataValue>>>>,
}

impl MetadataRegistry {
    pub const fn new() -> Self {
        Self { slots: None }
    }

    /// Returns true iff `name` has been written at least once.
    pub fn contains(&self, name: &str) -> bool {
        self.slots
            .as_ref()
            .is_some_and(|slots| slots.contains_key(name))
    }

    /// Number of attributes currently stored.
    pub fn len(&self) -> usize {
        self.slots.as_ref().map_or(0, |slots| slots.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the names of all stored attributes.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots
            .iter()
            .flat_map(|slots| slots.keys())
            .map(String::as_str)
    }

    /// Borrow the value stored under `name`, re-asserted as type `R`.
    ///
    /// Fails with [`Error::AttributeUnset`] if `name` was never written and
    /// with [`Error::TypeMismatch`] if the stored value is not an `R`.
    pub fn get<R: MetadataValue>(&self, name: &str) -> Result<&R> {
        let slot = self
            .slots
            .as_ref()
            .and_then(|slots| slots.get(name))
            .ok_or_else(|| Error::AttributeUnset {
                name: name.to_string(),
            })?;

        slot.as_ref()
            .downcast_ref::<R>()
            .ok_or_else(|| Error::TypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<R>(),
                found: slot.stored_type_name(),
            })
    }

    /// Store `value` under `name`, replacing any previous value. The new
    /// value's type may differ from the replaced one.
    pub fn set<R: MetadataValue>(&mut self, name: impl Into<String>, value: R) {
        let name = name.into();
        trace!("metadata write: `{}` <- {:?}", name, value);
        self.slots
            .get_or_insert_with(Box::default)
            .insert(name, Arc::new(value));
    }

    /// Copy every attribute of `other` into this registry, overwriting on
    /// name collision. Values are shared, not deep-cloned.
    pub fn copy_from(&mut self, other: &MetadataRegistry) {
        let Some(theirs) = other.slots.as_deref() else {
            return;
        };

        let slots = self.slots.get_or_insert_with(Box::default);
        for (name, value) in theirs {
            slots.insert(name.clone(), Arc::clone(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_allocates_on_first_write_only() {
        let mut registry = MetadataRegistry::new();
        assert!(registry.slots.is_none());

        assert!(!registry.contains("hint"));
        assert!(registry.get::<u32>("hint").is_err());
        assert!(registry.slots.is_none(), "reads must not allocate");

        registry.set("hint", 3u32);
        assert!(registry.slots.is_some());
        assert_eq!(registry.get::<u32>("hint").copied(), Ok(3));
    }

    #[test]
    fn copy_from_an_empty_registry_does_not_allocate() {
        let mut target = MetadataRegistry::new();
        target.copy_from(&MetadataRegistry::new());
        assert!(target.slots.is_none());
    }
}
