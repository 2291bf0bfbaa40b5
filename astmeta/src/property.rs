use std::marker::PhantomData;

use crate::{error::Result, node::HasMetadata, value::MetadataValue};

/// Typed accessor over a single named attribute of nodes of type `T`.
///
/// A property is stateless: it carries only the attribute name, bound at
/// construction, and the value returned when the attribute was never written.
/// One instance serves arbitrarily many nodes, and since it is immutable it
/// can be shared freely (including across threads, even though the registries
/// it reads cannot).
///
/// Names must be unique per attribute: two properties constructed with the
/// same name observe the same underlying storage, whatever their defaults.
pub struct MetadataProperty<T: ?Sized, R> {
    name: &'static str,
    default: R,
    _node: PhantomData<fn(&T)>,
}

// Manual impls: the derives would also demand the bound on `T`, which is
// only a phantom here.
impl<T: ?Sized, R: Clone> Clone for MetadataProperty<T, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            default: self.default.clone(),
            _node: PhantomData,
        }
    }
}

impl<T: ?Sized, R: std::fmt::Debug> std::fmt::Debug for MetadataProperty<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataProperty")
            .field("name", &self.name)
            .field("default", &self.default)
            .finish()
    }
}

impl<T: ?Sized, R> MetadataProperty<T, R> {
    /// Bind a property to `name` with the given fallback value.
    pub const fn new(name: &'static str, default: R) -> Self {
        Self {
            name,
            default,
            _node: PhantomData,
        }
    }

    /// The attribute name this property is bound to.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The value reported for nodes the property was never set on.
    pub fn default(&self) -> &R {
        &self.default
    }
}

impl<T, R> MetadataProperty<T, R>
where
    T: HasMetadata + ?Sized,
    R: MetadataValue + Clone,
{
    /// Read this property off `node`.
    ///
    /// A pure read: when the attribute is unset the default is returned
    /// without being materialized into the node's registry, so the node
    /// still reports `has_data == false` afterwards.
    pub fn get(&self, node: &T) -> Result<R> {
        if !node.has_data(self.name) {
            return Ok(self.default.clone());
        }
        node.get_data::<R>(self.name)
    }

    /// Write `value` to this property on `node`, overwriting any previous
    /// value.
    pub fn set(&self, node: &mut T, value: R) {
        node.set_data(self.name, value);
    }
}
