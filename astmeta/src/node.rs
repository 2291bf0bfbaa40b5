use crate::{error::Result, registry::MetadataRegistry, value::MetadataValue};

/// Capability trait for node types that support attached metadata.
///
/// A node type opts in by exposing its own [`MetadataRegistry`]; everything
/// else comes for free. Passes normally go through a typed
/// `property::MetadataProperty` rather than calling `get_data`/`set_data`
/// directly, since the raw calls place the burden of name and type agreement
/// on the caller.
pub trait HasMetadata {
    /// The registry owned by this node.
    fn metadata(&self) -> &MetadataRegistry;

    /// Mutable access to the registry owned by this node.
    fn metadata_mut(&mut self) -> &mut MetadataRegistry;

    /// Returns true iff `name` has been set at least once on this node.
    fn has_data(&self, name: &str) -> bool {
        self.metadata().contains(name)
    }

    /// Read the value stored under `name` as type `R`.
    ///
    /// Precondition: `has_data(name)` is true. Fails with
    /// `error::Error::TypeMismatch` when the stored value is not an `R`,
    /// which only happens if some caller violated the one-type-per-name
    /// contract through a raw `set_data`.
    fn get_data<R>(&self, name: &str) -> Result<R>
    where
        R: MetadataValue + Clone,
    {
        self.metadata().get::<R>(name).cloned()
    }

    /// Store `value` under `name`, overwriting any previous value.
    fn set_data<R: MetadataValue>(&mut self, name: &str, value: R) {
        self.metadata_mut().set(name, value);
    }

    /// Copy all attributes of `other` onto this node, overwriting on name
    /// collision.
    fn copy_metadata_from<O: HasMetadata + ?Sized>(&mut self, other: &O) {
        self.metadata_mut().copy_from(other.metadata());
    }
}
