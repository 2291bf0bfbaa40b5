use std::fmt;

use downcast_rs::{Downcast, impl_downcast};

/// Opaque value held by a node's metadata registry.
///
/// Storage is type-erased: the registry keeps `dyn MetadataValue` and the
/// typed accessors re-assert the concrete type at read time. Implemented
/// automatically for every `'static` type with a `Debug` representation, so
/// attribute types never implement it by hand.
pub trait MetadataValue: Downcast + fmt::Debug {
    /// Name of the concrete stored type, reported in mismatch diagnostics.
    fn stored_type_name(&self) -> &'static str;
}

impl_downcast!(MetadataValue);

impl<V: fmt::Debug + 'static> MetadataValue for V {
    fn stored_type_name(&self) -> &'static str {
        std::any::type_name::<V>()
    }
}
