use strum::{EnumIs, EnumTryAs};
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Hash, EnumIs, EnumTryAs, Error)]
pub enum Error {
    /// A typed read targeted an attribute that was never written.
    ///
    /// Absence is not a failure for property reads (the property's default is
    /// returned instead); this only surfaces when `get_data` is called
    /// without checking `has_data` first, which is a contract violation by
    /// the calling pass.
    #[error(
        "The attribute `{name}` was never set on this node. Callers of `get_data` must check `has_data` first; property accessors fall back to their default instead."
    )]
    AttributeUnset { name: String },

    /// The stored value's runtime type differs from the requested type.
    ///
    /// Only reachable when some pass bypassed the typed accessor and wrote an
    /// incompatible value through `set_data` under the same name.
    #[error(
        "The attribute `{name}` stores a value of type `{found}`, but a value of type `{expected}` was requested. Some pass wrote this attribute through `set_data` with a type the accessor did not expect."
    )]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
