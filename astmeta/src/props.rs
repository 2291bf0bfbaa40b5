//! Attribute definitions shared by the backend passes.
//!
//! Each constructor yields the one canonical property for its attribute
//! name; passes should obtain properties from here rather than re-declaring
//! names locally.

use strum::EnumIs;

use crate::{node::HasMetadata, property::MetadataProperty};

/// Side-effect classification of an expression node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIs)]
pub enum SideEffectKind {
    /// May read and write observable state. The conservative assumption for
    /// anything not yet analyzed.
    #[default]
    HasSideEffect,

    /// Reads observable state but never writes it. Safe to drop when the
    /// result is unused, not safe to reorder across writes.
    DependsOnState,

    /// Neither reads nor writes observable state.
    Pure,
}

/// Side-effect classification, defaulting to [`SideEffectKind::HasSideEffect`].
pub fn side_effects<T: HasMetadata + ?Sized>() -> MetadataProperty<T, SideEffectKind> {
    MetadataProperty::new("side_effects", SideEffectKind::HasSideEffect)
}

/// Marks nodes introduced by a lowering pass rather than by source code.
pub fn synthetic<T: HasMetadata + ?Sized>() -> MetadataProperty<T, bool> {
    MetadataProperty::new("synthetic", false)
}

/// Marks expressions proven to evaluate to a compile-time constant.
pub fn is_constant<T: HasMetadata + ?Sized>() -> MetadataProperty<T, bool> {
    MetadataProperty::new("is_constant", false)
}
