//! Typed external metadata for IR tree nodes.
//!
//! Backend passes often need to attach facts to AST nodes that the node types
//! themselves know nothing about ("is this expression effectively constant",
//! "was this node synthesized by a lowering pass"). Rather than growing a
//! field per fact on every node type, each node owns a small side-table and
//! passes talk to it through typed accessors:
//!
//! - `node::HasMetadata`: capability trait for node types that expose a
//!   side-table
//! - `registry::MetadataRegistry`: the per-node storage, allocated lazily on
//!   first write
//! - `property::MetadataProperty`: a stateless accessor binding an attribute
//!   name to a static type and a default value
//! - `props`: attribute definitions shared by the backend passes
//!
//! Values are type-erased at storage time and re-checked at read time; a read
//! through the wrong type surfaces `error::Error::TypeMismatch` rather than
//! garbage. Access is single-threaded by design, callers wanting to share a
//! node across threads must bring their own locking.

pub mod error;
pub mod node;
pub mod property;
pub mod props;
pub mod registry;
pub mod value;
