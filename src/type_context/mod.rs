// type_context/mod.rs
//
// Interned type system using TypeId handles for O(1) equality and minimal allocations.
//
// - TypeId: (context, index) handle to an interned type (Copy, trivial Eq/Hash)
// - TypeContext: per-compilation storage with automatic deduplication
// - TypeKind: the canonical type representation using TypeId for child types

mod context;
mod query;
pub mod type_id;
pub mod type_kind;

// Re-export all public items so `crate::type_context::*` keeps working.
pub use context::*;
pub use type_id::*;
pub use type_kind::*;
