//! Canonical type interning for a compiler front-end.
//!
//! A [`TypeContext`] owns every type built during a compilation session and
//! guarantees one canonical instance per distinct shape, so type equality
//! downstream is plain [`TypeId`] equality. [`TypeLowering`] is the
//! semantic-analysis facade that parsers drive with parsed type syntax.

pub mod errors;
pub mod identity;
pub mod sema;
pub mod span;
pub mod type_context;

// Re-exports: public API surface
pub use errors::{ContextResult, TypeContextError};
pub use identity::{ContextId, Interner, Symbol};
pub use sema::TypeLowering;
pub use span::Span;
pub use type_context::{
    PrimitiveKind, TupleElem, TupleElemVec, TupleTypeElt, TypeContext, TypeId, TypeKind,
};
