// type_context/type_id.rs
//
// TypeId: interned type handle with reserved indices for the seeded singletons.

use crate::identity::ContextId;

/// Canonical type identity in a `TypeContext`.
///
/// Two `TypeId`s compare equal iff they name the same canonical instance in
/// the same context, so handle equality replaces deep structural comparison.
/// The owning context's id is part of the handle; a handle can never be
/// replayed against a different context undetected.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TypeId {
    context: ContextId,
    index: u32,
}

impl TypeId {
    // ========================================================================
    // Reserved indices for the seeded singletons
    // These are guaranteed to be interned at these slots by TypeContext::new()
    // ========================================================================

    pub(super) const INT: u32 = 0;
    pub(super) const VOID: u32 = 1;
    pub(super) const UNIT: u32 = 2;

    /// First non-reserved index (for dynamic types)
    pub(super) const FIRST_DYNAMIC: u32 = 3;

    /// Create a TypeId from its parts (for internal use by TypeContext)
    pub(super) fn new(context: ContextId, index: u32) -> Self {
        Self { context, index }
    }

    /// The context this handle belongs to.
    pub fn context(self) -> ContextId {
        self.context
    }

    /// Get the raw table index (for debugging)
    pub fn index(self) -> u32 {
        self.index
    }
}
