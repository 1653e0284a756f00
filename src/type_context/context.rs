// type_context/context.rs
//
// Per-compilation type context: interning table, seeded singletons, lifecycle.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::errors::{ContextResult, TypeContextError};
use crate::identity::{ContextId, Interner, Symbol};
use crate::type_context::type_id::TypeId;
use crate::type_context::type_kind::{
    PrimitiveKind, TupleElem, TupleElemVec, TupleTypeElt, TypeKind,
};

/// Pre-interned singleton handles for O(1) access.
#[derive(Debug, Clone, Copy)]
struct Singletons {
    int: TypeId,
    void: TypeId,
    unit: TypeId,
}

/// Type storage and dedup state while the context is active.
#[derive(Debug)]
pub(super) struct Tables {
    /// Interned types, indexed by TypeId
    types: Vec<TypeKind>,
    /// Deduplication map: canonical shape -> table index
    dedup: FxHashMap<TypeKind, u32>,
    /// Tuple element names
    names: Interner,
}

impl Tables {
    /// Insert-or-fetch a canonical shape, returning its table index.
    fn insert(&mut self, ty: TypeKind) -> u32 {
        let next = self.types.len() as u32;
        *self.dedup.entry(ty.clone()).or_insert_with(|| {
            self.types.push(ty);
            next
        })
    }

    /// Probe for an existing shape without inserting.
    pub(super) fn probe(&self, ty: &TypeKind) -> Option<u32> {
        self.dedup.get(ty).copied()
    }

    pub(super) fn get(&self, index: u32) -> &TypeKind {
        &self.types[index as usize]
    }

    pub(super) fn resolve_name(&self, sym: Symbol) -> &str {
        self.names.resolve(sym)
    }

    pub(super) fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Canonicalize descriptors, interning any new element names.
    fn intern_elems(&mut self, elements: &[TupleTypeElt]) -> TupleElemVec {
        elements
            .iter()
            .map(|e| TupleElem {
                name: e.name.map(|n| self.names.intern(n)),
                ty: e.ty,
            })
            .collect()
    }

    /// Canonicalize descriptors without touching the interner. Returns None
    /// when an element name has never been interned, in which case no tuple
    /// carrying that name exists either.
    pub(super) fn lookup_elems(&self, elements: &[TupleTypeElt]) -> Option<TupleElemVec> {
        elements
            .iter()
            .map(|e| {
                let name = match e.name {
                    Some(n) => Some(self.names.lookup(n)?),
                    None => None,
                };
                Some(TupleElem { name, ty: e.ty })
            })
            .collect()
    }
}

enum State {
    Active(Tables),
    TornDown,
}

/// Per-compilation type context with automatic interning/deduplication.
///
/// Owns every type created during a session. All operations take `&self`;
/// the table sits behind an `RwLock`, so concurrent construction is safe and
/// racing threads converge on one canonical instance per shape. `teardown`
/// destroys every type together and fails all later operations.
pub struct TypeContext {
    id: ContextId,
    singletons: Singletons,
    state: RwLock<State>,
}

impl TypeContext {
    /// Create a new context with the singleton types pre-interned.
    pub fn new() -> Self {
        let id = ContextId::fresh();
        let mut tables = Tables {
            types: Vec::new(),
            dedup: FxHashMap::default(),
            names: Interner::new(),
        };

        // Seed the singletons in the order fixed by the reserved indices.
        // The debug_asserts verify the constants match the interned slots.
        let int = TypeId::new(id, tables.insert(TypeKind::Primitive(PrimitiveKind::Int)));
        debug_assert_eq!(int.index(), TypeId::INT);
        let void = TypeId::new(id, tables.insert(TypeKind::Primitive(PrimitiveKind::Void)));
        debug_assert_eq!(void.index(), TypeId::VOID);
        let unit = TypeId::new(id, tables.insert(TypeKind::Tuple(TupleElemVec::new())));
        debug_assert_eq!(unit.index(), TypeId::UNIT);
        debug_assert_eq!(tables.type_count() as u32, TypeId::FIRST_DYNAMIC);

        tracing::debug!(context = %id, "type context created");

        Self {
            id,
            singletons: Singletons { int, void, unit },
            state: RwLock::new(State::Active(tables)),
        }
    }

    /// The identity of this context.
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// Whether the context still accepts operations.
    pub fn is_active(&self) -> bool {
        matches!(&*self.state.read(), State::Active(_))
    }

    // ========================================================================
    // Internal state access - one lock acquisition per public operation
    // ========================================================================

    pub(super) fn with_tables<T>(&self, f: impl FnOnce(&Tables) -> T) -> ContextResult<T> {
        match &*self.state.read() {
            State::Active(tables) => Ok(f(tables)),
            State::TornDown => Err(self.torn_down()),
        }
    }

    fn with_tables_mut<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> ContextResult<T> {
        match &mut *self.state.write() {
            State::Active(tables) => Ok(f(tables)),
            State::TornDown => Err(self.torn_down()),
        }
    }

    /// Verify a handle was produced by this context. Runs on immutable
    /// handle data, before any lock is taken.
    pub(super) fn check_owned(&self, ty: TypeId) -> ContextResult<()> {
        if ty.context() != self.id {
            return Err(TypeContextError::InvalidReference {
                expected: self.id,
                found: ty.context(),
                span: None,
            });
        }
        Ok(())
    }

    fn torn_down(&self) -> TypeContextError {
        TypeContextError::UseAfterTeardown {
            context: self.id,
            span: None,
        }
    }

    // ========================================================================
    // Singleton accessors - cached handles, still gated on the live state
    // ========================================================================

    /// The canonical Int type.
    pub fn int_type(&self) -> ContextResult<TypeId> {
        self.with_tables(|_| self.singletons.int)
    }

    /// The canonical Void type.
    pub fn void_type(&self) -> ContextResult<TypeId> {
        self.with_tables(|_| self.singletons.void)
    }

    /// The canonical empty tuple (unit) type.
    pub fn unit_type(&self) -> ContextResult<TypeId> {
        self.with_tables(|_| self.singletons.unit)
    }

    // ========================================================================
    // Compound type builders - intern on construction
    // ========================================================================

    /// Intern a tuple type from parse-level element descriptors.
    ///
    /// Identical descriptions (same order, same names, same element types)
    /// intern to the identical `TypeId`. An empty description yields the
    /// unit singleton.
    pub fn tuple_type(&self, elements: &[TupleTypeElt]) -> ContextResult<TypeId> {
        for elem in elements {
            self.check_owned(elem.ty)?;
        }
        if elements.is_empty() {
            return self.unit_type();
        }

        // Fast path: shared lock, probe for an existing instance.
        let probed = self.with_tables(|tables| {
            tables
                .lookup_elems(elements)
                .and_then(|elems| tables.probe(&TypeKind::Tuple(elems)))
        })?;
        if let Some(index) = probed {
            return Ok(TypeId::new(self.id, index));
        }

        // Slow path: exclusive lock. insert() re-checks the dedup map, so a
        // thread that lost the race reuses the winner's slot.
        let index = self.with_tables_mut(|tables| {
            let elems = tables.intern_elems(elements);
            tables.insert(TypeKind::Tuple(elems))
        })?;
        tracing::trace!(context = %self.id, index, arity = elements.len(), "interned tuple type");
        Ok(TypeId::new(self.id, index))
    }

    /// Intern a function type from its input and output types.
    pub fn function_type(&self, input: TypeId, output: TypeId) -> ContextResult<TypeId> {
        self.check_owned(input)?;
        self.check_owned(output)?;

        let shape = TypeKind::Function { input, output };
        let probed = self.with_tables(|tables| tables.probe(&shape))?;
        if let Some(index) = probed {
            return Ok(TypeId::new(self.id, index));
        }

        let index = self.with_tables_mut(|tables| tables.insert(shape))?;
        tracing::trace!(context = %self.id, index, "interned function type");
        Ok(TypeId::new(self.id, index))
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Tear the context down, destroying every interned type together.
    ///
    /// One-way transition. The context value stays alive so later calls fail
    /// with `UseAfterTeardown` instead of touching freed state.
    pub fn teardown(&self) -> ContextResult<()> {
        let mut state = self.state.write();
        let count = match &*state {
            State::Active(tables) => tables.type_count(),
            State::TornDown => return Err(self.torn_down()),
        };
        *state = State::TornDown;
        tracing::debug!(context = %self.id, types = count, "type context torn down");
        Ok(())
    }
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("TypeContext");
        s.field("id", &self.id);
        match &*self.state.read() {
            State::Active(tables) => s.field("types_count", &tables.type_count()),
            State::TornDown => s.field("state", &"torn down"),
        };
        s.finish_non_exhaustive()
    }
}
