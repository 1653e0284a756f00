// type_context/type_kind.rs
//
// Canonical type shapes. The interned value doubles as the dedup key.

use smallvec::SmallVec;

use crate::identity::Symbol;
use crate::type_context::type_id::TypeId;

/// Built-in primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Int,
    Void,
}

impl PrimitiveKind {
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Int => "Int",
            PrimitiveKind::Void => "Void",
        }
    }
}

/// One canonical tuple element: optional interned name plus element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TupleElem {
    pub name: Option<Symbol>,
    pub ty: TypeId,
}

/// SmallVec for tuple elements - inline up to 4 (covers most tuples)
pub type TupleElemVec = SmallVec<[TupleElem; 4]>;

/// The canonical type representation.
///
/// Stored interned in a `TypeContext`; use `TypeId` handles for O(1)
/// equality and pass-by-copy. The enum derives `Eq + Hash`, so the value
/// itself is the structural key in the dedup map.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
    Primitive(PrimitiveKind),

    /// Ordered elements; element names participate in identity.
    /// The empty tuple is the unit type.
    Tuple(TupleElemVec),

    /// Exactly one input and one output. Multi-argument shapes pass a
    /// tuple-typed input.
    Function { input: TypeId, output: TypeId },
}

/// Parse-level tuple element descriptor, borrowed from the caller.
///
/// The canonical form (`TupleElem`) stores an interned `Symbol` in place of
/// the borrowed name; the swap happens when the tuple is interned.
#[derive(Debug, Clone, Copy)]
pub struct TupleTypeElt<'a> {
    pub name: Option<&'a str>,
    pub ty: TypeId,
}

impl<'a> TupleTypeElt<'a> {
    pub fn named(name: &'a str, ty: TypeId) -> Self {
        Self {
            name: Some(name),
            ty,
        }
    }

    pub fn unnamed(ty: TypeId) -> Self {
        Self { name: None, ty }
    }
}
