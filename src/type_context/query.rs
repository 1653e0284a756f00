// type_context/query.rs
//
// TypeContext query methods: predicates, unwrap helpers, lookups, display.

use super::context::{Tables, TypeContext};
use super::type_id::TypeId;
use super::type_kind::{TupleElemVec, TupleTypeElt, TypeKind};
use crate::errors::ContextResult;

impl TypeContext {
    /// The canonical shape behind a handle.
    ///
    /// Returned by value: the table stays behind the lock, and the payloads
    /// are small enough to copy out.
    pub fn kind(&self, ty: TypeId) -> ContextResult<TypeKind> {
        self.check_owned(ty)?;
        self.with_tables(|tables| tables.get(ty.index()).clone())
    }

    /// Check if this is a primitive type
    pub fn is_primitive(&self, ty: TypeId) -> ContextResult<bool> {
        self.check_owned(ty)?;
        self.with_tables(|tables| matches!(tables.get(ty.index()), TypeKind::Primitive(_)))
    }

    /// Check if this is a tuple type
    pub fn is_tuple(&self, ty: TypeId) -> ContextResult<bool> {
        self.check_owned(ty)?;
        self.with_tables(|tables| matches!(tables.get(ty.index()), TypeKind::Tuple(_)))
    }

    /// Check if this is a function type
    pub fn is_function(&self, ty: TypeId) -> ContextResult<bool> {
        self.check_owned(ty)?;
        self.with_tables(|tables| matches!(tables.get(ty.index()), TypeKind::Function { .. }))
    }

    /// Unwrap a tuple type, returning its elements
    pub fn unwrap_tuple(&self, ty: TypeId) -> ContextResult<Option<TupleElemVec>> {
        self.check_owned(ty)?;
        self.with_tables(|tables| match tables.get(ty.index()) {
            TypeKind::Tuple(elements) => Some(elements.clone()),
            _ => None,
        })
    }

    /// Unwrap a function type, returning (input, output)
    pub fn unwrap_function(&self, ty: TypeId) -> ContextResult<Option<(TypeId, TypeId)>> {
        self.check_owned(ty)?;
        self.with_tables(|tables| match tables.get(ty.index()) {
            TypeKind::Function { input, output } => Some((*input, *output)),
            _ => None,
        })
    }

    /// Find the canonical tuple for a description without interning anything.
    pub fn lookup_tuple(&self, elements: &[TupleTypeElt]) -> ContextResult<Option<TypeId>> {
        for elem in elements {
            self.check_owned(elem.ty)?;
        }
        if elements.is_empty() {
            return self.unit_type().map(Some);
        }
        self.with_tables(|tables| {
            tables
                .lookup_elems(elements)
                .and_then(|elems| tables.probe(&TypeKind::Tuple(elems)))
                .map(|index| TypeId::new(self.id(), index))
        })
    }

    /// Find the canonical function type for a signature without interning it.
    pub fn lookup_function(&self, input: TypeId, output: TypeId) -> ContextResult<Option<TypeId>> {
        self.check_owned(input)?;
        self.check_owned(output)?;
        self.with_tables(|tables| {
            tables
                .probe(&TypeKind::Function { input, output })
                .map(|index| TypeId::new(self.id(), index))
        })
    }

    /// Number of canonical types interned so far, seeded singletons included.
    pub fn type_count(&self) -> ContextResult<usize> {
        self.with_tables(|tables| tables.type_count())
    }

    /// Render a type for error messages.
    pub fn display(&self, ty: TypeId) -> ContextResult<String> {
        self.check_owned(ty)?;
        self.with_tables(|tables| tables.render(ty.index()))
    }
}

impl Tables {
    /// Recursive renderer. Sub-handles are same-context by construction, so
    /// index-based recursion is sound.
    fn render(&self, index: u32) -> String {
        match self.get(index) {
            TypeKind::Primitive(p) => p.name().to_string(),
            TypeKind::Tuple(elements) => {
                let parts: Vec<String> = elements
                    .iter()
                    .map(|e| match e.name {
                        Some(name) => {
                            format!("{}: {}", self.resolve_name(name), self.render(e.ty.index()))
                        }
                        None => self.render(e.ty.index()),
                    })
                    .collect();
                format!("({})", parts.join(", "))
            }
            TypeKind::Function { input, output } => {
                let lhs = self.render(input.index());
                // Parenthesize a function-typed input so nesting reads
                // unambiguously: (Int -> Void) -> Int.
                let lhs = if matches!(self.get(input.index()), TypeKind::Function { .. }) {
                    format!("({})", lhs)
                } else {
                    lhs
                };
                format!("{} -> {}", lhs, self.render(output.index()))
            }
        }
    }
}
