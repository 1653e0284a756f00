// sema.rs
//
// Semantic-analysis entry points for type construction.
//
// Thin delegation layer: parse-level type syntax goes in, canonical TypeIds
// come out. All interning policy lives in TypeContext; this layer only
// attaches the caller's source locations to failures.

use crate::errors::ContextResult;
use crate::span::Span;
use crate::type_context::{TupleTypeElt, TypeContext, TypeId};

/// Lowers parsed type syntax into canonical types.
///
/// Stateless facade over a borrowed [`TypeContext`]; cheap to construct per
/// declaration or per file. Locations are advisory and end up in error
/// labels only, never in the types themselves.
pub struct TypeLowering<'ctx> {
    ctx: &'ctx TypeContext,
}

impl<'ctx> TypeLowering<'ctx> {
    pub fn new(ctx: &'ctx TypeContext) -> Self {
        Self { ctx }
    }

    /// The context this facade lowers into.
    pub fn context(&self) -> &'ctx TypeContext {
        self.ctx
    }

    /// The 'Int' keyword.
    pub fn build_int_type(&self, loc: Span) -> ContextResult<TypeId> {
        self.ctx.int_type().map_err(|e| e.with_span(loc))
    }

    /// The 'Void' keyword.
    pub fn build_void_type(&self, loc: Span) -> ContextResult<TypeId> {
        self.ctx.void_type().map_err(|e| e.with_span(loc))
    }

    /// Parenthesized tuple syntax. An empty element list is the unit type.
    pub fn build_tuple_type(
        &self,
        lparen_loc: Span,
        elements: &[TupleTypeElt],
        rparen_loc: Span,
    ) -> ContextResult<TypeId> {
        tracing::trace!(arity = elements.len(), "lowering tuple type");
        self.ctx
            .tuple_type(elements)
            .map_err(|e| e.with_span(lparen_loc.merge(rparen_loc)))
    }

    /// Arrow syntax: `input -> output`.
    pub fn build_function_type(
        &self,
        input: TypeId,
        arrow_loc: Span,
        output: TypeId,
    ) -> ContextResult<TypeId> {
        tracing::trace!("lowering function type");
        self.ctx
            .function_type(input, output)
            .map_err(|e| e.with_span(arrow_loc))
    }
}
