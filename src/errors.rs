// errors.rs
//! Type context errors (E21xx).

#![allow(unused_assignments)] // False positives from thiserror derive

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::identity::ContextId;
use crate::span::Span;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum TypeContextError {
    #[error("type belongs to context {found}, not {expected}")]
    #[diagnostic(
        code(E2101),
        help("types can only be combined with types from the context that created them")
    )]
    InvalidReference {
        expected: ContextId,
        found: ContextId,
        #[label("built from a foreign type")]
        span: Option<SourceSpan>,
    },

    #[error("type context {context} used after teardown")]
    #[diagnostic(code(E2102))]
    UseAfterTeardown {
        context: ContextId,
        #[label("context already torn down")]
        span: Option<SourceSpan>,
    },
}

impl TypeContextError {
    /// Attach a source location to an error raised without one.
    pub fn with_span(self, span: Span) -> Self {
        match self {
            Self::InvalidReference {
                expected, found, ..
            } => Self::InvalidReference {
                expected,
                found,
                span: Some(span.into()),
            },
            Self::UseAfterTeardown { context, .. } => Self::UseAfterTeardown {
                context,
                span: Some(span.into()),
            },
        }
    }
}

/// Result type alias for type context operations.
pub type ContextResult<T> = Result<T, TypeContextError>;
