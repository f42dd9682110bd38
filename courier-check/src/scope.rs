//! The host's type-inference scope, seen through a minimal interface.
//!
//! The checker receives call arguments as opaque expression handles of the
//! host's choosing and asks the scope for their static types. Nothing else
//! about the host's inference engine leaks in.

use crate::ty::Type;

/// A view into the host's type inference for one call site.
///
/// `E` is the host's expression representation; the checker never inspects
/// it, only forwards it here.
pub trait InferenceScope<E> {
    /// The inferred static type of `expr`.
    fn type_of(&self, expr: &E) -> Type;
}

/// Any closure from expression to type is a scope. Test fixtures and hosts
/// with a functional inference API use this directly.
impl<E, F> InferenceScope<E> for F
where
    F: Fn(&E) -> Type,
{
    fn type_of(&self, expr: &E) -> Type {
        self(expr)
    }
}
