//! Overload variant selection.
//!
//! When a method name carries several signatures, someone has to pick the
//! one a given call would bind to. Real compatibility resolution needs the
//! host's full type lattice (unions, generics, nullability), so the
//! capability is a trait the host may implement; [`AcceptanceSelector`] is
//! the stock implementation built on the acceptance lattice the adapter
//! already exposes.
//!
//! # Selection algorithm
//!
//! 1. A single variant always wins, arity regardless: the consumers report
//!    arity problems themselves and need the variant to do so.
//! 2. Otherwise filter to applicable variants: matching arity, and no
//!    parameter definitely rejects its argument (non-strict).
//! 3. Prefer variants where every parameter answers definitely-yes over
//!    ones that only reach maybe; first-declared wins ties.

use crate::reflect::OverloadVariant;
use crate::ty::Type;

/// Chooses the overload variant a call with the given argument types would
/// bind to, or `None` when no variant is compatible.
pub trait OverloadSelector {
    fn select<'v>(
        &self,
        arg_types: &[Type],
        variants: &'v [OverloadVariant],
    ) -> Option<&'v OverloadVariant>;
}

/// Stock selector over the parameter acceptance lattice.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptanceSelector;

impl AcceptanceSelector {
    /// Matching arity and no parameter definitely rejects its argument.
    fn is_applicable(&self, variant: &OverloadVariant, arg_types: &[Type]) -> bool {
        if variant.arity() != arg_types.len() {
            return false;
        }
        variant
            .params()
            .iter()
            .zip(arg_types)
            .all(|(param, arg)| !param.accepts(arg, false).is_no())
    }

    /// Every parameter answers definitely-yes.
    fn is_exact(&self, variant: &OverloadVariant, arg_types: &[Type]) -> bool {
        variant
            .params()
            .iter()
            .zip(arg_types)
            .all(|(param, arg)| param.accepts(arg, false).is_yes())
    }
}

impl OverloadSelector for AcceptanceSelector {
    fn select<'v>(
        &self,
        arg_types: &[Type],
        variants: &'v [OverloadVariant],
    ) -> Option<&'v OverloadVariant> {
        if let [only] = variants {
            return Some(only);
        }

        let applicable: Vec<&OverloadVariant> = variants
            .iter()
            .filter(|v| self.is_applicable(v, arg_types))
            .collect();

        applicable
            .iter()
            .find(|v| self.is_exact(v, arg_types))
            .or_else(|| applicable.first())
            .copied()
    }
}
