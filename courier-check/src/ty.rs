//! The static type model shared with the host analyzer.
//!
//! The checker never computes types itself; it consumes the types the host's
//! inference engine hands it and branches on their shape. The model is
//! therefore deliberately small: commands are nominal object types, anything
//! the host cannot pin down is [`Type::Unknown`], and a handful of scalar
//! shapes exist so the pre-filters have something concrete to reject.

use std::fmt;

/// A static type as seen by the checker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A nominal object type, identified by its fully-qualified name.
    Object(String),
    /// A scalar value type.
    Scalar(ScalarTy),
    /// The unit/void type.
    Unit,
    /// The degraded fallback: the host could not (or we chose not to)
    /// determine anything more precise.
    Unknown,
}

/// Scalar type shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarTy {
    Int,
    Float,
    Bool,
    Str,
}

impl Type {
    /// Construct a nominal object type.
    pub fn object(name: impl Into<String>) -> Self {
        Type::Object(name.into())
    }

    /// The fully-qualified name, if this is a nominal object type.
    pub fn object_name(&self) -> Option<&str> {
        match self {
            Type::Object(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Whether this is a nominal object type.
    pub fn is_object(&self) -> bool {
        matches!(self, Type::Object(_))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Object(name) => write!(f, "{name}"),
            Type::Scalar(ScalarTy::Int) => write!(f, "int"),
            Type::Scalar(ScalarTy::Float) => write!(f, "float"),
            Type::Scalar(ScalarTy::Bool) => write!(f, "bool"),
            Type::Scalar(ScalarTy::Str) => write!(f, "string"),
            Type::Unit => write!(f, "unit"),
            Type::Unknown => write!(f, "unknown"),
        }
    }
}

/// The three-valued answer to "may a value of this type be passed here?".
///
/// Only [`Acceptance::No`] is a hard failure. `Maybe` arises when the host's
/// type information is incomplete; the checker treats it like `Yes` rather
/// than block on ambiguity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    Yes,
    No,
    Maybe,
}

impl Acceptance {
    pub fn is_yes(self) -> bool {
        matches!(self, Acceptance::Yes)
    }

    pub fn is_no(self) -> bool {
        matches!(self, Acceptance::No)
    }
}
