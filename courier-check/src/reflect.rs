//! The reflection adapter: classes, methods, overload variants, parameters.
//!
//! The host's reflection system is best-effort and may be incomplete; every
//! lookup here returns an explicit `Option` instead of failing, so "class
//! not found" and "method not found" become ordinary branches in the
//! resolution engine rather than unwinding control flow.
//!
//! [`ClassRegistry`] is the in-memory provider implementation. Hosts that
//! precompute a reflection snapshot populate one directly; the integration
//! tests build fixtures with it.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::ty::{Acceptance, Type};

/// Host-supplied acceptance predicate for a parameter.
///
/// Given a candidate type and a strictness flag, answers whether a value of
/// that type may be passed. The strict form forbids implicit widening.
pub type AcceptanceFn = Arc<dyn Fn(&Type, bool) -> Acceptance + Send + Sync>;

/// A declared method parameter.
///
/// Carries the declared type plus an acceptance predicate. The stock
/// predicate knows only nominal identity (equal names accept, `Unknown` on
/// either side is `Maybe`/`Yes`); hosts with a real type lattice (unions,
/// generics, nullability) install their own via [`with_acceptance`].
///
/// [`with_acceptance`]: ParameterDescriptor::with_acceptance
#[derive(Clone)]
pub struct ParameterDescriptor {
    declared: Type,
    acceptance: Option<AcceptanceFn>,
}

impl ParameterDescriptor {
    /// A parameter using the stock nominal-identity acceptance rule.
    pub fn new(declared: Type) -> Self {
        Self { declared, acceptance: None }
    }

    /// A parameter whose acceptance is decided by the host's type system.
    pub fn with_acceptance(
        declared: Type,
        acceptance: impl Fn(&Type, bool) -> Acceptance + Send + Sync + 'static,
    ) -> Self {
        Self {
            declared,
            acceptance: Some(Arc::new(acceptance)),
        }
    }

    /// The declared parameter type.
    pub fn declared(&self) -> &Type {
        &self.declared
    }

    /// May a value of `candidate` be passed here?
    pub fn accepts(&self, candidate: &Type, strict: bool) -> Acceptance {
        if let Some(acceptance) = &self.acceptance {
            return acceptance(candidate, strict);
        }
        match (&self.declared, candidate) {
            // An untyped parameter takes anything.
            (Type::Unknown, _) => Acceptance::Yes,
            // Unknown argument: cannot rule it out.
            (_, Type::Unknown) => Acceptance::Maybe,
            (declared, candidate) if declared == candidate => Acceptance::Yes,
            // No nominal relation known, strict or not.
            _ => Acceptance::No,
        }
    }
}

impl fmt::Debug for ParameterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterDescriptor")
            .field("declared", &self.declared)
            .finish_non_exhaustive()
    }
}

/// One candidate signature for a method name.
#[derive(Debug, Clone)]
pub struct OverloadVariant {
    params: Vec<ParameterDescriptor>,
    return_type: Type,
}

impl OverloadVariant {
    pub fn new(params: Vec<ParameterDescriptor>, return_type: Type) -> Self {
        Self { params, return_type }
    }

    pub fn params(&self) -> &[ParameterDescriptor] {
        &self.params
    }

    pub fn return_type(&self) -> &Type {
        &self.return_type
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A method identity with one or more overload variants.
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    name: String,
    variants: Vec<OverloadVariant>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, variants: Vec<OverloadVariant>) -> Self {
        Self { name: name.into(), variants }
    }

    /// Convenience for the common single-signature case.
    pub fn single(name: impl Into<String>, variant: OverloadVariant) -> Self {
        Self::new(name, vec![variant])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variants(&self) -> &[OverloadVariant] {
        &self.variants
    }
}

/// A resolved class: name plus method table.
///
/// Methods keep declaration order so diagnostics and variant selection are
/// deterministic across runs.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    name: String,
    methods: IndexMap<String, MethodDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: IndexMap::new(),
        }
    }

    /// Builder-style method registration.
    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.insert(method.name().to_string(), method);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.get(name)
    }
}

/// The class-lookup capability the resolution engine consumes.
///
/// Implementations must be read-only for the duration of an analysis pass;
/// the engine relies on repeated lookups returning identical answers.
pub trait ReflectionProvider {
    /// The descriptor for `name`, or `None` if no such class is known.
    fn class(&self, name: &str) -> Option<&ClassDescriptor>;
}

/// In-memory [`ReflectionProvider`] backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: FxHashMap<String, ClassDescriptor>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style class registration.
    pub fn with_class(mut self, class: ClassDescriptor) -> Self {
        self.insert(class);
        self
    }

    pub fn insert(&mut self, class: ClassDescriptor) {
        self.classes.insert(class.name().to_string(), class);
    }
}

impl ReflectionProvider for ClassRegistry {
    fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }
}
