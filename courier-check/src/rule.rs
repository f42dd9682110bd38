//! The call-site diagnostic rule.
//!
//! Fires for any method call on a command-bus receiver that passes exactly
//! one object-typed argument, whatever the method is named: a dispatch call
//! with a misspelled method name is exactly the mistake worth catching.
//! (The return-type side in [`crate::return_type`] is narrower and only
//! answers for the literal `handle` method; the asymmetry is deliberate.)
//!
//! An empty result is not a claim of well-typedness, only "this rule found
//! nothing wrong"; arity and argument-shape mismatches outside its
//! pre-filters are left to the host's general checks.

use std::fmt;

use tracing::debug;

use crate::naming::{HandlerNamingStrategy, MethodNamingStrategy};
use crate::reflect::ReflectionProvider;
use crate::resolve::{guarded, ResolutionOutcome, Resolver};
use crate::scope::InferenceScope;
use crate::select::OverloadSelector;
use crate::ty::Type;

/// One advisory message about a call site.
///
/// No severity, no location; the host attaches those when it reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates command-bus call sites against the handler routing convention.
pub struct CommandBusCallCheck<'a> {
    bus_class: String,
    resolver: Resolver<'a>,
    selector: &'a dyn OverloadSelector,
}

impl<'a> CommandBusCallCheck<'a> {
    pub fn new(
        bus_class: impl Into<String>,
        provider: &'a dyn ReflectionProvider,
        handler_naming: &'a dyn HandlerNamingStrategy,
        method_naming: &'a dyn MethodNamingStrategy,
        selector: &'a dyn OverloadSelector,
    ) -> Self {
        Self {
            bus_class: bus_class.into(),
            resolver: Resolver::new(provider, handler_naming, method_naming),
            selector,
        }
    }

    /// The nominal bus type this rule is registered for.
    pub fn bus_class(&self) -> &str {
        &self.bus_class
    }

    /// Check one call site.
    ///
    /// `receiver` is the static type of the value the method is called on,
    /// `args` the argument expressions, `scope` the host's inference view.
    pub fn check<E, S>(&self, receiver: &Type, args: &[E], scope: &S) -> Vec<Diagnostic>
    where
        S: InferenceScope<E>,
    {
        // Exact nominal match only; sub- and supertypes are other rules'
        // business.
        if receiver.object_name() != Some(self.bus_class.as_str()) {
            return Vec::new();
        }

        // Wrong number of arguments to the bus? Delegate to the host's
        // arity checks.
        let [command_expr] = args else {
            return Vec::new();
        };

        // Non-object command argument violates the bus signature itself;
        // delegate that too. A scope that panics instead of answering is
        // treated the same way.
        let Some(command_type) = guarded(|| scope.type_of(command_expr)) else {
            return Vec::new();
        };
        let Some(command) = command_type.object_name() else {
            return Vec::new();
        };

        let dispatch = match self.resolver.resolve(command) {
            ResolutionOutcome::Resolved(dispatch) => dispatch,
            ResolutionOutcome::Failed(failure) => {
                debug!(command, %failure, "routing failure at call site");
                return vec![Diagnostic::new(failure.to_string())];
            }
        };

        let handler = &dispatch.handler;
        let method = &dispatch.method;

        // No variant is even arity-compatible: report the same way as a
        // parameterless method, since the call's single argument has
        // nowhere to go.
        let Some(variant) = guarded(|| {
            self.selector
                .select(std::slice::from_ref(&command_type), dispatch.variants)
        })
        .flatten() else {
            return vec![self.shape_diagnostic(command, handler, method, "does not accept any parameters")];
        };

        let params = variant.params();
        if params.is_empty() {
            return vec![self.shape_diagnostic(command, handler, method, "does not accept any parameters")];
        }
        if params.len() > 1 {
            return vec![self.shape_diagnostic(command, handler, method, "accepts too many parameters")];
        }

        if params[0].accepts(&command_type, true).is_no() {
            return vec![self.shape_diagnostic(
                command,
                handler,
                method,
                "has a typehint that does not allow this command",
            )];
        }

        Vec::new()
    }

    fn shape_diagnostic(
        &self,
        command: &str,
        handler: &str,
        method: &str,
        problem: &str,
    ) -> Diagnostic {
        Diagnostic::new(format!(
            "Courier tried to route the command {command} to {handler}::{method} \
             but the method '{method}' {problem}."
        ))
    }
}
