//! Handler/method resolution for command-bus call sites.
//!
//! Both checker capabilities walk the same chain: derive the handler class
//! name from the command type, look the class up, derive the method name,
//! look the method up. This module owns that walk and hands back a tagged
//! [`ResolutionOutcome`] the consumers branch on.
//!
//! Resolution is a pure function of (command type name, naming strategies,
//! reflection state): nothing is mutated, no result is cached, and repeated
//! calls with identical inputs return identical outcomes. Collaborator
//! calls that panic — a naming strategy as much as a reflection lookup —
//! are caught at the boundary and folded into the corresponding `Failed`
//! outcome so misbehaving host code can never abort the analysis pass.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::trace;

use crate::naming::{HandlerNamingStrategy, MethodNamingStrategy};
use crate::reflect::{OverloadVariant, ReflectionProvider};

/// Why a command could not be routed.
///
/// These are expected, user-facing outcomes, not faults; the `Display`
/// renderings are the diagnostic texts the validator reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionFailure {
    #[error(
        "Courier tried to route the command {command} but could not find \
         the matching handler {handler}."
    )]
    HandlerNotFound { command: String, handler: String },

    #[error(
        "Courier tried to route the command {command} to {handler}::{method} \
         but while the class could be loaded, the method '{method}' could \
         not be found on the class."
    )]
    MethodNotFound {
        command: String,
        handler: String,
        method: String,
    },
}

/// A fully-resolved dispatch target.
///
/// Carries the full variant list; selecting among variants is deferred to
/// each consumer since they apply the actual call arguments themselves.
#[derive(Debug)]
pub struct ResolvedDispatch<'r> {
    pub handler: String,
    pub method: String,
    pub variants: &'r [OverloadVariant],
}

/// The shared output of the resolution engine.
#[derive(Debug)]
pub enum ResolutionOutcome<'r> {
    Resolved(ResolvedDispatch<'r>),
    Failed(ResolutionFailure),
}

/// The resolution engine.
///
/// All collaborators are injected at construction and borrowed immutably;
/// a `Resolver` is a handful of references and is freely copyable.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    provider: &'a dyn ReflectionProvider,
    handler_naming: &'a dyn HandlerNamingStrategy,
    method_naming: &'a dyn MethodNamingStrategy,
}

impl<'a> Resolver<'a> {
    pub fn new(
        provider: &'a dyn ReflectionProvider,
        handler_naming: &'a dyn HandlerNamingStrategy,
        method_naming: &'a dyn MethodNamingStrategy,
    ) -> Self {
        Self {
            provider,
            handler_naming,
            method_naming,
        }
    }

    /// Walk the naming strategies and the reflection provider for the
    /// command type named `command`.
    pub fn resolve(&self, command: &str) -> ResolutionOutcome<'a> {
        let handler_name = match guarded(|| self.handler_naming.handler_class_for(command)) {
            Some(name) => name,
            None => {
                trace!(command, "handler naming strategy panicked");
                return ResolutionOutcome::Failed(ResolutionFailure::HandlerNotFound {
                    command: command.to_string(),
                    handler: UNRESOLVED_NAME.to_string(),
                });
            }
        };
        trace!(command, handler = %handler_name, "derived handler class");

        let handler = match guarded(|| self.provider.class(&handler_name)).flatten() {
            Some(class) => class,
            None => {
                trace!(command, handler = %handler_name, "handler class not found");
                return ResolutionOutcome::Failed(ResolutionFailure::HandlerNotFound {
                    command: command.to_string(),
                    handler: handler_name,
                });
            }
        };

        let method_name = match guarded(|| self.method_naming.method_for(command, handler.name()))
        {
            Some(name) => name,
            None => {
                trace!(command, "method naming strategy panicked");
                return ResolutionOutcome::Failed(ResolutionFailure::MethodNotFound {
                    command: command.to_string(),
                    handler: handler.name().to_string(),
                    method: UNRESOLVED_NAME.to_string(),
                });
            }
        };
        trace!(command, method = %method_name, "derived method name");

        let method = match guarded(|| handler.method(&method_name)).flatten() {
            Some(method) => method,
            None => {
                trace!(command, method = %method_name, "method not found on handler");
                return ResolutionOutcome::Failed(ResolutionFailure::MethodNotFound {
                    command: command.to_string(),
                    handler: handler.name().to_string(),
                    method: method_name,
                });
            }
        };

        ResolutionOutcome::Resolved(ResolvedDispatch {
            handler: handler.name().to_string(),
            method: method_name,
            variants: method.variants(),
        })
    }
}

/// Stands in for a name a panicking naming strategy failed to produce, so
/// the failure message still has something to print.
const UNRESOLVED_NAME: &str = "<unresolved>";

/// Run a collaborator call, converting a panic into `None`.
///
/// Naming strategies, reflection providers, overload selectors, and the
/// inference scope are all external code; a call that unwinds is treated
/// the same as one that found nothing.
pub(crate) fn guarded<T>(f: impl FnOnce() -> T) -> Option<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).ok()
}
