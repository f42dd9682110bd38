//! Return-type inference for `handle` calls on the bus.
//!
//! This side feeds the host's downstream type inference, so it never
//! reports anything: every failure along the resolution chain degrades to
//! [`Type::Unknown`] and analysis moves on. Unlike the diagnostic rule it
//! answers only for the literal `handle` method; the host registers it with
//! [`HandleReturnType::method_name`].

use tracing::trace;

use crate::naming::{HandlerNamingStrategy, MethodNamingStrategy};
use crate::reflect::ReflectionProvider;
use crate::resolve::{guarded, ResolutionOutcome, Resolver};
use crate::scope::InferenceScope;
use crate::select::OverloadSelector;
use crate::ty::Type;

/// Computes the type a `bus.handle(command)` call evaluates to.
pub struct HandleReturnType<'a> {
    bus_class: String,
    resolver: Resolver<'a>,
    selector: &'a dyn OverloadSelector,
}

impl<'a> HandleReturnType<'a> {
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

    /// The nominal bus type this provider is registered for.
    pub fn bus_class(&self) -> &str {
        &self.bus_class
    }

    /// The only method name this provider answers for.
    pub fn method_name(&self) -> &'static str {
        "handle"
    }

    /// The type the dispatch call yields, or [`Type::Unknown`] when the
    /// route cannot be resolved statically.
    pub fn return_type<E, S>(&self, args: &[E], scope: &S) -> Type
    where
        S: InferenceScope<E>,
    {
        let [command_expr] = args else {
            return Type::Unknown;
        };

        let Some(command_type) = guarded(|| scope.type_of(command_expr)) else {
            return Type::Unknown;
        };
        let Some(command) = command_type.object_name() else {
            return Type::Unknown;
        };

        let dispatch = match self.resolver.resolve(command) {
            ResolutionOutcome::Resolved(dispatch) => dispatch,
            ResolutionOutcome::Failed(failure) => {
                trace!(command, %failure, "degrading to unknown return type");
                return Type::Unknown;
            }
        };

        match guarded(|| {
            self.selector
                .select(std::slice::from_ref(&command_type), dispatch.variants)
        })
        .flatten()
        {
            Some(variant) => variant.return_type().clone(),
            None => Type::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::naming::{HandleMethodNaming, SuffixedHandlerNaming};
    use crate::reflect::{
        ClassDescriptor, ClassRegistry, MethodDescriptor, OverloadVariant, ParameterDescriptor,
    };
    use crate::select::AcceptanceSelector;
    use crate::ty::ScalarTy;

    const BUS: &str = "Courier\\CommandBus";

    fn infer_with(registry: &ClassRegistry, args: &[Type]) -> Type {
        let handler_naming = SuffixedHandlerNaming::default();
        let method_naming = HandleMethodNaming;
        let selector = AcceptanceSelector;
        let provider =
            HandleReturnType::new(BUS, registry, &handler_naming, &method_naming, &selector);
        provider.return_type(args, &|expr: &Type| expr.clone())
    }

    #[test]
    fn declared_return_type_on_success() {
        let registry = ClassRegistry::new().with_class(
            ClassDescriptor::new("AddTaskHandler").with_method(MethodDescriptor::single(
                "handle",
                OverloadVariant::new(
                    vec![ParameterDescriptor::new(Type::object("AddTask"))],
                    Type::object("TaskId"),
                ),
            )),
        );
        assert_eq!(
            infer_with(&registry, &[Type::object("AddTask")]),
            Type::object("TaskId")
        );
    }

    #[test]
    fn unknown_when_handler_missing() {
        let registry = ClassRegistry::new();
        assert_eq!(
            infer_with(&registry, &[Type::object("CompleteTask")]),
            Type::Unknown
        );
    }

    #[test]
    fn unknown_when_method_missing() {
        let registry =
            ClassRegistry::new().with_class(ClassDescriptor::new("AddTaskHandler"));
        assert_eq!(infer_with(&registry, &[Type::object("AddTask")]), Type::Unknown);
    }

    #[test]
    fn unknown_for_non_object_argument() {
        let registry = ClassRegistry::new();
        assert_eq!(
            infer_with(&registry, &[Type::Scalar(ScalarTy::Str)]),
            Type::Unknown
        );
    }

    #[test]
    fn unknown_for_wrong_argument_count() {
        let registry = ClassRegistry::new();
        assert_eq!(infer_with(&registry, &[]), Type::Unknown);
        let two = [Type::object("AddTask"), Type::object("AddTask")];
        assert_eq!(infer_with(&registry, &two), Type::Unknown);
    }

    #[test]
    fn unknown_when_no_variant_is_compatible() {
        // Two variants, neither of arity one: selection fails, inference
        // degrades instead of guessing.
        let registry = ClassRegistry::new().with_class(
            ClassDescriptor::new("AddTaskHandler").with_method(MethodDescriptor::new(
                "handle",
                vec![
                    OverloadVariant::new(vec![], Type::Unit),
                    OverloadVariant::new(
                        vec![
                            ParameterDescriptor::new(Type::object("AddTask")),
                            ParameterDescriptor::new(Type::Scalar(ScalarTy::Bool)),
                        ],
                        Type::Unit,
                    ),
                ],
            )),
        );
        assert_eq!(infer_with(&registry, &[Type::object("AddTask")]), Type::Unknown);
    }

    #[test]
    fn unknown_when_naming_strategy_panics() {
        use crate::naming::HandlerNamingStrategy;

        struct PanickingHandlerNaming;
        impl HandlerNamingStrategy for PanickingHandlerNaming {
            fn handler_class_for(&self, _command_class: &str) -> String {
                panic!("naming convention exploded");
            }
        }

        let registry = ClassRegistry::new();
        let handler_naming = PanickingHandlerNaming;
        let method_naming = HandleMethodNaming;
        let selector = AcceptanceSelector;
        let provider =
            HandleReturnType::new(BUS, &registry, &handler_naming, &method_naming, &selector);
        assert_eq!(
            provider.return_type(&[Type::object("AddTask")], &|e: &Type| e.clone()),
            Type::Unknown
        );
    }

    #[test]
    fn unknown_when_scope_panics() {
        let registry = ClassRegistry::new();
        let handler_naming = SuffixedHandlerNaming::default();
        let method_naming = HandleMethodNaming;
        let selector = AcceptanceSelector;
        let provider =
            HandleReturnType::new(BUS, &registry, &handler_naming, &method_naming, &selector);
        let scope = |_e: &Type| -> Type { panic!("inference exploded") };
        assert_eq!(provider.return_type(&[Type::object("AddTask")], &scope), Type::Unknown);
    }

    #[test]
    fn overloads_select_by_argument_type() {
        let registry = ClassRegistry::new().with_class(
            ClassDescriptor::new("AddTaskHandler").with_method(MethodDescriptor::new(
                "handle",
                vec![
                    OverloadVariant::new(
                        vec![ParameterDescriptor::new(Type::object("OtherCommand"))],
                        Type::Unit,
                    ),
                    OverloadVariant::new(
                        vec![ParameterDescriptor::new(Type::object("AddTask"))],
                        Type::object("TaskId"),
                    ),
                ],
            )),
        );
        assert_eq!(
            infer_with(&registry, &[Type::object("AddTask")]),
            Type::object("TaskId")
        );
    }
}
