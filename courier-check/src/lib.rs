//! Static call-site validation for the Courier command bus.
//!
//! Courier routes command objects to handler classes by naming convention:
//! `AddTask` goes to `AddTaskHandler::handle`. That convention is invisible
//! to a host analyzer's own checks, so routing mistakes (missing handler,
//! wrong method name, wrong arity, incompatible typehint) normally surface
//! at runtime. This crate catches them statically:
//!
//! - [`CommandBusCallCheck`] inspects calls on a command-bus receiver and
//!   reports routing problems as diagnostics.
//! - [`HandleReturnType`] tells the host's type inference what a
//!   `bus.handle(command)` call evaluates to, degrading to
//!   [`Type::Unknown`] whenever the route cannot be resolved.
//!
//! Both walk the same resolution chain in [`resolve`]. Naming conventions
//! ([`naming`]), reflection lookup ([`reflect`]) and overload selection
//! ([`select`]) are injected traits, so hosts plug in their own type
//! system; the stock implementations cover the common conventions and the
//! test fixtures.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────────┐   ┌────────────────────┐
//! │ host analyzer│──►│ CommandBusCallCheck │──►│     Resolver       │
//! │  (call site) │──►│  HandleReturnType   │──►│ naming + reflection│
//! └──────────────┘   └─────────────────────┘   └────────────────────┘
//! ```
//!
//! Everything is read-only and synchronous: resolution is a pure function
//! of the command type name, the naming strategies, and the reflection
//! snapshot, so the host may run call sites in parallel without locks.

pub mod naming;
pub mod reflect;
pub mod resolve;
pub mod return_type;
pub mod rule;
pub mod scope;
pub mod select;
pub mod ty;

pub use naming::{
    HandleCommandNameMethodNaming, HandleMethodNaming, HandlerNamingStrategy, InvokeMethodNaming,
    MethodNamingStrategy, SuffixedHandlerNaming,
};
pub use reflect::{
    ClassDescriptor, ClassRegistry, MethodDescriptor, OverloadVariant, ParameterDescriptor,
    ReflectionProvider,
};
pub use resolve::{ResolutionFailure, ResolutionOutcome, ResolvedDispatch, Resolver};
pub use return_type::HandleReturnType;
pub use rule::{CommandBusCallCheck, Diagnostic};
pub use scope::InferenceScope;
pub use select::{AcceptanceSelector, OverloadSelector};
pub use ty::{Acceptance, ScalarTy, Type};
