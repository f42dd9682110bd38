//! Naming strategies: how a command type name maps to a handler class name
//! and a handling method name.
//!
//! Both strategies are pure string functions with no reflection dependency,
//! so they stay trivially unit-testable and swappable per project
//! convention. The method strategy receives the *resolved* handler class
//! name rather than a descriptor, which keeps it independent of any
//! reflection detail.

/// Maps a command class name to the class name of its handler.
pub trait HandlerNamingStrategy {
    fn handler_class_for(&self, command_class: &str) -> String;
}

/// Maps a command class name (plus the resolved handler class name) to the
/// name of the method that handles it.
pub trait MethodNamingStrategy {
    fn method_for(&self, command_class: &str, handler_class: &str) -> String;
}

/// The short (namespace-stripped) form of a fully-qualified class name.
///
/// Both `\`-separated and `::`-separated namespace conventions are
/// recognized; a name with no separator is returned unchanged.
pub fn short_name(class_name: &str) -> &str {
    let after_backslash = class_name.rsplit('\\').next().unwrap_or(class_name);
    after_backslash.rsplit("::").next().unwrap_or(after_backslash)
}

/// Handler naming by suffix: `AddTask` handles in `AddTaskHandler`.
///
/// The stock convention; the suffix is configurable for projects that
/// prefer e.g. `AddTaskCommandHandler`.
#[derive(Debug, Clone)]
pub struct SuffixedHandlerNaming {
    suffix: String,
}

impl SuffixedHandlerNaming {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self { suffix: suffix.into() }
    }
}

impl Default for SuffixedHandlerNaming {
    fn default() -> Self {
        Self::new("Handler")
    }
}

impl HandlerNamingStrategy for SuffixedHandlerNaming {
    fn handler_class_for(&self, command_class: &str) -> String {
        format!("{command_class}{}", self.suffix)
    }
}

/// Every command is handled by a method literally named `handle`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleMethodNaming;

impl MethodNamingStrategy for HandleMethodNaming {
    fn method_for(&self, _command_class: &str, _handler_class: &str) -> String {
        "handle".to_string()
    }
}

/// Per-command method names: `AddTask` is handled by `handleAddTask`.
///
/// Used by handlers that process several command kinds on one class.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleCommandNameMethodNaming;

impl MethodNamingStrategy for HandleCommandNameMethodNaming {
    fn method_for(&self, command_class: &str, _handler_class: &str) -> String {
        format!("handle{}", short_name(command_class))
    }
}

/// Handlers are plain callables: the method is named `invoke`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvokeMethodNaming;

impl MethodNamingStrategy for InvokeMethodNaming {
    fn method_for(&self, _command_class: &str, _handler_class: &str) -> String {
        "invoke".to_string()
    }
}
