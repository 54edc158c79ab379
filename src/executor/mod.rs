//! Script execution runtime
//!
//! The engine walks a parsed script directive by directive, dispatching
//! each through the builtin registry. Builtins share one mutable
//! execution context per run; the `kube_config` resolver uses it to make
//! the resolved configuration available as an implicit default for later
//! directives that omit one.

pub mod args;
pub mod context;
pub mod engine;
pub mod errors;
pub mod evidence;
pub mod stdlib;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use args::Args;
pub use context::ExecutionContext;
pub use engine::{Engine, RunReport};
pub use errors::ExecError;
pub use evidence::{Evidence, EvidenceFile};
pub use types::{Directive, ProviderAttrs, ProviderRef, Script, Val};
