//! Builtin functions available to flare scripts
//!
//! Every builtin follows the same calling convention: evaluated
//! arguments, the run's execution context, and the evidence outbox.
//! The registry is populated once at startup and looked up by the
//! engine by directive name.

pub mod capture;
pub mod kube_config;
pub mod provider;

use crate::executor::args::Args;
use crate::executor::context::ExecutionContext;
use crate::executor::errors::ExecError;
use crate::executor::evidence::Evidence;
use crate::executor::types::Val;
use std::collections::HashMap;

/// Well-known builtin names
pub mod identifiers {
    pub const KUBE_CONFIG: &str = "kube_config";
    pub const CAPV_PROVIDER: &str = "capv_provider";
    pub const CAPTURE: &str = "capture";
    pub const KUBECTL: &str = "kubectl";
}

/* ===================== Builtin Function Type ===================== */

/// Uniform builtin signature
pub type BuiltinFn =
    fn(&Args, &mut ExecutionContext, &mut Evidence) -> Result<Val, ExecError>;

/* ===================== Registry ===================== */

/// Registry of all builtin functions, keyed by directive name
pub struct StdlibRegistry {
    builtins: HashMap<&'static str, BuiltinFn>,
}

impl StdlibRegistry {
    pub fn new() -> Self {
        let mut builtins: HashMap<&'static str, BuiltinFn> = HashMap::new();
        builtins.insert(identifiers::KUBE_CONFIG, kube_config::kube_config_fn);
        builtins.insert(identifiers::CAPV_PROVIDER, provider::capv_provider_fn);
        builtins.insert(identifiers::CAPTURE, capture::capture_fn);
        builtins.insert(identifiers::KUBECTL, capture::kubectl_fn);
        StdlibRegistry { builtins }
    }

    /// Implementation registered under `name`, if any
    pub fn lookup(&self, name: &str) -> Option<BuiltinFn> {
        self.builtins.get(name).copied()
    }
}

impl Default for StdlibRegistry {
    fn default() -> Self {
        Self::new()
    }
}
