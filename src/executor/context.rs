//! Run-scoped execution context
//!
//! The context is the only mutable state shared across builtin
//! invocations. It is created empty when a run starts, passed by
//! reference into every invocation, and dropped when the run ends;
//! no directive may retain it and no run shares one with another.

use crate::executor::types::Val;
use std::collections::HashMap;

/// Mutable key→value store keyed by builtin identity
///
/// Holds the last value a builtin registered as the run-wide default
/// (e.g. the resolved kube_config under `"kube_config"`). Writes
/// overwrite; reads never mutate.
#[derive(Debug, Default)]
pub struct ExecutionContext {
    entries: HashMap<String, Val>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        ExecutionContext {
            entries: HashMap::new(),
        }
    }

    /// Overwrite the value stored under `key`
    pub fn set(&mut self, key: &str, value: Val) {
        self.entries.insert(key.to_string(), value);
    }

    /// Last value set for `key` in this run, if any
    pub fn get(&self, key: &str) -> Option<&Val> {
        self.entries.get(key)
    }
}
