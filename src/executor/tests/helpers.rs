//! Test helpers for executor tests
//!
//! Common utilities for parsing scripts and running the engine.

use crate::executor::{Engine, ExecError, ProviderRef, RunReport, Val};
use crate::parser::parse_script;
use std::collections::HashMap;

/// Parse script source, serialize/deserialize, and run it
///
/// The round-trip through serde mirrors how scripts travel in practice
/// and keeps the AST serialization honest.
pub fn parse_and_execute(source: &str) -> Result<RunReport, ExecError> {
    let script = parse_script(source).expect("Parse script failed");
    let json = serde_json::to_string(&script).expect("Script serialization failed");
    let script = serde_json::from_str(&json).expect("Script deserialization failed");
    Engine::new().execute(&script)
}

/// Build a provider object with the given tag and optional kubeconfig
pub fn provider(tag: &str, kubeconfig: Option<Val>) -> ProviderRef {
    let mut attrs = HashMap::new();
    if let Some(val) = kubeconfig {
        attrs.insert("kubeconfig".to_string(), val);
    }
    ProviderRef::new(tag, attrs)
}
