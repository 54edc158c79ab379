//! Abstract Syntax Tree node types
//!
//! A parsed flare script is an ordered sequence of directives. The tree is
//! immutable once built; the engine only reads it.

use serde::{Deserialize, Serialize};

/// A complete parsed script
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    /// Directives in declaration order
    pub directives: Vec<Directive>,
}

impl Script {
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

/// One step of a script: a named operation with its arguments
///
/// Example: `cfg = kube_config(path="/tmp/kubeconfig")` parses into a
/// directive named `kube_config` with binding `cfg` and one keyword arg.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directive {
    /// Name the result is bound to, if the statement was an assignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<String>,
    /// Builtin/action name
    pub name: String,
    /// Arguments in source order
    pub args: Vec<Arg>,
    /// Source line (1-indexed) for error reporting
    pub line: usize,
}

/// One argument: positional (`name` is None) or keyword
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arg {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: Expr,
}

/// Argument value expression
///
/// References and nested calls are resolved at execution time; literals
/// are carried as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", content = "v")]
pub enum Expr {
    Str(String),
    Num(f64),
    Bool(bool),
    /// Reference to an earlier binding
    Ref(String),
    /// Nested directive call used as a value
    Call(CallExpr),
}

/// A call appearing in value position, e.g. a provider constructor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallExpr {
    pub name: String,
    pub args: Vec<Arg>,
    pub line: usize,
}
