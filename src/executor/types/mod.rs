//! Type definitions for the executor
//!
//! This module contains the core types shared across the runtime:
//! - AST nodes produced by the parser (Script, Directive, Arg, Expr)
//! - Runtime values (Val, ProviderRef)

pub mod ast;
pub mod values;

// Re-export all types for convenient access
pub use ast::{Arg, CallExpr, Directive, Expr, Script};
pub use values::{ProviderAttrs, ProviderRef, Val};
