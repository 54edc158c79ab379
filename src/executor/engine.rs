//! Execution engine
//!
//! Drives a parsed script to completion: one execution context per run,
//! directives dispatched strictly in declaration order, first error
//! aborts the run. Evaluation is single-threaded and synchronous, so
//! context reads and writes need no locking.

use crate::executor::args::Args;
use crate::executor::context::ExecutionContext;
use crate::executor::errors::ExecError;
use crate::executor::evidence::Evidence;
use crate::executor::stdlib::StdlibRegistry;
use crate::executor::types::{Arg, Expr, Script, Val};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Outcome of a successful run
#[derive(Debug)]
pub struct RunReport {
    /// Collected evidence, ready for the archive writer
    pub evidence: Evidence,
    /// Directive names in execution order
    pub executed: Vec<String>,
}

/// The directive-sequencing engine
pub struct Engine {
    registry: StdlibRegistry,
    cancel: Option<Arc<AtomicBool>>,
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            registry: StdlibRegistry::new(),
            cancel: None,
        }
    }

    /// Attach an external cancellation flag, checked between directives
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Run every directive in order; fail fast on the first error
    ///
    /// Errors are wrapped with the directive's name and line. Nothing is
    /// archived here: the caller gets the evidence back only when the
    /// whole run succeeded.
    pub fn execute(&self, script: &Script) -> Result<RunReport, ExecError> {
        let mut ctx = ExecutionContext::new();
        let mut evidence = Evidence::new();
        let mut bindings: HashMap<String, Val> = HashMap::new();
        let mut executed = Vec::with_capacity(script.len());

        for directive in &script.directives {
            if self.cancelled() {
                return Err(ExecError::Cancelled.in_directive(&directive.name, directive.line));
            }

            debug!(directive = %directive.name, line = directive.line, "executing directive");

            let result = self
                .invoke(
                    &directive.name,
                    &directive.args,
                    &bindings,
                    &mut ctx,
                    &mut evidence,
                )
                .map_err(|e| e.in_directive(&directive.name, directive.line))?;

            if let Some(name) = &directive.binding {
                bindings.insert(name.clone(), result);
            }
            executed.push(directive.name.clone());
        }

        Ok(RunReport { evidence, executed })
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }

    /// Dispatch one call (top-level directive or nested value call)
    fn invoke(
        &self,
        name: &str,
        args: &[Arg],
        bindings: &HashMap<String, Val>,
        ctx: &mut ExecutionContext,
        evidence: &mut Evidence,
    ) -> Result<Val, ExecError> {
        let builtin = self
            .registry
            .lookup(name)
            .ok_or_else(|| ExecError::UnknownDirective(name.to_string()))?;

        let call_args = self.eval_args(args, bindings, ctx, evidence)?;
        builtin(&call_args, ctx, evidence)
    }

    fn eval_args(
        &self,
        args: &[Arg],
        bindings: &HashMap<String, Val>,
        ctx: &mut ExecutionContext,
        evidence: &mut Evidence,
    ) -> Result<Args, ExecError> {
        let mut positional = Vec::new();
        let mut keyword = Vec::new();

        for arg in args {
            let val = self.eval_expr(&arg.value, bindings, ctx, evidence)?;
            match &arg.name {
                Some(name) => keyword.push((name.clone(), val)),
                None => positional.push(val),
            }
        }

        Ok(Args::new(positional, keyword))
    }

    fn eval_expr(
        &self,
        expr: &Expr,
        bindings: &HashMap<String, Val>,
        ctx: &mut ExecutionContext,
        evidence: &mut Evidence,
    ) -> Result<Val, ExecError> {
        match expr {
            Expr::Str(s) => Ok(Val::Str(s.clone())),
            Expr::Num(n) => Ok(Val::Num(*n)),
            Expr::Bool(b) => Ok(Val::Bool(*b)),
            Expr::Ref(name) => bindings
                .get(name)
                .cloned()
                .ok_or_else(|| ExecError::UndefinedReference(name.clone())),
            Expr::Call(call) => self.invoke(&call.name, &call.args, bindings, ctx, evidence),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
