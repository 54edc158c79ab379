//! Builtin invocation protocol
//!
//! Every builtin receives the same shape: positional values, keyword
//! values, and the run's execution context. `Args::unpack` is the one
//! place call shapes are validated; builtins then read typed values off
//! the returned view.

use crate::executor::errors::ExecError;
use crate::executor::types::{ProviderRef, Val};
use std::collections::HashMap;

/// Evaluated arguments for one builtin invocation
#[derive(Debug, Clone, Default)]
pub struct Args {
    pub positional: Vec<Val>,
    pub keyword: Vec<(String, Val)>,
}

impl Args {
    pub fn new(positional: Vec<Val>, keyword: Vec<(String, Val)>) -> Self {
        Args {
            positional,
            keyword,
        }
    }

    /// Validate the call shape against a parameter list
    ///
    /// `names` lists the accepted parameters in declaration order; a
    /// trailing `?` marks a parameter optional. Positional values fill
    /// parameters left to right. Rejected with `InvalidArguments`:
    /// unknown keywords, duplicate bindings (keyword repeated, or keyword
    /// colliding with a positional), surplus positionals, and missing
    /// required parameters.
    pub fn unpack<'a>(
        &'a self,
        builtin: &'static str,
        names: &[&str],
    ) -> Result<Unpacked<'a>, ExecError> {
        let specs: Vec<(&str, bool)> = names
            .iter()
            .map(|n| match n.strip_suffix('?') {
                Some(base) => (base, false),
                None => (*n, true),
            })
            .collect();

        if self.positional.len() > specs.len() {
            return Err(ExecError::invalid_args(
                builtin,
                format!(
                    "expected at most {} positional arguments, got {}",
                    specs.len(),
                    self.positional.len()
                ),
            ));
        }

        let mut vals: HashMap<String, &Val> = HashMap::new();
        for (val, (name, _)) in self.positional.iter().zip(specs.iter()) {
            vals.insert(name.to_string(), val);
        }

        for (name, val) in &self.keyword {
            if !specs.iter().any(|(n, _)| n == name) {
                return Err(ExecError::invalid_args(
                    builtin,
                    format!("unexpected keyword argument: {}", name),
                ));
            }
            if vals.insert(name.clone(), val).is_some() {
                return Err(ExecError::invalid_args(
                    builtin,
                    format!("got multiple values for argument: {}", name),
                ));
            }
        }

        for (name, required) in &specs {
            if *required && !vals.contains_key(*name) {
                return Err(ExecError::invalid_args(
                    builtin,
                    format!("missing required argument: {}", name),
                ));
            }
        }

        Ok(Unpacked { builtin, vals })
    }
}

/// Validated view over one invocation's arguments
#[derive(Debug)]
pub struct Unpacked<'a> {
    builtin: &'static str,
    vals: HashMap<String, &'a Val>,
}

impl<'a> Unpacked<'a> {
    /// Raw value of a parameter, if supplied
    pub fn get(&self, name: &str) -> Option<&'a Val> {
        self.vals.get(name).copied()
    }

    /// String value of an optional parameter
    pub fn opt_str(&self, name: &str) -> Result<Option<&'a str>, ExecError> {
        match self.vals.get(name) {
            None => Ok(None),
            Some(v) => v.as_str().map(Some).ok_or_else(|| {
                ExecError::invalid_args(self.builtin, format!("{} must be a string", name))
            }),
        }
    }

    /// String value of a required parameter
    pub fn req_str(&self, name: &str) -> Result<&'a str, ExecError> {
        self.opt_str(name)?.ok_or_else(|| {
            ExecError::invalid_args(self.builtin, format!("missing required argument: {}", name))
        })
    }

    /// Provider value of an optional parameter
    pub fn opt_provider(&self, name: &str) -> Result<Option<&'a ProviderRef>, ExecError> {
        match self.vals.get(name) {
            None => Ok(None),
            Some(Val::Provider(p)) => Ok(Some(p)),
            Some(_) => Err(ExecError::invalid_args(
                self.builtin,
                format!("{} must be a provider object", name),
            )),
        }
    }
}
