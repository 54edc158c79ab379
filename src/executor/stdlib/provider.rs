//! Provider constructor builtins
//!
//! A provider object stands in for a cluster-lifecycle-management
//! integration; scripts build one and hand it to `kube_config`. Only the
//! Cluster API vSphere provider is recognized today.

use crate::executor::args::Args;
use crate::executor::context::ExecutionContext;
use crate::executor::errors::ExecError;
use crate::executor::evidence::Evidence;
use crate::executor::stdlib::identifiers;
use crate::executor::types::{ProviderRef, Val};
use std::collections::HashMap;

/// `capv_provider(kubeconfig="...", ...)` — build a CAPV provider object
///
/// Keyword-only; attributes are carried opaquely and read back by the
/// resolver through the provider capability interface.
pub fn capv_provider_fn(
    args: &Args,
    _ctx: &mut ExecutionContext,
    _evidence: &mut Evidence,
) -> Result<Val, ExecError> {
    if !args.positional.is_empty() {
        return Err(ExecError::invalid_args(
            identifiers::CAPV_PROVIDER,
            "takes keyword arguments only",
        ));
    }

    let mut attrs: HashMap<String, Val> = HashMap::new();
    for (name, val) in &args.keyword {
        if attrs.insert(name.clone(), val.clone()).is_some() {
            return Err(ExecError::invalid_args(
                identifiers::CAPV_PROVIDER,
                format!("got multiple values for argument: {}", name),
            ));
        }
    }

    Ok(Val::Provider(ProviderRef::new(
        identifiers::CAPV_PROVIDER,
        attrs,
    )))
}
