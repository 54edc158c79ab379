//! kube_config builtin — the configuration resolver
//!
//! `kube_config(path="...")` or
//! `kube_config(capi_provider=capv_provider(kubeconfig="..."))`
//!
//! Resolves which kubeconfig file the run should use from exactly one of
//! the two sources, wraps it into a record with a `path` field, and
//! registers that record in the execution context as the run-wide
//! default. Later directives that name no configuration at all pick the
//! default up through `effective_kube_config`.

use crate::executor::args::Args;
use crate::executor::context::ExecutionContext;
use crate::executor::errors::ExecError;
use crate::executor::evidence::Evidence;
use crate::executor::stdlib::identifiers;
use crate::executor::types::{ProviderAttrs, Val};

/// Name of the path-bearing attribute on provider objects
pub const KUBECONFIG_ATTR: &str = "kubeconfig";

/// Registry entry point for the `kube_config` directive
pub fn kube_config_fn(
    args: &Args,
    ctx: &mut ExecutionContext,
    _evidence: &mut Evidence,
) -> Result<Val, ExecError> {
    let view = args.unpack(identifiers::KUBE_CONFIG, &["path?", "capi_provider?"])?;
    let path = view.opt_str("path")?;
    let provider = view.opt_provider("capi_provider")?;

    resolve_config(path, provider.map(|p| p as &dyn ProviderAttrs), ctx)
}

/// Resolve a configuration source and register it as the run default
///
/// Exactly one of `explicit_path` / `provider` must be populated (an
/// empty path string counts as absent). The explicit path is taken
/// verbatim; existence is the consumer's problem, not resolution's.
pub fn resolve_config(
    explicit_path: Option<&str>,
    provider: Option<&dyn ProviderAttrs>,
    ctx: &mut ExecutionContext,
) -> Result<Val, ExecError> {
    let explicit = explicit_path.filter(|p| !p.is_empty());

    let path = match (explicit, provider) {
        (Some(_), Some(_)) => return Err(ExecError::AmbiguousSource),
        (None, None) => return Err(ExecError::MissingSource),
        (Some(p), None) => p.to_string(),
        (None, Some(prov)) => provider_kubeconfig(prov)?,
    };

    let resolved = Val::record("path", Val::Str(path));
    ctx.set(identifiers::KUBE_CONFIG, resolved.clone());
    Ok(resolved)
}

/// Extract the kubeconfig path from a provider object
///
/// The type tag is only checked when present; an unrecognized tag is
/// rejected before the attribute is trusted.
fn provider_kubeconfig(provider: &dyn ProviderAttrs) -> Result<String, ExecError> {
    if let Some(tag) = provider.type_tag() {
        if tag != identifiers::CAPV_PROVIDER {
            return Err(ExecError::UnsupportedProvider(tag.to_string()));
        }
    }

    let val = provider
        .attr(KUBECONFIG_ATTR)
        .ok_or_else(|| ExecError::AttributeNotFound(KUBECONFIG_ATTR.to_string()))?;

    match val.as_str() {
        Some(path) => Ok(path.to_string()),
        None => Err(ExecError::InvalidAttributeType(KUBECONFIG_ATTR.to_string())),
    }
}

/// Effective kubeconfig path for a consumer directive
///
/// Checks a call-local override first, then the run-wide default. An
/// override of the wrong shape falls through to the default rather than
/// failing; a malformed default is a hard error because only
/// `resolve_config` writes it.
pub fn effective_kube_config(
    explicit_override: Option<&Val>,
    ctx: &ExecutionContext,
) -> Result<String, ExecError> {
    if let Some(val) = explicit_override {
        if let Some(path) = path_field(val) {
            return Ok(path.to_string());
        }
    }

    let default = ctx
        .get(identifiers::KUBE_CONFIG)
        .ok_or(ExecError::NoConfigurationAvailable)?;

    path_field(default)
        .map(str::to_string)
        .ok_or(ExecError::InvalidDefaultConfiguration)
}

fn path_field(val: &Val) -> Option<&str> {
    val.field("path")?.as_str()
}
