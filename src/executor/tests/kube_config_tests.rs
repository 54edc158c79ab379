//! Tests for the kube_config resolver
//!
//! Covers source mutual exclusivity, provider extraction, the run-wide
//! default, and the two-tier effective lookup.

use super::helpers::{parse_and_execute, provider};
use crate::executor::stdlib::identifiers;
use crate::executor::stdlib::kube_config::{effective_kube_config, resolve_config};
use crate::executor::{ExecError, ExecutionContext, ProviderRef, Val};
use maplit::hashmap;

/* ===================== Source Reconciliation ===================== */

#[test]
fn test_both_sources_is_ambiguous() {
    let mut ctx = ExecutionContext::new();
    let prov = provider("capv_provider", Some(Val::Str("/tmp/a.yaml".into())));

    let err = resolve_config(Some("/tmp/b.yaml"), Some(&prov), &mut ctx).unwrap_err();
    assert!(matches!(err, ExecError::AmbiguousSource));
}

#[test]
fn test_neither_source_is_missing() {
    let mut ctx = ExecutionContext::new();
    let err = resolve_config(None, None, &mut ctx).unwrap_err();
    assert!(matches!(err, ExecError::MissingSource));
}

#[test]
fn test_empty_path_counts_as_absent() {
    let mut ctx = ExecutionContext::new();
    let prov = provider("capv_provider", Some(Val::Str("/tmp/a.yaml".into())));

    // empty string + provider resolves through the provider
    let resolved = resolve_config(Some(""), Some(&prov), &mut ctx).unwrap();
    assert_eq!(resolved.field("path").unwrap().as_str(), Some("/tmp/a.yaml"));

    // empty string alone is a missing source
    let err = resolve_config(Some(""), None, &mut ctx).unwrap_err();
    assert!(matches!(err, ExecError::MissingSource));
}

/* ===================== Provider Extraction ===================== */

#[test]
fn test_provider_happy_path_registers_default() {
    let mut ctx = ExecutionContext::new();
    let prov = provider("capv_provider", Some(Val::Str("/tmp/a.yaml".into())));

    let resolved = resolve_config(None, Some(&prov), &mut ctx).unwrap();
    assert_eq!(resolved.field("path").unwrap().as_str(), Some("/tmp/a.yaml"));

    // registered as the run default
    let default = ctx.get(identifiers::KUBE_CONFIG).unwrap();
    assert_eq!(default, &resolved);
}

#[test]
fn test_unrecognized_provider_tag() {
    let mut ctx = ExecutionContext::new();
    let prov = provider("other", Some(Val::Str("/tmp/a.yaml".into())));

    let err = resolve_config(None, Some(&prov), &mut ctx).unwrap_err();
    match err {
        ExecError::UnsupportedProvider(tag) => assert_eq!(tag, "other"),
        other => panic!("expected UnsupportedProvider, got {:?}", other),
    }
}

#[test]
fn test_provider_without_tag_is_accepted() {
    // The tag check only fires when a tag is present
    let mut ctx = ExecutionContext::new();
    let prov = ProviderRef {
        constructor: None,
        attrs: hashmap! {
            "kubeconfig".to_string() => Val::Str("/tmp/a.yaml".into()),
        },
    };

    let resolved = resolve_config(None, Some(&prov), &mut ctx).unwrap();
    assert_eq!(resolved.field("path").unwrap().as_str(), Some("/tmp/a.yaml"));
}

#[test]
fn test_provider_missing_kubeconfig_attribute() {
    let mut ctx = ExecutionContext::new();
    let prov = provider("capv_provider", None);

    let err = resolve_config(None, Some(&prov), &mut ctx).unwrap_err();
    match err {
        ExecError::AttributeNotFound(name) => assert_eq!(name, "kubeconfig"),
        other => panic!("expected AttributeNotFound, got {:?}", other),
    }
}

#[test]
fn test_provider_kubeconfig_wrong_type() {
    let mut ctx = ExecutionContext::new();
    let prov = provider("capv_provider", Some(Val::Num(42.0)));

    let err = resolve_config(None, Some(&prov), &mut ctx).unwrap_err();
    assert!(matches!(err, ExecError::InvalidAttributeType(_)));
}

#[test]
fn test_explicit_path_used_verbatim() {
    // No existence check, no normalization
    let mut ctx = ExecutionContext::new();
    let resolved = resolve_config(Some("/definitely/not/there.yaml"), None, &mut ctx).unwrap();
    assert_eq!(
        resolved.field("path").unwrap().as_str(),
        Some("/definitely/not/there.yaml")
    );
}

/* ===================== Effective Lookup ===================== */

#[test]
fn test_default_propagation() {
    let mut ctx = ExecutionContext::new();
    resolve_config(Some("/tmp/mgmt.yaml"), None, &mut ctx).unwrap();

    // a later consumer with no override sees the registered default
    let path = effective_kube_config(None, &ctx).unwrap();
    assert_eq!(path, "/tmp/mgmt.yaml");
}

#[test]
fn test_override_takes_precedence_over_default() {
    let mut ctx = ExecutionContext::new();
    resolve_config(Some("/tmp/default.yaml"), None, &mut ctx).unwrap();

    let inline = Val::record("path", Val::Str("/tmp/override.yaml".into()));
    let path = effective_kube_config(Some(&inline), &ctx).unwrap();
    assert_eq!(path, "/tmp/override.yaml");
}

#[test]
fn test_malformed_override_falls_through_to_default() {
    // Preserved leniency: a wrong-shaped override is ignored, not fatal
    let mut ctx = ExecutionContext::new();
    resolve_config(Some("/tmp/default.yaml"), None, &mut ctx).unwrap();

    let bogus = Val::Str("/not/a/record".into());
    let path = effective_kube_config(Some(&bogus), &ctx).unwrap();
    assert_eq!(path, "/tmp/default.yaml");
}

#[test]
fn test_no_configuration_available() {
    let ctx = ExecutionContext::new();
    let err = effective_kube_config(None, &ctx).unwrap_err();
    assert!(matches!(err, ExecError::NoConfigurationAvailable));
}

#[test]
fn test_malformed_default_is_hard_error() {
    let mut ctx = ExecutionContext::new();
    ctx.set(identifiers::KUBE_CONFIG, Val::Str("/not/a/record".into()));

    let err = effective_kube_config(None, &ctx).unwrap_err();
    assert!(matches!(err, ExecError::InvalidDefaultConfiguration));
}

#[test]
fn test_resolution_overwrites_prior_default() {
    let mut ctx = ExecutionContext::new();
    resolve_config(Some("/tmp/first.yaml"), None, &mut ctx).unwrap();
    resolve_config(Some("/tmp/second.yaml"), None, &mut ctx).unwrap();

    let path = effective_kube_config(None, &ctx).unwrap();
    assert_eq!(path, "/tmp/second.yaml");
}

/* ===================== Script-level Behavior ===================== */

#[test]
fn test_script_kube_config_with_provider() {
    let source = r#"
kube_config(capi_provider=capv_provider(kubeconfig="/tmp/a.yaml"))
"#;
    let report = parse_and_execute(source).unwrap();
    assert_eq!(report.executed, vec!["kube_config"]);
}

#[test]
fn test_script_kube_config_both_sources_fails() {
    let source = r#"kube_config(path="/a", capi_provider=capv_provider(kubeconfig="/b"))"#;
    let err = parse_and_execute(source).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("kube_config"));
    assert!(msg.contains("line 1"));
    assert!(matches!(
        err,
        ExecError::Directive { source, .. } if matches!(*source, ExecError::AmbiguousSource)
    ));
}

#[test]
fn test_script_kube_config_rejects_unknown_keyword() {
    let err = parse_and_execute(r#"kube_config(bogus="/a")"#).unwrap_err();
    assert!(matches!(
        err,
        ExecError::Directive { source, .. }
            if matches!(*source, ExecError::InvalidArguments { .. })
    ));
}
