//! Command-capture actions
//!
//! `capture` runs a command on the local machine and files its combined
//! output as evidence. `kubectl` does the same against the cluster,
//! resolving the kubeconfig through the two-tier lookup (call-local
//! `kube_config=` override first, then the run-wide default).

use crate::executor::args::Args;
use crate::executor::context::ExecutionContext;
use crate::executor::errors::ExecError;
use crate::executor::evidence::Evidence;
use crate::executor::stdlib::{identifiers, kube_config};
use crate::executor::types::Val;
use std::process::Command;
use tracing::{debug, warn};

/// `capture(cmd="...", file_name?="...")`
pub fn capture_fn(
    args: &Args,
    _ctx: &mut ExecutionContext,
    evidence: &mut Evidence,
) -> Result<Val, ExecError> {
    let view = args.unpack(identifiers::CAPTURE, &["cmd", "file_name?"])?;
    let cmd = view.req_str("cmd")?;
    let file_name = match view.opt_str("file_name")? {
        Some(name) => name.to_string(),
        None => evidence_name(cmd),
    };

    let output = run_shell(cmd)?;
    evidence.push_file(file_name.clone(), output);

    Ok(Val::record("file", Val::Str(file_name)))
}

/// `kubectl(args="...", kube_config?=<resolved config>)`
pub fn kubectl_fn(
    args: &Args,
    ctx: &mut ExecutionContext,
    evidence: &mut Evidence,
) -> Result<Val, ExecError> {
    let view = args.unpack(identifiers::KUBECTL, &["args", "kube_config?"])?;
    let kubectl_args = view.req_str("args")?;

    let config_path = kube_config::effective_kube_config(view.get("kube_config"), ctx)?;

    let cmd = format!("kubectl --kubeconfig {} {}", config_path, kubectl_args);
    let file_name = evidence_name(&format!("kubectl {}", kubectl_args));

    let output = run_shell(&cmd)?;
    evidence.push_file(file_name.clone(), output);

    Ok(Val::record("file", Val::Str(file_name)))
}

/// Run a command through the platform shell, returning stdout + stderr
///
/// A non-zero exit status is still evidence worth keeping (the machine
/// under diagnosis may well be unhealthy); only a spawn failure is an
/// error.
fn run_shell(cmd: &str) -> Result<Vec<u8>, ExecError> {
    debug!(cmd, "running capture command");

    let output = Command::new("/bin/sh")
        .arg("-c")
        .arg(cmd)
        .output()
        .map_err(|source| ExecError::CommandFailed {
            cmd: cmd.to_string(),
            source,
        })?;

    if !output.status.success() {
        warn!(cmd, status = %output.status, "capture command exited non-zero");
    }

    let mut combined = output.stdout;
    combined.extend_from_slice(&output.stderr);
    Ok(combined)
}

/// Derive an archive file name from a command line
///
/// `df -h` -> `df_-h.txt`. Long command lines are truncated so names
/// stay usable.
fn evidence_name(cmd: &str) -> String {
    let mut name: String = cmd
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
        .collect();
    name.truncate(64);
    format!("{}.txt", name)
}

#[cfg(test)]
mod tests {
    use super::evidence_name;

    #[test]
    fn test_evidence_name_replaces_specials() {
        assert_eq!(evidence_name("df -h"), "df_-h.txt");
        assert_eq!(evidence_name("cat /proc/meminfo"), "cat__proc_meminfo.txt");
    }

    #[test]
    fn test_evidence_name_truncates() {
        let long = "a".repeat(200);
        let name = evidence_name(&long);
        assert_eq!(name.len(), 64 + 4);
    }
}
