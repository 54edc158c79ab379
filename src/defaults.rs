//! Well-known default values
//!
//! The embedded default script is what a run falls back to when no
//! script file exists. It only establishes the local kubeconfig as the
//! run default and performs no cluster-dependent actions, so it is
//! self-sufficient on any machine.

use std::path::PathBuf;

/// Default kubeconfig path: `<home>/.kube/config`
pub fn kubeconfig() -> String {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/root"))
        .join(".kube/config")
        .to_string_lossy()
        .into_owned()
}

/// Default script body used when no flare file is found
pub fn default_script() -> String {
    format!("kube_config(path=\"{}\")\n", kubeconfig())
}
