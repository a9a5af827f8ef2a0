use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parsed view of a kubeconfig file.
///
/// Only the fields the prompt cares about are modeled; everything else in
/// the document is ignored. Missing fields default to empty so a partial
/// config still parses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KubeConfig {
    #[serde(default)]
    pub contexts: Vec<KubeContext>,
    #[serde(default, rename = "current-context")]
    pub current_context: String,
}

/// A named entry of the top-level `contexts` sequence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KubeContext {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub context: KubeContextDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KubeContextDetails {
    #[serde(default)]
    pub cluster: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub user: String,
}

impl KubeConfig {
    /// Cluster and namespace of the context named by `current-context`.
    /// Empty strings when no context matches.
    pub fn current_cluster_namespace(&self) -> (String, String) {
        for context in &self.contexts {
            if context.name == self.current_context {
                return (
                    context.context.cluster.clone(),
                    context.context.namespace.clone(),
                );
            }
        }
        (String::new(), String::new())
    }
}

/// Candidate kubeconfig locations: every entry of the `KUBECONFIG` value
/// (colon separated, empty entries dropped), then `<home>/.kube/config`
/// appended last. The environment lookup itself happens at the call site
/// so this stays deterministic under test.
pub fn candidate_paths(kubeconfig_env: Option<&str>, home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = kubeconfig_env
        .into_iter()
        .flat_map(|value| value.split(':'))
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect();

    if let Some(home) = home {
        paths.push(home.join(".kube").join("config"));
    }
    paths
}

fn read_kubeconfig(path: &Path) -> Result<KubeConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config =
        serde_yaml::from_str(&content).with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}

/// The first candidate that both reads and parses wins. When none does,
/// the zero-valued config is returned and the caller shows nothing.
pub fn load(candidates: &[PathBuf]) -> KubeConfig {
    for path in candidates {
        match read_kubeconfig(path) {
            Ok(config) => return config,
            Err(err) => debug!("skipping kubeconfig candidate: {:#}", err),
        }
    }
    KubeConfig::default()
}
