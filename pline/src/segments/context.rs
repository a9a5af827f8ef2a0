use crate::kubeconfig;
use chrono::{DateTime, Local};
use pline_types::Theme;
use std::env;
use std::path::PathBuf;

/// Per-draw inputs for the segment builders.
///
/// Environment lookups (working directory, `KUBECONFIG`, platform home)
/// are resolved here once per draw so the builders themselves stay
/// deterministic under test.
#[derive(Debug, Clone)]
pub struct SegmentContext {
    /// None when the working directory could not be obtained; the kube
    /// builder renders nothing in that case.
    pub current_dir: Option<PathBuf>,
    pub kubeconfig_candidates: Vec<PathBuf>,
    pub shorten_gke_names: bool,
    pub theme: Theme,
    pub now: DateTime<Local>,
}

impl SegmentContext {
    pub fn from_env(shorten_gke_names: bool) -> Self {
        let current_dir = match env::current_dir() {
            Ok(dir) => Some(dir),
            Err(err) => {
                eprintln!("failed to check cwd: {err}");
                None
            }
        };

        let kubeconfig_env = env::var("KUBECONFIG").ok();
        let kubeconfig_candidates = kubeconfig::candidate_paths(
            kubeconfig_env.as_deref(),
            dirs::home_dir().as_deref(),
        );

        SegmentContext {
            current_dir,
            kubeconfig_candidates,
            shorten_gke_names,
            theme: Theme::default(),
            now: Local::now(),
        }
    }
}
