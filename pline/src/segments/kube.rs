use crate::kubeconfig;
use crate::scan::{ScanOutcome, contains_dir};
use crate::segments::SegmentBuilder;
use crate::segments::context::SegmentContext;
use pline_types::Segment;
use tracing::debug;

/// Marker directory that opts a project tree into the kube segment.
const INFRA_MARKER: &str = "_infra";
const KUBE_ICON: &str = "⎈";
const GKE_PREFIX: &str = "gke";

/// Kubernetes context indicator: cluster and namespace of the active
/// kubeconfig context, shown only inside a tree that contains the
/// `_infra` marker directory.
#[derive(Debug, Default)]
pub struct KubeSegmentBuilder;

impl KubeSegmentBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl SegmentBuilder for KubeSegmentBuilder {
    fn name(&self) -> &str {
        "kube"
    }

    fn build(&self, context: &SegmentContext) -> Vec<Segment> {
        let Some(current_dir) = context.current_dir.as_deref() else {
            return Vec::new();
        };

        match contains_dir(current_dir, INFRA_MARKER) {
            ScanOutcome::Found => {}
            ScanOutcome::NotFound => return Vec::new(),
            ScanOutcome::Denied(dir) => {
                debug!("marker scan stopped at unlistable {}", dir.display());
                return Vec::new();
            }
        }

        let config = kubeconfig::load(&context.kubeconfig_candidates);
        let (cluster, namespace) = config.current_cluster_namespace();
        let cluster = if context.shorten_gke_names {
            shorten_gke_name(cluster)
        } else {
            cluster
        };

        let mut segments = Vec::new();

        // Only draw the icon once, on whichever part renders first.
        let mut icon_drawn = false;
        if !cluster.is_empty() {
            icon_drawn = true;
            segments.push(Segment::new(
                "kube-cluster",
                format!("{KUBE_ICON} {cluster}"),
                context.theme.kube_cluster_fg,
                context.theme.kube_cluster_bg,
            ));
        }

        if !namespace.is_empty() {
            let content = if icon_drawn {
                namespace
            } else {
                format!("{KUBE_ICON} {namespace}")
            };
            segments.push(Segment::new(
                "kube-namespace",
                content,
                context.theme.kube_namespace_fg,
                context.theme.kube_namespace_bg,
            ));
        }

        segments
    }
}

/// GKE cluster ids look like `gke_<project>_<zone>_<name>`; keep only the
/// part after the third underscore so the prompt reads `name`. Ids with
/// fewer components are left untouched.
fn shorten_gke_name(cluster: String) -> String {
    if !cluster.starts_with(GKE_PREFIX) {
        return cluster;
    }
    let parts: Vec<&str> = cluster.split('_').collect();
    if parts.len() > 3 {
        parts[3..].join("_")
    } else {
        cluster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_gke_name() {
        assert_eq!(
            shorten_gke_name("gke_myproject_us-central1_cluster-01".to_string()),
            "cluster-01"
        );
        assert_eq!(
            shorten_gke_name("gke_myproject_us-central1_team_prod".to_string()),
            "team_prod"
        );
        // Too few components to strip.
        assert_eq!(shorten_gke_name("gke_a_b".to_string()), "gke_a_b");
        // Not a GKE id.
        assert_eq!(
            shorten_gke_name("prod_cluster_eu_one".to_string()),
            "prod_cluster_eu_one"
        );
    }
}
