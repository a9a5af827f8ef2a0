/// ANSI-256 color pairs for each segment kind.
///
/// The host owns the palette; segment builders only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub kube_cluster_fg: u8,
    pub kube_cluster_bg: u8,
    pub kube_namespace_fg: u8,
    pub kube_namespace_bg: u8,
    pub time_fg: u8,
    pub time_bg: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            kube_cluster_fg: 117,
            kube_cluster_bg: 26,
            kube_namespace_fg: 170,
            kube_namespace_bg: 17,
            time_fg: 15,
            time_bg: 236,
        }
    }
}
