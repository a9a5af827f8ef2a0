use pline_types::Segment;

pub mod context;
pub mod kube;
pub mod time;


use context::SegmentContext;

/// One producer of prompt segments.
///
/// Builders are stateless; everything they need for a draw arrives through
/// the context, so repeated calls with the same context render the same
/// output.
pub trait SegmentBuilder: Send + Sync + std::fmt::Debug {
    /// Return the name of the builder (e.g., "kube", "time")
    fn name(&self) -> &str;

    /// Zero or more segments in display order. An empty vector means the
    /// builder has nothing to show for this draw.
    fn build(&self, context: &SegmentContext) -> Vec<Segment>;
}

/// The stock builders in display order.
pub fn default_builders() -> Vec<Box<dyn SegmentBuilder>> {
    vec![
        Box::new(kube::KubeSegmentBuilder::new()),
        Box::new(time::TimeSegmentBuilder::new()),
    ]
}
