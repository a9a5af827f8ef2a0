pub mod kubeconfig;
pub mod scan;
pub mod segments;

pub use segments::context::SegmentContext;
