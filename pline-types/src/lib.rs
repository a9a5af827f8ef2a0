pub mod segment;
pub mod theme;

pub use segment::Segment;
pub use theme::Theme;
