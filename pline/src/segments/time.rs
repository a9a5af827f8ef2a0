use crate::segments::SegmentBuilder;
use crate::segments::context::SegmentContext;
use pline_types::Segment;

/// Fixed `MM/DD HH:MM:SS` layout.
const TIME_LAYOUT: &str = "%m/%d %H:%M:%S";

/// Clock segment showing the instant the draw started.
#[derive(Debug, Default)]
pub struct TimeSegmentBuilder;

impl TimeSegmentBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl SegmentBuilder for TimeSegmentBuilder {
    fn name(&self) -> &str {
        "time"
    }

    fn build(&self, context: &SegmentContext) -> Vec<Segment> {
        vec![Segment::new(
            "time",
            context.now.format(TIME_LAYOUT).to_string(),
            context.theme.time_fg,
            context.theme.time_bg,
        )]
    }
}
