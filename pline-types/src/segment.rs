use crossterm::style::{Color, Stylize};

/// One colored, labeled unit of prompt output.
///
/// Segments are built fresh on every prompt draw and handed to the host's
/// segment list; they are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Stable identifier, e.g. "kube-cluster".
    pub name: &'static str,
    pub content: String,
    /// ANSI-256 color value.
    pub foreground: u8,
    /// ANSI-256 color value.
    pub background: u8,
}

impl Segment {
    pub fn new(
        name: &'static str,
        content: impl Into<String>,
        foreground: u8,
        background: u8,
    ) -> Self {
        Segment {
            name,
            content: content.into(),
            foreground,
            background,
        }
    }

    /// Render the content with the segment's color pair applied.
    pub fn paint(&self) -> String {
        self.content
            .as_str()
            .with(Color::AnsiValue(self.foreground))
            .on(Color::AnsiValue(self.background))
            .to_string()
    }
}
