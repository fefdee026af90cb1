/// A contiguous run of input lines that maps to one HTML block.
///
/// Text is stored stripped but not yet inline-formatted; the renderer runs
/// the inline pass on list items and paragraph lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Heading {
        level: u8,
        content: String,
    },
    /// One or more consecutive `-` lines, markers removed.
    List {
        items: Vec<String>,
    },
    /// Consecutive plain lines. An empty entry renders as a line break.
    Paragraph {
        lines: Vec<String>,
    },
    /// A line emitted verbatim: an over-long `#` run, or any non-block line
    /// when paragraphs are disabled.
    Plain {
        text: String,
    },
}
