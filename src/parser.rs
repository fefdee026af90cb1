use tracing::debug;

use crate::config::{BlankLines, BlocksConfig};
use crate::segment::Segment;

/// Headings deeper than this degrade to plain lines.
const MAX_HEADING_LEVEL: usize = 6;

/// What a single stripped line looks like, before any block context is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    ListItem,
    Blank,
    Plain,
}

/// Classify a stripped line by its first character.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with('#') {
        LineKind::Heading
    } else if line.starts_with('-') {
        LineKind::ListItem
    } else if line.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Plain
    }
}

/// Parse markdown text into a list of segments
pub fn parse(markdown: &str, config: &BlocksConfig) -> Vec<Segment> {
    let mut state = ParseState::new(config);

    for line in markdown.lines() {
        state.push_line(line.trim());
    }

    let segments = state.finish();
    debug!(segments = segments.len(), "segmented document");
    segments
}

/// The block currently accumulating lines.
#[derive(Debug, Default)]
enum Open {
    #[default]
    None,
    InList(Vec<String>),
    InParagraph(Vec<String>),
}

struct ParseState<'a> {
    config: &'a BlocksConfig,
    open: Open,
    segments: Vec<Segment>,
}

impl<'a> ParseState<'a> {
    fn new(config: &'a BlocksConfig) -> Self {
        Self {
            config,
            open: Open::None,
            segments: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        let mut kind = classify(line);
        if kind == LineKind::ListItem && !self.config.lists {
            kind = LineKind::Plain;
        }

        match kind {
            LineKind::Heading => {
                self.close();
                self.segments.push(parse_heading(line));
            }
            LineKind::ListItem => {
                let item = line[1..].trim().to_string();
                match &mut self.open {
                    Open::InList(items) => items.push(item),
                    _ => {
                        self.close();
                        self.open = Open::InList(vec![item]);
                    }
                }
            }
            LineKind::Blank => match &mut self.open {
                Open::InParagraph(lines) if self.config.blank_lines == BlankLines::Break => {
                    lines.push(String::new());
                }
                _ => {
                    self.close();
                    if !self.config.paragraphs {
                        self.segments.push(Segment::Plain {
                            text: String::new(),
                        });
                    }
                }
            },
            LineKind::Plain if !self.config.paragraphs => {
                self.close();
                self.segments.push(Segment::Plain {
                    text: line.to_string(),
                });
            }
            LineKind::Plain => match &mut self.open {
                Open::InParagraph(lines) => lines.push(line.to_string()),
                _ => {
                    self.close();
                    self.open = Open::InParagraph(vec![line.to_string()]);
                }
            },
        }
    }

    /// Emit the open block, if any, and return to the idle state.
    fn close(&mut self) {
        match std::mem::take(&mut self.open) {
            Open::None => {}
            Open::InList(items) => {
                debug!(items = items.len(), "closed list");
                self.segments.push(Segment::List { items });
            }
            Open::InParagraph(mut lines) => {
                // Blank entries only separate lines; they never end a paragraph
                while lines.last().is_some_and(String::is_empty) {
                    lines.pop();
                }
                debug!(lines = lines.len(), "closed paragraph");
                self.segments.push(Segment::Paragraph { lines });
            }
        }
    }

    fn finish(mut self) -> Vec<Segment> {
        self.close();
        self.segments
    }
}

/// Parse a line starting with `#`. Runs longer than six keep the line verbatim.
fn parse_heading(line: &str) -> Segment {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level > MAX_HEADING_LEVEL {
        return Segment::Plain {
            text: line.to_string(),
        };
    }

    Segment::Heading {
        level: level as u8,
        content: line[level..].trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn heading(level: u8, content: &str) -> Segment {
        Segment::Heading {
            level,
            content: content.to_string(),
        }
    }

    fn list(items: &[&str]) -> Segment {
        Segment::List {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn paragraph(lines: &[&str]) -> Segment {
        Segment::Paragraph {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn plain(text: &str) -> Segment {
        Segment::Plain {
            text: text.to_string(),
        }
    }

    fn parse_default(markdown: &str) -> Vec<Segment> {
        parse(markdown, &BlocksConfig::default())
    }

    #[rstest]
    #[case("# Title", LineKind::Heading)]
    #[case("####### deep", LineKind::Heading)]
    #[case("- item", LineKind::ListItem)]
    #[case("---", LineKind::ListItem)]
    #[case("", LineKind::Blank)]
    #[case("text", LineKind::Plain)]
    #[case("a # not a heading", LineKind::Plain)]
    fn classifies_lines(#[case] line: &str, #[case] expected: LineKind) {
        assert_eq!(classify(line), expected);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    #[case(6)]
    fn headings_of_every_level(#[case] level: u8) {
        let line = format!("{}   Some title  ", "#".repeat(level as usize));
        assert_eq!(parse_default(&line), vec![heading(level, "Some title")]);
    }

    #[test]
    fn seven_hashes_stay_verbatim() {
        assert_eq!(
            parse_default("  ####### Too deep  "),
            vec![plain("####### Too deep")]
        );
    }

    #[test]
    fn heading_without_space_or_text() {
        assert_eq!(
            parse_default("##Tight\n#"),
            vec![heading(2, "Tight"), heading(1, "")]
        );
    }

    #[test]
    fn consecutive_list_lines_merge() {
        assert_eq!(
            parse_default("- a\n-b\n  -   c  "),
            vec![list(&["a", "b", "c"])]
        );
    }

    #[test]
    fn blank_line_splits_lists() {
        assert_eq!(
            parse_default("- a\n\n- b"),
            vec![list(&["a"]), list(&["b"])]
        );
    }

    #[test]
    fn heading_splits_lists() {
        assert_eq!(
            parse_default("- a\n## Mid\n- b"),
            vec![list(&["a"]), heading(2, "Mid"), list(&["b"])]
        );
    }

    #[test]
    fn plain_lines_merge_into_paragraph() {
        assert_eq!(
            parse_default("first\n  second  \n\nthird"),
            vec![paragraph(&["first", "second"]), paragraph(&["third"])]
        );
    }

    #[test]
    fn kind_change_closes_open_block() {
        assert_eq!(
            parse_default("text\n- item\nmore text\n# Head\ntail"),
            vec![
                paragraph(&["text"]),
                list(&["item"]),
                paragraph(&["more text"]),
                heading(1, "Head"),
                paragraph(&["tail"]),
            ]
        );
    }

    #[test]
    fn blank_lines_only_produce_nothing() {
        assert!(parse_default("\n   \n\t\n").is_empty());
        assert!(parse_default("").is_empty());
    }

    #[test]
    fn crlf_input() {
        assert_eq!(
            parse_default("# T\r\n- a\r\n- b\r\n"),
            vec![heading(1, "T"), list(&["a", "b"])]
        );
    }

    #[test]
    fn break_mode_keeps_paragraph_open() {
        let config = BlocksConfig {
            blank_lines: BlankLines::Break,
            ..BlocksConfig::default()
        };
        assert_eq!(
            parse("one\n\n\ntwo\n\n- item", &config),
            vec![paragraph(&["one", "", "", "two"]), list(&["item"])]
        );
    }

    #[test]
    fn break_mode_still_closes_lists() {
        let config = BlocksConfig {
            blank_lines: BlankLines::Break,
            ..BlocksConfig::default()
        };
        assert_eq!(
            parse("- a\n\n- b", &config),
            vec![list(&["a"]), list(&["b"])]
        );
    }

    #[test]
    fn without_paragraphs_lines_pass_through() {
        let config = BlocksConfig {
            paragraphs: false,
            ..BlocksConfig::default()
        };
        assert_eq!(
            parse("# T\n- a\n\nSome **text**", &config),
            vec![
                heading(1, "T"),
                list(&["a"]),
                plain(""),
                plain("Some **text**"),
            ]
        );
    }

    #[test]
    fn headings_only() {
        let config = BlocksConfig {
            lists: false,
            paragraphs: false,
            ..BlocksConfig::default()
        };
        assert_eq!(
            parse("# T\n- a\nb", &config),
            vec![heading(1, "T"), plain("- a"), plain("b")]
        );
    }

    #[test]
    fn dash_lines_join_paragraph_when_lists_disabled() {
        let config = BlocksConfig {
            lists: false,
            ..BlocksConfig::default()
        };
        assert_eq!(
            parse("text\n- not a list", &config),
            vec![paragraph(&["text", "- not a list"])]
        );
    }
}
