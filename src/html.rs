use crate::config::InlineConfig;
use crate::inline;
use crate::segment::Segment;

/// Convert segments to HTML, one block per segment, joined with newlines.
/// No trailing newline is added.
pub fn segments_to_html(segments: &[Segment], config: &InlineConfig) -> String {
    let mut out = String::new();

    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        emit_segment(segment, config, &mut out);
    }

    out
}

fn emit_segment(segment: &Segment, config: &InlineConfig, out: &mut String) {
    match segment {
        Segment::Heading { level, content } => {
            out.push_str(&format!("<h{level}>{content}</h{level}>"));
        }
        Segment::List { items } => {
            out.push_str("<ul>\n");
            for item in items {
                out.push_str("<li>");
                out.push_str(&inline::format_with(item, config));
                out.push_str("</li>\n");
            }
            out.push_str("</ul>");
        }
        Segment::Paragraph { lines } => {
            out.push_str("<p>\n");
            for line in lines {
                if line.is_empty() {
                    out.push_str("<br/>");
                } else {
                    out.push_str(&inline::format_with(line, config));
                }
                out.push('\n');
            }
            out.push_str("</p>");
        }
        Segment::Plain { text } => {
            out.push_str(text);
        }
    }
}
