//! Inline formatting for list items and paragraph lines.
//!
//! Passes run in a fixed order: bold, emphasis, hash directive, strip
//! directive. Every pass is a left-to-right scan for literal delimiters;
//! unbalanced input is left as it is.

use md5::{Digest, Md5};
use tracing::trace;

use crate::config::{InlineConfig, StripLocator};

const BOLD: Delimited = Delimited {
    marker: "**",
    open: "<b>",
    close: "</b>",
};

const EMPHASIS: Delimited = Delimited {
    marker: "__",
    open: "<em>",
    close: "</em>",
};

/// A marker whose first two occurrences become an opening and closing tag.
struct Delimited {
    marker: &'static str,
    open: &'static str,
    close: &'static str,
}

/// Format a line with every inline pass enabled.
pub fn format(line: &str) -> String {
    format_with(line, &InlineConfig::default())
}

/// Format a line with the passes selected in `config`.
pub fn format_with(line: &str, config: &InlineConfig) -> String {
    let mut text = line.to_string();
    if config.bold {
        text = replace_first_pair(&text, &BOLD);
    }
    if config.emphasis {
        text = replace_first_pair(&text, &EMPHASIS);
    }
    if config.hash {
        text = resolve_hashes(&text);
    }
    if config.strip {
        text = match config.strip_locator {
            StripLocator::Parens => strip_in_parens(&text),
            StripLocator::Brackets => strip_in_brackets(&text),
        };
    }
    text
}

/// Swap the first occurrence of the marker for the opening tag and the next
/// one after it for the closing tag. A lone marker still gets the opening tag.
fn replace_first_pair(text: &str, delimited: &Delimited) -> String {
    let marker = delimited.marker;
    let Some(first) = text.find(marker) else {
        return text.to_string();
    };

    let after_first = first + marker.len();
    let mut out = String::with_capacity(text.len() + delimited.open.len() + delimited.close.len());
    out.push_str(&text[..first]);
    out.push_str(delimited.open);

    match text[after_first..].find(marker) {
        Some(offset) => {
            let second = after_first + offset;
            out.push_str(&text[after_first..second]);
            out.push_str(delimited.close);
            out.push_str(&text[second + marker.len()..]);
        }
        None => out.push_str(&text[after_first..]),
    }
    out
}

/// Byte offsets of the first `open` and the first `close` after it.
/// The content lies between `start + open.len()` and `end`.
fn find_region(text: &str, open: &str, close: &str) -> Option<(usize, usize)> {
    let start = text.find(open)?;
    let content_start = start + open.len();
    let end = content_start + text[content_start..].find(close)?;
    Some((start, end))
}

/// Replace each `[[...]]` with the lowercase hex MD5 of its content.
fn resolve_hashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some((start, end)) = find_region(rest, "[[", "]]") {
        let content = &rest[start + 2..end];
        let digest = md5_hex(content);
        trace!(content, digest = digest.as_str(), "resolved hash directive");

        out.push_str(&rest[..start]);
        out.push_str(&digest);
        rest = &rest[end + 2..];
    }

    out.push_str(rest);
    out
}

fn md5_hex(content: &str) -> String {
    hex::encode(Md5::digest(content.as_bytes()))
}

/// Replace each `((...))` with its content minus every `c` and `C`.
fn strip_in_parens(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some((start, end)) = find_region(rest, "((", "))") {
        let stripped = strip_c(&rest[start + 2..end]);
        trace!(stripped = stripped.as_str(), "resolved strip directive");

        out.push_str(&rest[..start]);
        out.push_str(&stripped);
        rest = &rest[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Legacy strip directive: triggered by a `((...))` pair but applied to the
/// first `[[...]]` region. The hash pass normally consumes every bracket pair
/// first, in which case nothing changes.
fn strip_in_brackets(text: &str) -> String {
    let mut text = text.to_string();

    // Each splice drops four delimiter bytes, so the loop terminates.
    while find_region(&text, "((", "))").is_some() {
        let Some((start, end)) = find_region(&text, "[[", "]]") else {
            break;
        };
        let stripped = strip_c(&text[start + 2..end]);
        trace!(stripped = stripped.as_str(), "resolved legacy strip directive");
        text.replace_range(start..end + 2, &stripped);
    }

    text
}

fn strip_c(content: &str) -> String {
    content.chars().filter(|ch| !matches!(ch, 'c' | 'C')).collect()
}
