mod config;
mod error;
mod html;
pub mod inline;
mod parser;
mod segment;

pub use config::{BlankLines, BlocksConfig, Config, InlineConfig, StripLocator};
pub use error::{ConfigError, ConvertError};
pub use parser::{LineKind, classify};
pub use segment::Segment;

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

/// Parse markdown text into a vector of segments using default config.
pub fn parse(markdown: &str) -> Vec<Segment> {
    parse_with_config(markdown, &Config::compiled_default())
}

/// Parse markdown text into a vector of segments with custom config.
pub fn parse_with_config(markdown: &str, config: &Config) -> Vec<Segment> {
    parser::parse(markdown, &config.blocks)
}

/// Render already-parsed segments to HTML.
pub fn segments_to_html(segments: &[Segment], config: &Config) -> String {
    html::segments_to_html(segments, &config.inline)
}

/// Convert markdown to HTML using default config.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to HTML with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    let segments = parse_with_config(markdown, config);
    segments_to_html(&segments, config)
}

/// Apply inline formatting to a single line using default config.
pub fn format_inline(line: &str) -> String {
    inline::format(line)
}

/// Read a markdown file, convert it, and write the HTML to `output`.
pub fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<(), ConvertError> {
    let markdown = fs::read_to_string(input).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConvertError::InputNotFound {
            path: input.to_path_buf(),
        },
        _ => ConvertError::Read {
            path: input.to_path_buf(),
            source,
        },
    })?;

    let html = markdown_to_html_with_config(&markdown, config);
    debug!(
        input = %input.display(),
        output = %output.display(),
        bytes = html.len(),
        "converted document"
    );

    fs::write(output, html).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })
}
