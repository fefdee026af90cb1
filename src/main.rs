use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use markdown2html::{Config, ConvertError};

#[derive(Parser)]
#[command(name = "markdown2html", version)]
#[command(about = "Convert a Markdown file to HTML")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file
    output: PathBuf,

    /// TOML config file (defaults to the built-in config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors exit with 1 rather than clap's default of 2
            eprint!("{}", e);
            process::exit(1);
        }
    };

    // --verbose enables DEBUG, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => Config::compiled_default(),
    };

    match markdown2html::convert_file(&cli.input, &cli.output, &config) {
        Ok(()) => {}
        Err(e @ ConvertError::InputNotFound { .. }) => {
            eprintln!("{}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
