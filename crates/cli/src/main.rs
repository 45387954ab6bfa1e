mod echo;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use embedkit_core::{Conversion, ConvertConfig, Converter, Dialect, DimensionPolicy, EmbedError, Platform};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use crate::echo::{format_size, print_banner, print_detail, print_error, print_step, print_success};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: html, json", s)),
        }
    }
}

/// Convert third-party embed snippets into AMP or Turbo markup
#[derive(Parser, Debug)]
#[command(name = "embedkit")]
#[command(author = "embedkit Contributors")]
#[command(version)]
#[command(about = "Convert embed snippets into AMP and Turbo markup", long_about = None)]
struct Args {
    /// Local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    input: Option<String>,

    /// Target dialect (amp, turbo)
    #[arg(short, long, default_value = "amp", value_name = "DIALECT")]
    dialect: Dialect,

    /// Use a single platform's extractor and report its failure reason
    #[arg(short, long, value_name = "PLATFORM")]
    platform: Option<Platform>,

    /// Output format (html, json)
    #[arg(short, long, default_value = "html", value_name = "FORMAT")]
    format: OutputFormat,

    /// Fill missing dimensions with platform defaults
    #[arg(long)]
    defaults: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: &str) -> anyhow::Result<Vec<u8>> {
    if input == "-" {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer).context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read(input).with_context(|| format!("Failed to read file: {}", input))
    }
}

fn convert(args: &Args, html: &[u8]) -> Result<Conversion, EmbedError> {
    let dimensions = if args.defaults { DimensionPolicy::PlatformDefaults } else { DimensionPolicy::Omit };
    let converter = Converter::with_config(ConvertConfig::builder().dimensions(dimensions).build());

    match args.platform {
        Some(platform) => converter.convert_as(platform, html, args.dialect),
        None => converter.convert(html, args.dialect),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "embedkit", &mut io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    init_tracing(args.verbose);

    let input = args.input.as_deref().context("INPUT is required")?;

    if args.verbose {
        print_banner();
        print_step(1, 3, &format!("Reading {}", if input == "-" { "stdin" } else { input }));
    }

    let html = read_input(input)?;
    tracing::debug!(input, bytes = html.len(), "read embed snippet");

    if args.verbose {
        print_detail("Size", &format_size(html.len()));
        print_step(2, 3, &format!("Converting to {}", args.dialect));
    }

    let conversion = match convert(&args, &html) {
        Ok(conversion) => conversion,
        Err(e) => {
            tracing::debug!(reason = %e.kind(), "conversion failed");
            print_error(&format!("{}: {}", e.kind(), e));
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.verbose {
        print_detail("Platform", conversion.platform.as_str());
        print_step(3, 3, "Writing output");
    }

    let output = match args.format {
        OutputFormat::Html => format!("{}\n", conversion.output),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&conversion).context("Failed to serialize conversion")?;
            format!("{}\n", json)
        }
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => print!("{}", output),
    }

    Ok(ExitCode::SUCCESS)
}
