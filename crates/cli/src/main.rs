//! Discovery Bridge CLI
//!
//! Command-line interface for converting Google Discovery documents into
//! OpenAPI 3.x and validating OpenAPI documents.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use discovery_bridge_converter::{
    convert, render, DiscoveryParser, RenderMode, RenderedDocument, DEFAULT_CHUNK_SIZE,
};
use discovery_bridge_validator::{validate, ValidationReport, DEFAULT_VERSION_PREFIX};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "discovery-bridge")]
#[command(version, about = "Convert Google Discovery documents to OpenAPI 3.x", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Discovery document into an OpenAPI 3.x document
    #[command(after_help = "EXAMPLES:\n  \
        # Convert and pretty-print\n  \
        discovery-bridge convert --spec storage-v1.json\n\n  \
        # Minified output to a file\n  \
        discovery-bridge convert --spec storage-v1.json --mode minified --out storage-openapi.json\n\n  \
        # Chunked transport shape\n  \
        discovery-bridge convert --spec storage-v1.json --mode chunked --chunk-size 4096")]
    Convert {
        /// Path to the Discovery document
        #[arg(short, long)]
        spec: PathBuf,

        /// Output shape
        #[arg(short, long, default_value = "full")]
        mode: OutputMode,

        /// Byte budget per chunk in chunked mode
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,

        /// Write the rendered output to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Validate an OpenAPI 3.x document against the structural rule set
    #[command(after_help = "EXAMPLES:\n  \
        # Validate a generated document\n  \
        discovery-bridge validate --spec storage-openapi.json\n\n  \
        # Accept OpenAPI 3.1 only\n  \
        discovery-bridge validate --spec api.json --version-prefix 3.1")]
    Validate {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        spec: PathBuf,

        /// Expected openapi version prefix
        #[arg(long, default_value = DEFAULT_VERSION_PREFIX)]
        version_prefix: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputMode {
    /// Document object plus pretty-printed JSON
    Full,
    /// Minified JSON string
    Minified,
    /// Minified JSON split into byte chunks
    Chunked,
    /// Base64 file descriptor
    File,
}

impl OutputMode {
    fn render_mode(self, chunk_size: usize) -> RenderMode {
        match self {
            OutputMode::Full => RenderMode::Full,
            OutputMode::Minified => RenderMode::Minified,
            OutputMode::Chunked => RenderMode::Chunked { size: chunk_size },
            OutputMode::File => RenderMode::File,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            spec,
            mode,
            chunk_size,
            out,
        } => convert_command(
            spec.as_path(),
            mode,
            chunk_size,
            out.as_deref(),
            cli.verbose,
        ),
        Commands::Validate {
            spec,
            version_prefix,
        } => validate_command(spec.as_path(), &version_prefix),
    }
}

fn convert_command(
    spec_path: &Path,
    mode: OutputMode,
    chunk_size: usize,
    out: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    println!(
        "{} Converting Discovery document: {}",
        "→".cyan(),
        spec_path.display()
    );

    let parser = DiscoveryParser::from_file(spec_path).context("Failed to load Discovery doc")?;
    let outcome = convert(parser.doc()).context("Failed to convert Discovery doc")?;

    if verbose {
        let paths = outcome
            .document
            .get("paths")
            .and_then(|p| p.as_object())
            .map(|p| p.len())
            .unwrap_or(0);
        println!("  Paths: {paths}");
    }

    print_report(&outcome.report);

    let rendered = render(&outcome.document, mode.render_mode(chunk_size))
        .context("Failed to render OpenAPI document")?;
    let output = match rendered {
        RenderedDocument::Full { pretty, .. } => pretty,
        RenderedDocument::Minified { minified } => minified,
        other => serde_json::to_string_pretty(&other)?,
    };

    match out {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}

fn validate_command(spec_path: &Path, version_prefix: &str) -> Result<()> {
    println!(
        "{} Validating OpenAPI document: {}",
        "→".cyan(),
        spec_path.display()
    );

    let content = fs::read_to_string(spec_path)
        .with_context(|| format!("Failed to read {}", spec_path.display()))?;
    let document: serde_json::Value =
        serde_json::from_str(&content).context("Failed to parse OpenAPI JSON")?;

    let report = validate(&document, version_prefix);
    print_report(&report);

    if !report.passed {
        std::process::exit(1);
    }
    Ok(())
}

fn print_report(report: &ValidationReport) {
    if report.passed {
        println!(
            "{} ({} warnings)",
            "✓ Validation passed".green().bold(),
            report.warning_count
        );
    } else {
        println!(
            "{} ({} errors, {} warnings)",
            "✗ Validation failed".red().bold(),
            report.error_count,
            report.warning_count
        );
    }
    for error in &report.errors {
        println!("  {} {}", "error:".red(), error);
    }
    for warning in &report.warnings {
        println!("  {} {}", "warning:".yellow(), warning);
    }
}
