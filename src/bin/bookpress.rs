//! CLI binary for bookpress.
//!
//! A thin shim over the library crate that maps CLI flags to `BuildConfig`
//! and prints results. Any failure exits with a non-zero status and an
//! error chain on stderr; no output file is written on failure.

use anyhow::{Context, Result};
use bookpress::{assemble_only, build_to_file, BuildConfig};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Build the default chapters (about, intro) from the current directory
  bookpress

  # Explicit chapter list, in order
  bookpress about intro chapter-1 chapter-2 -o book.pdf

  # Chapters live elsewhere
  bookpress --dir chapters about intro

  # Preview the assembled markdown without rendering
  bookpress --dry-run about intro

  # Print build stats as JSON
  bookpress --json about intro

FRAGMENT FORMAT:
  Each fragment file starts with a 3-line header; the second line carries
  the chapter title:

    ---
    title: Introduction
    ---
    Chapter body...

  Callout directives are rewritten to HTML alert containers:

    :::message           info callout (opening)
    :::message alert     danger callout (opening)
    :::                  callout close
"#;

/// Assemble markdown chapters into a single PDF book.
#[derive(Parser, Debug)]
#[command(
    name = "bookpress",
    version,
    about = "Assemble markdown chapters into a single PDF book",
    long_about = "Concatenate an ordered list of markdown chapter fragments into one document, \
rewrite :::message callout directives into HTML alert containers, prepend the page-setup \
preamble, and render the result to a single PDF.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Fragment names, in document order (file: <dir>/<name>.md).
    #[arg(default_values_t = [String::from("about"), String::from("intro")])]
    fragments: Vec<String>,

    /// Directory containing the fragment files.
    #[arg(short, long, env = "BOOKPRESS_DIR", default_value = ".")]
    dir: PathBuf,

    /// Output PDF path, overwritten on success.
    #[arg(short, long, env = "BOOKPRESS_OUTPUT", default_value = "book.pdf")]
    output: PathBuf,

    /// Source file extension (without the dot).
    #[arg(long, env = "BOOKPRESS_EXTENSION", default_value = "md")]
    extension: String,

    /// Skip the page-setup/asset preamble.
    #[arg(long, env = "BOOKPRESS_NO_PREAMBLE")]
    no_preamble: bool,

    /// Path to a file holding a custom preamble block.
    #[arg(long, env = "BOOKPRESS_PREAMBLE")]
    preamble: Option<PathBuf>,

    /// Print the assembled markdown to stdout instead of rendering.
    #[arg(long)]
    dry_run: bool,

    /// Print build stats as JSON instead of the human summary.
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "BOOKPRESS_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "BOOKPRESS_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli).await?;

    // ── Dry-run: assembled markdown to stdout, no engine ─────────────────
    if cli.dry_run {
        let markdown = assemble_only(&config).context("Assembly failed")?;
        io::stdout()
            .lock()
            .write_all(markdown.as_bytes())
            .context("Failed to write to stdout")?;
        return Ok(());
    }

    // ── Build and write the PDF ──────────────────────────────────────────
    let stats = build_to_file(&config).await.context("Build failed")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("Failed to serialise stats")?
        );
    } else if !cli.quiet {
        eprintln!(
            "✔  {} fragments  {} PDF bytes  {}ms  →  {}",
            stats.fragment_count,
            stats.pdf_bytes,
            stats.total_duration_ms,
            cli.output.display(),
        );
    }

    Ok(())
}

/// Map CLI args to `BuildConfig`.
async fn build_config(cli: &Cli) -> Result<BuildConfig> {
    let mut builder = BuildConfig::builder()
        .source_dir(&cli.dir)
        .fragments(cli.fragments.iter().cloned())
        .extension(cli.extension.clone())
        .output_path(&cli.output)
        .include_preamble(!cli.no_preamble);

    if let Some(ref path) = cli.preamble {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read preamble from {path:?}"))?;
        builder = builder.preamble(text);
    }

    builder.build().context("Invalid configuration")
}
