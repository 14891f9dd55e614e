//! # bookpress
//!
//! Assemble markdown chapters into a single PDF book.
//!
//! ## Why this crate?
//!
//! A book written as a handful of markdown chapter files needs three things
//! before a markdown-to-PDF engine can turn it into a decent document:
//! the chapters concatenated in a fixed order with per-chapter headings and
//! page breaks, the custom `:::message` callout directives rewritten into
//! HTML the engine understands, and a preamble block carrying page metadata
//! and asset includes. This crate does exactly that — the PDF rendering
//! itself is delegated to an external engine behind a narrow trait.
//!
//! ## Pipeline Overview
//!
//! ```text
//! fragments
//!  │
//!  ├─ 1. Load      read each configured fragment file as UTF-8
//!  ├─ 2. Assemble  strip 3-line header, emit heading + body + page break,
//!  │               prepend the preamble
//!  ├─ 3. Rewrite   :::message directives → <div> alert containers
//!  └─ 4. Render    markdown2pdf engine (CPU-bound, spawn_blocking)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bookpress::{build_to_file, BuildConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BuildConfig::builder()
//!         .source_dir("chapters")
//!         .fragments(["about", "intro"])
//!         .output_path("book.pdf")
//!         .build()?;
//!     let stats = build_to_file(&config).await?;
//!     eprintln!("{} fragments → {} PDF bytes", stats.fragment_count, stats.pdf_bytes);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `bookpress` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! bookpress = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod build;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod preamble;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use build::{assemble_only, build, build_sync, build_to_file};
pub use config::{BuildConfig, BuildConfigBuilder};
pub use error::BookError;
pub use output::{BuildOutput, BuildStats, FragmentInfo};
pub use pipeline::render::{Markdown2PdfEngine, PdfEngine};
pub use preamble::DEFAULT_PREAMBLE;
