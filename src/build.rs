//! Build entry points: assemble the book and render it to PDF.
//!
//! One pipeline, run once per invocation. Fragments are loaded and
//! assembled strictly in configured list order, the directive rewriter runs
//! over the complete document, and only then is the single external render
//! call awaited. There is no concurrent fragment processing — the whole
//! assembly is cheap string work, and the ordering invariant is easier to
//! see when the loop is just a loop.

use crate::config::BuildConfig;
use crate::error::BookError;
use crate::output::{BuildOutput, BuildStats, FragmentInfo};
use crate::pipeline::render::{Markdown2PdfEngine, PdfEngine};
use crate::pipeline::{assemble, load, render, rewrite};
use crate::preamble::DEFAULT_PREAMBLE;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Assemble the configured fragments and render them to PDF bytes.
///
/// This is the primary entry point for the library.
///
/// # Errors
/// Any failure is fatal: a missing or malformed fragment aborts before the
/// engine is invoked; an engine failure returns
/// [`BookError::RenderFailed`] and nothing is written anywhere.
pub async fn build(config: &BuildConfig) -> Result<BuildOutput, BookError> {
    let total_start = Instant::now();
    info!(
        "Building book from {} fragment(s) in {}",
        config.fragments.len(),
        config.source_dir.display()
    );

    // ── Stage 1+2: load and assemble ─────────────────────────────────────
    let assemble_start = Instant::now();
    let (markdown, fragments) = assemble_markdown(config)?;
    let assemble_duration_ms = assemble_start.elapsed().as_millis() as u64;
    debug!(
        "Assembled {} bytes of markdown in {}ms",
        markdown.len(),
        assemble_duration_ms
    );

    // ── Stage 4: render ──────────────────────────────────────────────────
    let engine = resolve_engine(config);
    let (pdf, render_duration_ms) = render::render_pdf(engine, markdown.clone()).await?;

    let stats = BuildStats {
        fragment_count: fragments.len(),
        markdown_bytes: markdown.len(),
        pdf_bytes: pdf.len(),
        assemble_duration_ms,
        render_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Build complete: {} fragments, {} PDF bytes, {}ms total",
        stats.fragment_count, stats.pdf_bytes, stats.total_duration_ms
    );

    Ok(BuildOutput {
        pdf,
        markdown,
        fragments,
        stats,
    })
}

/// Build the book and write the PDF to `config.output_path`.
///
/// Uses atomic write (temp file + rename) so a failed run never leaves a
/// partial or corrupt PDF behind: on any error the previous output file, if
/// one exists, is untouched.
pub async fn build_to_file(config: &BuildConfig) -> Result<BuildStats, BookError> {
    let output = build(config).await?;
    let path = config.output_path.as_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| BookError::OutputWriteFailed {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
    }

    let tmp_path = path.with_extension("pdf.tmp");
    tokio::fs::write(&tmp_path, &output.pdf)
        .await
        .map_err(|e| BookError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| BookError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!("Wrote {}", path.display());
    Ok(output.stats)
}

/// Synchronous wrapper around [`build`].
///
/// Creates a temporary tokio runtime internally.
pub fn build_sync(config: &BuildConfig) -> Result<BuildOutput, BookError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| BookError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(build(config))
}

/// Assemble and rewrite the document without rendering it.
///
/// Does not require a PDF engine. Useful for previewing the combined
/// markdown (`bookpress --dry-run`) or for tests that only care about the
/// text pipeline.
pub fn assemble_only(config: &BuildConfig) -> Result<String, BookError> {
    let (markdown, _) = assemble_markdown(config)?;
    Ok(markdown)
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Stages 1–3: load each fragment in list order, strip its header, render
/// its section, concatenate behind the preamble, rewrite directives.
fn assemble_markdown(config: &BuildConfig) -> Result<(String, Vec<FragmentInfo>), BookError> {
    let mut sections: Vec<(String, String)> = Vec::with_capacity(config.fragments.len());
    let mut fragments: Vec<FragmentInfo> = Vec::with_capacity(config.fragments.len());

    for name in &config.fragments {
        let raw = load::load_fragment(&config.source_dir, name, &config.extension)?;
        let (title, body) = assemble::split_front_matter(name, &raw)?;
        debug!("Fragment '{}' → title '{}', {} body bytes", name, title, body.len());
        fragments.push(FragmentInfo {
            name: name.clone(),
            title: title.clone(),
            body_bytes: body.len(),
        });
        sections.push((title, body));
    }

    let preamble = if config.include_preamble {
        Some(config.preamble.as_deref().unwrap_or(DEFAULT_PREAMBLE))
    } else {
        None
    };

    let document = assemble::assemble(preamble, &sections);
    let document = rewrite::rewrite_directives(&document);
    Ok((document, fragments))
}

/// Use the injected engine when one is configured, else the default
/// `markdown2pdf`-backed engine.
fn resolve_engine(config: &BuildConfig) -> Arc<dyn PdfEngine> {
    match config.engine {
        Some(ref engine) => Arc::clone(engine),
        None => Arc::new(Markdown2PdfEngine),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_fragment(dir: &Path, name: &str, title: &str, body: &str) {
        std::fs::write(
            dir.join(format!("{name}.md")),
            format!("---\ntitle: {title}\n---\n{body}"),
        )
        .unwrap();
    }

    fn config_for(dir: &Path, names: &[&str]) -> BuildConfig {
        BuildConfig::builder()
            .source_dir(dir)
            .fragments(names.iter().copied())
            .include_preamble(false)
            .build()
            .unwrap()
    }

    #[test]
    fn assemble_only_concatenates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write_fragment(dir.path(), "about", "About", "who wrote this");
        write_fragment(dir.path(), "intro", "Intro", "what this is");

        let md = assemble_only(&config_for(dir.path(), &["about", "intro"])).unwrap();
        assert!(md.find("# About").unwrap() < md.find("# Intro").unwrap());
        assert_eq!(md.matches("<div class=\"page-break\"></div>").count(), 2);
    }

    #[test]
    fn assemble_only_rewrites_directives() {
        let dir = tempfile::tempdir().unwrap();
        write_fragment(dir.path(), "tips", "Tips", ":::message\nhydrate\n:::");

        let md = assemble_only(&config_for(dir.path(), &["tips"])).unwrap();
        assert!(md.contains("<div class=\"alert alert-info\" role=\"alert\">\nhydrate\n</div>"));
        assert!(!md.contains(":::"));
    }

    #[test]
    fn preamble_prepended_by_default() {
        let dir = tempfile::tempdir().unwrap();
        write_fragment(dir.path(), "about", "About", "x");

        let config = BuildConfig::builder()
            .source_dir(dir.path())
            .fragments(["about"])
            .build()
            .unwrap();
        let md = assemble_only(&config).unwrap();
        assert!(md.starts_with("---\n"), "default preamble leads the document");
        assert!(md.contains("pdf_options:"));
    }

    #[test]
    fn custom_preamble_wins() {
        let dir = tempfile::tempdir().unwrap();
        write_fragment(dir.path(), "about", "About", "x");

        let config = BuildConfig::builder()
            .source_dir(dir.path())
            .fragments(["about"])
            .preamble("CUSTOM\n")
            .build()
            .unwrap();
        let md = assemble_only(&config).unwrap();
        assert!(md.starts_with("CUSTOM\n"));
        assert!(!md.contains("pdf_options:"));
    }

    #[test]
    fn missing_fragment_aborts() {
        let dir = tempfile::tempdir().unwrap();
        write_fragment(dir.path(), "about", "About", "x");

        let err = assemble_only(&config_for(dir.path(), &["about", "ghost"])).unwrap_err();
        assert!(matches!(err, BookError::FragmentNotFound { .. }), "got: {err}");
    }

    #[test]
    fn malformed_fragment_aborts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("stub.md"), "---\ntitle: Stub").unwrap();

        let err = assemble_only(&config_for(dir.path(), &["stub"])).unwrap_err();
        assert!(matches!(err, BookError::MalformedFragment { .. }), "got: {err}");
    }
}
