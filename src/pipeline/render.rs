//! PDF rendering: assembled markdown → PDF bytes via an external engine.
//!
//! ## Why a trait?
//!
//! The assembly and rewrite stages are pure text transformations; the only
//! heavyweight collaborator is the markdown-to-PDF engine. Putting it behind
//! [`PdfEngine`] keeps the pipeline testable with a mock (see
//! `tests/e2e.rs`) and isolates the third-party dependency to one impl.
//!
//! ## Why spawn_blocking?
//!
//! PDF generation is CPU-bound (font shaping, layout, compression) and the
//! `markdown2pdf` crate is synchronous. `tokio::task::spawn_blocking` moves
//! the work onto a dedicated thread pool thread so the async caller is not
//! stalled — and it preserves the run's one ordering guarantee: the render
//! is awaited to completion before any output is written.

use crate::error::BookError;
use markdown2pdf::config::ConfigSource;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Capability interface consumed by the build pipeline:
/// `render(text) -> bytes | RenderFailed`.
///
/// Implementations must be `Send + Sync` because the render call is moved
/// onto a blocking worker thread.
pub trait PdfEngine: Send + Sync {
    /// Render the assembled markdown/HTML text into PDF bytes.
    fn render(&self, markdown: &str) -> Result<Vec<u8>, BookError>;
}

/// Default engine backed by the `markdown2pdf` crate.
#[derive(Debug, Default)]
pub struct Markdown2PdfEngine;

impl PdfEngine for Markdown2PdfEngine {
    fn render(&self, markdown: &str) -> Result<Vec<u8>, BookError> {
        markdown2pdf::parse_into_bytes(markdown.to_string(), ConfigSource::Default, None)
            .map_err(|e| BookError::RenderFailed {
                detail: e.to_string(),
            })
    }
}

/// Run the engine on a blocking worker thread and await the result.
///
/// Returns the PDF bytes and the engine's wall-clock time in milliseconds.
pub async fn render_pdf(
    engine: Arc<dyn PdfEngine>,
    markdown: String,
) -> Result<(Vec<u8>, u64), BookError> {
    debug!("Handing {} bytes of markdown to the PDF engine", markdown.len());
    let start = Instant::now();

    let pdf = tokio::task::spawn_blocking(move || engine.render(&markdown))
        .await
        .map_err(|e| BookError::Internal(format!("Render task panicked: {e}")))??;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    info!("Rendered {} PDF bytes in {}ms", pdf.len(), elapsed_ms);
    Ok((pdf, elapsed_ms))
}
