//! Error types for the bookpress library.
//!
//! Every failure in the build pipeline is fatal: this is a one-shot batch
//! tool, so there is no retry logic and no partial output. Either the whole
//! document assembles and renders, or nothing is written. The variants fall
//! into three families:
//!
//! * **Read errors** — a configured fragment file is missing or unreadable
//!   ([`BookError::FragmentNotFound`], [`BookError::PermissionDenied`]).
//!   These propagate immediately and abort the run.
//!
//! * **Malformed input** — a fragment is too short to carry the three-line
//!   header ([`BookError::MalformedFragment`]). Failing fast here is
//!   deliberate: the alternative is indexing past the end of the file and
//!   emitting a garbled chapter.
//!
//! * **Render/output errors** — the external PDF engine failed
//!   ([`BookError::RenderFailed`]) or the output file could not be written
//!   ([`BookError::OutputWriteFailed`]). Caught once at the top level,
//!   logged, and the run ends without touching any existing output file.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the bookpress library.
#[derive(Debug, Error)]
pub enum BookError {
    // ── Read errors ───────────────────────────────────────────────────────
    /// A configured fragment file does not exist.
    #[error("Fragment file not found: '{path}'\nCheck the fragment name and --dir.")]
    FragmentNotFound { path: PathBuf },

    /// Process does not have read permission on a fragment file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// A fragment file exists but could not be read as UTF-8 text.
    #[error("Failed to read fragment '{path}': {source}")]
    FragmentReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Malformed input ───────────────────────────────────────────────────
    /// A fragment is shorter than the three-line front-matter header.
    #[error(
        "Fragment '{name}' is malformed: expected a 3-line header \
         (---, title: <value>, ---) but the file has only {lines} line(s)"
    )]
    MalformedFragment { name: String, lines: usize },

    // ── Render errors ─────────────────────────────────────────────────────
    /// The external markdown-to-PDF engine reported a failure.
    #[error("PDF rendering failed: {detail}\nNo output file was written.")]
    RenderFailed { detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output PDF file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_not_found_display() {
        let e = BookError::FragmentNotFound {
            path: PathBuf::from("chapters/intro.md"),
        };
        let msg = e.to_string();
        assert!(msg.contains("chapters/intro.md"), "got: {msg}");
        assert!(msg.contains("--dir"));
    }

    #[test]
    fn malformed_fragment_display() {
        let e = BookError::MalformedFragment {
            name: "about".into(),
            lines: 2,
        };
        let msg = e.to_string();
        assert!(msg.contains("'about'"));
        assert!(msg.contains("2 line(s)"));
    }

    #[test]
    fn render_failed_display() {
        let e = BookError::RenderFailed {
            detail: "font table corrupt".into(),
        };
        assert!(e.to_string().contains("font table corrupt"));
        assert!(e.to_string().contains("No output file"));
    }

    #[test]
    fn output_write_failed_carries_source() {
        use std::error::Error;
        let e = BookError::OutputWriteFailed {
            path: PathBuf::from("book.pdf"),
            source: std::io::Error::other("disk full"),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().contains("book.pdf"));
    }
}
