//! Output types returned by the build entry points.
//!
//! [`BuildOutput`] carries everything a caller might want after a run: the
//! rendered PDF bytes, the assembled markdown that produced them (useful for
//! debugging directive rewrites), per-fragment info, and timing stats. The
//! stats types derive serde so the CLI can emit them as JSON.

use serde::{Deserialize, Serialize};

/// Result of a successful book build.
#[derive(Debug)]
pub struct BuildOutput {
    /// The rendered PDF document.
    pub pdf: Vec<u8>,

    /// The fully assembled and rewritten markdown handed to the engine.
    pub markdown: String,

    /// Per-fragment info, in document order.
    pub fragments: Vec<FragmentInfo>,

    /// Timing and size statistics.
    pub stats: BuildStats,
}

/// One assembled fragment, as it contributed to the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FragmentInfo {
    /// Fragment name from the configured list.
    pub name: String,

    /// Title parsed from the second front-matter line.
    pub title: String,

    /// Body length in bytes, after the header was stripped.
    pub body_bytes: usize,
}

/// Statistics for a completed build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildStats {
    /// Number of fragments assembled.
    pub fragment_count: usize,

    /// Size of the assembled markdown in bytes.
    pub markdown_bytes: usize,

    /// Size of the rendered PDF in bytes.
    pub pdf_bytes: usize,

    /// Wall-clock time spent loading and assembling fragments.
    pub assemble_duration_ms: u64,

    /// Wall-clock time spent inside the PDF engine.
    pub render_duration_ms: u64,

    /// Total wall-clock time for the run.
    pub total_duration_ms: u64,
}
