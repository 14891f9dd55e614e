//! Configuration types for the book build.
//!
//! All build behaviour is controlled through [`BuildConfig`], built via its
//! [`BuildConfigBuilder`]. Keeping every knob in one struct makes it trivial
//! to construct configs in tests (arbitrary fragment sets, mock rendering
//! engines) without any real files or PDF work, and to log a config to
//! understand why two runs produced different books.
//!
//! # Design choice: explicit fragment list
//! The fragment ordering is the central invariant of the whole tool: the
//! final document contains exactly the configured fragments, in configured
//! order, once each. Making the list an ordered config value rather than a
//! hardcoded constant keeps the pipeline testable and lets the CLI pass
//! chapter names straight through.

use crate::error::BookError;
use crate::pipeline::render::PdfEngine;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for assembling and rendering a book.
///
/// Built via [`BuildConfig::builder()`].
///
/// # Example
/// ```rust
/// use bookpress::BuildConfig;
///
/// let config = BuildConfig::builder()
///     .source_dir("chapters")
///     .fragments(["about", "intro"])
///     .output_path("book.pdf")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct BuildConfig {
    /// Directory containing the fragment source files. Default: `.`.
    pub source_dir: PathBuf,

    /// Ordered fragment names. Each maps to `<source_dir>/<name>.<extension>`.
    ///
    /// Order is significant: it fixes the final document order exactly.
    pub fragments: Vec<String>,

    /// Source file extension (without the dot). Default: `md`.
    pub extension: String,

    /// Output PDF path, overwritten on each successful run. Default: `book.pdf`.
    pub output_path: PathBuf,

    /// Prepend the document preamble (page metadata + asset includes)
    /// before the first section. Default: true.
    pub include_preamble: bool,

    /// Custom preamble text. If `None` and `include_preamble` is set, the
    /// built-in [`crate::preamble::DEFAULT_PREAMBLE`] is used. The preamble
    /// is an opaque literal; the pipeline never parses it.
    pub preamble: Option<String>,

    /// Pre-constructed PDF engine. If `None`, the default
    /// [`crate::pipeline::render::Markdown2PdfEngine`] is used. Injecting a
    /// mock engine here is how the pipeline is tested without real PDF
    /// generation.
    pub engine: Option<Arc<dyn PdfEngine>>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            fragments: Vec::new(),
            extension: "md".to_string(),
            output_path: PathBuf::from("book.pdf"),
            include_preamble: true,
            preamble: None,
            engine: None,
        }
    }
}

impl fmt::Debug for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildConfig")
            .field("source_dir", &self.source_dir)
            .field("fragments", &self.fragments)
            .field("extension", &self.extension)
            .field("output_path", &self.output_path)
            .field("include_preamble", &self.include_preamble)
            .field("preamble", &self.preamble.as_ref().map(|p| p.len()))
            .field("engine", &self.engine.as_ref().map(|_| "<dyn PdfEngine>"))
            .finish()
    }
}

impl BuildConfig {
    /// Create a new builder for `BuildConfig`.
    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`BuildConfig`].
#[derive(Debug)]
pub struct BuildConfigBuilder {
    config: BuildConfig,
}

impl BuildConfigBuilder {
    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.source_dir = dir.into();
        self
    }

    pub fn fragments<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.fragments = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        let ext = ext.into();
        self.config.extension = ext.trim_start_matches('.').to_string();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn include_preamble(mut self, v: bool) -> Self {
        self.config.include_preamble = v;
        self
    }

    pub fn preamble(mut self, text: impl Into<String>) -> Self {
        self.config.preamble = Some(text.into());
        self
    }

    pub fn engine(mut self, engine: Arc<dyn PdfEngine>) -> Self {
        self.config.engine = Some(engine);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<BuildConfig, BookError> {
        let c = &self.config;
        if c.fragments.is_empty() {
            return Err(BookError::InvalidConfig(
                "At least one fragment name is required".into(),
            ));
        }
        if c.extension.is_empty() {
            return Err(BookError::InvalidConfig(
                "Source extension must not be empty".into(),
            ));
        }
        if let Some(dup) = first_duplicate(&c.fragments) {
            return Err(BookError::InvalidConfig(format!(
                "Fragment '{dup}' is listed more than once"
            )));
        }
        Ok(self.config)
    }
}

/// The final document must contain each fragment exactly once, so a
/// duplicated name in the list is a configuration mistake, not a request
/// to repeat a chapter.
fn first_duplicate(names: &[String]) -> Option<&str> {
    let mut seen = std::collections::HashSet::new();
    names.iter().find(|n| !seen.insert(n.as_str())).map(|n| n.as_str())
}
