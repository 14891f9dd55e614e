//! The built-in document preamble.
//!
//! A static block of document-level metadata and asset includes, prepended
//! once before the first chapter: page format and margins for the engine,
//! header/footer templates, KaTeX for math rendering, Bootstrap for the
//! alert containers the directive rewriter emits, and the cover stylesheet.
//!
//! The pipeline treats this as an opaque literal — it is never parsed,
//! split, or rewritten. Callers who need a different preamble set
//! [`crate::BuildConfig::preamble`] or disable it entirely.

/// Default preamble: page metadata front-matter plus static asset includes.
pub const DEFAULT_PREAMBLE: &str = r#"---
pdf_options:
  format: a4
  margin: 18mm 15mm
  printBackground: true
  displayHeaderFooter: true
  headerTemplate: |-
    <style>
      section { margin: 0 auto; font-family: system-ui; font-size: 9px; }
    </style>
    <section><span class="title"></span></section>
  footerTemplate: |-
    <section style="margin: 0 auto; font-family: system-ui; font-size: 9px;">
      <span class="pageNumber"></span>
    </section>
---

<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.css">
<script defer src="https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.js"></script>
<script defer src="https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/contrib/auto-render.min.js" onload="renderMathInElement(document.body);"></script>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
<link rel="stylesheet" href="assets/cover.css">
"#;
