//! Pipeline stages for markdown-to-PDF book assembly.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch the PDF engine) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! load ──▶ assemble ──▶ rewrite ──▶ render
//! (files)  (sections)   (directives) (PDF bytes)
//! ```
//!
//! 1. [`load`]     — read each configured fragment file as UTF-8 text
//! 2. [`assemble`] — strip the 3-line header, extract the title, emit a
//!    heading + body + page-break section per fragment, prepend the preamble
//! 3. [`rewrite`]  — convert `:::message` callout directives into HTML
//!    container markup (three ordered literal substitutions)
//! 4. [`render`]   — hand the final text to the PDF engine; runs in
//!    `spawn_blocking` because PDF generation is CPU-bound

pub mod assemble;
pub mod load;
pub mod render;
pub mod rewrite;
