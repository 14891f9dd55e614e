//! Assembly: front-matter stripping, title extraction, section rendering.
//!
//! Every fragment starts with a 3-line front-matter header:
//!
//! ```text
//! ---
//! title: Introduction
//! ---
//! ```
//!
//! The second line carries the chapter title. The header is removed, the
//! title becomes a `# ` heading, and a page-break marker is appended after
//! the body so each chapter starts on a fresh PDF page.
//!
//! ## Why `split('\n')` instead of `lines()`?
//!
//! `str::lines()` swallows `\r` and collapses trailing newlines, which would
//! silently rewrite the body of every CRLF-authored fragment. Splitting on
//! `'\n'` and re-joining with `'\n'` keeps the body byte-for-byte identical
//! to the source below the header.

use crate::error::BookError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Number of front-matter lines removed from the top of each fragment.
pub const HEADER_LINES: usize = 3;

/// Literal inserted after each section to force a new page in the PDF.
pub const PAGE_BREAK: &str = "\n<div class=\"page-break\"></div>\n";

static RE_TITLE_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^title:").unwrap());

/// Split a fragment's raw text into `(title, body)`.
///
/// The title is the second line with the leading `title:` label and
/// surrounding whitespace stripped. The body is everything below the
/// 3-line header, with original line separators preserved.
///
/// # Errors
/// [`BookError::MalformedFragment`] when the fragment has fewer than
/// [`HEADER_LINES`] lines — there is no defined way to read a title out of
/// a file that short.
pub fn split_front_matter(name: &str, raw: &str) -> Result<(String, String), BookError> {
    let lines: Vec<&str> = raw.split('\n').collect();
    if lines.len() < HEADER_LINES {
        return Err(BookError::MalformedFragment {
            name: name.to_string(),
            lines: lines.len(),
        });
    }

    let title = RE_TITLE_LABEL.replace(lines[1], "").trim().to_string();
    let body = lines[HEADER_LINES..].join("\n");
    Ok((title, body))
}

/// Render one section: blank line, `# ` heading, blank line, body,
/// page-break marker.
pub fn render_section(title: &str, body: &str) -> String {
    format!("\n# {title}\n{body}{PAGE_BREAK}")
}

/// Concatenate rendered sections, in order, into the document text.
///
/// The optional preamble is prepended once, before the first section. It is
/// treated as an opaque literal — never parsed, never rewritten here.
pub fn assemble(preamble: Option<&str>, sections: &[(String, String)]) -> String {
    let mut document = String::new();
    if let Some(p) = preamble {
        document.push_str(p);
    }
    for (title, body) in sections {
        document.push_str(&render_section(title, body));
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_title_and_body() {
        let (title, body) = split_front_matter("intro", "---\ntitle: Intro\n---\nHello world").unwrap();
        assert_eq!(title, "Intro");
        assert_eq!(body, "Hello world");
    }

    #[test]
    fn title_whitespace_trimmed() {
        let (title, _) = split_front_matter("x", "---\ntitle:   Spaced Out  \n---\n").unwrap();
        assert_eq!(title, "Spaced Out");
    }

    #[test]
    fn title_line_without_label_kept_trimmed() {
        // The label strip is a prefix match; a bare second line is used as-is.
        let (title, _) = split_front_matter("x", "---\n  Standalone Title \n---\n").unwrap();
        assert_eq!(title, "Standalone Title");
    }

    #[test]
    fn label_only_stripped_at_line_start() {
        let (title, _) = split_front_matter("x", "---\ntitle: About title: syntax\n---\n").unwrap();
        assert_eq!(title, "About title: syntax");
    }

    #[test]
    fn exactly_three_lines_gives_empty_body() {
        let (title, body) = split_front_matter("x", "---\ntitle: Bare\n---").unwrap();
        assert_eq!(title, "Bare");
        assert_eq!(body, "");
    }

    #[test]
    fn short_fragment_fails_fast() {
        let err = split_front_matter("stub", "---\ntitle: Oops").unwrap_err();
        match err {
            BookError::MalformedFragment { name, lines } => {
                assert_eq!(name, "stub");
                assert_eq!(lines, 2);
            }
            other => panic!("expected MalformedFragment, got: {other}"),
        }
    }

    #[test]
    fn crlf_body_preserved() {
        let raw = "---\ntitle: Win\n---\nline one\r\nline two";
        let (title, body) = split_front_matter("x", raw).unwrap();
        assert_eq!(title, "Win");
        assert_eq!(body, "line one\r\nline two");
    }

    #[test]
    fn section_layout() {
        let s = render_section("Intro", "Hello world");
        assert_eq!(
            s,
            "\n# Intro\nHello world\n<div class=\"page-break\"></div>\n"
        );
    }

    #[test]
    fn assemble_preserves_order() {
        let sections = vec![
            ("Zulu".to_string(), "z".to_string()),
            ("Alpha".to_string(), "a".to_string()),
        ];
        let doc = assemble(None, &sections);
        let zulu = doc.find("# Zulu").unwrap();
        let alpha = doc.find("# Alpha").unwrap();
        assert!(zulu < alpha, "configured order must win over any other order");
        assert_eq!(doc.matches(PAGE_BREAK).count(), 2);
    }

    #[test]
    fn assemble_prepends_preamble_once() {
        let sections = vec![("One".to_string(), "body".to_string())];
        let doc = assemble(Some("PREAMBLE\n"), &sections);
        assert!(doc.starts_with("PREAMBLE\n"));
        assert_eq!(doc.matches("PREAMBLE").count(), 1);
        // The preamble sits before the first heading.
        assert!(doc.find("PREAMBLE").unwrap() < doc.find("# One").unwrap());
    }

    #[test]
    fn assemble_empty_sections_is_just_preamble() {
        assert_eq!(assemble(Some("P"), &[]), "P");
        assert_eq!(assemble(None, &[]), "");
    }
}
