//! Directive rewriting: custom callout markers → HTML container markup.
//!
//! Source chapters use a compact callout syntax borrowed from Zenn-style
//! markdown:
//!
//! ```text
//! :::message alert
//! Danger!
//! :::
//! ```
//!
//! The PDF engine only understands HTML containers, so the markers are
//! rewritten into `<div>` tags with alert styling before rendering.
//!
//! ## Rule Order
//!
//! The three substitutions are literal and global, and their order is
//! load-bearing: the alert variant must be consumed before the plain
//! `:::message` rule can run (the alert marker *contains* the plain
//! marker), and both opening rules must run before the bare `:::` rule
//! (an opening marker *contains* the closing marker). The rewriter does
//! not validate balance — malformed input produces malformed HTML, exactly
//! as it would in the source.

/// Opening marker for a danger callout.
pub const DIRECTIVE_ALERT: &str = ":::message alert";
/// Opening marker for an info callout.
pub const DIRECTIVE_MESSAGE: &str = ":::message";
/// Closing marker for any callout.
pub const DIRECTIVE_CLOSE: &str = ":::";

/// Opening tag emitted for `:::message alert`.
pub const HTML_ALERT_OPEN: &str = "<div class=\"alert alert-danger\" role=\"alert\">";
/// Opening tag emitted for `:::message`.
pub const HTML_MESSAGE_OPEN: &str = "<div class=\"alert alert-info\" role=\"alert\">";
/// Closing tag emitted for `:::`.
pub const HTML_CLOSE: &str = "</div>";

/// Apply the three ordered, global, literal substitutions over the
/// assembled document text.
pub fn rewrite_directives(input: &str) -> String {
    input
        .replace(DIRECTIVE_ALERT, HTML_ALERT_OPEN)
        .replace(DIRECTIVE_MESSAGE, HTML_MESSAGE_OPEN)
        .replace(DIRECTIVE_CLOSE, HTML_CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_block() {
        let input = ":::message alert\nDanger!\n:::";
        assert_eq!(
            rewrite_directives(input),
            "<div class=\"alert alert-danger\" role=\"alert\">\nDanger!\n</div>"
        );
    }

    #[test]
    fn info_block() {
        let input = ":::message\nHeads up.\n:::";
        assert_eq!(
            rewrite_directives(input),
            "<div class=\"alert alert-info\" role=\"alert\">\nHeads up.\n</div>"
        );
    }

    #[test]
    fn alert_never_matched_as_info() {
        // The alert marker contains the plain marker; rule order keeps the
        // danger styling intact.
        let out = rewrite_directives(":::message alert\nx\n:::");
        assert!(out.contains("alert-danger"));
        assert!(!out.contains("alert-info"));
    }

    #[test]
    fn opening_markers_never_matched_as_close() {
        let out = rewrite_directives(":::message\nx\n:::");
        assert_eq!(out.matches("</div>").count(), 1);
        assert_eq!(out.matches("<div").count(), 1);
    }

    #[test]
    fn mixed_blocks_in_one_document() {
        let input = "text\n:::message alert\nA\n:::\nmore\n:::message\nB\n:::\ntail";
        let out = rewrite_directives(input);
        assert_eq!(out.matches("alert-danger").count(), 1);
        assert_eq!(out.matches("alert-info").count(), 1);
        assert_eq!(out.matches("</div>").count(), 2);
        assert!(!out.contains(":::"));
    }

    #[test]
    fn idempotent_on_clean_text() {
        let clean = "# Title\n\n<div class=\"alert alert-info\" role=\"alert\">\nx\n</div>\n";
        assert_eq!(rewrite_directives(clean), clean);
    }

    #[test]
    fn no_balance_validation() {
        // An unmatched close still rewrites; balance is the author's problem.
        assert_eq!(rewrite_directives("dangling\n:::"), "dangling\n</div>");
    }
}
