//! Text normalization applied to extracted resume text before any prompt is built.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Unicode whitespace plus the ASCII separator controls (FS/GS/RS/US),
/// which the original dashboard also treated as whitespace.
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x1C-\x1F]+").expect("valid whitespace regex"));

static NON_ASCII_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\x00-\x7F]+").expect("valid non-ascii regex"));

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("valid space regex"));

/// Collapses whitespace runs, replaces non-ASCII runs with a single space and trims.
///
/// Whitespace is collapsed before non-ASCII stripping. A replaced non-ASCII run that
/// borders a space would leave a double space behind, so space runs are collapsed once
/// more at the end. The result is pure ASCII, trimmed, with no repeated spaces, which
/// also makes the function idempotent.
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let ascii = NON_ASCII_RUN.replace_all(&collapsed, " ");
    let single_spaced = SPACE_RUN.replace_all(&ascii, " ");
    let cleaned = single_spaced.trim().to_string();
    debug!(
        "Text cleaning: {} chars in, {} chars out",
        text.chars().count(),
        cleaned.len()
    );
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(out: &str) {
        assert!(!out.contains("  "), "double space in {out:?}");
        assert!(out.is_ascii(), "non-ascii in {out:?}");
        assert_eq!(out, out.trim(), "untrimmed {out:?}");
    }

    #[test]
    fn test_collapses_newlines_and_tabs() {
        assert_eq!(clean_text("Hello\n\nWorld\t\t!"), "Hello World !");
    }

    #[test]
    fn test_trailing_non_ascii_becomes_space_then_trimmed() {
        assert_eq!(clean_text("café"), "caf");
    }

    #[test]
    fn test_non_ascii_inside_word_becomes_single_space() {
        assert_eq!(clean_text("café menu"), "caf menu");
        assert_eq!(clean_text("naïve résumé"), "na ve r sum");
    }

    #[test]
    fn test_non_ascii_run_collapses_to_one_space() {
        assert_eq!(clean_text("A→→→B"), "A B");
        assert_eq!(clean_text("Skills: Rust 🚀🚀 Go"), "Skills: Rust Go");
    }

    #[test]
    fn test_unicode_whitespace_is_collapsed() {
        assert_eq!(clean_text("a\u{00A0}\u{2003}b"), "a b");
        assert_eq!(clean_text("a\x1Fb"), "a b");
    }

    #[test]
    fn test_nbsp_next_to_non_ascii_runs() {
        // NBSP is both whitespace and non-ASCII: it collapses with its ASCII
        // neighbours first, then the surrounding non-ASCII run becomes one space.
        assert_eq!(clean_text("Rust\u{00A0}\u{00E9}\u{00E9} Go"), "Rust Go");
        assert_eq!(clean_text("a \u{00A0}\u{00E9}\u{00A0} b"), "a b");
        assert_eq!(clean_text("x\u{00E9}\u{00A0}\u{00A0}y"), "x y");
        assert_eq!(clean_text("\u{00E9}\u{00A0}\u{00E9}"), "");
        assert_eq!(clean_text("\u{00A0}\u{00E9}Lead\u{00E9} \u{00A0}"), "Lead");
        for sample in ["Rust\u{00A0}\u{00E9}\u{00E9} Go", "a \u{00A0}\u{00E9}\u{00A0} b"] {
            assert_invariants(&clean_text(sample));
        }
    }

    #[test]
    fn test_leading_and_trailing_whitespace_removed() {
        assert_eq!(clean_text("  \n\t John Doe \r\n "), "John Doe");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \n\t "), "");
        assert_eq!(clean_text("ééé"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Hello\n\nWorld\t\t!",
            "café au lait",
            "  Senior Engineer — Platform \u{2022} Rust\r\n",
            "plain ascii text",
            "",
        ];
        for sample in samples {
            let once = clean_text(sample);
            assert_eq!(clean_text(&once), once);
            assert_invariants(&once);
        }
    }
}
