//! Occurrence matching inside text runs
//!
//! Matching is exact and case-sensitive. Matches never overlap: scanning
//! resumes after the end of each match.

mod line_index;

pub use line_index::LineIndex;

use crate::report::Occurrence;
use crate::tree_parser::TextRun;

/// Delimiters placed around the match in a preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub open: String,
    pub close: String,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            open: "{{".to_string(),
            close: "}}".to_string(),
        }
    }
}

impl Highlight {
    #[must_use]
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{text}{}", self.open, self.close)
    }
}

/// Byte offsets of every non-overlapping match, left to right
///
/// An empty needle never matches.
pub fn match_offsets<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    (!needle.is_empty())
        .then(|| haystack.match_indices(needle).map(|(offset, _)| offset))
        .into_iter()
        .flatten()
}

/// Find every occurrence of `needle` in `run`
///
/// `lines` must index the full file the run was parsed from.
#[must_use]
pub fn find_occurrences(
    run: &TextRun<'_>,
    needle: &str,
    lines: &LineIndex<'_>,
    highlight: &Highlight,
) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();
    let mut newlines = 0;
    let mut scanned = 0;

    for offset in match_offsets(run.value, needle) {
        newlines += count_newlines(&run.value[scanned..offset]);
        scanned = offset;

        let line_number = run.start_line + newlines;
        debug_assert_eq!(lines.line_of(run.start_offset + offset), line_number);

        occurrences.push(Occurrence {
            line_number,
            preview: render_preview(lines, line_number, needle, highlight),
        });
    }

    occurrences
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

/// Render the source line of a match with the first occurrence on that
/// line delimited
///
/// Only the first line of a multi-line needle is delimited.
fn render_preview(
    lines: &LineIndex<'_>,
    line_number: usize,
    needle: &str,
    highlight: &Highlight,
) -> String {
    let Some(line) = lines.line(line_number) else {
        return String::new();
    };

    let segment = needle.split('\n').next().unwrap_or_default();
    let segment = segment.strip_suffix('\r').unwrap_or(segment);

    if segment.is_empty() {
        return line.to_string();
    }

    line.replacen(segment, &highlight.wrap(segment), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_at(value: &str, start_line: usize, start_offset: usize) -> TextRun<'_> {
        TextRun {
            value,
            start_line,
            start_column: 1,
            start_offset,
        }
    }

    fn reference_count(haystack: &str, needle: &str) -> usize {
        if needle.is_empty() {
            return 0;
        }
        let mut count = 0;
        let mut rest = haystack;
        while let Some(pos) = rest.find(needle) {
            count += 1;
            rest = &rest[pos + needle.len()..];
        }
        count
    }

    #[test]
    fn test_non_overlapping_matches() {
        let offsets: Vec<usize> = match_offsets("ababab", "ab").collect();
        assert_eq!(offsets, vec![0, 2, 4]);

        let offsets: Vec<usize> = match_offsets("aaaa", "aa").collect();
        assert_eq!(offsets, vec![0, 2]);
    }

    #[test]
    fn test_empty_needle_never_matches() {
        assert_eq!(match_offsets("anything", "").count(), 0);
        assert_eq!(match_offsets("", "").count(), 0);
    }

    #[test]
    fn test_counts_agree_with_reference() {
        let cases = [
            ("aaaaa", "aa"),
            ("abcabcab", "abc"),
            ("Save Save  Save", "Save"),
            ("save", "Save"),
            ("\u{e9}t\u{e9} \u{e9}t\u{e9}", "\u{e9}t"),
            ("x\ny\nx", "\nx"),
            ("", "a"),
        ];

        for (haystack, needle) in cases {
            assert_eq!(
                match_offsets(haystack, needle).count(),
                reference_count(haystack, needle),
                "{needle:?} in {haystack:?}"
            );
        }
    }

    #[test]
    fn test_single_line_preview() {
        let content = "<div>Welcome home</div>";
        let lines = LineIndex::new(content);
        let run = run_at("Welcome home", 1, 5);

        let found = find_occurrences(&run, "home", &lines, &Highlight::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line_number, 1);
        assert_eq!(found[0].preview, "<div>Welcome {{home}}</div>");
    }

    #[test]
    fn test_line_numbers_follow_newlines_in_run() {
        let content = "<p>\n  first Buy\n  second Buy\n</p>";
        let lines = LineIndex::new(content);
        let run = run_at("\n  first Buy\n  second Buy\n", 1, 3);

        let found = find_occurrences(&run, "Buy", &lines, &Highlight::default());
        let numbers: Vec<usize> = found.iter().map(|o| o.line_number).collect();
        assert_eq!(numbers, vec![2, 3]);
        assert_eq!(found[0].preview, "  first {{Buy}}");
        assert_eq!(found[1].preview, "  second {{Buy}}");
    }

    #[test]
    fn test_repeats_on_a_line_share_first_occurrence_preview() {
        let content = "<b>ab ab</b>";
        let lines = LineIndex::new(content);
        let run = run_at("ab ab", 1, 3);

        let found = find_occurrences(&run, "ab", &lines, &Highlight::default());
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].preview, "<b>{{ab}} ab</b>");
        assert_eq!(found[1].preview, "<b>{{ab}} ab</b>");
    }

    #[test]
    fn test_multiline_needle_delimits_first_segment() {
        let content = "<p>\n  Sign up\n  today\n</p>";
        let lines = LineIndex::new(content);
        let run = run_at("\n  Sign up\n  today\n", 1, 3);

        let found = find_occurrences(&run, "Sign up\n  today", &lines, &Highlight::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line_number, 2);
        assert_eq!(found[0].preview, "  {{Sign up}}");
    }

    #[test]
    fn test_custom_highlight() {
        let content = "<i>Go now</i>";
        let lines = LineIndex::new(content);
        let run = run_at("Go now", 1, 3);
        let highlight = Highlight {
            open: "[[".to_string(),
            close: "]]".to_string(),
        };

        let found = find_occurrences(&run, "now", &lines, &highlight);
        assert_eq!(found[0].preview, "<i>Go [[now]]</i>");
    }

    #[test]
    fn test_crlf_preview_has_no_carriage_return() {
        let content = "<p>\r\n  Hello\r\n</p>";
        let lines = LineIndex::new(content);
        let run = run_at("\r\n  Hello\r\n", 1, 3);

        let found = find_occurrences(&run, "Hello", &lines, &Highlight::default());
        assert_eq!(found[0].line_number, 2);
        assert_eq!(found[0].preview, "  {{Hello}}");
    }

    #[test]
    fn test_empty_needle_yields_nothing() {
        let lines = LineIndex::new("<p>text</p>");
        let run = run_at("text", 1, 3);
        assert!(find_occurrences(&run, "", &lines, &Highlight::default()).is_empty());
    }
}
