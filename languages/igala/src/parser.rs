//! Parser for the plain-text Igala dictionary document.
//!
//! The document is a sequence of entries shaped like
//!
//! ```text
//! A
//! Abo (yam)
//! A root vegetable, boiled or pounded.
//! ____________
//! ```
//!
//! Each line is classified on its own, then folded into entries by a two
//! state accumulator.

use idict_core::DictionaryEntry;
use once_cell::sync::Lazy;
use regex::Regex;

/// `HEADWORD (GLOSS)`; the gloss ends at the first closing parenthesis
static HEADWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][A-Za-z0-9_-]+) \(([^)]+)\)").expect("valid regex"));

const SEPARATOR: &str = "_____";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank line, alphabetic section header or separator rule
    Skip,
    Headword { headword: &'a str, gloss: &'a str },
    Continuation(&'a str),
}

/// Classify a single source line. Skip rules are checked before the
/// headword pattern.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim();

    if line.is_empty() || is_section_header(line) || line.contains(SEPARATOR) {
        return LineKind::Skip;
    }

    match HEADWORD_RE.captures(line) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(headword), Some(gloss)) => LineKind::Headword {
                headword: headword.as_str(),
                gloss: gloss.as_str(),
            },
            _ => LineKind::Continuation(line),
        },
        None => LineKind::Continuation(line),
    }
}

fn is_section_header(line: &str) -> bool {
    let mut chars = line.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
}

#[derive(Debug, Default)]
enum Accumulator {
    #[default]
    NoOpenEntry,
    OpenEntry(DictionaryEntry),
}

impl Accumulator {
    /// Advance by one classified line, returning any entry it closed
    fn feed(self, kind: LineKind<'_>) -> (Self, Option<DictionaryEntry>) {
        match (self, kind) {
            (state, LineKind::Skip) => (state, None),
            (state, LineKind::Headword { headword, gloss }) => {
                let next = Self::OpenEntry(DictionaryEntry::new(headword, gloss));
                (next, state.finish())
            }
            (Self::OpenEntry(mut entry), LineKind::Continuation(text)) => {
                entry.push_description(text);
                (Self::OpenEntry(entry), None)
            }
            (Self::NoOpenEntry, LineKind::Continuation(_)) => (Self::NoOpenEntry, None),
        }
    }

    fn finish(self) -> Option<DictionaryEntry> {
        match self {
            Self::NoOpenEntry => None,
            Self::OpenEntry(entry) => Some(entry),
        }
    }

    fn is_open(&self) -> bool {
        matches!(self, Self::OpenEntry(_))
    }
}

/// Entries plus counters describing what the parser dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub entries: Vec<DictionaryEntry>,
    /// Total lines read
    pub lines: usize,
    /// Blank, header and separator lines
    pub skipped: usize,
    /// Text lines seen before the first headword
    pub orphaned: usize,
}

/// Parse a dictionary document into entries, in source order
pub fn parse(raw: &str) -> Vec<DictionaryEntry> {
    parse_with_report(raw).entries
}

pub fn parse_with_report(raw: &str) -> ParseReport {
    let mut report = ParseReport::default();
    let mut state = Accumulator::default();

    for line in raw.split('\n') {
        report.lines += 1;

        let kind = classify_line(line);
        match kind {
            LineKind::Skip => report.skipped += 1,
            LineKind::Continuation(_) if !state.is_open() => report.orphaned += 1,
            _ => {}
        }

        let (next, closed) = state.feed(kind);
        state = next;
        report.entries.extend(closed);
    }

    report.entries.extend(state.finish());
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_skip_lines() {
        assert_eq!(classify_line(""), LineKind::Skip);
        assert_eq!(classify_line("   \t "), LineKind::Skip);
        assert_eq!(classify_line("  B  "), LineKind::Skip);
        assert_eq!(classify_line("____________"), LineKind::Skip);
        assert_eq!(classify_line("see below _____ above"), LineKind::Skip);
    }

    #[test]
    fn classifies_headword_lines() {
        assert_eq!(
            classify_line("  Abo (yam)  "),
            LineKind::Headword { headword: "Abo", gloss: "yam" }
        );
        assert_eq!(
            classify_line("Ane-2 (land, earth)"),
            LineKind::Headword { headword: "Ane-2", gloss: "land, earth" }
        );
    }

    #[test]
    fn gloss_stops_at_first_closing_paren() {
        assert_eq!(
            classify_line("Ojo (God (the supreme) being)"),
            LineKind::Headword { headword: "Ojo", gloss: "God (the supreme" }
        );
    }

    #[test]
    fn near_misses_are_continuations() {
        // lower-case start
        assert_eq!(classify_line("abo (yam)"), LineKind::Continuation("abo (yam)"));
        // single-letter headword
        assert_eq!(classify_line("A (one)"), LineKind::Continuation("A (one)"));
        // no space before the parenthesis
        assert_eq!(classify_line("Abo(yam)"), LineKind::Continuation("Abo(yam)"));
        // empty gloss
        assert_eq!(classify_line("Abo ()"), LineKind::Continuation("Abo ()"));
        // lowercase single letter is not a section header
        assert_eq!(classify_line("a"), LineKind::Continuation("a"));
    }

    #[test]
    fn parses_two_entries() {
        let entries = parse("Abo (yam)\nA root vegetable.\n\nEba (food)\nMade from cassava.");

        assert_eq!(
            entries,
            vec![
                DictionaryEntry::new("Abo", "yam").with_description("A root vegetable."),
                DictionaryEntry::new("Eba", "food").with_description("Made from cassava."),
            ]
        );
    }

    #[test]
    fn section_header_between_entries_is_skipped() {
        let entries = parse("Abo (yam)\nA tuber.\nA\nEba (food)\nSwallow.");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "A tuber.");
        assert_eq!(entries[1].description, "Swallow.");
    }

    #[test]
    fn headword_closes_empty_entry() {
        let entries = parse("Abo (yam)\nEba (food)\nMade from cassava.");

        assert_eq!(entries[0], DictionaryEntry::new("Abo", "yam"));
        assert_eq!(entries[1].description, "Made from cassava.");
    }

    #[test]
    fn description_joins_lines_with_single_spaces() {
        let entries = parse("Abo (yam)\n  A root  \n\n   \nvegetable.\r\n____\n");
        // "____" is only four underscores, so it is text
        assert_eq!(entries[0].description, "A root vegetable. ____");
        assert!(!entries[0].description.contains('\n'));
        assert!(!entries[0].description.contains('\r'));
    }

    #[test]
    fn text_after_gloss_is_not_captured() {
        let entries = parse("Abo (yam) noun\nA tuber.");
        assert_eq!(entries[0].gloss, "yam");
        assert_eq!(entries[0].description, "A tuber.");
    }

    #[test]
    fn report_counts_orphans_and_skips() {
        let report = parse_with_report("Igala Dictionary\nA\n\nAbo (yam)\nA tuber.");

        assert_eq!(report.lines, 5);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.orphaned, 1);
        assert_eq!(report.entries.len(), 1);
    }

    #[test]
    fn empty_input_has_no_entries() {
        assert!(parse("").is_empty());
        assert!(parse("\n\nA\n_____\n").is_empty());
    }

    #[test]
    fn parsing_is_deterministic_and_ordered() {
        let raw = "Eba (food)\nX.\nAbo (yam)\nY.\nEba (food)\nZ.";
        let first = parse(raw);

        assert_eq!(first, parse(raw));
        let heads: Vec<_> = first.iter().map(|e| e.headword.as_str()).collect();
        assert_eq!(heads, ["Eba", "Abo", "Eba"]);
    }
}
