use std::collections::BTreeSet;

use crate::types::{DictionaryEntry, QueryDescription};

/// Filter `entries` by letter bucket, then by search term.
///
/// Returns an order-preserving subsequence. With no filters set the whole
/// slice is returned.
pub fn query(entries: &[DictionaryEntry], desc: &QueryDescription) -> Vec<DictionaryEntry> {
    if desc.is_empty() {
        return entries.to_vec();
    }

    let letter = desc.letter_filter().map(str::to_uppercase);
    let term = desc.term_filter().map(str::to_lowercase);

    entries
        .iter()
        .filter(|entry| letter.as_deref().is_none_or(|l| starts_with_letter(entry, l)))
        .filter(|entry| term.as_deref().is_none_or(|t| contains_term(entry, t)))
        .cloned()
        .collect()
}

/// `letter` must already be upper-cased
fn starts_with_letter(entry: &DictionaryEntry, letter: &str) -> bool {
    entry.headword.trim().to_uppercase().starts_with(letter)
}

/// `term` must already be lower-cased
fn contains_term(entry: &DictionaryEntry, term: &str) -> bool {
    entry.headword.to_lowercase().contains(term)
        || entry.gloss.to_lowercase().contains(term)
        || entry.description.to_lowercase().contains(term)
}

/// Distinct upper-cased initials of all headwords, ascending
pub fn available_letters(entries: &[DictionaryEntry]) -> Vec<char> {
    entries
        .iter()
        .filter_map(DictionaryEntry::initial)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// First entry whose headword equals `headword` exactly
pub fn find_headword<'a>(
    entries: &'a [DictionaryEntry],
    headword: &str,
) -> Option<&'a DictionaryEntry> {
    entries.iter().find(|e| e.headword == headword)
}
