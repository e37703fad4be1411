use std::io::Write;
use std::path::Path;

use anyhow::Context;
use idict_core::{Dictionary, DictionaryEntry, QueryDescription};
use idict_lang_igala::{IgalaDictionary, IgalaLoader};

/// Letter bucket shown when no letter or term is given
pub const DEFAULT_LETTER: &str = "A";

/// Parse the source document and write the JSON dataset
pub fn parse(input: &Path, output: &Path, out: &mut impl Write) -> anyhow::Result<usize> {
    let report = IgalaLoader::parse_source(input)?;
    IgalaLoader::write_dataset(&report.entries, output)?;

    writeln!(out, "Parsed {} dictionary entries.", report.entries.len())?;
    Ok(report.entries.len())
}

pub fn load(dataset: &Path) -> anyhow::Result<IgalaDictionary> {
    IgalaLoader::load_from_file(dataset).context("dictionary unavailable")
}

/// List entries for a letter bucket, or search everything when a term is given
pub fn lookup(
    dict: &IgalaDictionary,
    letter: Option<&str>,
    term: Option<&str>,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let desc = QueryDescription::browse(letter.unwrap_or(DEFAULT_LETTER), term.unwrap_or(""));
    let entries = dict.search(&desc);
    tracing::debug!(?desc, "{} entries matched", entries.len());

    if entries.is_empty() {
        match desc.term_filter() {
            Some(term) => writeln!(out, "No words found matching \"{term}\"")?,
            None => writeln!(out, "No words found")?,
        }
    }
    for entry in &entries {
        writeln!(out, "{} ({})", entry.headword, entry.gloss)?;
    }
    Ok(entries.len())
}

pub fn letters(dict: &IgalaDictionary, out: &mut impl Write) -> anyhow::Result<()> {
    let letters: Vec<String> = dict.available_letters().iter().map(char::to_string).collect();
    writeln!(out, "{}", letters.join(" "))?;
    Ok(())
}

/// Print one entry's details. Returns false when the headword is unknown.
pub fn show(dict: &IgalaDictionary, headword: &str, out: &mut impl Write) -> anyhow::Result<bool> {
    match dict.lookup_exact(headword) {
        Some(entry) => {
            write_details(entry, out)?;
            Ok(true)
        }
        None => {
            writeln!(out, "No entry for \"{headword}\"")?;
            Ok(false)
        }
    }
}

fn write_details(entry: &DictionaryEntry, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", entry.headword)?;
    writeln!(out, "  English: {}", entry.gloss)?;
    if !entry.description.is_empty() {
        writeln!(out, "  {}", entry.description)?;
    }
    Ok(())
}
