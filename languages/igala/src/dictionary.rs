use std::sync::Arc;

use idict_core::query::{self, find_headword};
use idict_core::{Dictionary, DictionaryEntry, DictionaryMetadata, QueryDescription};

/// Igala–English dictionary backed by an immutable, shareable entry list
#[derive(Debug, Clone)]
pub struct IgalaDictionary {
    entries: Arc<[DictionaryEntry]>,
}

impl IgalaDictionary {
    pub fn new(entries: Vec<DictionaryEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for IgalaDictionary {
    fn lookup_exact(&self, headword: &str) -> Option<&DictionaryEntry> {
        find_headword(&self.entries, headword)
    }

    fn search(&self, desc: &QueryDescription) -> Vec<DictionaryEntry> {
        query::query(&self.entries, desc)
    }

    fn available_letters(&self) -> Vec<char> {
        query::available_letters(&self.entries)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "Igala Dictionary".to_string(),
            language: "ig".to_string(),
            gloss_language: "en".to_string(),
            entry_count: self.entries.len(),
        }
    }
}
