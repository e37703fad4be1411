use crate::types::{DictionaryEntry, QueryDescription};

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// Entry whose headword matches `headword` exactly
    fn lookup_exact(&self, headword: &str) -> Option<&DictionaryEntry>;

    /// Filter entries by letter bucket and/or search term
    fn search(&self, desc: &QueryDescription) -> Vec<DictionaryEntry>;

    /// Initials present in the dictionary, ascending
    fn available_letters(&self) -> Vec<char>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub name: String,
    /// Headword language (ISO 639 code)
    pub language: String,
    /// Gloss language (ISO 639 code)
    pub gloss_language: String,
    pub entry_count: usize,
}
