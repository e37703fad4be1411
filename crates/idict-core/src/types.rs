use serde::{Deserialize, Serialize};

/// A single Igala headword with its English gloss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Igala word as written in the source, e.g. "Abo"
    #[serde(rename = "igalaWord")]
    pub headword: String,
    /// English meaning taken from the parenthesis after the headword
    #[serde(rename = "englishMeaning")]
    pub gloss: String,
    /// Continuation lines joined by single spaces, may be empty
    #[serde(default)]
    pub description: String,
}

impl DictionaryEntry {
    pub fn new(headword: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            headword: headword.into(),
            gloss: gloss.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a continuation line, separated by exactly one space
    pub fn push_description(&mut self, text: &str) {
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(text);
    }

    /// Upper-cased first character of the trimmed headword
    pub fn initial(&self) -> Option<char> {
        self.headword.trim().to_uppercase().chars().next()
    }
}

/// Letter bucket and/or free-text term used to narrow the entry list.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescription {
    #[serde(default)]
    pub letter: Option<String>,
    #[serde(default, rename = "q")]
    pub term: Option<String>,
}

impl QueryDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn letter(mut self, letter: impl Into<String>) -> Self {
        self.letter = Some(letter.into());
        self
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Presentation-layer policy: a non-blank term searches the whole
    /// dictionary and the letter bucket is ignored.
    pub fn browse(letter: &str, term: &str) -> Self {
        if term.trim().is_empty() {
            Self::new().letter(letter)
        } else {
            Self::new().term(term)
        }
    }

    pub fn letter_filter(&self) -> Option<&str> {
        self.letter.as_deref().filter(|l| !l.is_empty())
    }

    pub fn term_filter(&self) -> Option<&str> {
        self.term.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.letter_filter().is_none() && self.term_filter().is_none()
    }
}
