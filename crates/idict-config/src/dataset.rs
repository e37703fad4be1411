use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("public/dictionary-data.json")
}

fn default_source_path() -> PathBuf {
    PathBuf::from("Igala_Dictionary_App.txt")
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    /// Parsed JSON dataset served to queries
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Plain-text document the parser reads
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            source_path: default_source_path(),
        }
    }
}
