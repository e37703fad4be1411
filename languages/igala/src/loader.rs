use std::fs;
use std::path::Path;

use idict_core::{DatasetLoadError, DatasetWriteError, DictionaryEntry, ParseInputError};

use crate::dictionary::IgalaDictionary;
use crate::parser::{self, ParseReport};

pub struct IgalaLoader;

impl IgalaLoader {
    /// Read and parse the plain-text source document
    pub fn parse_source(path: &Path) -> Result<ParseReport, ParseInputError> {
        tracing::info!("Parsing dictionary source: {}", path.display());
        let raw = fs::read_to_string(path).map_err(|source| ParseInputError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let report = parser::parse_with_report(&raw);
        tracing::info!(
            lines = report.lines,
            skipped = report.skipped,
            orphaned = report.orphaned,
            "Parsed {} dictionary entries",
            report.entries.len()
        );
        if report.orphaned > 0 {
            tracing::warn!(
                "Discarded {} line(s) appearing before the first headword",
                report.orphaned
            );
        }
        Ok(report)
    }

    /// Write entries as a pretty-printed JSON array, creating parent
    /// directories as needed. Nothing is written if serialization fails.
    pub fn write_dataset(entries: &[DictionaryEntry], path: &Path) -> Result<(), DatasetWriteError> {
        let json = serde_json::to_string_pretty(entries)?;

        let write_err = |source: std::io::Error| DatasetWriteError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, json).map_err(write_err)?;

        tracing::info!("Wrote {} entries to {}", entries.len(), path.display());
        Ok(())
    }

    /// Load a parsed JSON dataset
    pub fn load_from_file(path: &Path) -> Result<IgalaDictionary, DatasetLoadError> {
        tracing::info!("Loading dictionary dataset from file: {}", path.display());
        let json = fs::read_to_string(path).map_err(|source| DatasetLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<DictionaryEntry> =
            serde_json::from_str(&json).map_err(|source| DatasetLoadError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!("Loaded {} dictionary entries from file", entries.len());
        Ok(IgalaDictionary::new(entries))
    }
}

#[cfg(test)]
mod tests {
    use idict_core::Dictionary;

    use super::*;

    #[test]
    fn parse_then_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("Igala_Dictionary_App.txt");
        let dataset = dir.path().join("public").join("dictionary-data.json");
        fs::write(&source, "A\nAbo (yam)\nA root vegetable.\n\nEba (food)\nMade from cassava.\n")
            .unwrap();

        let report = IgalaLoader::parse_source(&source).unwrap();
        IgalaLoader::write_dataset(&report.entries, &dataset).unwrap();
        let dict = IgalaLoader::load_from_file(&dataset).unwrap();

        assert_eq!(dict.metadata().entry_count, 2);
        assert_eq!(dict.entries(), report.entries.as_slice());
    }

    #[test]
    fn written_dataset_uses_source_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("out.json");
        let entries = vec![DictionaryEntry::new("Abo", "yam")];

        IgalaLoader::write_dataset(&entries, &dataset).unwrap();
        let written = fs::read_to_string(&dataset).unwrap();

        assert!(written.starts_with("[\n  {"));
        assert!(written.contains(r#""igalaWord": "Abo""#));
        assert!(written.contains(r#""englishMeaning": "yam""#));
        assert!(written.contains(r#""description": """#));
    }

    #[test]
    fn missing_source_is_parse_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = IgalaLoader::parse_source(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ParseInputError::Read { .. }));
    }

    #[test]
    fn missing_dataset_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = IgalaLoader::load_from_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, DatasetLoadError::Read { .. }));
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("bad.json");
        fs::write(&dataset, r#"{"entries": []}"#).unwrap();

        let err = IgalaLoader::load_from_file(&dataset).unwrap_err();
        assert!(matches!(err, DatasetLoadError::Malformed { .. }));
    }
}
