use std::path::Path;

use idict_core::DatasetLoadError;
use idict_lang_igala::{IgalaDictionary, IgalaLoader};

/// Shared, read-only state for all request handlers.
///
/// A dataset that failed to load is kept as an error so every query can
/// report it instead of answering with an empty list.
pub struct AppState {
    dictionary: Result<IgalaDictionary, DatasetLoadError>,
}

impl AppState {
    /// Read the dataset once; failures are logged and recovered into state
    pub fn load(path: &Path) -> Self {
        let dictionary = IgalaLoader::load_from_file(path);
        match &dictionary {
            Ok(dict) if dict.is_empty() => {
                tracing::warn!("Dataset {} has no entries", path.display());
            }
            Ok(_) => {}
            Err(e) => tracing::error!("Dictionary unavailable: {e}"),
        }
        Self { dictionary }
    }

    pub fn with_dictionary(dictionary: IgalaDictionary) -> Self {
        Self {
            dictionary: Ok(dictionary),
        }
    }

    pub fn dictionary(&self) -> Result<&IgalaDictionary, &DatasetLoadError> {
        self.dictionary.as_ref()
    }
}
