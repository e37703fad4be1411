pub mod dictionary;
pub mod error;
pub mod query;
pub mod types;

pub use dictionary::{Dictionary, DictionaryMetadata};
pub use error::{DatasetLoadError, DatasetWriteError, ParseInputError};
pub use types::{DictionaryEntry, QueryDescription};
