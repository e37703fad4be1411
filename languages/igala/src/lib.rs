pub mod dictionary;
pub mod loader;
pub mod parser;

pub use dictionary::IgalaDictionary;
pub use loader::IgalaLoader;
pub use parser::{LineKind, ParseReport, classify_line, parse, parse_with_report};
