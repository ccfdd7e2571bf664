use crate::error::SplitError;
use std::path::PathBuf;

/// The file the binary reads, relative to the working directory.
pub const DEFAULT_INPUT: &str = "hold";
pub const DEFAULT_DELIMITER: &str = "_____";
pub const DEFAULT_EXTENSION: &str = "txt";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "holdsplit_lib=info"
}

/// How the partner line of a matched line is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartnerPolicy {
    /// The line physically following the matched line.
    #[default]
    Position,
    /// The line following the first line with the same text as the matched line.
    /// Duplicated matched lines all share the partner of their first copy.
    FirstOccurrence,
}

/// What happens with blank entries of an identifier list, e.g. `1, ,2` or `1,2,`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyIdentifierPolicy {
    /// Blank identifiers are written to a file named only by the extension (`.txt`).
    #[default]
    Keep,
    Skip,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub delimiter: String,
    pub extension: String,
    pub partner: PartnerPolicy,
    pub empty_identifiers: EmptyIdentifierPolicy,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            delimiter: DEFAULT_DELIMITER.to_owned(),
            extension: DEFAULT_EXTENSION.to_owned(),
            partner: PartnerPolicy::default(),
            empty_identifiers: EmptyIdentifierPolicy::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.delimiter.is_empty() {
            return Err(SplitError::EmptyDelimiter);
        }
        Ok(())
    }
}
