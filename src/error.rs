use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Could not read the input file {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line_number} matched but there is no following line to pair it with")]
    MissingPartnerLine { line_number: usize },

    #[error("Invalid identifier list at line {line_number}: {source}")]
    IdentifierList {
        line_number: usize,
        #[source]
        source: csv::Error,
    },

    #[error("Could not append to {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The delimiter must not be empty")]
    EmptyDelimiter,
}
