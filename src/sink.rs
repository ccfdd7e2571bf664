use crate::error::SplitError;
use crate::identifier::Identifier;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// A matched line and its partner line, both already trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub matched: &'a str,
    pub partner: &'a str,
}

/// Destination of the records, one append per identifier occurrence.
pub trait RecordSink {
    fn append(&mut self, identifier: &Identifier, record: &Record) -> Result<(), SplitError>;
}

/// Writes the records of each identifier into `<dir>/<identifier>.<extension>`.
///
/// The file is opened, appended to and closed for every record; no handle is kept
/// between two appends.
pub struct DirectorySink {
    dir: PathBuf,
    extension: String,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> DirectorySink {
        DirectorySink {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn path_for(&self, identifier: &Identifier) -> PathBuf {
        self.dir.join(identifier.file_name(&self.extension))
    }
}

impl RecordSink for DirectorySink {
    fn append(&mut self, identifier: &Identifier, record: &Record) -> Result<(), SplitError> {
        let path = self.path_for(identifier);
        tracing::trace!(path = %path.display(), "appending record");

        let payload = format!("{}\n{}\n", record.matched, record.partner);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .and_then(|mut file| file.write_all(payload.as_bytes()));

        result.map_err(|source| SplitError::WriteOutput { path, source })
    }
}
