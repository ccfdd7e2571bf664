pub mod config;
pub mod error;
pub mod identifier;
pub mod line;
pub mod sink;

use crate::config::{Config, EmptyIdentifierPolicy, PartnerPolicy};
use crate::error::SplitError;
use crate::identifier::{parse_identifiers, Identifier};
use crate::line::{identifier_segment, split_lines};
use crate::sink::{DirectorySink, Record, RecordSink};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A type definition for HashMap, so it is easy to replace the implementation if needed.
type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// What a run did: how many lines it saw and how many records went to each identifier.
#[derive(Debug, Default)]
pub struct Summary {
    pub lines_read: usize,
    pub matched_lines: usize,
    records: HashMap<Identifier, usize>,
}

impl Summary {
    /// Number of distinct identifiers that received at least one record.
    pub fn identifiers_touched(&self) -> usize {
        self.records.len()
    }

    pub fn records_for(&self, identifier: &str) -> usize {
        self.records
            .get(&Identifier::new(identifier))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_records(&self) -> usize {
        self.records.values().sum()
    }

    /// The per-identifier record counts, ordered by identifier so reports are stable.
    pub fn sorted(&self) -> Vec<(&Identifier, usize)> {
        let mut entries: Vec<(&Identifier, usize)> =
            self.records.iter().map(|(id, count)| (id, *count)).collect();
        entries.sort();
        entries
    }

    fn record_written(&mut self, identifier: &Identifier) {
        *self.records.entry(identifier.clone()).or_insert(0) += 1;
    }
}

/// Reads `config.input_path` and appends the records of every matched line into
/// `<config.output_dir>/<identifier>.<config.extension>`.
pub fn run(config: &Config) -> Result<Summary, SplitError> {
    tracing::info!(input = %config.input_path.display(), "splitting input");

    let file = File::open(&config.input_path).map_err(|source| SplitError::ReadInput {
        path: config.input_path.clone(),
        source,
    })?;
    let mut sink = DirectorySink::new(&config.output_dir, &config.extension);
    let summary = process_input(&config.input_path, file, config, &mut sink)?;

    tracing::info!(
        lines = summary.lines_read,
        matched = summary.matched_lines,
        identifiers = summary.identifiers_touched(),
        "done"
    );
    for (identifier, count) in summary.sorted() {
        tracing::debug!(identifier = %identifier, records = count, "identifier summary");
    }
    Ok(summary)
}

/// Reads the whole `input` into memory, splits it with [`split_lines`] and runs
/// [`process_lines`] over the result. `path` only names the input in errors.
pub fn process_input(
    path: &Path,
    mut input: impl Read,
    config: &Config,
    sink: &mut impl RecordSink,
) -> Result<Summary, SplitError> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(|source| SplitError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
    process_lines(&split_lines(&text), config, sink)
}

/// Goes over the lines in order and, for every line with at least two delimiters, appends the
/// line and its partner line to the sink once per entry of the line's identifier list.
///
/// The lines keep their line break, as [`split_lines`] returns them; it is trimmed away
/// before anything is written.
///
/// A matched line without a partner line stops the processing before anything is written
/// for that line. Records written for earlier lines are kept.
pub fn process_lines(
    lines: &[String],
    config: &Config,
    sink: &mut impl RecordSink,
) -> Result<Summary, SplitError> {
    config.validate()?;

    let first_seen = match config.partner {
        PartnerPolicy::FirstOccurrence => Some(first_positions(lines)),
        PartnerPolicy::Position => None,
    };

    let mut summary = Summary {
        lines_read: lines.len(),
        ..Summary::default()
    };
    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        let Some(segment) = identifier_segment(line, &config.delimiter) else {
            continue;
        };

        let position = match &first_seen {
            Some(positions) => positions[line.as_str()],
            None => index,
        };
        let partner = lines
            .get(position + 1)
            .ok_or(SplitError::MissingPartnerLine { line_number })?;

        let mut identifiers = parse_identifiers(segment)
            .map_err(|source| SplitError::IdentifierList { line_number, source })?;
        if config.empty_identifiers == EmptyIdentifierPolicy::Skip {
            identifiers.retain(|id| !id.is_empty());
        }
        tracing::debug!(
            line_number,
            identifiers = identifiers.len(),
            "matched line"
        );

        let record = Record {
            matched: line.trim(),
            partner: partner.trim(),
        };
        for identifier in identifiers.iter() {
            sink.append(identifier, &record)?;
            summary.record_written(identifier);
        }
        summary.matched_lines += 1;
    }

    Ok(summary)
}

/// Index of the first line having the given text, for every distinct line text.
/// The line break is part of the text, so an unterminated last line only equals itself.
fn first_positions(lines: &[String]) -> HashMap<&str, usize> {
    let mut positions: HashMap<&str, usize> = HashMap::default();
    for (index, line) in lines.iter().enumerate() {
        positions.entry(line.as_str()).or_insert(index);
    }
    positions
}
