use csv::{ReaderBuilder, StringRecord, Terminator, Trim};
use std::fmt::{Display, Formatter};

/// A token from the identifier list of a matched line. It names the output file.
/// It is used verbatim, so it may be empty or contain characters a file system rejects.
#[derive(Debug, Clone, Ord, Eq, PartialOrd, PartialEq, Hash)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(token: impl Into<String>) -> Identifier {
        Identifier(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Name of the output file for this identifier
    /// ```
    /// use holdsplit_lib::identifier::Identifier;
    ///
    /// assert_eq!(Identifier::new("42").file_name("txt"), "42.txt");
    /// assert_eq!(Identifier::new("").file_name("txt"), ".txt");
    /// ```
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Splits the identifier list of a matched line on commas and trims every entry.
///
/// Quotes have no special meaning and blank entries are kept, so the result has
/// exactly one more entry than the list has commas:
/// ```
/// use holdsplit_lib::identifier::{parse_identifiers, Identifier};
///
/// let ids = parse_identifiers(" 1, ,2 ").unwrap();
/// assert_eq!(ids, vec![Identifier::new("1"), Identifier::new(""), Identifier::new("2")]);
///
/// let ids = parse_identifiers("\"7\",8,").unwrap();
/// assert_eq!(ids, vec![Identifier::new("\"7\""), Identifier::new("8"), Identifier::new("")]);
///
/// // an empty list still names one (empty) identifier
/// assert_eq!(parse_identifiers("  ").unwrap(), vec![Identifier::new("")]);
/// ```
pub fn parse_identifiers(segment: &str) -> Result<Vec<Identifier>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(segment.trim().as_bytes());

    let mut record = StringRecord::new();
    if !rdr.read_record(&mut record)? {
        return Ok(vec![Identifier::new("")]);
    }
    Ok(record.iter().map(Identifier::new).collect())
}
