/// Returns the part of `line` between the second and the third occurrence of `delimiter`,
/// or up to the end of the line if there is no third occurrence.
///
/// Lines with fewer than two occurrences don't carry an identifier list.
/// ```
/// use holdsplit_lib::line::identifier_segment;
///
/// assert_eq!(identifier_segment("foo_____bar_____1,2", "_____"), Some("1,2"));
/// assert_eq!(identifier_segment("a_____b_____1_____2", "_____"), Some("1"));
/// assert_eq!(identifier_segment("a_____b_____", "_____"), Some(""));
/// assert_eq!(identifier_segment("foo_____bar", "_____"), None);
/// assert_eq!(identifier_segment("foo bar", "_____"), None);
/// ```
pub fn identifier_segment<'a>(line: &'a str, delimiter: &str) -> Option<&'a str> {
    debug_assert!(!delimiter.is_empty());
    if !line.contains(delimiter) {
        return None;
    }
    line.split(delimiter).nth(2)
}

/// Splits `text` into lines, accepting `\n`, `\r\n` and a lone `\r` as line breaks.
///
/// Every line keeps its break, normalized to `\n`. Only a last line that the text doesn't
/// terminate comes without one, so two lines compare equal exactly when the text and the
/// presence of a line break match.
/// ```
/// use holdsplit_lib::line::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a\n", "b\n", "c\n", "d"]);
/// assert_eq!(split_lines("a\n\n"), vec!["a\n", "\n"]);
/// assert!(split_lines("").is_empty());
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(end) = rest.find(&['\r', '\n'][..]) {
        let break_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        lines.push(format!("{}\n", &rest[..end]));
        rest = &rest[end + break_len..];
    }
    if !rest.is_empty() {
        lines.push(rest.to_owned());
    }
    lines
}
