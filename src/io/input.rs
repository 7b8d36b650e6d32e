use std::io::BufRead;

use crate::errors::InputError;

/// Parse one line of input. Surrounding whitespace is ignored.
pub fn parse_value(text: &str, line: usize) -> Result<i64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed
        .parse::<i64>()
        .map_err(|source| InputError::NotAnInteger {
            line,
            text: trimmed.to_string(),
            source,
        })
}

/// Read and parse the first line of `reader`.
pub fn read_single<R: BufRead>(mut reader: R) -> Result<i64, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Empty);
    }
    parse_value(&line, 1)
}

/// Parse every non-blank line of `reader`, numbering lines from 1.
pub fn read_batch<R: BufRead>(reader: R) -> impl Iterator<Item = Result<i64, InputError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Ok(text) if text.trim().is_empty() => None,
            Ok(text) => Some(parse_value(&text, index + 1)),
            Err(e) => Some(Err(InputError::from(e))),
        })
}
