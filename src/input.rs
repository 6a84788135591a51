//! Parsing of raw console text into activity definitions.
//!
//! These helpers only check the shape of the text. Whether a predecessor
//! actually exists is decided by the registry.

use crate::activity::ActivityInput;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid name '{0}': use letters, digits or '_'")]
    InvalidName(String),

    #[error("invalid duration '{0}': expected a whole number")]
    InvalidDuration(String),

    #[error("invalid input '{0}': use only names, commas or '-'")]
    InvalidCharacters(String),

    #[error("invalid input '{0}': extra comma")]
    ExtraComma(String),

    #[error("expected '<name> <duration> [predecessors]'")]
    MissingField,
}

const NO_PREDECESSORS: [&str; 2] = ["-", "none"];

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn parse_name(raw: &str) -> Result<String, InputError> {
    let name = raw.trim();
    if name.is_empty() || !name.chars().all(is_name_char) {
        return Err(InputError::InvalidName(name.to_string()));
    }
    Ok(name.to_string())
}

/// Parses an integer duration. Negative values pass through so the registry
/// can reject them with its own error.
pub fn parse_duration(raw: &str) -> Result<i64, InputError> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_err(|_| InputError::InvalidDuration(raw.to_string()))
}

/// Splits a comma-separated predecessor list. `-`, `none` or blank mean no predecessors.
pub fn parse_predecessors(raw: &str) -> Result<Vec<String>, InputError> {
    let raw = raw.trim();
    if raw.is_empty()
        || NO_PREDECESSORS
            .iter()
            .any(|marker| raw.eq_ignore_ascii_case(marker))
    {
        return Ok(Vec::new());
    }

    if !raw
        .chars()
        .all(|c| is_name_char(c) || c == ',' || c == '-' || c.is_whitespace())
    {
        return Err(InputError::InvalidCharacters(raw.to_string()));
    }

    let mut names = Vec::new();
    for token in raw.split(',') {
        let token: String = token.chars().filter(|c| !c.is_whitespace()).collect();
        if token.is_empty() {
            return Err(InputError::ExtraComma(raw.to_string()));
        }
        names.push(parse_name(&token).map_err(|_| InputError::InvalidCharacters(raw.to_string()))?);
    }
    Ok(names)
}

/// Parses `<name> <duration> [predecessors]`.
pub fn parse_activity_line(line: &str) -> Result<ActivityInput, InputError> {
    let mut parts = line.split_whitespace();
    let name = parts.next().ok_or(InputError::MissingField)?;
    let duration = parts.next().ok_or(InputError::MissingField)?;
    let rest = parts.collect::<Vec<_>>().join(" ");

    Ok(ActivityInput {
        name: parse_name(name)?,
        duration: parse_duration(duration)?,
        predecessors: parse_predecessors(&rest)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_markers_mean_no_predecessors() {
        assert!(parse_predecessors("-").unwrap().is_empty());
        assert!(parse_predecessors("None").unwrap().is_empty());
        assert!(parse_predecessors("  ").unwrap().is_empty());
    }

    #[test]
    fn predecessors_are_trimmed() {
        assert_eq!(parse_predecessors("A, B ,C").unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn extra_comma_is_rejected() {
        assert_eq!(
            parse_predecessors("A,,B"),
            Err(InputError::ExtraComma("A,,B".into()))
        );
        assert!(matches!(parse_predecessors("A,"), Err(InputError::ExtraComma(_))));
    }

    #[test]
    fn punctuation_is_rejected() {
        assert!(matches!(
            parse_predecessors("A;B"),
            Err(InputError::InvalidCharacters(_))
        ));
        assert!(matches!(
            parse_predecessors("A,-"),
            Err(InputError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn names_and_durations() {
        assert_eq!(parse_name(" T1 ").unwrap(), "T1");
        assert!(parse_name("a-b").is_err());
        assert!(parse_name("").is_err());
        assert_eq!(parse_duration("-2").unwrap(), -2);
        assert!(parse_duration("two").is_err());
    }

    #[test]
    fn activity_line_with_and_without_predecessors() {
        assert_eq!(
            parse_activity_line("C 3 A,B").unwrap(),
            ActivityInput::new("C", 3, ["A", "B"])
        );
        assert_eq!(
            parse_activity_line("A 3").unwrap(),
            ActivityInput::new("A", 3, Vec::<String>::new())
        );
        assert_eq!(parse_activity_line("A"), Err(InputError::MissingField));
    }
}
