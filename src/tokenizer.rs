//! # Record Tokenizer
//!
//! Splits a raw blob into records, fields and numbers:
//!
//! ```text
//! blob   := record (';' record)*
//! record := field ('|' field)*
//! field  := value (',' value)*
//! ```
//!
//! Tokens are trimmed of surrounding whitespace so uploads ending in a newline
//! parse cleanly. Blank records at the end of the blob (e.g. from a trailing
//! `;`) are dropped; a blank record anywhere else would shift every later
//! sample in time, so it fails the blob. Any value that is not a finite
//! decimal number fails the whole blob too.

use crate::error::{ParseError, Stage};

/// Separates samples.
pub const RECORD_DELIMITER: char = ';';
/// Separates the triplets inside one sample.
pub const FIELD_DELIMITER: char = '|';
/// Separates the numbers inside one triplet.
pub const VALUE_DELIMITER: char = ',';

/// Values of a single field, e.g. `[x, y, z]`.
pub type Field = Vec<f64>;

/// Fields of a single record.
pub type Record = Vec<Field>;

/// Tokenize `raw` into records of fields of numbers.
///
/// # Errors
/// - [`ParseError::MalformedNumber`] if a token is empty, unparsable or not finite
/// - [`ParseError::MalformedRecord`] if a blank record sits before a non-blank one
/// - [`ParseError::EmptyInput`] if no records remain after dropping the blank tail
///
/// # Example
/// ```
/// use pedometer_lib::tokenizer::tokenize;
///
/// let records = tokenize("1,2,3|0,0,1;4,5,6|0,0,1").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1][0], vec![4.0, 5.0, 6.0]);
/// ```
pub fn tokenize(raw: &str) -> Result<Vec<Record>, ParseError> {
    let segments: Vec<&str> = raw.split(RECORD_DELIMITER).collect();
    let end = segments
        .iter()
        .rposition(|record| !record.trim().is_empty())
        .ok_or(ParseError::EmptyInput)?;

    let records = segments[..=end]
        .iter()
        .enumerate()
        .map(|(index, record)| {
            if record.trim().is_empty() {
                Err(ParseError::MalformedRecord {
                    stage: Stage::Tokenize,
                    record: index,
                    reason: "record is empty".to_string(),
                })
            } else {
                tokenize_record(index, record)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("tokenized {} records", records.len());
    Ok(records)
}

fn tokenize_record(record_index: usize, record: &str) -> Result<Record, ParseError> {
    record
        .split(FIELD_DELIMITER)
        .enumerate()
        .map(|(field_index, field)| {
            field
                .split(VALUE_DELIMITER)
                .map(|token| parse_value(record_index, field_index, token))
                .collect::<Result<Field, _>>()
        })
        .collect()
}

fn parse_value(record: usize, field: usize, token: &str) -> Result<f64, ParseError> {
    let trimmed = token.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::MalformedNumber {
            record,
            field,
            token: trimmed.to_string(),
        }),
    }
}
