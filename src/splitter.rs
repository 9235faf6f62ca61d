//! # Format Detection and Channel Splitting
//!
//! Two wire formats exist, told apart by the field count of the first record:
//!
//! | Format          | Fields per record | Content                                   |
//! |-----------------|-------------------|-------------------------------------------|
//! | Accelerometer   | 1                 | total acceleration `x,y,z`                |
//! | Gravity         | 2 or more         | user `x,y,z` first, gravity `x,y,z` last  |
//!
//! Both strategies produce the same [`Channels`]: three user-acceleration
//! axis series and three gravity axis series, all of length N.
//!
//! The Accelerometer strategy derives gravity itself by low-pass filtering
//! each total-acceleration axis with [`GRAVITY_COEFFICIENTS`], then defines
//! user acceleration as total minus gravity. The Gravity strategy takes both
//! triplets as given.

use crate::error::{ParseError, Stage};
use crate::filter::{filter, GRAVITY_COEFFICIENTS};
use crate::tokenizer::{Field, Record};
use crate::Format;

/// Ordered per-axis values across all samples.
pub type AxisSeries = Vec<f64>;

/// User and gravity acceleration, one series per axis (`[x, y, z]`).
#[derive(Clone, Debug, PartialEq)]
pub struct Channels {
    /// User (motion) acceleration series
    pub user: [AxisSeries; 3],
    /// Gravity component series
    pub gravity: [AxisSeries; 3],
}

/// Strategy that turns tokenized records into [`Channels`].
pub trait Splitter {
    /// Split `records` into user and gravity channels.
    fn split(&self, records: &[Record]) -> Result<Channels, ParseError>;
}

/// Decide the wire format from the first record.
///
/// Returns `None` when there are no records.
pub fn detect_format(records: &[Record]) -> Option<Format> {
    records.first().map(|first| {
        if first.len() == 1 {
            Format::Accelerometer
        } else {
            Format::Gravity
        }
    })
}

/// Splits total acceleration into gravity and user components.
#[derive(Clone, Copy, Debug)]
pub struct AccelerometerSplitter {
    /// Reject records that carry more than one field
    pub strict_shape: bool,
}

impl Splitter for AccelerometerSplitter {
    fn split(&self, records: &[Record]) -> Result<Channels, ParseError> {
        let mut ignored = 0usize;
        let mut totals = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if record.len() != 1 {
                if self.strict_shape {
                    return Err(ParseError::MalformedRecord {
                        stage: Stage::Split,
                        record: index,
                        reason: format!(
                            "accelerometer records hold exactly 1 field, found {}",
                            record.len()
                        ),
                    });
                }
                ignored += 1;
            }
            let first = record.first().ok_or_else(|| ParseError::MalformedRecord {
                stage: Stage::Split,
                record: index,
                reason: "record has no fields".to_string(),
            })?;
            totals.push(triplet(index, first)?);
        }

        if ignored > 0 {
            log::warn!("ignored extra fields in {ignored} accelerometer records");
        }

        let total = transpose(&totals);
        let gravity = [0, 1, 2].map(|axis| filter(&GRAVITY_COEFFICIENTS, &total[axis]));
        let user: [AxisSeries; 3] = [0, 1, 2].map(|axis| {
            total[axis]
                .iter()
                .zip(&gravity[axis])
                .map(|(t, g)| t - g)
                .collect()
        });

        Ok(Channels { user, gravity })
    }
}

/// Reads pre-split user and gravity triplets.
#[derive(Clone, Copy, Debug, Default)]
pub struct GravitySplitter;

impl Splitter for GravitySplitter {
    fn split(&self, records: &[Record]) -> Result<Channels, ParseError> {
        let mut users = Vec::with_capacity(records.len());
        let mut gravities = Vec::with_capacity(records.len());
        let mut extra = 0usize;

        for (index, record) in records.iter().enumerate() {
            let (first, last) = match (record.first(), record.last()) {
                (Some(first), Some(last)) if record.len() >= 2 => (first, last),
                _ => {
                    return Err(ParseError::MalformedRecord {
                        stage: Stage::Split,
                        record: index,
                        reason: format!(
                            "gravity records hold a user and a gravity field, found {} field(s)",
                            record.len()
                        ),
                    })
                }
            };
            if record.len() > 2 {
                extra += 1;
            }
            users.push(triplet(index, first)?);
            gravities.push(triplet(index, last)?);
        }

        if extra > 0 {
            log::warn!("{extra} gravity records carry more than two fields; middle fields ignored");
        }

        Ok(Channels {
            user: transpose(&users),
            gravity: transpose(&gravities),
        })
    }
}

/// Run the strategy that matches `format`.
pub fn split(format: Format, records: &[Record], strict_shape: bool) -> Result<Channels, ParseError> {
    match format {
        Format::Accelerometer => AccelerometerSplitter { strict_shape }.split(records),
        Format::Gravity => GravitySplitter.split(records),
    }
}

fn triplet(record: usize, field: &Field) -> Result<[f64; 3], ParseError> {
    match field.as_slice() {
        &[x, y, z] => Ok([x, y, z]),
        values => Err(ParseError::MalformedRecord {
            stage: Stage::Split,
            record,
            reason: format!("expected 3 values per field, found {}", values.len()),
        }),
    }
}

fn transpose(triplets: &[[f64; 3]]) -> [AxisSeries; 3] {
    [0, 1, 2].map(|axis| triplets.iter().map(|t| t[axis]).collect())
}
