//! # Pipeline Errors
//!
//! Every failure the pipeline can report is a [`ParseError`]. Failures abort
//! construction of a [`Parser`](crate::parser::Parser) entirely; there is no
//! partially-built result to inspect afterwards.
//!
//! Most variants originate in the size guard, the tokenizer, the format
//! splitters or the sample assembler. The projection and smoothing stages
//! only fail when finite inputs overflow `f64`. [`ParseError::stage`] tells
//! them apart.

use std::fmt;
use thiserror::Error;

/// Pipeline stage that produced a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Input size check performed before any parsing
    Guard,
    /// Splitting raw text into records, fields and numbers
    Tokenize,
    /// Turning tokenized fields into user/gravity channels
    Split,
    /// Zipping the six channels into samples
    Assemble,
    /// Dot product and smoothing of the samples
    Project,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Guard => "guard",
            Stage::Tokenize => "tokenize",
            Stage::Split => "split",
            Stage::Assemble => "assemble",
            Stage::Project => "project",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while turning a raw blob into a filtered series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input contained no records at all
    #[error("tokenize: input contains no records")]
    EmptyInput,

    /// A record is blank or does not have the shape its format requires
    #[error("{stage}: record {record} is malformed: {reason}")]
    MalformedRecord {
        stage: Stage,
        record: usize,
        reason: String,
    },

    /// A value token is not a finite decimal number
    #[error("tokenize: record {record}, field {field}: {token:?} is not a finite number")]
    MalformedNumber {
        record: usize,
        field: usize,
        token: String,
    },

    /// The six axis channels disagree on their length
    #[error("assemble: channel length mismatch (expected {expected}, found {found})")]
    ChannelLengthMismatch { expected: usize, found: usize },

    /// Projecting or smoothing overflowed to a non-finite value
    #[error("project: sample {sample} overflows to a non-finite value")]
    NonFinite { sample: usize },

    /// The input exceeds the configured size cap
    #[error("guard: input is {len} bytes, limit is {max}")]
    InputTooLarge { len: usize, max: usize },
}

impl ParseError {
    /// The stage that raised this error.
    pub fn stage(&self) -> Stage {
        match self {
            ParseError::InputTooLarge { .. } => Stage::Guard,
            ParseError::EmptyInput | ParseError::MalformedNumber { .. } => Stage::Tokenize,
            ParseError::MalformedRecord { stage, .. } => *stage,
            ParseError::ChannelLengthMismatch { .. } => Stage::Assemble,
            ParseError::NonFinite { .. } => Stage::Project,
        }
    }
}
