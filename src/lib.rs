//! # Pedometer Signal Core Library
//!
//! This library turns a delimited text blob of 3-axis motion-sensor samples
//! into a smoothed scalar signal that a step detector can consume.
//!
//! ## Pipeline
//!
//! 1. **Tokenize**: split the blob into records (`;`), fields (`|`) and
//!    numbers (`,`)
//! 2. **Detect format**: one field per record means raw accelerometer data,
//!    two or more means the device already separated user and gravity
//!    acceleration
//! 3. **Split**: produce user and gravity series per axis; raw accelerometer
//!    data is low-pass filtered to estimate gravity
//! 4. **Assemble**: zip the six series into [`Sample`]s
//! 5. **Project**: dot product of user acceleration onto gravity per sample
//! 6. **Smooth**: run the projected series through a Chebyshev II biquad
//!
//! Everything is computed once, eagerly, by [`Parser::new`]. A parser that
//! exists is complete; a blob that fails any stage yields a [`ParseError`]
//! and nothing else.
//!
//! ## Core Types
//! - [`Sample`]: user and gravity acceleration for one time step
//! - [`Format`]: which wire format the blob used
//! - [`Parser`]: the immutable bundle of derived series
//!
//! # Example
//! ```
//! use pedometer_lib::{Format, Parser};
//!
//! let parser = Parser::new("1,1,1;1,1,1;1,1,1;1,1,1").unwrap();
//! assert_eq!(parser.format(), Format::Accelerometer);
//! assert_eq!(parser.filtered_series().len(), 4);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// Module declarations
pub mod assembler;
pub mod config;
pub mod error;
pub mod filter;
pub mod logger;
pub mod parser;
pub mod projector;
pub mod renderer;
pub mod report;
pub mod splitter;
pub mod tokenizer;

pub use error::{ParseError, Stage};
pub use parser::Parser;

/// User acceleration and gravity component at one time step.
///
/// Index `i` of the sample sequence corresponds to record `i` of the blob.
///
/// # Example
/// ```
/// use pedometer_lib::Sample;
///
/// let still = Sample { x: 0.0, y: 0.0, z: 0.0, xg: 0.0, yg: 0.0, zg: -1.0 };
/// assert_eq!(still.dot(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// User acceleration, x axis
    pub x: f64,
    /// User acceleration, y axis
    pub y: f64,
    /// User acceleration, z axis
    pub z: f64,
    /// Gravity component, x axis
    pub xg: f64,
    /// Gravity component, y axis
    pub yg: f64,
    /// Gravity component, z axis
    pub zg: f64,
}

impl Sample {
    /// Dot product of user acceleration and gravity.
    pub fn dot(&self) -> f64 {
        self.x * self.xg + self.y * self.yg + self.z * self.zg
    }
}

/// Wire format of an input blob.
///
/// Serialized and displayed as the lowercase tags `accelerometer` and
/// `gravity`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One total-acceleration triplet per record
    Accelerometer,
    /// Pre-split user and gravity triplets per record
    Gravity,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Accelerometer => f.write_str("accelerometer"),
            Format::Gravity => f.write_str("gravity"),
        }
    }
}
