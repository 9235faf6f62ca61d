//! # Pipeline Orchestrator
//!
//! [`Parser`] drives the whole pipeline at construction time and afterwards
//! only hands out read-only views of what it computed:
//!
//! ```text
//! raw text ─► tokenize ─► detect format ─► split ─► assemble ─► project ─► smooth
//! ```
//!
//! Construction is all-or-nothing. Any stage error is returned to the caller
//! and no `Parser` is produced.
//!
//! Instances are independent of each other; the filter coefficients are
//! shared constants, so blobs may be parsed on as many threads as the caller
//! likes.

use crate::assembler::assemble;
use crate::config::{ParserConfig, PipelineConfig};
use crate::error::ParseError;
use crate::filter::{filter, SMOOTHING_COEFFICIENTS};
use crate::projector::project;
use crate::splitter::{detect_format, split};
use crate::tokenizer::tokenize;
use crate::{Format, Sample};
use std::str::FromStr;

/// Immutable result of running a blob through the pipeline.
///
/// # Example
/// ```
/// use pedometer_lib::{Format, Parser};
///
/// let parser = Parser::new("0.1,0,0|0,0,-1;0,0,0.5|0,0,-1").unwrap();
/// assert_eq!(parser.format(), Format::Gravity);
/// assert!(!parser.is_accelerometer());
/// assert_eq!(parser.dot_product_series(), &[0.0, -0.5]);
/// ```
#[derive(Clone, Debug)]
pub struct Parser {
    raw: String,
    format: Format,
    samples: Vec<Sample>,
    dot_product: Vec<f64>,
    filtered: Vec<f64>,
}

impl Parser {
    /// Parse `raw` with the default configuration.
    pub fn new(raw: impl Into<String>) -> Result<Self, ParseError> {
        Self::with_config(raw, &PipelineConfig::default())
    }

    /// Parse `raw` using the parser options from `config`.
    pub fn with_config(raw: impl Into<String>, config: &PipelineConfig) -> Result<Self, ParseError> {
        let raw = raw.into();
        let options: &ParserConfig = &config.parser;

        if let Some(max) = options.max_input_bytes {
            if raw.len() > max {
                return Err(ParseError::InputTooLarge {
                    len: raw.len(),
                    max,
                });
            }
        }

        let records = tokenize(&raw)?;
        let format = detect_format(&records).ok_or(ParseError::EmptyInput)?;
        log::debug!("detected {format} format over {} records", records.len());

        let channels = split(format, &records, options.strict_shape)?;
        let samples = assemble(&channels)?;
        let dot_product = project(&samples);
        let filtered = filter(&SMOOTHING_COEFFICIENTS, &dot_product);

        // Finite inputs near f64::MAX can still overflow the products
        if let Some(sample) = dot_product
            .iter()
            .zip(&filtered)
            .position(|(d, f)| !d.is_finite() || !f.is_finite())
        {
            return Err(ParseError::NonFinite { sample });
        }

        Ok(Parser {
            raw,
            format,
            samples,
            dot_product,
            filtered,
        })
    }

    /// The text this parser was built from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Wire format detected from the first record.
    pub fn format(&self) -> Format {
        self.format
    }

    /// True when the blob carried raw accelerometer triplets.
    pub fn is_accelerometer(&self) -> bool {
        self.format == Format::Accelerometer
    }

    /// Per-sample user and gravity acceleration.
    pub fn parsed_samples(&self) -> &[Sample] {
        &self.samples
    }

    /// User acceleration projected onto gravity, before smoothing.
    pub fn dot_product_series(&self) -> &[f64] {
        &self.dot_product
    }

    /// Smoothed projection; the signal handed to step detection.
    pub fn filtered_series(&self) -> &[f64] {
        &self.filtered
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a successfully built parser.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl FromStr for Parser {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stage;

    #[test]
    fn test_accelerometer_lengths_align() {
        let parser = Parser::new("1,2,3;4,5,6;7,8,9;1,1,1;0,0,9.8").unwrap();
        assert_eq!(parser.len(), 5);
        assert_eq!(parser.parsed_samples().len(), 5);
        assert_eq!(parser.dot_product_series().len(), 5);
        assert_eq!(parser.filtered_series().len(), 5);
        assert!(parser.is_accelerometer());
    }

    #[test]
    fn test_dot_product_matches_samples() {
        let parser = Parser::new("1,2,3|0,0,1;0,1,0|0,1,0;2,0,0|1,0,0").unwrap();
        let expected: Vec<f64> = parser.parsed_samples().iter().map(Sample::dot).collect();
        assert_eq!(parser.dot_product_series(), expected.as_slice());
        assert_eq!(parser.dot_product_series(), &[3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_filtered_is_smoothed_dot_product() {
        let parser = Parser::new("1,2,3|0,0,1;0,1,0|0,1,0;2,0,0|1,0,0;1,1,1|1,1,1").unwrap();
        let expected = filter(&SMOOTHING_COEFFICIENTS, parser.dot_product_series());
        assert_eq!(parser.filtered_series(), expected.as_slice());
        assert_eq!(parser.filtered_series()[0], 0.0);
        assert_eq!(parser.filtered_series()[1], 0.0);
    }

    #[test]
    fn test_single_record_keeps_alignment() {
        let parser = Parser::new("1,2,3").unwrap();
        assert_eq!(parser.len(), 1);
        assert_eq!(parser.parsed_samples().len(), 1);
        assert_eq!(parser.dot_product_series().len(), 1);
        assert_eq!(parser.filtered_series(), &[0.0]);

        let parser = Parser::new("1,2,3|0,0,1").unwrap();
        assert_eq!(parser.dot_product_series(), &[3.0]);
        assert_eq!(parser.filtered_series(), &[0.0]);
    }

    #[test]
    fn test_interior_blank_record_fails() {
        for blob in ["1,1,1;;2,2,2", "1,0,0|0,0,1; ;0,1,0|0,1,0"] {
            let err = Parser::new(blob).unwrap_err();
            assert!(
                matches!(err, ParseError::MalformedRecord { record: 1, .. }),
                "{blob:?} gave {err}"
            );
            assert_eq!(err.stage(), Stage::Tokenize);
        }
        let err = Parser::new("1,1,1;;1,x,1").unwrap_err();
        assert!(matches!(err, ParseError::MalformedRecord { record: 1, .. }));
        let err = Parser::new("1,1,1;2,2,2;1,x,1").unwrap_err();
        assert!(matches!(err, ParseError::MalformedNumber { record: 2, .. }));
    }

    #[test]
    fn test_overflowing_projection_is_rejected() {
        let huge = f64::MAX / 2.0;
        let blob = format!("{huge},{huge},{huge}|{huge},{huge},{huge};1,1,1|1,1,1");
        let err = Parser::new(blob).unwrap_err();
        assert_eq!(err, ParseError::NonFinite { sample: 0 });
        assert_eq!(err.stage(), Stage::Project);
    }

    #[test]
    fn test_raw_is_retained() {
        let raw = "1,1,1;2,2,2";
        let parser: Parser = raw.parse().unwrap();
        assert_eq!(parser.raw(), raw);
    }

    #[test]
    fn test_errors_abort_construction() {
        assert_eq!(Parser::new("").unwrap_err(), ParseError::EmptyInput);
        assert_eq!(Parser::new("1,2;3,4").unwrap_err().stage(), Stage::Split);
        assert_eq!(Parser::new("1,a,3").unwrap_err().stage(), Stage::Tokenize);
        assert_eq!(
            Parser::new("1,2,3|0,0,1;1,2,3").unwrap_err().stage(),
            Stage::Split
        );
    }

    #[test]
    fn test_input_size_cap() {
        let mut config = PipelineConfig::default();
        config.parser.max_input_bytes = Some(8);
        let err = Parser::with_config("1,1,1;2,2,2", &config).unwrap_err();
        assert_eq!(err, ParseError::InputTooLarge { len: 11, max: 8 });
        assert!(Parser::with_config("1,1,1", &config).is_ok());
    }

    #[test]
    fn test_lenient_shape() {
        let mut config = PipelineConfig::default();
        config.parser.strict_shape = false;
        assert!(Parser::new("1,1,1;2,2,2|0,0,1").is_err());
        let parser = Parser::with_config("1,1,1;2,2,2|0,0,1", &config).unwrap();
        assert_eq!(parser.len(), 2);
    }
}
