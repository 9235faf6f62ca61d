//! # Serializable Pipeline Report
//!
//! A plain-data snapshot of a [`Parser`] for handing results to collaborators
//! outside the process (step counters, plotting tools, storage). The core
//! itself mandates no wire format; the binary emits this as JSON.

use crate::{Format, Parser, Sample};
use serde::{Deserialize, Serialize};

/// Owned copy of everything a [`Parser`] exposes, minus the raw text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Detected wire format
    pub format: Format,
    /// Per-sample user and gravity acceleration
    pub samples: Vec<Sample>,
    /// Projection of user acceleration onto gravity
    pub dot_product: Vec<f64>,
    /// Smoothed projection
    pub filtered: Vec<f64>,
}

impl From<&Parser> for Report {
    fn from(parser: &Parser) -> Self {
        Report {
            format: parser.format(),
            samples: parser.parsed_samples().to_vec(),
            dot_product: parser.dot_product_series().to_vec(),
            filtered: parser.filtered_series().to_vec(),
        }
    }
}

impl Report {
    /// Render as JSON, optionally pretty-printed.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
