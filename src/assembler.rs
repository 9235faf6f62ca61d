//! # Sample Assembler
//!
//! Zips the six axis channels positionally into [`Sample`]s.

use crate::error::ParseError;
use crate::splitter::Channels;
use crate::Sample;

/// Build one [`Sample`] per index of the channel series.
///
/// # Errors
/// [`ParseError::ChannelLengthMismatch`] if the six series differ in length.
/// The splitters never produce such channels; the check guards hand-built
/// [`Channels`].
pub fn assemble(channels: &Channels) -> Result<Vec<Sample>, ParseError> {
    let [x, y, z] = &channels.user;
    let [xg, yg, zg] = &channels.gravity;

    let expected = x.len();
    for series in [y, z, xg, yg, zg] {
        if series.len() != expected {
            return Err(ParseError::ChannelLengthMismatch {
                expected,
                found: series.len(),
            });
        }
    }

    Ok((0..expected)
        .map(|i| Sample {
            x: x[i],
            y: y[i],
            z: z[i],
            xg: xg[i],
            yg: yg[i],
            zg: zg[i],
        })
        .collect())
}
